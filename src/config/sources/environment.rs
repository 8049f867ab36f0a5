//! Environment sources: `DOCLI__SECTION__KEY` overrides, `DIGITALOCEAN_TOKEN`
//! and `NO_COLOR`.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

pub const ENV_PREFIX: &str = "DOCLI";
pub const TOKEN_VAR: &str = "DIGITALOCEAN_TOKEN";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    if let Some(token) = std::env::var(TOKEN_VAR).ok().filter(|t| !t.trim().is_empty()) {
        builder = builder.set_override("api.token", token)?;
    }
    if std::env::var_os(NO_COLOR_VAR).is_some() {
        builder = builder.set_override("output.color", false)?;
    }
    Ok(builder)
}
