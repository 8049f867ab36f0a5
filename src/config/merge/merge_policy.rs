//! Merge rules: defaults, override order, conflict handling.

use crate::config::DEFAULT_BASE_URL;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("api.timeout_secs", 30)?
        .set_default("api.connect_timeout_secs", 10)?
        .set_default("output.json", false)?
        .set_default("output.color", true)
}
