//! Loader facade: assembles the sources in precedence order.

use super::merge::merge_policy;
use super::sources::{environment, global_file};
use super::DocliConfig;
use crate::error::ApiError;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, then the explicit file if given (otherwise the global
    /// file), then the environment.
    pub fn load(explicit: Option<&Path>) -> Result<DocliConfig, ApiError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ApiError::ConfigError(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                global_file::add_file(builder, path, true)
            }
            None => global_file::add_to_builder(builder)?,
        };
        builder = environment::add_to_builder(builder)?;

        let config: DocliConfig = builder.build()?.try_deserialize()?;
        debug!(base_url = %config.api.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Load defaults plus one file, ignoring the environment.
    pub fn load_from_file(path: &Path) -> Result<DocliConfig, ApiError> {
        let builder = global_file::add_file(merge_policy::builder_with_defaults()?, path, true);
        Ok(builder.build()?.try_deserialize()?)
    }
}
