use anyhow::{Context, Result};
use config::{Config, Environment, File};
use std::path::Path;
use tracing::debug;

use crate::api::config::ApiConfig;

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "INVESTGUARD";

/// Loads the API configuration
///
/// Sources, lowest precedence first: built-in defaults, the optional TOML
/// file at `path`, then `INVESTGUARD__<FIELD>` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<ApiConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        debug!("Reading configuration file {}", path.display());
        builder = builder.add_source(File::from(path).required(false));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let settings = builder.build().context("Failed to read configuration")?;
    settings
        .try_deserialize::<ApiConfig>()
        .context("Invalid configuration")
}
