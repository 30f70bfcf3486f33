//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::PluginConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load a plugin descriptor from a TOML file.
pub fn load_config(path: &Path) -> Result<PluginConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_config_str(&content)?;

    tracing::debug!(
        path = ?path,
        url = %config.url,
        enable = config.enable,
        "Plugin config loaded"
    );
    Ok(config)
}

/// Parse a plugin descriptor from TOML text.
pub fn load_config_str(content: &str) -> Result<PluginConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}
