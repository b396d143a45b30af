//! Reading config files, and creating the documented default on first run.

use std::path::{Path, PathBuf};

use crate::schema::EmberConfig;
use crate::validation;
use ember_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Load and validate config from a specific TOML file path.
///
/// Missing fields take their defaults. Out-of-range values are reported as
/// `ConfigError::ValidationError`; nothing is generated from a bad file.
pub fn load_from_path(path: &Path) -> Result<EmberConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: EmberConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/ember/config.toml`
/// On Linux: `~/.config/ember/config.toml`
///
/// A missing file is created from the documented template and the defaults
/// are returned.
pub fn load_default() -> Result<EmberConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(EmberConfig::default());
    }

    load_from_path(&path)
}

/// `<platform config dir>/ember/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("ember").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the documented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |e: std::io::Error| ConfigError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_error)?;

    info!("created default config at {}", path.display());
    Ok(())
}
