//! ember configuration system.
//!
//! TOML-based configuration for the fire-orb mesh generator. All sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ember_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    BackdropConfig, CubeConfig, EmberConfig, LogLevel, LoggingConfig, MeshConfig, SphereConfig,
    CONFIG_SCHEMA_VERSION,
};

use ember_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a documented config file created on first run.
/// An explicit path must exist. Either way an invalid file is an error.
pub fn load_config(path: Option<&Path>) -> Result<EmberConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EmberConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
