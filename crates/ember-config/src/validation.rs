//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod mesh;


use crate::schema::EmberConfig;
use ember_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EmberConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    mesh::validate_mesh(&mut errors, config);
    mesh::validate_spheres(&mut errors, config);
    mesh::validate_cube(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
