//! Configuration schema types for ember.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod mesh;
mod system;

pub use mesh::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for ember.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmberConfig {
    pub mesh: MeshConfig,
    pub spheres: Vec<SphereConfig>,
    pub cube: CubeConfig,
    pub backdrop: BackdropConfig,
    pub logging: LoggingConfig,
}

impl Default for EmberConfig {
    fn default() -> Self {
        Self {
            mesh: MeshConfig::default(),
            spheres: default_spheres(),
            cube: CubeConfig::default(),
            backdrop: BackdropConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
