//! Mesh generation settings: subdivision depth, seed and scene contents.

use ember_common::Point3;
use serde::{Deserialize, Serialize};

/// Icosphere tessellation settings shared by every sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Subdivision depth (valid range: 0-8). Signed so that a negative
    /// value reaches validation instead of failing to parse.
    pub subdivisions: i64,
    /// Fixed random seed; absent means a fresh seed on every run.
    pub seed: Option<u64>,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            subdivisions: 5,
            seed: None,
        }
    }
}

/// One icosphere in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SphereConfig {
    pub name: String,
    pub radius: f32,
    #[serde(default)]
    pub center: Point3,
}

impl SphereConfig {
    pub fn new(name: &str, radius: f32) -> Self {
        Self {
            name: name.into(),
            radius,
            center: Point3::ORIGIN,
        }
    }
}

/// The fire orb: an outer shell and three nested cores.
pub fn default_spheres() -> Vec<SphereConfig> {
    vec![
        SphereConfig::new("shell", 1.0),
        SphereConfig::new("core_outer", 0.7),
        SphereConfig::new("core_middle", 0.5),
        SphereConfig::new("core_inner", 0.3),
    ]
}

/// Surrounding textured cube.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub enabled: bool,
    pub half_extent: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            half_extent: 40.0,
        }
    }
}

/// Full-screen backdrop quad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub enabled: bool,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
