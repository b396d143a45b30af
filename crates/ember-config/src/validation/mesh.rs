//! Mesh and scene validation (depth, sphere list, cube).

use std::collections::HashSet;

use crate::schema::EmberConfig;

use super::helpers::{validate_positive, validate_range};

/// Interactive subdivision range.
pub(crate) const SUBDIVISIONS_MIN: i64 = 0;
pub(crate) const SUBDIVISIONS_MAX: i64 = 8;

pub(crate) fn validate_mesh(errors: &mut Vec<String>, config: &EmberConfig) {
    validate_range(
        errors,
        "mesh.subdivisions",
        config.mesh.subdivisions,
        SUBDIVISIONS_MIN,
        SUBDIVISIONS_MAX,
    );
}

pub(crate) fn validate_spheres(errors: &mut Vec<String>, config: &EmberConfig) {
    let mut seen = HashSet::new();
    for (i, sphere) in config.spheres.iter().enumerate() {
        if sphere.name.trim().is_empty() {
            errors.push(format!("spheres[{i}].name must not be empty"));
        } else if !seen.insert(sphere.name.as_str()) {
            errors.push(format!("spheres[{i}].name '{}' is duplicated", sphere.name));
        }
        validate_positive(errors, &format!("spheres[{i}].radius"), sphere.radius);
    }
}

pub(crate) fn validate_cube(errors: &mut Vec<String>, config: &EmberConfig) {
    if config.cube.enabled {
        validate_positive(errors, "cube.half_extent", config.cube.half_extent);
    }
}
