//! Turns the loaded config plus command-line overrides into a scene request.

use ember_common::{Point3, Result};
use ember_config::{validation, EmberConfig};
use ember_geometry::{SceneSpec, SphereSpec, Subdivisions};

use crate::cli::Args;

/// Name of the mesh produced by `--radius` / `--center`.
pub const SINGLE_SPHERE_NAME: &str = "sphere";

/// Build the scene request. Command-line values win over the config and are
/// held to the same validation rules.
pub fn scene_spec(config: &EmberConfig, args: &Args) -> Result<SceneSpec> {
    let mut config = config.clone();
    if let Some(depth) = args.subdivisions {
        config.mesh.subdivisions = depth;
    }
    if let Some(seed) = args.seed {
        config.mesh.seed = Some(seed);
    }
    validation::validate(&config)?;

    let subdivisions = Subdivisions::try_from(config.mesh.subdivisions)?;
    let seed = config.mesh.seed;

    if args.single_sphere() {
        return Ok(SceneSpec {
            subdivisions,
            seed,
            spheres: vec![SphereSpec {
                name: SINGLE_SPHERE_NAME.into(),
                center: args.center.unwrap_or(Point3::ORIGIN),
                radius: args.radius.unwrap_or(1.0),
            }],
            cube_half_extent: None,
            backdrop: false,
        });
    }

    let spheres = config
        .spheres
        .iter()
        .map(|s| SphereSpec {
            name: s.name.clone(),
            center: s.center,
            radius: s.radius,
        })
        .collect();

    Ok(SceneSpec {
        subdivisions,
        seed,
        spheres,
        cube_half_extent: config.cube.enabled.then_some(config.cube.half_extent),
        backdrop: config.backdrop.enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ember_common::{ConfigError, EmberError};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ember").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn default_config_gives_fire_scene() {
        let spec = scene_spec(&EmberConfig::default(), &args(&[])).unwrap();
        assert_eq!(spec.subdivisions, Subdivisions::new(5));
        assert_eq!(spec.seed, None);
        assert_eq!(spec.spheres.len(), 4);
        assert_eq!(spec.spheres[0].name, "shell");
        assert_eq!(spec.spheres[3].radius, 0.3);
        assert_eq!(spec.cube_half_extent, Some(40.0));
        assert!(spec.backdrop);
    }

    #[test]
    fn command_line_overrides_config() {
        let mut config = EmberConfig::default();
        config.mesh.seed = Some(1);
        let spec = scene_spec(&config, &args(&["-s", "2", "--seed", "8"])).unwrap();
        assert_eq!(spec.subdivisions, Subdivisions::new(2));
        assert_eq!(spec.seed, Some(8));
    }

    #[test]
    fn config_seed_used_without_override() {
        let mut config = EmberConfig::default();
        config.mesh.seed = Some(11);
        let spec = scene_spec(&config, &args(&[])).unwrap();
        assert_eq!(spec.seed, Some(11));
    }

    #[test]
    fn negative_subdivisions_rejected() {
        let err = scene_spec(&EmberConfig::default(), &args(&["-s", "-3"])).unwrap_err();
        assert!(
            matches!(err, EmberError::Config(ConfigError::ValidationError(ref m)) if m.contains("-3")),
            "{err}"
        );
    }

    #[test]
    fn depth_above_range_rejected_like_config() {
        let err = scene_spec(&EmberConfig::default(), &args(&["-s", "9"])).unwrap_err();
        assert!(
            matches!(err, EmberError::Config(ConfigError::ValidationError(ref m))
                if m.contains("mesh.subdivisions = 9")),
            "{err}"
        );
        assert!(scene_spec(&EmberConfig::default(), &args(&["-s", "8"])).is_ok());
    }

    #[test]
    fn radius_selects_single_sphere() {
        let spec = scene_spec(&EmberConfig::default(), &args(&["-r", "2"])).unwrap();
        assert_eq!(spec.spheres.len(), 1);
        assert_eq!(spec.spheres[0].name, SINGLE_SPHERE_NAME);
        assert_eq!(spec.spheres[0].radius, 2.0);
        assert_eq!(spec.spheres[0].center, Point3::ORIGIN);
        assert_eq!(spec.cube_half_extent, None);
        assert!(!spec.backdrop);
    }

    #[test]
    fn center_alone_uses_unit_radius() {
        let spec = scene_spec(&EmberConfig::default(), &args(&["--center", "1,2,3"])).unwrap();
        assert_eq!(spec.spheres[0].radius, 1.0);
        assert_eq!(spec.spheres[0].center, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn disabled_cube_and_backdrop_are_omitted() {
        let mut config = EmberConfig::default();
        config.cube.enabled = false;
        config.backdrop.enabled = false;
        let spec = scene_spec(&config, &args(&[])).unwrap();
        assert_eq!(spec.cube_half_extent, None);
        assert!(!spec.backdrop);
    }
}
