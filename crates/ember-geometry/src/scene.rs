//! The fire-orb scene: nested icospheres plus the surrounding cube and the
//! backdrop quad.
//!
//! Every sphere gets its own random stream derived from the scene seed and
//! its position in the list, so spheres never share perturbations and a
//! fixed seed reproduces the whole scene.

use ember_common::{MeshError, Point3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::backdrop::generate_backdrop;
use crate::cube::{generate_cube, TexturedMesh};
use crate::icosphere::Icosphere;
use crate::types::{Mesh, Subdivisions};

/// Odd 64-bit constant used to spread per-sphere seeds apart.
const STREAM_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// One sphere of the scene, before generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereSpec {
    pub name: String,
    pub center: Point3,
    pub radius: f32,
}

/// Everything needed to build a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSpec {
    pub subdivisions: Subdivisions,
    /// `None` draws a seed from entropy once per scene.
    pub seed: Option<u64>,
    pub spheres: Vec<SphereSpec>,
    /// Half edge length of the surrounding cube; `None` omits it.
    pub cube_half_extent: Option<f32>,
    pub backdrop: bool,
}

/// A generated sphere and the parameters it came from.
#[derive(Debug, Clone)]
pub struct SceneSphere {
    pub name: String,
    pub shape: Icosphere,
    pub mesh: Mesh,
}

/// All generated meshes of a scene.
#[derive(Debug, Clone)]
pub struct Scene {
    seed: u64,
    subdivisions: Subdivisions,
    spheres: Vec<SceneSphere>,
    cube: Option<TexturedMesh>,
    backdrop: Option<Mesh>,
}

impl Scene {
    pub fn build(spec: &SceneSpec) -> Result<Self, MeshError> {
        let seed = spec.seed.unwrap_or_else(rand::random::<u64>);

        let shapes = spec
            .spheres
            .iter()
            .map(|s| -> Result<_, MeshError> {
                let shape = Icosphere::new(s.center, s.radius, spec.subdivisions)?;
                Ok((s.name.clone(), shape))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let spheres = generate_spheres(seed, shapes)?;

        let cube = spec.cube_half_extent.map(generate_cube).transpose()?;
        let backdrop = spec.backdrop.then(generate_backdrop);

        info!(
            spheres = spheres.len(),
            subdivisions = spec.subdivisions.get(),
            seed,
            "scene built"
        );

        Ok(Self {
            seed,
            subdivisions: spec.subdivisions,
            spheres,
            cube,
            backdrop,
        })
    }

    /// Regenerate every sphere at a new depth.
    ///
    /// Does nothing and returns `false` when the depth is unchanged. On error
    /// the scene keeps its previous meshes.
    pub fn set_subdivisions(
        &mut self,
        subdivisions: impl Into<Subdivisions>,
    ) -> Result<bool, MeshError> {
        let subdivisions = subdivisions.into();
        if subdivisions == self.subdivisions {
            return Ok(false);
        }

        let shapes = self
            .spheres
            .iter()
            .map(|s| (s.name.clone(), s.shape.with_subdivisions(subdivisions)))
            .collect();
        self.spheres = generate_spheres(self.seed, shapes)?;

        debug!(
            from = self.subdivisions.get(),
            to = subdivisions.get(),
            "scene regenerated"
        );
        self.subdivisions = subdivisions;
        Ok(true)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn subdivisions(&self) -> Subdivisions {
        self.subdivisions
    }

    pub fn spheres(&self) -> &[SceneSphere] {
        &self.spheres
    }

    pub fn sphere(&self, name: &str) -> Option<&SceneSphere> {
        self.spheres.iter().find(|s| s.name == name)
    }

    pub fn cube(&self) -> Option<&TexturedMesh> {
        self.cube.as_ref()
    }

    pub fn backdrop(&self) -> Option<&Mesh> {
        self.backdrop.as_ref()
    }

    /// Every mesh in draw order (backdrop, cube, spheres) with its name.
    pub fn meshes(&self) -> impl Iterator<Item = (&str, &Mesh)> + '_ {
        self.backdrop
            .iter()
            .map(|m| ("backdrop", m))
            .chain(self.cube.iter().map(|c| ("cube", &c.mesh)))
            .chain(self.spheres.iter().map(|s| (s.name.as_str(), &s.mesh)))
    }
}

fn sphere_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add((index as u64).wrapping_mul(STREAM_STRIDE)))
}

fn generate_spheres(
    seed: u64,
    shapes: Vec<(String, Icosphere)>,
) -> Result<Vec<SceneSphere>, MeshError> {
    shapes
        .into_iter()
        .enumerate()
        .map(|(i, (name, shape))| -> Result<_, MeshError> {
            let mesh = shape.generate_with(&mut sphere_rng(seed, i))?;
            Ok(SceneSphere { name, shape, mesh })
        })
        .collect()
}
