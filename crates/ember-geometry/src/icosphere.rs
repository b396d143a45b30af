//! Icosphere generation.
//!
//! Builds a perturbed icosahedron, subdivides it `subdivisions` times with
//! shared edge midpoints, then scales and translates the unit-sphere
//! directions into final buffers. The result is slightly irregular by
//! design: base corners are jittered and renormalized, midpoints are
//! wobbled and left unnormalized.
//!
//! Normals are the negated directions (the fire shaders light the inside
//! of the shell).

use ember_common::{MeshError, Point3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::capacity::CapacityPlan;
use crate::icosahedron::{base_vertices, BASE_TRIANGLES};
use crate::subdivide::subdivide;
use crate::types::{Mesh, Subdivisions, Triangle, VERTEX_STRIDE};
use crate::vector::{self as vec, Vec4};

/// Parameters of one icosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icosphere {
    center: Point3,
    radius: f32,
    subdivisions: Subdivisions,
}

impl Icosphere {
    /// Validate parameters. `radius` must be positive and finite.
    pub fn new(
        center: Point3,
        radius: f32,
        subdivisions: impl Into<Subdivisions>,
    ) -> Result<Self, MeshError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MeshError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            subdivisions: subdivisions.into(),
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn subdivisions(&self) -> Subdivisions {
        self.subdivisions
    }

    /// Same sphere at a different depth.
    pub fn with_subdivisions(self, subdivisions: impl Into<Subdivisions>) -> Self {
        Self {
            subdivisions: subdivisions.into(),
            ..self
        }
    }

    /// Generate with an entropy-seeded random source.
    pub fn generate(&self) -> Result<Mesh, MeshError> {
        self.generate_with(&mut StdRng::from_entropy())
    }

    /// Generate reproducibly: equal seeds give bit-identical buffers.
    pub fn generate_seeded(&self, seed: u64) -> Result<Mesh, MeshError> {
        self.generate_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate drawing every perturbation from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Mesh, MeshError> {
        let plan = CapacityPlan::for_depth(self.subdivisions)?;

        let mut directions: Vec<Vec4> = Vec::with_capacity(plan.max_vertices);
        directions.extend(base_vertices(rng));

        let triangles = subdivide(&BASE_TRIANGLES, &mut directions, &plan, rng)?;
        let mesh = finalize(&directions, &triangles, self.center, self.radius);

        debug!(
            subdivisions = self.subdivisions.get(),
            triangles = mesh.triangle_count(),
            vertices = mesh.vertex_count(),
            max_vertices = plan.max_vertices,
            "generated icosphere"
        );
        Ok(mesh)
    }
}

/// Generate one icosphere with an entropy-seeded random source.
pub fn generate_icosphere(
    center: Point3,
    radius: f32,
    subdivisions: impl Into<Subdivisions>,
) -> Result<Mesh, MeshError> {
    Icosphere::new(center, radius, subdivisions)?.generate()
}

/// Pack directions into exact-size buffers.
///
/// position = `center + radius * direction` (`w = 1`),
/// normal = `-direction` (`w = 0`).
fn finalize(directions: &[Vec4], triangles: &[Triangle], center: Point3, radius: f32) -> Mesh {
    let center = [center.x, center.y, center.z, 1.0];

    let indices: Vec<u32> = triangles.iter().flatten().copied().collect();

    let mut positions = Vec::with_capacity(directions.len() * VERTEX_STRIDE);
    let mut normals = Vec::with_capacity(directions.len() * VERTEX_STRIDE);
    for d in directions {
        positions.extend_from_slice(&vec::scale_and_add(&center, d, radius));
        normals.extend_from_slice(&vec::negate3(d));
    }

    Mesh {
        indices,
        positions,
        normals,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(center: Point3, radius: f32, d: u32) -> Icosphere {
        Icosphere::new(center, radius, d).unwrap()
    }

    #[test]
    fn triangle_count_is_twenty_times_four_pow_d() {
        for d in 0..=5u32 {
            let mesh = sphere(Point3::ORIGIN, 1.0, d).generate_seeded(1).unwrap();
            assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(d));
            assert_eq!(mesh.indices.len(), 3 * 20 * 4usize.pow(d));
        }
    }

    #[test]
    fn depth_zero_is_the_base_icosahedron() {
        let mesh = sphere(Point3::ORIGIN, 1.0, 0u32).generate_seeded(2).unwrap();
        assert_eq!(mesh.triangle_count(), 20);
        assert_eq!(mesh.vertex_count(), 12);
        let tris: Vec<Triangle> = mesh.triangles().collect();
        assert_eq!(tris, BASE_TRIANGLES.to_vec());
    }

    #[test]
    fn depth_one_has_forty_two_vertices() {
        let mesh = sphere(Point3::ORIGIN, 1.0, 1u32).generate_seeded(3).unwrap();
        assert_eq!(mesh.vertex_count(), 42);
    }

    #[test]
    fn buffers_are_exactly_sized() {
        let mesh = sphere(Point3::ORIGIN, 1.0, 3u32).generate_seeded(4).unwrap();
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.positions.len(), 4 * (10 * 64 + 2));
    }

    #[test]
    fn indices_are_distinct_and_in_range() {
        let mesh = sphere(Point3::ORIGIN, 1.0, 3u32).generate_seeded(5).unwrap();
        let n = mesh.vertex_count() as u32;
        for [a, b, c] in mesh.triangles() {
            assert!(a != b && b != c && a != c, "degenerate [{a}, {b}, {c}]");
            assert!(a < n && b < n && c < n);
        }
    }

    #[test]
    fn directions_stay_near_unit_length() {
        let mesh = sphere(Point3::ORIGIN, 1.0, 4u32).generate_seeded(6).unwrap();
        for i in 0..mesh.vertex_count() {
            let len = vec::length3(&mesh.normal(i));
            assert!((0.95..=1.05).contains(&len), "vertex {i}: length {len}");
        }
    }

    #[test]
    fn normals_are_negated_directions() {
        let center = Point3::new(1.0, -2.0, 3.0);
        let radius = 2.5;
        let mesh = sphere(center, radius, 2u32).generate_seeded(7).unwrap();
        for i in 0..mesh.vertex_count() {
            let p = mesh.position(i);
            let n = mesh.normal(i);
            assert_eq!(p[3], 1.0);
            assert_eq!(n[3], 0.0);
            assert!((p[0] - (center.x - radius * n[0])).abs() < 1e-5);
            assert!((p[1] - (center.y - radius * n[1])).abs() < 1e-5);
            assert!((p[2] - (center.z - radius * n[2])).abs() < 1e-5);
        }
    }

    #[test]
    fn scale_and_translate() {
        let center = Point3::new(5.0, 0.0, 0.0);
        let mesh = sphere(center, 2.0, 0u32).generate_seeded(8).unwrap();
        for i in 0..mesh.vertex_count() {
            let [x, y, z, _] = mesh.position(i);
            let dist = center.distance(Point3::new(x, y, z));
            assert!((dist - 2.0).abs() < 2.0 * 0.05, "vertex {i}: distance {dist}");
        }
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let s = sphere(Point3::new(0.5, 0.5, 0.5), 0.7, 4u32);
        let a = s.generate_seeded(42).unwrap();
        let b = s.generate_seeded(42).unwrap();
        assert_eq!(a.index_bytes(), b.index_bytes());
        assert_eq!(a.position_bytes(), b.position_bytes());
        assert_eq!(a.normal_bytes(), b.normal_bytes());
    }

    #[test]
    fn different_seeds_differ() {
        let s = sphere(Point3::ORIGIN, 1.0, 2u32);
        let a = s.generate_seeded(1).unwrap();
        let b = s.generate_seeded(2).unwrap();
        assert_eq!(a.indices, b.indices);
        assert_ne!(a.positions, b.positions);
    }

    #[test]
    fn regenerating_at_new_depth_is_independent() {
        let s = sphere(Point3::ORIGIN, 1.0, 2u32);
        let coarse = s.generate_seeded(9).unwrap();
        let fine = s.with_subdivisions(3u32).generate_seeded(9).unwrap();
        assert_eq!(coarse.triangle_count(), 320);
        assert_eq!(fine.triangle_count(), 1280);
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            Icosphere::new(Point3::ORIGIN, 0.0, 1u32),
            Err(MeshError::InvalidRadius(0.0))
        );
        assert_eq!(
            Icosphere::new(Point3::ORIGIN, -1.0, 1u32),
            Err(MeshError::InvalidRadius(-1.0))
        );
        assert!(Icosphere::new(Point3::ORIGIN, f32::NAN, 1u32).is_err());
        assert!(Icosphere::new(Point3::ORIGIN, f32::INFINITY, 1u32).is_err());
    }

    #[test]
    fn unaddressable_depth_fails_before_allocating() {
        let err = sphere(Point3::ORIGIN, 1.0, 20u32).generate_seeded(0).unwrap_err();
        assert_eq!(err, MeshError::CapacityOverflow { subdivisions: 20 });
    }

    #[test]
    fn entropy_seeded_generation_succeeds() {
        let mesh = generate_icosphere(Point3::ORIGIN, 1.0, 1u32).unwrap();
        assert_eq!(mesh.triangle_count(), 80);
    }
}
