//! 1-to-4 triangle subdivision with shared edge midpoints.

use ember_common::{CapacityKind, MeshError};
use rand::Rng;
use tracing::trace;

use crate::capacity::CapacityPlan;
use crate::midpoint::MidpointCache;
use crate::types::Triangle;
use crate::vector::Vec4;

/// Split every triangle of `triangles` into four, writing the children to `out`.
///
/// `out` is cleared first. Children keep the parent's winding:
/// `(v0, m01, m20)`, `(m01, v1, m12)`, `(m01, m12, m20)`, `(m20, m12, v2)`.
/// Returns the number of midpoint vertices created.
pub fn subdivide_level<R: Rng + ?Sized>(
    triangles: &[Triangle],
    out: &mut Vec<Triangle>,
    vertices: &mut Vec<Vec4>,
    plan: &CapacityPlan,
    rng: &mut R,
) -> Result<usize, MeshError> {
    plan.check(CapacityKind::Triangles, triangles.len() * 4)?;
    out.clear();

    // A closed triangle mesh has 3/2 edges per face.
    let mut cache = MidpointCache::with_capacity(triangles.len() * 3 / 2);

    for &[v0, v1, v2] in triangles {
        let m01 = cache.resolve(v0, v1, vertices, plan, rng)?;
        let m12 = cache.resolve(v1, v2, vertices, plan, rng)?;
        let m20 = cache.resolve(v2, v0, vertices, plan, rng)?;

        out.push([v0, m01, m20]);
        out.push([m01, v1, m12]);
        out.push([m01, m12, m20]);
        out.push([m20, m12, v2]);
    }

    Ok(cache.len())
}

/// Apply `plan.subdivisions` levels to `triangles`, appending midpoints to
/// `vertices`.
///
/// Two triangle buffers, each sized for the final level, are swapped between
/// levels so no level reallocates.
pub fn subdivide<R: Rng + ?Sized>(
    triangles: &[Triangle],
    vertices: &mut Vec<Vec4>,
    plan: &CapacityPlan,
    rng: &mut R,
) -> Result<Vec<Triangle>, MeshError> {
    let mut current: Vec<Triangle> = Vec::with_capacity(plan.max_triangles);
    current.extend_from_slice(triangles);
    let mut next: Vec<Triangle> = Vec::with_capacity(plan.max_triangles);

    for level in 0..plan.subdivisions.get() {
        let created = subdivide_level(&current, &mut next, vertices, plan, rng)?;
        std::mem::swap(&mut current, &mut next);
        trace!(
            level = level + 1,
            triangles = current.len(),
            vertices = vertices.len(),
            midpoints = created,
            "subdivision level complete"
        );
    }

    Ok(current)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icosahedron::{base_vertices, BASE_TRIANGLES};
    use crate::types::Subdivisions;
    use crate::vector as vec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn plan(d: u32) -> CapacityPlan {
        CapacityPlan::for_depth(Subdivisions::new(d)).unwrap()
    }

    #[test]
    fn one_triangle_splits_into_four_with_six_vertices() {
        let mut verts = vec![
            vec::direction(1.0, 0.0, 0.0),
            vec::direction(0.0, 1.0, 0.0),
            vec::direction(0.0, 0.0, 1.0),
        ];
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        let created =
            subdivide_level(&[[0, 1, 2]], &mut out, &mut verts, &plan(1), &mut rng).unwrap();

        assert_eq!(created, 3);
        assert_eq!(verts.len(), 6);
        assert_eq!(
            out,
            vec![[0, 3, 5], [3, 1, 4], [3, 4, 5], [5, 4, 2]]
        );
        let used: HashSet<u32> = out.iter().flatten().copied().collect();
        assert_eq!(used.len(), 6);
    }

    #[test]
    fn adjacent_triangles_share_edge_midpoint() {
        // Two triangles sharing edge {1, 2}.
        let mut verts = vec![
            vec::direction(1.0, 0.0, 0.0),
            vec::direction(0.0, 1.0, 0.0),
            vec::direction(0.0, 0.0, 1.0),
            vec::direction(0.0, 0.0, -1.0),
        ];
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        let created = subdivide_level(
            &[[0, 1, 2], [2, 1, 3]],
            &mut out,
            &mut verts,
            &plan(1),
            &mut rng,
        )
        .unwrap();

        // 5 distinct edges -> 5 midpoints.
        assert_eq!(created, 5);
        assert_eq!(verts.len(), 9);
        // m12 of the first triangle is m01 of the second.
        assert_eq!(out[1][2], out[4][1]);
    }

    #[test]
    fn icosahedron_one_level_adds_thirty_vertices() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut verts = base_vertices(&mut rng);
        let tris = subdivide(&BASE_TRIANGLES, &mut verts, &plan(1), &mut rng).unwrap();
        assert_eq!(tris.len(), 80);
        assert_eq!(verts.len(), 42);
    }

    #[test]
    fn vertex_count_matches_closed_form() {
        for d in 0..=4u32 {
            let mut rng = StdRng::seed_from_u64(d as u64);
            let mut verts = base_vertices(&mut rng);
            let tris = subdivide(&BASE_TRIANGLES, &mut verts, &plan(d), &mut rng).unwrap();
            assert_eq!(tris.len(), 20 * 4usize.pow(d));
            assert_eq!(verts.len(), 10 * 4usize.pow(d) + 2);
        }
    }

    #[test]
    fn zero_levels_returns_base_triangles() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut verts = base_vertices(&mut rng);
        let tris = subdivide(&BASE_TRIANGLES, &mut verts, &plan(0), &mut rng).unwrap();
        assert_eq!(tris, BASE_TRIANGLES.to_vec());
        assert_eq!(verts.len(), 12);
    }

    #[test]
    fn subdivided_mesh_stays_closed_and_consistently_wound() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut verts = base_vertices(&mut rng);
        let tris = subdivide(&BASE_TRIANGLES, &mut verts, &plan(2), &mut rng).unwrap();
        let mut directed = HashSet::new();
        for &[a, b, c] in &tris {
            for edge in [(a, b), (b, c), (c, a)] {
                assert!(directed.insert(edge), "duplicate directed edge {edge:?}");
            }
        }
        // Every directed edge has its reverse: no seams.
        for &(a, b) in &directed {
            assert!(directed.contains(&(b, a)));
        }
    }

    #[test]
    fn undersized_plan_is_reported() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut verts = base_vertices(&mut rng);
        let tight = CapacityPlan {
            max_triangles: 20,
            ..plan(1)
        };
        let err = subdivide(&BASE_TRIANGLES, &mut verts, &tight, &mut rng).unwrap_err();
        assert_eq!(
            err,
            MeshError::CapacityExceeded {
                kind: CapacityKind::Triangles,
                capacity: 20,
            }
        );
    }
}
