//! Up-front buffer sizing for icosphere generation.
//!
//! Every subdivision level multiplies the triangle count by four and adds at
//! most one vertex per edge of the previous level, so both counts are
//! bounded by a constant times `4^d`:
//!
//! - triangles: exactly `20 * 4^d`
//! - vertices: at most `42 * 4^d` (the exact count is `10 * 4^d + 2`)
//!
//! All arithmetic is checked. A depth whose vertex bound cannot be addressed
//! by `u32` indices is rejected before anything is allocated.

use ember_common::{CapacityKind, MeshError};

use crate::types::{Subdivisions, VERTEX_STRIDE};

const BASE_TRIANGLES: u64 = 20;
const VERTEX_BOUND_FACTOR: u64 = 42;

/// Maximum element counts for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPlan {
    pub subdivisions: Subdivisions,
    pub max_triangles: usize,
    pub max_vertices: usize,
}

impl CapacityPlan {
    pub fn for_depth(subdivisions: Subdivisions) -> Result<Self, MeshError> {
        let depth = subdivisions.get();
        let overflow = || MeshError::CapacityOverflow {
            subdivisions: depth,
        };

        let growth = 4u64.checked_pow(depth).ok_or_else(overflow)?;
        let max_triangles = growth.checked_mul(BASE_TRIANGLES).ok_or_else(overflow)?;
        let max_vertices = growth
            .checked_mul(VERTEX_BOUND_FACTOR)
            .ok_or_else(overflow)?;

        // Highest index is max_vertices - 1.
        if max_vertices - 1 > u64::from(u32::MAX) {
            return Err(overflow());
        }

        let max_triangles = usize::try_from(max_triangles).map_err(|_| overflow())?;
        let max_vertices = usize::try_from(max_vertices).map_err(|_| overflow())?;
        max_triangles.checked_mul(3).ok_or_else(overflow)?;
        max_vertices
            .checked_mul(VERTEX_STRIDE)
            .ok_or_else(overflow)?;

        Ok(Self {
            subdivisions,
            max_triangles,
            max_vertices,
        })
    }

    /// Length of the index buffer at full capacity.
    pub fn index_capacity(&self) -> usize {
        self.max_triangles * 3
    }

    /// Length of a position or normal buffer at full capacity.
    pub fn vertex_component_capacity(&self) -> usize {
        self.max_vertices * VERTEX_STRIDE
    }

    /// Fail with `CapacityExceeded` if `count` is above the planned bound.
    pub fn check(&self, kind: CapacityKind, count: usize) -> Result<(), MeshError> {
        let capacity = match kind {
            CapacityKind::Triangles => self.max_triangles,
            CapacityKind::Vertices => self.max_vertices,
        };
        if count > capacity {
            return Err(MeshError::CapacityExceeded { kind, capacity });
        }
        Ok(())
    }
}
