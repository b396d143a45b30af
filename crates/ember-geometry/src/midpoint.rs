//! Shared edge midpoints for one subdivision level.

use std::collections::HashMap;

use ember_common::{CapacityKind, MeshError};
use rand::Rng;

use crate::capacity::CapacityPlan;
use crate::vector::{self as vec, Vec4};

/// Half-width of the roughness scale applied to each new midpoint (`1 ± 2%`).
const WOBBLE: f32 = 0.02;

/// An undirected edge, stored with the smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn endpoints(self) -> (u32, u32) {
        (self.0, self.1)
    }
}

/// Edge -> midpoint index map. Valid for a single level only; create a new
/// cache for every level.
#[derive(Debug, Default)]
pub struct MidpointCache {
    midpoints: HashMap<EdgeKey, u32>,
}

impl MidpointCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a level that will see `edges` distinct edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            midpoints: HashMap::with_capacity(edges),
        }
    }

    /// Number of midpoints created so far in this level.
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }

    /// Index of the midpoint of edge `{a, b}`, appending a new vertex on the
    /// first request.
    ///
    /// A new midpoint is the normalized sum of its endpoints with `xyz` then
    /// scaled by a random factor in `[0.98, 1.02]`. The wobbled result is not
    /// renormalized.
    pub fn resolve<R: Rng + ?Sized>(
        &mut self,
        a: u32,
        b: u32,
        vertices: &mut Vec<Vec4>,
        plan: &CapacityPlan,
        rng: &mut R,
    ) -> Result<u32, MeshError> {
        let key = EdgeKey::new(a, b);
        if let Some(&index) = self.midpoints.get(&key) {
            return Ok(index);
        }

        plan.check(CapacityKind::Vertices, vertices.len() + 1)?;

        let sum = vec::add(&vertices[a as usize], &vertices[b as usize]);
        let wobble = rng.gen_range(1.0 - WOBBLE..=1.0 + WOBBLE);
        let midpoint = vec::scale3(&vec::normalize3(&sum), wobble);

        // Fits: the plan keeps every vertex index within u32.
        let index = vertices.len() as u32;
        vertices.push(midpoint);
        self.midpoints.insert(key, index);
        Ok(index)
    }
}
