//! Mesh buffer types handed to the renderer.

use ember_common::MeshError;

/// Three vertex indices. All faces of one mesh share a winding.
pub type Triangle = [u32; 3];

/// Floats per position / normal entry (`x, y, z, w`).
pub const VERTEX_STRIDE: usize = 4;

/// A validated, non-negative subdivision depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Subdivisions(u32);

impl Subdivisions {
    /// Upper end of the interactive range. Not enforced by the generator.
    pub const UI_MAX: Self = Self(8);

    pub const fn new(depth: u32) -> Self {
        Self(depth)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Subdivisions {
    fn from(depth: u32) -> Self {
        Self(depth)
    }
}

impl TryFrom<i64> for Subdivisions {
    type Error = MeshError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        if depth < 0 {
            return Err(MeshError::NegativeSubdivisions(depth));
        }
        u32::try_from(depth)
            .map(Self)
            .map_err(|_| MeshError::CapacityOverflow {
                subdivisions: u32::MAX,
            })
    }
}

/// Interleaved vertex for renderers that want a single vertex buffer.
///
/// Layout: position(vec4) + normal(vec4) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 4],
    pub normal: [f32; 4],
}

/// Finished geometry: flat index, position and normal arrays.
///
/// `indices.len() == 3 * triangle_count()`, `positions.len() ==
/// normals.len() == 4 * vertex_count()`. Every index is below
/// `vertex_count()`. Once returned, a mesh is never mutated by its
/// generator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub indices: Vec<u32>,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / VERTEX_STRIDE
    }

    /// Number of indices to draw as a triangle list.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn position(&self, index: usize) -> [f32; 4] {
        let i = index * VERTEX_STRIDE;
        [
            self.positions[i],
            self.positions[i + 1],
            self.positions[i + 2],
            self.positions[i + 3],
        ]
    }

    pub fn normal(&self, index: usize) -> [f32; 4] {
        let i = index * VERTEX_STRIDE;
        [
            self.normals[i],
            self.normals[i + 1],
            self.normals[i + 2],
            self.normals[i + 3],
        ]
    }

    /// Interleave positions and normals.
    pub fn vertices(&self) -> Vec<MeshVertex> {
        (0..self.vertex_count())
            .map(|i| MeshVertex {
                position: self.position(i),
                normal: self.normal(i),
            })
            .collect()
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }
}

// =============================================================================
// Tests
// =============================================================================
