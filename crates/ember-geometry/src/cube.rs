//! Inward-facing textured cube surrounding the scene.
//!
//! 24 vertices (four per face, so faces keep hard normals and their own UVs)
//! and 12 triangles wound to be seen from inside. Normals point inward.

use ember_common::MeshError;

use crate::types::Mesh;

/// Unit-cube corners per face, in face order front, right, back, left, up, down.
#[rustfmt::skip]
const FACE_CORNERS: [[f32; 3]; 24] = [
    // front
    [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0],
    // right
    [1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0],
    // back
    [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0],
    // left
    [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0],
    // up
    [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0],
    // down
    [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0],
];

/// Outward face normals, same face order as `FACE_CORNERS`.
const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, -1.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
];

#[rustfmt::skip]
const FACE_UVS: [[f32; 8]; 6] = [
    [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
];

/// Default half edge length.
pub const DEFAULT_HALF_EXTENT: f32 = 40.0;

/// A mesh with per-vertex texture coordinates (stride 2).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TexturedMesh {
    pub mesh: Mesh,
    pub uvs: Vec<f32>,
}

/// Generate the cube centered at the origin with the given half edge length.
pub fn generate_cube(half_extent: f32) -> Result<TexturedMesh, MeshError> {
    if !(half_extent.is_finite() && half_extent > 0.0) {
        return Err(MeshError::InvalidRadius(half_extent));
    }

    // Two triangles per face, reversed from the outward (0, 1, 2), (0, 2, 3).
    let indices: Vec<u32> = (0..6u32)
        .flat_map(|face| {
            let b = face * 4;
            [b + 2, b + 1, b, b + 3, b + 2, b]
        })
        .collect();

    let mut positions = Vec::with_capacity(24 * 4);
    let mut normals = Vec::with_capacity(24 * 4);
    for (i, [x, y, z]) in FACE_CORNERS.iter().copied().enumerate() {
        positions.extend_from_slice(&[x * half_extent, y * half_extent, z * half_extent, 1.0]);
        let [nx, ny, nz] = FACE_NORMALS[i / 4];
        normals.extend_from_slice(&[-nx, -ny, -nz, 0.0]);
    }

    let uvs = FACE_UVS.iter().flatten().copied().collect();

    Ok(TexturedMesh {
        mesh: Mesh {
            indices,
            positions,
            normals,
        },
        uvs,
    })
}
