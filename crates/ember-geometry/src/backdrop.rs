//! Full-screen quad for background passes, already in clip space.

use crate::types::Mesh;

/// Depth just inside the far plane so the backdrop sits behind everything.
pub const BACKDROP_DEPTH: f32 = 0.999;

/// Two triangles covering NDC `[-1, 1]²` at `BACKDROP_DEPTH`.
pub fn generate_backdrop() -> Mesh {
    let z = BACKDROP_DEPTH;
    #[rustfmt::skip]
    let positions = vec![
        -1.0, -1.0, z, 1.0,
        1.0, -1.0, z, 1.0,
        1.0, 1.0, z, 1.0,
        -1.0, 1.0, z, 1.0,
    ];
    let normals = [0.0, 0.0, 1.0, 0.0].repeat(4);

    Mesh {
        indices: vec![0, 1, 2, 0, 2, 3],
        positions,
        normals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_covers_clip_space() {
        let quad = generate_backdrop();
        assert_eq!(quad.triangle_count(), 2);
        assert_eq!(quad.vertex_count(), 4);
        for i in 0..4 {
            let [x, y, z, w] = quad.position(i);
            assert_eq!((x.abs(), y.abs()), (1.0, 1.0));
            assert_eq!((z, w), (BACKDROP_DEPTH, 1.0));
            assert_eq!(quad.normal(i), [0.0, 0.0, 1.0, 0.0]);
        }
    }
}
