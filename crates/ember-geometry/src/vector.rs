//! Homogeneous 4-component vector math for mesh generation.
//!
//! Directions carry `w = 0`, positions carry `w = 1`. Only `xyz` take part
//! in length and normalization; `w` is carried through untouched.

/// `[x, y, z, w]` stored as `[f32; 4]`.
pub type Vec4 = [f32; 4];

/// Build a direction (`w = 0`).
pub fn direction(x: f32, y: f32, z: f32) -> Vec4 {
    [x, y, z, 0.0]
}

/// Length of the `xyz` part.
pub fn length3(v: &Vec4) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Rescale `xyz` to unit length. A zero vector is returned unchanged.
pub fn normalize3(v: &Vec4) -> Vec4 {
    let len = length3(v);
    if len > 0.0 {
        let inv = 1.0 / len;
        [v[0] * inv, v[1] * inv, v[2] * inv, v[3]]
    } else {
        *v
    }
}

/// Component-wise sum.
pub fn add(a: &Vec4, b: &Vec4) -> Vec4 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

/// Multiply `xyz` by `s`, leaving `w` as is.
pub fn scale3(v: &Vec4, s: f32) -> Vec4 {
    [v[0] * s, v[1] * s, v[2] * s, v[3]]
}

/// `a + b * s` over all four components.
pub fn scale_and_add(a: &Vec4, b: &Vec4, s: f32) -> Vec4 {
    [a[0] + b[0] * s, a[1] + b[1] * s, a[2] + b[2] * s, a[3] + b[3] * s]
}

/// Negate `xyz`, leaving `w` as is.
pub fn negate3(v: &Vec4) -> Vec4 {
    [-v[0], -v[1], -v[2], v[3]]
}

// =============================================================================
// Tests
// =============================================================================
