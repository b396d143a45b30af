//! Base icosahedron: 12 perturbed unit directions and a fixed 20-face table.

use rand::Rng;

use crate::types::Triangle;
use crate::vector::{self as vec, Vec4};

const X: f32 = 0.6;
const Z: f32 = 0.9;

/// Corner directions before perturbation (cyclic permutations of `(±X, 0, ±Z)`).
pub const BASE_VERTICES: [[f32; 3]; 12] = [
    [-X, 0.0, Z],
    [X, 0.0, Z],
    [-X, 0.0, -Z],
    [X, 0.0, -Z],
    [0.0, Z, X],
    [0.0, Z, -X],
    [0.0, -Z, X],
    [0.0, -Z, -X],
    [Z, X, 0.0],
    [-Z, X, 0.0],
    [Z, -X, 0.0],
    [-Z, -X, 0.0],
];

/// Face table. Every face winds clockwise when viewed from outside.
pub const BASE_TRIANGLES: [Triangle; 20] = [
    [0, 4, 1],
    [0, 9, 4],
    [9, 5, 4],
    [4, 5, 8],
    [4, 8, 1],
    [8, 10, 1],
    [8, 3, 10],
    [5, 3, 8],
    [5, 2, 3],
    [2, 7, 3],
    [7, 10, 3],
    [7, 6, 10],
    [7, 11, 6],
    [11, 0, 6],
    [0, 1, 6],
    [6, 1, 10],
    [9, 0, 11],
    [9, 11, 2],
    [9, 2, 5],
    [7, 2, 11],
];

/// Half-width of the uniform scale applied to each corner (`1 ± 3%`).
const DISTORTION: f32 = 0.03;
/// Extra stretch along Y: `+3%` above the equator, `-3%` at or below it.
const Y_BIAS: f32 = 0.03;

/// Push one corner off the ideal shape, then project it back to the unit sphere.
fn perturb<R: Rng + ?Sized>(corner: [f32; 3], rng: &mut R) -> Vec4 {
    let [x, y, z] = corner;
    let distortion = rng.gen_range(1.0 - DISTORTION..=1.0 + DISTORTION);
    let y_bias = if y > 0.0 { 1.0 + Y_BIAS } else { 1.0 - Y_BIAS };
    vec::normalize3(&vec::direction(
        x * distortion,
        y * y_bias * distortion,
        z * distortion,
    ))
}

/// The 12 corner directions, each independently perturbed and renormalized.
pub fn base_vertices<R: Rng + ?Sized>(rng: &mut R) -> Vec<Vec4> {
    BASE_VERTICES.iter().map(|&c| perturb(c, rng)).collect()
}

// =============================================================================
// Tests
// =============================================================================
