//! Shared numeric helpers used across the catalog.
//!
//! Small building blocks the domain and combination operators lean on:
//! a sign function that never returns zero, max-component reductions,
//! and the GLSL-style modulo every repetition operator is built from.

use glam::{Vec2, Vec3};

/// Sign of `x` that never returns zero: `-1.0` for `x < 0`, else `+1.0`.
///
/// The zero case is deliberately excluded so mirror operators never hand
/// back a degenerate (zero-scaled) reflection.
#[inline(always)]
pub fn sgn(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Componentwise [`sgn`] for 2D vectors.
#[inline(always)]
pub fn sgn2(v: Vec2) -> Vec2 {
    Vec2::new(sgn(v.x), sgn(v.y))
}

/// Maximum component of a 2D vector.
#[inline(always)]
pub fn vmax2(v: Vec2) -> f32 {
    v.x.max(v.y)
}

/// Maximum component of a 3D vector.
#[inline(always)]
pub fn vmax3(v: Vec3) -> f32 {
    v.x.max(v.y).max(v.z)
}

/// GLSL-style modulo: `a - b * floor(a / b)`.
///
/// Unlike Rust's `%`, the result carries the sign of `b`, which is what
/// the repetition operators need to produce contiguous cells across the
/// origin.
#[inline(always)]
pub fn glsl_mod(a: f32, b: f32) -> f32 {
    a - b * (a / b).floor()
}
