//! Stair-stepped boolean combinations.
//!
//! Produces `n - 1` discrete steps of height `r / n` across the joint of
//! the two surfaces (the compact construction by paniq).

use crate::math::glsl_mod;

/// Union with `n - 1` staircase steps across a region of size `r`.
///
/// Unlike the columns flavor there is no activation band: the staircase
/// term shapes the whole field (it stays a valid bound everywhere).
#[inline(always)]
pub fn union_stairs(a: f32, b: f32, r: f32, n: f32) -> f32 {
    let s = r / n;
    let u = b - r;
    a.min(b)
        .min(0.5 * (u + a + (glsl_mod(u - a + s, 2.0 * s) - s).abs()))
}

/// Intersection with staircase steps: `-union_stairs(-a, -b, r, n)`.
#[inline(always)]
pub fn intersection_stairs(a: f32, b: f32, r: f32, n: f32) -> f32 {
    -union_stairs(-a, -b, r, n)
}

/// Difference cutting staircase steps out of `a`:
/// `-union_stairs(-a, b, r, n)`.
#[inline(always)]
pub fn difference_stairs(a: f32, b: f32, r: f32, n: f32) -> f32 {
    -union_stairs(-a, b, r, n)
}
