//! Columnar boolean combinations.
//!
//! The columns flavor places `n - 1` circular columns at a 45-degree
//! angle along the joint of the two surfaces.
//!
//! The full construction only runs inside the activation band
//! `a < r && b < r`; outside it the operators fall back to the plain
//! boolean. The fallback introduces a discontinuity at the band edge —
//! a documented cost/continuity tradeoff inherited from the original
//! construction, kept deliberately.

use std::f32::consts::SQRT_2;

use glam::Vec2;

use crate::domain::{repeat_1d, rotate_45};
use crate::math::glsl_mod;

/// Union with `n - 1` circular columns of combined radius `r` along the
/// joint. Falls back to `min(a, b)` outside the activation band.
#[inline(always)]
pub fn union_columns(a: f32, b: f32, r: f32, n: f32) -> f32 {
    if a < r && b < r {
        let column_radius = r * SQRT_2 / ((n - 1.0) * 2.0 + SQRT_2);
        let mut p = rotate_45(Vec2::new(a, b));
        p.x -= SQRT_2 / 2.0 * r;
        p.x += column_radius * SQRT_2;
        if glsl_mod(n, 2.0) == 1.0 {
            p.y += column_radius;
        }
        // The local frame is now turned 45 degrees with its x axis on the
        // diagonal the columns sit on; repeat along it and place a circle.
        (p.y, _) = repeat_1d(p.y, column_radius * 2.0);

        let result = p.length() - column_radius;
        result.min(p.x).min(a).min(b)
    } else {
        a.min(b)
    }
}

/// Difference carving `n - 1` columns out of `a` along the cut.
///
/// This is the mirror construction of [`union_columns`] with `a` negated
/// and the result negated again, plus an extra `-column_radius * √2 / 2`
/// shift the union does not have; the asymmetry is what makes the columns
/// read as carved out rather than protruding.
#[inline(always)]
pub fn difference_columns(a: f32, b: f32, r: f32, n: f32) -> f32 {
    let a = -a;
    let m = a.min(b);
    // Skip the expensive part where it cannot matter (discontinuous at the
    // band edge, kept as-is).
    if a < r && b < r {
        let column_radius = r * SQRT_2 / ((n - 1.0) * 2.0 + SQRT_2);
        let mut p = rotate_45(Vec2::new(a, b));
        p.y += column_radius;
        p.x -= SQRT_2 / 2.0 * r;
        p.x += -column_radius * SQRT_2 / 2.0;
        if glsl_mod(n, 2.0) == 1.0 {
            p.y += column_radius;
        }
        (p.y, _) = repeat_1d(p.y, column_radius * 2.0);

        let result = -p.length() + column_radius;
        -result.max(p.x).min(a).min(b)
    } else {
        -m
    }
}

/// Intersection with columns: `difference_columns(a, -b, r, n)`.
#[inline(always)]
pub fn intersection_columns(a: f32, b: f32, r: f32, n: f32) -> f32 {
    difference_columns(a, -b, r, n)
}
