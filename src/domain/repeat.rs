//! Periodic domain repetition.
//!
//! Partitions a line, plane or volume into half-open cells and folds the
//! query coordinate back into the cell containing the origin. Each variant
//! returns the remapped coordinate plus the cell index it came from.

use glam::{Vec2, Vec3};

use crate::math::glsl_mod;

/// Repeat space along one axis with period `size`.
///
/// Cells are centered on multiples of `size`; the returned coordinate lies
/// in `[-size/2, size/2)` and cell 0 spans `[-size/2, size/2)` around the
/// origin, where the coordinate passes through unchanged.
#[inline(always)]
pub fn repeat_1d(p: f32, size: f32) -> (f32, f32) {
    let half = size * 0.5;
    let c = ((p + half) / size).floor();
    (glsl_mod(p + half, size) - half, c)
}

/// Like [`repeat_1d`], but every second cell is mirrored so adjoining cell
/// boundaries match instead of jumping.
#[inline(always)]
pub fn repeat_mirror_1d(p: f32, size: f32) -> (f32, f32) {
    let half = size * 0.5;
    let c = ((p + half) / size).floor();
    let p = glsl_mod(p + half, size) - half;
    (p * (glsl_mod(c, 2.0) * 2.0 - 1.0), c)
}

/// Repeat only in the positive direction; the negative half-space passes
/// through untouched. The boundary test is inclusive: `p == 0` repeats.
///
/// The cell index is computed for every input, including pass-through
/// points in the negative half-space.
#[inline(always)]
pub fn repeat_single_1d(p: f32, size: f32) -> (f32, f32) {
    let half = size * 0.5;
    let c = ((p + half) / size).floor();
    if p >= 0.0 {
        (glsl_mod(p + half, size) - half, c)
    } else {
        (p, c)
    }
}

/// Repeat only a limited number of times: cell indices are clamped into
/// `[start, stop]`, and clamped points are shifted back by whole periods so
/// the field stays continuous at the clamp boundary.
///
/// The shift-back is a known numeric compromise rather than an exact
/// construction; it is kept as-is because callers depend on the resulting
/// shape.
#[inline(always)]
pub fn repeat_interval_1d(p: f32, size: f32, start: f32, stop: f32) -> (f32, f32) {
    let half = size * 0.5;
    let mut c = ((p + half) / size).floor();
    let mut p = glsl_mod(p + half, size) - half;
    if c > stop {
        p += size * (c - stop);
        c = stop;
    }
    if c < start {
        p += size * (c - start);
        c = start;
    }
    (p, c)
}

/// Repeat in two dimensions, independently per axis.
#[inline(always)]
pub fn repeat_2d(p: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let (x, cx) = repeat_1d(p.x, size.x);
    let (y, cy) = repeat_1d(p.y, size.y);
    (Vec2::new(x, y), Vec2::new(cx, cy))
}

/// 2D repetition with every second cell mirrored so all cell boundaries
/// match.
#[inline(always)]
pub fn repeat_mirror_2d(p: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let half = size * 0.5;
    let c = ((p + half) / size).floor();
    let p = Vec2::new(
        glsl_mod(p.x + half.x, size.x) - half.x,
        glsl_mod(p.y + half.y, size.y) - half.y,
    );
    let p = p * (Vec2::new(glsl_mod(c.x, 2.0), glsl_mod(c.y, 2.0)) * 2.0 - Vec2::ONE);
    (p, c)
}

/// Like [`repeat_mirror_2d`], but additionally mirrored at the cell
/// diagonal, giving an 8-fold symmetric tiling.
///
/// Because of the extra fold, the returned cell index covers two cells and
/// is the plain index integer-divided by 2.
#[inline(always)]
pub fn repeat_grid_2d(p: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let half = size * 0.5;
    let c = ((p + half) / size).floor();
    let p = Vec2::new(
        glsl_mod(p.x + half.x, size.x) - half.x,
        glsl_mod(p.y + half.y, size.y) - half.y,
    );
    let p = p * (Vec2::new(glsl_mod(c.x, 2.0), glsl_mod(c.y, 2.0)) * 2.0 - Vec2::ONE);
    let mut p = p - half;
    if p.x > p.y {
        std::mem::swap(&mut p.x, &mut p.y);
    }
    (p, (c / 2.0).floor())
}

/// Repeat in three dimensions, independently per axis.
#[inline(always)]
pub fn repeat_3d(p: Vec3, size: Vec3) -> (Vec3, Vec3) {
    let (x, cx) = repeat_1d(p.x, size.x);
    let (y, cy) = repeat_1d(p.y, size.y);
    let (z, cz) = repeat_1d(p.z, size.z);
    (Vec3::new(x, y, z), Vec3::new(cx, cy, cz))
}
