//! Blobby ball SDF.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

const PHI: f32 = 1.618_034;

/// Blobby ball of fixed size ~1.5. You've probably seen it somewhere.
///
/// Not a correct distance bound — the cosine bulges break the Lipschitz
/// property. Beware when marching it with full-length steps.
#[inline(always)]
pub fn blob(p: Vec3) -> f32 {
    let mut p = p.abs();
    if p.x < p.y.max(p.z) {
        p = Vec3::new(p.y, p.z, p.x);
    }
    let b = p
        .dot(Vec3::ONE.normalize())
        .max(Vec2::new(p.x, p.z).dot(Vec2::new(PHI + 1.0, 1.0).normalize()))
        .max(Vec2::new(p.y, p.x).dot(Vec2::new(1.0, PHI).normalize()))
        .max(Vec2::new(p.x, p.z).dot(Vec2::new(1.0, PHI).normalize()));
    let l = p.length();
    l - 1.5 - 0.2 * (1.5 / 2.0) * (((1.01 - b / l).sqrt() * (PI / 0.25)).min(PI)).cos()
}
