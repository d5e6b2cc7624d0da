//! Mirroring operators.

use glam::Vec2;

use crate::math::{sgn, sgn2};

/// Mirror at an axis-aligned plane a distance `dist` from the origin.
///
/// Returns the new coordinate and the pre-mirror sign of `p` (`±1`, never
/// zero), usable to tell the two half-spaces apart.
#[inline(always)]
pub fn mirror_1d(p: f32, dist: f32) -> (f32, f32) {
    (p.abs() - dist, sgn(p))
}

/// Mirror in both dimensions and at the diagonal, folding the plane into
/// one eighth. Translates by `dist` per axis before mirroring.
///
/// Returns the folded point and the pre-mirror signs per axis.
#[inline(always)]
pub fn mirror_octant(p: Vec2, dist: Vec2) -> (Vec2, Vec2) {
    let s = sgn2(p);
    let (x, _) = mirror_1d(p.x, dist.x);
    let (y, _) = mirror_1d(p.y, dist.y);
    let mut p = Vec2::new(x, y);
    if p.y > p.x {
        std::mem::swap(&mut p.x, &mut p.y);
    }
    (p, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_1d_reflects() {
        let (p, s) = mirror_1d(-3.0, 1.0);
        assert_eq!(p, 2.0);
        assert_eq!(s, -1.0);
        let (p, s) = mirror_1d(3.0, 1.0);
        assert_eq!(p, 2.0);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_mirror_1d_sign_never_zero() {
        let (_, s) = mirror_1d(0.0, 1.0);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_mirror_octant_fold() {
        let (p, s) = mirror_octant(Vec2::new(-2.0, 3.0), Vec2::new(1.0, 1.0));
        // |−2|−1 = 1, |3|−1 = 2, then swap since y > x
        assert_eq!(p, Vec2::new(2.0, 1.0));
        assert_eq!(s, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_mirror_octant_quadrants_coincide() {
        let dist = Vec2::new(0.5, 0.5);
        let (q0, _) = mirror_octant(Vec2::new(1.5, 2.5), dist);
        let (q1, _) = mirror_octant(Vec2::new(-1.5, 2.5), dist);
        let (q2, _) = mirror_octant(Vec2::new(2.5, -1.5), dist);
        assert_eq!(q0, q1);
        assert_eq!(q0, q2);
        assert!(q0.x >= q0.y, "diagonal fold leaves x >= y");
    }
}
