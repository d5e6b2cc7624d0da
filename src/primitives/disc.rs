//! Disc SDF.

use glam::{Vec2, Vec3};

/// A circular disc of radius `r` in the xz plane with no thickness.
/// Subtract some value to get a flat disc with a rounded edge.
#[inline(always)]
pub fn disc(p: Vec3, r: f32) -> f32 {
    let l = Vec2::new(p.x, p.z).length() - r;
    if l < 0.0 {
        p.y.abs()
    } else {
        Vec2::new(p.y, l).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_disc_above_face() {
        assert_abs_diff_eq!(disc(Vec3::new(0.0, 0.7, 0.0), 2.0), 0.7, epsilon = 1e-6);
    }

    #[test]
    fn test_disc_beyond_rim() {
        let d = disc(Vec3::new(3.0, 0.0, 0.0), 2.0);
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_disc_rim_diagonal() {
        let d = disc(Vec3::new(3.0, 1.0, 0.0), 2.0);
        assert_abs_diff_eq!(d, 2.0f32.sqrt(), epsilon = 1e-6);
    }
}
