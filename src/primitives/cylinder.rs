//! Cylinder SDF.

use glam::{Vec2, Vec3};

/// Cylinder of radius `r` standing upright on the xz plane, extending
/// `height` above and below the origin.
#[inline(always)]
pub fn cylinder(p: Vec3, r: f32, height: f32) -> f32 {
    let d = Vec2::new(p.x, p.z).length() - r;
    d.max(p.y.abs() - height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cylinder_side_surface() {
        let d = cylinder(Vec3::new(1.0, 0.0, 0.0), 1.0, 2.0);
        assert_abs_diff_eq!(d, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cylinder_cap() {
        let d = cylinder(Vec3::new(0.0, 3.0, 0.0), 1.0, 2.0);
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cylinder_inside() {
        assert!(cylinder(Vec3::ZERO, 1.0, 2.0) < 0.0);
    }
}
