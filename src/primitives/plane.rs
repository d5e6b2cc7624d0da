//! Half-space (plane) SDF.

use glam::Vec3;

/// Distance to the plane with unit normal `n` at `distance_from_origin`
/// along `-n`. The half-space below the plane is inside.
///
/// `n` must be normalized — a caller precondition, not checked.
#[inline(always)]
pub fn plane(p: Vec3, n: Vec3, distance_from_origin: f32) -> f32 {
    p.dot(n) + distance_from_origin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_ground() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(plane(Vec3::new(3.0, 2.0, -1.0), n, 0.0), 2.0);
        assert_eq!(plane(Vec3::new(0.0, -1.5, 0.0), n, 0.0), -1.5);
    }

    #[test]
    fn test_plane_offset() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(plane(Vec3::ZERO, n, 1.0), 1.0);
    }
}
