//! Angular (polar) domain repetition.

use glam::Vec2;

use crate::math::glsl_mod;

/// Repeat around the origin a fixed number of times.
///
/// The plane is cut into `repetitions` angular sectors of `2π/repetitions`
/// each; the point is folded into the sector centered on the positive x
/// axis at unchanged radius. Returns the folded point and the sector index.
///
/// For an odd number of repetitions the sector straddling the negative x
/// axis would report two different indices in its two halves (e.g. -5 and
/// 5), so the index is folded with `abs` there to keep it unique.
#[inline(always)]
pub fn repeat_polar(p: Vec2, repetitions: f32) -> (Vec2, f32) {
    let angle = std::f32::consts::TAU / repetitions;
    let a = p.y.atan2(p.x) + angle * 0.5;
    let r = p.length();
    let mut c = (a / angle).floor();
    let a = glsl_mod(a, angle) - angle * 0.5;
    let (s, cos) = a.sin_cos();
    let p = Vec2::new(cos, s) * r;
    if c.abs() >= repetitions / 2.0 {
        c = c.abs();
    }
    (p, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_repeat_polar_preserves_radius() {
        let p = Vec2::new(3.0, 4.0);
        let (q, _) = repeat_polar(p, 7.0);
        assert_abs_diff_eq!(q.length(), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_repeat_polar_cell_zero_unchanged() {
        // A point inside the primary sector stays put
        let p = Vec2::new(2.0, 0.1);
        let (q, c) = repeat_polar(p, 8.0);
        assert_eq!(c, 0.0);
        assert_abs_diff_eq!(q.x, p.x, epsilon = 1e-5);
        assert_abs_diff_eq!(q.y, p.y, epsilon = 1e-5);
    }

    #[test]
    fn test_repeat_polar_symmetric_points_coincide() {
        let n = 6.0;
        let sector = std::f32::consts::TAU / n;
        let p1 = Vec2::new(2.0, 0.0);
        let p2 = rotate_by(p1, sector);
        let (q1, _) = repeat_polar(p1, n);
        let (q2, _) = repeat_polar(p2, n);
        assert_abs_diff_eq!((q1 - q2).length(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_repeat_polar_index_fold_bound() {
        // |cell| <= n/2 for every repetition count, including odd ones
        for n in [3.0, 4.0, 5.0, 7.0, 8.0] {
            for i in 0..64 {
                let a = i as f32 / 64.0 * std::f32::consts::TAU;
                let p = Vec2::new(a.cos(), a.sin()) * 2.0;
                let (_, c) = repeat_polar(p, n);
                assert!(
                    c.abs() <= n / 2.0,
                    "cell {} outside ±{}/2 at angle {}",
                    c,
                    n,
                    a
                );
            }
        }
    }

    fn rotate_by(p: Vec2, a: f32) -> Vec2 {
        let (s, c) = a.sin_cos();
        Vec2::new(c * p.x - s * p.y, s * p.x + c * p.y)
    }
}
