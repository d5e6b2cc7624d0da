//! Soft (quadratic) union.

/// Quadratic soft union over a blend region of size `r`.
///
/// Similar to the round union but more Lipschitz-friendly at acute
/// angles, at the cost of being less exact around 90 degrees. Useful when
/// fudging around too much. From Alex Evans' SIGGRAPH slides
/// (MediaMolecule).
#[inline(always)]
pub fn union_soft(a: f32, b: f32, r: f32) -> f32 {
    let e = (r - (a - b).abs()).max(0.0);
    a.min(b) - e * e * 0.25 / r
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_union_soft_far_apart_is_min() {
        // |a - b| >= r: the blend term vanishes
        assert_abs_diff_eq!(union_soft(1.0, 0.2, 0.3), 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_union_soft_blends_at_equal_inputs() {
        // a = b is the deepest point of the blend: min - r/4
        let d = union_soft(0.5, 0.5, 0.2);
        assert_abs_diff_eq!(d, 0.5 - 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_union_soft_below_min() {
        let d = union_soft(0.1, 0.15, 0.3);
        assert!(d < 0.1, "soft union adds material: {}", d);
    }
}
