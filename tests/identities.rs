//! Cross-operator identities the combination catalog guarantees.

use approx::assert_abs_diff_eq;
use distfield::prelude::*;

const SAMPLES: [(f32, f32); 8] = [
    (1.0, 2.0),
    (-0.5, 0.5),
    (3.0, -3.0),
    (0.0, 0.0),
    (0.1, 0.12),
    (-2.0, -1.5),
    (0.4, 0.0),
    (-0.01, 0.3),
];

#[test]
fn chamfer_zero_radius_reduces_to_sharp() {
    for (a, b) in SAMPLES {
        assert_eq!(union_chamfer(a, b, 0.0), sharp_union(a, b));
        assert_eq!(intersection_chamfer(a, b, 0.0), sharp_intersection(a, b));
        assert_eq!(difference_chamfer(a, b, 0.0), sharp_difference(a, b));
    }
}

#[test]
fn round_zero_radius_reduces_to_sharp() {
    for (a, b) in SAMPLES {
        assert_abs_diff_eq!(union_round(a, b, 0.0), sharp_union(a, b), epsilon = 1e-6);
        assert_abs_diff_eq!(
            intersection_round(a, b, 0.0),
            sharp_intersection(a, b),
            epsilon = 1e-6
        );
    }
}

#[test]
fn difference_is_intersection_of_complement() {
    for (a, b) in SAMPLES {
        for r in [0.0, 0.1, 0.5] {
            assert_eq!(difference_round(a, b, r), intersection_round(a, -b, r));
            assert_eq!(difference_chamfer(a, b, r), intersection_chamfer(a, -b, r));
        }
    }
}

#[test]
fn stairs_derive_by_negation() {
    for (a, b) in SAMPLES {
        let (r, n) = (0.4, 4.0);
        assert_abs_diff_eq!(
            intersection_stairs(a, b, r, n),
            -union_stairs(-a, -b, r, n),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            difference_stairs(a, b, r, n),
            -union_stairs(-a, b, r, n),
            epsilon = 1e-6
        );
    }
}

#[test]
fn columns_intersection_is_difference_of_complement() {
    for (a, b) in SAMPLES {
        let (r, n) = (0.2, 3.0);
        assert_eq!(
            intersection_columns(a, b, r, n),
            difference_columns(a, -b, r, n)
        );
    }
}

#[test]
fn flavored_unions_never_exceed_sharp_union() {
    // Every union flavor only ever adds material
    for (a, b) in SAMPLES {
        let m = sharp_union(a, b);
        assert!(union_chamfer(a, b, 0.2) <= m + 1e-6);
        assert!(union_round(a, b, 0.2) <= m + 1e-6);
        assert!(union_stairs(a, b, 0.2, 3.0) <= m + 1e-6);
        assert!(union_soft(a, b, 0.2) <= m + 1e-6);
        assert!(union_columns(a, b, 0.2, 3.0) <= m + 1e-6);
    }
}

#[test]
fn soft_union_matches_sharp_outside_blend() {
    assert_abs_diff_eq!(union_soft(2.0, 0.1, 0.5), 0.1, epsilon = 1e-6);
}
