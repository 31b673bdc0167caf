//! Property-based tests for orbit path generation using proptest.
//!
//! These tests verify that generated paths keep the ellipse shape, stay closed,
//! and that the orientation step is a pure rotation.

use proptest::prelude::*;
use std::f64::consts::{PI, TAU};

use super::{OrbitParameters, OrbitPath};

fn params_strategy() -> impl Strategy<Value = OrbitParameters> {
    (
        0.1f64..50.0,
        0.0f64..0.99,
        -PI..PI,
        -PI..PI,
        -PI..PI,
    )
        .prop_map(|(a, e, pitch, yaw, roll)| OrbitParameters::new(a, e, pitch, yaw, roll))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Undoing the orientation recovers points on the canonical ellipse.
    #[test]
    fn prop_points_lie_on_ellipse(params in params_strategy(), segments in 8usize..200) {
        let path = OrbitPath::generate(params, segments);
        let inverse = params.orientation().inverse();
        let a = params.semi_major_axis;
        let b = params.semi_minor_axis();

        for p in path.points() {
            let local = inverse * *p;
            let value = (local.x / a).powi(2) + (local.y / b).powi(2);
            prop_assert!(
                (value - 1.0).abs() < 1e-9,
                "point {:?} off ellipse: {}", local, value
            );
            prop_assert!(local.z.abs() < 1e-9 * a.max(1.0));
        }
    }

    /// Rotation preserves distance from the origin.
    #[test]
    fn prop_rotation_preserves_distance(params in params_strategy()) {
        let path = OrbitPath::generate(params, 64);

        for (i, p) in path.points().iter().enumerate() {
            let u = TAU * i as f64 / 64.0;
            let before = params.unrotated_point(u).length();
            let after = p.length();
            prop_assert!(
                (before - after).abs() < 1e-9 * before.max(1.0),
                "distance changed: {} -> {}", before, after
            );
        }
    }

    /// Every generated path is closed with segments + 1 points.
    #[test]
    fn prop_path_is_closed(params in params_strategy(), segments in 3usize..300) {
        let path = OrbitPath::generate(params, segments);
        prop_assert_eq!(path.len(), segments + 1);
        prop_assert!(path.is_closed(1e-12));
    }
}
