//! Orbit geometry tests against the public API.
//!
//! Covers the catalog orbits end to end: generation, closure, placement and
//! the shape of the rotated ellipse.

use std::f64::consts::PI;

use approx::assert_relative_eq;

use neo_orrery::catalog::all_objects;
use neo_orrery::orbit::{DEFAULT_SEGMENTS, OrbitParameters, OrbitPath, Placement};

// ============================================================================
// Luna reference orbit
// ============================================================================

#[test]
fn test_luna_reference_orbit() {
    let params = OrbitParameters::new(2.0, 0.0549, PI / 5.0, PI / 4.0, PI / 6.0);
    let path = OrbitPath::from_params(params);

    assert_eq!(DEFAULT_SEGMENTS, 100);
    assert_eq!(path.len(), 101);
    assert!(path.is_closed(1e-12));
    assert_relative_eq!(params.semi_minor_axis(), 1.997, epsilon = 1e-3);

    // Distances from the center stay within [b, a].
    for p in path.points() {
        let r = p.length();
        assert!(r <= 2.0 + 1e-9, "r = {r}");
        assert!(r >= params.semi_minor_axis() - 1e-9, "r = {r}");
    }
}

#[test]
fn test_rotated_orbit_is_planar() {
    let params = OrbitParameters::new(3.0, 0.6, PI / 7.0, PI / 5.0, PI / 3.0);
    let path = OrbitPath::from_params(params);

    // All points lie in the plane whose normal is the rotated Z axis.
    let normal = params.orientation() * bevy::math::DVec3::Z;
    for p in path.points() {
        assert_relative_eq!(p.dot(normal), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_path_is_centered() {
    let params = OrbitParameters::new(5.0, 0.9, PI / 8.0, PI / 6.0, PI / 4.0);
    let path = OrbitPath::generate(params, 200);

    // Drop the duplicated endpoint; evenly spaced samples average to the center.
    let n = path.segments();
    let centroid = path.points()[..n]
        .iter()
        .fold(bevy::math::DVec3::ZERO, |acc, p| acc + *p)
        / n as f64;
    assert_relative_eq!(centroid.length(), 0.0, epsilon = 1e-9);
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_positions_match_placement() {
    for object in all_objects() {
        let path = object.path();
        let position = object.position();
        match object.placement {
            Placement::PathStart => assert_eq!(position, path.first()),
            Placement::Focus => {
                assert_relative_eq!(position.x, object.orbit.focus_distance(), epsilon = 1e-12)
            }
        }
    }
}
