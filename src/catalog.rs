//! Catalog of objects shown in the orrery.
//!
//! Orbits are expressed in arbitrary scene units around the central body at the
//! origin. Shapes for the named asteroids follow their real eccentricities and
//! inclinations; the semi-major axes are compressed to fit the scene.

use std::f64::consts::PI;

use bevy::prelude::*;

use crate::orbit::{OrbitParameters, OrbitPath, Placement};
use crate::types::{DEG_TO_RAD, Point3};

/// Static description of an orbiting object.
#[derive(Clone, Debug)]
pub struct CelestialObject {
    /// Stable identifier used for selection and fetch tagging.
    pub id: u32,
    /// Human-readable name.
    pub name: &'static str,
    pub orbit: OrbitParameters,
    /// Color of the orbit polyline.
    pub orbit_color: Color,
    /// Color of the object itself.
    pub body_color: Color,
    /// Show the detailed model instead of a placeholder marker.
    pub show_model: bool,
    /// Half-extents of the detailed ellipsoid model.
    pub model_scale: Vec3,
    pub placement: Placement,
    /// NeoWs lookup id; objects without one show `summary` only.
    pub neo_id: Option<&'static str>,
    pub summary: &'static str,
}

impl CelestialObject {
    /// Orbit path at the default resolution.
    pub fn path(&self) -> OrbitPath {
        OrbitPath::from_params(self.orbit)
    }

    /// Position of the object in scene space.
    pub fn position(&self) -> Point3 {
        self.placement.resolve(&self.path())
    }
}

/// Radius of the placeholder marker sphere.
pub const MARKER_RADIUS: f32 = 0.2;

/// All objects in the scene, ordered by id.
pub fn all_objects() -> Vec<CelestialObject> {
    vec![
        CelestialObject {
            id: 1,
            name: "Luna",
            orbit: OrbitParameters::new(2.0, 0.0549, PI / 5.0, PI / 4.0, PI / 6.0),
            orbit_color: Color::srgb(0.5, 0.5, 0.5),
            body_color: Color::srgb(0.7, 0.7, 0.7),
            show_model: true,
            model_scale: Vec3::splat(0.18),
            placement: Placement::PathStart,
            neo_id: None,
            summary: "Earth's natural satellite, shown here as the innermost reference orbit.",
        },
        CelestialObject {
            id: 2,
            name: "Cometa",
            orbit: OrbitParameters::new(5.0, 0.9, PI / 8.0, PI / 6.0, PI / 4.0),
            orbit_color: Color::srgb(0.9, 0.85, 0.2),
            body_color: Color::srgb(0.85, 0.9, 1.0),
            show_model: true,
            model_scale: Vec3::new(0.08, 0.14, 0.1),
            placement: Placement::PathStart,
            neo_id: None,
            summary: "A highly eccentric comet orbit that dives close to the central body.",
        },
        CelestialObject {
            id: 3,
            name: "Asteroide",
            orbit: OrbitParameters::new(3.0, 0.6, PI / 7.0, PI / 5.0, PI / 3.0),
            orbit_color: Color::srgb(0.95, 0.55, 0.15),
            body_color: Color::srgb(0.6, 0.5, 0.4),
            show_model: true,
            model_scale: Vec3::new(0.1, 0.16, 0.12),
            placement: Placement::PathStart,
            neo_id: None,
            summary: "A generic near-Earth asteroid on a moderately eccentric orbit.",
        },
        CelestialObject {
            id: 4,
            name: "1566 Icarus",
            orbit: OrbitParameters::new(4.0, 0.827, 22.8 * DEG_TO_RAD, PI / 3.0, 0.0),
            orbit_color: Color::srgb(0.9, 0.3, 0.3),
            body_color: Color::srgb(1.0, 0.9, 0.3),
            show_model: false,
            model_scale: Vec3::new(0.06, 0.07, 0.06),
            placement: Placement::PathStart,
            neo_id: Some("2001566"),
            summary: "Apollo asteroid whose perihelion lies inside the orbit of Mercury.",
        },
        CelestialObject {
            id: 5,
            name: "1685 Toro",
            orbit: OrbitParameters::new(3.6, 0.436, 9.4 * DEG_TO_RAD, -PI / 6.0, PI / 12.0),
            orbit_color: Color::srgb(0.4, 0.7, 0.9),
            body_color: Color::srgb(0.65, 0.6, 0.55),
            show_model: true,
            // Elongated 0.517 × 1.157 × 1 body.
            model_scale: Vec3::new(0.517, 1.157, 1.0) * 0.1,
            placement: Placement::Focus,
            neo_id: Some("2001685"),
            summary: "Apollo asteroid in a near resonance with Earth and Venus.",
        },
    ]
}

/// Look up an object by id.
pub fn get_object(id: u32) -> Option<CelestialObject> {
    all_objects().into_iter().find(|o| o.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let objects = all_objects();
        let ids: HashSet<u32> = objects.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), objects.len());
    }

    #[test]
    fn test_orbits_are_elliptical() {
        for object in all_objects() {
            assert!(object.orbit.semi_major_axis > 0.0, "{}", object.name);
            assert!(
                (0.0..1.0).contains(&object.orbit.eccentricity),
                "{} has e = {}",
                object.name,
                object.orbit.eccentricity
            );
        }
    }

    #[test]
    fn test_positions_are_off_center() {
        for object in all_objects() {
            let pos = object.position();
            assert!(pos.length() > 0.1, "{} sits at the center", object.name);
            assert!(pos.is_finite());
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_object(1).map(|o| o.name), Some("Luna"));
        assert!(get_object(999).is_none());
    }
}
