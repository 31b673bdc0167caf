//! Elliptical orbit geometry.
//!
//! An orbit is described by its shape (semi-major axis and eccentricity) and
//! an orientation given as three rotation angles. The untransformed ellipse is
//! centered at the origin in the XY plane:
//!
//! ```text
//! x(u) = a·cos(u)
//! y(u) = b·sin(u),   b = a·√(1 − e²)
//! z(u) = 0
//! ```
//!
//! It is then rotated about world Y by `pitch`, world Z by `yaw` and world X by
//! `roll`, in that order. Rotations about fixed axes do not commute, so the
//! order is part of the contract.

use std::f64::consts::TAU;

use bevy::math::{DQuat, Vec3};

use crate::types::{Point3, to_render};

#[cfg(test)]
mod proptest_orbit;

/// Default number of segments for a generated orbit path (101 points).
pub const DEFAULT_SEGMENTS: usize = 100;

/// Shape and orientation of an elliptical orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParameters {
    /// Semi-major axis in scene units (> 0).
    pub semi_major_axis: f64,
    /// Eccentricity in [0, 1).
    pub eccentricity: f64,
    /// Rotation about world Y (radians), applied first.
    pub pitch: f64,
    /// Rotation about world Z (radians), applied second.
    pub yaw: f64,
    /// Rotation about world X (radians), applied last.
    pub roll: f64,
}

impl OrbitParameters {
    pub const fn new(semi_major_axis: f64, eccentricity: f64, pitch: f64, yaw: f64, roll: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            pitch,
            yaw,
            roll,
        }
    }

    /// Semi-minor axis b = a·√(1 − e²).
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Distance from the ellipse center to a focus (a·e).
    pub fn focus_distance(&self) -> f64 {
        self.semi_major_axis * self.eccentricity
    }

    /// Unrotated focus offset, (a·e, 0, 0).
    pub fn focus_offset(&self) -> Point3 {
        Point3::new(self.focus_distance(), 0.0, 0.0)
    }

    /// Combined rotation equivalent to pitch (Y), then yaw (Z), then roll (X).
    pub fn orientation(&self) -> DQuat {
        DQuat::from_rotation_x(self.roll)
            * DQuat::from_rotation_z(self.yaw)
            * DQuat::from_rotation_y(self.pitch)
    }

    /// Point on the untransformed ellipse at parameter `u`.
    pub fn unrotated_point(&self, u: f64) -> Point3 {
        Point3::new(
            self.semi_major_axis * u.cos(),
            self.semi_minor_axis() * u.sin(),
            0.0,
        )
    }
}

/// Rotate every point of a set about a fixed world axis.
fn rotate_points(points: &mut [Point3], rotation: DQuat) {
    for p in points.iter_mut() {
        *p = rotation * *p;
    }
}

/// Closed, ordered point sequence tracing a rotated ellipse.
///
/// Holds `segments + 1` points; the last point duplicates the first.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    params: OrbitParameters,
    points: Vec<Point3>,
}

impl OrbitPath {
    /// Generate the path for `params` with the given number of segments.
    pub fn generate(params: OrbitParameters, segments: usize) -> Self {
        debug_assert!(params.semi_major_axis > 0.0, "semi-major axis must be positive");
        debug_assert!(
            (0.0..1.0).contains(&params.eccentricity),
            "eccentricity must be in [0, 1)"
        );

        let segments = segments.max(3);
        let mut points: Vec<Point3> = (0..=segments)
            .map(|i| params.unrotated_point(TAU * i as f64 / segments as f64))
            .collect();

        // cos/sin of TAU are not exactly 1/0; pin the seam.
        points[segments] = points[0];

        rotate_points(&mut points, DQuat::from_rotation_y(params.pitch));
        rotate_points(&mut points, DQuat::from_rotation_z(params.yaw));
        rotate_points(&mut points, DQuat::from_rotation_x(params.roll));

        Self { params, points }
    }

    /// Generate with [`DEFAULT_SEGMENTS`].
    pub fn from_params(params: OrbitParameters) -> Self {
        Self::generate(params, DEFAULT_SEGMENTS)
    }

    /// Rebuild the path if `params` differ from the ones it was generated with.
    ///
    /// Returns `true` when the path changed.
    pub fn regenerate_if_changed(&mut self, params: OrbitParameters) -> bool {
        if self.params == params {
            return false;
        }
        *self = Self::generate(params, self.segments());
        true
    }

    pub fn params(&self) -> &OrbitParameters {
        &self.params
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// First point of the path (u = 0 before rotation).
    pub fn first(&self) -> Point3 {
        self.points[0]
    }

    /// Whether the first and last points coincide within `epsilon`.
    pub fn is_closed(&self, epsilon: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a.distance(*b) <= epsilon,
            _ => false,
        }
    }

    /// Points narrowed to f32 for line drawing.
    pub fn to_render_points(&self) -> Vec<Vec3> {
        self.points.iter().copied().map(to_render).collect()
    }
}

/// Where an orbiting object sits relative to its orbit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// First point of the rotated path.
    #[default]
    PathStart,
    /// Unrotated focus offset (a·e, 0, 0).
    Focus,
}

impl Placement {
    /// Resolve the object position for a generated path.
    pub fn resolve(self, path: &OrbitPath) -> Point3 {
        match self {
            Placement::PathStart => path.first(),
            Placement::Focus => path.params().focus_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    fn luna() -> OrbitParameters {
        OrbitParameters::new(2.0, 0.0549, PI / 5.0, PI / 4.0, PI / 6.0)
    }

    #[test]
    fn test_luna_orbit_shape() {
        let path = OrbitPath::from_params(luna());

        assert_eq!(path.len(), 101);
        assert!(path.is_closed(1e-12));

        let b = luna().semi_minor_axis();
        assert_relative_eq!(b, 2.0 * (1.0f64 - 0.0549 * 0.0549).sqrt(), epsilon = 1e-12);
        assert!((b - 1.997).abs() < 1e-3, "b = {b}");
    }

    #[test]
    fn test_circle_without_rotation_stays_in_xy_plane() {
        let params = OrbitParameters::new(3.0, 0.0, 0.0, 0.0, 0.0);
        let path = OrbitPath::generate(params, 64);

        for p in path.points() {
            assert_relative_eq!(p.length(), 3.0, epsilon = 1e-12);
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(path.first().x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_order_matters() {
        let params = OrbitParameters::new(1.0, 0.0, PI / 2.0, PI / 2.0, 0.0);
        let path = OrbitPath::generate(params, 4);

        // (1,0,0) -Ry(π/2)-> (0,0,-1) -Rz(π/2)-> (0,0,-1)
        let p = path.first();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-12);

        // Swapping the order (yaw first) would land on (0,1,0) instead.
        let swapped = DQuat::from_rotation_y(PI / 2.0) * DQuat::from_rotation_z(PI / 2.0);
        let q = swapped * Point3::X;
        assert!((q - p).length() > 0.5);
    }

    #[test]
    fn test_sequential_rotation_matches_orientation() {
        let params = luna();
        let path = OrbitPath::generate(params, 16);
        let orientation = params.orientation();

        for (i, p) in path.points().iter().enumerate().take(16) {
            let u = TAU * i as f64 / 16.0;
            let expected = orientation * params.unrotated_point(u);
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-12);
            assert_relative_eq!(p.z, expected.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_placement_variants() {
        let params = OrbitParameters::new(5.0, 0.9, PI / 8.0, PI / 6.0, PI / 4.0);
        let path = OrbitPath::from_params(params);

        assert_eq!(Placement::PathStart.resolve(&path), path.first());
        let focus = Placement::Focus.resolve(&path);
        assert_relative_eq!(focus.x, 4.5, epsilon = 1e-12);
        assert_eq!(focus.y, 0.0);
        assert_eq!(focus.z, 0.0);
    }

    #[test]
    fn test_regenerate_only_on_change() {
        let mut path = OrbitPath::generate(luna(), 40);
        assert!(!path.regenerate_if_changed(luna()));

        let mut wider = luna();
        wider.semi_major_axis = 4.0;
        assert!(path.regenerate_if_changed(wider));
        assert_eq!(path.segments(), 40);
        assert_eq!(path.params().semi_major_axis, 4.0);
        assert_relative_eq!(path.first().length(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_render_points_match_length() {
        let path = OrbitPath::from_params(luna());
        let render = path.to_render_points();
        assert_eq!(render.len(), path.len());
        assert!((render[0] - render[render.len() - 1]).length() < 1e-6);
    }
}
