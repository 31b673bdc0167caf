//! Shared types and constants for the orrery.

use bevy::math::{DVec3, Vec3};

/// A point in scene space.
///
/// Geometry is computed in f64 and narrowed to f32 only at the render boundary.
pub type Point3 = DVec3;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Milliseconds per second
pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Narrow a scene-space point to the f32 space used by transforms and gizmos.
pub fn to_render(point: Point3) -> Vec3 {
    point.as_vec3()
}
