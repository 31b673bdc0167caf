//! Camera system for the orrery.
//!
//! An orthographic camera orbits a focus point. Left-drag rotates around the
//! focus, the scroll wheel zooms, and panning is disabled. Selecting an object
//! or resetting the view flies the camera to a new pose; user rotation is
//! suspended until the flight lands.

mod animation;

use std::f64::consts::PI;

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    camera::ScalingMode,
    post_process::bloom::{Bloom, BloomPrefilter},
    prelude::*,
    render::view::Hdr,
};
use bevy_egui::EguiContexts;

pub use self::animation::{CameraMotion, CameraState, Flight, TickOutcome, interpolation_fraction};

use crate::config::OrreryConfig;
use crate::render::OrbitingObject;
use crate::selection::{ObjectSelected, ResetView};
use crate::types::{MILLIS_PER_SECOND, Point3, to_render};

/// Initial camera position.
pub const INITIAL_POSITION: Point3 = Point3::new(15.0, 20.0, 15.0);

/// Initial look-at point.
pub const INITIAL_FOCUS: Point3 = Point3::ZERO;

/// Initial zoom factor (orthographic scale is its inverse).
pub const INITIAL_ZOOM: f32 = 10.0;

/// Minimum zoom factor (furthest out).
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum zoom factor (closest in).
pub const MAX_ZOOM: f32 = 100.0;

/// Viewport height in scene units at zoom factor 1.
pub const VIEWPORT_HEIGHT: f32 = 150.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of mouse drag.
pub const ROTATE_SPEED: f64 = 0.005;

/// Keep the camera this far (radians) from the poles so `looking_at` stays defined.
const POLAR_MARGIN: f64 = 0.05;

/// Camera offset from a selected object, in scene units.
pub const SELECT_VIEW_OFFSET: Point3 = Point3::new(0.0, 1.5, 3.0);

/// Bloom strength on the camera.
pub const BLOOM_INTENSITY: f32 = 0.3;

/// Luminance above which pixels start to bloom.
pub const BLOOM_THRESHOLD: f32 = 0.2;

/// Width of the soft knee below the bloom threshold.
pub const BLOOM_THRESHOLD_SOFTNESS: f32 = 0.3;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource wrapping the camera pose and fly-to state.
#[derive(Resource, Deref, DerefMut)]
pub struct OrreryCamera(pub CameraState);

impl Default for OrreryCamera {
    fn default() -> Self {
        Self(CameraState::new(INITIAL_POSITION, INITIAL_FOCUS))
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrreryCamera>()
            .add_systems(Startup, (apply_config_duration, setup_camera))
            .add_systems(
                Update,
                (
                    handle_camera_requests,
                    animate_camera,
                    camera_rotate,
                    camera_zoom,
                    sync_camera_transform,
                )
                    .chain(),
            );
    }
}

/// Convert a zoom factor into an orthographic scale.
pub fn zoom_to_scale(zoom: f32) -> f32 {
    1.0 / zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Multiply the zoom factor of `ortho` by `factor`, staying within limits.
pub fn apply_zoom(ortho: &mut OrthographicProjection, factor: f32) {
    let zoom = (1.0 / ortho.scale) * factor;
    ortho.scale = zoom_to_scale(zoom);
}

/// Rotate `offset` (camera minus focus) around the focus.
///
/// `yaw_delta` turns about world Y; `pitch_delta` tilts toward the poles,
/// clamped short of them.
pub fn orbit_offset(offset: Point3, yaw_delta: f64, pitch_delta: f64) -> Point3 {
    let radius = offset.length();
    if radius <= f64::EPSILON {
        return offset;
    }

    let azimuth = offset.x.atan2(offset.z) - yaw_delta;
    let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - pitch_delta)
        .clamp(POLAR_MARGIN, PI - POLAR_MARGIN);

    Point3::new(
        radius * polar.sin() * azimuth.sin(),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.cos(),
    )
}

/// Bloom applied by the main camera, making the emissive Sun glow.
pub fn camera_bloom() -> Bloom {
    Bloom {
        intensity: BLOOM_INTENSITY,
        prefilter: BloomPrefilter {
            threshold: BLOOM_THRESHOLD,
            threshold_softness: BLOOM_THRESHOLD_SOFTNESS,
        },
        ..Bloom::NATURAL
    }
}

/// Pose requested for viewing an object at `position`.
pub fn view_pose_for(position: Point3) -> (Point3, Point3) {
    (position + SELECT_VIEW_OFFSET, position)
}

fn apply_config_duration(config: Res<OrreryConfig>, mut camera: ResMut<OrreryCamera>) {
    camera.0 = camera.0.clone().with_duration(config.animation_ms);
}

/// Spawn the main camera with orthographic projection.
fn setup_camera(mut commands: Commands, camera: Res<OrreryCamera>) {
    commands.spawn((
        Camera3d::default(),
        Hdr,
        camera_bloom(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEWPORT_HEIGHT,
            },
            scale: zoom_to_scale(INITIAL_ZOOM),
            near: -1000.0,
            far: 1000.0,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(to_render(camera.position))
            .looking_at(to_render(camera.focus), Vec3::Y),
        MainCamera,
    ));
}

/// Turn selection and reset messages into camera flights.
pub fn handle_camera_requests(
    mut selections: MessageReader<ObjectSelected>,
    mut resets: MessageReader<ResetView>,
    objects: Query<&OrbitingObject>,
    mut camera: ResMut<OrreryCamera>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
    time: Res<Time>,
) {
    let now_ms = time.elapsed_secs_f64() * MILLIS_PER_SECOND;

    // Only the latest request in a frame matters; earlier ones would be
    // overridden immediately anyway.
    if let Some(selected) = selections.read().last() {
        if let Some(object) = objects.iter().find(|o| o.id == selected.id) {
            let (target, focus) = view_pose_for(object.position);
            camera.request(target, focus, now_ms);
            debug!("Camera flying to {} at {:?}", object.name, target);
        } else {
            warn!("Selected object {} has no scene entity", selected.id);
        }
    }

    if resets.read().last().is_some() {
        camera.request(INITIAL_POSITION, INITIAL_FOCUS, now_ms);
        if let Ok(mut projection) = projections.single_mut()
            && let Projection::Orthographic(ref mut ortho) = *projection
        {
            ortho.scale = zoom_to_scale(INITIAL_ZOOM);
        }
        info!("Camera view reset");
    }
}

/// Advance the fly-to animation once per frame.
pub fn animate_camera(mut camera: ResMut<OrreryCamera>, time: Res<Time>) {
    if !camera.auto_move() {
        return;
    }
    let now_ms = time.elapsed_secs_f64() * MILLIS_PER_SECOND;
    if camera.tick(now_ms) == TickOutcome::Finished {
        debug!("Camera flight finished at {:?}", camera.position);
    }
}

/// Handle left mouse drag for orbiting around the focus.
fn camera_rotate(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera: ResMut<OrreryCamera>,
    mut contexts: EguiContexts,
) {
    if !mouse_buttons.pressed(MouseButton::Left) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    if !camera.rotation_enabled() {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let delta = mouse_motion.delta.as_dvec2() * ROTATE_SPEED;
    let offset = orbit_offset(camera.position - camera.focus, delta.x, delta.y);
    let focus = camera.focus;
    camera.set_pose(focus + offset, focus);
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    let Projection::Orthographic(ref mut ortho) = *projection else {
        return;
    };

    apply_zoom(ortho, 1.0 + mouse_scroll.delta.y * ZOOM_SPEED);
}

/// Copy the camera pose into the camera transform.
pub fn sync_camera_transform(
    camera: Res<OrreryCamera>,
    mut transforms: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = transforms.single_mut() else {
        return;
    };

    let position = to_render(camera.position);
    let focus = to_render(camera.focus);
    if position.distance_squared(focus) <= f32::EPSILON {
        return;
    }
    *transform = Transform::from_translation(position).looking_at(focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_zoom_scale_inverse() {
        assert_relative_eq!(zoom_to_scale(INITIAL_ZOOM), 0.1);
        assert_relative_eq!(zoom_to_scale(1000.0), 1.0 / MAX_ZOOM);
        assert_relative_eq!(zoom_to_scale(0.0), 1.0 / MIN_ZOOM);
    }

    #[test]
    fn test_apply_zoom() {
        let mut ortho = OrthographicProjection::default_3d();
        ortho.scale = zoom_to_scale(10.0);
        apply_zoom(&mut ortho, 2.0);
        assert_relative_eq!(1.0 / ortho.scale, 20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_orbit_offset_preserves_radius() {
        let offset = INITIAL_POSITION - INITIAL_FOCUS;
        let rotated = orbit_offset(offset, 0.7, -0.3);
        assert_relative_eq!(rotated.length(), offset.length(), epsilon = 1e-9);
    }

    #[test]
    fn test_orbit_offset_zero_delta_is_identity() {
        let offset = Point3::new(3.0, 4.0, -2.0);
        let same = orbit_offset(offset, 0.0, 0.0);
        assert_relative_eq!(same.x, offset.x, epsilon = 1e-9);
        assert_relative_eq!(same.y, offset.y, epsilon = 1e-9);
        assert_relative_eq!(same.z, offset.z, epsilon = 1e-9);
    }

    #[test]
    fn test_orbit_offset_clamps_at_pole() {
        let rotated = orbit_offset(Point3::new(0.0, 0.0, 10.0), 0.0, 10.0);
        let polar = (rotated.y / rotated.length()).acos();
        assert_relative_eq!(polar, POLAR_MARGIN, epsilon = 1e-9);
    }

    #[test]
    fn test_bloom_thresholds_the_sun() {
        let bloom = camera_bloom();
        assert_relative_eq!(bloom.intensity, BLOOM_INTENSITY);
        assert_relative_eq!(bloom.prefilter.threshold, 0.2);
        assert_relative_eq!(bloom.prefilter.threshold_softness, 0.3);
    }

    #[test]
    fn test_view_pose() {
        let (target, focus) = view_pose_for(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(focus, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(target, Point3::new(1.0, 3.5, 6.0));
    }
}
