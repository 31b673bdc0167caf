//! Selection highlighting.
//!
//! Draws a ring around the selected object, re-oriented every frame to face
//! the camera.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::render::bodies::OrbitingObject;
use crate::selection::SelectedObject;
use crate::types::to_render;

/// Ring radius around the selected object.
pub const RING_RADIUS: f32 = 0.45;

/// Segments in the highlight ring.
const RING_SEGMENTS: usize = 32;

/// Plugin providing selection highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_highlight);
    }
}

/// Points of a closed ring around `center` in the plane spanned by `right` and `up`.
pub fn billboard_ring(center: Vec3, right: Vec3, up: Vec3, radius: f32, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let angle = (i % segments) as f32 / segments as f32 * std::f32::consts::TAU;
            center + (right * angle.cos() + up * angle.sin()) * radius
        })
        .collect()
}

/// Draw highlight ring around the selected object.
fn draw_highlight(
    mut gizmos: Gizmos,
    selected: Res<SelectedObject>,
    objects: Query<&OrbitingObject>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
) {
    let Some(id) = selected.id else {
        return;
    };
    let Some(object) = objects.iter().find(|o| o.id == id) else {
        return;
    };
    let Ok(camera_transform) = camera.single() else {
        return;
    };

    let ring = billboard_ring(
        to_render(object.position),
        *camera_transform.right(),
        *camera_transform.up(),
        RING_RADIUS,
        RING_SEGMENTS,
    );

    // Cyan
    gizmos.linestrip(ring, Color::srgba(0.0, 1.0, 1.0, 0.8));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_is_closed_and_round() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let ring = billboard_ring(center, Vec3::X, Vec3::Y, 0.5, 16);
        assert_eq!(ring.len(), 17);
        assert_eq!(ring[0], ring[16]);
        for p in &ring {
            assert!(((*p - center).length() - 0.5).abs() < 1e-5);
            assert!((p.z - 3.0).abs() < 1e-6);
        }
    }
}
