//! Object selection and view reset.
//!
//! At most one object is selected at a time. Clicking an object selects it and
//! emits [`ObjectSelected`], which the camera and metadata systems consume.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::config::OrreryConfig;
use crate::render::OrbitingObject;
use crate::types::to_render;

/// Resource tracking the currently selected object.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedObject {
    pub id: Option<u32>,
}

impl SelectedObject {
    /// Select `id`, replacing any previous selection.
    pub fn select(&mut self, id: u32) {
        self.id = Some(id);
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    pub fn is(&self, id: u32) -> bool {
        self.id == Some(id)
    }
}

/// Emitted when the user selects an object.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectSelected {
    pub id: u32,
}

/// Emitted when the selection is cleared.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct SelectionCleared;

/// Request to fly the camera back to its initial pose.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ResetView;

/// Plugin providing pointer picking and selection shortcuts.
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedObject>()
            .add_message::<ObjectSelected>()
            .add_message::<SelectionCleared>()
            .add_message::<ResetView>()
            .add_systems(Update, (pick_object, selection_shortcuts));
    }
}

/// Find the candidate closest to `cursor` within `radius`.
///
/// Candidates are `(id, screen position)` pairs.
pub fn pick_nearest(
    cursor: Vec2,
    candidates: impl IntoIterator<Item = (u32, Vec2)>,
    radius: f32,
) -> Option<u32> {
    candidates
        .into_iter()
        .map(|(id, pos)| (id, pos.distance(cursor)))
        .filter(|&(_, dist)| dist <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Apply a selection and announce it.
pub fn select_object(
    id: u32,
    selected: &mut SelectedObject,
    writer: &mut MessageWriter<ObjectSelected>,
) {
    selected.select(id);
    writer.write(ObjectSelected { id });
}

/// Select the object under the cursor on left click.
fn pick_object(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    objects: Query<&OrbitingObject>,
    config: Res<OrreryConfig>,
    mut selected: ResMut<SelectedObject>,
    mut writer: MessageWriter<ObjectSelected>,
    mut contexts: EguiContexts,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let candidates = objects.iter().filter_map(|object| {
        camera
            .world_to_viewport(camera_transform, to_render(object.position))
            .ok()
            .map(|screen| (object.id, screen))
    });

    if let Some(id) = pick_nearest(cursor, candidates, config.pick_radius) {
        if let Some(object) = objects.iter().find(|o| o.id == id) {
            info!("Selected {}", object.name);
        }
        select_object(id, &mut selected, &mut writer);
    }
}

/// Keyboard shortcuts: R resets the view, Escape clears the selection.
fn selection_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut selected: ResMut<SelectedObject>,
    mut cleared: MessageWriter<SelectionCleared>,
    mut resets: MessageWriter<ResetView>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        resets.write(ResetView);
    }

    if keys.just_pressed(KeyCode::Escape) && selected.id.is_some() {
        selected.clear();
        cleared.write(SelectionCleared);
        info!("Selection cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_nearest_prefers_closest() {
        let candidates = [(1, Vec2::new(100.0, 100.0)), (2, Vec2::new(110.0, 100.0))];
        assert_eq!(pick_nearest(Vec2::new(108.0, 100.0), candidates, 24.0), Some(2));
        assert_eq!(pick_nearest(Vec2::new(101.0, 100.0), candidates, 24.0), Some(1));
    }

    #[test]
    fn test_pick_nearest_respects_radius() {
        let candidates = [(1, Vec2::new(0.0, 0.0))];
        assert_eq!(pick_nearest(Vec2::new(30.0, 0.0), candidates, 24.0), None);
        assert_eq!(pick_nearest(Vec2::new(24.0, 0.0), candidates, 24.0), Some(1));
    }

    #[test]
    fn test_pick_nearest_empty() {
        assert_eq!(pick_nearest(Vec2::ZERO, std::iter::empty(), 24.0), None);
    }

    #[test]
    fn test_single_selection() {
        let mut selected = SelectedObject::default();
        selected.select(1);
        selected.select(3);
        assert!(selected.is(3));
        assert!(!selected.is(1));
        selected.clear();
        assert_eq!(selected.id, None);
    }
}
