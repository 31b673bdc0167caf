//! Object labels using egui for text rendering.
//!
//! Names are projected to screen space each frame, so they always face the
//! viewer regardless of camera orientation.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::render::bodies::OrbitingObject;
use crate::selection::SelectedObject;
use crate::types::to_render;

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Offset from object center in screen pixels.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            offset: 12.0,
        }
    }
}

/// Draw labels for all orbiting objects.
pub fn draw_object_labels(
    mut egui_ctx: EguiContexts,
    objects: Query<&OrbitingObject>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    selected: Res<SelectedObject>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("object_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for object in objects.iter() {
                let Ok(screen_pos) =
                    camera.world_to_viewport(camera_transform, to_render(object.position))
                else {
                    continue;
                };

                let label_pos = egui::pos2(
                    screen_pos.x + settings.offset,
                    screen_pos.y + settings.offset,
                );

                let font = egui::FontId::proportional(14.0);
                let text_color = if selected.is(object.id) {
                    egui::Color32::from_rgb(0, 255, 255)
                } else {
                    egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230)
                };

                // Shadow
                painter.text(
                    label_pos + egui::vec2(1.0, 1.0),
                    egui::Align2::LEFT_TOP,
                    &object.name,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );

                painter.text(label_pos, egui::Align2::LEFT_TOP, &object.name, font, text_color);
            }
        });
}
