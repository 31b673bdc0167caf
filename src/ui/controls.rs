//! Column of icon buttons on the right edge of the window.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{UiState, colors, icons};
use crate::camera::{MainCamera, apply_zoom};
use crate::render::{LabelSettings, OrbitPathSettings};
use crate::selection::ResetView;

/// Zoom factor applied per button press.
pub const BUTTON_ZOOM_STEP: f32 = 1.25;

/// Action triggered by a control button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    ToggleInfo,
    ToggleOrbits,
    ToggleLabels,
    ZoomIn,
    ZoomOut,
    ResetView,
}

impl ControlAction {
    pub const ALL: [ControlAction; 6] = [
        ControlAction::ToggleInfo,
        ControlAction::ToggleOrbits,
        ControlAction::ToggleLabels,
        ControlAction::ZoomIn,
        ControlAction::ZoomOut,
        ControlAction::ResetView,
    ];

    fn icon(self) -> &'static str {
        match self {
            ControlAction::ToggleInfo => icons::INFO,
            ControlAction::ToggleOrbits => icons::LAYERS,
            ControlAction::ToggleLabels => icons::LABELS,
            ControlAction::ZoomIn => icons::ZOOM_IN,
            ControlAction::ZoomOut => icons::ZOOM_OUT,
            ControlAction::ResetView => icons::RESET,
        }
    }

    fn tooltip(self) -> &'static str {
        match self {
            ControlAction::ToggleInfo => "Toggle info panel",
            ControlAction::ToggleOrbits => "Show/hide orbits",
            ControlAction::ToggleLabels => "Show/hide labels",
            ControlAction::ZoomIn => "Zoom in",
            ControlAction::ZoomOut => "Zoom out",
            ControlAction::ResetView => "Reset view (R)",
        }
    }
}

pub fn controls_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut orbit_settings: ResMut<OrbitPathSettings>,
    mut label_settings: ResMut<LabelSettings>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
    mut resets: MessageWriter<ResetView>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut clicked = None;
    egui::Area::new(egui::Id::new("controls"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 160.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 8.0;
                        for action in ControlAction::ALL {
                            let button = egui::Button::new(
                                egui::RichText::new(action.icon()).size(18.0).color(colors::TEXT),
                            )
                            .fill(colors::BUTTON_BG)
                            .corner_radius(16.0)
                            .min_size(egui::vec2(32.0, 32.0));

                            if ui.add(button).on_hover_text(action.tooltip()).clicked() {
                                clicked = Some(action);
                            }
                        }
                    });
                });
        });

    let Some(action) = clicked else {
        return;
    };

    match action {
        ControlAction::ToggleInfo => ui_state.info_panel_open = !ui_state.info_panel_open,
        ControlAction::ToggleOrbits => orbit_settings.visible = !orbit_settings.visible,
        ControlAction::ToggleLabels => label_settings.visible = !label_settings.visible,
        ControlAction::ZoomIn | ControlAction::ZoomOut => {
            let factor = if action == ControlAction::ZoomIn {
                BUTTON_ZOOM_STEP
            } else {
                1.0 / BUTTON_ZOOM_STEP
            };
            if let Ok(mut projection) = projections.single_mut()
                && let Projection::Orthographic(ref mut ortho) = *projection
            {
                apply_zoom(ortho, factor);
            }
        }
        ControlAction::ResetView => {
            resets.write(ResetView);
        }
    }
}
