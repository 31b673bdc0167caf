//! Info panel showing the selected object's description and orbit.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{UiState, colors, icons};
use crate::catalog::get_object;
use crate::neo::ObjectInfo;
use crate::orbit::OrbitParameters;
use crate::selection::{SelectedObject, SelectionCleared};
use crate::types::RAD_TO_DEG;

/// Human-readable orbit lines for the panel.
pub fn orbit_summary(params: &OrbitParameters) -> Vec<String> {
    vec![
        format!("Semi-major axis: {:.2}", params.semi_major_axis),
        format!("Semi-minor axis: {:.3}", params.semi_minor_axis()),
        format!("Eccentricity: {:.4}", params.eccentricity),
        format!(
            "Pitch / yaw / roll: {:.1}° / {:.1}° / {:.1}°",
            params.pitch * RAD_TO_DEG,
            params.yaw * RAD_TO_DEG,
            params.roll * RAD_TO_DEG
        ),
    ]
}

/// System that renders the info panel.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut selected: ResMut<SelectedObject>,
    mut cleared: MessageWriter<SelectionCleared>,
    info: Res<ObjectInfo>,
) {
    if !ui_state.info_panel_open {
        return;
    }
    let Some(id) = selected.id else {
        return;
    };
    let Some(object) = get_object(id) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::NONE
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(12));

    egui::SidePanel::left("info_panel")
        .resizable(false)
        .default_width(260.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            // Header with close button
            ui.horizontal(|ui| {
                if ui.button(icons::CLOSE).on_hover_text("Deselect").clicked() {
                    selected.clear();
                    cleared.write(SelectionCleared);
                }
                ui.heading(egui::RichText::new(object.name).color(colors::TEXT));
            });

            ui.separator();

            match info.description_for(id) {
                Some(description) => {
                    ui.label(egui::RichText::new(&description.name).strong().color(colors::TEXT));
                    ui.label(
                        egui::RichText::new(format!("{} Discovery: {}", icons::CLOCK, description.discovery))
                            .color(colors::MUTED),
                    );
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(&description.description).color(colors::TEXT));
                }
                None if info.is_loading(id) => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading data...");
                    });
                }
                None => {
                    ui.label(egui::RichText::new("No data available.").color(colors::MUTED));
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(egui::RichText::new(format!("{} Orbit", icons::ORBIT)).strong());
            for line in orbit_summary(&object.orbit) {
                ui.label(egui::RichText::new(line).color(colors::MUTED));
            }
        });
}
