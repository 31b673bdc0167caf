//! Title bar across the top of the window.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons};

/// Application title shown in the bar.
pub const TITLE: &str = "Orrery Near-Earth Objects";

pub fn nav_bar_system(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("nav_bar")
        .exact_height(48.0)
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::TRANSPARENT)
                .inner_margin(egui::Margin::symmetric(24, 8)),
        )
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(egui::RichText::new(icons::GLOBE).size(28.0).color(colors::ACCENT));
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(TITLE)
                        .size(18.0)
                        .strong()
                        .color(colors::TEXT),
                );
            });
        });
}
