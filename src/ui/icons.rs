//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Info icon
pub const INFO: &str = egui_phosphor::regular::INFO;
/// Layers icon (orbit visibility)
pub const LAYERS: &str = egui_phosphor::regular::STACK;
/// Tag icon (label visibility)
pub const LABELS: &str = egui_phosphor::regular::TAG;
/// Zoom in
pub const ZOOM_IN: &str = egui_phosphor::regular::PLUS;
/// Zoom out
pub const ZOOM_OUT: &str = egui_phosphor::regular::MINUS;
/// Reset/reload icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Globe icon for the title bar
pub const GLOBE: &str = egui_phosphor::regular::GLOBE;
/// Clock icon (discovery date)
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Orbit/path icon
pub const ORBIT: &str = egui_phosphor::regular::PATH;
