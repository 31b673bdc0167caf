//! UI module providing the egui overlay.
//!
//! A title bar across the top, a column of controls on the right and an
//! info panel for the selected object.

mod controls;
pub mod icons;
mod info_panel;
mod nav_bar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use info_panel::orbit_summary;
pub use nav_bar::TITLE;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    nav_bar::nav_bar_system,
                    controls::controls_system,
                    info_panel::info_panel_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Global UI state.
#[derive(Resource)]
pub struct UiState {
    /// Whether the info panel is expanded.
    pub info_panel_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            info_panel_open: true,
        }
    }
}

/// Colors for the overlay.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 220);
    pub const BUTTON_BG: Color32 = Color32::from_rgb(17, 24, 39);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(150, 150, 165);
    pub const ACCENT: Color32 = Color32::from_rgb(0, 220, 220);
}
