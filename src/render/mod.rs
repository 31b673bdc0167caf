//! Rendering systems for the orrery.
//!
//! This module provides the Sun and central body, orbiting objects, orbit
//! polylines, labels and the selection highlight.

pub mod bodies;
pub mod highlight;
mod labels;
mod orbits;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::bodies::BodiesPlugin;
use self::highlight::HighlightPlugin;
use self::labels::draw_object_labels;
use self::orbits::OrbitPathPlugin;

// Re-export for use in other modules
pub use self::bodies::{OrbitingObject, regenerate_orbit_paths};
pub use self::labels::LabelSettings;
pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, OrbitPathPlugin, HighlightPlugin))
            .init_resource::<LabelSettings>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(EguiPrimaryContextPass, draw_object_labels);
    }
}
