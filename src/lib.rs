//! NEO Orrery - Near-Earth Object Visualizer
//!
//! A library crate providing orbit geometry, camera animation and metadata
//! lookup for the orrery, plus the Bevy plugins that assemble them.

pub mod camera;
pub mod catalog;
pub mod config;
pub mod neo;
pub mod orbit;
pub mod render;
pub mod selection;
pub mod types;
pub mod ui;

use bevy::prelude::*;

use camera::CameraPlugin;
use neo::MetadataPlugin;
use render::RenderPlugin;
use selection::SelectionPlugin;
use ui::UiPlugin;

/// Plugin aggregating every orrery subsystem.
///
/// Expects `DefaultPlugins`, `EguiPlugin` and an [`config::OrreryConfig`]
/// resource to be present.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SelectionPlugin,
            CameraPlugin,
            MetadataPlugin,
            RenderPlugin,
            UiPlugin,
        ));
    }
}
