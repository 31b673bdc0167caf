//! NEO Orrery - Near-Earth Object Visualizer
//!
//! A desktop application showing near-Earth object orbits around a central
//! body, with click-to-focus camera flights and NASA NeoWs metadata.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use neo_orrery::OrreryPlugin;
use neo_orrery::config::OrreryConfig;
use neo_orrery::ui::TITLE;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: TITLE.to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(OrreryConfig::from_env())
        .add_plugins(OrreryPlugin)
        .run();
}
