//! Orbit path rendering using Bevy Gizmos.
//!
//! Each object's precomputed path is drawn as a closed polyline. The selected
//! object's orbit is drawn at full opacity, the others dimmed.

use bevy::prelude::*;

use crate::render::bodies::OrbitingObject;
use crate::selection::SelectedObject;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Alpha for orbits of unselected objects.
    pub alpha: f32,
    /// Alpha for the selected object's orbit.
    pub selected_alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 0.6,
            selected_alpha: 1.0,
        }
    }
}

/// Color for an orbit given the selection state.
pub fn orbit_color(base: Color, selected: bool, settings: &OrbitPathSettings) -> Color {
    let alpha = if selected {
        settings.selected_alpha
    } else {
        settings.alpha
    };
    base.with_alpha(alpha)
}

/// Draw every orbit as a closed polyline.
fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    selected: Res<SelectedObject>,
    objects: Query<&OrbitingObject>,
) {
    if !settings.visible {
        return;
    }

    for object in objects.iter() {
        let color = orbit_color(object.orbit_color, selected.is(object.id), &settings);
        gizmos.linestrip(object.path.to_render_points(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_orbit_is_opaque() {
        let settings = OrbitPathSettings::default();
        let base = Color::srgb(1.0, 0.0, 0.0);
        assert_eq!(orbit_color(base, true, &settings).alpha(), 1.0);
        assert_eq!(orbit_color(base, false, &settings).alpha(), 0.6);
    }
}
