//! Orbiting object spawning and the central scene bodies.
//!
//! Objects flagged `show_model` get a detailed ellipsoid; the rest get a small
//! placeholder marker sphere.

use bevy::prelude::*;

use crate::catalog::{CelestialObject, MARKER_RADIUS, all_objects};
use crate::config::OrreryConfig;
use crate::orbit::{OrbitParameters, OrbitPath, Placement};
use crate::types::{Point3, to_render};

/// Position of the Sun (light source) in scene space.
pub const SUN_POSITION: Vec3 = Vec3::new(-7.0, 0.0, 0.0);

/// Sun sphere radius.
pub const SUN_RADIUS: f32 = 1.0;

/// Radius of the central body the objects orbit.
pub const CENTRAL_BODY_RADIUS: f32 = 0.4;

/// Component marking an entity as an orbiting object.
#[derive(Component, Clone, Debug)]
pub struct OrbitingObject {
    /// Catalog id.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Orbit the path is generated from; edit it to reshape the orbit.
    pub orbit: OrbitParameters,
    pub placement: Placement,
    /// Rendered position in scene space.
    pub position: Point3,
    /// Orbit polyline.
    pub path: OrbitPath,
    pub orbit_color: Color,
    /// Whether the detailed model is shown.
    pub show_model: bool,
}

impl OrbitingObject {
    /// Build the component for a catalog entry with `segments` orbit segments.
    pub fn from_catalog(object: &CelestialObject, segments: usize) -> Self {
        let path = OrbitPath::generate(object.orbit, segments);
        let position = object.placement.resolve(&path);
        Self {
            id: object.id,
            name: object.name.to_string(),
            orbit: object.orbit,
            placement: object.placement,
            position,
            path,
            orbit_color: object.orbit_color,
            show_model: object.show_model,
        }
    }
}

/// Marker for the Sun entity.
#[derive(Component)]
pub struct Sun;

/// Marker for the central body.
#[derive(Component)]
pub struct CentralBody;

/// Plugin providing scene body spawning.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_sun, spawn_objects))
            .add_systems(Update, regenerate_orbit_paths);
    }
}

/// Spawn the Sun with its point light and the central body.
fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sun_color = Color::srgb(1.0, 0.85, 0.2);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color,
            emissive: Color::srgb(1.0, 0.55, 0.0).to_linear() * 8.0,
            ..default()
        })),
        Transform::from_translation(SUN_POSITION),
        Sun,
    ));

    commands.spawn((
        PointLight {
            intensity: 20_000_000.0,
            range: 500.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(CENTRAL_BODY_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.5, 0.8),
            ..default()
        })),
        Transform::from_translation(Vec3::ZERO),
        CentralBody,
    ));
}

/// Spawn every catalog object with its orbit.
fn spawn_objects(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<OrreryConfig>,
) {
    let unit_sphere = meshes.add(Sphere::new(1.0));
    let marker = meshes.add(Sphere::new(MARKER_RADIUS));
    let marker_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 0.0),
        emissive: LinearRgba::rgb(0.4, 0.4, 0.0),
        ..default()
    });

    let objects = all_objects();
    for object in &objects {
        let component = OrbitingObject::from_catalog(object, config.orbit_segments);
        let translation = to_render(component.position);

        if object.show_model {
            commands.spawn((
                Mesh3d(unit_sphere.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: object.body_color,
                    perceptual_roughness: 0.9,
                    ..default()
                })),
                Transform::from_translation(translation).with_scale(object.model_scale),
                component,
            ));
        } else {
            commands.spawn((
                Mesh3d(marker.clone()),
                MeshMaterial3d(marker_material.clone()),
                Transform::from_translation(translation),
                component,
            ));
        }
    }

    info!("Spawned {} orbiting objects", objects.len());
}

/// Rebuild paths and positions of objects whose orbit parameters changed.
pub fn regenerate_orbit_paths(
    mut objects: Query<(&mut OrbitingObject, &mut Transform), Changed<OrbitingObject>>,
) {
    for (mut object, mut transform) in &mut objects {
        let orbit = object.orbit;
        if !object.path.regenerate_if_changed(orbit) {
            continue;
        }
        let position = object.placement.resolve(&object.path);
        object.position = position;
        transform.translation = to_render(position);
        debug!("Regenerated orbit of {}", object.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_object;

    #[test]
    fn test_component_uses_catalog_placement() {
        let luna = get_object(1).unwrap();
        let component = OrbitingObject::from_catalog(&luna, 100);
        assert_eq!(component.path.len(), 101);
        assert_eq!(component.position, component.path.first());

        let toro = get_object(5).unwrap();
        let component = OrbitingObject::from_catalog(&toro, 64);
        assert_eq!(component.position, toro.orbit.focus_offset());
    }
}
