//! Star, halo and light spawning.
//!
//! The star is a unit sphere scaled to its radius in solar radii, so one
//! render unit equals one solar radius.

use bevy::prelude::*;

use crate::color::color_from_temp_k;
use crate::model::SOLAR_TEFF_K;

/// World position of the star's center.
pub const STAR_POSITION: Vec3 = Vec3::new(0.0, 0.3, 0.0);

/// Sphere tessellation (sectors and stacks).
const SPHERE_SEGMENTS: u32 = 48;

/// Marker for the star's sphere mesh.
#[derive(Component)]
pub struct StarBody;

/// Marker for the camera-facing glow disc around the star.
#[derive(Component)]
pub struct StarHalo;

/// Marker for the point light emitted by the star.
#[derive(Component)]
pub struct StarLight;

/// Spawn the star sphere, its halo billboard and its point light.
pub fn spawn_star(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let color = color_from_temp_k(SOLAR_TEFF_K);

    let sphere = meshes.add(Sphere::new(1.0).mesh().uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS));
    let star_material = materials.add(StandardMaterial {
        base_color: color.into(),
        emissive: color * 0.35,
        ..default()
    });

    commands.spawn((
        Mesh3d(sphere),
        MeshMaterial3d(star_material),
        Transform::from_translation(STAR_POSITION),
        StarBody,
    ));

    // Unit-diameter disc, scaled to the halo size every update
    let disc = meshes.add(Circle::new(0.5));
    let halo_material = materials.add(StandardMaterial {
        base_color: LinearRgba { alpha: 0.2, ..color }.into(),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(disc),
        MeshMaterial3d(halo_material),
        Transform::from_translation(STAR_POSITION),
        StarHalo,
    ));

    commands.spawn((
        PointLight {
            color: color.into(),
            shadows_enabled: false,
            range: 60.0,
            ..default()
        },
        Transform::from_translation(STAR_POSITION),
        StarLight,
    ));

    info!("Spawned star, halo and light");
}
