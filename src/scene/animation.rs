//! Per-frame animation of the star.
//!
//! Spins the sphere and keeps the halo disc facing the camera, pulled
//! slightly toward it so the translucent glow does not z-fight the opaque
//! sphere.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::scene::star::{StarBody, StarHalo};
use crate::types::StarState;

/// Halo offset along the camera-to-star direction, in star radii.
pub const HALO_CAMERA_OFFSET: f32 = -0.15;

/// Advance the star's spin by the elapsed frame time.
pub fn spin_star(
    time: Res<Time>,
    star: Res<StarState>,
    mut bodies: Query<&mut Transform, With<StarBody>>,
) {
    let Ok(mut transform) = bodies.single_mut() else {
        return;
    };
    transform.rotate_y(star.spin * time.delta_secs());
}

/// Where the halo sits for a given camera: on the camera-to-star line,
/// `0.15 * radius` in front of the star's center.
pub fn halo_position(star_center: Vec3, camera_position: Vec3, radius: f32) -> Vec3 {
    let direction = (star_center - camera_position).normalize_or_zero();
    star_center + direction * (HALO_CAMERA_OFFSET * radius)
}

/// Reposition and orient the halo billboard toward the camera.
pub fn billboard_halo(
    star: Res<StarState>,
    cameras: Query<&Transform, (With<MainCamera>, Without<StarHalo>)>,
    bodies: Query<&Transform, (With<StarBody>, Without<StarHalo>, Without<MainCamera>)>,
    mut halos: Query<&mut Transform, With<StarHalo>>,
) {
    let (Ok(camera), Ok(body), Ok(mut halo)) = (cameras.single(), bodies.single(), halos.single_mut())
    else {
        return;
    };

    let position = halo_position(body.translation, camera.translation, star.radius as f32);
    halo.translation = position;
    // Disc normal (+Z) points back at the camera
    halo.look_to(position - camera.translation, Vec3::Y);
}
