//! Camera system for the star viewer.
//!
//! Provides a fixed-direction perspective camera that zooms by moving along
//! its depth axis.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*};
use bevy_egui::EguiContexts;

use crate::scene::STAR_POSITION;
use crate::types::StarSystemSet;

/// Initial camera position.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 1.5, 7.0);

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 60.0;

/// Closest camera depth.
pub const MIN_DISTANCE: f32 = 2.0;

/// Furthest camera depth.
pub const MAX_DISTANCE: f32 = 30.0;

/// Depth change per scroll wheel notch.
pub const WHEEL_STEP: f32 = 0.6;

/// Depth change per zoom button press.
pub const BUTTON_STEP: f32 = 0.8;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Request to move the camera along its depth axis.
///
/// Negative deltas zoom in.
#[derive(Message, Clone, Copy, Debug)]
pub struct ZoomCamera(pub f32);

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ZoomCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_wheel_zoom, apply_zoom_requests)
                    .chain()
                    .in_set(StarSystemSet::Input),
            );
    }
}

/// Clamp a camera depth into the allowed zoom range.
pub fn clamp_distance(z: f32) -> f32 {
    z.clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Spawn the main camera looking slightly down at the star.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(CAMERA_START).looking_at(STAR_POSITION, Vec3::Y),
        MainCamera,
    ));
}

/// Turn scroll wheel input into zoom requests.
fn camera_wheel_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut contexts: EguiContexts,
    mut zoom_requests: MessageWriter<ZoomCamera>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    // Scrolling over the control panel belongs to egui
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
            return;
        }
    }

    // Wheel up (positive) moves closer
    zoom_requests.write(ZoomCamera(-mouse_scroll.delta.y.signum() * WHEEL_STEP));
}

/// Move the camera for every zoom request, staying within range.
pub fn apply_zoom_requests(
    mut zoom_requests: MessageReader<ZoomCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        zoom_requests.clear();
        return;
    };

    for &ZoomCamera(delta) in zoom_requests.read() {
        transform.translation.z = clamp_distance(transform.translation.z + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_distance() {
        assert_eq!(clamp_distance(1.0), MIN_DISTANCE);
        assert_eq!(clamp_distance(7.0), 7.0);
        assert_eq!(clamp_distance(45.0), MAX_DISTANCE);
    }
}
