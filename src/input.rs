//! Input handling for keyboard shortcuts and mouse dragging.
//!
//! Left-drag rotates the star; keyboard shortcuts drive autoplay and zoom.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::camera::{ZoomCamera, BUTTON_STEP};
use crate::scene::StarBody;
use crate::timeline::{Phase, TimelineAction, TimelineCommand};
use crate::types::StarSystemSet;

/// Radians of rotation per pixel of drag.
pub const DRAG_SENSITIVITY: f32 = 0.01;

/// Resource tracking star drag state.
#[derive(Resource, Default)]
pub struct DragState {
    /// Whether a rotate drag is in progress.
    pub dragging: bool,
}

/// Plugin providing keyboard input handling and drag-to-rotate.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>().add_systems(
            Update,
            (keyboard_shortcuts, handle_star_drag).in_set(StarSystemSet::Input),
        );
    }
}

/// Rotation (yaw, pitch) in radians for a pointer movement in pixels.
pub fn drag_rotation(delta: Vec2) -> (f32, f32) {
    (delta.x * DRAG_SENSITIVITY, delta.y * DRAG_SENSITIVITY)
}

/// Whether egui should receive key presses instead of the shortcuts.
pub fn ui_owns_keyboard(wants_keyboard_input: bool, widget_focused: bool) -> bool {
    wants_keyboard_input || widget_focused
}

/// Handle keyboard shortcuts.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut timeline_commands: MessageWriter<TimelineCommand>,
    mut zoom_requests: MessageWriter<ZoomCamera>,
) {
    // Typing into a widget is not a shortcut, and a focused button already
    // reacts to Space on its own
    let ui_has_keyboard = contexts
        .ctx_mut()
        .map(|ctx| {
            ui_owns_keyboard(
                ctx.wants_keyboard_input(),
                ctx.memory(|m| m.focused().is_some()),
            )
        })
        .unwrap_or(false);
    if ui_has_keyboard {
        return;
    }

    // Space: play/pause the main sequence
    if keys.just_pressed(KeyCode::Space) {
        timeline_commands.write(TimelineCommand {
            phase: Phase::MainSequence,
            action: TimelineAction::Toggle,
        });
    }

    // Plus/Equal: zoom in
    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        zoom_requests.write(ZoomCamera(-BUTTON_STEP));
    }

    // Minus: zoom out
    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        zoom_requests.write(ZoomCamera(BUTTON_STEP));
    }
}

/// Rotate the star while the left mouse button is held.
fn handle_star_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut drag_state: ResMut<DragState>,
    mut contexts: EguiContexts,
    mut bodies: Query<&mut Transform, With<StarBody>>,
) {
    // Only check egui when starting a drag, so dragging across the
    // panel keeps rotating
    if mouse.just_pressed(MouseButton::Left) {
        let over_ui = contexts
            .ctx_mut()
            .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
            .unwrap_or(false);
        drag_state.dragging = !over_ui;
    }

    if !mouse.pressed(MouseButton::Left) {
        drag_state.dragging = false;
        return;
    }

    if !drag_state.dragging || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok(mut transform) = bodies.single_mut() else {
        return;
    };

    let (yaw, pitch) = drag_rotation(mouse_motion.delta);
    transform.rotate_y(yaw);
    transform.rotate_x(pitch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_widget_blocks_shortcuts() {
        assert!(!ui_owns_keyboard(false, false));
        assert!(ui_owns_keyboard(true, false));
        // A play button keeps focus after a click
        assert!(ui_owns_keyboard(false, true));
    }

    #[test]
    fn test_drag_rotation() {
        let (yaw, pitch) = drag_rotation(Vec2::new(100.0, -50.0));
        assert!((yaw - 1.0).abs() < 1e-6);
        assert!((pitch + 0.5).abs() < 1e-6);
    }
}
