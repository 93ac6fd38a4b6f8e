//! Backdrop for the star: clear color and a reference grid floor.

use std::f32::consts::FRAC_PI_2;

use bevy::math::Isometry3d;
use bevy::prelude::*;

/// Background color (0x0b0f18).
pub const BACKGROUND: Color = Color::srgb(0.043, 0.059, 0.094);

/// Height of the grid floor.
pub const GRID_HEIGHT: f32 = -1.6;

/// Grid cells along each side.
pub const GRID_CELLS: u32 = 18;

/// Grid line color.
const GRID_COLOR: Color = Color::srgba(0.45, 0.5, 0.6, 0.35);

/// Plugin providing the backdrop.
pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(Update, draw_grid_floor);
    }
}

/// Draw an 18×18 unit grid on the XZ plane below the star.
fn draw_grid_floor(mut gizmos: Gizmos) {
    gizmos.grid(
        Isometry3d::new(
            Vec3::new(0.0, GRID_HEIGHT, 0.0),
            Quat::from_rotation_x(FRAC_PI_2),
        ),
        UVec2::splat(GRID_CELLS),
        Vec2::ONE,
        GRID_COLOR,
    );
}
