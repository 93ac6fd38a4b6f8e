//! UI module providing the egui-based control and readout panels.

mod controls;
pub mod icons;
pub mod readouts;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use controls::MassInput;
pub use readouts::Readouts;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MassInput>()
            .init_resource::<icons::IconFontReady>()
            // Panels draw icon glyphs, so they wait for the font
            .add_systems(EguiPrimaryContextPass, icons::install_icon_font)
            .add_systems(
                EguiPrimaryContextPass,
                (controls::controls_panel, readouts::readout_panel)
                    .after(icons::install_icon_font)
                    .run_if(|ready: Res<icons::IconFontReady>| ready.0),
            );
    }
}

/// Colors for the panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(18, 22, 32, 235);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const ACCENT: Color32 = Color32::from_rgb(255, 204, 102);
    pub const MUTED: Color32 = Color32::from_rgb(140, 145, 160);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}
