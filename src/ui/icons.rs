//! Phosphor glyphs used by the control and readout panels.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Set once the phosphor glyphs are installed; the panels wait for it.
#[derive(Resource, Default)]
pub struct IconFontReady(pub bool);

/// Install the regular phosphor font alongside egui's defaults, once.
pub fn install_icon_font(mut contexts: EguiContexts, mut ready: ResMut<IconFontReady>) {
    if ready.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    ready.0 = true;

    info!("Icon font installed");
}

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Zoom in
pub const ZOOM_IN: &str = egui_phosphor::regular::MAGNIFYING_GLASS_PLUS;
/// Zoom out
pub const ZOOM_OUT: &str = egui_phosphor::regular::MAGNIFYING_GLASS_MINUS;
/// Star/mass icon
pub const STAR: &str = egui_phosphor::regular::STAR;
/// Brightness icon
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Temperature icon
pub const TEMPERATURE: &str = egui_phosphor::regular::THERMOMETER;
/// Age icon
pub const AGE: &str = egui_phosphor::regular::HOURGLASS;
