//! Text readouts for the displayed star.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::color::spectral_class;
use crate::model::{abs_magnitude_from_luminosity, MainSequenceState};

use super::{colors, icons};

/// Stage label shown while the main sequence drives the star.
pub const MAIN_SEQUENCE_STAGE: &str = "Main sequence";

/// Formatted values shown in the readout panel.
///
/// Empty strings are skipped when rendering.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct Readouts {
    pub abs_magnitude: String,
    pub temperature: String,
    pub stage: String,
    pub age: String,
    pub mass: String,
    pub spectral_class: String,
}

impl Readouts {
    /// Readouts for a star of `mass` at the given main-sequence state.
    pub fn main_sequence(state: &MainSequenceState, mass: f64) -> Self {
        Self {
            abs_magnitude: format_abs_magnitude(abs_magnitude_from_luminosity(state.luminosity)),
            temperature: format_temperature(state.temperature_k),
            stage: MAIN_SEQUENCE_STAGE.to_string(),
            age: format_age(state.age_years),
            mass: format_mass(mass),
            spectral_class: spectral_class(state.temperature_k).to_string(),
        }
    }
}

/// Absolute magnitude with two decimals.
pub fn format_abs_magnitude(magnitude: f64) -> String {
    format!("{:.2}", magnitude)
}

/// Temperature rounded to the nearest Kelvin.
pub fn format_temperature(temperature_k: f64) -> String {
    format!("{} K", temperature_k.round() as i64)
}

/// Age in billions of years with two decimals.
pub fn format_age(age_years: f64) -> String {
    format!("{:.2} Gyr", age_years / 1e9)
}

/// Mass with one decimal below one solar mass, whole numbers above.
pub fn format_mass(mass: f64) -> String {
    if mass < 1.0 {
        format!("{:.1} M☉", mass)
    } else {
        format!("{} M☉", mass.round() as i64)
    }
}

/// System that renders the readout panel in the top-right corner.
pub fn readout_panel(mut contexts: EguiContexts, readouts: Res<Readouts>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("star_readouts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(14, 10))
                .corner_radius(8)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 6.0;
                    readout_row(ui, icons::STAR, "Stage", &readouts.stage);
                    readout_row(ui, icons::STAR, "Mass", &readouts.mass);
                    readout_row(ui, icons::SUN, "Abs. magnitude", &readouts.abs_magnitude);
                    readout_row(ui, icons::TEMPERATURE, "Surface temp.", &readouts.temperature);
                    readout_row(ui, icons::TEMPERATURE, "Spectral class", &readouts.spectral_class);
                    readout_row(ui, icons::AGE, "Age", &readouts.age);
                });
        });
}

/// Render one labelled value, skipping it when there is nothing to show.
fn readout_row(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(14.0).color(colors::MUTED));
        ui.label(egui::RichText::new(label).size(13.0).color(colors::MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .monospace()
                    .size(14.0)
                    .color(colors::TEXT),
            );
        });
    });
}
