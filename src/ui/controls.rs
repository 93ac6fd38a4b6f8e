//! Control panel on the left edge of the window.
//!
//! The panel holds:
//! - Mass dropdown and a free-form mass field
//! - One slider, play button and percentage per evolutionary phase
//! - Zoom buttons

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::{ZoomCamera, BUTTON_STEP};
use crate::scene::SetMass;
use crate::timeline::{Phase, PhaseTimeline, TimelineAction, TimelineCommand, Timelines, MAX_PERCENT};
use crate::types::{parse_mass, StarState, MASS_PRESETS};

use super::readouts::format_mass;
use super::{colors, icons};

/// Text typed into the custom mass field.
#[derive(Resource, Default)]
pub struct MassInput {
    pub text: String,
}

/// System that renders the control panel.
pub fn controls_panel(
    mut contexts: EguiContexts,
    star: Res<StarState>,
    timelines: Option<Res<Timelines>>,
    mut mass_input: ResMut<MassInput>,
    mut set_mass: MessageWriter<SetMass>,
    mut timeline_commands: MessageWriter<TimelineCommand>,
    mut zoom_requests: MessageWriter<ZoomCamera>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("controls")
        .resizable(false)
        .exact_width(280.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 14)),
        )
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 10.0;

            ui.label(egui::RichText::new("Star").strong().size(16.0).color(colors::TEXT));
            render_mass_selector(ui, star.mass, &mut mass_input, &mut set_mass);

            ui.separator();

            ui.label(egui::RichText::new("Evolution").strong().size(16.0).color(colors::TEXT));
            match timelines.as_deref() {
                Some(timelines) => {
                    for phase in Phase::ALL {
                        render_phase_row(ui, phase, timelines.get(phase), &mut timeline_commands);
                    }
                }
                None => {
                    ui.label(egui::RichText::new("Timelines unavailable").weak());
                }
            }

            ui.separator();

            render_zoom_buttons(ui, &mut zoom_requests);
        });
}

/// Render the mass dropdown and the custom mass field.
fn render_mass_selector(
    ui: &mut egui::Ui,
    current_mass: f64,
    mass_input: &mut MassInput,
    set_mass: &mut MessageWriter<SetMass>,
) {
    let mut selected = current_mass;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icons::STAR).size(16.0).color(colors::ACCENT));
        egui::ComboBox::from_id_salt("mass_preset")
            .selected_text(format_mass(current_mass))
            .width(120.0)
            .show_ui(ui, |ui| {
                for preset in MASS_PRESETS {
                    ui.selectable_value(&mut selected, preset, format_mass(preset));
                }
            });
    });

    if selected != current_mass {
        set_mass.write(SetMass(selected));
    }

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut mass_input.text)
                .hint_text("Custom mass (M☉)")
                .desired_width(150.0),
        );

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui.button("Set").clicked();
        if submitted || clicked {
            match parse_mass(&mass_input.text) {
                Ok(mass) => {
                    set_mass.write(SetMass(mass));
                    mass_input.text.clear();
                }
                Err(err) => debug!("Ignoring mass input: {}", err),
            }
        }
    });
}

/// Render one phase: label, play/pause button, slider and percentage.
fn render_phase_row(
    ui: &mut egui::Ui,
    phase: Phase,
    timeline: &PhaseTimeline,
    timeline_commands: &mut MessageWriter<TimelineCommand>,
) {
    ui.label(egui::RichText::new(phase.label()).size(13.0).color(colors::MUTED));

    ui.horizontal(|ui| {
        let (icon, color, tooltip) = if timeline.is_running() {
            (icons::PAUSE, colors::PAUSE_ICON, "Pause")
        } else {
            (icons::PLAY, colors::PLAY_ICON, "Play")
        };

        let button = egui::Button::new(egui::RichText::new(icon).size(18.0).color(color))
            .min_size(egui::vec2(32.0, 28.0));
        if ui.add(button).on_hover_text(tooltip).clicked() {
            timeline_commands.write(TimelineCommand {
                phase,
                action: TimelineAction::Toggle,
            });
        }

        let mut value = timeline.value();
        let slider = egui::Slider::new(&mut value, 0..=MAX_PERCENT).show_value(false);
        if ui.add(slider).changed() {
            timeline_commands.write(TimelineCommand {
                phase,
                action: TimelineAction::Set(value),
            });
        }

        ui.label(
            egui::RichText::new(format!("{:>3}%", timeline.value()))
                .monospace()
                .size(13.0)
                .color(colors::TEXT),
        );
    });
}

/// Render zoom in/out buttons.
fn render_zoom_buttons(ui: &mut egui::Ui, zoom_requests: &mut MessageWriter<ZoomCamera>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Zoom").size(13.0).color(colors::MUTED));

        let zoom_in = egui::Button::new(egui::RichText::new(icons::ZOOM_IN).size(18.0));
        if ui.add(zoom_in).on_hover_text("Zoom in (+)").clicked() {
            zoom_requests.write(ZoomCamera(-BUTTON_STEP));
        }

        let zoom_out = egui::Button::new(egui::RichText::new(icons::ZOOM_OUT).size(18.0));
        if ui.add(zoom_out).on_hover_text("Zoom out (-)").clicked() {
            zoom_requests.write(ZoomCamera(BUTTON_STEP));
        }
    });
}
