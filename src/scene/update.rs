//! Main-sequence updates of the star.
//!
//! Mass and progress changes are turned into a [`StarAppearance`] by
//! [`apply_star_model`], then [`present_star`] pushes that appearance onto the
//! sphere, its material, the point light and the halo. Every scene target is
//! looked up on its own, so a missing one is skipped without affecting the
//! others.

use bevy::prelude::*;

use crate::color::color_from_temp_k;
use crate::model::{glow_from_luminosity, main_sequence_state, MainSequenceState};
use crate::scene::star::{StarBody, StarHalo, StarLight};
use crate::timeline::Timelines;
use crate::types::{validate_mass, StarState, StarscopeError};
use crate::ui::readouts::Readouts;

/// Emissive intensity per unit of glow.
pub const EMISSIVE_PER_GLOW: f64 = 1.2;

/// Point light intensity per unit of glow.
pub const LIGHT_PER_GLOW: f64 = 2.0;

/// Emissive color as a fraction of the base color.
pub const EMISSIVE_COLOR_FACTOR: f32 = 0.35;

/// Bevy lumens for one unit of light intensity.
pub const LUMENS_PER_LIGHT_UNIT: f32 = 100_000.0;

/// Request to change the star's mass, in solar masses.
#[derive(Message, Clone, Copy, Debug)]
pub struct SetMass(pub f64);

/// Request to re-evaluate the star at a main-sequence progress fraction.
#[derive(Message, Clone, Copy, Debug)]
pub struct UpdateMainSequence {
    pub fraction: f64,
}

/// Visual parameters derived from one main-sequence evaluation.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct StarAppearance {
    /// Uniform scale of the star sphere (solar radii).
    pub scale: f32,
    /// Log-compressed brightness scalar.
    pub glow: f64,
    /// Emissive intensity multiplier.
    pub emissive_intensity: f64,
    /// Point light intensity in model units.
    pub light_intensity: f64,
    /// Surface color.
    pub base_color: LinearRgba,
    /// Emissive color before intensity is applied.
    pub emissive_color: LinearRgba,
    /// Diameter of the halo disc.
    pub halo_scale: f32,
    /// Opacity of the halo disc.
    pub halo_opacity: f32,
}

impl Default for StarAppearance {
    fn default() -> Self {
        star_appearance(&main_sequence_state(1.0, 0.0))
    }
}

impl StarAppearance {
    /// Emissive color with intensity applied, as StandardMaterial expects it.
    pub fn emissive(&self) -> LinearRgba {
        self.emissive_color * self.emissive_intensity as f32
    }

    /// Point light intensity in lumens.
    pub fn light_lumens(&self) -> f32 {
        self.light_intensity as f32 * LUMENS_PER_LIGHT_UNIT
    }
}

/// Derive the star's look from its current physical state.
pub fn star_appearance(state: &MainSequenceState) -> StarAppearance {
    let glow = glow_from_luminosity(state.luminosity);
    let color = color_from_temp_k(state.temperature_k);

    StarAppearance {
        scale: state.radius as f32,
        glow,
        emissive_intensity: glow * EMISSIVE_PER_GLOW,
        light_intensity: glow * LIGHT_PER_GLOW,
        base_color: color,
        emissive_color: color * EMISSIVE_COLOR_FACTOR,
        halo_scale: (state.radius * (2.8 + glow * 0.30)) as f32,
        halo_opacity: (0.20 + glow * 0.06).clamp(0.0, 1.0) as f32,
    }
}

/// Store a new mass, rejecting non-finite or non-positive values.
pub fn set_mass(star: &mut StarState, mass: f64) -> Result<(), StarscopeError> {
    star.mass = validate_mass(mass)?;
    Ok(())
}

/// Evaluate the star at `fraction` of its main sequence and record the
/// derived radius and luminosity.
pub fn update_main_sequence(star: &mut StarState, fraction: f64) -> MainSequenceState {
    let state = main_sequence_state(star.mass, fraction);
    star.radius = state.radius;
    star.luminosity = state.luminosity;
    state
}

/// Handle mass and progress requests, re-evaluating the model at most once per frame.
pub fn apply_star_model(
    mut mass_requests: MessageReader<SetMass>,
    mut progress: MessageReader<UpdateMainSequence>,
    timelines: Option<Res<Timelines>>,
    mut star: ResMut<StarState>,
    mut appearance: ResMut<StarAppearance>,
    readouts: Option<ResMut<Readouts>>,
) {
    let mut fraction = progress.read().last().map(|update| update.fraction);

    for &SetMass(mass) in mass_requests.read() {
        match set_mass(&mut star, mass) {
            Ok(()) => {
                // Re-run with the slider's current value, if there is a slider
                if let Some(timelines) = timelines.as_ref() {
                    fraction = Some(timelines.main_sequence.fraction());
                }
            }
            Err(err) => debug!("Ignoring mass request: {}", err),
        }
    }

    let Some(fraction) = fraction else {
        return;
    };

    let state = update_main_sequence(&mut star, fraction);
    *appearance = star_appearance(&state);

    if let Some(mut readouts) = readouts {
        *readouts = Readouts::main_sequence(&state, star.mass);
    }
}

/// Push the current appearance onto the star's entities and materials.
pub fn present_star(
    appearance: Res<StarAppearance>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut bodies: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), With<StarBody>>,
    mut halos: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), (With<StarHalo>, Without<StarBody>)>,
    mut lights: Query<&mut PointLight, With<StarLight>>,
) {
    if let Ok((mut transform, material)) = bodies.single_mut() {
        transform.scale = Vec3::splat(appearance.scale);
        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color = appearance.base_color.into();
            material.emissive = appearance.emissive();
        }
    }

    if let Ok(mut light) = lights.single_mut() {
        light.intensity = appearance.light_lumens();
        light.color = appearance.base_color.into();
    }

    if let Ok((mut transform, material)) = halos.single_mut() {
        transform.scale = Vec3::splat(appearance.halo_scale);
        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color = LinearRgba {
                alpha: appearance.halo_opacity,
                ..appearance.base_color
            }
            .into();
        }
    }
}
