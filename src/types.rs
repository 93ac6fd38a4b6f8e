//! Core star types, settings and input validation.

use bevy::prelude::*;

use crate::model::{luminosity_from_mass, radius_from_mass};

/// System sets ordering one frame of the viewer.
///
/// Input is read first, timelines advance, the model is re-evaluated and
/// finally the derived values are pushed onto the scene.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum StarSystemSet {
    /// Pointer, wheel and keyboard handling
    Input,
    /// Autoplay timers and slider values
    Timeline,
    /// Mass changes and main-sequence evaluation
    Model,
    /// Per-frame animation of the star and halo
    Animate,
}

/// Default stellar mass at startup, in solar masses.
pub const DEFAULT_MASS: f64 = 1.0;

/// Default spin of the star mesh, in radians per second.
pub const DEFAULT_SPIN: f32 = 0.25;

/// Masses offered by the mass dropdown, in solar masses.
pub const MASS_PRESETS: [f64; 10] = [0.1, 0.3, 0.5, 0.8, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0];

/// Errors raised when validating user-supplied numbers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StarscopeError {
    /// Mass is NaN or infinite.
    #[error("mass must be a finite number, got {0}")]
    NonFiniteMass(f64),

    /// Mass is zero or negative.
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),

    /// Mass text could not be parsed.
    #[error("unparsable mass value {0:?}")]
    MassParse(String),
}

/// Check that a mass is usable by the model.
pub fn validate_mass(mass: f64) -> Result<f64, StarscopeError> {
    if !mass.is_finite() {
        return Err(StarscopeError::NonFiniteMass(mass));
    }
    if mass <= 0.0 {
        return Err(StarscopeError::NonPositiveMass(mass));
    }
    Ok(mass)
}

/// Parse a mass in solar masses, e.g. from a dropdown or text field.
pub fn parse_mass(text: &str) -> Result<f64, StarscopeError> {
    let mass: f64 = text
        .trim()
        .parse()
        .map_err(|_| StarscopeError::MassParse(text.to_string()))?;
    validate_mass(mass)
}

/// Mutable state of the displayed star.
///
/// Radius and luminosity are derived by the main-sequence update; mass is set
/// by the user; spin is constant.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct StarState {
    /// Mass in solar masses
    pub mass: f64,
    /// Radius in solar radii
    pub radius: f64,
    /// Luminosity in solar luminosities
    pub luminosity: f64,
    /// Spin about the vertical axis in radians per second
    pub spin: f32,
}

impl Default for StarState {
    fn default() -> Self {
        Self::with_mass(DEFAULT_MASS)
    }
}

impl StarState {
    /// Create a star of the given mass sitting on the zero-age main sequence.
    pub fn with_mass(mass: f64) -> Self {
        Self {
            mass,
            radius: radius_from_mass(mass),
            luminosity: luminosity_from_mass(mass),
            spin: DEFAULT_SPIN,
        }
    }
}

/// Startup settings for the viewer.
#[derive(Resource, Clone, Debug)]
pub struct ViewerSettings {
    /// Mass shown when the app starts, in solar masses
    pub initial_mass: f64,
    /// Spin of the star mesh, in radians per second
    pub spin: f32,
    /// Autoplay step period, in seconds
    pub autoplay_period: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            initial_mass: DEFAULT_MASS,
            spin: DEFAULT_SPIN,
            autoplay_period: crate::timeline::AUTOPLAY_PERIOD_SECS,
        }
    }
}
