//! Physical model of a main-sequence star.
//!
//! Closed-form scaling laws mapping stellar mass (in solar masses) to
//! radius, luminosity, effective temperature, lifetime and absolute
//! magnitude. All functions are pure and work in solar units, so they can be
//! evaluated without any rendering surface.
//!
//! The laws are calibrated for roughly 0.1 to 50 solar masses. Outside that
//! range they extrapolate the same power laws without clamping.

#[cfg(test)]
mod proptest_model;

/// Mass exponent of the mass-luminosity relation.
pub const LUMINOSITY_EXPONENT: f64 = 3.5;

/// Main-sequence lifetime of a one solar mass star, in years.
pub const SOLAR_LIFETIME_YEARS: f64 = 1e10;

/// Mass exponent of the lifetime relation.
pub const LIFETIME_EXPONENT: f64 = -2.5;

/// Effective temperature of a one solar mass star on the ZAMS, in Kelvin.
pub const SOLAR_TEFF_K: f64 = 5800.0;

/// Mass exponent of the temperature relation.
pub const TEFF_EXPONENT: f64 = 0.55;

/// Absolute visual magnitude of the Sun.
pub const SOLAR_ABS_MAGNITUDE: f64 = 4.83;

/// Floor applied to luminosity before taking its logarithm.
pub const MIN_LUMINOSITY: f64 = 1e-9;

/// Fractional luminosity gain across the whole main sequence.
pub const MS_LUMINOSITY_GAIN: f64 = 0.40;

/// Fractional temperature drop across the whole main sequence.
pub const MS_TEMPERATURE_DROP: f64 = 0.30;

/// Fractional radius growth across the whole main sequence.
pub const MS_RADIUS_GROWTH: f64 = 0.12;

/// Lower bound of the glow scalar.
pub const GLOW_MIN: f64 = 0.9;

/// Upper bound of the glow scalar.
pub const GLOW_MAX: f64 = 8.0;

/// Stellar quantities at one point along the main sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MainSequenceState {
    /// Luminosity in solar luminosities.
    pub luminosity: f64,
    /// Effective surface temperature in Kelvin.
    pub temperature_k: f64,
    /// Radius in solar radii.
    pub radius: f64,
    /// Time elapsed since the zero-age main sequence, in years.
    pub age_years: f64,
}

/// Zero-age main-sequence radius in solar radii.
///
/// Piecewise power law with three branches. Each branch is evaluated as
/// written; nothing forces the values to agree at M = 1 and M = 10 beyond the
/// exponents themselves.
pub fn radius_from_mass(mass: f64) -> f64 {
    if mass <= 1.0 {
        mass.powf(0.8)
    } else if mass <= 10.0 {
        mass.powf(0.57)
    } else {
        mass.powf(0.3) * 10f64.powf(0.27)
    }
}

/// Zero-age main-sequence luminosity in solar luminosities: L = M^3.5.
pub fn luminosity_from_mass(mass: f64) -> f64 {
    mass.powf(LUMINOSITY_EXPONENT)
}

/// Main-sequence lifetime in years: 10 Gyr for the Sun, scaling as M^-2.5.
pub fn main_sequence_lifetime_years(mass: f64) -> f64 {
    SOLAR_LIFETIME_YEARS * mass.powf(LIFETIME_EXPONENT)
}

/// Zero-age effective temperature in Kelvin: 5800 K for the Sun, scaling as M^0.55.
pub fn base_teff_k(mass: f64) -> f64 {
    SOLAR_TEFF_K * mass.powf(TEFF_EXPONENT)
}

/// Interpolate the star's state across its main-sequence lifetime.
///
/// `fraction` is the progress through the phase, 0.0 at the zero-age main
/// sequence and 1.0 at hydrogen exhaustion. It is not clamped; callers are
/// expected to pass values in [0, 1].
pub fn main_sequence_state(mass: f64, fraction: f64) -> MainSequenceState {
    MainSequenceState {
        luminosity: luminosity_from_mass(mass) * (1.0 + MS_LUMINOSITY_GAIN * fraction),
        temperature_k: base_teff_k(mass) * (1.0 - MS_TEMPERATURE_DROP * fraction),
        radius: radius_from_mass(mass) * (1.0 + MS_RADIUS_GROWTH * fraction),
        age_years: main_sequence_lifetime_years(mass) * fraction,
    }
}

/// Absolute magnitude from luminosity: M = 4.83 - 2.5 log10(L).
///
/// Luminosity is floored at [`MIN_LUMINOSITY`] so zero never yields infinity.
pub fn abs_magnitude_from_luminosity(luminosity: f64) -> f64 {
    SOLAR_ABS_MAGNITUDE - 2.5 * luminosity.max(MIN_LUMINOSITY).log10()
}

/// Log-compressed brightness scalar driving emissive, light and halo strength.
///
/// Always within [`GLOW_MIN`, `GLOW_MAX`] for non-negative luminosity.
pub fn glow_from_luminosity(luminosity: f64) -> f64 {
    ((luminosity + 1.0).log10() * 1.6 + 0.9).clamp(GLOW_MIN, GLOW_MAX)
}
