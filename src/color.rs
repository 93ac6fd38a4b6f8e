//! Temperature to color mapping for the rendered star.
//!
//! Stars are tinted by blending three reference colors: a warm orange for
//! cool stars, white around 6500 K and a pale blue for the hottest stars.
//! Blending happens per component in linear RGB.

use std::fmt;

use bevy::color::Mix;
use bevy::prelude::*;

/// Coolest temperature the color ramp distinguishes, in Kelvin.
pub const MIN_COLOR_TEMP_K: f64 = 2500.0;

/// Temperature rendered as pure white, in Kelvin.
pub const MID_COLOR_TEMP_K: f64 = 6500.0;

/// Hottest temperature the color ramp distinguishes, in Kelvin.
pub const MAX_COLOR_TEMP_K: f64 = 40000.0;

/// Reference color for the cool end of the ramp (0xffb066).
pub fn cool_color() -> LinearRgba {
    Color::srgb_u8(0xff, 0xb0, 0x66).to_linear()
}

/// Reference color for the middle of the ramp (0xffffff).
pub fn mid_color() -> LinearRgba {
    LinearRgba::WHITE
}

/// Reference color for the hot end of the ramp (0xa9c8ff).
pub fn hot_color() -> LinearRgba {
    Color::srgb_u8(0xa9, 0xc8, 0xff).to_linear()
}

/// Map an effective temperature to the star's display color.
///
/// The temperature is clamped to [2500 K, 40000 K]. Below 6500 K the color
/// runs from orange to white, above it from white to pale blue.
pub fn color_from_temp_k(temperature_k: f64) -> LinearRgba {
    let t = temperature_k.clamp(MIN_COLOR_TEMP_K, MAX_COLOR_TEMP_K);

    if t < MID_COLOR_TEMP_K {
        let a = (t - MIN_COLOR_TEMP_K) / (MID_COLOR_TEMP_K - MIN_COLOR_TEMP_K);
        cool_color().mix(&mid_color(), a as f32)
    } else {
        let a = (t - MID_COLOR_TEMP_K) / (MAX_COLOR_TEMP_K - MID_COLOR_TEMP_K);
        mid_color().mix(&hot_color(), a as f32)
    }
}

/// Morgan-Keenan spectral class, hottest (O) to coolest (M).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralClass {
    /// Above 30,000 K, blue.
    O,
    /// 10,000-30,000 K, blue-white.
    B,
    /// 7,500-10,000 K, white.
    A,
    /// 6,000-7,500 K, yellow-white.
    F,
    /// 5,200-6,000 K, yellow (the Sun).
    G,
    /// 3,700-5,200 K, orange.
    K,
    /// Below 3,700 K, red.
    M,
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SpectralClass::O => 'O',
            SpectralClass::B => 'B',
            SpectralClass::A => 'A',
            SpectralClass::F => 'F',
            SpectralClass::G => 'G',
            SpectralClass::K => 'K',
            SpectralClass::M => 'M',
        };
        write!(f, "{}", letter)
    }
}

/// Classify an effective temperature into its spectral class.
pub fn spectral_class(temperature_k: f64) -> SpectralClass {
    if temperature_k >= 30000.0 {
        SpectralClass::O
    } else if temperature_k >= 10000.0 {
        SpectralClass::B
    } else if temperature_k >= 7500.0 {
        SpectralClass::A
    } else if temperature_k >= 6000.0 {
        SpectralClass::F
    } else if temperature_k >= 5200.0 {
        SpectralClass::G
    } else if temperature_k >= 3700.0 {
        SpectralClass::K
    } else {
        SpectralClass::M
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn strictly_between(value: f32, a: f32, b: f32) -> bool {
        value > a.min(b) && value < a.max(b)
    }

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(color_from_temp_k(MIN_COLOR_TEMP_K), cool_color());
        assert_eq!(color_from_temp_k(MID_COLOR_TEMP_K), mid_color());

        let hot = color_from_temp_k(MAX_COLOR_TEMP_K);
        let expected = hot_color();
        assert_relative_eq!(hot.red, expected.red, epsilon = 1e-6);
        assert_relative_eq!(hot.green, expected.green, epsilon = 1e-6);
        assert_relative_eq!(hot.blue, expected.blue, epsilon = 1e-6);
    }

    #[test]
    fn test_solar_color_between_cool_and_white() {
        let sun = color_from_temp_k(5800.0);
        let cool = cool_color();
        let mid = mid_color();

        assert_ne!(sun, cool);
        assert_ne!(sun, mid);
        // Red is saturated at both ends, green and blue carry the blend
        assert!(strictly_between(sun.green, cool.green, mid.green));
        assert!(strictly_between(sun.blue, cool.blue, mid.blue));
    }

    #[test]
    fn test_clamped_below_and_above() {
        assert_eq!(color_from_temp_k(1000.0), color_from_temp_k(2500.0));
        assert_eq!(color_from_temp_k(0.0), color_from_temp_k(2500.0));
        assert_eq!(color_from_temp_k(90000.0), color_from_temp_k(40000.0));
    }

    #[test]
    fn test_hot_side_tints_blue() {
        let color = color_from_temp_k(20000.0);
        assert!(color.blue >= color.red);
        assert!(strictly_between(color.red, mid_color().red, hot_color().red));
    }

    #[test]
    fn test_spectral_class() {
        assert_eq!(spectral_class(50000.0), SpectralClass::O);
        assert_eq!(spectral_class(30000.0), SpectralClass::O);
        assert_eq!(spectral_class(20000.0), SpectralClass::B);
        assert_eq!(spectral_class(9000.0), SpectralClass::A);
        assert_eq!(spectral_class(6500.0), SpectralClass::F);
        assert_eq!(spectral_class(5800.0), SpectralClass::G); // Sun
        assert_eq!(spectral_class(4060.0), SpectralClass::K);
        assert_eq!(spectral_class(3000.0), SpectralClass::M);
    }

    #[test]
    fn test_spectral_class_display() {
        assert_eq!(format!("{}", SpectralClass::G), "G");
        assert_eq!(format!("{}", SpectralClass::O), "O");
    }
}
