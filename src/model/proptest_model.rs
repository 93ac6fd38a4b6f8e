//! Property-based tests for the stellar model using proptest.
//!
//! These tests verify the scaling-law invariants across the calibrated mass range.

use proptest::prelude::*;

use super::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Luminosity follows the ZAMS value scaled by the 40% main-sequence gain.
    #[test]
    fn prop_luminosity_matches_zams_scaling(
        mass in 0.1f64..50.0,
        fraction in 0.0f64..=1.0,
    ) {
        let state = main_sequence_state(mass, fraction);
        let expected = luminosity_from_mass(mass) * (1.0 + 0.4 * fraction);
        prop_assert!(
            (state.luminosity - expected).abs() <= expected * 1e-12,
            "L = {} but expected {} (M={}, f={})",
            state.luminosity, expected, mass, fraction
        );
    }

    /// Luminosity and radius never shrink as the star ages; temperature never rises.
    #[test]
    fn prop_evolution_is_monotonic(
        mass in 0.1f64..50.0,
        f0 in 0.0f64..=1.0,
        f1 in 0.0f64..=1.0,
    ) {
        let (early, late) = if f0 <= f1 { (f0, f1) } else { (f1, f0) };
        let a = main_sequence_state(mass, early);
        let b = main_sequence_state(mass, late);

        prop_assert!(b.luminosity >= a.luminosity);
        prop_assert!(b.radius >= a.radius);
        prop_assert!(b.temperature_k <= a.temperature_k);
        prop_assert!(b.age_years >= a.age_years);
    }

    /// Derived quantities stay strictly positive for positive mass.
    #[test]
    fn prop_outputs_positive(
        mass in 0.1f64..50.0,
        fraction in 0.0f64..=1.0,
    ) {
        let state = main_sequence_state(mass, fraction);
        prop_assert!(state.luminosity > 0.0);
        prop_assert!(state.radius > 0.0);
        prop_assert!(state.temperature_k > 0.0);
        prop_assert!(state.age_years >= 0.0);
    }

    /// Glow is bounded for any non-negative luminosity.
    #[test]
    fn prop_glow_bounded(luminosity in 0.0f64..1e9) {
        let glow = glow_from_luminosity(luminosity);
        prop_assert!((GLOW_MIN..=GLOW_MAX).contains(&glow), "glow {} out of range", glow);
    }

    /// Glow never decreases with luminosity.
    #[test]
    fn prop_glow_monotonic(l0 in 0.0f64..1e6, l1 in 0.0f64..1e6) {
        let (low, high) = if l0 <= l1 { (l0, l1) } else { (l1, l0) };
        prop_assert!(glow_from_luminosity(high) >= glow_from_luminosity(low));
    }

    /// Within a single branch, a heavier star is always larger.
    #[test]
    fn prop_radius_increases_within_branch(m0 in 1.0001f64..10.0, m1 in 1.0001f64..10.0) {
        let (low, high) = if m0 <= m1 { (m0, m1) } else { (m1, m0) };
        prop_assert!(radius_from_mass(high) >= radius_from_mass(low));
    }
}
