//! Round-trip tests: emf_to_temperature(temperature_to_emf(t)) ≈ t
//!
//! Checked over each type's inverse temperature range, both on a dense
//! deterministic sweep and on random points.

mod common;

use proptest::prelude::*;
use thermoemf_core::{Converter, ConverterConfig, ThermocoupleType};

use common::{round_trip_tolerance, sweep};

/// Fits overshoot the documented EMF bounds by a few µV at the range ends
fn quiet_converter() -> Converter {
    Converter::new(ConverterConfig::default().quiet())
}

fn round_trip_error(converter: &Converter, ty: ThermocoupleType, celsius: f64) -> f64 {
    let millivolts = converter.temperature_to_emf(ty, celsius).unwrap();
    let back = converter.emf_to_temperature(ty, millivolts).unwrap();
    (back - celsius).abs()
}

fn thermocouple() -> impl Strategy<Value = ThermocoupleType> {
    (0u8..ThermocoupleType::COUNT as u8).prop_map(|code| ThermocoupleType::ALL[code as usize])
}

#[test]
fn test_round_trip_sweep() {
    let converter = quiet_converter();
    for ty in ThermocoupleType::ALL {
        let tolerance = round_trip_tolerance(ty);
        let worst = sweep(ty.inverse_temperature_range(), 2000)
            .map(|t| round_trip_error(&converter, ty, t))
            .fold(0.0, f64::max);
        assert!(worst <= tolerance, "type {ty}: worst round trip {worst} °C");
    }
}

#[test]
fn test_inverse_round_trip_sweep() {
    // EMF -> temperature -> EMF stays within the forward function's
    // sensitivity times the temperature tolerance
    let converter = quiet_converter();
    for ty in [ThermocoupleType::K, ThermocoupleType::J, ThermocoupleType::L] {
        for mv in sweep(ty.emf_range(), 500) {
            let celsius = converter.emf_to_temperature(ty, mv).unwrap();
            let back = converter.temperature_to_emf(ty, celsius).unwrap();
            assert!((back - mv).abs() < 0.005, "type {ty} at {mv} mV");
        }
    }
}

proptest! {
    #[test]
    fn prop_round_trip_within_tolerance(ty in thermocouple(), fraction in 0.0f64..=1.0) {
        let range = ty.inverse_temperature_range();
        let celsius = range.min + fraction * range.span();
        let error = round_trip_error(&quiet_converter(), ty, celsius);
        prop_assert!(error <= round_trip_tolerance(ty), "type {} at {} °C: {}", ty, celsius, error);
    }

    #[test]
    fn prop_clamp_never_leaves_documented_emf(ty in thermocouple(), celsius in -1000.0f64..4000.0) {
        let mv = Converter::clamping().temperature_to_emf(ty, celsius).unwrap();
        let range = ty.temperature_range();
        let low = Converter::strict().temperature_to_emf(ty, range.min).unwrap();
        let high = Converter::strict().temperature_to_emf(ty, range.max).unwrap();
        // B dips below zero near 20 °C, so compare against the whole curve's extremes
        let floor = if ty == ThermocoupleType::B { -0.003 } else { low };
        prop_assert!(mv >= floor - 1e-9 && mv <= high + 1e-9);
    }
}
