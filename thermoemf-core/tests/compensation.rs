//! Integration tests for cold-junction compensation and the fault hook

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_abs_diff_eq;
use thermoemf_core::{
    get_temperature, ColdJunctionCompensator, ConversionError, Converter, ConverterConfig,
    FaultCounter, IgnoreFaults, PanicFaultHandler, RangePolicy, ThermocoupleType,
};

use common::round_trip_tolerance;

#[test]
fn test_compensation_recovers_hot_junction() {
    let compensator = ColdJunctionCompensator::new(Converter::default());
    for ty in ThermocoupleType::ALL {
        let range = ty.inverse_temperature_range();
        let cold = range.min.max(0.0) + 20.0;
        let hot = range.min + 0.75 * range.span();

        let measured = compensator.measured_emf(hot, cold, ty).unwrap();
        let recovered = compensator.hot_junction_temperature(cold, measured, ty).unwrap();
        assert_abs_diff_eq!(recovered, hot, epsilon = round_trip_tolerance(ty));
    }
}

#[test]
fn test_warm_cold_junction_adds_its_emf() {
    // Type K at 25 °C produces 1.000 mV; a 4.096 mV reading is therefore
    // 5.096 mV against 0 °C, about 124.3 °C
    let celsius = get_temperature(25.0, 4.096, ThermocoupleType::K.code(), &IgnoreFaults);
    assert_abs_diff_eq!(celsius, 124.3, epsilon = 0.1);
}

#[test]
fn test_cold_junction_at_zero_is_plain_inverse() {
    let compensator = ColdJunctionCompensator::new(Converter::default());
    let direct = Converter::default().emf_to_temperature(ThermocoupleType::N, 10.0).unwrap();
    let compensated = compensator.compensate(0.0, 10.0, ThermocoupleType::N.code()).unwrap();
    assert_abs_diff_eq!(compensated, direct, epsilon = 1e-12);
}

#[test]
fn test_unknown_codes_reach_fault_counter() {
    let compensator = ColdJunctionCompensator::with_handler(Converter::default(), FaultCounter::new());

    for code in [13u8, 100, 255] {
        assert_eq!(
            compensator.compensate(25.0, 1.0, code),
            Err(ConversionError::UnknownThermocouple { code })
        );
    }

    assert_eq!(compensator.handler().count(), 3);
    assert_eq!(compensator.handler().last_code(), Some(255));
}

#[test]
fn test_closure_handler_called_once_per_fault() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let handler = |_code: u8| {
        CALLS.fetch_add(1, Ordering::SeqCst);
    };

    assert!(get_temperature(25.0, 1.0, 13, &handler).is_nan());
    assert!(!get_temperature(25.0, 1.0, 12, &handler).is_nan());
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

#[test]
#[should_panic(expected = "unknown thermocouple type code 13")]
fn test_panic_handler_halts_on_unknown_code() {
    let compensator = ColdJunctionCompensator::with_handler(Converter::default(), PanicFaultHandler);
    let _ = compensator.get_temperature(25.0, 1.0, 13);
}

#[test]
fn test_strict_policy_propagates_range_errors() {
    let compensator = ColdJunctionCompensator::new(Converter::strict());

    // Cold junction outside the type M range
    let err = compensator
        .hot_junction_temperature(150.0, 0.5, ThermocoupleType::M)
        .unwrap_err();
    assert!(matches!(err, ConversionError::OutOfRange { value, .. } if value == 150.0));

    // Total EMF past the type J range
    let err = compensator
        .hot_junction_temperature(25.0, 69.0, ThermocoupleType::J)
        .unwrap_err();
    assert!(matches!(err, ConversionError::OutOfRange { max, .. } if max == 69.553));

    assert!(compensator.get_temperature(25.0, 69.0, ThermocoupleType::J.code()).is_nan());
}

#[test]
fn test_clamping_policy_caps_the_reading() {
    let compensator = ColdJunctionCompensator::new(Converter::clamping());
    let celsius = compensator
        .hot_junction_temperature(25.0, 69.0, ThermocoupleType::J)
        .unwrap();
    assert_abs_diff_eq!(celsius, 1200.0, epsilon = round_trip_tolerance(ThermocoupleType::J));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ConverterConfig::strict().quiet();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"range_policy":"reject","warn_out_of_range":false}"#);

    let parsed: ConverterConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    let partial: ConverterConfig = serde_json::from_str(r#"{"range_policy":"clamp"}"#).unwrap();
    assert_eq!(partial.range_policy, RangePolicy::Clamp);
    assert!(partial.warn_out_of_range);
}

#[test]
fn test_thermocouple_type_serializes_by_name() {
    let json = serde_json::to_string(&ThermocoupleType::A2).unwrap();
    assert_eq!(json, r#""A2""#);
    let parsed: ThermocoupleType = serde_json::from_str(r#""K""#).unwrap();
    assert_eq!(parsed, ThermocoupleType::K);
}
