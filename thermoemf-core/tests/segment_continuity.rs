//! Shape of the piecewise reference functions
//!
//! - No visible step where one coefficient set hands over to the next
//! - Forward functions increase with temperature (B only above 50 °C)
//! - Inverse functions increase with EMF

mod common;

use thermoemf_core::tables::{reference_tables, Direction};
use thermoemf_core::{convert, DomainRange, ThermocoupleType};

use common::sweep;

/// Largest jump of `f` across `x` when approached from both sides
fn step_at(f: fn(f64) -> f64, x: f64) -> f64 {
    let h = 1e-9 * x.abs().max(1.0);
    (f(x + h) - f(x - h)).abs()
}

#[test]
fn test_forward_breakpoints_are_continuous() {
    for (ty, forward, _) in convert::FUNCTIONS {
        for set in reference_tables(ty).forward.sets.iter().skip(1) {
            let step = step_at(forward, set.lower);
            assert!(step < 0.001, "type {ty}: {step} mV step at {} °C", set.lower);
        }
    }
}

#[test]
fn test_inverse_breakpoints_are_continuous() {
    for (ty, _, inverse) in convert::FUNCTIONS {
        for set in reference_tables(ty).inverse.sets.iter().skip(1) {
            let step = step_at(inverse, set.lower);
            assert!(step < 0.1, "type {ty}: {step} °C step at {} mV", set.lower);
        }
    }
}

#[test]
fn test_forward_functions_are_monotonic() {
    for (ty, forward, _) in convert::FUNCTIONS {
        let mut range = ty.temperature_range();
        if ty == ThermocoupleType::B {
            // Seebeck coefficient of B changes sign near 21 °C
            range = DomainRange::new(50.0, range.max);
        }
        let mut previous = f64::NEG_INFINITY;
        for t in sweep(range, 5000) {
            let mv = forward(t);
            assert!(mv > previous, "type {ty} not increasing at {t} °C");
            previous = mv;
        }
    }
}

#[test]
fn test_inverse_functions_are_monotonic() {
    for (ty, _, inverse) in convert::FUNCTIONS {
        let mut previous = f64::NEG_INFINITY;
        for mv in sweep(ty.emf_range(), 5000) {
            let t = inverse(mv);
            assert!(t > previous, "type {ty} not increasing at {mv} mV");
            previous = t;
        }
    }
}

#[test]
fn test_type_b_minimum_near_21_c() {
    let minimum = sweep(DomainRange::new(0.0, 50.0), 500)
        .map(convert::temperature_to_emf_b)
        .fold(f64::INFINITY, f64::min);
    assert!(minimum < 0.0 && minimum > -0.003);
}

#[test]
fn test_every_table_has_both_directions() {
    for ty in ThermocoupleType::ALL {
        for direction in [Direction::TemperatureToEmf, Direction::EmfToTemperature] {
            assert!(!reference_tables(ty).direction(direction).sets.is_empty(), "type {ty}");
        }
    }
}
