//! Per-type reference functions
//!
//! One pair of free functions per thermocouple type, named after the
//! letter designation:
//!
//! ```text
//! temperature_to_emf_k(celsius)    -> mV
//! emf_to_temperature_k(millivolts) -> °C
//! ```
//!
//! These are the raw reference functions. They never fail: inputs outside
//! the documented range are evaluated on the nearest segment, nothing is
//! logged, and NaN comes back as NaN. Use a [`Converter`](crate::Converter)
//! when out-of-range inputs must be clamped, rejected or reported.
//!
//! ```rust
//! use thermoemf_core::convert::{emf_to_temperature_t, temperature_to_emf_t};
//!
//! let mv = temperature_to_emf_t(100.0);
//! assert!((mv - 4.279).abs() < 0.001);
//! assert!((emf_to_temperature_t(mv) - 100.0).abs() < 0.05);
//! ```

use crate::tables::{self, Direction};
use crate::thermocouple::ThermocoupleType;

macro_rules! reference_functions {
    ($($variant:ident => $forward:ident, $inverse:ident, $name:literal;)*) => {
        $(
            #[doc = concat!("Type ", $name, ": thermoelectromotive force (mV) at `celsius`, reference junction at 0 °C.")]
            #[inline]
            pub fn $forward(celsius: f64) -> f64 {
                tables::table(ThermocoupleType::$variant, Direction::TemperatureToEmf).evaluate(celsius)
            }

            #[doc = concat!("Type ", $name, ": hot-junction temperature (°C) for `millivolts`, reference junction at 0 °C.")]
            #[inline]
            pub fn $inverse(millivolts: f64) -> f64 {
                tables::table(ThermocoupleType::$variant, Direction::EmfToTemperature).evaluate(millivolts)
            }
        )*
    };
}

reference_functions! {
    R  => temperature_to_emf_r,  emf_to_temperature_r,  "R";
    S  => temperature_to_emf_s,  emf_to_temperature_s,  "S";
    B  => temperature_to_emf_b,  emf_to_temperature_b,  "B";
    J  => temperature_to_emf_j,  emf_to_temperature_j,  "J";
    T  => temperature_to_emf_t,  emf_to_temperature_t,  "T";
    E  => temperature_to_emf_e,  emf_to_temperature_e,  "E";
    K  => temperature_to_emf_k,  emf_to_temperature_k,  "K";
    N  => temperature_to_emf_n,  emf_to_temperature_n,  "N";
    A1 => temperature_to_emf_a1, emf_to_temperature_a1, "A-1";
    A2 => temperature_to_emf_a2, emf_to_temperature_a2, "A-2";
    A3 => temperature_to_emf_a3, emf_to_temperature_a3, "A-3";
    L  => temperature_to_emf_l,  emf_to_temperature_l,  "L";
    M  => temperature_to_emf_m,  emf_to_temperature_m,  "M";
}

/// Function pointers for every type, in code order
pub const FUNCTIONS: [(ThermocoupleType, fn(f64) -> f64, fn(f64) -> f64); ThermocoupleType::COUNT] = [
    (ThermocoupleType::R, temperature_to_emf_r, emf_to_temperature_r),
    (ThermocoupleType::S, temperature_to_emf_s, emf_to_temperature_s),
    (ThermocoupleType::B, temperature_to_emf_b, emf_to_temperature_b),
    (ThermocoupleType::J, temperature_to_emf_j, emf_to_temperature_j),
    (ThermocoupleType::T, temperature_to_emf_t, emf_to_temperature_t),
    (ThermocoupleType::E, temperature_to_emf_e, emf_to_temperature_e),
    (ThermocoupleType::K, temperature_to_emf_k, emf_to_temperature_k),
    (ThermocoupleType::N, temperature_to_emf_n, emf_to_temperature_n),
    (ThermocoupleType::A1, temperature_to_emf_a1, emf_to_temperature_a1),
    (ThermocoupleType::A2, temperature_to_emf_a2, emf_to_temperature_a2),
    (ThermocoupleType::A3, temperature_to_emf_a3, emf_to_temperature_a3),
    (ThermocoupleType::L, temperature_to_emf_l, emf_to_temperature_l),
    (ThermocoupleType::M, temperature_to_emf_m, emf_to_temperature_m),
];
