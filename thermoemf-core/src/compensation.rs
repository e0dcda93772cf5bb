//! Cold-Junction Compensation
//!
//! ## Background
//!
//! A thermocouple measures the difference between its hot and reference
//! (cold) junctions. The reference functions assume the cold junction sits
//! at 0 °C; in a real instrument it sits at the terminal block temperature,
//! which a separate sensor reports. Compensation adds back the EMF the cold
//! junction would have produced against 0 °C:
//!
//! ```text
//! E_cj    = temperature_to_emf(type, t_cj)
//! E_total = E_measured + E_cj
//! t_hot   = emf_to_temperature(type, E_total)
//! ```
//!
//! ## Type Selection
//!
//! Firmware usually stores the thermocouple type as a raw code. A code that
//! names none of the 13 types is a contract violation: the
//! [`FaultHandler`] hears about it once, and the call yields
//! [`ConversionError::UnknownThermocouple`] (or NaN through
//! [`get_temperature`](ColdJunctionCompensator::get_temperature)).
//!
//! ## Example
//!
//! ```rust
//! use thermoemf_core::{ColdJunctionCompensator, Converter, FaultCounter, ThermocoupleType};
//!
//! let compensator = ColdJunctionCompensator::with_handler(Converter::strict(), FaultCounter::new());
//!
//! let celsius = compensator.compensate(25.0, 0.0, ThermocoupleType::K.code()).unwrap();
//! assert!((celsius - 25.0).abs() < 0.1);
//!
//! assert!(compensator.get_temperature(25.0, 0.0, 13).is_nan());
//! assert_eq!(compensator.handler().count(), 1);
//! ```

use crate::converter::Converter;
use crate::errors::{ConversionError, ConversionResult};
use crate::fault::{FaultHandler, LogFaultHandler};
use crate::thermocouple::ThermocoupleType;

/// Composes cold-junction compensation with type dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColdJunctionCompensator<H: FaultHandler = LogFaultHandler> {
    converter: Converter,
    handler: H,
}

impl ColdJunctionCompensator<LogFaultHandler> {
    /// Compensator reporting faults to the log
    pub const fn new(converter: Converter) -> Self {
        Self::with_handler(converter, LogFaultHandler)
    }
}

impl<H: FaultHandler + Default> Default for ColdJunctionCompensator<H> {
    fn default() -> Self {
        Self::with_handler(Converter::default(), H::default())
    }
}

impl<H: FaultHandler> ColdJunctionCompensator<H> {
    /// Compensator reporting faults to `handler`
    pub const fn with_handler(converter: Converter, handler: H) -> Self {
        Self { converter, handler }
    }

    /// Underlying converter
    pub const fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Installed fault handler
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Hot-junction temperature (°C) of a `thermocouple` reading
    /// `measured_mv` while its cold junction is at `cold_junction_c`.
    pub fn hot_junction_temperature(
        &self,
        cold_junction_c: f64,
        measured_mv: f64,
        thermocouple: ThermocoupleType,
    ) -> ConversionResult<f64> {
        let cold_junction_mv = self.converter.temperature_to_emf(thermocouple, cold_junction_c)?;
        self.converter
            .emf_to_temperature(thermocouple, measured_mv + cold_junction_mv)
    }

    /// Same as [`hot_junction_temperature`](Self::hot_junction_temperature)
    /// for a raw type code. Unknown codes are reported to the fault handler.
    pub fn compensate(&self, cold_junction_c: f64, measured_mv: f64, code: u8) -> ConversionResult<f64> {
        let thermocouple = resolve(code, &self.handler)?;
        self.hot_junction_temperature(cold_junction_c, measured_mv, thermocouple)
    }

    /// Hot-junction temperature, NaN on any failure
    pub fn get_temperature(&self, cold_junction_c: f64, measured_mv: f64, code: u8) -> f64 {
        self.compensate(cold_junction_c, measured_mv, code)
            .unwrap_or(f64::NAN)
    }

    /// EMF (mV) a `thermocouple` produces with its hot junction at `hot_c`
    /// and its cold junction at `cold_junction_c`.
    pub fn measured_emf(
        &self,
        hot_c: f64,
        cold_junction_c: f64,
        thermocouple: ThermocoupleType,
    ) -> ConversionResult<f64> {
        let hot_mv = self.converter.temperature_to_emf(thermocouple, hot_c)?;
        let cold_junction_mv = self.converter.temperature_to_emf(thermocouple, cold_junction_c)?;
        Ok(hot_mv - cold_junction_mv)
    }
}

/// Compensated hot-junction temperature for a raw type code, using the
/// extrapolating converter.
///
/// Returns NaN after notifying `handler` when `code` names no thermocouple
/// type.
pub fn get_temperature<H>(cold_junction_c: f64, measured_mv: f64, code: u8, handler: &H) -> f64
where
    H: FaultHandler + ?Sized,
{
    let converter = Converter::extrapolating();
    resolve(code, handler)
        .and_then(|thermocouple| {
            let cold_junction_mv = converter.temperature_to_emf(thermocouple, cold_junction_c)?;
            converter.emf_to_temperature(thermocouple, measured_mv + cold_junction_mv)
        })
        .unwrap_or(f64::NAN)
}

fn resolve<H: FaultHandler + ?Sized>(code: u8, handler: &H) -> ConversionResult<ThermocoupleType> {
    ThermocoupleType::from_code(code).ok_or_else(|| {
        handler.unknown_thermocouple(code);
        ConversionError::UnknownThermocouple { code }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::{FaultCounter, IgnoreFaults};
    use crate::RangePolicy;

    #[test]
    fn zero_emf_reads_cold_junction_temperature() {
        let compensator = ColdJunctionCompensator::new(Converter::extrapolating());
        for ty in ThermocoupleType::ALL {
            let range = ty.inverse_temperature_range();
            let cj = range.min.max(0.0) + 25.0;
            let hot = compensator.hot_junction_temperature(cj, 0.0, ty).unwrap();
            // A-grade inverse fits are the loosest near the bottom of the range
            assert!((hot - cj).abs() < 1.1, "{ty}: {hot}");
        }
    }

    #[test]
    fn compensation_inverts_measured_emf() {
        let compensator = ColdJunctionCompensator::new(Converter::strict());
        let measured = compensator.measured_emf(300.0, 25.0, ThermocoupleType::K).unwrap();
        assert!((measured - (12.209 - 1.000)).abs() < 0.002);

        let hot = compensator
            .hot_junction_temperature(25.0, measured, ThermocoupleType::K)
            .unwrap();
        assert!((hot - 300.0).abs() < 0.06);
    }

    #[test]
    fn unknown_code_notifies_handler_once() {
        let compensator =
            ColdJunctionCompensator::with_handler(Converter::default(), FaultCounter::new());

        assert_eq!(
            compensator.compensate(25.0, 1.0, 13),
            Err(ConversionError::UnknownThermocouple { code: 13 })
        );
        assert!(compensator.get_temperature(25.0, 1.0, 255).is_nan());

        assert_eq!(compensator.handler().count(), 2);
        assert_eq!(compensator.handler().last_code(), Some(255));
    }

    #[test]
    fn known_codes_never_reach_handler() {
        let compensator =
            ColdJunctionCompensator::with_handler(Converter::default(), FaultCounter::new());
        for ty in ThermocoupleType::ALL {
            assert!(!compensator.get_temperature(20.0, 1.0, ty.code()).is_nan(), "{ty}");
        }
        assert_eq!(compensator.handler().count(), 0);
    }

    #[test]
    fn strict_range_errors_become_nan() {
        let compensator =
            ColdJunctionCompensator::with_handler(Converter::strict(), FaultCounter::new());
        assert!(compensator.get_temperature(25.0, 80.0, ThermocoupleType::K.code()).is_nan());
        assert_eq!(compensator.handler().count(), 0);
        assert_eq!(compensator.converter().config().range_policy, RangePolicy::Reject);
    }

    #[test]
    fn free_function_matches_compensator() {
        let compensator = ColdJunctionCompensator::<IgnoreFaults>::default();
        let via_method = compensator.get_temperature(22.5, 3.2, ThermocoupleType::J.code());
        let via_fn = get_temperature(22.5, 3.2, ThermocoupleType::J.code(), &IgnoreFaults);
        assert_eq!(via_method, via_fn);
    }

    #[test]
    fn free_function_reports_unknown_codes() {
        let counter = FaultCounter::new();
        assert!(get_temperature(25.0, 1.0, 13, &counter).is_nan());
        assert_eq!(counter.last_code(), Some(13));
    }
}
