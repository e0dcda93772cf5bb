//! Policy-aware conversions
//!
//! [`Converter`] is the checked entry point to the reference functions. It
//! owns a [`ConverterConfig`] and applies the same [`RangePolicy`] to every
//! (type, direction) pair, so a firmware build decides once whether readings
//! past the documented range are extrapolated, pinned to the bound or
//! refused.
//!
//! ```rust
//! use thermoemf_core::{Converter, ThermocoupleType};
//!
//! let converter = Converter::strict();
//! let mv = converter.temperature_to_emf(ThermocoupleType::J, 100.0).unwrap();
//! assert!((mv - 5.269).abs() < 0.001);
//! assert!(converter.temperature_to_emf(ThermocoupleType::J, 1300.0).is_err());
//! ```

use crate::config::ConverterConfig;
use crate::domain::{DomainRange, RangePolicy};
use crate::errors::ConversionResult;
use crate::tables::{self, Direction};
use crate::thermocouple::ThermocoupleType;

/// Temperature ↔ EMF converter with a fixed range policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Converter with the given configuration
    pub const fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Evaluate the nearest segment for out-of-range inputs
    pub fn extrapolating() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Pin out-of-range inputs to the documented bound
    pub const fn clamping() -> Self {
        Self::new(ConverterConfig::clamping())
    }

    /// Refuse out-of-range inputs
    pub const fn strict() -> Self {
        Self::new(ConverterConfig::strict())
    }

    /// Active configuration
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Thermoelectromotive force in mV of a `thermocouple` whose hot
    /// junction is at `celsius` and whose reference junction is at 0 °C.
    pub fn temperature_to_emf(
        &self,
        thermocouple: ThermocoupleType,
        celsius: f64,
    ) -> ConversionResult<f64> {
        self.evaluate(
            thermocouple,
            Direction::TemperatureToEmf,
            thermocouple.temperature_range(),
            celsius,
        )
    }

    /// Hot-junction temperature in °C producing `millivolts` against a 0 °C
    /// reference junction.
    pub fn emf_to_temperature(
        &self,
        thermocouple: ThermocoupleType,
        millivolts: f64,
    ) -> ConversionResult<f64> {
        self.evaluate(
            thermocouple,
            Direction::EmfToTemperature,
            thermocouple.emf_range(),
            millivolts,
        )
    }

    fn evaluate(
        &self,
        thermocouple: ThermocoupleType,
        direction: Direction,
        range: DomainRange,
        input: f64,
    ) -> ConversionResult<f64> {
        let table = tables::table(thermocouple, direction);
        let policy = self.config.range_policy;

        let x = match policy.apply(range, table.quantity, input) {
            Ok(x) => x,
            Err(err) => {
                log_debug!(
                    "type {} {} {} {} rejected, outside [{}, {}]",
                    thermocouple,
                    table.quantity,
                    input,
                    table.quantity.unit(),
                    range.min,
                    range.max
                );
                return Err(err);
            }
        };

        if self.config.warn_out_of_range && !input.is_nan() && !range.contains(input) {
            if policy == RangePolicy::Clamp {
                log_warn!(
                    "type {} {} {} {} clamped to {}",
                    thermocouple,
                    table.quantity,
                    input,
                    table.quantity.unit(),
                    x
                );
            } else {
                log_warn!(
                    "type {} {} {} {} outside [{}, {}], extrapolating",
                    thermocouple,
                    table.quantity,
                    input,
                    table.quantity.unit(),
                    range.min,
                    range.max
                );
            }
        }

        Ok(table.evaluate(x))
    }
}

impl From<ConverterConfig> for Converter {
    fn from(config: ConverterConfig) -> Self {
        Self::new(config)
    }
}
