//! Error Types for Conversion Failures
//!
//! ## Design Philosophy
//!
//! Conversions run inside acquisition loops on small targets, so errors are
//! kept `Copy`, carry no heap data and fit in a few machine words.
//!
//! ## Error Categories
//!
//! ### Contract violations
//! - `UnknownThermocouple`: a raw type code outside `0..=12`. The fault hook
//!   is notified before this error is returned.
//! - `UnknownDesignation`: a type name that does not parse.
//!
//! ### Domain violations
//! - `OutOfRange`: input outside the documented range. Only produced when
//!   the converter runs with [`RangePolicy::Reject`](crate::RangePolicy).
//!
//! Non-finite inputs are not an error. NaN in means NaN out.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use thermoemf_core::{ConversionError, Converter, ThermocoupleType};
//!
//! let converter = Converter::strict();
//! match converter.emf_to_temperature(ThermocoupleType::K, 60.0) {
//!     Ok(celsius) => {
//!         // inside the certified range
//!     }
//!     Err(ConversionError::OutOfRange { value, max, .. }) => {
//!         // open thermocouple or wrong type selected
//!         assert!(value > max);
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

use crate::domain::Quantity;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// Input outside the documented range of the reference function
    #[error("{quantity} {value} {} outside documented range [{min}, {max}]", .quantity.unit())]
    OutOfRange {
        /// Which side of the conversion the input belongs to
        quantity: Quantity,
        /// The rejected input
        value: f64,
        /// Documented lower bound
        min: f64,
        /// Documented upper bound
        max: f64,
    },

    /// Raw type selector does not name one of the 13 thermocouple types
    #[error("Unknown thermocouple type code {code}")]
    UnknownThermocouple {
        /// The rejected ordinal
        code: u8,
    },

    /// Type name could not be parsed
    #[error("Unknown thermocouple designation")]
    UnknownDesignation,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { quantity, value, min, max } =>
                defmt::write!(fmt, "{} {} {=str} outside [{}, {}]", quantity, value, quantity.unit(), min, max),
            Self::UnknownThermocouple { code } =>
                defmt::write!(fmt, "Unknown thermocouple code {}", code),
            Self::UnknownDesignation =>
                defmt::write!(fmt, "Unknown thermocouple designation"),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_quantity() {
        let err = ConversionError::OutOfRange {
            quantity: Quantity::Emf,
            value: 60.0,
            min: -5.891,
            max: 54.886,
        };
        assert_eq!(err.to_string(), "emf 60 mV outside documented range [-5.891, 54.886]");

        let err = ConversionError::OutOfRange {
            quantity: Quantity::Temperature,
            value: -300.0,
            min: -270.0,
            max: 1372.0,
        };
        assert_eq!(
            err.to_string(),
            "temperature -300 °C outside documented range [-270, 1372]"
        );
    }

    #[test]
    fn unknown_code_message() {
        let err = ConversionError::UnknownThermocouple { code: 13 };
        assert_eq!(err.to_string(), "Unknown thermocouple type code 13");
    }

    #[test]
    fn errors_are_small() {
        assert!(core::mem::size_of::<ConversionError>() <= 40);
    }
}
