//! Physical Domains and Range Policy
//!
//! ## Domains
//!
//! Every reference function maps one physical quantity onto the other:
//!
//! ```text
//! temperature_to_emf : °C -> mV   (forward reference function)
//! emf_to_temperature : mV -> °C   (inverse reference function)
//! ```
//!
//! The standard certifies each function only inside a documented range. A
//! [`DomainRange`] holds that range for one (type, quantity) pair.
//!
//! ## Out-of-Range Inputs
//!
//! Polynomials do not know where they stop being accurate. What happens to
//! an input outside the documented range is decided once, by a
//! [`RangePolicy`], and applied identically to all 26 conversions:
//!
//! | Policy        | Input used           | Result                     |
//! |---------------|----------------------|----------------------------|
//! | `Extrapolate` | raw value            | nearest segment, extended  |
//! | `Clamp`       | nearest range bound  | value at the bound         |
//! | `Reject`      | none                 | `ConversionError::OutOfRange` |
//!
//! NaN is never out of range: it passes through and comes back out as NaN.

use core::fmt;

use crate::errors::{ConversionError, ConversionResult};

/// Physical quantity on one side of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantity {
    /// Junction temperature in degrees Celsius
    Temperature,
    /// Thermoelectromotive force in millivolts
    Emf,
}

impl Quantity {
    /// Unit symbol used throughout the crate
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Emf => "mV",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => f.write_str("temperature"),
            Self::Emf => f.write_str("emf"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Quantity {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Temperature => defmt::write!(fmt, "temperature"),
            Self::Emf => defmt::write!(fmt, "emf"),
        }
    }
}

/// Closed interval `[min, max]` over which a reference function is certified
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl DomainRange {
    /// Create a range; bounds are taken as given
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range, bounds included
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Nearest value inside the range. NaN stays NaN.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// What to do with an input outside the documented range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RangePolicy {
    /// Evaluate the nearest segment at the raw input (reduced accuracy)
    #[default]
    Extrapolate,
    /// Evaluate at the nearest documented bound
    Clamp,
    /// Fail with [`ConversionError::OutOfRange`]
    Reject,
}

impl RangePolicy {
    /// Resolve the value a reference function should be evaluated at.
    ///
    /// In-range values (and NaN) are returned unchanged under every policy.
    pub fn apply(self, range: DomainRange, quantity: Quantity, value: f64) -> ConversionResult<f64> {
        if range.contains(value) || value.is_nan() {
            return Ok(value);
        }

        match self {
            Self::Extrapolate => Ok(value),
            Self::Clamp => Ok(range.clamp(value)),
            Self::Reject => Err(ConversionError::OutOfRange {
                quantity,
                value,
                min: range.min,
                max: range.max,
            }),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RangePolicy {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Extrapolate => defmt::write!(fmt, "extrapolate"),
            Self::Clamp => defmt::write!(fmt, "clamp"),
            Self::Reject => defmt::write!(fmt, "reject"),
        }
    }
}
