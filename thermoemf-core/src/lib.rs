//! Thermocouple conversion engine for ThermoEMF
//!
//! Converts between hot-junction temperature and thermoelectromotive force
//! (EMF) for the 13 thermocouple types of GOST R 8.585-2001, and composes
//! cold-junction compensation on top of the per-type conversions.
//! Designed for measurement firmware as well as desktop tooling.
//!
//! Key constraints:
//! - `no_std` capable, no heap allocation
//! - Every call is a fixed-degree polynomial evaluation
//! - Coefficient tables are `static` and never mutated
//!
//! ```no_run
//! use thermoemf_core::{ColdJunctionCompensator, Converter, ThermocoupleType};
//!
//! let compensator = ColdJunctionCompensator::new(Converter::default());
//!
//! // 4.096 mV measured against a 25 °C reference junction
//! match compensator.hot_junction_temperature(25.0, 4.096, ThermocoupleType::K) {
//!     Ok(celsius) => {}, // ~124 °C
//!     Err(e) => {},      // only with a rejecting range policy
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod compensation;
pub mod config;
pub mod constants;
pub mod convert;
pub mod converter;
pub mod domain;
pub mod errors;
pub mod fault;
pub mod polynomial;
pub mod tables;
pub mod thermocouple;

// Public API
pub use compensation::{get_temperature, ColdJunctionCompensator};
pub use config::ConverterConfig;
pub use converter::Converter;
pub use domain::{DomainRange, Quantity, RangePolicy};
pub use errors::{ConversionError, ConversionResult};
pub use fault::{FaultCounter, FaultHandler, IgnoreFaults, LogFaultHandler, PanicFaultHandler};
pub use thermocouple::ThermocoupleType;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
