//! Constants for ThermoEMF Core
//!
//! Centralized, documented constants used by the coefficient tables and the
//! converters. Every documented range of GOST R 8.585-2001 lives here once;
//! the tables take their outer breakpoints from these values.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Quote the clause of the standard a new constant comes from
//! 3. Include the unit in the name (`_C`, `_MV`)

/// Documented temperature and EMF ranges for every thermocouple type.
pub mod ranges;
