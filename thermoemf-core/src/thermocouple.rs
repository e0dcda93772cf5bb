//! Thermocouple Types of GOST R 8.585-2001
//!
//! Thirteen types, in the fixed order used by firmware type selectors:
//!
//! | Code | Type | GOST designation | Electrodes                                   |
//! |------|------|------------------|----------------------------------------------|
//! | 0    | R    | ТПП13            | Pt-13%Rh / Pt                                |
//! | 1    | S    | ТПП10            | Pt-10%Rh / Pt                                |
//! | 2    | B    | ТПР              | Pt-30%Rh / Pt-6%Rh                           |
//! | 3    | J    | ТЖК              | Fe / Cu-Ni                                   |
//! | 4    | T    | ТМКн             | Cu / Cu-Ni                                   |
//! | 5    | E    | ТХКн             | Ni-Cr / Cu-Ni                                |
//! | 6    | K    | ТХА              | Ni-Cr / Ni-Al                                |
//! | 7    | N    | ТНН              | Ni-Cr-Si / Ni-Si                             |
//! | 8    | A-1  | ТВР              | W-5%Re / W-20%Re                             |
//! | 9    | A-2  | ТВР              | W-5%Re / W-20%Re                             |
//! | 10   | A-3  | ТВР              | W-5%Re / W-20%Re                             |
//! | 11   | L    | ТХК              | chromel / copel                              |
//! | 12   | M    | ТМК              | Cu / copel                                   |
//!
//! The codes are stable: they are what gets stored in configuration
//! EEPROMs and sent over the wire, so variants must never be reordered.

use core::fmt;
use core::str::FromStr;

use crate::constants::ranges::*;
use crate::domain::DomainRange;
use crate::errors::ConversionError;

/// Thermocouple type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ThermocoupleType {
    /// Platinum-13% rhodium / platinum
    R = 0,
    /// Platinum-10% rhodium / platinum
    S = 1,
    /// Platinum-30% rhodium / platinum-6% rhodium
    B = 2,
    /// Iron / copper-nickel
    J = 3,
    /// Copper / copper-nickel
    T = 4,
    /// Nickel-chromium / copper-nickel
    E = 5,
    /// Nickel-chromium / nickel-aluminium
    K = 6,
    /// Nickel-chromium-silicon / nickel-silicon
    N = 7,
    /// Tungsten-rhenium, grade A-1
    A1 = 8,
    /// Tungsten-rhenium, grade A-2
    A2 = 9,
    /// Tungsten-rhenium, grade A-3
    A3 = 10,
    /// Chromel / copel
    L = 11,
    /// Copper / copel
    M = 12,
}

impl ThermocoupleType {
    /// Number of supported types
    pub const COUNT: usize = 13;

    /// All types in code order
    pub const ALL: [Self; Self::COUNT] = [
        Self::R,
        Self::S,
        Self::B,
        Self::J,
        Self::T,
        Self::E,
        Self::K,
        Self::N,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::L,
        Self::M,
    ];

    /// Stable ordinal used by firmware type selectors
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Type for an ordinal, `None` outside `0..=12`
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < Self::COUNT {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Letter designation as printed in the standard
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::S => "S",
            Self::B => "B",
            Self::J => "J",
            Self::T => "T",
            Self::E => "E",
            Self::K => "K",
            Self::N => "N",
            Self::A1 => "A-1",
            Self::A2 => "A-2",
            Self::A3 => "A-3",
            Self::L => "L",
            Self::M => "M",
        }
    }

    /// National (Cyrillic) designation
    pub const fn gost_designation(self) -> &'static str {
        match self {
            Self::R => "ТПП13",
            Self::S => "ТПП10",
            Self::B => "ТПР",
            Self::J => "ТЖК",
            Self::T => "ТМКн",
            Self::E => "ТХКн",
            Self::K => "ТХА",
            Self::N => "ТНН",
            Self::A1 | Self::A2 | Self::A3 => "ТВР",
            Self::L => "ТХК",
            Self::M => "ТМК",
        }
    }

    /// Positive / negative electrode materials
    pub const fn materials(self) -> &'static str {
        match self {
            Self::R => "platinum-13% rhodium / platinum",
            Self::S => "platinum-10% rhodium / platinum",
            Self::B => "platinum-30% rhodium / platinum-6% rhodium",
            Self::J => "iron / copper-nickel",
            Self::T => "copper / copper-nickel",
            Self::E => "nickel-chromium / copper-nickel",
            Self::K => "nickel-chromium / nickel-aluminium",
            Self::N => "nickel-chromium-silicon / nickel-silicon",
            Self::A1 | Self::A2 | Self::A3 => "tungsten-5% rhenium / tungsten-20% rhenium",
            Self::L => "chromel / copel",
            Self::M => "copper / copel",
        }
    }

    /// Documented domain of the temperature → EMF function (°C)
    pub const fn temperature_range(self) -> DomainRange {
        match self {
            Self::R => TYPE_R_TEMPERATURE_C,
            Self::S => TYPE_S_TEMPERATURE_C,
            Self::B => TYPE_B_TEMPERATURE_C,
            Self::J => TYPE_J_TEMPERATURE_C,
            Self::T => TYPE_T_TEMPERATURE_C,
            Self::E => TYPE_E_TEMPERATURE_C,
            Self::K => TYPE_K_TEMPERATURE_C,
            Self::N => TYPE_N_TEMPERATURE_C,
            Self::A1 => TYPE_A1_TEMPERATURE_C,
            Self::A2 => TYPE_A2_TEMPERATURE_C,
            Self::A3 => TYPE_A3_TEMPERATURE_C,
            Self::L => TYPE_L_TEMPERATURE_C,
            Self::M => TYPE_M_TEMPERATURE_C,
        }
    }

    /// Documented domain of the EMF → temperature function (mV)
    pub const fn emf_range(self) -> DomainRange {
        match self {
            Self::R => TYPE_R_EMF_MV,
            Self::S => TYPE_S_EMF_MV,
            Self::B => TYPE_B_EMF_MV,
            Self::J => TYPE_J_EMF_MV,
            Self::T => TYPE_T_EMF_MV,
            Self::E => TYPE_E_EMF_MV,
            Self::K => TYPE_K_EMF_MV,
            Self::N => TYPE_N_EMF_MV,
            Self::A1 => TYPE_A1_EMF_MV,
            Self::A2 => TYPE_A2_EMF_MV,
            Self::A3 => TYPE_A3_EMF_MV,
            Self::L => TYPE_L_EMF_MV,
            Self::M => TYPE_M_EMF_MV,
        }
    }

    /// Temperatures the EMF → temperature function is certified for (°C)
    pub const fn inverse_temperature_range(self) -> DomainRange {
        match self {
            Self::R => TYPE_R_INVERSE_TEMPERATURE_C,
            Self::S => TYPE_S_INVERSE_TEMPERATURE_C,
            Self::B => TYPE_B_INVERSE_TEMPERATURE_C,
            Self::J => TYPE_J_INVERSE_TEMPERATURE_C,
            Self::T => TYPE_T_INVERSE_TEMPERATURE_C,
            Self::E => TYPE_E_INVERSE_TEMPERATURE_C,
            Self::K => TYPE_K_INVERSE_TEMPERATURE_C,
            Self::N => TYPE_N_INVERSE_TEMPERATURE_C,
            Self::A1 => TYPE_A1_INVERSE_TEMPERATURE_C,
            Self::A2 => TYPE_A2_INVERSE_TEMPERATURE_C,
            Self::A3 => TYPE_A3_INVERSE_TEMPERATURE_C,
            Self::L => TYPE_L_INVERSE_TEMPERATURE_C,
            Self::M => TYPE_M_INVERSE_TEMPERATURE_C,
        }
    }
}

impl TryFrom<u8> for ThermocoupleType {
    type Error = ConversionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(ConversionError::UnknownThermocouple { code })
    }
}

impl From<ThermocoupleType> for u8 {
    fn from(thermocouple: ThermocoupleType) -> Self {
        thermocouple.code()
    }
}

impl FromStr for ThermocoupleType {
    type Err = ConversionError;

    /// Accepts the letter designation in either case, with or without the
    /// dash for the A grades ("K", "a-1", "A1").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let input = s.as_bytes();
        Self::ALL
            .into_iter()
            .find(|ty| {
                let name = ty.name().as_bytes();
                input.eq_ignore_ascii_case(name)
                    || (name.len() == 3
                        && input.len() == 2
                        && input[0].eq_ignore_ascii_case(&name[0])
                        && input[1] == name[2])
            })
            .ok_or(ConversionError::UnknownDesignation)
    }
}

impl fmt::Display for ThermocoupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ThermocoupleType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}
