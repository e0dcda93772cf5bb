//! Documented Ranges per Thermocouple Type
//!
//! Each type has three ranges:
//!
//! ```text
//! TEMPERATURE         domain of temperature -> EMF
//! EMF                 domain of EMF -> temperature
//! INVERSE_TEMPERATURE temperatures whose EMF falls inside EMF
//! ```
//!
//! The inverse temperature range is narrower than the temperature range
//! where the standard publishes no inverse fit for the lowest part of the
//! curve: type B below 250 °C (the curve is flat and non-monotonic there)
//! and types T, E, K, N below -200 °C.
//!
//! Source: GOST R 8.585-2001, tables of reference function coefficients

use crate::domain::DomainRange;

// ===== TYPE R: Platinum-13% rhodium / platinum (ТПП13) =====

/// Type R temperature range (°C).
pub const TYPE_R_TEMPERATURE_C: DomainRange = DomainRange::new(-50.0, 1768.1);

/// Type R EMF range (mV).
pub const TYPE_R_EMF_MV: DomainRange = DomainRange::new(-0.225, 21.103);

/// Type R temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_R_INVERSE_TEMPERATURE_C: DomainRange = TYPE_R_TEMPERATURE_C;

// ===== TYPE S: Platinum-10% rhodium / platinum (ТПП10) =====

/// Type S temperature range (°C).
pub const TYPE_S_TEMPERATURE_C: DomainRange = DomainRange::new(-50.0, 1768.1);

/// Type S EMF range (mV).
pub const TYPE_S_EMF_MV: DomainRange = DomainRange::new(-0.235, 18.694);

/// Type S temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_S_INVERSE_TEMPERATURE_C: DomainRange = TYPE_S_TEMPERATURE_C;

// ===== TYPE B: Platinum-30% rhodium / platinum-6% rhodium (ТПР) =====

/// Type B temperature range (°C).
pub const TYPE_B_TEMPERATURE_C: DomainRange = DomainRange::new(0.0, 1820.0);

/// Type B EMF range (mV).
pub const TYPE_B_EMF_MV: DomainRange = DomainRange::new(0.291, 13.820);

/// Type B temperatures covered by the inverse fit (°C).
pub const TYPE_B_INVERSE_TEMPERATURE_C: DomainRange = DomainRange::new(250.0, 1820.0);

// ===== TYPE J: Iron / copper-nickel (ТЖК) =====

/// Type J temperature range (°C).
pub const TYPE_J_TEMPERATURE_C: DomainRange = DomainRange::new(-210.0, 1200.0);

/// Type J EMF range (mV).
pub const TYPE_J_EMF_MV: DomainRange = DomainRange::new(-8.095, 69.553);

/// Type J temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_J_INVERSE_TEMPERATURE_C: DomainRange = TYPE_J_TEMPERATURE_C;

// ===== TYPE T: Copper / copper-nickel (ТМКн) =====

/// Type T temperature range (°C).
pub const TYPE_T_TEMPERATURE_C: DomainRange = DomainRange::new(-270.0, 400.0);

/// Type T EMF range (mV).
pub const TYPE_T_EMF_MV: DomainRange = DomainRange::new(-5.603, 20.872);

/// Type T temperatures covered by the inverse fit (°C).
pub const TYPE_T_INVERSE_TEMPERATURE_C: DomainRange = DomainRange::new(-200.0, 400.0);

// ===== TYPE E: Nickel-chromium / copper-nickel (ТХКн) =====

/// Type E temperature range (°C).
pub const TYPE_E_TEMPERATURE_C: DomainRange = DomainRange::new(-270.0, 1000.0);

/// Type E EMF range (mV).
pub const TYPE_E_EMF_MV: DomainRange = DomainRange::new(-8.825, 76.373);

/// Type E temperatures covered by the inverse fit (°C).
pub const TYPE_E_INVERSE_TEMPERATURE_C: DomainRange = DomainRange::new(-200.0, 1000.0);

// ===== TYPE K: Nickel-chromium / nickel-aluminium (ТХА) =====

/// Type K temperature range (°C).
pub const TYPE_K_TEMPERATURE_C: DomainRange = DomainRange::new(-270.0, 1372.0);

/// Type K EMF range (mV).
pub const TYPE_K_EMF_MV: DomainRange = DomainRange::new(-5.891, 54.886);

/// Type K temperatures covered by the inverse fit (°C).
pub const TYPE_K_INVERSE_TEMPERATURE_C: DomainRange = DomainRange::new(-200.0, 1372.0);

// ===== TYPE N: Nickel-chromium-silicon / nickel-silicon (ТНН) =====

/// Type N temperature range (°C).
pub const TYPE_N_TEMPERATURE_C: DomainRange = DomainRange::new(-270.0, 1300.0);

/// Type N EMF range (mV).
pub const TYPE_N_EMF_MV: DomainRange = DomainRange::new(-3.990, 47.513);

/// Type N temperatures covered by the inverse fit (°C).
pub const TYPE_N_INVERSE_TEMPERATURE_C: DomainRange = DomainRange::new(-200.0, 1300.0);

// ===== TYPE A-1: Tungsten-5% rhenium / tungsten-20% rhenium (ТВР A-1) =====

/// Type A-1 temperature range (°C).
pub const TYPE_A1_TEMPERATURE_C: DomainRange = DomainRange::new(0.0, 2500.0);

/// Type A-1 EMF range (mV).
pub const TYPE_A1_EMF_MV: DomainRange = DomainRange::new(0.0, 33.640);

/// Type A-1 temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_A1_INVERSE_TEMPERATURE_C: DomainRange = TYPE_A1_TEMPERATURE_C;

// ===== TYPE A-2: Tungsten-5% rhenium / tungsten-20% rhenium (ТВР A-2) =====

/// Type A-2 temperature range (°C).
pub const TYPE_A2_TEMPERATURE_C: DomainRange = DomainRange::new(0.0, 1800.0);

/// Type A-2 EMF range (mV).
pub const TYPE_A2_EMF_MV: DomainRange = DomainRange::new(0.0, 27.232);

/// Type A-2 temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_A2_INVERSE_TEMPERATURE_C: DomainRange = TYPE_A2_TEMPERATURE_C;

// ===== TYPE A-3: Tungsten-5% rhenium / tungsten-20% rhenium (ТВР A-3) =====

/// Type A-3 temperature range (°C).
pub const TYPE_A3_TEMPERATURE_C: DomainRange = DomainRange::new(0.0, 1800.0);

/// Type A-3 EMF range (mV).
pub const TYPE_A3_EMF_MV: DomainRange = DomainRange::new(0.0, 26.773);

/// Type A-3 temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_A3_INVERSE_TEMPERATURE_C: DomainRange = TYPE_A3_TEMPERATURE_C;

// ===== TYPE L: Chromel / copel (ТХК) =====

/// Type L temperature range (°C).
pub const TYPE_L_TEMPERATURE_C: DomainRange = DomainRange::new(-200.0, 800.0);

/// Type L EMF range (mV).
pub const TYPE_L_EMF_MV: DomainRange = DomainRange::new(-9.488, 66.466);

/// Type L temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_L_INVERSE_TEMPERATURE_C: DomainRange = TYPE_L_TEMPERATURE_C;

// ===== TYPE M: Copper / copel (ТМК) =====

/// Type M temperature range (°C).
pub const TYPE_M_TEMPERATURE_C: DomainRange = DomainRange::new(-200.0, 100.0);

/// Type M EMF range (mV).
pub const TYPE_M_EMF_MV: DomainRange = DomainRange::new(-6.154, 4.722);

/// Type M temperatures covered by the inverse fit (°C). Same as the temperature range.
pub const TYPE_M_INVERSE_TEMPERATURE_C: DomainRange = TYPE_M_TEMPERATURE_C;
