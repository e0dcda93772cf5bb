//! Noble-metal thermocouples: R, S, B
//!
//! Platinum-rhodium types share the ITS-90 reference functions adopted by
//! GOST R 8.585-2001 unchanged from IEC 60584-1.
//!
//! ## Sub-ranges
//!
//! ```text
//!        forward (°C)                       inverse (mV)
//! R  -50 | 1064.18 | 1664.5 | 1768.1     -0.225 | 1.923 | 11.361 | 19.739 | 21.103
//! S  -50 | 1064.18 | 1664.5 | 1768.1     -0.235 | 1.874 | 10.332 | 17.536 | 18.694
//! B    0 | 630.615 | 1820                 0.291 | 2.431 | 13.820
//! ```
//!
//! The published inverse fits for R and S overlap between the freezing
//! point of gold (1064.18 °C) and 1200 °C; the split is taken at the gold
//! point so both directions break at the same temperature.
//!
//! Type B produces less than 2 µV below 50 °C and its curve has a minimum
//! near 21 °C, so the inverse function starts at 250 °C (0.291 mV).
//!
//! Inverse accuracy: R, S ±0.02 °C; B ±0.03 °C.

use super::ReferenceTables;
use crate::constants::ranges::{
    TYPE_B_EMF_MV, TYPE_B_TEMPERATURE_C, TYPE_R_EMF_MV, TYPE_R_TEMPERATURE_C,
    TYPE_S_EMF_MV, TYPE_S_TEMPERATURE_C,
};
use crate::domain::Quantity;
use crate::polynomial::{CoefficientSet, CoefficientTable};

/// Type R: platinum-13% rhodium / platinum
pub(super) static TYPE_R: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -50 °C to 1064.18 °C
            CoefficientSet {
                lower: TYPE_R_TEMPERATURE_C.min,
                upper: 1064.18,
                coefficients: &[
                    0.0,
                    5.28961729765E-03,
                    1.39166589782E-05,
                    -2.38855693017E-08,
                    3.56916001063E-11,
                    -4.62347666298E-14,
                    5.00777441034E-17,
                    -3.73105886191E-20,
                    1.57716482367E-23,
                    -2.81038625251E-27,
                ],
                correction: None,
            },
            // 1064.18 °C to 1664.5 °C
            CoefficientSet {
                lower: 1064.18,
                upper: 1664.5,
                coefficients: &[
                    2.95157925316E+00,
                    -2.52061251332E-03,
                    1.59564501865E-05,
                    -7.64085947576E-09,
                    2.05305291024E-12,
                    -2.93359668173E-16,
                ],
                correction: None,
            },
            // 1664.5 °C to 1768.1 °C
            CoefficientSet {
                lower: 1664.5,
                upper: TYPE_R_TEMPERATURE_C.max,
                coefficients: &[
                    1.52232118209E+02,
                    -2.68819888545E-01,
                    1.71280280471E-04,
                    -3.45895706453E-08,
                    -9.34633971046E-15,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -0.225 mV to 1.923 mV
            CoefficientSet {
                lower: TYPE_R_EMF_MV.min,
                upper: 1.923,
                coefficients: &[
                    0.0,
                    1.889138E+02,
                    -9.383529E+01,
                    1.3068619E+02,
                    -2.270358E+02,
                    3.5145659E+02,
                    -3.89539E+02,
                    2.8239471E+02,
                    -1.2607281E+02,
                    3.1353611E+01,
                    -3.3187769E+00,
                ],
                correction: None,
            },
            // 1.923 mV to 11.361 mV
            CoefficientSet {
                lower: 1.923,
                upper: 11.361,
                coefficients: &[
                    1.334584505E+01,
                    1.472644573E+02,
                    -1.844024844E+01,
                    4.031129726E+00,
                    -6.24942836E-01,
                    6.468412046E-02,
                    -4.458750426E-03,
                    1.994710149E-04,
                    -5.31340179E-06,
                    6.481976217E-08,
                ],
                correction: None,
            },
            // 11.361 mV to 19.739 mV
            CoefficientSet {
                lower: 11.361,
                upper: 19.739,
                coefficients: &[
                    -8.199599416E+01,
                    1.553962042E+02,
                    -8.342197663E+00,
                    4.279433549E-01,
                    -1.19157791E-02,
                    1.492290091E-04,
                ],
                correction: None,
            },
            // 19.739 mV to 21.103 mV
            CoefficientSet {
                lower: 19.739,
                upper: TYPE_R_EMF_MV.max,
                coefficients: &[
                    3.406177836E+04,
                    -7.023729171E+03,
                    5.582903813E+02,
                    -1.952394635E+01,
                    2.560740231E-01,
                ],
                correction: None,
            },
        ],
    },
};

/// Type S: platinum-10% rhodium / platinum
pub(super) static TYPE_S: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -50 °C to 1064.18 °C
            CoefficientSet {
                lower: TYPE_S_TEMPERATURE_C.min,
                upper: 1064.18,
                coefficients: &[
                    0.0,
                    5.40313308631E-03,
                    1.2593428974E-05,
                    -2.32477968689E-08,
                    3.22028823036E-11,
                    -3.31465196389E-14,
                    2.55744251786E-17,
                    -1.25068871393E-20,
                    2.71443176145E-24,
                ],
                correction: None,
            },
            // 1064.18 °C to 1664.5 °C
            CoefficientSet {
                lower: 1064.18,
                upper: 1664.5,
                coefficients: &[
                    1.32900444085E+00,
                    3.34509311344E-03,
                    6.54805192818E-06,
                    -1.64856259209E-09,
                    1.29989605174E-14,
                ],
                correction: None,
            },
            // 1664.5 °C to 1768.1 °C
            CoefficientSet {
                lower: 1664.5,
                upper: TYPE_S_TEMPERATURE_C.max,
                coefficients: &[
                    1.46628232636E+02,
                    -2.58430516752E-01,
                    1.63693574641E-04,
                    -3.30439046987E-08,
                    -9.43223690612E-15,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -0.235 mV to 1.874 mV
            CoefficientSet {
                lower: TYPE_S_EMF_MV.min,
                upper: 1.874,
                coefficients: &[
                    0.0,
                    1.8494946E+02,
                    -8.00504062E+01,
                    1.0223743E+02,
                    -1.52248592E+02,
                    1.88821343E+02,
                    -1.59085941E+02,
                    8.2302788E+01,
                    -2.34181944E+01,
                    2.7978626E+00,
                ],
                correction: None,
            },
            // 1.874 mV to 10.332 mV
            CoefficientSet {
                lower: 1.874,
                upper: 10.332,
                coefficients: &[
                    1.291507177E+01,
                    1.466298863E+02,
                    -1.534713402E+01,
                    3.145945973E+00,
                    -4.163257839E-01,
                    3.187963771E-02,
                    -1.2916375E-03,
                    2.183475087E-05,
                    -1.447379511E-07,
                    8.211272125E-09,
                ],
                correction: None,
            },
            // 10.332 mV to 17.536 mV
            CoefficientSet {
                lower: 10.332,
                upper: 17.536,
                coefficients: &[
                    -8.087801117E+01,
                    1.621573104E+02,
                    -8.536869453E+00,
                    4.719686976E-01,
                    -1.441693666E-02,
                    2.08161889E-04,
                ],
                correction: None,
            },
            // 17.536 mV to 18.694 mV
            CoefficientSet {
                lower: 17.536,
                upper: TYPE_S_EMF_MV.max,
                coefficients: &[
                    5.333875126E+04,
                    -1.235892298E+04,
                    1.092657613E+03,
                    -4.265693686E+01,
                    6.24720542E-01,
                ],
                correction: None,
            },
        ],
    },
};

/// Type B: platinum-30% rhodium / platinum-6% rhodium
pub(super) static TYPE_B: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // 0 °C to 630.615 °C
            CoefficientSet {
                lower: TYPE_B_TEMPERATURE_C.min,
                upper: 630.615,
                coefficients: &[
                    0.0,
                    -2.4650818346E-04,
                    5.9040421171E-06,
                    -1.3257931636E-09,
                    1.5668291901E-12,
                    -1.694452924E-15,
                    6.2990347094E-19,
                ],
                correction: None,
            },
            // 630.615 °C to 1820 °C
            CoefficientSet {
                lower: 630.615,
                upper: TYPE_B_TEMPERATURE_C.max,
                coefficients: &[
                    -3.8938168621E+00,
                    2.857174747E-02,
                    -8.4885104785E-05,
                    1.5785280164E-07,
                    -1.6835344864E-10,
                    1.1109794013E-13,
                    -4.4515431033E-17,
                    9.8975640821E-21,
                    -9.3791330289E-25,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // 0.291 mV to 2.431 mV
            CoefficientSet {
                lower: TYPE_B_EMF_MV.min,
                upper: 2.431,
                coefficients: &[
                    9.8423321E+01,
                    6.99715E+02,
                    -8.4765304E+02,
                    1.0052644E+03,
                    -8.3345952E+02,
                    4.5508542E+02,
                    -1.5523037E+02,
                    2.988675E+01,
                    -2.474286E+00,
                ],
                correction: None,
            },
            // 2.431 mV to 13.82 mV
            CoefficientSet {
                lower: 2.431,
                upper: TYPE_B_EMF_MV.max,
                coefficients: &[
                    2.1315071E+02,
                    2.8510504E+02,
                    -5.2742887E+01,
                    9.9160804E+00,
                    -1.2965303E+00,
                    1.119587E-01,
                    -6.0625199E-03,
                    1.8661696E-04,
                    -2.4878585E-06,
                ],
                correction: None,
            },
        ],
    },
};
