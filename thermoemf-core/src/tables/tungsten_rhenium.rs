//! Tungsten-rhenium thermocouples: A-1, A-2, A-3
//!
//! Each type is a single 8th-degree polynomial in both directions.
//!
//! A-1 carries the coefficients of GOST R 8.585-2001. The A-2 and A-3
//! functions are the A-1 functions rescaled so that the forward function
//! passes through the published end points (27.232 mV and 26.773 mV at
//! 1800 °C):
//!
//! ```text
//! k        = E_end / E_A1(1800 °C)
//! forward  : E(t) = k · E_A1(t)       a[i] = k · a_A1[i]
//! inverse  : t(E) = t_A1(E / k)       d[i] = d_A1[i] / k^i
//! ```
//!
//! The inverse A-1 fit leaves up to 1 °C of residual near 0 mV; the rescaled
//! types inherit the same residual.
// TODO: replace the A-2 and A-3 sets with the coefficient tables printed
// in GOST R 8.585-2001 once a verified copy is available.

use super::ReferenceTables;
use crate::constants::ranges::{
    TYPE_A1_EMF_MV, TYPE_A1_TEMPERATURE_C, TYPE_A2_EMF_MV, TYPE_A2_TEMPERATURE_C,
    TYPE_A3_EMF_MV, TYPE_A3_TEMPERATURE_C,
};
use crate::domain::Quantity;
use crate::polynomial::{CoefficientSet, CoefficientTable};

/// Type A-1
pub(super) static TYPE_A1: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // 0 °C to 2500 °C
            CoefficientSet {
                lower: TYPE_A1_TEMPERATURE_C.min,
                upper: TYPE_A1_TEMPERATURE_C.max,
                coefficients: &[
                    7.1564735E-04,
                    1.1951905E-02,
                    1.6672625E-05,
                    -2.8287807E-08,
                    2.8397839E-11,
                    -1.8505007E-14,
                    7.3632123E-18,
                    -1.6148878E-21,
                    1.4901679E-25,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // 0 mV to 33.64 mV
            CoefficientSet {
                lower: TYPE_A1_EMF_MV.min,
                upper: TYPE_A1_EMF_MV.max,
                coefficients: &[
                    9.643027E-01,
                    7.9495086E+01,
                    -4.999031E+00,
                    6.341776E-01,
                    -4.7440967E-02,
                    2.1811337E-03,
                    -5.8324228E-05,
                    8.2433725E-07,
                    -4.592848E-09,
                ],
                correction: None,
            },
        ],
    },
};

/// Type A-2
pub(super) static TYPE_A2: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // 0 °C to 1800 °C
            CoefficientSet {
                lower: TYPE_A2_TEMPERATURE_C.min,
                upper: TYPE_A2_TEMPERATURE_C.max,
                coefficients: &[
                    7.2186146E-04,
                    1.2055686E-02,
                    1.6817397E-05,
                    -2.8533436E-08,
                    2.8644423E-11,
                    -1.866569E-14,
                    7.4271485E-18,
                    -1.6289102E-21,
                    1.5031073E-25,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // 0 mV to 27.232 mV
            CoefficientSet {
                lower: TYPE_A2_EMF_MV.min,
                upper: TYPE_A2_EMF_MV.max,
                coefficients: &[
                    9.643027E-01,
                    7.8810757E+01,
                    -4.9133337E+00,
                    6.1794033E-01,
                    -4.5828368E-02,
                    2.0888553E-03,
                    -5.5375835E-05,
                    7.7592801E-07,
                    -4.2859173E-09,
                ],
                correction: None,
            },
        ],
    },
};

/// Type A-3
pub(super) static TYPE_A3: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // 0 °C to 1800 °C
            CoefficientSet {
                lower: TYPE_A3_TEMPERATURE_C.min,
                upper: TYPE_A3_TEMPERATURE_C.max,
                coefficients: &[
                    7.0969436E-04,
                    1.1852485E-02,
                    1.6533937E-05,
                    -2.80525E-08,
                    2.8161616E-11,
                    -1.8351076E-14,
                    7.3019627E-18,
                    -1.6014546E-21,
                    1.4777722E-25,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // 0 mV to 26.773 mV
            CoefficientSet {
                lower: TYPE_A3_EMF_MV.min,
                upper: TYPE_A3_EMF_MV.max,
                coefficients: &[
                    9.643027E-01,
                    8.0161899E+01,
                    -5.0832476E+00,
                    6.5027049E-01,
                    -4.9052867E-02,
                    2.2741592E-03,
                    -6.1321856E-05,
                    8.7397484E-07,
                    -4.9102521E-09,
                ],
                correction: None,
            },
        ],
    },
};
