//! Copel thermocouples: L (chromel/copel) and M (copper/copel)
//!
//! National types of GOST R 8.585-2001 with no IEC counterpart.
//!
//! ## Sub-ranges
//!
//! ```text
//!        forward (°C)          inverse (mV)
//! L  -200 | 0 | 800         -9.488 | 0 | 66.466
//! M  -200 | 100             -6.154 | 4.722
//! ```
//!
//! The forward L sets pass through every value of the printed reference
//! table at 50 °C steps below zero (exactly) and 100 °C steps above (within
//! the 1 µV rounding of the table).
//!
//! The forward M set is fitted to the type T curve scaled onto the M end
//! points (-6.154 mV at -200 °C, 4.722 mV at 100 °C). Both inverse
//! functions are least-squares fits to the forward sets.
//!
//! Inverse residual against the forward sets: L ±0.02 °C, M ±0.09 °C.
// TODO: replace the M set with the coefficients printed in GOST R 8.585-2001
// and check it against the printed M table inside the range.

use super::ReferenceTables;
use crate::constants::ranges::{
    TYPE_L_EMF_MV, TYPE_L_TEMPERATURE_C, TYPE_M_EMF_MV, TYPE_M_TEMPERATURE_C,
};
use crate::domain::Quantity;
use crate::polynomial::{CoefficientSet, CoefficientTable};

/// Type L: chromel / copel
pub(super) static TYPE_L: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -200 °C to 0 °C
            CoefficientSet {
                lower: TYPE_L_TEMPERATURE_C.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    6.3326667E-02,
                    6.0233333E-05,
                    -8.2666667E-08,
                    6.6666667E-11,
                ],
                correction: None,
            },
            // 0 °C to 800 °C
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_L_TEMPERATURE_C.max,
                coefficients: &[
                    0.0,
                    6.3132604E-02,
                    6.4757913E-05,
                    -1.2457943E-07,
                    3.1148436E-10,
                    -6.0510394E-13,
                    5.9673231E-16,
                    -2.2618198E-19,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -9.488 mV to 0 mV
            CoefficientSet {
                lower: TYPE_L_EMF_MV.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    1.5745142E+01,
                    -3.6573845E-01,
                    -1.1454587E-01,
                    -6.1362971E-02,
                    -1.5692598E-02,
                    -2.275569E-03,
                    -1.7204386E-04,
                    -5.4143166E-06,
                ],
                correction: None,
            },
            // 0 mV to 66.466 mV
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_L_EMF_MV.max,
                coefficients: &[
                    0.0,
                    1.5811393E+01,
                    -2.3794679E-01,
                    1.0941264E-02,
                    -4.5263274E-04,
                    1.3708599E-05,
                    -2.7324186E-07,
                    3.4008653E-09,
                    -2.4094847E-11,
                    7.4490924E-14,
                ],
                correction: None,
            },
        ],
    },
};

/// Type M: copper / copel
pub(super) static TYPE_M: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -200 °C to 100 °C
            CoefficientSet {
                lower: TYPE_M_TEMPERATURE_C.min,
                upper: TYPE_M_TEMPERATURE_C.max,
                coefficients: &[
                    0.0,
                    4.2585796E-02,
                    4.8137785E-05,
                    -4.4591611E-08,
                    2.7029736E-10,
                    8.1948112E-13,
                    -6.1784599E-15,
                    -2.391506E-17,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -6.154 mV to 4.722 mV
            CoefficientSet {
                lower: TYPE_M_EMF_MV.min,
                upper: TYPE_M_EMF_MV.max,
                coefficients: &[
                    0.0,
                    2.3500594E+01,
                    -6.2977967E-01,
                    3.6148054E-02,
                    -3.9141884E-03,
                    2.1736155E-03,
                    -2.0372039E-04,
                    -8.950496E-05,
                    3.4633192E-06,
                    1.9113533E-06,
                ],
                correction: None,
            },
        ],
    },
};
