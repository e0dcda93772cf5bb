//! Base-metal thermocouples: J, T, E, K, N
//!
//! ITS-90 reference functions, identical in GOST R 8.585-2001 and
//! IEC 60584-1.
//!
//! ## Sub-ranges
//!
//! ```text
//!        forward (°C)              inverse (mV)
//! J  -210 | 760 | 1200          -8.095 | 0 | 42.919 | 69.553
//! T  -270 | 0   | 400           -5.603 | 0 | 20.872
//! E  -270 | 0   | 1000          -8.825 | 0 | 76.373
//! K  -270 | 0   | 1372          -5.891 | 0 | 20.644 | 54.886
//! N  -270 | 0   | 1300          -3.990 | 0 | 20.613 | 47.513
//! ```
//!
//! Type K above 0 °C adds an exponential term for the magnetic
//! transformation of the nickel-aluminium leg near 127 °C.
//!
//! No inverse fit is published below -200 °C for T, E, K, N. Inputs under
//! the EMF floor are handled by the range policy like any other
//! out-of-range value.
//!
//! Inverse accuracy: within ±0.06 °C over each EMF range.

use super::ReferenceTables;
use crate::constants::ranges::{
    TYPE_E_EMF_MV, TYPE_E_TEMPERATURE_C, TYPE_J_EMF_MV, TYPE_J_TEMPERATURE_C,
    TYPE_K_EMF_MV, TYPE_K_TEMPERATURE_C, TYPE_N_EMF_MV, TYPE_N_TEMPERATURE_C,
    TYPE_T_EMF_MV, TYPE_T_TEMPERATURE_C,
};
use crate::domain::Quantity;
use crate::polynomial::{CoefficientSet, CoefficientTable, ExponentialTerm};

/// Type J: iron / copper-nickel
pub(super) static TYPE_J: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -210 °C to 760 °C
            CoefficientSet {
                lower: TYPE_J_TEMPERATURE_C.min,
                upper: 760.0,
                coefficients: &[
                    0.0,
                    5.0381187815E-02,
                    3.047583693E-05,
                    -8.568106572E-08,
                    1.3228195295E-10,
                    -1.7052958337E-13,
                    2.0948090697E-16,
                    -1.2538395336E-19,
                    1.5631725697E-23,
                ],
                correction: None,
            },
            // 760 °C to 1200 °C
            CoefficientSet {
                lower: 760.0,
                upper: TYPE_J_TEMPERATURE_C.max,
                coefficients: &[
                    2.9645625681E+02,
                    -1.4976127786E+00,
                    3.1787103924E-03,
                    -3.1847686701E-06,
                    1.5720819004E-09,
                    -3.0691369056E-13,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -8.095 mV to 0 mV
            CoefficientSet {
                lower: TYPE_J_EMF_MV.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    1.9528268E+01,
                    -1.2286185E+00,
                    -1.0752178E+00,
                    -5.9086933E-01,
                    -1.7256713E-01,
                    -2.8131513E-02,
                    -2.396337E-03,
                    -8.3823321E-05,
                ],
                correction: None,
            },
            // 0 mV to 42.919 mV
            CoefficientSet {
                lower: 0.0,
                upper: 42.919,
                coefficients: &[
                    0.0,
                    1.978425E+01,
                    -2.001204E-01,
                    1.036969E-02,
                    -2.549687E-04,
                    3.585153E-06,
                    -5.344285E-08,
                    5.09989E-10,
                ],
                correction: None,
            },
            // 42.919 mV to 69.553 mV
            CoefficientSet {
                lower: 42.919,
                upper: TYPE_J_EMF_MV.max,
                coefficients: &[
                    -3.11358187E+03,
                    3.00543684E+02,
                    -9.9477323E+00,
                    1.7027663E-01,
                    -1.43033468E-03,
                    4.73886084E-06,
                ],
                correction: None,
            },
        ],
    },
};

/// Type T: copper / copper-nickel
pub(super) static TYPE_T: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -270 °C to 0 °C
            CoefficientSet {
                lower: TYPE_T_TEMPERATURE_C.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    3.8748106364E-02,
                    4.4194434347E-05,
                    1.1844323105E-07,
                    2.0032973554E-08,
                    9.0138019559E-10,
                    2.2651156593E-11,
                    3.6071154205E-13,
                    3.8493939883E-15,
                    2.8213521925E-17,
                    1.4251594779E-19,
                    4.8768662286E-22,
                    1.079553927E-24,
                    1.3945027062E-27,
                    7.9795153927E-31,
                ],
                correction: None,
            },
            // 0 °C to 400 °C
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_T_TEMPERATURE_C.max,
                coefficients: &[
                    0.0,
                    3.8748106364E-02,
                    3.329222788E-05,
                    2.0618243404E-07,
                    -2.1882256846E-09,
                    1.0996880928E-11,
                    -3.0815758772E-14,
                    4.547913529E-17,
                    -2.7512901673E-20,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -5.603 mV to 0 mV
            CoefficientSet {
                lower: TYPE_T_EMF_MV.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    2.5949192E+01,
                    -2.1316967E-01,
                    7.9018692E-01,
                    4.2527777E-01,
                    1.3304473E-01,
                    2.0241446E-02,
                    1.2668171E-03,
                ],
                correction: None,
            },
            // 0 mV to 20.872 mV
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_T_EMF_MV.max,
                coefficients: &[
                    0.0,
                    2.5928E+01,
                    -7.602961E-01,
                    4.637791E-02,
                    -2.165394E-03,
                    6.048144E-05,
                    -7.293422E-07,
                ],
                correction: None,
            },
        ],
    },
};

/// Type E: nickel-chromium / copper-nickel
pub(super) static TYPE_E: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -270 °C to 0 °C
            CoefficientSet {
                lower: TYPE_E_TEMPERATURE_C.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    5.8665508708E-02,
                    4.5410977124E-05,
                    -7.7998048686E-07,
                    -2.5800160843E-08,
                    -5.9452583057E-10,
                    -9.3214058667E-12,
                    -1.0287605534E-13,
                    -8.0370123621E-16,
                    -4.3979497391E-18,
                    -1.6414776355E-20,
                    -3.9673619516E-23,
                    -5.5827328721E-26,
                    -3.4657842013E-29,
                ],
                correction: None,
            },
            // 0 °C to 1000 °C
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_E_TEMPERATURE_C.max,
                coefficients: &[
                    0.0,
                    5.866550871E-02,
                    4.5032275582E-05,
                    2.8908407212E-08,
                    -3.3056896652E-10,
                    6.502440327E-13,
                    -1.9197495504E-16,
                    -1.2536600497E-18,
                    2.1489217569E-21,
                    -1.4388041782E-24,
                    3.5960899481E-28,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -8.825 mV to 0 mV
            CoefficientSet {
                lower: TYPE_E_EMF_MV.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    1.6977288E+01,
                    -4.351497E-01,
                    -1.5859697E-01,
                    -9.2502871E-02,
                    -2.6084314E-02,
                    -4.1360199E-03,
                    -3.403403E-04,
                    -1.156489E-05,
                ],
                correction: None,
            },
            // 0 mV to 76.373 mV
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_E_EMF_MV.max,
                coefficients: &[
                    0.0,
                    1.7057035E+01,
                    -2.3301759E-01,
                    6.5435585E-03,
                    -7.3562749E-05,
                    -1.7896001E-06,
                    8.4036165E-08,
                    -1.3735879E-09,
                    1.0629823E-11,
                    -3.2447087E-14,
                ],
                correction: None,
            },
        ],
    },
};

/// Type K: nickel-chromium / nickel-aluminium
pub(super) static TYPE_K: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -270 °C to 0 °C
            CoefficientSet {
                lower: TYPE_K_TEMPERATURE_C.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    3.9450128025E-02,
                    2.3622373598E-05,
                    -3.2858906784E-07,
                    -4.9904828777E-09,
                    -6.7509059173E-11,
                    -5.7410327428E-13,
                    -3.1088872894E-15,
                    -1.0451609365E-17,
                    -1.9889266878E-20,
                    -1.6322697486E-23,
                ],
                correction: None,
            },
            // 0 °C to 1372 °C
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_K_TEMPERATURE_C.max,
                coefficients: &[
                    -1.7600413686E-02,
                    3.8921204975E-02,
                    1.8558770032E-05,
                    -9.9457592874E-08,
                    3.1840945719E-10,
                    -5.6072844889E-13,
                    5.6075059059E-16,
                    -3.2020720003E-19,
                    9.7151147152E-23,
                    -1.2104721275E-26,
                ],
                correction: Some(ExponentialTerm {
                    amplitude: 1.185976E-01,
                    rate: -1.183432E-04,
                    center: 1.269686E+02,
                }),
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -5.891 mV to 0 mV
            CoefficientSet {
                lower: TYPE_K_EMF_MV.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    2.5173462E+01,
                    -1.1662878E+00,
                    -1.0833638E+00,
                    -8.977354E-01,
                    -3.7342377E-01,
                    -8.6632643E-02,
                    -1.0450598E-02,
                    -5.1920577E-04,
                ],
                correction: None,
            },
            // 0 mV to 20.644 mV
            CoefficientSet {
                lower: 0.0,
                upper: 20.644,
                coefficients: &[
                    0.0,
                    2.508355E+01,
                    7.860106E-02,
                    -2.503131E-01,
                    8.31527E-02,
                    -1.228034E-02,
                    9.804036E-04,
                    -4.41303E-05,
                    1.057734E-06,
                    -1.052755E-08,
                ],
                correction: None,
            },
            // 20.644 mV to 54.886 mV
            CoefficientSet {
                lower: 20.644,
                upper: TYPE_K_EMF_MV.max,
                coefficients: &[
                    -1.318058E+02,
                    4.830222E+01,
                    -1.646031E+00,
                    5.464731E-02,
                    -9.650715E-04,
                    8.802193E-06,
                    -3.11081E-08,
                ],
                correction: None,
            },
        ],
    },
};

/// Type N: nickel-chromium-silicon / nickel-silicon
pub(super) static TYPE_N: ReferenceTables = ReferenceTables {
    forward: CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &[
            // -270 °C to 0 °C
            CoefficientSet {
                lower: TYPE_N_TEMPERATURE_C.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    2.6159105962E-02,
                    1.0957484228E-05,
                    -9.3841111554E-08,
                    -4.6412039759E-11,
                    -2.6303357716E-12,
                    -2.2653438003E-14,
                    -7.6089300791E-17,
                    -9.3419667835E-20,
                ],
                correction: None,
            },
            // 0 °C to 1300 °C
            CoefficientSet {
                lower: 0.0,
                upper: TYPE_N_TEMPERATURE_C.max,
                coefficients: &[
                    0.0,
                    2.5929394601E-02,
                    1.571014188E-05,
                    4.3825627237E-08,
                    -2.5261169794E-10,
                    6.4311819339E-13,
                    -1.0063471519E-15,
                    9.9745338992E-19,
                    -6.0863245607E-22,
                    2.0849229339E-25,
                    -3.0682196151E-29,
                ],
                correction: None,
            },
        ],
    },
    inverse: CoefficientTable {
        quantity: Quantity::Emf,
        sets: &[
            // -3.99 mV to 0 mV
            CoefficientSet {
                lower: TYPE_N_EMF_MV.min,
                upper: 0.0,
                coefficients: &[
                    0.0,
                    3.8436847E+01,
                    1.1010485E+00,
                    5.2229312E+00,
                    7.2060525E+00,
                    5.8488586E+00,
                    2.7754916E+00,
                    7.7075166E-01,
                    1.1582665E-01,
                    7.3138868E-03,
                ],
                correction: None,
            },
            // 0 mV to 20.613 mV
            CoefficientSet {
                lower: 0.0,
                upper: 20.613,
                coefficients: &[
                    0.0,
                    3.86896E+01,
                    -1.08267E+00,
                    4.70205E-02,
                    -2.12169E-06,
                    -1.17272E-04,
                    5.3928E-06,
                    -7.98156E-08,
                ],
                correction: None,
            },
            // 20.613 mV to 47.513 mV
            CoefficientSet {
                lower: 20.613,
                upper: TYPE_N_EMF_MV.max,
                coefficients: &[
                    1.972485E+01,
                    3.300943E+01,
                    -3.915159E-01,
                    9.855391E-03,
                    -1.274371E-04,
                    7.767022E-07,
                ],
                correction: None,
            },
        ],
    },
};
