//! Piecewise Reference Functions
//!
//! ## Background
//!
//! The standard defines every reference function as a power series over a
//! bounded sub-range, optionally with one exponential term (type K above
//! 0 °C):
//!
//! ```text
//! f(x) = Σ c_i · x^i  +  a0 · exp(a1 · (x - a2)²)
//! ```
//!
//! Larger ranges are split into several sub-ranges with their own
//! coefficients and degree. A [`CoefficientSet`] is one such sub-range, a
//! [`CoefficientTable`] the ordered sets of one (type, direction) pair.
//!
//! ## Evaluation
//!
//! Polynomials are evaluated with Horner's scheme:
//!
//! ```text
//! c0 + x(c1 + x(c2 + ... + x·cn))
//! ```
//!
//! `n` multiply-adds, no powers, and better rounding behaviour than summing
//! `c_i · x^i` for the 14th-degree type T and type E fits.
//!
//! ## Segment Selection
//!
//! Breakpoints belong to the upper set:
//!
//! ```text
//!   set 0           set 1           set 2
//! [lower0, b1)    [b1, b2)        [b2, upper2]
//! ```
//!
//! Inputs below the first set select the first set, inputs above the last
//! set select the last set. Whether such an input may be evaluated at all is
//! decided earlier by the [`RangePolicy`](crate::RangePolicy).

use crate::domain::{DomainRange, Quantity};

/// Evaluate `Σ coefficients[i] · x^i`
#[inline]
pub fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Gaussian correction term `amplitude · exp(rate · (x - center)²)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialTerm {
    /// Peak height (a0)
    pub amplitude: f64,
    /// Exponent factor, negative for a decaying bump (a1)
    pub rate: f64,
    /// Abscissa of the peak (a2)
    pub center: f64,
}

impl ExponentialTerm {
    /// Value of the term at `x`
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let offset = x - self.center;
        self.amplitude * libm::exp(self.rate * offset * offset)
    }
}

/// One polynomial segment of a reference function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    /// Lower breakpoint (inclusive)
    pub lower: f64,
    /// Upper breakpoint (exclusive, except for the last set of a table)
    pub upper: f64,
    /// Power series coefficients, constant term first
    pub coefficients: &'static [f64],
    /// Optional exponential correction added to the power series
    pub correction: Option<ExponentialTerm>,
}

impl CoefficientSet {
    /// Polynomial degree
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Value of the reference function at `x`, no range checks
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let series = horner(self.coefficients, x);
        match self.correction {
            Some(term) => series + term.evaluate(x),
            None => series,
        }
    }
}

/// Ordered coefficient sets partitioning one documented range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientTable {
    /// Quantity the table takes as input
    pub quantity: Quantity,
    /// Sets in ascending breakpoint order, without gaps
    pub sets: &'static [CoefficientSet],
}

impl CoefficientTable {
    /// Range spanned by all sets
    pub fn range(&self) -> DomainRange {
        match (self.sets.first(), self.sets.last()) {
            (Some(first), Some(last)) => DomainRange::new(first.lower, last.upper),
            _ => DomainRange::new(f64::NAN, f64::NAN),
        }
    }

    /// Set responsible for `x`, extending the outermost sets past the range
    pub fn select(&self, x: f64) -> Option<&'static CoefficientSet> {
        let sets = self.sets;
        sets.iter().find(|set| x < set.upper).or(sets.last())
    }

    /// Evaluate the reference function at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.select(x).map_or(f64::NAN, |set| set.evaluate(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SETS: [CoefficientSet; 2] = [
        CoefficientSet {
            lower: -1.0,
            upper: 0.0,
            coefficients: &[0.0, 1.0],
            correction: None,
        },
        CoefficientSet {
            lower: 0.0,
            upper: 2.0,
            coefficients: &[0.0, 1.0, 1.0],
            correction: None,
        },
    ];

    static TABLE: CoefficientTable = CoefficientTable {
        quantity: Quantity::Temperature,
        sets: &SETS,
    };

    #[test]
    fn horner_matches_power_sum() {
        let c = [1.5, -2.0, 0.25, 3.0];
        let x = 1.7_f64;
        let direct = c[0] + c[1] * x + c[2] * x * x + c[3] * x * x * x;
        assert!((horner(&c, x) - direct).abs() < 1e-12);
        assert_eq!(horner(&[], x), 0.0);
    }

    #[test]
    fn breakpoint_belongs_to_upper_set() {
        let set = TABLE.select(0.0).unwrap();
        assert_eq!(set.degree(), 2);
        assert_eq!(TABLE.select(-0.5).unwrap().degree(), 1);
    }

    #[test]
    fn outer_sets_extend_past_range() {
        assert_eq!(TABLE.select(-10.0).unwrap().degree(), 1);
        assert_eq!(TABLE.select(10.0).unwrap().degree(), 2);
        assert_eq!(TABLE.evaluate(3.0), 12.0);
    }

    #[test]
    fn range_spans_all_sets() {
        assert_eq!(TABLE.range(), DomainRange::new(-1.0, 2.0));
    }

    #[test]
    fn empty_table_yields_nan() {
        let empty = CoefficientTable { quantity: Quantity::Emf, sets: &[] };
        assert!(empty.select(1.0).is_none());
        assert!(empty.evaluate(1.0).is_nan());
        assert!(empty.range().min.is_nan());
    }

    #[test]
    fn correction_term_peaks_at_center() {
        let term = ExponentialTerm { amplitude: 0.5, rate: -0.01, center: 100.0 };
        assert_eq!(term.evaluate(100.0), 0.5);
        assert!(term.evaluate(150.0) < 0.5);

        let set = CoefficientSet {
            lower: 0.0,
            upper: 200.0,
            coefficients: &[1.0],
            correction: Some(term),
        };
        assert_eq!(set.evaluate(100.0), 1.5);
    }
}
