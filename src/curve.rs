//! Curve inputs: a set of zeros, or cubic coefficients
//!
//! The widget layer feeds the engine in one of two modes, moving either
//! the zeros or the coefficients, and [`Curve`] is that mode switch.
//! Whichever mode is active feeds both the sampler and the formatter,
//! so the displayed equation and the plotted curve always agree.
//!
//! The UI-level constants (slider bounds, plotting domain, sample
//! density) live here so the plotting layer and the demos agree on
//! them.

use std::ops::RangeInclusive;

use crate::{
    display::{self, Term},
    error::Result,
    roots::{Marker, RootSet},
    sample::{self, Evaluate, SamplePoints},
    value::Value,
};

/// Slider bounds for zeros and coefficients.
pub const ZERO_BOUNDS: RangeInclusive<f64> = -5.0..=5.0;

/// Plotting domain for the main curve.
pub const CURVE_DOMAIN: RangeInclusive<f64> = -6.0..=6.0;

/// Sample density for the curve plots.
pub const CURVE_SAMPLES: usize = 400;

/// Plotting domain for the cubic twist comparison.
pub const TWIST_DOMAIN: RangeInclusive<f64> = -4.0..=4.0;

/// A cubic in coefficient form: `a·x³ + b·x² + c·x + d`.
///
/// There are no invariants on the values; the all-zero cubic is the
/// degenerate zero function and displays as `"0"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic<T: Value = f64> {
    /// Coefficient of `x³`.
    pub a: T,

    /// Coefficient of `x²`.
    pub b: T,

    /// Coefficient of `x`.
    pub c: T,

    /// Constant term.
    pub d: T,
}

impl<T: Value> Cubic<T> {
    /// Creates a cubic from its four coefficients, highest power first.
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the display terms, highest power first.
    fn terms(&self) -> [Term<T>; 4] {
        [
            Term::new(self.a, 3),
            Term::new(self.b, 2),
            Term::new(self.c, 1),
            Term::new(self.d, 0),
        ]
    }

    /// Returns the expanded-form display string.
    ///
    /// # Example
    /// ```
    /// # use twisted_curves::Cubic;
    /// assert_eq!(Cubic::new(-1.0, 0.0, 1.0, 0.0).equation(), "-x^3 + x");
    /// assert_eq!(Cubic::new(0.0, 0.0, 0.0, 0.0).equation(), "0");
    /// ```
    #[must_use]
    pub fn equation(&self) -> String {
        display::format_terms(&self.terms())
    }

    /// Returns a copy with `t` added to the linear coefficient.
    ///
    /// This is the "twist": a small linear term bends the middle of an
    /// S-curve without touching its tails, turning `-x^3` into
    /// `-x^3 + x`.
    #[must_use]
    pub fn twisted(&self, t: T) -> Self {
        Self { c: self.c + t, ..*self }
    }
}

impl<T: Value> Evaluate<T> for Cubic<T> {
    /// Horner evaluation of `a·x³ + b·x² + c·x + d`.
    fn y(&self, x: T) -> T {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }
}

/// The input-mode switch: which producer is feeding the engine.
///
/// Both modes sample and format through the same paths; only roots mode
/// has marker annotations.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve<T: Value = f64> {
    /// The user is moving the zeros of the polynomial.
    Zeros(RootSet<T>),

    /// The user is moving the coefficients of a cubic.
    Cubic(Cubic<T>),
}

impl<T: Value> Curve<T> {
    /// Returns the display string for the active mode.
    ///
    /// Roots mode follows the degree policy of [`RootSet::equation`];
    /// coefficient mode always renders expanded form.
    #[must_use]
    pub fn equation(&self) -> String {
        match self {
            Curve::Zeros(zeros) => zeros.equation(),
            Curve::Cubic(cubic) => cubic.equation(),
        }
    }

    /// Returns the `(root, 0)` marker points in roots mode, `None` in
    /// coefficient mode.
    #[must_use]
    pub fn markers(&self) -> Option<Vec<Marker<T>>> {
        match self {
            Curve::Zeros(zeros) => Some(zeros.markers()),
            Curve::Cubic(_) => None,
        }
    }

    /// Samples the active curve over `domain`.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::EmptySample`] if `count` is zero.
    pub fn sample(&self, domain: RangeInclusive<T>, count: usize) -> Result<SamplePoints<T>> {
        sample::sample(self, domain, count)
    }
}

impl<T: Value> Evaluate<T> for Curve<T> {
    fn y(&self, x: T) -> T {
        match self {
            Curve::Zeros(zeros) => zeros.y(x),
            Curve::Cubic(cubic) => cubic.y(x),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{assert_close, cubic, roots::DEFAULT_ZEROS};

    #[test]
    fn test_cubic_evaluation() {
        // 2x^3 - 3x^2 + 4 at x = 2: 16 - 12 + 4 = 8
        let cubic = Cubic::new(2.0, -3.0, 0.0, 4.0);
        assert_eq!(cubic.y(0.0), 4.0);
        assert_eq!(cubic.y(2.0), 8.0);
        assert_eq!(cubic.y(-1.0), -1.0);
    }

    #[test]
    fn test_cubic_equation_strings() {
        assert_eq!(Cubic::new(1.0, 0.0, 0.0, 0.0).equation(), "x^3");
        assert_eq!(Cubic::new(0.0, 0.0, 0.0, 0.0).equation(), "0");
        assert_eq!(Cubic::new(-1.0, 0.0, 1.0, 0.0).equation(), "-x^3 + x");
        assert_eq!(
            Cubic::new(2.0, -3.0, 0.5, -4.0).equation(),
            "2x^3 - 3x^2 + 0.5x - 4"
        );
    }

    #[test]
    fn test_twist_adds_a_linear_term() {
        let base = cubic!(-1.0 x^3);
        let twisted = base.twisted(1.0);
        assert_eq!(base.equation(), "-x^3");
        assert_eq!(twisted.equation(), "-x^3 + x");
        // The twist moves the middle, not the tails
        assert_close!(twisted.y(0.0), base.y(0.0));
        assert_eq!(twisted.y(1.0), 0.0);
        assert_eq!(twisted.y(-1.0), 0.0);
    }

    #[test]
    fn test_curve_mode_equation() {
        let zeros = Curve::Zeros(RootSet::new(DEFAULT_ZEROS).unwrap());
        assert_eq!(zeros.equation(), "(x + 2)(x - 1)(x - 3)(x - 4)");

        let quadratic = Curve::Zeros(RootSet::new([-2.0, 3.0]).unwrap());
        assert_eq!(quadratic.equation(), "x^2 - x - 6");

        let cubic = Curve::Cubic(cubic!(-1.0 x^3 + 1.0 x));
        assert_eq!(cubic.equation(), "-x^3 + x");
    }

    #[test]
    fn test_curve_markers_by_mode() {
        let zeros = Curve::Zeros(RootSet::new([-2.0, 3.0]).unwrap());
        let markers = zeros.markers().unwrap();
        assert_eq!(markers.len(), 2);

        let cubic = Curve::Cubic(Cubic::new(1.0, 0.0, 0.0, 0.0));
        assert!(cubic.markers().is_none());
    }

    #[test]
    fn test_curve_sampling_matches_mode() {
        let zeros = RootSet::new([-2.0, 3.0]).unwrap();
        let curve = Curve::Zeros(zeros.clone());
        let points = curve.sample(CURVE_DOMAIN, CURVE_SAMPLES).unwrap();
        assert_eq!(points.len(), CURVE_SAMPLES);
        for (x, y) in points.points() {
            assert_close!(y, zeros.y(x));
        }
    }
}
