//! Root sets and symmetric-function expansion
//!
//! A [`RootSet`] holds the 2 to 4 zeros the user is moving around. It can
//! expand itself into monic polynomial coefficients via the elementary
//! symmetric functions, evaluate the factor product directly for
//! plotting, and produce the labelled `(root, 0)` marker points the chart
//! layer draws on the x-axis.
//!
//! # Display policy
//! Sets of 2 or 3 zeros display in expanded form (`x^2 - x - 6`); sets of
//! 4 display in factored form (`(x + 2)(x - 1)(x - 3)(x - 4)`). Expanded
//! coefficients are still available for all sizes through
//! [`RootSet::expand`]; the split only governs [`RootSet::equation`].

use crate::{
    display,
    error::{Error, Result},
    sample::Evaluate,
    value::Value,
};

/// Fewest zeros a curve may have.
pub const MIN_ROOTS: usize = 2;

/// Most zeros a curve may have.
pub const MAX_ROOTS: usize = 4;

/// The zeros presented to the user before any slider is touched.
pub const DEFAULT_ZEROS: [f64; 4] = [-2.0, 1.0, 3.0, 4.0];

/// An ordered set of 2, 3, or 4 real zeros.
///
/// Duplicates are permitted and represent repeated roots. Order fixes
/// the order of factors and marker labels but does not affect the curve
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSet<T: Value = f64> {
    roots: Vec<T>,
}

impl<T: Value> RootSet<T> {
    /// Creates a root set from 2 to 4 zeros.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRootCount`] if the input holds fewer than
    /// 2 or more than 4 values. The set is never truncated or padded.
    ///
    /// # Example
    /// ```
    /// # use twisted_curves::RootSet;
    /// let zeros = RootSet::new([-2.0, 3.0]).unwrap();
    /// assert_eq!(zeros.equation(), "x^2 - x - 6");
    /// ```
    pub fn new(roots: impl Into<Vec<T>>) -> Result<Self> {
        let roots = roots.into();
        if !(MIN_ROOTS..=MAX_ROOTS).contains(&roots.len()) {
            return Err(Error::InvalidRootCount(roots.len()));
        }
        Ok(Self { roots })
    }

    /// Returns the zeros in display order.
    #[must_use]
    pub fn roots(&self) -> &[T] {
        &self.roots
    }

    /// Returns the degree of the polynomial, i.e. the number of factors.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.roots.len()
    }

    /// Expands the factor product into monic coefficients, constant term
    /// first (`coefficients[i]` is the coefficient of `x^i`).
    ///
    /// Uses the elementary symmetric functions of the roots: the
    /// coefficient of `x^(n-k)` is `(-1)^k e_k`. Repeated roots need no
    /// special casing.
    ///
    /// # Example
    /// ```
    /// # use twisted_curves::RootSet;
    /// let zeros = RootSet::new([-2.0, 3.0]).unwrap();
    /// assert_eq!(zeros.expand(), vec![-6.0, -1.0, 1.0]); // x^2 - x - 6
    /// ```
    #[expect(clippy::missing_panics_doc, reason = "Root count is validated at construction")]
    #[must_use]
    pub fn expand(&self) -> Vec<T> {
        match self.roots.as_slice() {
            &[a, b] => vec![a * b, -(a + b), T::one()],
            &[a, b, c] => vec![
                -(a * b * c),
                a * b + a * c + b * c,
                -(a + b + c),
                T::one(),
            ],
            &[a, b, c, d] => {
                let e1 = a + b + c + d;
                let e2 = a * b + a * c + a * d + b * c + b * d + c * d;
                let e3 = a * b * c + a * b * d + a * c * d + b * c * d;
                let e4 = a * b * c * d;
                vec![e4, -e3, e2, -e1, T::one()]
            }
            _ => unreachable!("root count is validated at construction"),
        }
    }

    /// Returns the display string for this root set.
    ///
    /// Sets of 2 or 3 zeros render in expanded form; sets of 4 render in
    /// factored form. This split is the documented default contract.
    #[must_use]
    pub fn equation(&self) -> String {
        if self.roots.len() == MAX_ROOTS {
            display::format_factored(&self.roots)
        } else {
            display::format_terms(&display::terms_from_coefficients(&self.expand()))
        }
    }

    /// Returns the labelled `(root, 0)` marker points for the chart layer.
    ///
    /// Labels read `"x = <root>"` with one-decimal rounding. This is a
    /// distinct convention from the shortest-round-trip numerals used in
    /// [`RootSet::equation`], and is preserved as such.
    #[must_use]
    pub fn markers(&self) -> Vec<Marker<T>> {
        self.roots.iter().map(|&root| Marker::new(root)).collect()
    }
}

impl<T: Value> Evaluate<T> for RootSet<T> {
    /// Evaluates `f(x) = Π(x - root)` as a direct product.
    ///
    /// Plotting never goes through the expanded coefficients; the direct
    /// product avoids the roundoff of expanding and re-evaluating.
    fn y(&self, x: T) -> T {
        self.roots.iter().fold(T::one(), |acc, &root| acc * (x - root))
    }
}

/// A labelled annotation point at a zero of the curve.
///
/// Sits on the x-axis at `(root, 0)`; the chart layer draws it as a
/// marker with its label above.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker<T: Value = f64> {
    /// The zero of the curve.
    pub x: T,

    /// Always on the axis.
    pub y: T,

    /// `"x = <root>"`, one-decimal rounding.
    pub label: String,
}

impl<T: Value> Marker<T> {
    fn new(root: T) -> Self {
        Self {
            x: root,
            y: T::zero(),
            label: format!("x = {root:.1}"),
        }
    }
}
