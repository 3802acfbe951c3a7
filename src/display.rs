//! Formatting polynomials for display
//!
//! This module converts a polynomial, given as a sequence of
//! coefficient/power terms or as a set of roots, into the algebraic
//! string shown next to the curve.
//!
//! # Key Concepts
//! - **[`Term`]**: a single `(coefficient, power)` pair.
//! - **[`Sign`]**: tracks whether a term joins with `+` or `-`.
//! - **[`format_terms`]**: assembles a full expanded-form expression.
//! - **[`format_factored`]**: renders a product of `(x - root)` factors.
//!
//! # Formatting rules
//! One rule applies uniformly to every term, first or subsequent:
//! 1. A term with coefficient exactly `0` is skipped.
//! 2. The first emitted term renders its magnitude plainly; a coefficient
//!    of `1` or `-1` at power ≥ 1 elides the numeral (`x^3`, `-x^3`).
//! 3. Every later term is joined with `" + "` or `" - "` by sign, with
//!    the same elision rule applied to its absolute value.
//! 4. Power ≥ 2 renders `x^<power>`, power 1 renders `x`, power 0 renders
//!    the bare numeral.
//! 5. If every term is skipped, the result is the literal `"0"`.
//!
//! Numerals use the shortest-round-trip form: integers print without a
//! trailing `.0`, non-integers with minimal decimal digits.
#![allow(clippy::cast_possible_truncation, clippy::float_cmp)]

use crate::value::Value;

/// A single polynomial term used during formatting.
///
/// Terms are assembled into a full expression by [`format_terms`]; a term
/// with coefficient `0` is omitted from the output entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term<T> {
    /// Signed coefficient of the term.
    pub coefficient: T,

    /// Non-negative power of `x`.
    pub power: u32,
}

impl<T> Term<T> {
    /// Creates a new term from a coefficient and a power of `x`.
    pub const fn new(coefficient: T, power: u32) -> Self {
        Self { coefficient, power }
    }
}

/// Represents the sign of a polynomial term.
///
/// Used when formatting to determine how a term connects to the rest of
/// the expression (`" + "` or `" - "` after the first term, a bare
/// leading `-` before it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}

impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// # Example
    /// ```
    /// # use twisted_curves::display::Sign;
    /// assert_eq!(Sign::of(3.0), Sign::Positive);
    /// assert_eq!(Sign::of(-2.0), Sign::Negative);
    /// ```
    pub fn of<T: Value>(coefficient: T) -> Self {
        if coefficient < T::zero() {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the character representation of the sign.
    #[must_use]
    pub fn char(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// Formats a number in shortest-round-trip ("general") form.
///
/// Integers print without a trailing `.0`; non-integers print with the
/// minimal decimal digits that round-trip.
///
/// # Example
/// ```
/// # use twisted_curves::display::format_number;
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(-2.5), "-2.5");
/// ```
pub fn format_number<T: Value>(n: T) -> String {
    format!("{n}")
}

/// Renders the body of a term from its magnitude, sign already handled.
fn term_body<T: Value>(magnitude: T, power: u32) -> String {
    let unit = (magnitude - T::one()).is_near_zero();
    match power {
        0 => format_number(magnitude),
        1 if unit => "x".to_string(),
        1 => format!("{}x", format_number(magnitude)),
        p if unit => format!("x^{p}"),
        p => format!("{}x^{p}", format_number(magnitude)),
    }
}

/// Formats an ordered term sequence into a display string.
///
/// Terms are emitted in the order given; callers wanting the
/// conventional expanded form pass them highest power first (see
/// [`terms_from_coefficients`]).
///
/// # Behavior
/// - The result never begins with a spurious `+`; a negative first term
///   gets a bare leading `-`.
/// - Subsequent terms are joined with `" + "` or `" - "` by sign.
/// - If every coefficient is zero, the result is `"0"`.
///
/// # Example
/// ```
/// # use twisted_curves::display::{format_terms, Term};
/// let terms = [Term::new(1.0, 2), Term::new(-1.0, 1), Term::new(-6.0, 0)];
/// assert_eq!(format_terms(&terms), "x^2 - x - 6");
/// ```
pub fn format_terms<T: Value>(terms: &[Term<T>]) -> String {
    let mut out = String::new();
    for term in terms {
        if term.coefficient == T::zero() {
            continue;
        }

        let sign = Sign::of(term.coefficient);
        let body = term_body(term.coefficient.abs(), term.power);

        if out.is_empty() {
            if sign == Sign::Negative {
                out.push(sign.char());
            }
        } else {
            out.push(' ');
            out.push(sign.char());
            out.push(' ');
        }
        out.push_str(&body);
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Builds highest-power-first display terms from constant-first
/// coefficients (`coefficients[i]` is the coefficient of `x^i`).
#[must_use]
pub fn terms_from_coefficients<T: Value>(coefficients: &[T]) -> Vec<Term<T>> {
    coefficients
        .iter()
        .enumerate()
        .rev()
        .map(|(power, &coefficient)| Term::new(coefficient, power as u32))
        .collect()
}

/// Renders a root set as a product of literal factors.
///
/// Each root `z` becomes `"x"` if zero, `"(x - z)"` if positive, or
/// `"(x + |z|)"` if negative; factors concatenate with no separator.
/// Repeated roots simply repeat their factor.
///
/// # Example
/// ```
/// # use twisted_curves::display::format_factored;
/// let factors = format_factored(&[-2.0, 1.0, 3.0, 4.0]);
/// assert_eq!(factors, "(x + 2)(x - 1)(x - 3)(x - 4)");
/// ```
pub fn format_factored<T: Value>(roots: &[T]) -> String {
    let mut out = String::new();
    for &z in roots {
        if z == T::zero() {
            out.push('x');
        } else if z > T::zero() {
            out.push_str(&format!("(x - {})", format_number(z)));
        } else {
            out.push_str(&format!("(x + {})", format_number(z.abs())));
        }
    }
    out
}
