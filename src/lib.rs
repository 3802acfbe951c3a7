//! # Twisted Curves
//! ## Move the zeros - watch the polynomial change
//!
//! This crate is the engine behind an interactive polynomial playground:
//! the user drags the zeros (or the coefficients) of a low-degree
//! polynomial, and the curve, its formatted equation, and its x-axis
//! markers all update together.
//!
//! The engine itself is a set of pure functions. It owns no state, keeps
//! no cache, and leaves the sliders and the chart widget to its caller;
//! every interaction is one full recomputation from the current inputs.
//!
//! # Core Concepts
//! - A [`RootSet`] is an ordered set of 2 to 4 zeros.
//!     - It expands itself into monic coefficients via the elementary
//!       symmetric functions.
//!     - Sets of 2 or 3 zeros display in expanded form (`x^2 - x - 6`);
//!       sets of 4 display in factored form
//!       (`(x + 2)(x - 1)(x - 3)(x - 4)`).
//!     - Its [`RootSet::markers`] are the labelled `(root, 0)` points a
//!       chart draws on the x-axis.
//! - A [`Cubic`] is a coefficient-form polynomial `a·x³ + b·x² + c·x + d`.
//!     - [`Cubic::twisted`] adds a linear term, bending the middle of an
//!       S-curve without touching its tails.
//! - A [`Curve`] is the input-mode switch between the two.
//! - [`sample()`] evaluates any of them over a domain into the parallel
//!   x/y arrays a line chart consumes.
//! - The [`display`] module is the formatting engine: sign-aware term
//!   joining, coefficient-of-one elision, and shortest-round-trip
//!   numerals.
//!
//! ```rust
//! use twisted_curves::{sample, Curve, RootSet};
//!
//! let zeros = RootSet::new([-2.0, 1.0, 3.0, 4.0])?;
//! assert_eq!(zeros.equation(), "(x + 2)(x - 1)(x - 3)(x - 4)");
//!
//! let curve = Curve::Zeros(zeros);
//! let points = curve.sample(-6.0..=6.0, 400)?;
//! assert_eq!(points.len(), 400);
//! # Ok::<(), twisted_curves::error::Error>(())
//! ```
//!
//! # Plotting
//! With the `plotting` feature enabled, the [`plot`] module renders a
//! curve (markers included) to an SVG file, and the [`plot!`] macro does
//! the whole pipeline in one line. The demos render the two headline
//! figures: the moving-zeros graph and the cubic twist comparison.
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod test;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plot;

pub mod curve;
pub mod display;
pub mod error;
pub mod roots;
pub mod sample;
pub mod value;

pub use curve::{Cubic, Curve};
pub use roots::{Marker, RootSet};
pub use sample::{sample, Evaluate, SamplePoints};

pub use num_traits;
