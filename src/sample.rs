//! Numeric sampling of curves over a plotting domain
//!
//! The chart layer consumes parallel `x`/`y` arrays; [`sample`] produces
//! them by evaluating anything implementing [`Evaluate`] over evenly
//! spaced points. Sampling is pure: the result is recomputed on every
//! call and nothing is cached.

use std::ops::RangeInclusive;

use crate::{
    error::{Error, Result},
    value::Value,
};

/// A curve that can be evaluated at a point.
///
/// This is the seam between the numeric producers ([`crate::RootSet`],
/// [`crate::Cubic`], [`crate::Curve`]) and the sampler. Closures
/// implement it too, so ad hoc functions can be sampled directly:
///
/// ```
/// # use twisted_curves::sample;
/// let points = sample(&|x: f64| -x * x * x, -4.0..=4.0, 100).unwrap();
/// assert_eq!(points.len(), 100);
/// ```
pub trait Evaluate<T: Value> {
    /// Evaluates the curve at `x`.
    fn y(&self, x: T) -> T;
}

impl<T: Value, F: Fn(T) -> T> Evaluate<T> for F {
    fn y(&self, x: T) -> T {
        self(x)
    }
}

/// Parallel, equal-length `x`/`y` sequences over a sampling domain.
///
/// The x-values are strictly ascending and include both domain
/// endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoints<T: Value = f64> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Value> SamplePoints<T> {
    /// Returns the x-values, strictly ascending.
    #[must_use]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the y-values, parallel to [`SamplePoints::xs`].
    #[must_use]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if there are no sample points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterates over the samples as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Evaluates `f` over `count` evenly spaced points in `domain`.
///
/// The first sample lands exactly on the domain start and the last
/// exactly on the domain end; x-values are strictly ascending with
/// exactly `count` elements. The domain and count are fixed UI-level
/// constants ([`crate::curve::CURVE_DOMAIN`],
/// [`crate::curve::CURVE_SAMPLES`]); the sampler only honors them.
///
/// # Errors
/// Returns [`Error::EmptySample`] if `count` is zero.
///
/// # Example
/// ```
/// # use twisted_curves::{sample, RootSet};
/// let zeros = RootSet::new([-2.0, 1.0, 3.0, 4.0]).unwrap();
/// let points = sample(&zeros, -6.0..=6.0, 400).unwrap();
/// assert_eq!(points.len(), 400);
/// assert_eq!(points.xs()[0], -6.0);
/// ```
pub fn sample<T, F>(f: &F, domain: RangeInclusive<T>, count: usize) -> Result<SamplePoints<T>>
where
    T: Value,
    F: Evaluate<T> + ?Sized,
{
    if count == 0 {
        return Err(Error::EmptySample);
    }

    let (start, end) = (*domain.start(), *domain.end());
    let mut xs = Vec::with_capacity(count);
    if count == 1 {
        xs.push(start);
    } else {
        let step = (end - start) / T::from_positive_int(count - 1);
        for i in 0..count - 1 {
            xs.push(start + step * T::from_positive_int(i));
        }
        // Land exactly on the endpoint
        xs.push(end);
    }

    let ys = xs.iter().map(|&x| f.y(x)).collect();
    Ok(SamplePoints { xs, ys })
}
