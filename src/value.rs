//! Numeric types for curve evaluation and formatting.
//!
//! This module defines the [`Value`] trait, which abstracts the numeric
//! types the engine works with. Any float that can be formatted for
//! display qualifies; in practice that means `f64` (the default
//! everywhere) and `f32`.

/// Numeric type for curves
pub trait Value: num_traits::Float + std::fmt::Debug + std::fmt::Display + 'static {
    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        num_traits::cast(n).unwrap_or_else(Self::infinity)
    }

    /// Check if the value is within floating-point noise of zero
    fn is_near_zero(&self) -> bool {
        self.abs() <= Self::epsilon()
    }
}

impl<T> Value for T where T: num_traits::Float + std::fmt::Debug + std::fmt::Display + 'static {}
