//! Test utilities for working with curves
//!
//! # Macros
//!
//! ## [`crate::cubic!`]
//! DSL for building a [`crate::Cubic`] from its terms. Handy for tests
//! and demos:
//! ```rust
//! let twist = twisted_curves::cubic!(-1.0 x^3 + 1.0 x);
//! assert_eq!(twist.equation(), "-x^3 + x");
//! ```
//!
//! ## [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal.
//! `assert_eq!` equivalent for floats; uses a square-root-of-epsilon
//! tolerance so that expanded-then-evaluated polynomials compare clean
//! against their factored form.
//!
//! ## [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] over two slices of the same
//! length.

/// Macro to build a cubic from its terms.
///
/// - Terms can be listed in any order
/// - Same-power terms are summed
/// - Missing terms are 0
/// - Powers above 3 are out of scope and will not compile into range
///
/// The only major limitation is that it needs a space between the
/// coefficient and the variable: `2.0 x^3` is valid, `2.0x^3` is not.
///
/// # Example
/// ```
/// # use twisted_curves::cubic;
/// let f = cubic!(2.0 x^3 + 3.0 x^2 - 4.0 x + 5.0);
/// assert_eq!(f.equation(), "2x^3 + 3x^2 - 4x + 5");
/// ```
#[macro_export]
macro_rules! cubic {
    ($( $(+)? $c:literal $(x $( ^ $p:literal )?)? )+) => {{
        let mut coefficients = [0.0_f64; 4];
        // A bare coefficient is power 0, `x` alone is power 1
        $( coefficients[ 0 $(+ 1 $(* $p as usize)?)? ] += $c as f64; )+
        $crate::Cubic::new(
            coefficients[3],
            coefficients[2],
            coefficients[1],
            coefficients[0],
        )
    }};
}

/// Asserts that two floating-point values are approximately equal.
///
/// Uses `T::epsilon().sqrt()` as the tolerance, which absorbs the
/// roundoff of expanding a factor product and re-evaluating it.
///
/// # Parameters
/// - `$a`: First value.
/// - `$b`: Second value.
/// - `$msg`: *(optional)* custom failure message, supports formatting
///   arguments.
///
/// # Panics
/// Panics if `|a - b|` exceeds the tolerance.
///
/// # Example
/// ```
/// # use twisted_curves::assert_close;
/// assert_close!(1.0 + 1e-16, 1.0);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr $(, $msg:literal $(, $($args:tt),*)?)?) => {{
        #[allow(clippy::float_cmp)]
        {
            fn tolerance<T: $crate::value::Value>(_: T) -> T {
                T::epsilon().sqrt()
            }

            #[allow(unused_mut, unused_assignments)]
            let mut msg = "Values not close".to_string();
            $( msg = format!($msg, $($($args),*)?); )?

            let (a, b) = ($a, $b);
            assert!(
                a == b || $crate::num_traits::Float::abs(a - b) <= tolerance(a),
                "{msg}: {a} != {b}"
            );
        }
    }};
}

/// Asserts that two slices of floating-point values are approximately
/// equal element-wise.
///
/// Element-wise [`crate::assert_close`].
///
/// # Panics
/// - If the lengths differ.
/// - If any pair of elements differ by more than the tolerance.
///
/// # Example
/// ```
/// # use twisted_curves::assert_all_close;
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![1.0 + 1e-16, 2.0, 3.0];
/// assert_all_close!(a, b);
/// ```
#[macro_export]
macro_rules! assert_all_close {
    ($src:expr, $dst:expr $(, $msg:literal $(, $($args:tt),*)?)?) => {{
        #[allow(unused_mut, unused_assignments)]
        let mut msg = format!("{} elements", $src.len());
        $( msg = format!($msg, $($($args),*)?); )?

        assert_eq!($src.len(), $dst.len(), "{msg} - length mismatch");

        for (i, (s, d)) in $src.iter().zip($dst.iter()).enumerate() {
            $crate::assert_close!(*s, *d, "{msg} - src[{i}]");
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cubic_macro() {
        let f = cubic!(2.0 x^3 + 3.0 x^2 - 4.0 x + 5.0);
        assert_eq!(f.equation(), "2x^3 + 3x^2 - 4x + 5");

        // Sparse and out-of-order terms
        let f = cubic!(1.0 x - 1.0 x^3);
        assert_eq!(f.equation(), "-x^3 + x");

        // Same-power terms sum
        let f = cubic!(1.0 x^2 + 2.0 x^2);
        assert_eq!(f.equation(), "3x^2");
    }

    #[test]
    fn test_assert_close_macro() {
        assert_close!(1.0 + 1e-16, 1.0, "Values should be close");
        assert_close!(0.1 + 0.2, 0.3);
    }

    #[test]
    fn test_assert_all_close_macro() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0 + 1e-16, 2.0, 3.0];
        assert_all_close!(a, b, "Vectors must match");
    }
}
