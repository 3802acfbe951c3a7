//! Error types for the curve engine
//!
//! Every value the engine accepts is total over the reals, so the only
//! failures are structural: a root set of the wrong size, or a sampling
//! request for zero points. Both are conditions the caller (the widget
//! layer) is expected to never present; the engine rejects rather than
//! guesses.

/// Errors that can occur while building or sampling a curve.
///
/// The degenerate all-zero polynomial is *not* an error: it displays as
/// `"0"` and samples to all-zero y-values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A root set must hold exactly 2, 3, or 4 zeros.
    ///
    /// The engine never truncates or pads; an out-of-range set is
    /// surfaced immediately.
    #[error("A curve needs 2 to 4 zeros, got {0}")]
    InvalidRootCount(usize),

    /// A curve cannot be sampled over zero points.
    #[error("Cannot sample a curve over zero points")]
    EmptySample,
}

/// Result type for the curve engine
pub type Result<T> = std::result::Result<T, Error>;
