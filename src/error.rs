//! Error type shared by every fallible rational operation.
//!
//! A [`RatioError`] plays the role of the "invalid value": any operation that
//! cannot produce a canonical [`Ratio`](crate::Ratio) returns one instead, and
//! callers propagate it with `?`.

use thiserror::Error;

/// Reasons a rational operation produced no value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatioError {
    /// A denominator of zero was supplied or produced.
    #[error("denominator is zero")]
    ZeroDenominator,

    /// A negative denominator was supplied under
    /// [`DenominatorPolicy::Positive`](crate::DenominatorPolicy::Positive).
    #[error("denominator must be strictly positive")]
    NonPositiveDenominator,

    /// An integer division by zero inside the backend.
    #[error("division by zero")]
    DivisionByZero,

    /// A fixed-width backend could not hold an intermediate result.
    #[error("integer overflow in {op}")]
    Overflow {
        /// Name of the integer operation that overflowed.
        op: &'static str,
    },

    /// Text could not be parsed as a rational number.
    #[error("invalid rational literal: {reason}")]
    Parse {
        /// Short description of what was wrong with the input.
        reason: &'static str,
    },

    /// The requested radix is outside `2..=36`.
    #[error("unsupported radix {0}")]
    InvalidRadix(u32),

    /// A caller-supplied buffer cannot hold the formatted text.
    #[error("buffer too small: {required} bytes required")]
    BufferTooSmall {
        /// Number of bytes the formatted text needs.
        required: usize,
    },

    /// A float argument was NaN or infinite.
    #[error("value is not finite")]
    NotFinite,

    /// The maximal denominator given to a float approximation is below 1.
    #[error("maximal denominator must be at least 1, got {0}")]
    InvalidBound(i64),
}

impl RatioError {
    pub(crate) const fn overflow(op: &'static str) -> Self {
        RatioError::Overflow { op }
    }

    pub(crate) const fn parse(reason: &'static str) -> Self {
        RatioError::Parse { reason }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = RatioError> = core::result::Result<T, E>;
