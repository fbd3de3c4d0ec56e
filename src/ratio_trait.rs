//! The integer capability that `Ratio<T>` is built on.
//!
//! The rational layer never touches digits itself. Everything it needs from
//! an integer type is collected in [`RatioInteger`]: sign queries, ordering,
//! the ring operations, floor division, GCD, shifting and the text/float
//! conversions.
//!
//! # Backends
//!
//! - [`num_bigint::BigInt`]: unbounded, every operation succeeds.
//! - [`Fixed`](crate::Fixed): fixed-width sign-magnitude integers over
//!   crypto-bigint, where arithmetic may fail with
//!   [`RatioError::Overflow`].
//!
//! # Example
//!
//! ```
//! use exact_ratio::RatioInteger;
//! use num_bigint::BigInt;
//!
//! let a = BigInt::from(48);
//! let b = BigInt::from(-18);
//! assert_eq!(a.gcd(&b), BigInt::from(6));
//! ```

use core::fmt::Debug;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Num, One, Signed, ToPrimitive, Zero};

use crate::error::{RatioError, Result};

/// Signed integer type suitable for use in `Ratio<T>`.
///
/// Operations that can fail return `Result` so a failure deep inside a
/// rational construction aborts the whole operation. Implementations must
/// never panic on valid inputs; division by zero is reported as
/// [`RatioError::DivisionByZero`].
pub trait RatioInteger: Clone + Debug + PartialEq + Eq + PartialOrd + Ord + Sized + 'static {
    /// The value 0.
    fn zero() -> Self;

    /// The value 1.
    fn one() -> Self;

    /// Create from a machine integer.
    fn from_i64(n: i64) -> Self;

    /// Sign of the value.
    fn sign(&self) -> Sign;

    /// Absolute value.
    fn abs(&self) -> Self;

    /// Flip the sign (zero stays zero).
    fn negate(self) -> Self;

    /// `self + other`.
    fn checked_add(&self, other: &Self) -> Result<Self>;

    /// `self - other`.
    fn checked_sub(&self, other: &Self) -> Result<Self>;

    /// `self * other`.
    fn checked_mul(&self, other: &Self) -> Result<Self>;

    /// Quotient rounded toward zero.
    fn checked_div(&self, other: &Self) -> Result<Self>;

    /// Quotient rounded toward negative infinity.
    fn div_floor(&self, other: &Self) -> Result<Self>;

    /// Greatest common divisor, always non-negative.
    fn gcd(&self, other: &Self) -> Self;

    /// `self * 2^bits`.
    fn shl(&self, bits: u32) -> Result<Self>;

    /// Nearest `f64`; values beyond the float range become `±inf`.
    fn to_f64(&self) -> f64;

    /// Parse digits in `radix`, with an optional leading sign.
    fn from_str_radix(text: &str, radix: u32) -> Result<Self>;

    /// Format in `radix` with a leading `-` for negative values.
    fn to_str_radix(&self, radix: u32) -> String;

    /// Widen to an unbounded integer.
    fn to_bigint(&self) -> BigInt;

    #[inline]
    fn is_zero_value(&self) -> bool {
        self.sign() == Sign::NoSign
    }

    #[inline]
    fn is_one_value(&self) -> bool {
        *self == Self::one()
    }

    #[inline]
    fn is_negative_value(&self) -> bool {
        self.sign() == Sign::Minus
    }
}

impl RatioInteger for BigInt {
    #[inline]
    fn zero() -> Self {
        <BigInt as Zero>::zero()
    }

    #[inline]
    fn one() -> Self {
        <BigInt as One>::one()
    }

    #[inline]
    fn from_i64(n: i64) -> Self {
        BigInt::from(n)
    }

    #[inline(always)]
    fn sign(&self) -> Sign {
        BigInt::sign(self)
    }

    #[inline]
    fn abs(&self) -> Self {
        Signed::abs(self)
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }

    #[inline]
    fn checked_add(&self, other: &Self) -> Result<Self> {
        Ok(self + other)
    }

    #[inline]
    fn checked_sub(&self, other: &Self) -> Result<Self> {
        Ok(self - other)
    }

    #[inline]
    fn checked_mul(&self, other: &Self) -> Result<Self> {
        Ok(self * other)
    }

    #[inline]
    fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ok(self / other)
    }

    #[inline]
    fn div_floor(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Integer::div_floor(self, other))
    }

    #[inline]
    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }

    #[inline]
    fn shl(&self, bits: u32) -> Result<Self> {
        Ok(self << bits as usize)
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(match BigInt::sign(self) {
            Sign::Minus => f64::NEG_INFINITY,
            _ => f64::INFINITY,
        })
    }

    fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        <BigInt as Num>::from_str_radix(text, radix)
            .map_err(|_| RatioError::parse("malformed integer"))
    }

    #[inline]
    fn to_str_radix(&self, radix: u32) -> String {
        BigInt::to_str_radix(self, radix)
    }

    #[inline]
    fn to_bigint(&self) -> BigInt {
        self.clone()
    }
}
