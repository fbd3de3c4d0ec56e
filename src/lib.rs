//! Arbitrary-precision rational numbers kept in lowest terms.
//!
//! This library provides `Ratio<T>`, a signed rational number generic over
//! any integer type implementing [`RatioInteger`]. Two backends ship with the
//! crate: [`num_bigint::BigInt`] (unbounded) and [`Fixed`] (fixed-width
//! crypto-bigint magnitudes that report overflow).
//!
//! # Canonical form
//!
//! Every `Ratio<T>` that exists is canonical:
//!
//! - numerator and denominator are coprime
//! - the denominator is strictly positive
//! - zero is stored as `0/1`
//! - the sign lives on the numerator
//!
//! All operations build a raw numerator/denominator pair and hand it to the
//! single canonicalization routine, so no operation can leave a value
//! half-reduced.
//!
//! # Failure
//!
//! There is no "invalid" `Ratio`. An operation that cannot produce a value
//! (zero denominator, integer overflow in a fixed-width backend, malformed
//! text, ...) returns [`RatioError`], and the first failure in a chain wins
//! when composed with `?`.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_ratio::BigRatio;
//! use num_bigint::BigInt;
//!
//! let a = BigRatio::new(&BigInt::from(1), &BigInt::from(2)).unwrap();
//! let b = BigRatio::new(&BigInt::from(1), &BigInt::from(3)).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//!
//! let product = (&a * &b).unwrap();
//! assert_eq!(product.numer(), &BigInt::from(1));
//! assert_eq!(product.denom(), &BigInt::from(6));
//! ```
//!
//! ## Text and floats
//!
//! ```
//! use exact_ratio::BigRatio;
//!
//! let r: BigRatio = "3/6".parse().unwrap();
//! assert_eq!(r.to_string(), "1/2");
//! assert_eq!(r.to_f64(), 0.5);
//!
//! let third = BigRatio::from_f64(0.3333333, 3).unwrap();
//! assert_eq!(third.to_string(), "1/3");
//! ```
//!
//! ## Fixed-width backend
//!
//! ```
//! use exact_ratio::{RatioError, RatioI128, RatioInteger, I128};
//!
//! let big = I128::one().shl(100).unwrap();
//! let r = RatioI128::from_integer(big);
//! assert!(matches!(&r * &r, Err(RatioError::Overflow { .. })));
//! ```

pub mod error;
pub mod fixed;
pub mod float;
pub mod ratio_trait;
pub mod text;

pub use crate::error::{RatioError, Result};
pub use crate::fixed::{Fixed, I1024, I128, I2048, I256, I512};
pub use crate::float::MANTISSA_SHIFT;
pub use crate::ratio_trait::RatioInteger;
pub use crate::text::{format_into, to_string_radix, SignPolicy, MAX_RADIX, MIN_RADIX, NAN_TEXT};

use core::cmp::Ordering;
use log::{debug, trace};
use num_bigint::{BigInt, Sign};

/// Which denominators a constructor accepts.
///
/// The stored denominator is positive under either policy; the policy only
/// decides whether a negative input denominator is an error or is folded
/// into the numerator's sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DenominatorPolicy {
    /// Only strictly positive denominators are accepted.
    #[default]
    Positive,
    /// Any non-zero denominator is accepted.
    NonZero,
}

impl DenominatorPolicy {
    fn check<T: RatioInteger>(self, denom: &T) -> Result<()> {
        match (denom.sign(), self) {
            (Sign::NoSign, _) => {
                debug!("rejected zero denominator");
                Err(RatioError::ZeroDenominator)
            }
            (Sign::Minus, DenominatorPolicy::Positive) => {
                debug!("rejected negative denominator {:?}", denom);
                Err(RatioError::NonPositiveDenominator)
            }
            _ => Ok(()),
        }
    }
}

/// Three-way comparison result of [`compare`], with a distinct error
/// outcome for invalid operands or a failed cross-multiplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RatioCmp {
    Less,
    Equal,
    Greater,
    Error,
}

impl From<Ordering> for RatioCmp {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => RatioCmp::Less,
            Ordering::Equal => RatioCmp::Equal,
            Ordering::Greater => RatioCmp::Greater,
        }
    }
}

/// A rational number in canonical form.
///
/// # Type Parameter
///
/// `T` must implement [`RatioInteger`].
///
/// # Invariants
///
/// - `gcd(|numer|, denom) == 1`
/// - `denom > 0`
/// - zero is exactly `0/1`
///
/// Because the form is canonical, the derived structural equality is
/// numeric equality.
///
/// # Examples
///
/// ```
/// use exact_ratio::BigRatio;
/// use num_bigint::BigInt;
///
/// let r = BigRatio::new(&BigInt::from(4), &BigInt::from(-6));
/// assert!(r.is_err()); // negative denominators are rejected by default
///
/// let r = BigRatio::new(&BigInt::from(-4), &BigInt::from(6)).unwrap();
/// assert_eq!(r.numer(), &BigInt::from(-2));
/// assert_eq!(r.denom(), &BigInt::from(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ratio<T: RatioInteger> {
    numer: T,
    denom: T,
}

impl<T: RatioInteger> Ratio<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a canonical ratio from borrowed parts.
    ///
    /// Uses [`DenominatorPolicy::Positive`]: a denominator `<= 0` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    /// use num_bigint::BigInt;
    ///
    /// let r = BigRatio::new(&BigInt::from(4), &BigInt::from(6)).unwrap();
    /// assert_eq!(r.numer(), &BigInt::from(2)); // Reduced
    /// assert_eq!(r.denom(), &BigInt::from(3));
    /// ```
    #[inline]
    pub fn new(numer: &T, denom: &T) -> Result<Self> {
        Self::new_with_policy(numer, denom, DenominatorPolicy::default())
    }

    /// Create a canonical ratio from borrowed parts under `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{BigRatio, DenominatorPolicy};
    /// use num_bigint::BigInt;
    ///
    /// let r = BigRatio::new_with_policy(
    ///     &BigInt::from(4),
    ///     &BigInt::from(-6),
    ///     DenominatorPolicy::NonZero,
    /// )
    /// .unwrap();
    /// assert_eq!(r.to_string(), "-2/3");
    /// ```
    pub fn new_with_policy(numer: &T, denom: &T, policy: DenominatorPolicy) -> Result<Self> {
        policy.check(denom)?;

        if numer.is_zero_value() {
            return Ok(Self::zero());
        }

        let negative = numer.sign() != denom.sign();
        Self::reduce(with_sign(numer.abs(), negative), denom.abs())
    }

    /// Consuming counterpart of [`new_with_policy`](Ratio::new_with_policy).
    ///
    /// Every operation that computes a fresh numerator/denominator pair
    /// funnels through here, so the parts are moved instead of copied.
    pub(crate) fn from_parts(numer: T, denom: T, policy: DenominatorPolicy) -> Result<Self> {
        policy.check(&denom)?;

        if numer.is_zero_value() {
            trace!("zero numerator, skipping reduction");
            let denom = if denom.is_one_value() { denom } else { T::one() };
            return Ok(Self { numer, denom });
        }

        let negative = numer.sign() != denom.sign();
        let denom = if denom.is_negative_value() {
            denom.negate()
        } else {
            denom
        };
        Self::reduce(with_sign(numer, negative), denom)
    }

    /// Divide out the GCD. `denom` must already be positive.
    fn reduce(numer: T, denom: T) -> Result<Self> {
        if denom.is_one_value() {
            return Ok(Self { numer, denom });
        }

        let g = numer.gcd(&denom);
        if g.is_one_value() {
            return Ok(Self { numer, denom });
        }

        Ok(Self {
            numer: numer.checked_div(&g)?,
            denom: denom.checked_div(&g)?,
        })
    }

    /// Create a ratio representing the integer `n`.
    #[inline]
    pub fn from_integer(n: T) -> Self {
        Self {
            numer: n,
            denom: T::one(),
        }
    }

    /// Create a ratio representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            numer: T::zero(),
            denom: T::one(),
        }
    }

    /// Create a ratio representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self {
            numer: T::one(),
            denom: T::one(),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator; carries the sign.
    #[inline(always)]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    /// The denominator; always positive.
    #[inline(always)]
    pub fn denom(&self) -> &T {
        &self.denom
    }

    /// Split into `(numerator, denominator)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }

    /// Check if the ratio is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero_value()
    }

    /// Check if the ratio is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.sign() == Sign::Plus
    }

    /// Check if the ratio is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative_value()
    }

    /// Check if the ratio represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one_value()
    }

    // ========================================================================
    // SIGN OPERATIONS
    // ========================================================================

    /// Negated copy; zero stays zero.
    #[allow(clippy::should_implement_trait)] // Neg is implemented too, returning Self
    #[inline]
    pub fn neg(&self) -> Self {
        Self {
            numer: self.numer.clone().negate(),
            denom: self.denom.clone(),
        }
    }

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// The reciprocal `denom/numer`, re-canonicalized so the sign moves
    /// back to the numerator.
    ///
    /// Fails with [`RatioError::ZeroDenominator`] when `self` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    ///
    /// let r: BigRatio = "-2/3".parse().unwrap();
    /// assert_eq!(r.inverse().unwrap().to_string(), "-3/2");
    /// ```
    #[inline]
    pub fn inverse(&self) -> Result<Self> {
        Self::new_with_policy(&self.denom, &self.numer, DenominatorPolicy::NonZero)
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Add two ratios.
    ///
    /// Equal denominators only add numerators; otherwise the sum is
    /// cross-multiplied. Either way the result is canonical.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    ///
    /// let a: BigRatio = "1/6".parse().unwrap();
    /// let b: BigRatio = "1/3".parse().unwrap();
    /// assert_eq!(a.add(&b).unwrap().to_string(), "1/2");
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.denom == other.denom {
            let numer = self.numer.checked_add(&other.numer)?;
            return Self::from_parts(numer, self.denom.clone(), DenominatorPolicy::Positive);
        }

        let ad = self.numer.checked_mul(&other.denom)?;
        let bc = self.denom.checked_mul(&other.numer)?;
        let numer = ad.checked_add(&bc)?;
        let denom = self.denom.checked_mul(&other.denom)?;
        Self::from_parts(numer, denom, DenominatorPolicy::Positive)
    }

    /// Subtract another ratio.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.denom == other.denom {
            let numer = self.numer.checked_sub(&other.numer)?;
            return Self::from_parts(numer, self.denom.clone(), DenominatorPolicy::Positive);
        }

        let ad = self.numer.checked_mul(&other.denom)?;
        let bc = self.denom.checked_mul(&other.numer)?;
        let numer = ad.checked_sub(&bc)?;
        let denom = self.denom.checked_mul(&other.denom)?;
        Self::from_parts(numer, denom, DenominatorPolicy::Positive)
    }

    /// Multiply two ratios.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let numer = self.numer.checked_mul(&other.numer)?;
        let denom = self.denom.checked_mul(&other.denom)?;
        Self::from_parts(numer, denom, DenominatorPolicy::Positive)
    }

    /// Divide by another ratio.
    ///
    /// Dividing by zero fails with [`RatioError::ZeroDenominator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    ///
    /// let a: BigRatio = "2/3".parse().unwrap();
    /// let b: BigRatio = "-4/5".parse().unwrap();
    /// assert_eq!(a.div(&b).unwrap().to_string(), "-5/6");
    /// assert!(a.div(&BigRatio::zero()).is_err());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, other: &Self) -> Result<Self> {
        let numer = self.numer.checked_mul(&other.denom)?;
        let denom = self.denom.checked_mul(&other.numer)?;

        // The sign is settled here, before canonicalization sees the pair.
        let negative = self.numer.is_negative_value() ^ other.numer.is_negative_value();
        let numer = with_sign(numer, negative);
        let denom = with_sign(denom, false);

        Self::from_parts(numer, denom, DenominatorPolicy::Positive)
    }

    // ========================================================================
    // COMPARISON
    // ========================================================================

    /// Three-way comparison.
    ///
    /// Signs are compared first, then numerators when the denominators
    /// match, and only then the cross products. Fails only if a
    /// cross product cannot be computed.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    /// use std::cmp::Ordering;
    ///
    /// let a: BigRatio = "1/3".parse().unwrap();
    /// let b: BigRatio = "2/5".parse().unwrap();
    /// assert_eq!(a.try_cmp(&b), Ok(Ordering::Less));
    /// ```
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        let self_sign = self.numer.sign();
        let other_sign = other.numer.sign();

        if self_sign != other_sign {
            return Ok(self_sign.cmp(&other_sign));
        }

        // Also covers 0 vs 0, since zero always has denominator 1.
        if self.denom == other.denom {
            return Ok(self.numer.cmp(&other.numer));
        }

        let ad = self.numer.checked_mul(&other.denom)?;
        let bc = self.denom.checked_mul(&other.numer)?;
        Ok(ad.cmp(&bc))
    }
}

/// Compare two possibly invalid ratios.
///
/// `None` stands for an invalid value and yields [`RatioCmp::Error`], as does
/// a failed cross-multiplication.
///
/// # Examples
///
/// ```
/// use exact_ratio::{compare, BigRatio, RatioCmp};
///
/// let a: BigRatio = "1/2".parse().unwrap();
/// let b = "1/0".parse::<BigRatio>();
/// assert_eq!(compare(Some(&a), Some(&a)), RatioCmp::Equal);
/// assert_eq!(compare(Some(&a), b.as_ref().ok()), RatioCmp::Error);
/// ```
pub fn compare<T: RatioInteger>(a: Option<&Ratio<T>>, b: Option<&Ratio<T>>) -> RatioCmp {
    match (a, b) {
        (Some(a), Some(b)) => a.try_cmp(b).map_or(RatioCmp::Error, RatioCmp::from),
        _ => RatioCmp::Error,
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Give `value` the requested sign, negating only when it differs.
#[inline]
fn with_sign<T: RatioInteger>(value: T, negative: bool) -> T {
    if value.is_negative_value() != negative && !value.is_zero_value() {
        value.negate()
    } else {
        value
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

macro_rules! impl_fallible_binop {
    ($trait:ident, $method:ident) => {
        impl<T: RatioInteger> core::ops::$trait for &Ratio<T> {
            type Output = Result<Ratio<T>>;
            #[inline]
            fn $method(self, other: Self) -> Result<Ratio<T>> {
                Ratio::$method(self, other)
            }
        }

        impl<T: RatioInteger> core::ops::$trait for Ratio<T> {
            type Output = Result<Ratio<T>>;
            #[inline]
            fn $method(self, other: Self) -> Result<Ratio<T>> {
                Ratio::$method(&self, &other)
            }
        }
    };
}

impl_fallible_binop!(Add, add);
impl_fallible_binop!(Sub, sub);
impl_fallible_binop!(Mul, mul);
impl_fallible_binop!(Div, div);

impl<T: RatioInteger> core::ops::Neg for Ratio<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            numer: self.numer.negate(),
            denom: self.denom,
        }
    }
}

impl<T: RatioInteger> core::ops::Neg for &Ratio<T> {
    type Output = Ratio<T>;
    #[inline]
    fn neg(self) -> Ratio<T> {
        Ratio::neg(self)
    }
}

impl<T: RatioInteger> PartialOrd for Ratio<T> {
    /// `None` only when the cross-multiplication fails.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl<T: RatioInteger> From<T> for Ratio<T> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Ratio over unbounded integers.
pub type BigRatio = Ratio<BigInt>;

/// Ratio over 128-bit signed magnitudes.
pub type RatioI128 = Ratio<I128>;

/// Ratio over 256-bit signed magnitudes.
pub type RatioI256 = Ratio<I256>;

/// Ratio over 512-bit signed magnitudes.
pub type RatioI512 = Ratio<I512>;

/// Ratio over 1024-bit signed magnitudes.
pub type RatioI1024 = Ratio<I1024>;

/// Ratio over 2048-bit signed magnitudes.
pub type RatioI2048 = Ratio<I2048>;
