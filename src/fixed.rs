//! Fixed-width signed integers over crypto-bigint.
//!
//! [`Fixed<LIMBS>`] stores a sign flag next to an unsigned
//! [`Uint<LIMBS>`](crypto_bigint::Uint) magnitude. It implements
//! [`RatioInteger`], so `Ratio<Fixed<LIMBS>>` is a rational type with a hard
//! size limit: any intermediate that no longer fits makes the enclosing
//! rational operation fail with [`RatioError::Overflow`] instead of wrapping.
//!
//! Text and float conversions go through [`num_bigint`].
//!
//! # Example
//!
//! ```
//! use exact_ratio::{I256, RatioInteger};
//!
//! let a = I256::from_i64(-12);
//! let b = I256::from_i64(18);
//! assert_eq!(a.gcd(&b), I256::from_i64(6));
//! assert_eq!(a.checked_mul(&b).unwrap(), I256::from_i64(-216));
//! ```

use core::cmp::Ordering;
use core::fmt;

use crypto_bigint::{Uint, Word, U1024, U128, U2048, U256, U512};
use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{RatioError, Result};
use crate::ratio_trait::RatioInteger;

const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Sign-magnitude integer with a `LIMBS`-word magnitude.
///
/// Zero is always stored with a positive sign, so structural equality is
/// numeric equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixed<const LIMBS: usize> {
    negative: bool,
    magnitude: Uint<LIMBS>,
}

/// 128-bit signed magnitude integer.
pub type I128 = Fixed<{ U128::LIMBS }>;

/// 256-bit signed magnitude integer.
pub type I256 = Fixed<{ U256::LIMBS }>;

/// 512-bit signed magnitude integer.
pub type I512 = Fixed<{ U512::LIMBS }>;

/// 1024-bit signed magnitude integer.
pub type I1024 = Fixed<{ U1024::LIMBS }>;

/// 2048-bit signed magnitude integer.
pub type I2048 = Fixed<{ U2048::LIMBS }>;

impl<const LIMBS: usize> Fixed<LIMBS> {
    /// Number of magnitude bits.
    pub const BITS: u32 = (LIMBS as u32) * Word::BITS;

    /// Build from a sign flag and a magnitude. A zero magnitude is
    /// always stored as positive.
    #[inline]
    pub fn from_sign_magnitude(negative: bool, magnitude: Uint<LIMBS>) -> Self {
        Self {
            negative: negative && magnitude != Uint::ZERO,
            magnitude,
        }
    }

    /// The unsigned magnitude.
    #[inline(always)]
    pub fn magnitude(&self) -> &Uint<LIMBS> {
        &self.magnitude
    }

    /// Convert to an unbounded integer.
    pub fn to_bigint(&self) -> BigInt {
        let mut bytes = Vec::with_capacity(LIMBS * WORD_BYTES);
        for word in self.magnitude.as_words() {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, BigUint::from_bytes_le(&bytes))
    }

    /// Convert from an unbounded integer, failing if it does not fit.
    pub fn from_bigint(n: &BigInt) -> Result<Self> {
        let bytes = n.magnitude().to_bytes_le();
        if bytes.len() > LIMBS * WORD_BYTES {
            return Err(RatioError::overflow("conversion"));
        }

        let mut words = [0 as Word; LIMBS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks(WORD_BYTES)) {
            let mut buf = [0u8; WORD_BYTES];
            buf[..chunk.len()].copy_from_slice(chunk);
            *word = Word::from_le_bytes(buf);
        }

        Ok(Self::from_sign_magnitude(
            n.sign() == Sign::Minus,
            Uint::from_words(words),
        ))
    }

    fn add_signed(a_neg: bool, a: &Uint<LIMBS>, b_neg: bool, b: &Uint<LIMBS>) -> Result<Self> {
        if a_neg == b_neg {
            let sum = a.wrapping_add(b);
            if sum < *a {
                return Err(RatioError::overflow("add"));
            }
            return Ok(Self::from_sign_magnitude(a_neg, sum));
        }

        if a >= b {
            Ok(Self::from_sign_magnitude(a_neg, a.wrapping_sub(b)))
        } else {
            Ok(Self::from_sign_magnitude(b_neg, b.wrapping_sub(a)))
        }
    }
}

impl<const LIMBS: usize> PartialOrd for Fixed<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize> Ord for Fixed<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<const LIMBS: usize> fmt::Display for Fixed<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bigint().to_str_radix(10))
    }
}

impl<const LIMBS: usize> From<i64> for Fixed<LIMBS> {
    fn from(n: i64) -> Self {
        <Self as RatioInteger>::from_i64(n)
    }
}

impl<const LIMBS: usize> RatioInteger for Fixed<LIMBS> {
    #[inline(always)]
    fn zero() -> Self {
        Self::from_sign_magnitude(false, Uint::ZERO)
    }

    #[inline(always)]
    fn one() -> Self {
        Self::from_sign_magnitude(false, Uint::ONE)
    }

    #[inline]
    fn from_i64(n: i64) -> Self {
        Self::from_sign_magnitude(n < 0, Uint::from_u64(n.unsigned_abs()))
    }

    #[inline(always)]
    fn sign(&self) -> Sign {
        if self.magnitude == Uint::ZERO {
            Sign::NoSign
        } else if self.negative {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    #[inline(always)]
    fn abs(&self) -> Self {
        Self::from_sign_magnitude(false, self.magnitude)
    }

    #[inline(always)]
    fn negate(self) -> Self {
        Self::from_sign_magnitude(!self.negative, self.magnitude)
    }

    #[inline]
    fn checked_add(&self, other: &Self) -> Result<Self> {
        Self::add_signed(
            self.negative,
            &self.magnitude,
            other.negative,
            &other.magnitude,
        )
    }

    #[inline]
    fn checked_sub(&self, other: &Self) -> Result<Self> {
        Self::add_signed(
            self.negative,
            &self.magnitude,
            !other.negative,
            &other.magnitude,
        )
    }

    #[inline]
    fn checked_mul(&self, other: &Self) -> Result<Self> {
        let (lo, hi) = self.magnitude.mul_wide(&other.magnitude);
        if hi != Uint::ZERO {
            return Err(RatioError::overflow("mul"));
        }
        Ok(Self::from_sign_magnitude(self.negative ^ other.negative, lo))
    }

    #[inline]
    fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.magnitude == Uint::ZERO {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self::from_sign_magnitude(
            self.negative ^ other.negative,
            self.magnitude.wrapping_div(&other.magnitude),
        ))
    }

    fn div_floor(&self, other: &Self) -> Result<Self> {
        if other.magnitude == Uint::ZERO {
            return Err(RatioError::DivisionByZero);
        }

        let negative = self.negative ^ other.negative;
        let quotient = self.magnitude.wrapping_div(&other.magnitude);
        let remainder = self.magnitude.wrapping_rem(&other.magnitude);

        if negative && remainder != Uint::ZERO {
            // Rounding away from zero on a negative quotient is rounding down.
            let bumped = quotient.wrapping_add(&Uint::ONE);
            if bumped < quotient {
                return Err(RatioError::overflow("div_floor"));
            }
            return Ok(Self::from_sign_magnitude(true, bumped));
        }

        Ok(Self::from_sign_magnitude(negative, quotient))
    }

    #[inline]
    fn gcd(&self, other: &Self) -> Self {
        Self::from_sign_magnitude(false, gcd_uint(self.magnitude, other.magnitude))
    }

    fn shl(&self, bits: u32) -> Result<Self> {
        if self.magnitude == Uint::ZERO {
            return Ok(*self);
        }
        if bits > Self::BITS - self.magnitude.bits() as u32 {
            return Err(RatioError::overflow("shl"));
        }
        Ok(Self::from_sign_magnitude(
            self.negative,
            self.magnitude.shl_vartime(bits as usize),
        ))
    }

    fn to_f64(&self) -> f64 {
        RatioInteger::to_f64(&self.to_bigint())
    }

    fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        let n = <BigInt as RatioInteger>::from_str_radix(text, radix)?;
        Self::from_bigint(&n)
    }

    #[inline]
    fn to_str_radix(&self, radix: u32) -> String {
        self.to_bigint().to_str_radix(radix)
    }

    #[inline]
    fn to_bigint(&self) -> BigInt {
        Self::to_bigint(self)
    }
}

/// GCD of two magnitudes.
///
/// Euclidean steps while the operands differ a lot in size, then binary
/// GCD on the remaining similar-sized pair.
pub fn gcd_uint<const LIMBS: usize>(mut a: Uint<LIMBS>, mut b: Uint<LIMBS>) -> Uint<LIMBS> {
    if a == b {
        return a;
    }
    if a == Uint::ONE || b == Uint::ONE {
        return Uint::ONE;
    }
    if a == Uint::ZERO {
        return b;
    }
    if b == Uint::ZERO {
        return a;
    }

    if a < b {
        core::mem::swap(&mut a, &mut b);
    }

    let size_diff_threshold = Fixed::<LIMBS>::BITS as usize / 16;

    while b != Uint::ZERO && a.bits() as usize > b.bits() as usize + size_diff_threshold {
        let rem = a.wrapping_rem(&b);
        a = b;
        b = rem;
    }

    if b == Uint::ZERO {
        return a;
    }

    let shift = (a.trailing_zeros() as usize).min(b.trailing_zeros() as usize);
    a = a.shr_vartime(a.trailing_zeros() as usize);
    b = b.shr_vartime(b.trailing_zeros() as usize);

    loop {
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        b = b.wrapping_sub(&a);
        if b == Uint::ZERO {
            return a.shl_vartime(shift);
        }
        b = b.shr_vartime(b.trailing_zeros() as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_u256() {
        let a = U256::from_u64(100);
        let b = U256::from_u64(35);
        assert_eq!(gcd_uint(a, b), U256::from_u64(5));
    }

    #[test]
    fn test_gcd_power_of_two() {
        let a = U512::from_u64(48);
        let b = U512::from_u64(18);
        assert_eq!(gcd_uint(a, b), U512::from_u64(6));
        assert_eq!(
            gcd_uint(U512::from_u64(1 << 40), U512::from_u64(1 << 12)),
            U512::from_u64(1 << 12)
        );
    }

    #[test]
    fn test_signed_add_sub() {
        let a = I256::from_i64(-7);
        let b = I256::from_i64(10);
        assert_eq!(a.checked_add(&b).unwrap(), I256::from_i64(3));
        assert_eq!(a.checked_sub(&b).unwrap(), I256::from_i64(-17));
        assert_eq!(b.checked_sub(&b).unwrap(), I256::zero());
        assert_eq!(b.checked_sub(&b).unwrap().sign(), Sign::NoSign);
    }

    #[test]
    fn test_ordering() {
        let mut values: Vec<I128> = [5, -3, 0, -10, 2]
            .iter()
            .map(|&n| I128::from_i64(n))
            .collect();
        values.sort();
        let expected: Vec<I128> = [-10, -3, 0, 2, 5]
            .iter()
            .map(|&n| I128::from_i64(n))
            .collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_mul_overflow() {
        let big = I128::one().shl(100).unwrap();
        assert_eq!(big.checked_mul(&big), Err(RatioError::overflow("mul")));
        assert_eq!(big.shl(40), Err(RatioError::overflow("shl")));
    }

    #[test]
    fn test_shl_huge_shift() {
        assert_eq!(I128::one().shl(u32::MAX), Err(RatioError::overflow("shl")));
        assert_eq!(I2048::one().shl(u32::MAX), Err(RatioError::overflow("shl")));
        assert_eq!(I128::one().shl(127).unwrap().to_bigint(), BigInt::from(1) << 127usize);
        assert_eq!(I128::one().shl(128), Err(RatioError::overflow("shl")));
        assert_eq!(I128::zero().shl(u32::MAX), Ok(I128::zero()));
    }

    #[test]
    fn test_add_overflow() {
        let max = I128::from_sign_magnitude(false, U128::MAX);
        assert_eq!(
            max.checked_add(&I128::one()),
            Err(RatioError::overflow("add"))
        );
        let min = max.negate();
        assert_eq!(
            min.checked_sub(&I128::one()),
            Err(RatioError::overflow("add"))
        );
        assert_eq!(min.checked_add(&max).unwrap(), I128::zero());
    }

    #[test]
    fn test_div_floor() {
        let a = I256::from_i64(-7);
        let b = I256::from_i64(2);
        assert_eq!(a.div_floor(&b).unwrap(), I256::from_i64(-4));
        assert_eq!(a.checked_div(&b).unwrap(), I256::from_i64(-3));
        assert_eq!(I256::from_i64(7).div_floor(&b).unwrap(), I256::from_i64(3));
        assert_eq!(I256::from_i64(-8).div_floor(&b).unwrap(), I256::from_i64(-4));
    }

    #[test]
    fn test_bigint_bridge() {
        let n = BigInt::from(-1234567890123456789i64) * BigInt::from(1u64 << 60);
        let fixed = I256::from_bigint(&n).unwrap();
        assert_eq!(fixed.to_bigint(), n);
        assert_eq!(fixed.to_str_radix(10), n.to_str_radix(10));

        let too_big = BigInt::from(1) << 300usize;
        assert!(I256::from_bigint(&too_big).is_err());
    }

    #[test]
    fn test_i64_min() {
        let min = I128::from_i64(i64::MIN);
        assert_eq!(min.to_bigint(), BigInt::from(i64::MIN));
    }
}
