//! Conversions between `Ratio<T>` and `f64`.
//!
//! [`Ratio::from_f64`] finds the best rational approximation under a
//! denominator bound with Farey's mediant search. [`Ratio::to_f64`] divides
//! the converted parts and, when both parts are too large for `f64`, falls
//! back to an exact split into integer part and 52 fractional bits computed
//! over `BigInt`.

use core::cmp::Ordering;

use log::trace;

use crate::error::{RatioError, Result};
use crate::ratio_trait::RatioInteger;
use crate::{DenominatorPolicy, Ratio};

/// Number of fractional bits extracted by the exact fallback of
/// [`Ratio::to_f64`].
pub const MANTISSA_SHIFT: u32 = 52;

impl<T: RatioInteger> Ratio<T> {
    /// Best approximation of `value` with denominator at most
    /// `max_denominator`.
    ///
    /// Fails on NaN or infinite input, on a bound below 1, and when the
    /// search leaves the `i64` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    ///
    /// let r = BigRatio::from_f64(3.14159265, 1000).unwrap();
    /// assert_eq!(r.to_string(), "355/113");
    ///
    /// let r = BigRatio::from_f64(-0.75, 100).unwrap();
    /// assert_eq!(r.to_string(), "-3/4");
    /// ```
    pub fn from_f64(value: f64, max_denominator: i64) -> Result<Self> {
        if !value.is_finite() {
            return Err(RatioError::NotFinite);
        }
        if max_denominator < 1 {
            return Err(RatioError::InvalidBound(max_denominator));
        }

        let (numer, denom) = farey(value.abs(), max_denominator)?;
        let numer = if value < 0.0 { -numer } else { numer };

        Self::from_parts(
            T::from_i64(numer),
            T::from_i64(denom),
            DenominatorPolicy::Positive,
        )
    }

    /// Nearest `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    /// use num_bigint::BigInt;
    ///
    /// let r: BigRatio = "1/3".parse().unwrap();
    /// assert_eq!(r.to_f64(), 1.0 / 3.0);
    ///
    /// // Both parts overflow f64, the ratio does not.
    /// let d = BigInt::from(10).pow(400);
    /// let n = &d * 2 + 1;
    /// let r = BigRatio::new(&n, &d).unwrap();
    /// assert!((r.to_f64() - 2.0).abs() < 1e-12);
    /// ```
    pub fn to_f64(&self) -> f64 {
        let direct = self.numer().to_f64() / self.denom().to_f64();
        if !direct.is_nan() {
            return direct;
        }

        trace!("direct float conversion gave NaN, using exact fallback");
        let wide = Ratio {
            numer: self.numer().to_bigint(),
            denom: self.denom().to_bigint(),
        };
        wide.to_f64_exact().unwrap_or(f64::NAN)
    }

    /// `floor(q) + floor((q - floor(q)) * 2^52) / 2^52`.
    ///
    /// Called on the unbounded backend only, where scaling by `2^52`
    /// cannot overflow.
    fn to_f64_exact(&self) -> Result<f64> {
        let scale = T::one().shl(MANTISSA_SHIFT)?;

        let int_part = self.numer().div_floor(self.denom())?;
        let fraction = self.sub(&Ratio::from_integer(int_part.clone()))?;
        let scaled = fraction.mul(&Ratio::from_integer(scale.clone()))?;
        let mantissa = scaled.numer().div_floor(scaled.denom())?;
        let low = Ratio::from_parts(mantissa, scale, DenominatorPolicy::Positive)?;

        Ok(int_part.to_f64() + low.numer().to_f64() / low.denom().to_f64())
    }
}

/// Float value of a possibly invalid ratio; `None` yields NaN.
pub fn to_f64<T: RatioInteger>(q: Option<&Ratio<T>>) -> f64 {
    q.map_or(f64::NAN, Ratio::to_f64)
}

/// Farey mediant search on a non-negative `x`.
///
/// The lower bound starts at `0/1` and the upper at `1/0`. Returns the
/// numerator and denominator of the chosen bound.
fn farey(x: f64, max_denominator: i64) -> Result<(i64, i64)> {
    let overflow = || RatioError::overflow("from_f64");

    let (mut ln, mut ld) = (0i64, 1i64);
    let (mut un, mut ud) = (1i64, 0i64);

    loop {
        let mn = ln.checked_add(un).ok_or_else(overflow)?;
        let md = ld.checked_add(ud).ok_or_else(overflow)?;
        let scaled = x * md as f64;
        let target = mn as f64;

        if scaled > target {
            if md > max_denominator {
                return Ok((un, ud));
            }
            let skip = run_length(x, (mn, md), (un, ud), max_denominator, Ordering::Greater);
            ln = mn + skip * un;
            ld = md + skip * ud;
        } else if scaled == target {
            if md <= max_denominator {
                return Ok((mn, md));
            }
            return Ok(if ld < ud { (ln, ld) } else { (un, ud) });
        } else {
            if md > max_denominator {
                return Ok((ln, ld));
            }
            let skip = run_length(x, (mn, md), (ln, ld), max_denominator, Ordering::Less);
            un = mn + skip * ln;
            ud = md + skip * ld;
        }
    }
}

/// Number of further mediant steps that would move the same bound again.
///
/// After a bound moves to `moved`, the next mediants are
/// `moved + j * fixed`. This returns the largest `j` for which the step
/// would still be taken, so a long run collapses into one jump. It returns
/// 0 for short runs or whenever the estimate cannot be confirmed.
fn run_length(
    x: f64,
    moved: (i64, i64),
    fixed: (i64, i64),
    max_denominator: i64,
    side: Ordering,
) -> i64 {
    let (bn, bd) = moved;
    let (fn_, fd) = fixed;

    let gap = match side {
        Ordering::Greater => (x * bd as f64 - bn as f64) / (fn_ as f64 - x * fd as f64),
        _ => (bn as f64 - x * bd as f64) / (x * fd as f64 - fn_ as f64),
    };
    if gap.is_nan() || gap < 2.0 {
        return 0;
    }

    // Saturating cast, then keep every candidate within the bound and i64.
    let mut j = gap.floor() as i64;
    if fd > 0 {
        j = j.min((max_denominator - bd) / fd);
    }
    if fn_ > 0 {
        j = j.min((i64::MAX - bn) / fn_);
    }

    let holds = |j: i64| {
        let mn = bn + j * fn_;
        let md = bd + j * fd;
        let scaled = x * md as f64;
        let target = mn as f64;
        md <= max_denominator && scaled.partial_cmp(&target) == Some(side)
    };

    if j > 0 && !holds(j) {
        j -= 1;
    }
    if j > 0 && holds(j) {
        j
    } else {
        0
    }
}
