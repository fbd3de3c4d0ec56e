//! Text form of rationals.
//!
//! The canonical text is `<numerator>/<denominator>`, or just `<numerator>`
//! when the denominator is 1. The denominator never carries a sign and there
//! are no internal spaces. An invalid value prints as [`NAN_TEXT`].
//!
//! ```
//! use exact_ratio::{to_string_radix, BigRatio, SignPolicy};
//!
//! let r: BigRatio = "-10/4".parse().unwrap();
//! assert_eq!(r.to_string(), "-5/2");
//! assert_eq!(r.to_string_radix(16, SignPolicy::Default).unwrap(), "-5/2");
//!
//! let bad = "1/0".parse::<BigRatio>();
//! let text = to_string_radix(bad.as_ref().ok(), 10, SignPolicy::Default).unwrap();
//! assert_eq!(text, "#.QNaN");
//! ```

use core::fmt;
use core::str::FromStr;

use log::debug;
use num_bigint::Sign;

use crate::error::{RatioError, Result};
use crate::ratio_trait::RatioInteger;
use crate::{DenominatorPolicy, Ratio};

/// Text produced for an invalid value.
pub const NAN_TEXT: &str = "#.QNaN";

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix.
pub const MAX_RADIX: u32 = 36;

/// How the numerator's sign is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignPolicy {
    /// `-` for negative values only.
    #[default]
    Default,
    /// `+` or `-` on every non-zero value.
    Force,
}

#[inline]
fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(RatioError::InvalidRadix(radix))
    }
}

#[inline]
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn parse_error(reason: &'static str, text: &str) -> RatioError {
    debug!("cannot parse {:?} as a rational: {}", text, reason);
    RatioError::parse(reason)
}

/// Parse one integer component. Only the numerator may be signed.
fn parse_component<T: RatioInteger>(
    component: &str,
    radix: u32,
    signed: bool,
    input: &str,
) -> Result<T> {
    let (negative, digits) = match component.as_bytes().first() {
        Some(b'-') if signed => (true, &component[1..]),
        Some(b'+') if signed => (false, &component[1..]),
        _ => (false, component),
    };

    if digits.is_empty() {
        return Err(parse_error("missing digits", input));
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(parse_error("invalid digit", input));
    }

    let value = T::from_str_radix(digits, radix)?;
    Ok(if negative { value.negate() } else { value })
}

impl<T: RatioInteger> Ratio<T> {
    /// Format in `radix`.
    ///
    /// An integer value prints without a denominator. `sign` applies to the
    /// numerator only.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{BigRatio, SignPolicy};
    ///
    /// let r: BigRatio = "3/4".parse().unwrap();
    /// assert_eq!(r.to_string_radix(2, SignPolicy::Force).unwrap(), "+11/100");
    /// ```
    pub fn to_string_radix(&self, radix: u32, sign: SignPolicy) -> Result<String> {
        check_radix(radix)?;

        let mut out = String::new();
        if sign == SignPolicy::Force && self.numer().sign() == Sign::Plus {
            out.push('+');
        }
        out.push_str(&self.numer().to_str_radix(radix));

        if !self.denom().is_one_value() {
            out.push('/');
            out.push_str(&self.denom().to_str_radix(radix));
        }
        Ok(out)
    }

    /// Parse `[space][sign]digits[/digits][space]` in `radix`.
    ///
    /// The result is canonical, so `"3/6"` parses to `1/2`. The denominator
    /// may not carry a sign or start with a space. Anything after the
    /// trailing whitespace is rejected, so `"1 2"` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::BigRatio;
    ///
    /// let r = BigRatio::from_str_radix("  -ff/a", 16).unwrap();
    /// assert_eq!(r.to_string(), "-51/2");
    /// assert!(BigRatio::from_str_radix("1/-2", 10).is_err());
    /// assert!(BigRatio::from_str_radix("", 10).is_err());
    /// ```
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        check_radix(radix)?;

        let s = text.trim_start_matches(is_space);
        if s.is_empty() {
            return Err(parse_error("empty input", text));
        }

        let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
        if unsigned.starts_with(|c: char| c == '+' || c == '-') {
            return Err(parse_error("repeated sign", text));
        }

        match s.find('/') {
            None => {
                let numer = parse_component(s.trim_end_matches(is_space), radix, true, text)?;
                Self::from_parts(numer, T::one(), DenominatorPolicy::Positive)
            }
            Some(slash) => {
                let denom_text = &s[slash + 1..];
                if denom_text.starts_with(|c: char| c == '+' || c == '-' || is_space(c)) {
                    return Err(parse_error("signed or spaced denominator", text));
                }

                let numer = parse_component(&s[..slash], radix, true, text)?;
                let denom =
                    parse_component(denom_text.trim_end_matches(is_space), radix, false, text)?;
                Self::from_parts(numer, denom, DenominatorPolicy::Positive)
            }
        }
    }
}

/// Format a possibly invalid ratio; `None` yields [`NAN_TEXT`].
pub fn to_string_radix<T: RatioInteger>(
    q: Option<&Ratio<T>>,
    radix: u32,
    sign: SignPolicy,
) -> Result<String> {
    match q {
        Some(q) => q.to_string_radix(radix, sign),
        None => Ok(NAN_TEXT.to_owned()),
    }
}

/// Format into a caller-supplied buffer and return the number of bytes
/// written.
///
/// If `buf` is too short nothing is written and the error carries the
/// required size.
///
/// # Examples
///
/// ```
/// use exact_ratio::{format_into, BigRatio, RatioError, SignPolicy};
///
/// let r: BigRatio = "-22/7".parse().unwrap();
/// let mut buf = [0u8; 5];
/// assert_eq!(
///     format_into(Some(&r), 10, SignPolicy::Default, &mut buf[..4]),
///     Err(RatioError::BufferTooSmall { required: 5 })
/// );
/// assert_eq!(buf, [0u8; 5]);
///
/// let len = format_into(Some(&r), 10, SignPolicy::Default, &mut buf).unwrap();
/// assert_eq!(&buf[..len], b"-22/7");
/// ```
pub fn format_into<T: RatioInteger>(
    q: Option<&Ratio<T>>,
    radix: u32,
    sign: SignPolicy,
    buf: &mut [u8],
) -> Result<usize> {
    let text = to_string_radix(q, radix, sign)?;
    let bytes = text.as_bytes();

    if bytes.len() > buf.len() {
        return Err(RatioError::BufferTooSmall {
            required: bytes.len(),
        });
    }

    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}

impl<T: RatioInteger> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numer().to_str_radix(10))?;
        if !self.denom().is_one_value() {
            write!(f, "/{}", self.denom().to_str_radix(10))?;
        }
        Ok(())
    }
}

impl<T: RatioInteger> FromStr for Ratio<T> {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}
