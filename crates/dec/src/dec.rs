//! Fixed-point signed decimal with a hard operand budget.
//!
//! Values are stored as `value * 10^18` in a `BigInt`. Multiplication and
//! division chop the extra 18 trailing digits with round-half-away-from-zero,
//! so results are identical on every platform. Any scaled magnitude wider
//! than [`MAX_DEC_BIT_LEN`] bits is rejected as a precision overflow instead
//! of being truncated mid-computation.

use crate::errors::{DecError, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by every `Dec`.
pub const DECIMAL_PLACES: u32 = 18;

/// Maximum bit length of the scaled magnitude. Operations producing a wider
/// operand fail with [`DecError::PrecisionOverflow`].
pub const MAX_DEC_BIT_LEN: u64 = 315;

/// 10^18, the scaling unit.
static UNIT: Lazy<BigInt> = Lazy::new(|| BigInt::from(10u32).pow(DECIMAL_PLACES));

/// 10^18 as an unsigned magnitude, for formatting and rounding.
static UNIT_UINT: Lazy<BigUint> = Lazy::new(|| BigUint::from(10u32).pow(DECIMAL_PLACES));

/// 10^36, the pre-scale applied to division numerators.
static UNIT_SQUARED: Lazy<BigInt> =
    Lazy::new(|| BigInt::from(10u32).pow(DECIMAL_PLACES * 2));

/// Signed fixed-point decimal with 18 fractional digits.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Dec(BigInt);

impl Dec {
    /// The value 0.
    pub fn zero() -> Self {
        Dec(BigInt::zero())
    }

    /// The value 1.
    pub fn one() -> Self {
        Dec(UNIT.clone())
    }

    /// Build a decimal from an integer value.
    pub fn from_int(value: impl Into<BigInt>) -> Result<Self> {
        Self::from_scaled(value.into() * &*UNIT)
    }

    /// Build `value * 10^-decimal_places`, e.g. `with_prec(1, 6)` is 0.000001.
    pub fn with_prec(value: i128, decimal_places: u32) -> Result<Self> {
        if decimal_places > DECIMAL_PLACES {
            return Err(DecError::ExcessPrecision {
                input: format!("{value}e-{decimal_places}"),
                max: DECIMAL_PLACES,
            });
        }
        let shift = BigInt::from(10u32).pow(DECIMAL_PLACES - decimal_places);
        Self::from_scaled(BigInt::from(value) * shift)
    }

    /// Checked addition.
    pub fn checked_add(&self, other: &Dec) -> Result<Dec> {
        Self::from_scaled(&self.0 + &other.0)
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, other: &Dec) -> Result<Dec> {
        Self::from_scaled(&self.0 - &other.0)
    }

    /// Checked multiplication. The 18 extra trailing digits of the raw
    /// product are chopped with round-half-away-from-zero.
    pub fn checked_mul(&self, other: &Dec) -> Result<Dec> {
        Self::from_scaled(chop_precision_and_round(&self.0 * &other.0))
    }

    /// Checked division. The numerator is pre-scaled by 10^36, divided with
    /// truncation, then chopped with round-half-away-from-zero.
    pub fn checked_div(&self, other: &Dec) -> Result<Dec> {
        if other.0.is_zero() {
            return Err(DecError::DivisionByZero);
        }
        let quo = (&self.0 * &*UNIT_SQUARED) / &other.0;
        Self::from_scaled(chop_precision_and_round(quo))
    }

    /// Integer part, truncated toward zero.
    pub fn truncate_int(&self) -> BigInt {
        &self.0 / &*UNIT
    }

    /// Fractional remainder after truncation toward zero.
    pub fn fract(&self) -> Dec {
        Dec(&self.0 % &*UNIT)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    fn from_scaled(scaled: BigInt) -> Result<Self> {
        let bits = scaled.bits();
        if bits > MAX_DEC_BIT_LEN {
            return Err(DecError::PrecisionOverflow {
                bits,
                max: MAX_DEC_BIT_LEN,
            });
        }
        Ok(Dec(scaled))
    }
}

/// Remove the 18 rightmost digits, rounding half away from zero.
fn chop_precision_and_round(scaled: BigInt) -> BigInt {
    let quo = &scaled / &*UNIT;
    let rem = &scaled % &*UNIT;
    if rem.magnitude() * 2u32 >= *UNIT_UINT {
        quo + scaled.signum()
    } else {
        quo
    }
}

impl FromStr for Dec {
    type Err = DecError;

    /// Parse `[+-]? digits [. digits]` with at most 18 fractional digits.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DecError::Invalid {
            input: s.to_string(),
        };

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if digits.contains('.') && frac_part.is_empty() {
            return Err(invalid());
        }
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac_part.len() > DECIMAL_PLACES as usize {
            return Err(DecError::ExcessPrecision {
                input: s.to_string(),
                max: DECIMAL_PLACES,
            });
        }

        let mut combined = String::with_capacity(int_part.len() + DECIMAL_PLACES as usize);
        combined.push_str(int_part);
        combined.push_str(frac_part);
        for _ in frac_part.len()..DECIMAL_PLACES as usize {
            combined.push('0');
        }

        let mut scaled = BigInt::parse_bytes(combined.as_bytes(), 10).ok_or_else(invalid)?;
        if negative {
            scaled = -scaled;
        }
        Dec::from_scaled(scaled)
    }
}

impl fmt::Display for Dec {
    /// Renders the sign, integer part, and exactly 18 fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        let magnitude = self.0.magnitude();
        let int_part = magnitude / &*UNIT_UINT;
        let frac_part = magnitude % &*UNIT_UINT;
        write!(f, "{int_part}.{frac_part:0>width$}", width = DECIMAL_PLACES as usize)
    }
}
