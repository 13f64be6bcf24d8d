//! Coin types and the denomination name grammar.

use denom_dec::Dec;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length of a denomination name.
pub const MIN_DENOM_LEN: usize = 3;

/// Maximum length of a denomination name.
pub const MAX_DENOM_LEN: usize = 128;

/// Default denomination name grammar: an ASCII letter followed by letters,
/// digits, or `/ : . _ -`, with total length 3..=128.
pub fn is_valid_denom(denom: &str) -> bool {
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return false;
    }
    let mut chars = denom.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
}

/// An integer amount of a denomination. The amount cannot be subdivided
/// further than one unit of `denom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: BigUint,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A decimal amount of a denomination, carrying fractional precision during
/// intermediate computation. Amounts are nonnegative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Split into the integer coin (truncated toward zero) and the
    /// fractional change left over.
    pub fn truncate_decimal(&self) -> (Coin, DecCoin) {
        let truncated = self
            .amount
            .truncate_int()
            .to_biguint()
            .unwrap_or_default();
        (
            Coin::new(self.denom.clone(), truncated),
            DecCoin::new(self.denom.clone(), self.amount.fract()),
        )
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denom_grammar() {
        assert!(is_valid_denom("atom"));
        assert!(is_valid_denom("uatom"));
        assert!(is_valid_denom("ibc/ABC123"));
        assert!(is_valid_denom("gamm:pool.1_x-y"));
        assert!(is_valid_denom("abc"));

        assert!(!is_valid_denom(""));
        assert!(!is_valid_denom("ab")); // too short
        assert!(!is_valid_denom("1atom")); // must start with a letter
        assert!(!is_valid_denom("/atom"));
        assert!(!is_valid_denom("at om"));
        assert!(!is_valid_denom(&"a".repeat(MAX_DENOM_LEN + 1)));
        assert!(is_valid_denom(&"a".repeat(MAX_DENOM_LEN)));
    }

    #[test]
    fn test_coin_display() {
        let coin = Coin::new("uatom", 1_000_000u64);
        assert_eq!(coin.to_string(), "1000000uatom");

        let dec_coin = DecCoin::new("atom", "1.5".parse().unwrap());
        assert_eq!(dec_coin.to_string(), "1.500000000000000000atom");
    }

    #[test]
    fn test_serde_round_trip() {
        let coin = Coin::new("uatom", 1_000_000u64);
        let json = serde_json::to_string(&coin).unwrap();
        let back: Coin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coin);

        let dec_coin = DecCoin::new("atom", "1.5".parse().unwrap());
        let json = serde_json::to_string(&dec_coin).unwrap();
        let back: DecCoin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dec_coin);
    }

    #[test]
    fn test_truncate_decimal() {
        let dec_coin = DecCoin::new("atom", "2.75".parse().unwrap());
        let (coin, change) = dec_coin.truncate_decimal();
        assert_eq!(coin, Coin::new("atom", 2u32));
        assert_eq!(change, DecCoin::new("atom", "0.75".parse().unwrap()));
    }
}
