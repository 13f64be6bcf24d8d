//! Parsing of textual coin expressions.
//!
//! A single coin is written `"<amount><denom>"` with no separator: the
//! amount is a decimal literal (`[+-]? digits [. digits]`), the denom
//! follows the name grammar. Lists are comma-or-whitespace separated, order
//! preserved, duplicates kept. Parsing feeds the normalizer; the normalized
//! entry points truncate toward zero to integer coins.

use crate::errors::{DenomError, Result};
use crate::registry::DenomRegistry;
use crate::types::{is_valid_denom, Coin, DecCoin};
use denom_dec::Dec;

/// Parse exactly one `"<amount><denom>"` pair into a raw decimal coin.
/// Surrounding whitespace is tolerated; anything else malformed is a
/// [`DenomError::Parse`].
pub fn parse_dec_coin(input: &str) -> Result<DecCoin> {
    let parse_err = |reason: &str| DenomError::Parse {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let expr = input.trim();
    if expr.is_empty() {
        return Err(parse_err("empty coin expression"));
    }

    let split = amount_end(expr);
    let (amount_str, denom) = expr.split_at(split);
    if amount_str.is_empty() {
        return Err(parse_err("missing amount"));
    }
    if denom.is_empty() {
        return Err(parse_err("missing denom"));
    }
    if !is_valid_denom(denom) {
        return Err(parse_err("invalid denom"));
    }

    let amount: Dec = amount_str
        .parse()
        .map_err(|err: denom_dec::DecError| DenomError::Parse {
            input: input.to_string(),
            reason: err.to_string(),
        })?;
    if amount.is_negative() {
        return Err(parse_err("negative coin amount"));
    }

    Ok(DecCoin::new(denom, amount))
}

/// Parse a comma-or-whitespace separated list of coin expressions. Blank
/// input is the empty list; an empty comma-delimited element is an error.
pub fn parse_dec_coins(input: &str) -> Result<Vec<DecCoin>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut coins = Vec::new();
    for element in input.split(',') {
        let element = element.trim();
        if element.is_empty() {
            return Err(DenomError::Parse {
                input: input.to_string(),
                reason: "empty coin expression in list".to_string(),
            });
        }
        for expr in element.split_whitespace() {
            coins.push(parse_dec_coin(expr)?);
        }
    }
    Ok(coins)
}

/// Byte offset where the leading decimal literal ends: an optional sign,
/// digits, and a dot only when digits follow it.
fn amount_end(expr: &str) -> usize {
    let bytes = expr.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx = 1;
    }
    let digits_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    if idx == digits_start {
        // no digits at all; treat the whole expression as denom
        return 0;
    }
    if idx < bytes.len()
        && bytes[idx] == b'.'
        && bytes.get(idx + 1).is_some_and(|b| b.is_ascii_digit())
    {
        idx += 1;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
    }
    idx
}

impl DenomRegistry {
    /// Parse one coin expression, normalize it to its base denomination, and
    /// truncate toward zero.
    pub fn parse_coin_normalized(&self, input: &str) -> Result<Coin> {
        let dec_coin = parse_dec_coin(input)?;
        Ok(self.normalize_dec_coin(&dec_coin).truncate_decimal().0)
    }

    /// Parse a list of coin expressions and normalize each element,
    /// preserving order and duplicate denominations.
    pub fn parse_coins_normalized(&self, input: &str) -> Result<Vec<Coin>> {
        let dec_coins = parse_dec_coins(input)?;
        Ok(self.normalize_coins(Some(&dec_coins)).unwrap_or_default())
    }
}
