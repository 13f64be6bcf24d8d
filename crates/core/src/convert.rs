//! Exact conversion between registered denominations, and normalization to
//! the base denomination.
//!
//! Conversion computes `amount * unit_src / unit_dst` through the decimal
//! engine; a result wider than the engine's 315-bit budget surfaces as
//! `DenomError::Dec(PrecisionOverflow)` rather than being truncated
//! mid-computation. Normalization deliberately never fails: any lookup or
//! conversion failure falls back to the input coin unchanged, so callers can
//! pass through unregistered assets defensively.

use crate::errors::{DenomError, Result};
use crate::registry::DenomRegistry;
use crate::types::{Coin, DecCoin};
use denom_dec::Dec;
use num_bigint::BigInt;
use tracing::debug;

impl DenomRegistry {
    /// Convert `coin` to `target`, truncating the result toward zero.
    ///
    /// When the two denominations carry equal multipliers the coin is only
    /// re-labeled; no arithmetic runs, so identity-scale conversions cannot
    /// introduce spurious rounding.
    pub fn convert_coin(&self, coin: &Coin, target: &str) -> Result<Coin> {
        let (src_unit, dst_unit) = self.conversion_units(&coin.denom, target)?;
        if src_unit == dst_unit {
            return Ok(Coin::new(target, coin.amount.clone()));
        }

        let amount = Dec::from_int(BigInt::from(coin.amount.clone()))?;
        let converted = amount.checked_mul(&src_unit)?.checked_div(&dst_unit)?;
        let truncated = converted.truncate_int().to_biguint().unwrap_or_default();
        Ok(Coin::new(target, truncated))
    }

    /// Convert `coin` to `target` keeping full decimal precision.
    pub fn convert_dec_coin(&self, coin: &DecCoin, target: &str) -> Result<DecCoin> {
        let (src_unit, dst_unit) = self.conversion_units(&coin.denom, target)?;
        if src_unit == dst_unit {
            return Ok(DecCoin::new(target, coin.amount.clone()));
        }

        let converted = coin.amount.checked_mul(&src_unit)?.checked_div(&dst_unit)?;
        Ok(DecCoin::new(target, converted))
    }

    /// Convert `coin` to its registered base denomination. Returns the input
    /// unchanged if its denomination has no base link or the conversion
    /// fails; this fallback is part of the contract.
    pub fn normalize_coin(&self, coin: &Coin) -> Coin {
        let base = match self.base_denom(&coin.denom) {
            Ok(base) => base,
            Err(_) => return coin.clone(),
        };
        match self.convert_coin(coin, &base) {
            Ok(converted) => converted,
            Err(err) => {
                debug!(denom = %coin.denom, %err, "normalization fell back to input coin");
                coin.clone()
            }
        }
    }

    /// Decimal-coin counterpart of [`normalize_coin`](Self::normalize_coin),
    /// with the same never-fails fallback.
    pub fn normalize_dec_coin(&self, coin: &DecCoin) -> DecCoin {
        let base = match self.base_denom(&coin.denom) {
            Ok(base) => base,
            Err(_) => return coin.clone(),
        };
        match self.convert_dec_coin(coin, &base) {
            Ok(converted) => converted,
            Err(err) => {
                debug!(denom = %coin.denom, %err, "normalization fell back to input coin");
                coin.clone()
            }
        }
    }

    /// Normalize a sequence of decimal coins and truncate each toward zero.
    ///
    /// An absent input yields an absent output, distinct from an
    /// empty-but-present sequence. Order is preserved and duplicate
    /// denominations are kept as separate entries.
    pub fn normalize_coins(&self, coins: Option<&[DecCoin]>) -> Option<Vec<Coin>> {
        let coins = coins?;
        Some(
            coins
                .iter()
                .map(|coin| self.normalize_dec_coin(coin).truncate_decimal().0)
                .collect(),
        )
    }

    fn conversion_units(&self, source: &str, target: &str) -> Result<(Dec, Dec)> {
        if !(self.validator())(target) {
            return Err(DenomError::InvalidDenom {
                denom: target.to_string(),
            });
        }
        let src_unit = self
            .denom_unit(source)
            .ok_or_else(|| DenomError::SourceNotRegistered {
                denom: source.to_string(),
            })?;
        let dst_unit = self
            .denom_unit(target)
            .ok_or_else(|| DenomError::DestNotRegistered {
                denom: target.to_string(),
            })?;
        Ok((src_unit, dst_unit))
    }
}
