//! Denomination registry and unit-conversion engine.
//!
//! Amounts of a single asset are expressible in several denominations related
//! by fixed multiplicative ratios (e.g. `1atom = 10^6 uatom`). The registry
//! records a unit multiplier per denomination plus a link to its smallest
//! ("base") denomination; the converter turns an amount from one registered
//! denomination into another exactly, truncating toward zero; the normalizer
//! canonicalizes coins to their base denomination; the parser reads
//! `"<amount><denom>"` expressions.
//!
//! All operations are synchronous, deterministic, and bounded by the decimal
//! engine's 315-bit operand budget.

pub mod convert;
pub mod errors;
pub mod parse;
pub mod registry;
pub mod types;

pub use errors::{DenomError, Result};
pub use parse::{parse_dec_coin, parse_dec_coins};
pub use registry::{DenomRegistry, DenomValidator};
pub use types::{is_valid_denom, Coin, DecCoin, MAX_DENOM_LEN, MIN_DENOM_LEN};

pub use denom_dec::{Dec, DecError, DECIMAL_PLACES, MAX_DEC_BIT_LEN};
