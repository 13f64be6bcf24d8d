//! Bounded fixed-point decimal arithmetic.
//!
//! `Dec` is a signed decimal with exactly 18 fractional digits, stored as a
//! scaled `BigInt`. Every constructor and arithmetic operation enforces a
//! 315-bit ceiling on the scaled magnitude, so conversions stay exact,
//! deterministic, and cheap to reproduce across independent validators.

pub mod dec;
pub mod errors;

pub use dec::{Dec, DECIMAL_PLACES, MAX_DEC_BIT_LEN};
pub use errors::{DecError, Result};
