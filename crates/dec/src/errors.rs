//! Error types for the decimal engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecError {
    #[error("invalid decimal string: {input}")]
    Invalid { input: String },

    #[error("decimal has more than {max} fractional digits: {input}")]
    ExcessPrecision { input: String, max: u32 },

    #[error("decimal operand exceeds the {max}-bit budget ({bits} bits)")]
    PrecisionOverflow { bits: u64, max: u64 },

    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, DecError>;
