//! Error types for the denom registry and converter

use denom_dec::DecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DenomError {
    #[error("invalid denom: {denom}")]
    InvalidDenom { denom: String },

    #[error("denom {denom} already registered")]
    AlreadyRegistered { denom: String },

    #[error("source denom not registered: {denom}")]
    SourceNotRegistered { denom: String },

    #[error("destination denom not registered: {denom}")]
    DestNotRegistered { denom: String },

    #[error("no base denom registered for {denom}")]
    NotRegistered { denom: String },

    #[error("invalid coin expression {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error(transparent)]
    Dec(#[from] DecError),
}

pub type Result<T> = std::result::Result<T, DenomError>;
