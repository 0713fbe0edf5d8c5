use thiserror::Error;

/// Hash160 error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Hash160Error {
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),
    #[error("invalid digest length: expected 40 hex characters, got {0}")]
    InvalidLength(usize),
}
