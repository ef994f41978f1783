//! Error types for the PromptPay payload encoder

use thiserror::Error;

/// Errors that can occur while encoding a QR payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid amount: {0}. Amounts must be finite and non-negative")]
    InvalidAmount(String),

    #[error("Field {tag} value is {len} bytes, exceeding the 99-byte TLV limit")]
    FieldTooLong { tag: &'static str, len: usize },

    #[error("Checksum rendering produced '{0}' instead of 4 hex digits")]
    ChecksumComputationFailure(String),
}
