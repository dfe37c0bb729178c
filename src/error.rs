//! Error types for account derivation and private key parsing.

use thiserror::Error;

/// Failures surfaced by the account layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// No counter in the search range produced a valid key for this seed.
    #[error("invalid seed")]
    InvalidSeed,

    /// A seed of the wrong size was handed to derivation.
    #[error("invalid seed length : got {got}")]
    InvalidSeedLength {
        /// Length actually supplied.
        got: usize,
    },

    /// The decoded private key is not 43 bytes long.
    #[error("invalid key length : got {got}")]
    InvalidLength {
        /// Decoded length.
        got: usize,
    },

    /// The decoded key does not start with the private key prefix.
    #[error("invalid prefix")]
    InvalidPrefix,

    /// The text is not base58.
    #[error("invalid base58 encoding: {0}")]
    InvalidEncoding(String),

    /// The secure random source could not fill the seed.
    #[error("secure random source unavailable: {0}")]
    RngUnavailable(String),
}

impl AccountError {
    /// Only an exhausted seed can be fixed by the caller, by drawing a fresh one.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AccountError::InvalidSeed)
    }
}

/// Result type of the account layer.
pub type Result<T> = std::result::Result<T, AccountError>;
