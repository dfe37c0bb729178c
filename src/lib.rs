#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/nemeanlib/latest")]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Account derivation from a seed and the private key text encoding.
///
/// An account is derived deterministically from a 32 byte seed. The resulting private key
/// (seed plus search counter) round trips through a prefixed base58 string.
pub mod accounts;

/// Errors returned by derivation and parsing.
pub mod error;

/// Traits at the seams of the account layer.
///
/// [`keys::SecretKey`] is implemented by the seed, [`keys::KeyValidator`] by the predicates
/// the derivation search consults.
pub mod keys;

/// Address type and other helpers shared with callers.
pub mod util;

// Re-export commonly used types for convenience
pub use accounts::{Account, PrivateKey, Seed};
pub use error::{AccountError, Result};
pub use util::Address;
