//! Account derivation and private key handling.
//!
//! An account is grown from a 32 byte seed. The seed, together with the counter found by the
//! derivation search, forms the [`PrivateKey`], which has a canonical base58 text form.

pub mod accounts;
pub mod constants;
pub mod privatekey;
pub mod seed;
pub mod validity;

// Re-export
pub use self::{
    accounts::Account,
    privatekey::{PrivateKey, SubKeys},
    seed::Seed,
    validity::{AcceptAll, RistrettoPointValidator},
};
