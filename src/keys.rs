use rand::{CryptoRng, RngCore};

use crate::error::Result;

/// A fixed size secret that can be drawn at random or restored from bytes.
pub trait SecretKey: Sized {
    /// Draws a fresh key from a cryptographically secure source.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self>;

    /// Restores a key from its raw bytes, rejecting slices of the wrong size.
    fn from_bytes(slice: &[u8]) -> Result<Self>;

    /// Raw key material.
    fn as_bytes(&self) -> &[u8];
}

/// Decides whether a digest derived from a seed can serve as a key.
///
/// Implementations must be pure: the same candidate always yields the same answer.
/// The derivation search relies on this to reproduce an account from its seed.
pub trait KeyValidator {
    /// Returns true when `candidate` encodes a usable key.
    fn is_valid(&self, candidate: &[u8; 32]) -> bool;
}

impl<F> KeyValidator for F
where
    F: Fn(&[u8; 32]) -> bool,
{
    fn is_valid(&self, candidate: &[u8; 32]) -> bool {
        self(candidate)
    }
}
