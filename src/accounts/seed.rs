//! Account seed, the root secret every key is derived from.

use blake2::{Blake2s256, Digest};
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

use crate::{
    accounts::constants::SEED_LENGTH,
    error::{AccountError, Result},
    keys::SecretKey,
};

/// Root secret of an account. Wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    /// Wraps raw seed bytes. Mostly useful for fixed test vectors.
    pub fn new(bytes: [u8; SEED_LENGTH]) -> Seed {
        Seed(bytes)
    }

    /// BLAKE2s-256 over the seed followed by `parts`.
    pub(crate) fn digest(&self, parts: &[&[u8]]) -> Zeroizing<[u8; 32]> {
        let mut hasher = Blake2s256::new();
        hasher.update(&self.0);
        for part in parts {
            hasher.update(part);
        }
        let mut out = Zeroizing::new([0u8; 32]);
        out.copy_from_slice(&hasher.finalize());
        out
    }
}

impl SecretKey for Seed {
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut seed = Seed([0u8; SEED_LENGTH]);
        // a short read must not leave us with a partially zero seed
        rng.try_fill_bytes(&mut seed.0)
            .map_err(|e| AccountError::RngUnavailable(e.to_string()))?;
        Ok(seed)
    }

    fn from_bytes(slice: &[u8]) -> Result<Self> {
        if slice.len() != SEED_LENGTH {
            return Err(AccountError::InvalidSeedLength { got: slice.len() });
        }
        let mut seed = Seed([0u8; SEED_LENGTH]);
        seed.0.copy_from_slice(slice);
        Ok(seed)
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Seed(<redacted>)")
    }
}
