//! Validity predicates used by the derivation search.

use curve25519_dalek::ristretto::CompressedRistretto;

use crate::keys::KeyValidator;

/// Accepts every candidate.
///
/// Stand-in until view keys are checked as real Schnorr public keys. With it the search always
/// stops at the initial counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl KeyValidator for AcceptAll {
    fn is_valid(&self, _candidate: &[u8; 32]) -> bool {
        true
    }
}

/// Accepts a candidate only if it is the canonical encoding of a Ristretto point.
#[derive(Debug, Default, Clone, Copy)]
pub struct RistrettoPointValidator;

impl KeyValidator for RistrettoPointValidator {
    fn is_valid(&self, candidate: &[u8; 32]) -> bool {
        CompressedRistretto(*candidate).decompress().is_some()
    }
}
