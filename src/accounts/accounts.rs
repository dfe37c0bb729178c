//! Account derivation from a seed.

use tracing::{debug, warn};

use crate::{
    accounts::{
        constants::{INITIAL_COUNTER, SIG_KEY_TAG},
        privatekey::PrivateKey,
        seed::Seed,
        validity::AcceptAll,
    },
    error::{AccountError, Result},
    keys::{KeyValidator, SecretKey},
    util::address::Address,
};

/// A derived account: its private key and address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub(crate) private_key: PrivateKey,
    pub(crate) address: Address,
}

impl Account {
    // Private constructor
    fn set_account(private_key: PrivateKey, address: Address) -> Account {
        Account {
            private_key,
            address,
        }
    }

    /// from_seed derives an account with the default validator, which accepts every key.
    pub fn from_seed(seed: Seed) -> Result<Account> {
        Account::from_seed_with(seed, &AcceptAll)
    }

    /// Same as [`Account::from_seed`] for caller supplied bytes.
    /// Anything other than 32 bytes is rejected before hashing.
    pub fn from_seed_bytes(bytes: &[u8]) -> Result<Account> {
        Account::from_seed(Seed::from_bytes(bytes)?)
    }

    /// from_seed_with derives an account, searching for the first counter whose candidate
    /// view key passes `validator`.
    ///
    /// The candidate for a counter is `H(seed || counter_le || 0x00)`. The search starts at 2
    /// and runs to `u16::MAX` inclusive.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidSeed`] when no counter passes. The seed must then be discarded
    /// and a fresh one drawn.
    pub fn from_seed_with<V>(seed: Seed, validator: &V) -> Result<Account>
    where
        V: KeyValidator + ?Sized,
    {
        let counter = search_counter(&seed, validator)?;
        let account = Account::set_account(PrivateKey::new(seed, counter), Address::placeholder());
        Ok(account)
    }

    /// The private key found by derivation.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The account address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Consumes the account, keeping only its private key.
    pub fn into_private_key(self) -> PrivateKey {
        self.private_key
    }
}

/// Walks the counter space until `validator` accepts a candidate.
fn search_counter<V>(seed: &Seed, validator: &V) -> Result<u16>
where
    V: KeyValidator + ?Sized,
{
    for counter in INITIAL_COUNTER..=u16::MAX {
        let candidate = seed.digest(&[&counter.to_le_bytes(), &[SIG_KEY_TAG]]);
        if validator.is_valid(&candidate) {
            debug!(counter, "derived valid key");
            return Ok(counter);
        }
        #[cfg(feature = "debug_print")]
        tracing::trace!(counter, "candidate rejected");
    }
    warn!(
        tried = u16::MAX - INITIAL_COUNTER + 1,
        "counter space exhausted, seed has no valid key"
    );
    Err(AccountError::InvalidSeed)
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
#[cfg(test)]
mod test {
    use super::*;
    use crate::accounts::{constants::PRIVATE_KEY_PREFIX, validity::RistrettoPointValidator};
    use rand::rngs::OsRng;
    use std::cell::Cell;

    #[test]
    fn zero_seed_test() {
        let account = Account::from_seed(Seed::new([0u8; 32])).unwrap();
        assert_eq!(account.private_key().counter(), 2);
        assert_eq!(account.address(), &Address::placeholder());

        let encoded = account.private_key().to_string();
        let decoded = bs58::decode(&encoded).into_vec().unwrap();
        assert_eq!(&decoded[..9], &PRIVATE_KEY_PREFIX[..]);

        assert_eq!(
            encoded,
            "APrivateKey1tasqLD8TEdAY7CsgRhX8k3RHuho1usDi15HaETd1X65ZL7R"
        );
        assert_eq!(
            hex::encode(&account.private_key().sig_key()[..]),
            "02dc1cbdfa9a150e0fc02f1e098f6f8ccdb676b95bd96704072bf52a9d93a23e"
        );
        assert_eq!(
            hex::encode(&account.private_key().prf_key()[..]),
            "44dc8d11cd800830d3af20c0ca709535aa8db1207ae695fb584e71127c54b023"
        );

        let parsed: PrivateKey = encoded.parse().unwrap();
        assert_eq!(parsed.seed().as_bytes(), &[0u8; 32][..]);
        assert_eq!(parsed.counter(), 2);
        assert_eq!(&parsed, account.private_key());
    }

    #[test]
    fn derivation_is_deterministic_test() {
        let seed = Seed::random(&mut OsRng).unwrap();
        let a = Account::from_seed_with(seed.clone(), &RistrettoPointValidator).unwrap();
        let b = Account::from_seed_with(seed, &RistrettoPointValidator).unwrap();
        assert_eq!(a, b);
        assert_eq!(*a.private_key().sig_key(), *b.private_key().sig_key());
        assert_eq!(*a.private_key().prf_key(), *b.private_key().prf_key());
    }

    #[test]
    fn counter_perturbs_candidate_test() {
        // rejecting the first candidate must move the search to the next counter
        let first = Cell::new(None);
        let reject_first = |c: &[u8; 32]| match first.get() {
            None => {
                first.set(Some(*c));
                false
            }
            Some(f) => {
                assert_ne!(f, *c);
                true
            }
        };
        let account = Account::from_seed_with(Seed::new([9u8; 32]), &reject_first).unwrap();
        assert_eq!(account.private_key().counter(), 3);
    }

    #[test]
    fn ristretto_search_matches_candidate_test() {
        let seed = Seed::new([42u8; 32]);
        let account = Account::from_seed_with(seed.clone(), &RistrettoPointValidator).unwrap();
        let counter = account.private_key().counter();
        assert!(counter >= INITIAL_COUNTER);
        for c in INITIAL_COUNTER..counter {
            let candidate = seed.digest(&[&c.to_le_bytes(), &[SIG_KEY_TAG]]);
            assert!(!RistrettoPointValidator.is_valid(&candidate));
        }
        let found = seed.digest(&[&counter.to_le_bytes(), &[SIG_KEY_TAG]]);
        assert!(RistrettoPointValidator.is_valid(&found));
    }

    #[test]
    fn counter_exhaustion_test() {
        let calls = Cell::new(0u32);
        let never = |_: &[u8; 32]| {
            calls.set(calls.get() + 1);
            false
        };
        let err = Account::from_seed_with(Seed::new([0u8; 32]), &never).unwrap_err();
        assert_eq!(err, AccountError::InvalidSeed);
        assert!(err.is_recoverable());
        assert_eq!(calls.get(), 65_534);
    }

    #[test]
    fn from_seed_bytes_rejects_bad_length_test() {
        assert_eq!(
            Account::from_seed_bytes(&[0u8; 16]).unwrap_err(),
            AccountError::InvalidSeedLength { got: 16 }
        );
        assert_eq!(
            Account::from_seed_bytes(&[0u8; 64]).unwrap_err(),
            AccountError::InvalidSeedLength { got: 64 }
        );
        assert!(Account::from_seed_bytes(&[0u8; 32]).is_ok());
    }

    #[test]
    fn into_private_key_test() {
        let account = Account::from_seed(Seed::new([3u8; 32])).unwrap();
        let expected = account.private_key().clone();
        assert_eq!(account.into_private_key(), expected);
    }
}
