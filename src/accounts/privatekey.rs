//! The account private key and its canonical base58 encoding.
//!
//! Byte layout before base58:
//!
//! | offset | length | field                   |
//! |--------|--------|-------------------------|
//! | 0      | 9      | [`PRIVATE_KEY_PREFIX`]  |
//! | 9      | 2      | counter, little endian  |
//! | 11     | 32     | seed                    |

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use zeroize::Zeroizing;

use crate::{
    accounts::{
        constants::{
            COUNTER_LENGTH, PRF_KEY_TAG, PRIVATE_KEY_LENGTH, PRIVATE_KEY_PREFIX, SIG_KEY_TAG,
        },
        seed::Seed,
    },
    error::{AccountError, Result},
    keys::SecretKey,
};

/// Seed plus the counter the derivation search settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub(crate) seed: Seed,
    pub(crate) counter: u16,
}

/// Keys derived from the seed on demand. Never serialized.
#[derive(Clone)]
pub struct SubKeys {
    /// Secret key for the account signature scheme.
    pub sig_key: Zeroizing<[u8; 32]>,
    /// Seed for the pseudorandom function producing serial numbers.
    pub prf_key: Zeroizing<[u8; 32]>,
}

impl PrivateKey {
    /// Pairs a seed with an already known counter. No search is run.
    pub fn new(seed: Seed, counter: u16) -> PrivateKey {
        PrivateKey { seed, counter }
    }

    /// The account seed.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Counter recorded by the derivation search.
    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// `H(seed || 0x00)`
    pub fn sig_key(&self) -> Zeroizing<[u8; 32]> {
        self.seed.digest(&[&[SIG_KEY_TAG]])
    }

    /// `H(seed || 0x01)`
    pub fn prf_key(&self) -> Zeroizing<[u8; 32]> {
        self.seed.digest(&[&[PRF_KEY_TAG]])
    }

    /// Both sub-keys at once.
    pub fn sub_keys(&self) -> SubKeys {
        SubKeys {
            sig_key: self.sig_key(),
            prf_key: self.prf_key(),
        }
    }

    /// Canonical 43 byte form.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_LENGTH]> {
        let mut bytes = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
        let (prefix, rest) = bytes.split_at_mut(PRIVATE_KEY_PREFIX.len());
        let (counter, seed) = rest.split_at_mut(COUNTER_LENGTH);
        prefix.copy_from_slice(&PRIVATE_KEY_PREFIX);
        counter.copy_from_slice(&self.counter.to_le_bytes());
        seed.copy_from_slice(self.seed.as_bytes());
        bytes
    }

    /// Canonical base58 text in a buffer that is wiped on drop.
    ///
    /// Prefer this to `to_string()`, whose `String` keeps the key after it is dropped.
    pub fn to_zeroizing_string(&self) -> Zeroizing<String> {
        Zeroizing::new(bs58::encode(&self.to_bytes()[..]).into_string())
    }

    /// Reads the canonical 43 byte form. The key is not checked against any validator.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidLength`] when `bytes` is not 43 bytes long,
    /// [`AccountError::InvalidPrefix`] when the first 9 bytes are not the key prefix.
    pub fn from_bytes(bytes: &[u8]) -> Result<PrivateKey> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(AccountError::InvalidLength { got: bytes.len() });
        }
        let (prefix, rest) = bytes.split_at(PRIVATE_KEY_PREFIX.len());
        if prefix != &PRIVATE_KEY_PREFIX[..] {
            return Err(AccountError::InvalidPrefix);
        }
        let (counter, seed) = rest.split_at(COUNTER_LENGTH);
        Ok(PrivateKey {
            seed: Seed::from_bytes(seed)?,
            counter: u16::from_le_bytes([counter[0], counter[1]]),
        })
    }
}

/// Base58 (bitcoin alphabet) of the canonical bytes, nominally 58 characters.
impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_zeroizing_string())
    }
}

impl FromStr for PrivateKey {
    type Err = AccountError;

    /// Only the decoded length is checked, never the character count.
    fn from_str(s: &str) -> Result<PrivateKey> {
        let decoded = Zeroizing::new(
            bs58::decode(s)
                .into_vec()
                .map_err(|e| AccountError::InvalidEncoding(e.to_string()))?,
        );
        PrivateKey::from_bytes(&decoded)
    }
}

impl Serialize for PrivateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PrivateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = Zeroizing::new(String::deserialize(deserializer)?);
        encoded.parse().map_err(de::Error::custom)
    }
}
