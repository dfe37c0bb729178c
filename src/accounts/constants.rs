//! Byte layout and derivation constants.

/// Leading bytes of every encoded private key.
pub const PRIVATE_KEY_PREFIX: [u8; 9] = [127, 134, 189, 116, 210, 221, 210, 137, 144];

/// Size of an account seed in bytes.
pub const SEED_LENGTH: usize = 32;
/// Size of the encoded counter in bytes.
pub const COUNTER_LENGTH: usize = 2;
/// prefix || counter (LE) || seed
pub const PRIVATE_KEY_LENGTH: usize = PRIVATE_KEY_PREFIX.len() + COUNTER_LENGTH + SEED_LENGTH;

/// First counter tried by the derivation search.
pub const INITIAL_COUNTER: u16 = 2;

/// Domain tag for the signature key, also closing every candidate digest.
pub const SIG_KEY_TAG: u8 = 0x00;
/// Domain tag for the PRF key.
pub const PRF_KEY_TAG: u8 = 0x01;
