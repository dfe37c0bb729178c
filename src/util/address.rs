//! Account address.
//!
//! Addresses will eventually carry the account's Schnorr public key. Until that derivation
//! exists the address holds no data, but it is kept as its own type so the shape of
//! [`Account`](crate::accounts::Account) does not change when it gains fields.

use std::fmt;

/// Opaque account address.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
#[non_exhaustive]
pub struct Address {}

impl Address {
    /// The address handed out by derivation today.
    pub fn placeholder() -> Address {
        Address {}
    }

    /// True until addresses carry a public key.
    pub fn is_placeholder(&self) -> bool {
        *self == Address::placeholder()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<unassigned>")
    }
}
