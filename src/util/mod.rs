//! Utility types shared by the account layer and its callers.
//!

pub mod address;

// Re-export
pub use self::address::Address;
