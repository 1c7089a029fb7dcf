//! Hash algorithms exposed by the crate.
//!
//! SHA-512 is the only hash Ed25519 needs, and the only one implemented
//! here.

pub mod sha512;

/// Re-export of the SHA-512 convenience function.
pub use sha512::sha512;
