//! Asymmetric cryptographic algorithms.
//!
//! This module groups asymmetric cryptographic constructions built on
//! top of the crate’s cryptographic primitives and hash functions.
//!
//! It includes:
//! - key pair generation,
//! - private and public key material,
//! - digital signature algorithms,
//! - Diffie–Hellman key agreement.
//!
//! Each submodule corresponds to a concrete, well-specified algorithm
//! and defines its own key types and operations. Implementations are
//! intentionally explicit and self-contained, favoring clarity,
//! auditability, and specification-level correctness over abstraction.
//!
//! ## Ed25519
//!
//! The `ed25519` module implements the Ed25519 signature scheme together
//! with its associated key material, based on twisted Edwards curves over
//! the field 𝔽ₚ where `p = 2²⁵⁵ − 19`. It follows the reference
//! construction's mathematical structure and execution model, including
//! limb-based field arithmetic, explicit carry propagation, and adherence
//! to RFC 8032 — but makes no constant-time guarantee; see the crate root
//! for why.
//!
//! ## X25519
//!
//! The `x25519` module implements Curve25519 Diffie–Hellman key agreement
//! using the Montgomery ladder as specified in RFC 7748, behind three
//! interchangeable ladder strategies plus an affine group-law
//! cross-check. Intended for shared-secret derivation and key exchange,
//! not for signatures.
//!
//! ## `material`
//!
//! Typed, length-validated `[u8; 32]` wrappers (`PrivateKey`/
//! `PublicKey`/`SharedKey`) for the X25519 side, distinguishing the three
//! byte strings at the type level.
pub mod ed25519;
pub mod material;
pub mod x25519;

pub use ed25519::Ed25519Protocol;
pub use x25519::X25519Protocol;
