//! A from-scratch implementation of Curve25519 elliptic-curve cryptography:
//! X25519 Diffie–Hellman key agreement (RFC 7748) and Ed25519 digital
//! signatures (RFC 8032).
//!
//! The focus is on **clarity, predictability, and auditability** over
//! performance or a large API surface. Every layer is implemented directly
//! rather than wrapping an existing curve library, down to finite-field
//! arithmetic.
//!
//! # Module overview
//!
//! - [`field`] — arithmetic in `𝔽(2²⁵⁵ − 19)`: the 10-limb radix-2^25.5
//!   representation shared by every algorithm in this crate, plus square
//!   root extraction via Tonelli–Shanks.
//! - [`scalar`] — arithmetic modulo the Ed25519 group order `ℓ`, and the
//!   RFC 7748/8032 scalar-clamping routine shared by both protocols.
//! - [`edwards`] — twisted Edwards curve point arithmetic, in both the
//!   extended homogeneous coordinates used for all real work
//!   ([`edwards::extended`]) and a plain affine model
//!   ([`edwards::affine`]) kept to cross-check the extended formulas.
//! - [`montgomery`] — Curve25519 (Montgomery-form) scalar multiplication,
//!   behind one [`montgomery::MontgomeryStrategy`] trait implemented four
//!   independent ways: the RFC 7748 reference ladder, an
//!   explicit-ladder-step variant, a ladder restructured around a flat
//!   four-element state, and a derivation via the affine Montgomery group
//!   law used only to cross-check the other three.
//! - [`hash`] — SHA-512, the only hash this crate's protocols need.
//! - [`rng`] — a ChaCha20-based CSPRNG seeded from OS entropy, used for
//!   keypair generation and nonce material.
//! - [`keys`] — the two user-facing protocols, [`keys::X25519Protocol`]
//!   and [`keys::Ed25519Protocol`], built on top of everything above.
//! - [`error`] — the crate-wide [`error::Error`] enum.
//!
//! # Design goals
//!
//! - No heap allocation in the arithmetic core (`field`, `scalar`,
//!   `edwards`, `montgomery`).
//! - Minimal, explicit APIs: byte arrays in, byte arrays out.
//! - No claim of constant-time execution. Several operations here (most
//!   visibly [`field::FieldElement::tonelli`] and the affine scalar
//!   multiplications) branch on secret-dependent data; this crate favors
//!   being easy to read and verify over being safe to use with secrets an
//!   adversary can time.

pub mod edwards;
pub mod error;
pub mod field;
pub mod hash;
pub mod keys;
pub mod montgomery;
pub(crate) mod os;
pub mod rng;
pub mod scalar;
