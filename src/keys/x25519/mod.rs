//! X25519 Diffie–Hellman key exchange (RFC 7748), generic over the
//! Montgomery scalar-multiplication strategy that backs it.
//!
//! The public API is intentionally minimal: clamp, decode, ladder, encode.
//! Deliberately **without** a birational Edwards-to-Montgomery conversion
//! step (`u = (u + 1) / (1 - u)`) on the peer's public key — that
//! conversion belongs to turning an Edwards `y`-coordinate into a
//! Montgomery `u`-coordinate, not to decoding a peer's already-Montgomery
//! public key, and applying it there would silently corrupt every shared
//! secret this function computes. This implementation decodes `u`
//! directly, per RFC 7748 §5.

use std::marker::PhantomData;

use crate::error::Error;
use crate::field::FieldElement;
use crate::montgomery::MontgomeryStrategy;
use crate::montgomery::group_law::GroupLaw;
use crate::scalar::clamp;

/// RFC 7748 X25519 key exchange, parameterized by a [`MontgomeryStrategy`]
/// so the same protocol code can run any of the ladder implementations in
/// [`crate::montgomery`].
pub struct X25519Protocol<S: MontgomeryStrategy> {
    _strategy: PhantomData<S>,
}

impl<S: MontgomeryStrategy> X25519Protocol<S> {
    /// Computes the Diffie–Hellman shared secret between a local secret
    /// scalar and a peer's public u-coordinate.
    ///
    /// `private` is clamped internally per RFC 7748 §5; callers pass raw
    /// secret bytes, not a pre-clamped scalar. `public` is the peer's
    /// 32-byte Montgomery u-coordinate, decoded with no range validation,
    /// matching RFC 7748's explicit tolerance of non-canonical encodings.
    ///
    /// Per RFC 7748, the result may legitimately be all-zero for certain
    /// peer public keys (e.g. low-order points); this function returns
    /// that value as-is and leaves rejecting it to the caller.
    pub fn exchange(private: &[u8; 32], public: &[u8; 32]) -> [u8; 32] {
        let mut scalar = *private;
        clamp(&mut scalar);

        let u = FieldElement::from_bytes(public);
        S::scalar_mult(&scalar, u).to_bytes()
    }

    /// Derives the public u-coordinate for a secret scalar, i.e.
    /// `exchange(private, &[9, 0, ..., 0])` using the conventional X25519
    /// base point.
    pub fn derive_public(private: &[u8; 32]) -> [u8; 32] {
        let mut base = [0u8; 32];
        base[0] = 9;
        Self::exchange(private, &base)
    }
}

/// The same key agreement computed via the affine group-law strategy
/// ([`crate::montgomery::group_law::GroupLaw`]) rather than a ladder.
///
/// Unlike the ladders, the group law cannot represent the point at
/// infinity as a u-coordinate, so where a ladder silently returns an
/// all-zero result for a low-order peer key, this path surfaces that
/// case as `Err(Error::PointAtInfinity)`, per spec.
pub fn exchange_group_law(private: &[u8; 32], public: &[u8; 32]) -> Result<[u8; 32], Error> {
    let mut scalar = *private;
    clamp(&mut scalar);

    let u = FieldElement::from_bytes(public);
    GroupLaw::scalar_mult(&scalar, u).map(|x| x.to_bytes())
}
