//! Montgomery-curve (Curve25519) scalar multiplication, by u-coordinate
//! only, per RFC 7748.
//!
//! Four independent strategies are provided behind one
//! [`MontgomeryStrategy`] trait: a literal transcription of the RFC 7748
//! reference ladder, an explicit-`ladder_step` variant more suited to
//! teaching the algorithm, a ladder restructured around a flat
//! `(a, b, c, d)` state, and a completely different derivation via the
//! affine Montgomery-curve group law (doubling/addition with recovered
//! `v`-coordinates), used to cross-check the three ladders against each
//! other.

pub mod group_law;
pub mod mk_tutorial;
pub mod optimized;
pub mod rfc7748;

use crate::field::FieldElement;

/// `a24 = (486662 - 2) / 4 = 121665`, the Montgomery curve constant used
/// by every ladder step. RFC 7748 defines this constant as `121665`;
/// using anything else (`121666` is a common transcription slip) breaks
/// bit-exact agreement with the RFC's published test vectors.
pub(crate) const A24: i64 = 121665;

/// The Montgomery curve coefficient `A = 486662`.
pub(crate) const CURVE_A: i64 = 486662;

/// Common interface implemented by each scalar-multiplication strategy.
///
/// `scalar` is assumed already clamped (see [`crate::scalar::clamp`]);
/// strategies do not re-clamp their input, matching RFC 7748 §5's
/// separation of clamping from the ladder itself.
pub trait MontgomeryStrategy {
    /// Computes the u-coordinate of `[scalar] * (u : 1)`.
    fn scalar_mult(scalar: &[u8; 32], u: FieldElement) -> FieldElement;
}

fn bit_at(scalar: &[u8; 32], t: usize) -> u32 {
    ((scalar[t / 8] >> (t % 8)) & 1) as u32
}

pub(crate) use bit_at as scalar_bit;
