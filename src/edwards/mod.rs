//! Twisted Edwards curve arithmetic for Edwards25519:
//!
//! ```text
//! -x² + y² = 1 - (121665/121666) x²y²
//! ```
//!
//! Two representations are provided: [`extended`], the extended
//! homogeneous `(X:Y:Z:T)` coordinates used for all point arithmetic, and
//! [`affine`], the plain `(x, y)` model used to cross-check the extended
//! formulas and to express the group law directly in terms of affine
//! coordinates.

pub mod affine;
pub mod extended;

use crate::field::FieldElement;

/// Edwards curve parameter `d = -121665/121666`.
pub(crate) const D: FieldElement = FieldElement([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// `2*d`, used by the extended-coordinate addition formulas.
pub(crate) const D2: FieldElement = FieldElement([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// A fixed square root of `-1` mod `p`, used both by point decompression
/// and by [`crate::field::FieldElement::tonelli`].
pub(crate) const SQRTM1: FieldElement = FieldElement([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// The standard Ed25519 base point `B`, compressed: `y = 4/5`, sign bit 0.
pub(crate) const BASE_POINT_BYTES: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];
