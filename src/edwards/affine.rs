//! Affine twisted-Edwards point arithmetic, kept alongside the extended
//! coordinate model in [`crate::edwards::extended`] as a second,
//! independently-derived representation to cross-check against.

use crate::edwards::D;
use crate::edwards::extended::GeP3;
use crate::error::Error;
use crate::field::FieldElement;

/// A point on the twisted Edwards curve in plain affine `(x, y)` form, or
/// the identity.
#[derive(Clone, Copy)]
pub enum AffinePoint {
    Identity,
    Point { x: FieldElement, y: FieldElement },
}

impl AffinePoint {
    pub fn identity() -> Self {
        AffinePoint::Identity
    }

    /// Unchecked constructor; callers that decode untrusted bytes should
    /// use [`AffinePoint::uncompress`] instead, which validates the curve
    /// equation.
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        AffinePoint::Point { x, y }
    }

    /// Adds two affine points using the unified twisted-Edwards addition
    /// law (valid for doubling too, since `d` is a non-square here):
    ///
    /// ```text
    /// x3 = (x1y2 + y1x2) / (1 + d x1x2y1y2)
    /// y3 = (y1y2 + x1x2) / (1 - d x1x2y1y2)
    /// ```
    pub fn add(&self, other: &AffinePoint) -> Self {
        let (x1, y1) = match self {
            AffinePoint::Identity => return *other,
            AffinePoint::Point { x, y } => (*x, *y),
        };
        let (x2, y2) = match other {
            AffinePoint::Identity => return *self,
            AffinePoint::Point { x, y } => (*x, *y),
        };

        let x1x2 = x1 * x2;
        let y1y2 = y1 * y2;
        let x1y2 = x1 * y2;
        let y1x2 = y1 * x2;
        let dxxyy = D * x1x2 * y1y2;

        let x3 = (x1y2 + y1x2) * (FieldElement::ONE + dxxyy).invert();
        let y3 = (y1y2 + x1x2) * (FieldElement::ONE - dxxyy).invert();

        AffinePoint::Point { x: x3, y: y3 }
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Scalar multiplication by plain double-and-add over a little-endian
    /// byte scalar.
    pub fn scalar_mul(&self, scalar_bytes: &[u8; 32]) -> Self {
        let mut acc = AffinePoint::Identity;
        let mut addend = *self;

        for byte in scalar_bytes.iter() {
            let mut b = *byte;
            for _ in 0..8 {
                if b & 1 == 1 {
                    acc = acc.add(&addend);
                }
                addend = addend.double();
                b >>= 1;
            }
        }

        acc
    }

    /// Compresses to the standard 32-byte encoding (`y` little-endian plus
    /// sign-of-`x` bit), the same as [`GeP3::to_bytes`].
    pub fn compress(&self) -> [u8; 32] {
        match self {
            AffinePoint::Identity => {
                let mut bytes = FieldElement::ONE.to_bytes();
                bytes[31] = 0;
                bytes
            }
            AffinePoint::Point { x, y } => {
                let mut bytes = y.to_bytes();
                bytes[31] ^= (x.is_negative() as u8) << 7;
                bytes
            }
        }
    }

    /// Decompresses bytes into an affine point, delegating to
    /// [`GeP3::decompress`] for the curve-equation solve and converting
    /// the result down to affine coordinates.
    pub fn uncompress(bytes: &[u8; 32]) -> Result<Self, Error> {
        let extended = GeP3::decompress(bytes)?;
        Ok(Self::from_extended(&extended))
    }

    pub fn from_extended(point: &GeP3) -> Self {
        let recip = point.z.invert();
        let x = point.x * recip;
        let y = point.y * recip;
        AffinePoint::Point { x, y }
    }

    /// Permissive equality: the identity compares equal to any affine
    /// representative of the identity; two concrete points compare equal
    /// iff their coordinates match exactly.
    pub fn point_equals(&self, other: &AffinePoint) -> bool {
        match (self, other) {
            (AffinePoint::Identity, AffinePoint::Identity) => true,
            (AffinePoint::Identity, AffinePoint::Point { x, y })
            | (AffinePoint::Point { x, y }, AffinePoint::Identity) => {
                x.is_non_zero() == 0 && *y == FieldElement::ONE
            }
            (AffinePoint::Point { x: x1, y: y1 }, AffinePoint::Point { x: x2, y: y2 }) => {
                x1 == x2 && y1 == y2
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_additive_identity() {
        let base = AffinePoint::from_extended(&GeP3::base_point());
        let sum = base.add(&AffinePoint::identity());
        assert!(sum.point_equals(&base));
    }

    #[test]
    fn doubling_matches_adding_to_self() {
        let base = AffinePoint::from_extended(&GeP3::base_point());
        assert!(base.double().point_equals(&base.add(&base)));
    }

    #[test]
    fn compress_round_trips_through_extended() {
        let base_ext = GeP3::base_point();
        let affine = AffinePoint::from_extended(&base_ext);
        assert_eq!(affine.compress(), base_ext.to_bytes());
    }
}
