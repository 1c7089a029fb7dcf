//! Extended homogeneous coordinates `(X:Y:Z:T)` for Edwards25519, with
//! `x = X/Z`, `y = Y/Z`, `xy = T/Z`.
//!
//! Point addition and doubling use the Hisil–Wong–Carter–Dawson
//! mixed-coordinate formulas. Scalar multiplication is plain
//! double-and-add rather than fixed-base windowed multiplication against
//! a precomputed table: a windowed table would need 64x8 verified curve
//! points baked in, and double-and-add needs nothing beyond the
//! mixed-addition primitives this module already has.

use crate::edwards::{BASE_POINT_BYTES, D, D2};
use crate::error::Error;
use crate::field::FieldElement;
use crate::scalar::Scalar;

/// `p = 2^255 - 19`, little-endian, for the canonical-range check
/// `decompress` performs on the sign-masked `y` bytes before treating
/// them as a field element.
const P_BYTES: [u8; 32] = {
    let mut p = [0xffu8; 32];
    p[0] = 0xed;
    p[31] = 0x7f;
    p
};

/// `true` if `bytes`, read little-endian with no sign bit set, encodes an
/// integer strictly less than `p` — i.e. is the canonical representative
/// RFC 8032 §5.1.3 requires of a decompressed `y` coordinate.
fn field_element_is_canonical(bytes: &[u8; 32]) -> bool {
    for index in (0..32).rev() {
        match bytes[index].cmp(&P_BYTES[index]) {
            std::cmp::Ordering::Less => return true,
            std::cmp::Ordering::Greater => return false,
            std::cmp::Ordering::Equal => continue,
        }
    }
    false
}

/// Extended point, transient form produced by an addition/subtraction
/// before being projected back down to [`GeP2`] or [`GeP3`].
#[derive(Clone, Copy)]
pub struct GeP1 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Projective point `(X:Y:Z)`, used mainly as the output of doubling.
#[derive(Clone, Copy)]
pub struct GeP2 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

/// Extended point `(X:Y:Z:T)`, the primary representation used for public
/// keys, signature points, and intermediate scalar-multiplication state.
#[derive(Clone, Copy)]
pub struct GeP3 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Cached form of a [`GeP3`] point, precomputing the four field elements
/// that the mixed-addition formula needs, so repeated adds against the
/// same point avoid recomputation.
#[derive(Clone, Copy)]
pub struct GeCached {
    pub(crate) yplusx: FieldElement,
    pub(crate) yminusx: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2d: FieldElement,
}

impl GeP2 {
    pub const IDENTITY: Self = GeP2 {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    pub(crate) fn from_p1(g: &GeP1) -> Self {
        GeP2 {
            x: g.x * g.t,
            y: g.y * g.z,
            z: g.z * g.t,
        }
    }

    pub(crate) fn from_p3(g: &GeP3) -> Self {
        GeP2 {
            x: g.x,
            y: g.y,
            z: g.z,
        }
    }

    pub(crate) fn double(self) -> GeP1 {
        let xx = self.x.square();
        let zz = self.y.square();
        let zzzz = self.z.double_square();
        let yy = self.x + self.y;
        let yy_sq = yy.square();
        let y = zz + xx;
        let z = zz - xx;
        let x = yy_sq - y;
        let t = zzzz - z;

        GeP1 { x, y, z, t }
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut bytes = y.to_bytes();
        bytes[31] ^= (x.is_negative() as u8) << 7;
        bytes
    }
}

impl GeP1 {
    fn from_sum(a: &GeP3, b: &GeCached) -> Self {
        let y_plus = a.y + a.x;
        let y_minus = a.y - a.x;
        let pp = y_plus * b.yplusx;
        let mm = y_minus * b.yminusx;
        let tt2d = a.t * b.t2d;
        let zz = a.z * b.z;
        let zz2 = zz + zz;

        GeP1 {
            x: pp - mm,
            y: pp + mm,
            z: zz2 + tt2d,
            t: zz2 - tt2d,
        }
    }

    fn from_difference(a: &GeP3, b: &GeCached) -> Self {
        let neg = GeCached {
            yplusx: b.yminusx,
            yminusx: b.yplusx,
            z: b.z,
            t2d: -b.t2d,
        };
        Self::from_sum(a, &neg)
    }
}

impl GeP3 {
    pub const IDENTITY: Self = GeP3 {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    fn from_p1(g: &GeP1) -> Self {
        GeP3 {
            x: g.x * g.t,
            y: g.y * g.z,
            z: g.z * g.t,
            t: g.x * g.y,
        }
    }

    pub(crate) fn negate(&self) -> Self {
        GeP3 {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }

    fn double(&self) -> GeP1 {
        GeP2::from_p3(self).double()
    }

    fn add(&self, other: &GeCached) -> Self {
        Self::from_p1(&GeP1::from_sum(self, other))
    }

    fn sub(&self, other: &GeCached) -> Self {
        Self::from_p1(&GeP1::from_difference(self, other))
    }

    /// Adds two points given in extended coordinates. A thin public
    /// wrapper around the cached mixed-addition formula, for callers (key
    /// tweaking, test vectors) that only have two plain `GeP3`s on hand.
    pub fn add_point(&self, other: &GeP3) -> Self {
        self.add(&GeCached::from_p3(other))
    }

    /// Compresses this point to its canonical 32-byte encoding: `y` in
    /// little-endian, with the sign of `x` stored in the top bit.
    pub fn to_bytes(&self) -> [u8; 32] {
        GeP2::from_p3(self).to_bytes()
    }

    /// Decompresses a 32-byte encoding into a point on the curve.
    ///
    /// Follows RFC 8032 §5.1.3: rejects non-canonical `y >= p` encodings
    /// outright, recovers `x² = (y² - 1) / (d*y² + 1)`, takes a candidate
    /// square root via [`FieldElement::pow22523`], corrects by `SQRTM1` if
    /// the first candidate is wrong by that factor, and rejects the
    /// encoding if `x` is still wrong, or if `x == 0` but the sign bit
    /// requested a negative root.
    pub fn decompress(bytes: &[u8; 32]) -> Result<Self, Error> {
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;
        if !field_element_is_canonical(&y_bytes) {
            return Err(Error::FieldOutOfRange);
        }

        let y = FieldElement::from_bytes(bytes);
        let z = FieldElement::ONE;
        let y_sq = y.square();
        let u = y_sq - z;
        let v = D * y_sq + z;

        let v3 = v.square() * v;
        let v7 = v3.square() * v;
        let mut x = (u * v7).pow22523() * u * v3;

        let vxx = x.square() * v;
        let mut check = vxx - u;

        if check.is_non_zero() != 0 {
            check = vxx + u;
            if check.is_non_zero() != 0 {
                return Err(Error::NotOnCurve);
            }
            x = x * crate::edwards::SQRTM1;
        }

        let sign_requested = (bytes[31] >> 7) & 1;
        if x.is_non_zero() == 0 && sign_requested == 1 {
            return Err(Error::NotOnCurve);
        }

        if x.is_negative() as u8 != sign_requested {
            x = -x;
        }

        let t = x * y;

        Ok(GeP3 { x, y, z, t })
    }

    /// The standard Ed25519 base point, decompressed from its fixed
    /// 32-byte encoding.
    pub fn base_point() -> Self {
        Self::decompress(&BASE_POINT_BYTES).expect("base point encoding is a valid curve point")
    }

    /// Scalar multiplication `[scalar] self`, by double-and-add over the
    /// bits of `scalar` from most to least significant.
    pub fn scalar_mul(&self, scalar: &Scalar) -> Self {
        let cached = GeCached::from_p3(self);
        let bytes = scalar.to_bytes();
        let mut acc = GeP3::IDENTITY;

        for bit_index in (0..256).rev() {
            acc = GeP3::from_p1(&acc.double());

            let byte = bytes[bit_index / 8];
            let bit = (byte >> (bit_index % 8)) & 1;
            if bit == 1 {
                acc = acc.add(&cached);
            }
        }

        acc
    }

    /// Scalar multiplication `[scalar] B` against the fixed base point.
    pub fn scalar_mul_base(scalar: &Scalar) -> Self {
        Self::base_point().scalar_mul(scalar)
    }

    /// Computes `(-a)*self + b*B`, the combination checked during
    /// signature verification (`R ?= s*B - h*A`, called as
    /// `A.double_scalar_mul(h, s)`).
    ///
    /// Uses the sliding-window vartime double-scalar multiplication
    /// below rather than two independent scalar multiplications, so both
    /// terms share one doubling chain.
    pub fn double_scalar_mul(&self, a: Scalar, b: Scalar) -> GeP2 {
        Self::vartime_double_scalar_mul(&self.negate(), a, &GeP3::base_point(), b)
    }

    /// Precomputes the odd multiples `P, 3P, 5P, ..., 15P` of `p` in
    /// cached mixed-addition form, indexed so that a sliding-window digit
    /// `d` (odd, `|d| <= 15`) looks up `table[d/2]` (integer division).
    fn odd_multiples_cached(p: &GeP3) -> [GeCached; 8] {
        let double_p = GeP3::from_p1(&p.double());
        let mut table = [GeCached::from_p3(p); 8];
        let mut prev = *p;

        for slot in table.iter_mut().skip(1) {
            let next = GeP3::from_p1(&GeP1::from_sum(&double_p, &GeCached::from_p3(&prev)));
            *slot = GeCached::from_p3(&next);
            prev = next;
        }

        table
    }

    /// Vartime `a*p + b*q`, the workhorse behind [`GeP3::double_scalar_mul`].
    ///
    /// Recodes both scalars into base-2 signed sliding-window digits
    /// (window 6, digits in `[-15, 15]`, odd or zero) via
    /// [`Scalar::slide`], precomputes the odd multiples of each point, and
    /// walks the recoded digits from the highest set bit down, doubling
    /// once per digit and adding/subtracting the appropriate precomputed
    /// multiple whenever a digit is non-zero. Intentionally not
    /// constant-time: the digit values and the zero/non-zero branches
    /// both depend on the (public, in this crate's use) scalars `a`/`b`.
    fn vartime_double_scalar_mul(p: &GeP3, a: Scalar, q: &GeP3, b: Scalar) -> GeP2 {
        let a_digits = a.slide();
        let b_digits = b.slide();

        let p_table = Self::odd_multiples_cached(p);
        let q_table = Self::odd_multiples_cached(q);

        let mut top = 255usize;
        while top > 0 && a_digits[top] == 0 && b_digits[top] == 0 {
            top -= 1;
        }

        let mut acc = GeP3::IDENTITY;
        for i in (0..=top).rev() {
            acc = GeP3::from_p1(&acc.double());

            match a_digits[i] {
                d if d > 0 => acc = acc.add(&p_table[(d as usize) / 2]),
                d if d < 0 => acc = acc.sub(&p_table[((-d) as usize) / 2]),
                _ => {}
            }

            match b_digits[i] {
                d if d > 0 => acc = acc.add(&q_table[(d as usize) / 2]),
                d if d < 0 => acc = acc.sub(&q_table[((-d) as usize) / 2]),
                _ => {}
            }
        }

        GeP2::from_p3(&acc)
    }
}

impl GeCached {
    pub(crate) fn from_p3(g: &GeP3) -> Self {
        GeCached {
            yplusx: g.y + g.x,
            yminusx: g.y - g.x,
            z: g.z,
            t2d: g.t * D2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_round_trips_through_compression() {
        let b = GeP3::base_point();
        assert_eq!(b.to_bytes(), BASE_POINT_BYTES);
    }

    #[test]
    fn scalar_mul_by_zero_is_identity() {
        let zero = Scalar::from_bytes(&[0u8; 32]);
        let b = GeP3::base_point();
        let result = b.scalar_mul(&zero);
        assert_eq!(result.to_bytes(), GeP3::IDENTITY.to_bytes());
    }

    #[test]
    fn scalar_mul_by_one_is_identity_map() {
        let mut one_bytes = [0u8; 32];
        one_bytes[0] = 1;
        let one = Scalar::from_bytes(&one_bytes);
        let b = GeP3::base_point();
        assert_eq!(b.scalar_mul(&one).to_bytes(), b.to_bytes());
    }

    #[test]
    fn scalar_mul_base_matches_direct_scalar_mul_on_base_point() {
        let mut bytes = [0u8; 32];
        bytes[0] = 5;
        let scalar = Scalar::from_bytes(&bytes);
        let via_base = GeP3::scalar_mul_base(&scalar);
        let via_direct = GeP3::base_point().scalar_mul(&scalar);
        assert_eq!(via_base.to_bytes(), via_direct.to_bytes());
    }

    #[test]
    fn double_scalar_mul_matches_naive_negate_and_add() {
        let mut a_bytes = [0u8; 32];
        a_bytes[0] = 11;
        a_bytes[5] = 200;
        let a = Scalar::from_bytes(&a_bytes);

        let mut b_bytes = [0u8; 32];
        b_bytes[1] = 3;
        b_bytes[10] = 77;
        let b = Scalar::from_bytes(&b_bytes);

        let base = GeP3::base_point();
        let via_windowed = base.double_scalar_mul(a, b).to_bytes();

        let naive = base.negate().scalar_mul(&a).add_point(&GeP3::scalar_mul_base(&b));
        assert_eq!(via_windowed, naive.to_bytes());
    }

    #[test]
    fn double_scalar_mul_with_zero_scalars_is_identity() {
        let base = GeP3::base_point();
        let zero = Scalar::from_bytes(&[0u8; 32]);
        assert_eq!(
            base.double_scalar_mul(zero, zero).to_bytes(),
            GeP3::IDENTITY.to_bytes()
        );
    }

    #[test]
    fn scalar_mul_distributes_over_scalar_addition() {
        let mut k1_bytes = [0u8; 32];
        k1_bytes[0] = 42;
        k1_bytes[3] = 7;
        let k1 = Scalar::from_bytes(&k1_bytes);

        let mut k2_bytes = [0u8; 32];
        k2_bytes[1] = 19;
        k2_bytes[9] = 3;
        let k2 = Scalar::from_bytes(&k2_bytes);

        let mut one_bytes = [0u8; 32];
        one_bytes[0] = 1;
        let one = Scalar::from_bytes(&one_bytes);
        let sum = Scalar::from_mul_sum(one, k1, k2);

        let base = GeP3::base_point();
        let lhs = base.scalar_mul(&sum);
        let rhs = base.scalar_mul(&k1).add_point(&base.scalar_mul(&k2));

        assert_eq!(lhs.to_bytes(), rhs.to_bytes());
    }

    #[test]
    fn scalar_mul_by_group_order_is_identity() {
        // ℓ = 2^252 + 27742317777372353535851937790883648493, the order of
        // the Ed25519 base point's subgroup.
        let ell = Scalar::from_bytes(&[
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ]);

        let result = GeP3::base_point().scalar_mul(&ell);
        assert_eq!(result.to_bytes(), GeP3::IDENTITY.to_bytes());
    }

    #[test]
    fn decompress_rejects_garbage() {
        // All-0xff is not a valid y-coordinate encoding of a curve point
        // with x matching the requested sign in general; at minimum this
        // must not panic.
        let bytes = [0xffu8; 32];
        let _ = GeP3::decompress(&bytes);
    }

    #[test]
    fn decompress_rejects_non_canonical_y() {
        // y = p (0xed, 0xff * 30, 0x7f little-endian) is out of range even
        // though it would reduce to 0 if silently accepted.
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xed;
        bytes[31] = 0x7f;
        assert!(matches!(
            GeP3::decompress(&bytes),
            Err(Error::FieldOutOfRange)
        ));
    }

    #[test]
    fn decompress_accepts_the_base_point_encoding() {
        assert!(GeP3::decompress(&BASE_POINT_BYTES).is_ok());
    }
}
