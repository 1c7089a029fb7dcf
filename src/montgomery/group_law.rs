//! Scalar multiplication via the explicit affine Montgomery-curve group
//! law, `v² = u³ + A u² + u` with `A = 486662`, rather than a ladder.
//!
//! This exists purely to cross-validate the three ladders in
//! [`super::rfc7748`], [`super::mk_tutorial`], and [`super::optimized`]
//! against a structurally unrelated derivation: it recovers a `v`
//! coordinate via [`FieldElement::tonelli`], performs ordinary
//! double-and-add with the textbook Montgomery addition/doubling
//! formulas, and discards `v` again at the end.

use crate::error::Error;
use crate::field::FieldElement;
use crate::montgomery::CURVE_A;

#[derive(Clone, Copy)]
enum AffinePoint {
    Identity,
    Point { u: FieldElement, v: FieldElement },
}

fn double(p: AffinePoint) -> AffinePoint {
    match p {
        AffinePoint::Identity => AffinePoint::Identity,
        AffinePoint::Point { u, v } => {
            if v.is_non_zero() == 0 {
                return AffinePoint::Identity;
            }

            let a = FieldElement::ONE.mul_small(CURVE_A);
            let three_u2 = u.square().mul_small(3);
            let two_a_u = a * u.mul_small(2);
            let numerator = three_u2 + two_a_u + FieldElement::ONE;
            let denominator = v.mul_small(2);
            let lambda = numerator * denominator.invert();

            let u3 = lambda.square() - a - u.mul_small(2);
            let v3 = lambda * (u - u3) - v;

            AffinePoint::Point { u: u3, v: v3 }
        }
    }
}

fn add(p: AffinePoint, q: AffinePoint) -> AffinePoint {
    match (p, q) {
        (AffinePoint::Identity, other) | (other, AffinePoint::Identity) => other,
        (AffinePoint::Point { u: u1, v: v1 }, AffinePoint::Point { u: u2, v: v2 }) => {
            if u1 == u2 {
                return if v1 == v2 {
                    double(p)
                } else {
                    AffinePoint::Identity
                };
            }

            let a = FieldElement::ONE.mul_small(CURVE_A);
            let lambda = (v2 - v1) * (u2 - u1).invert();
            let u3 = lambda.square() - a - u1 - u2;
            let v3 = lambda * (u1 - u3) - v1;

            AffinePoint::Point { u: u3, v: v3 }
        }
    }
}

/// Recovers a `v` such that `v² = u³ + A u² + u`, returning either root
/// (the ladder-based strategies only ever compare `u`, so the sign of `v`
/// carried through this derivation does not need to match theirs).
fn recover_point(u: FieldElement) -> Result<AffinePoint, Error> {
    let a = FieldElement::ONE.mul_small(CURVE_A);
    let rhs = u.square() * u + a * u.square() + u;
    let v = rhs.tonelli()?;
    Ok(AffinePoint::Point { u, v })
}

pub struct GroupLaw;

impl GroupLaw {
    /// Computes the u-coordinate of `[scalar] * (u : 1)` via the affine
    /// group law rather than a Montgomery ladder.
    pub fn scalar_mult(scalar: &[u8; 32], u: FieldElement) -> Result<FieldElement, Error> {
        let base = recover_point(u)?;
        let mut acc = AffinePoint::Identity;
        let mut addend = base;

        for byte in scalar.iter() {
            let mut b = *byte;
            for _ in 0..8 {
                if b & 1 == 1 {
                    acc = add(acc, addend);
                }
                addend = double(addend);
                b >>= 1;
            }
        }

        match acc {
            AffinePoint::Identity => Err(Error::PointAtInfinity),
            AffinePoint::Point { u, .. } => Ok(u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montgomery::MontgomeryStrategy;
    use crate::montgomery::rfc7748::Rfc7748Ladder;

    #[test]
    fn agrees_with_rfc7748_ladder_on_a_quadratic_residue_u() {
        // u must give a v with a square root; 9 (the conventional X25519
        // base point u-coordinate) is guaranteed to.
        let mut scalar = [0u8; 32];
        scalar[0] = 7;
        crate::scalar::clamp(&mut scalar);

        let mut u_bytes = [0u8; 32];
        u_bytes[0] = 9;
        let u = FieldElement::from_bytes(&u_bytes);

        let via_ladder = Rfc7748Ladder::scalar_mult(&scalar, u).to_bytes();
        let via_group_law = GroupLaw::scalar_mult(&scalar, u)
            .expect("u=9 has a valid v")
            .to_bytes();

        assert_eq!(via_ladder, via_group_law);
    }
}
