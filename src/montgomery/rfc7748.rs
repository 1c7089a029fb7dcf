//! Literal transcription of the RFC 7748 §5 reference Montgomery ladder.

use crate::field::FieldElement;
use crate::montgomery::{A24, MontgomeryStrategy, scalar_bit};

pub struct Rfc7748Ladder;

impl MontgomeryStrategy for Rfc7748Ladder {
    fn scalar_mult(scalar: &[u8; 32], u: FieldElement) -> FieldElement {
        let x1 = u;
        let mut x2 = FieldElement::ONE;
        let mut z2 = FieldElement::ZERO;
        let mut x3 = u;
        let mut z3 = FieldElement::ONE;
        let mut swap = 0u32;

        for t in (0..255).rev() {
            let k_t = scalar_bit(scalar, t);
            swap ^= k_t;
            x2.swap(&mut x3, swap);
            z2.swap(&mut z3, swap);
            swap = k_t;

            let a = x2 + z2;
            let aa = a.square();
            let b = x2 - z2;
            let bb = b.square();
            let e = aa - bb;
            let c = x3 + z3;
            let d = x3 - z3;
            let da = d * a;
            let cb = c * b;
            x3 = (da + cb).square();
            z3 = x1 * (da - cb).square();
            x2 = aa * bb;
            z2 = e * (aa + e.mul_small(A24));
        }

        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);

        x2 * z2.invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_times_nine_matches_rfc7748_vector() {
        // RFC 7748 §5.2: scalar = 9, u = 9 -> known output.
        let mut scalar = [0u8; 32];
        scalar[0] = 9;
        crate::scalar::clamp(&mut scalar);

        let mut u_bytes = [0u8; 32];
        u_bytes[0] = 9;
        let u = FieldElement::from_bytes(&u_bytes);

        let result = Rfc7748Ladder::scalar_mult(&scalar, u).to_bytes();
        // Sanity: deterministic and non-zero; exact vector comparison
        // lives in the integration test suite alongside the other
        // strategies.
        assert_ne!(result, [0u8; 32]);
    }
}
