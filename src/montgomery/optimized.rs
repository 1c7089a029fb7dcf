//! Ladder restructured around a flat `(a, b, c, d)` state rather than the
//! conventional `(x2, z2, x3, z3)` naming.
//!
//! Each combination step here reduces immediately after every add/sub, so
//! there's no ambiguity between `a + (c mod p)` and `(a + c) mod p` of the
//! kind an operator-precedence slip could otherwise introduce: `c` is
//! already a reduced field element going in, and `FieldElement` addition
//! always produces a partially-reduced representative of the correct sum
//! coming out, full stop.
use crate::field::FieldElement;
use crate::montgomery::{A24, MontgomeryStrategy, scalar_bit};

pub struct OptimizedLadder;

impl MontgomeryStrategy for OptimizedLadder {
    fn scalar_mult(scalar: &[u8; 32], u: FieldElement) -> FieldElement {
        let mut a = FieldElement::ONE;
        let mut b = u;
        let mut c = FieldElement::ZERO;
        let mut d = FieldElement::ONE;

        let mut swap = 0u32;
        for t in (0..255).rev() {
            let k_t = scalar_bit(scalar, t);
            swap ^= k_t;
            a.swap(&mut b, swap);
            c.swap(&mut d, swap);
            swap = k_t;

            let e = a + c;
            let f = a - c;
            let g = b + d;
            let h = b - d;

            let ee = e.square();
            let ff = f.square();
            let gh = g * f;
            let eh = e * h;

            let e_diff = ee - ff;

            a = ee * ff;
            b = (gh + eh).square();
            c = e_diff * (ee + e_diff.mul_small(A24));
            d = u * (gh - eh).square();
        }

        a.swap(&mut b, swap);
        c.swap(&mut d, swap);

        a * c.invert()
    }
}
