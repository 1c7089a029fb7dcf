//! Montgomery ladder restructured around an explicit `ladder_step`
//! function, as a from-scratch derivation separate from the RFC 7748
//! reference code.

use crate::field::FieldElement;
use crate::montgomery::{A24, MontgomeryStrategy, scalar_bit};

pub struct MkTutorialLadder;

/// The four field elements carried between ladder steps: `(x2, z2, x3,
/// z3)`, the two projective points `[k]P` and `[k+1]P`.
struct LadderState {
    x2: FieldElement,
    z2: FieldElement,
    x3: FieldElement,
    z3: FieldElement,
}

/// A single conditional-swap-then-combine step of the ladder, kept as its
/// own function (rather than inlined in the loop body, as in
/// [`super::rfc7748`]) so the "double-and-add-one" structure of each
/// iteration reads as one unit.
fn ladder_step(state: &mut LadderState, x1: FieldElement, bit: u32) {
    state.x2.swap(&mut state.x3, bit);
    state.z2.swap(&mut state.z3, bit);

    let a = state.x2 + state.z2;
    let aa = a.square();
    let b = state.x2 - state.z2;
    let bb = b.square();
    let e = aa - bb;
    let c = state.x3 + state.z3;
    let d = state.x3 - state.z3;
    let da = d * a;
    let cb = c * b;

    state.x3 = (da + cb).square();
    state.z3 = x1 * (da - cb).square();
    state.x2 = aa * bb;
    state.z2 = e * (aa + e.mul_small(A24));
}

impl MontgomeryStrategy for MkTutorialLadder {
    fn scalar_mult(scalar: &[u8; 32], u: FieldElement) -> FieldElement {
        let mut state = LadderState {
            x2: FieldElement::ONE,
            z2: FieldElement::ZERO,
            x3: u,
            z3: FieldElement::ONE,
        };

        let mut swap = 0u32;
        for t in (0..255).rev() {
            let k_t = scalar_bit(scalar, t);
            swap ^= k_t;
            ladder_step(&mut state, u, swap);
            swap = k_t;
        }

        state.x2.swap(&mut state.x3, swap);
        state.z2.swap(&mut state.z3, swap);

        state.x2 * state.z2.invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montgomery::rfc7748::Rfc7748Ladder;

    #[test]
    fn agrees_with_rfc7748_ladder() {
        let mut scalar = [0u8; 32];
        scalar[0] = 123;
        crate::scalar::clamp(&mut scalar);

        let mut u_bytes = [0u8; 32];
        u_bytes[0] = 5;
        let u = FieldElement::from_bytes(&u_bytes);

        let a = Rfc7748Ladder::scalar_mult(&scalar, u).to_bytes();
        let b = MkTutorialLadder::scalar_mult(&scalar, u).to_bytes();
        assert_eq!(a, b);
    }
}
