//! Scalar arithmetic modulo the Ed25519 group order
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! Scalars are stored as 32 little-endian bytes, always fully reduced mod
//! `ℓ` once they leave this module's constructors. The reduction and
//! multiply-add routines use the same radix-2^21 unrolled-limb technique as
//! the field element routines in [`crate::field`], ported from the same
//! reference lineage.

use crate::field::{load_3, load_4};

/// A scalar modulo the Ed25519 group order `ℓ`, stored as 32 little-endian
/// bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Scalar(pub(crate) [u8; 32]);

/// Signed-digit recoding of a scalar into 256 entries in `[-15, 15]`, used
/// by sliding-window double-scalar multiplication.
pub(crate) type Slide = [i8; 256];

impl Scalar {
    /// Wraps 32 bytes as a scalar without reducing. Callers that cannot
    /// guarantee canonical reduction should use [`Scalar::reduce`] on a
    /// wider buffer instead.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Scalar(*bytes)
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Reduces a 64-byte little-endian integer modulo `ℓ`, as required when
    /// folding a SHA-512 digest down to a scalar (RFC 8032 §5.1.6 step 2,
    /// and the nonce/challenge derivations in steps 5/8).
    pub fn reduce(input: [u8; 64]) -> Self {
        let load_a = |offset: usize, shift: u32, wide: bool| -> i64 {
            let raw = if wide {
                load_4(&input[offset..]) as i64
            } else {
                load_3(&input[offset..]) as i64
            };
            raw >> shift
        };

        // Decompose the 512-bit input into 24 signed 21-bit limbs (two
        // interleaved 252-bit halves), matching ref10's sc_reduce. `wide`
        // picks a 4-byte vs. 3-byte load per limb exactly as ref10 does —
        // it is not derivable from the byte offset's alignment.
        let mut s = [0i64; 24];

        let positions: [(usize, u32, bool); 24] = [
            (0, 0, false),
            (2, 5, true),
            (5, 2, false),
            (7, 7, true),
            (10, 4, true),
            (13, 1, false),
            (15, 6, true),
            (18, 3, false),
            (21, 0, false),
            (23, 5, true),
            (26, 2, false),
            (28, 7, true),
            (31, 4, false),
            (34, 1, true),
            (36, 6, false),
            (39, 3, false),
            (42, 0, false),
            (44, 5, true),
            (47, 2, false),
            (49, 7, true),
            (52, 4, true),
            (55, 1, false),
            (57, 6, true),
            (60, 3, true),
        ];

        for (index, &(offset, shift, wide)) in positions.iter().enumerate() {
            s[index] = load_a(offset, shift, wide) & 0x1f_ffff;
        }
        // s23 keeps its high bits unmasked: the 512-bit input can never
        // carry a nonzero bit past it, so the later carry step folds it
        // in without discarding real data, matching ref10's unmasked s23.
        s[23] = load_a(60, 3, true);

        reduce_limbs(&mut s);

        let mut out = [0u8; 32];
        pack_limbs(&s[..12], &mut out);
        Scalar(out)
    }

    /// Computes `a * b + c mod ℓ`.
    pub fn from_mul_sum(a: Scalar, b: Scalar, c: Scalar) -> Self {
        let load_a = |bytes: &[u8; 32], offset: usize, shift: u32, wide: bool| -> i64 {
            let raw = if wide {
                load_4(&bytes[offset..]) as i64
            } else {
                load_3(&bytes[offset..]) as i64
            };
            (raw >> shift) & 0x1f_ffff
        };

        // Same (offset, shift, wide) triples as the first 12 limbs of
        // `reduce`, matching ref10's sc_muladd.
        let positions: [(usize, u32, bool); 12] = [
            (0, 0, false),
            (2, 5, true),
            (5, 2, false),
            (7, 7, true),
            (10, 4, true),
            (13, 1, false),
            (15, 6, true),
            (18, 3, false),
            (21, 0, false),
            (23, 5, true),
            (26, 2, false),
            (28, 7, true),
        ];

        let mut av = [0i64; 12];
        let mut bv = [0i64; 12];
        let mut cv = [0i64; 12];

        for (index, &(offset, shift, wide)) in positions.iter().enumerate() {
            av[index] = load_a(&a.0, offset, shift, wide);
            bv[index] = load_a(&b.0, offset, shift, wide);
            cv[index] = load_a(&c.0, offset, shift, wide);
        }

        let mut s = [0i64; 24];
        for i in 0..12 {
            for j in 0..12 {
                s[i + j] += av[i] * bv[j];
            }
        }
        for i in 0..12 {
            s[i] += cv[i];
        }

        reduce_limbs(&mut s);

        let mut out = [0u8; 32];
        pack_limbs(&s[..12], &mut out);
        Scalar(out)
    }

    /// Sliding-window signed-digit recoding, window size 6 (digits in
    /// `[-15, 15]`), used by double-scalar multiplication during
    /// verification.
    pub(crate) fn slide(&self) -> Slide {
        let mut r: Slide = [0i8; 256];

        for i in 0..256 {
            let byte = self.0[i / 8];
            r[i] = ((byte >> (i % 8)) & 1) as i8;
        }

        for i in 0..256 {
            if r[i] == 0 {
                continue;
            }

            for b in 1..=6usize {
                if i + b >= 256 {
                    break;
                }
                if r[i + b] == 0 {
                    continue;
                }

                if r[i] + (r[i + b] << b) <= 15 {
                    r[i] += r[i + b] << b;
                    r[i + b] = 0;
                } else if r[i] - (r[i + b] << b) >= -15 {
                    r[i] -= r[i + b] << b;
                    for k in (i + b)..256 {
                        if r[k] == 0 {
                            r[k] = 1;
                            break;
                        }
                        r[k] = 0;
                    }
                } else {
                    break;
                }
            }
        }

        r
    }
}

/// Multi-phase carry propagation reducing a 24-limb (21-bit) accumulator
/// modulo `ℓ`, using the reduction constants encoding `2^252 mod ℓ`.
fn reduce_limbs(s: &mut [i64; 24]) {
    const COEFFS: [i64; 6] = [666_643, 470_296, 654_183, -997_805, 136_657, -683_901];

    for i in (0..24).step_by(2) {
        carry(s, i);
    }
    for i in (1..24).step_by(2) {
        carry(s, i);
    }

    for i in (18..24).rev() {
        let hi = s[i];
        s[i] = 0;
        for (k, &c) in COEFFS.iter().enumerate() {
            s[i - 12 + k] += hi * c;
        }
    }

    for i in (0..18).step_by(2) {
        carry(s, i);
    }
    for i in (1..18).step_by(2) {
        carry(s, i);
    }

    for i in (12..18).rev() {
        let hi = s[i];
        s[i] = 0;
        for (k, &c) in COEFFS.iter().enumerate() {
            s[i - 12 + k] += hi * c;
        }
    }

    for i in 0..12 {
        carry(s, i);
    }
    for i in 0..12 {
        carry(s, i);
    }
}

#[inline(always)]
fn carry(s: &mut [i64; 24], i: usize) {
    let c = (s[i] + (1i64 << 20)) >> 21;
    s[i] -= c << 21;
    if i + 1 < 24 {
        s[i + 1] += c;
    }
}

fn pack_limbs(limbs: &[i64], out: &mut [u8; 32]) {
    // 12 limbs of 21 bits packed little-endian into 32 bytes (252 bits of
    // payload, matching ℓ's bit length).
    let mut acc: u128 = 0;
    let mut acc_bits = 0u32;
    let mut pos = 0usize;

    for &limb in limbs {
        acc |= (limb as u128) << acc_bits;
        acc_bits += 21;

        while acc_bits >= 8 && pos < 32 {
            out[pos] = (acc & 0xff) as u8;
            acc >>= 8;
            acc_bits -= 8;
            pos += 1;
        }
    }

    if pos < 32 && acc_bits > 0 {
        out[pos] = (acc & 0xff) as u8;
    }
}

/// RFC 7748 / RFC 8032 scalar clamping: clears the low 3 bits (cofactor
/// clearing), clears the top bit, and sets the second-highest bit.
pub fn clamp(bytes: &mut [u8; 32]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}
