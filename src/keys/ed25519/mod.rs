//! Ed25519 signatures (RFC 8032), built on the field/scalar/Edwards-curve
//! primitives in [`crate::field`], [`crate::scalar`], and
//! [`crate::edwards`].
//!
//! `PublicKey` / `PrivateKey` / `Signature` newtypes wrap raw key and
//! signature bytes; `generate_keypair` / `keypair_from_seed` / `sign` /
//! `verify` / `add_scalar` / `exchange` cover keypair generation,
//! signing, verification, scalar-tweaked key derivation, and X25519
//! interop, all built directly on this crate's own
//! `field`/`scalar`/`edwards` modules.

use crate::edwards::extended::GeP3;
use crate::hash::sha512;
use crate::keys::x25519::X25519Protocol;
use crate::montgomery::rfc7748::Rfc7748Ladder;
use crate::rng::Csprng;
use crate::scalar::Scalar;

/// An Ed25519 public key: the compressed encoding of a curve point.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// An Ed25519 private key: the clamped signing scalar `a` plus the
/// deterministic-nonce prefix, both derived from a 32-byte seed's SHA-512
/// digest (RFC 8032 §5.1.5).
#[derive(Clone, Copy)]
pub struct PrivateKey {
    scalar: Scalar,
    prefix: [u8; 32],
}

impl PrivateKey {
    pub fn scalar(&self) -> Scalar {
        self.scalar
    }

    pub fn prefix(&self) -> [u8; 32] {
        self.prefix
    }

    /// Serializes as `scalar || prefix`, 64 bytes total. Not the original
    /// 32-byte seed: the seed cannot be recovered once expanded.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.scalar.to_bytes());
        out[32..].copy_from_slice(&self.prefix);
        out
    }
}

/// An Ed25519 signature: `R || S`, 64 bytes.
#[derive(Clone, Copy)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Signature(bytes)
    }

    /// Wraps a byte slice of arbitrary length, failing with
    /// `Error::BadSignatureLength` unless it is exactly 64 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, crate::error::Error> {
        let array: [u8; 64] = bytes
            .try_into()
            .map_err(|_| crate::error::Error::BadSignatureLength)?;
        Ok(Signature(array))
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

fn ct_eq_32(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Expands a 32-byte seed into `(scalar, prefix)` per RFC 8032 §5.1.5:
/// hash the seed with SHA-512, clamp the low half into a scalar, keep the
/// high half as the nonce-derivation prefix.
fn expand_seed(seed: [u8; 32]) -> (Scalar, [u8; 32]) {
    let digest = sha512(&seed);

    let mut scalar_bytes: [u8; 32] = digest[..32].try_into().unwrap();
    crate::scalar::clamp(&mut scalar_bytes);

    let prefix: [u8; 32] = digest[32..].try_into().unwrap();
    (Scalar::from_bytes(&scalar_bytes), prefix)
}

pub struct Ed25519Protocol;

impl Ed25519Protocol {
    /// Generates a fresh keypair from OS-seeded randomness.
    pub fn generate_keypair() -> (PublicKey, PrivateKey) {
        let mut seed = [0u8; 32];
        Csprng::new().fill_bytes(&mut seed);
        Self::keypair_from_seed(seed)
    }

    /// Deterministically derives a keypair from a 32-byte seed. Exposed
    /// separately from [`Ed25519Protocol::generate_keypair`] so tests can
    /// exercise fixed RFC 8032 seed/key/signature vectors.
    pub fn keypair_from_seed(seed: [u8; 32]) -> (PublicKey, PrivateKey) {
        let (scalar, prefix) = expand_seed(seed);
        let public = PublicKey(GeP3::scalar_mul_base(&scalar).to_bytes());
        (public, PrivateKey { scalar, prefix })
    }

    /// Signs `message` under `private`, per RFC 8032 §5.1.6.
    pub fn sign(message: &[u8], public: PublicKey, private: PrivateKey) -> Signature {
        let a = private.scalar();

        let mut r_input = Vec::with_capacity(32 + message.len());
        r_input.extend_from_slice(&private.prefix());
        r_input.extend_from_slice(message);
        let r = Scalar::reduce(sha512(&r_input));

        let r_bytes = GeP3::scalar_mul_base(&r).to_bytes();

        let mut k_input = Vec::with_capacity(64 + message.len());
        k_input.extend_from_slice(&r_bytes);
        k_input.extend_from_slice(&public.to_bytes());
        k_input.extend_from_slice(message);
        let k = Scalar::reduce(sha512(&k_input));

        let s = Scalar::from_mul_sum(k, a, r);

        let mut signature = [0u8; 64];
        signature[..32].copy_from_slice(&r_bytes);
        signature[32..].copy_from_slice(&s.to_bytes());
        Signature(signature)
    }

    /// Verifies `signature` over `message` under `public`, per RFC 8032
    /// §5.1.7.
    pub fn verify(signature: Signature, message: &[u8], public: PublicKey) -> bool {
        let bytes = signature.to_bytes();

        // RFC 8032's cofactored verification equation requires S to be a
        // canonically-reduced scalar; rejecting the top three bits here
        // catches obviously out-of-range encodings before they reach the
        // curve arithmetic.
        if (bytes[63] & 0b1110_0000) != 0 {
            return false;
        }

        let a_point = match GeP3::decompress(&public.to_bytes()) {
            Ok(point) => point,
            Err(_) => return false,
        };

        let mut h_input = Vec::with_capacity(64 + message.len());
        h_input.extend_from_slice(&bytes[..32]);
        h_input.extend_from_slice(&public.to_bytes());
        h_input.extend_from_slice(message);
        let h = Scalar::reduce(sha512(&h_input));

        let s_bytes: [u8; 32] = bytes[32..].try_into().unwrap();
        let s = Scalar::from_bytes(&s_bytes);

        let r_check: [u8; 32] = a_point.double_scalar_mul(h, s).to_bytes();
        let r_expected: [u8; 32] = bytes[..32].try_into().unwrap();

        ct_eq_32(&r_check, &r_expected)
    }

    /// Verifies a signature given as raw, untrusted wire bytes rather than
    /// already-typed [`Signature`]/[`PublicKey`] values. A signature that
    /// is not 64 bytes or a public key that is not 32 bytes fails
    /// verification rather than propagating an error, matching this
    /// crate's error-handling contract that `verify` swallows internal
    /// length/decompression failures into `false`.
    pub fn verify_bytes(sig: &[u8], message: &[u8], public: &[u8]) -> bool {
        let signature = match Signature::try_from_slice(sig) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        let public_bytes: [u8; 32] = match public.try_into() {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        Self::verify(signature, message, PublicKey::from_bytes(public_bytes))
    }

    /// Tweaks a public and/or private key by adding `scalar`, used for
    /// hierarchical/deterministic key derivation schemes built on top of
    /// Ed25519. Re-derives the private key's nonce prefix by hashing the
    /// tweaked scalar, since the original seed is not recoverable from an
    /// already-expanded key.
    pub fn add_scalar(
        public_key: Option<PublicKey>,
        private_key: Option<PrivateKey>,
        scalar: Scalar,
    ) -> (Option<PublicKey>, Option<PrivateKey>) {
        let one = Scalar::from_bytes(&{
            let mut b = [0u8; 32];
            b[0] = 1;
            b
        });

        let new_private = private_key.map(|pk| {
            let tweaked = Scalar::from_mul_sum(one, pk.scalar(), scalar);
            let mut prefix_input = Vec::with_capacity(32 + 32);
            prefix_input.extend_from_slice(&tweaked.to_bytes());
            prefix_input.extend_from_slice(&pk.prefix());
            let new_prefix: [u8; 32] = sha512(&prefix_input)[..32].try_into().unwrap();
            PrivateKey {
                scalar: tweaked,
                prefix: new_prefix,
            }
        });

        let new_public = match (public_key, new_private) {
            (_, Some(pk)) => Some(PublicKey(GeP3::scalar_mul_base(&pk.scalar()).to_bytes())),
            (Some(pub_key), None) => GeP3::decompress(&pub_key.to_bytes()).ok().map(|point| {
                let tweak_point = GeP3::scalar_mul_base(&scalar);
                PublicKey(point.add_point(&tweak_point).to_bytes())
            }),
            (None, None) => None,
        };

        (new_public, new_private)
    }

    /// Derives an X25519 shared secret from an Ed25519 keypair, by
    /// treating the Ed25519 signing scalar as an X25519 secret scalar
    /// directly. No Edwards-to-Montgomery coordinate conversion is
    /// applied here — `x25519::exchange` already expects a raw clamped
    /// scalar, so this function passes the signing scalar straight
    /// through against the peer's Montgomery public key.
    pub fn exchange(private: &PrivateKey, peer_x25519_public: &[u8; 32]) -> [u8; 32] {
        X25519Protocol::<Rfc7748Ladder>::exchange(&private.scalar().to_bytes(), peer_x25519_public)
    }
}
