//! Typed 32-byte key containers shared by the X25519 key-agreement API.
//!
//! `PrivateKey`, `PublicKey`, and `SharedKey` all carry an identical
//! `[u8; 32]` layout; they exist purely to give distinct static meaning to
//! otherwise-interchangeable byte strings, so a shared secret can't be
//! passed where a public key was expected and vice versa. Ed25519's own
//! key types ([`crate::keys::ed25519::PublicKey`] /
//! [`crate::keys::ed25519::PrivateKey`]) carry internal structure (a
//! clamped scalar plus nonce prefix) the X25519 side has no equivalent
//! for, so they are not unified with these — a phantom-tagged single
//! `Key<Tag>` was considered and dropped, matching this crate's general
//! avoidance of abstraction the underlying protocols don't need.

use crate::error::Error;
use crate::montgomery::MontgomeryStrategy;
use crate::montgomery::rfc7748::Rfc7748Ladder;
use crate::rng::Csprng;
use crate::scalar::clamp;

fn from_slice(bytes: &[u8]) -> Result<[u8; 32], Error> {
    bytes.try_into().map_err(|_| Error::InvalidKeyLength)
}

macro_rules! key32 {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Wraps exactly 32 bytes; any other length fails with
            /// `Error::InvalidKeyLength`.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
                from_slice(bytes).map($name)
            }

            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            pub fn to_bytes(&self) -> [u8; 32] {
                self.0
            }
        }
    };
}

key32!(PrivateKey);
key32!(PublicKey);
key32!(SharedKey);

impl PrivateKey {
    /// Generates a fresh private scalar from OS-seeded randomness. The
    /// returned bytes are not pre-clamped; clamping happens inside
    /// `compute_public`/`shared_secret`, matching RFC 7748 §5's
    /// separation of key storage from the clamping step.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        Csprng::new().fill_bytes(&mut bytes);
        PrivateKey(bytes)
    }
}

/// `compute_public(sk) = x25519(sk, encode(9))`: derives the public
/// u-coordinate for a secret scalar against the conventional base point,
/// using the RFC 7748 reference ladder.
pub fn compute_public(sk: &PrivateKey) -> PublicKey {
    let mut scalar = sk.to_bytes();
    clamp(&mut scalar);

    let mut base = [0u8; 32];
    base[0] = 9;
    let u = crate::field::FieldElement::from_bytes(&base);

    PublicKey(Rfc7748Ladder::scalar_mult(&scalar, u).to_bytes())
}

/// `shared_secret(sk, peer_pk) = x25519(sk, peer_pk)`.
pub fn shared_secret(sk: &PrivateKey, peer_pk: &PublicKey) -> SharedKey {
    let mut scalar = sk.to_bytes();
    clamp(&mut scalar);

    let u = crate::field::FieldElement::from_bytes(peer_pk.as_bytes());
    SharedKey(Rfc7748Ladder::scalar_mult(&scalar, u).to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_rejects_wrong_length() {
        assert_eq!(PublicKey::from_bytes(&[0u8; 31]), Err(Error::InvalidKeyLength));
        assert_eq!(PublicKey::from_bytes(&[0u8; 33]), Err(Error::InvalidKeyLength));
        assert!(PublicKey::from_bytes(&[0u8; 32]).is_ok());
    }

    #[test]
    fn compute_public_and_shared_secret_agree_both_ways() {
        let alice_sk = PrivateKey::from_bytes(&[0x11u8; 32]).unwrap();
        let bob_sk = PrivateKey::from_bytes(&[0x22u8; 32]).unwrap();

        let alice_pk = compute_public(&alice_sk);
        let bob_pk = compute_public(&bob_sk);

        let alice_shared = shared_secret(&alice_sk, &bob_pk);
        let bob_shared = shared_secret(&bob_sk, &alice_pk);

        assert_eq!(alice_shared.to_bytes(), bob_shared.to_bytes());
    }
}
