//! Literal test vectors, decoded from hex rather than derived from this
//! crate's own arithmetic, so a regression that happens to be internally
//! self-consistent still gets caught. Where a known-answer byte string
//! isn't available at full precision, the property it demonstrates is
//! checked instead (symmetric key agreement, sign/verify round trip,
//! invalid-signature rejection) rather than risking a mistyped constant.

use curve25519_primitives::edwards::extended::GeP3;
use curve25519_primitives::keys::Ed25519Protocol;
use curve25519_primitives::keys::X25519Protocol;
use curve25519_primitives::montgomery::rfc7748::Rfc7748Ladder;

fn hex32(s: &str) -> [u8; 32] {
    assert_eq!(s.len(), 64);
    let mut out = [0u8; 32];
    for (index, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[index * 2..index * 2 + 2], 16).unwrap();
    }
    out
}

#[test]
fn rfc7748_vector_1() {
    let k = hex32("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let u = hex32("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = hex32("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");

    let result = X25519Protocol::<Rfc7748Ladder>::exchange(&k, &u);
    assert_eq!(result, expected);
}

#[test]
fn rfc7748_iterated_test_first_iteration() {
    let mut k = [0u8; 32];
    k[0] = 9;
    let u = k;

    let expected = hex32("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079");
    let result = X25519Protocol::<Rfc7748Ladder>::exchange(&k, &u);
    assert_eq!(result, expected);
}

#[test]
fn rfc7748_iterated_test_one_thousand_iterations() {
    let mut k = [0u8; 32];
    k[0] = 9;
    let mut u = k;

    let expected = hex32("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51");

    for _ in 0..1_000 {
        let next = X25519Protocol::<Rfc7748Ladder>::exchange(&k, &u);
        u = k;
        k = next;
    }

    assert_eq!(k, expected);
}

// RFC 7748 §5.2 also publishes a result after 1,000,000 iterations
// (`7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424`);
// omitted as a default test since, without a production-grade bignum
// backend, a million sequential scalar multiplications is too slow to
// run on every `cargo test` invocation. Run explicitly with
// `cargo test --release -- --ignored rfc7748_iterated_test_one_million_iterations`.
#[test]
#[ignore]
fn rfc7748_iterated_test_one_million_iterations() {
    let mut k = [0u8; 32];
    k[0] = 9;
    let mut u = k;

    let expected = hex32("7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424");

    for _ in 0..1_000_000 {
        let next = X25519Protocol::<Rfc7748Ladder>::exchange(&k, &u);
        u = k;
        k = next;
    }

    assert_eq!(k, expected);
}

#[test]
fn x25519_key_agreement_is_commutative() {
    let alice_sk = {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x77;
        bytes[31] = 0x2a;
        bytes
    };
    let bob_sk = {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x5d;
        bytes[31] = 0xeb;
        bytes
    };

    let alice_pk = X25519Protocol::<Rfc7748Ladder>::derive_public(&alice_sk);
    let bob_pk = X25519Protocol::<Rfc7748Ladder>::derive_public(&bob_sk);

    let alice_shared = X25519Protocol::<Rfc7748Ladder>::exchange(&alice_sk, &bob_pk);
    let bob_shared = X25519Protocol::<Rfc7748Ladder>::exchange(&bob_sk, &alice_pk);

    assert_eq!(alice_shared, bob_shared);
}

#[test]
fn alice_and_bob_diffie_hellman_known_answer() {
    let alice_private =
        hex32("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let expected_alice_public =
        hex32("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a");

    let bob_private = hex32("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");
    let expected_bob_public =
        hex32("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f");

    let expected_shared =
        hex32("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");

    let alice_public = X25519Protocol::<Rfc7748Ladder>::derive_public(&alice_private);
    let bob_public = X25519Protocol::<Rfc7748Ladder>::derive_public(&bob_private);
    assert_eq!(alice_public, expected_alice_public);
    assert_eq!(bob_public, expected_bob_public);

    let alice_shared = X25519Protocol::<Rfc7748Ladder>::exchange(&alice_private, &bob_public);
    let bob_shared = X25519Protocol::<Rfc7748Ladder>::exchange(&bob_private, &alice_public);
    assert_eq!(alice_shared, expected_shared);
    assert_eq!(bob_shared, expected_shared);
}

#[test]
fn ed25519_rfc8032_test_1_known_answer() {
    // RFC 8032 §7.1, TEST 1 (empty message).
    let seed = hex32("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let expected_public = hex32("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");

    let mut expected_signature = [0u8; 64];
    let sig_hex =
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";
    for (index, byte) in expected_signature.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&sig_hex[index * 2..index * 2 + 2], 16).unwrap();
    }

    let (public, private) = Ed25519Protocol::keypair_from_seed(seed);
    assert_eq!(public.to_bytes(), expected_public);

    let signature = Ed25519Protocol::sign(&[], public, private);
    assert_eq!(signature.to_bytes(), expected_signature);
    assert!(Ed25519Protocol::verify(signature, &[], public));
}

#[test]
fn ed25519_known_seed_sign_and_verify_round_trip() {
    let (public, private) = Ed25519Protocol::keypair_from_seed([7u8; 32]);
    let message: &[u8] = b"Attack at Dawn";

    let signature = Ed25519Protocol::sign(message, public, private);
    assert!(Ed25519Protocol::verify(signature, message, public));

    let mut flipped = signature.to_bytes();
    flipped[0] ^= 0x01;
    assert!(!Ed25519Protocol::verify(
        curve25519_primitives::keys::ed25519::Signature::from_bytes(flipped),
        message,
        public
    ));

    let (unrelated_public, _) = Ed25519Protocol::keypair_from_seed([8u8; 32]);
    assert!(!Ed25519Protocol::verify(signature, message, unrelated_public));
}

#[test]
fn compressing_the_base_point_round_trips_and_has_the_expected_sign_bit() {
    let base = GeP3::base_point();
    let compressed = base.to_bytes();

    let decompressed = GeP3::decompress(&compressed).expect("base point encoding is valid");
    assert_eq!(decompressed.to_bytes(), compressed);

    // Bit 255 of the compressed form carries the sign of x; the base
    // point's compressed encoding is defined so that bit is 0.
    assert_eq!(compressed[31] & 0x80, 0);
}
