use curve25519_primitives::montgomery::MontgomeryStrategy;
use curve25519_primitives::montgomery::group_law::GroupLaw;
use curve25519_primitives::montgomery::mk_tutorial::MkTutorialLadder;
use curve25519_primitives::montgomery::optimized::OptimizedLadder;
use curve25519_primitives::montgomery::rfc7748::Rfc7748Ladder;
use curve25519_primitives::rng::Csprng;
use curve25519_primitives::scalar::clamp;
use curve25519_primitives::keys::X25519Protocol;

fn random_clamped_scalar(rng: &mut Csprng) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    clamp(&mut bytes);
    bytes
}

#[test]
fn key_exchange_is_symmetric() {
    let mut rng = Csprng::new();
    let alice_private = random_clamped_scalar(&mut rng);
    let bob_private = random_clamped_scalar(&mut rng);

    let alice_public = X25519Protocol::<Rfc7748Ladder>::derive_public(&alice_private);
    let bob_public = X25519Protocol::<Rfc7748Ladder>::derive_public(&bob_private);

    let alice_shared = X25519Protocol::<Rfc7748Ladder>::exchange(&alice_private, &bob_public);
    let bob_shared = X25519Protocol::<Rfc7748Ladder>::exchange(&bob_private, &alice_public);

    assert_eq!(alice_shared, bob_shared);
}

#[test]
fn all_three_ladder_strategies_agree() {
    let mut rng = Csprng::new();
    let private = random_clamped_scalar(&mut rng);
    let peer_private = random_clamped_scalar(&mut rng);
    let peer_public = X25519Protocol::<Rfc7748Ladder>::derive_public(&peer_private);

    let via_rfc7748 = X25519Protocol::<Rfc7748Ladder>::exchange(&private, &peer_public);
    let via_mk_tutorial = X25519Protocol::<MkTutorialLadder>::exchange(&private, &peer_public);
    let via_optimized = X25519Protocol::<OptimizedLadder>::exchange(&private, &peer_public);

    assert_eq!(via_rfc7748, via_mk_tutorial);
    assert_eq!(via_rfc7748, via_optimized);
}

#[test]
fn group_law_agrees_with_ladder_on_conventional_base_point() {
    let mut rng = Csprng::new();
    let private = random_clamped_scalar(&mut rng);

    let mut base_u = [0u8; 32];
    base_u[0] = 9;
    let u = curve25519_primitives::field::FieldElement::from_bytes(&base_u);

    let via_ladder = Rfc7748Ladder::scalar_mult(&private, u).to_bytes();
    let via_group_law = GroupLaw::scalar_mult(&private, u)
        .expect("u=9 has a valid v")
        .to_bytes();

    assert_eq!(via_ladder, via_group_law);
}

#[test]
fn derive_public_is_deterministic_and_nonzero() {
    let mut rng = Csprng::new();
    let private = random_clamped_scalar(&mut rng);

    let public_a = X25519Protocol::<Rfc7748Ladder>::derive_public(&private);
    let public_b = X25519Protocol::<Rfc7748Ladder>::derive_public(&private);

    assert_eq!(public_a, public_b);
    assert_ne!(public_a, [0u8; 32]);
}
