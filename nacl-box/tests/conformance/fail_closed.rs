//! Conformance: Fail-Closed Opening
//!
//! Every way a box can fail to open maps to the same error, and the
//! append-style API never leaks derived bytes into the caller's buffer.

use nacl_box::{
    generate_key, open, open_after_precomputation_into, open_into, precompute, seal, BoxError,
    Nonce, OVERHEAD,
};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn conformance_failures_are_indistinguishable() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xFA11);
    let a = generate_key(&mut rng).unwrap();
    let b = generate_key(&mut rng).unwrap();
    let c = generate_key(&mut rng).unwrap();
    let nonce = Nonce::from([1u8; 24]);
    let sealed = seal(b"indistinguishable", &nonce, &b.public_key, &a.private_key);

    let mut tampered = sealed.clone();
    tampered[OVERHEAD + 2] ^= 0x80;

    let failures = [
        open(&sealed, &nonce, &c.public_key, &b.private_key),
        open(
            &sealed,
            &Nonce::from([2u8; 24]),
            &a.public_key,
            &b.private_key,
        ),
        open(&tampered, &nonce, &a.public_key, &b.private_key),
        open(
            &sealed[..OVERHEAD - 1],
            &nonce,
            &a.public_key,
            &b.private_key,
        ),
        open(&[], &nonce, &a.public_key, &b.private_key),
    ];
    for result in failures {
        let err = result.unwrap_err();
        assert!(matches!(err, BoxError::Authentication));
        assert_eq!(err.to_string(), "Authentication failed");
    }
}

#[test]
fn conformance_output_buffer_untouched_on_failure() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xFA12);
    let a = generate_key(&mut rng).unwrap();
    let b = generate_key(&mut rng).unwrap();
    let nonce = Nonce::from([9u8; 24]);
    let mut sealed = seal(&[0xAA; 256], &nonce, &b.public_key, &a.private_key);
    sealed[0] ^= 0x01;

    let mut out = Vec::with_capacity(512);
    out.extend_from_slice(b"existing");
    assert!(open_into(&mut out, &sealed, &nonce, &a.public_key, &b.private_key).is_err());
    assert_eq!(out, b"existing");

    let shared = precompute(&a.public_key, &b.private_key);
    assert!(open_after_precomputation_into(&mut out, &sealed, &nonce, &shared).is_err());
    assert_eq!(out, b"existing");
}
