//! Conformance: End-to-End Scenario
//!
//! Key pairs A and B from a fixed deterministic source. A seals
//! "hello world" to B under the all-zero nonce; B recovers it exactly;
//! C, holding a different private key, cannot.

use nacl_box::{generate_key, open, seal, BoxError, Nonce, OVERHEAD};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn conformance_hello_world_from_a_to_b() {
    let mut rng = ChaCha20Rng::seed_from_u64(2012);
    let a = generate_key(&mut rng).unwrap();
    let b = generate_key(&mut rng).unwrap();
    let c = generate_key(&mut rng).unwrap();
    let nonce = Nonce::from([0u8; 24]);

    let sealed = seal(b"hello world", &nonce, &b.public_key, &a.private_key);
    assert_eq!(sealed.len(), b"hello world".len() + OVERHEAD);

    let opened = open(&sealed, &nonce, &a.public_key, &b.private_key).unwrap();
    assert_eq!(opened, b"hello world");

    let result = open(&sealed, &nonce, &a.public_key, &c.private_key);
    assert!(matches!(result, Err(BoxError::Authentication)));
}
