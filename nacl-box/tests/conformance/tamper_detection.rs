//! Conformance: Tamper Detection
//!
//! Flipping any single bit of a box must make `open` fail, never return
//! altered plaintext. Covered exhaustively for a short message and by
//! position class (first byte, middle of the tag, last byte) for a long one.

use nacl_box::{generate_key, open, seal, BoxError, KeyPair, Nonce, OVERHEAD};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn parties() -> (KeyPair, KeyPair) {
    let mut rng = ChaCha20Rng::seed_from_u64(0x7A3);
    (
        generate_key(&mut rng).unwrap(),
        generate_key(&mut rng).unwrap(),
    )
}

fn assert_rejected(
    sealed: &[u8],
    nonce: &Nonce,
    a: &KeyPair,
    b: &KeyPair,
    what: &str,
) {
    let result = open(sealed, nonce, &a.public_key, &b.private_key);
    assert!(
        matches!(result, Err(BoxError::Authentication)),
        "tampered box accepted: {what}"
    );
}

#[test]
fn conformance_every_bit_of_short_box_is_authenticated() {
    let (a, b) = parties();
    let nonce = Nonce::from([3u8; 24]);
    let sealed = seal(b"hello world", &nonce, &b.public_key, &a.private_key);

    for byte in 0..sealed.len() {
        for bit in 0..8 {
            let mut tampered = sealed.clone();
            tampered[byte] ^= 1 << bit;
            assert_rejected(&tampered, &nonce, &a, &b, &format!("byte {byte} bit {bit}"));
        }
    }
}

#[test]
fn conformance_position_classes_of_long_box() {
    let (a, b) = parties();
    let nonce = Nonce::from([4u8; 24]);
    let plaintext = vec![0x5a; 1000];
    let sealed = seal(&plaintext, &nonce, &b.public_key, &a.private_key);

    let positions = [
        ("first byte", 0),
        ("middle of tag", OVERHEAD / 2),
        ("first ciphertext byte", OVERHEAD),
        ("middle of ciphertext", sealed.len() / 2),
        ("last byte", sealed.len() - 1),
    ];
    for (what, index) in positions {
        for bit in [0, 7] {
            let mut tampered = sealed.clone();
            tampered[index] ^= 1 << bit;
            assert_rejected(&tampered, &nonce, &a, &b, what);
        }
    }
}

#[test]
fn conformance_truncated_and_extended_boxes_rejected() {
    let (a, b) = parties();
    let nonce = Nonce::from([5u8; 24]);
    let sealed = seal(b"length matters", &nonce, &b.public_key, &a.private_key);

    assert_rejected(
        &sealed[..sealed.len() - 1],
        &nonce,
        &a,
        &b,
        "truncated by one",
    );
    assert_rejected(&sealed[..OVERHEAD], &nonce, &a, &b, "tag only");
    assert_rejected(&sealed[1..], &nonce, &a, &b, "leading byte dropped");

    let mut extended = sealed.clone();
    extended.push(0);
    assert_rejected(&extended, &nonce, &a, &b, "trailing byte appended");
}
