//! Byte-size contracts — values shared with every NaCl `crypto_box` peer.
//!
//! These MUST stay exactly as NaCl, libsodium and tweetnacl define them.
//! A peer that disagrees on any of these cannot open our boxes.

use crypto_secretbox::aead::generic_array::typenum::Unsigned;
use crypto_secretbox::aead::AeadCore;
use crypto_secretbox::XSalsa20Poly1305;

/// Curve25519 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Curve25519 private key (scalar) length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Precomputed shared key length in bytes (`crypto_box_BEFORENMBYTES`).
pub const SHARED_KEY_LENGTH: usize = 32;

/// XSalsa20 nonce length in bytes.
pub const NONCE_LENGTH: usize = 24;

/// Bytes a box adds to its plaintext: the Poly1305 tag of the secretbox layer.
///
/// Taken from the symmetric layer, not re-derived here.
pub const OVERHEAD: usize = <<XSalsa20Poly1305 as AeadCore>::TagSize as Unsigned>::USIZE;

/// Input block length of the HSalsa20 mixing step applied to raw ECDH output.
pub const HSALSA_INPUT_LENGTH: usize = 16;
