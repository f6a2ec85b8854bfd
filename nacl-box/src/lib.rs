//! nacl-box — public-key authenticated encryption, NaCl `crypto_box` style.
//!
//! Composes three primitives this crate does not implement:
//! Curve25519 (`x25519-dalek`), the HSalsa20 core (`salsa20`) and the
//! XSalsa20-Poly1305 secretbox (`crypto_secretbox`). Output is byte-for-byte
//! interoperable with NaCl, libsodium and tweetnacl.
//!
//! # Module Map
//!
//! | Module | NaCl equivalent |
//! |--------|-----------------|
//! | [`constants`] | `crypto_box_*BYTES` |
//! | [`keys`] | `crypto_box_keypair` |
//! | [`precompute`] | `crypto_box_beforenm` |
//! | [`seal`] | `crypto_box`, `crypto_box_open`, `*_afternm` |
//! | [`nonce`] | — |
//! | [`payload`] | — (`base64(nonce \|\| box)` framing) |
//! | [`encoding`] | — |
//! | [`errors`] | — |
//!
//! # Example
//!
//! ```
//! use nacl_box::{generate_key, open, seal, Nonce};
//! use rand_chacha::rand_core::SeedableRng;
//!
//! // Any `RngCore + CryptoRng` works; `generate_keypair` and `Nonce::random`
//! // use the OS source when the `os-rng` feature is on.
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
//! let alice = generate_key(&mut rng).unwrap();
//! let bob = generate_key(&mut rng).unwrap();
//! let nonce = Nonce::generate(&mut rng).unwrap();
//!
//! let sealed = seal(b"hello world", &nonce, &bob.public_key, &alice.private_key);
//! let opened = open(&sealed, &nonce, &alice.public_key, &bob.private_key).unwrap();
//! assert_eq!(opened, b"hello world");
//! ```
//!
//! Nonce uniqueness per key pair is the caller's job. Reusing a nonce for two
//! different messages breaks both confidentiality and authenticity.

/// Byte-size contracts.
pub mod constants;

/// Error types.
pub mod errors;

/// Encoding utilities — base64 and hex.
pub mod encoding;

/// Curve25519 key pairs.
pub mod keys;

/// Per-message nonces.
pub mod nonce;

/// Shared-key derivation.
pub mod precompute;

/// Seal / open.
pub mod seal;

/// Self-framing `base64(nonce || box)` payloads.
pub mod payload;

pub use constants::{NONCE_LENGTH, OVERHEAD, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
pub use errors::{BoxError, Result};
#[cfg(feature = "os-rng")]
pub use keys::generate_keypair;
pub use keys::{generate_key, KeyPair, PrivateKey, PublicKey};
pub use nonce::Nonce;
#[cfg(feature = "os-rng")]
pub use payload::seal_payload;
pub use payload::{open_payload, seal_payload_with_rng};
pub use precompute::{precompute, SharedKey};
pub use seal::{
    open, open_after_precomputation, open_after_precomputation_into, open_into, seal,
    seal_after_precomputation, seal_after_precomputation_into, seal_into,
};
