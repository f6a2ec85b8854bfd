//! Shared-key derivation (`crypto_box_beforenm`).
//!
//! ```text
//! raw    = X25519(own_private_key, peer_public_key)
//! shared = HSalsa20(key = raw, input = [0u8; 16], constant = "expand 32-byte k")
//! ```
//!
//! Raw ECDH output is never used as a symmetric key directly. The mixing
//! input and constant are identical on every call; only `raw` varies.
//!
//! Deriving once and calling the `*_after_precomputation` functions skips
//! the scalar multiplication for every further message to the same peer.

use std::fmt;

use salsa20::cipher::consts::{U10, U16};
use salsa20::cipher::generic_array::GenericArray;
use salsa20::hsalsa;
use x25519_dalek::x25519;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{HSALSA_INPUT_LENGTH, SHARED_KEY_LENGTH};
use crate::errors::BoxError;
use crate::keys::{PrivateKey, PublicKey};
use crate::nonce::Nonce;

/// Symmetric key shared by two key pairs. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey([u8; SHARED_KEY_LENGTH]);

impl SharedKey {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SHARED_KEY_LENGTH] {
        &self.0
    }

    /// Seal with this key. See [`crate::seal::seal_after_precomputation`].
    pub fn seal(&self, plaintext: &[u8], nonce: &Nonce) -> Vec<u8> {
        crate::seal::seal_after_precomputation(plaintext, nonce, self)
    }

    /// Open with this key. See [`crate::seal::open_after_precomputation`].
    ///
    /// # Errors
    /// `BoxError::Authentication` if the box does not verify.
    pub fn open(&self, sealed: &[u8], nonce: &Nonce) -> Result<Vec<u8>, BoxError> {
        crate::seal::open_after_precomputation(sealed, nonce, self)
    }
}

impl From<[u8; SHARED_KEY_LENGTH]> for SharedKey {
    fn from(bytes: [u8; SHARED_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey([REDACTED])")
    }
}

/// Derive the key `own_private_key` shares with `peer_public_key`.
///
/// Symmetric: `precompute(b.pub, a.priv) == precompute(a.pub, b.priv)`.
pub fn precompute(peer_public_key: &PublicKey, own_private_key: &PrivateKey) -> SharedKey {
    let raw = Zeroizing::new(x25519(
        *own_private_key.as_bytes(),
        peer_public_key.to_bytes(),
    ));
    let input: GenericArray<u8, U16> = GenericArray::from([0u8; HSALSA_INPUT_LENGTH]);
    let mut mixed = hsalsa::<U10>(GenericArray::from_slice(raw.as_slice()), &input);

    let mut key = [0u8; SHARED_KEY_LENGTH];
    key.copy_from_slice(mixed.as_slice());
    mixed.as_mut_slice().zeroize();
    SharedKey(key)
}
