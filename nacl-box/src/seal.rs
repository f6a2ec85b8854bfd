//! Box sealing and opening — NaCl `crypto_box` / `crypto_box_open`.
//!
//! Wire format of a box: `tag(16) || ciphertext`, exactly what NaCl,
//! libsodium (combined mode) and tweetnacl produce. The nonce is not part
//! of the box; it travels out of band (see [`crate::payload`] for a
//! self-framing alternative).
//!
//! Every function here is a pure function of its inputs. The `*_into`
//! variants append to a caller-owned buffer instead of allocating; the
//! borrow checker rules out input/output aliasing.
//!
//! ## Failure
//! Opening fails closed with [`BoxError::Authentication`] for any reason:
//! wrong key, wrong nonce, tampering, or input shorter than [`OVERHEAD`].
//! Callers cannot tell these apart, and on failure the output buffer holds
//! no derived plaintext.

use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{AeadInPlace, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;
use zeroize::Zeroize;

use crate::constants::OVERHEAD;
use crate::errors::BoxError;
use crate::keys::{PrivateKey, PublicKey};
use crate::nonce::Nonce;
use crate::precompute::{precompute, SharedKey};

fn secretbox(shared_key: &SharedKey) -> XSalsa20Poly1305 {
    XSalsa20Poly1305::new(GenericArray::from_slice(shared_key.as_bytes()))
}

/// Encrypt and authenticate `plaintext` for `peer_public_key`.
///
/// Output is `plaintext.len() + OVERHEAD` bytes. Never fails.
pub fn seal(
    plaintext: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    own_private_key: &PrivateKey,
) -> Vec<u8> {
    let shared_key = precompute(peer_public_key, own_private_key);
    seal_after_precomputation(plaintext, nonce, &shared_key)
}

/// [`seal`] with a key from [`precompute`].
pub fn seal_after_precomputation(
    plaintext: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(plaintext.len() + OVERHEAD);
    seal_after_precomputation_into(&mut out, plaintext, nonce, shared_key);
    out
}

/// [`seal`], appending the box to `out`.
pub fn seal_into(
    out: &mut Vec<u8>,
    plaintext: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    own_private_key: &PrivateKey,
) {
    let shared_key = precompute(peer_public_key, own_private_key);
    seal_after_precomputation_into(out, plaintext, nonce, &shared_key);
}

/// [`seal_after_precomputation`], appending the box to `out`.
pub fn seal_after_precomputation_into(
    out: &mut Vec<u8>,
    plaintext: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) {
    let start = out.len();
    out.reserve(plaintext.len() + OVERHEAD);
    out.resize(start + OVERHEAD, 0);
    out.extend_from_slice(plaintext);

    // The secretbox layer only errors on non-empty associated data, which
    // this layer never passes.
    let tag = secretbox(shared_key)
        .encrypt_in_place_detached(
            GenericArray::from_slice(nonce.as_bytes()),
            b"",
            &mut out[start + OVERHEAD..],
        )
        .expect("secretbox encryption without associated data is infallible");
    out[start..start + OVERHEAD].copy_from_slice(tag.as_slice());

    tracing::trace!(plaintext_len = plaintext.len(), "sealed box");
}

/// Verify and decrypt a box produced by [`seal`] with the matching keys.
///
/// Output is `sealed.len() - OVERHEAD` bytes.
///
/// # Errors
/// `BoxError::Authentication` if the box does not verify.
pub fn open(
    sealed: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    own_private_key: &PrivateKey,
) -> Result<Vec<u8>, BoxError> {
    let shared_key = precompute(peer_public_key, own_private_key);
    open_after_precomputation(sealed, nonce, &shared_key)
}

/// [`open`] with a key from [`precompute`].
///
/// # Errors
/// `BoxError::Authentication` if the box does not verify.
pub fn open_after_precomputation(
    sealed: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) -> Result<Vec<u8>, BoxError> {
    let mut out = Vec::with_capacity(sealed.len().saturating_sub(OVERHEAD));
    open_after_precomputation_into(&mut out, sealed, nonce, shared_key)?;
    Ok(out)
}

/// [`open`], appending the plaintext to `out`.
///
/// # Errors
/// `BoxError::Authentication` if the box does not verify; `out` is then
/// left exactly as it was.
pub fn open_into(
    out: &mut Vec<u8>,
    sealed: &[u8],
    nonce: &Nonce,
    peer_public_key: &PublicKey,
    own_private_key: &PrivateKey,
) -> Result<(), BoxError> {
    let shared_key = precompute(peer_public_key, own_private_key);
    open_after_precomputation_into(out, sealed, nonce, &shared_key)
}

/// [`open_after_precomputation`], appending the plaintext to `out`.
///
/// # Errors
/// `BoxError::Authentication` if the box does not verify; `out` is then
/// left exactly as it was.
pub fn open_after_precomputation_into(
    out: &mut Vec<u8>,
    sealed: &[u8],
    nonce: &Nonce,
    shared_key: &SharedKey,
) -> Result<(), BoxError> {
    if sealed.len() < OVERHEAD {
        tracing::debug!(sealed_len = sealed.len(), "box open failed");
        return Err(BoxError::Authentication);
    }
    let (tag, ciphertext) = sealed.split_at(OVERHEAD);

    let start = out.len();
    out.extend_from_slice(ciphertext);
    let verified = secretbox(shared_key).decrypt_in_place_detached(
        GenericArray::from_slice(nonce.as_bytes()),
        b"",
        &mut out[start..],
        GenericArray::from_slice(tag),
    );

    if verified.is_err() {
        out[start..].zeroize();
        out.truncate(start);
        tracing::debug!(sealed_len = sealed.len(), "box open failed");
        return Err(BoxError::Authentication);
    }
    Ok(())
}
