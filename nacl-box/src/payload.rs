//! Self-framing sealed payloads.
//!
//! Wire format: `base64(nonce || box)`, standard alphabet with padding.
//! A fresh random nonce is drawn for every payload, so callers that use
//! this layer never manage nonces themselves.

use rand_core::{CryptoRng, RngCore};

use crate::constants::{NONCE_LENGTH, OVERHEAD};
use crate::encoding::{from_base64, to_base64};
use crate::errors::BoxError;
use crate::keys::{PrivateKey, PublicKey};
use crate::nonce::Nonce;
use crate::seal::{open, seal_into};

/// Seal `plaintext` under a fresh nonce drawn from `rng`.
///
/// # Errors
/// `BoxError::RandomSource` if `rng` fails to produce a nonce.
pub fn seal_payload_with_rng<R>(
    plaintext: &[u8],
    peer_public_key: &PublicKey,
    own_private_key: &PrivateKey,
    rng: &mut R,
) -> Result<String, BoxError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let nonce = Nonce::generate(rng)?;

    let mut combined = Vec::with_capacity(NONCE_LENGTH + plaintext.len() + OVERHEAD);
    combined.extend_from_slice(nonce.as_bytes());
    seal_into(
        &mut combined,
        plaintext,
        &nonce,
        peer_public_key,
        own_private_key,
    );

    Ok(to_base64(&combined))
}

/// Seal `plaintext` under a fresh nonce from the OS CSPRNG.
///
/// # Errors
/// `BoxError::RandomSource` if the OS entropy source fails.
#[cfg(feature = "os-rng")]
pub fn seal_payload(
    plaintext: &[u8],
    peer_public_key: &PublicKey,
    own_private_key: &PrivateKey,
) -> Result<String, BoxError> {
    seal_payload_with_rng(
        plaintext,
        peer_public_key,
        own_private_key,
        &mut rand_core::OsRng,
    )
}

/// Open a payload produced by [`seal_payload`].
///
/// # Errors
/// - `BoxError::Encoding` if `sealed` is not valid base64.
/// - `BoxError::Authentication` if the payload is shorter than a nonce or
///   the box does not verify.
pub fn open_payload(
    sealed: &str,
    peer_public_key: &PublicKey,
    own_private_key: &PrivateKey,
) -> Result<Vec<u8>, BoxError> {
    let data = from_base64(sealed)?;
    if data.len() < NONCE_LENGTH {
        tracing::debug!(payload_len = data.len(), "payload shorter than nonce");
        return Err(BoxError::Authentication);
    }

    let (nonce, boxed) = data.split_at(NONCE_LENGTH);
    let nonce = Nonce::try_from(nonce)?;
    open(boxed, &nonce, peer_public_key, own_private_key)
}
