//! Curve25519 key pairs.
//!
//! A [`PublicKey`] is `ScalarBaseMult(private_key)`. Private keys are raw
//! 32-byte scalars exactly as NaCl stores them; clamping happens inside the
//! scalar multiplication, so any 32 bytes form a valid private key.
//!
//! Key material is owned by the caller. [`PrivateKey`] is zeroized on drop
//! and never printed by `Debug`.

use std::fmt;
use std::str::FromStr;

use rand_core::{CryptoRng, RngCore};
use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
use crate::encoding::{hex_to_array, to_hex};
use crate::errors::BoxError;

/// Curve25519 public key (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Copy out the raw key bytes.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Parse a 64-character hex string.
    ///
    /// # Errors
    /// `BoxError::Encoding` or `BoxError::InvalidLength`.
    pub fn from_hex(encoded: &str) -> Result<Self, BoxError> {
        hex_to_array(encoded).map(Self)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = BoxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PUBLIC_KEY_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| BoxError::InvalidLength {
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            })
    }
}

impl FromStr for PublicKey {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Curve25519 private key (32-byte scalar). Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    /// Borrow the raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.0
    }

    /// `ScalarBaseMult(self)`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(x25519(self.0, X25519_BASEPOINT_BYTES))
    }

    /// Parse a 64-character hex string.
    ///
    /// # Errors
    /// `BoxError::Encoding` or `BoxError::InvalidLength`.
    pub fn from_hex(encoded: &str) -> Result<Self, BoxError> {
        let bytes = Zeroizing::new(hex_to_array::<PRIVATE_KEY_LENGTH>(encoded)?);
        Ok(Self(*bytes))
    }
}

impl From<[u8; PRIVATE_KEY_LENGTH]> for PrivateKey {
    fn from(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = BoxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PRIVATE_KEY_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| BoxError::InvalidLength {
                expected: PRIVATE_KEY_LENGTH,
                actual: bytes.len(),
            })
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Curve25519 key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// `ScalarBaseMult(private_key)`.
    pub public_key: PublicKey,
    /// Raw scalar.
    pub private_key: PrivateKey,
}

impl KeyPair {
    /// Rebuild a key pair from a stored private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            public_key,
            private_key,
        }
    }
}

/// Generate a key pair from caller-supplied randomness.
///
/// Reads exactly 32 bytes from `rng` into the private key and derives the
/// public key from it.
///
/// # Errors
/// Returns `BoxError::RandomSource` if `rng` cannot supply 32 bytes. No key
/// material escapes in that case; the partially filled buffer is wiped.
pub fn generate_key<R>(rng: &mut R) -> Result<KeyPair, BoxError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut scalar = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    if let Err(err) = rng.try_fill_bytes(&mut scalar[..]) {
        tracing::warn!(error = %err, "random source failed during key generation");
        return Err(err.into());
    }

    let keypair = KeyPair::from_private_key(PrivateKey(*scalar));
    tracing::trace!(public_key = %keypair.public_key, "generated key pair");
    Ok(keypair)
}

/// Generate a key pair from the operating system CSPRNG.
///
/// # Errors
/// Returns `BoxError::RandomSource` if the OS entropy source fails.
#[cfg(feature = "os-rng")]
pub fn generate_keypair() -> Result<KeyPair, BoxError> {
    generate_key(&mut rand_core::OsRng)
}
