//! 24-byte XSalsa20 nonces.
//!
//! Uniqueness per key pair is the caller's responsibility; nothing here
//! tracks which nonces have been used. A counter or a fresh random value
//! per message both work, the nonce is long enough that random collisions
//! are negligible.

use std::fmt;

use rand_core::{CryptoRng, RngCore};

use crate::constants::NONCE_LENGTH;
use crate::encoding::{hex_to_array, to_hex};
use crate::errors::BoxError;

/// Per-message nonce (24 bytes). Public; travels alongside the box.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_LENGTH]);

impl Nonce {
    /// Draw a fresh nonce from `rng`.
    ///
    /// # Errors
    /// `BoxError::RandomSource` if `rng` fails.
    pub fn generate<R>(rng: &mut R) -> Result<Self, BoxError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; NONCE_LENGTH];
        if let Err(err) = rng.try_fill_bytes(&mut bytes) {
            tracing::warn!(error = %err, "random source failed during nonce generation");
            return Err(err.into());
        }
        Ok(Self(bytes))
    }

    /// Draw a fresh nonce from the operating system CSPRNG.
    ///
    /// # Errors
    /// `BoxError::RandomSource` if the OS entropy source fails.
    #[cfg(feature = "os-rng")]
    pub fn random() -> Result<Self, BoxError> {
        Self::generate(&mut rand_core::OsRng)
    }

    /// Borrow the raw nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_LENGTH] {
        &self.0
    }

    /// Parse a 48-character hex string.
    ///
    /// # Errors
    /// `BoxError::Encoding` or `BoxError::InvalidLength`.
    pub fn from_hex(encoded: &str) -> Result<Self, BoxError> {
        hex_to_array(encoded).map(Self)
    }
}

impl From<[u8; NONCE_LENGTH]> for Nonce {
    fn from(bytes: [u8; NONCE_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = BoxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; NONCE_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| BoxError::InvalidLength {
                expected: NONCE_LENGTH,
                actual: bytes.len(),
            })
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", to_hex(&self.0))
    }
}
