//! Error types for nacl-box.
//!
//! The core seal/open/precompute paths only ever surface
//! [`BoxError::Authentication`]. The remaining variants belong to key
//! generation and the conversion/payload helpers around the core.

/// Unified error type for all nacl-box operations.
#[derive(Debug, thiserror::Error)]
pub enum BoxError {
    /// The randomness source could not supply the requested bytes.
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// A box failed to verify under the given key and nonce.
    ///
    /// Carries no detail. Tampering, wrong key, wrong nonce and truncated
    /// input are indistinguishable to the caller.
    #[error("Authentication failed")]
    Authentication,

    /// Hex or base64 decoding failure.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A byte slice could not be converted into a fixed-size key or nonce.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl From<rand_core::Error> for BoxError {
    fn from(err: rand_core::Error) -> Self {
        BoxError::RandomSource(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoxError>;
