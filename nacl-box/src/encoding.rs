//! Encoding utilities — base64 and hex.
//!
//! Base64 uses the standard alphabet with padding (RFC 4648), the same
//! encoding tweetnacl-util emits, so sealed payloads move between
//! implementations unchanged. Hex is lowercase on output and accepts
//! either case on input.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::BoxError;

/// Encode bytes to standard base64 (RFC 4648, with padding).
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 to bytes.
///
/// # Errors
/// Returns `BoxError::Encoding` on invalid base64 input.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, BoxError> {
    STANDARD
        .decode(encoded)
        .map_err(|e| BoxError::Encoding(format!("invalid base64: {e}")))
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes.
///
/// # Errors
/// Returns `BoxError::Encoding` on odd length or non-hex characters.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, BoxError> {
    if encoded.len() % 2 != 0 {
        return Err(BoxError::Encoding("odd-length hex string".into()));
    }
    if !encoded.is_ascii() {
        return Err(BoxError::Encoding("non-ascii hex string".into()));
    }
    encoded
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            // Both bytes are ASCII, so the pair is valid UTF-8.
            let digits = std::str::from_utf8(pair).unwrap_or_default();
            u8::from_str_radix(digits, 16)
                .map_err(|e| BoxError::Encoding(format!("invalid hex: {e}")))
        })
        .collect()
}

/// Decode a hex string into a fixed-size array.
///
/// # Errors
/// `BoxError::Encoding` for malformed hex, `BoxError::InvalidLength` when
/// the decoded byte count is not `N`.
pub(crate) fn hex_to_array<const N: usize>(encoded: &str) -> Result<[u8; N], BoxError> {
    let bytes = from_hex(encoded)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| BoxError::InvalidLength {
        expected: N,
        actual,
    })
}
