//! Base32 codec for shared secrets
//!
//! Encoding emits unpadded RFC 4648 text, the form authenticator apps
//! expect inside `otpauth://` URIs. Decoding is lenient in the same way
//! those apps are:
//! 1. Remove all whitespace characters
//! 2. Apply padding to 8-character boundaries
//! 3. Decode case-insensitively

use crate::error::OtpError;
use data_encoding::{BASE32, BASE32_NOPAD};

/// Clean whitespace from input string
fn clean(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Pad input string to 8-character boundaries
///
/// Formula: padding_length = (8 - (len % 8)) % 8
fn pad(input: &str) -> String {
    let padding_len = (8 - (input.len() % 8)) % 8;
    format!("{}{}", input, "=".repeat(padding_len))
}

/// Encode raw bytes as unpadded Base32
pub fn encode_base32(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}

/// Decode Base32 text to bytes
///
/// Accepts padded or unpadded input in any case, with embedded whitespace.
/// Input that decodes to no bytes at all (blank, whitespace or padding
/// only) is rejected, since it cannot serve as an HMAC key.
pub fn decode_base32(input: &str) -> Result<Vec<u8>, OtpError> {
    let cleaned = clean(input);

    // Callers may already have padded the input
    let padded = pad(cleaned.trim_end_matches('='));

    let bytes = BASE32
        .decode(padded.to_uppercase().as_bytes())
        .map_err(|_| OtpError::InvalidBase32)?;

    if bytes.is_empty() {
        return Err(OtpError::InvalidBase32);
    }

    Ok(bytes)
}
