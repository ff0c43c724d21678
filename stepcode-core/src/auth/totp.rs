//! TOTP (Time-based One-Time Password) generation
//!
//! Implements RFC 6238 on top of the RFC 4226 HOTP dynamic truncation.
//! The counter is either supplied explicitly or read from a [`Clock`].

use crate::auth::base32::decode_base32;
use crate::auth::clock::{current_counter, Clock, SystemClock};
use crate::auth::hmac::{hmac_sha1, DIGEST_LEN};
use crate::error::OtpError;
use crate::types::{OtpSecret, TotpToken};
use tracing::{debug, error};

/// Hash algorithm for TOTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha1,
}

impl HashAlgorithm {
    fn mac(&self, key: &[u8], message: &[u8]) -> [u8; DIGEST_LEN] {
        match self {
            Self::Sha1 => hmac_sha1(key, message),
        }
    }
}

/// Code shape used by the engine
///
/// Only the RFC defaults (6 digits, HMAC-SHA1) can be constructed; the
/// fields exist so callers can read what a code was derived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotpConfig {
    digits: u32,
    algorithm: HashAlgorithm,
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            digits: 6,
            algorithm: HashAlgorithm::Sha1,
        }
    }
}

impl TotpConfig {
    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn modulus(&self) -> u32 {
        10u32.pow(self.digits)
    }
}

/// Offset of the 4-byte window selected by dynamic truncation
///
/// The low nibble of the last digest byte, so always in `0..=15` and the
/// window `offset..offset + 4` never runs past index 18.
pub fn truncation_offset(digest: &[u8; DIGEST_LEN]) -> usize {
    (digest[DIGEST_LEN - 1] & 0x0F) as usize
}

/// RFC 4226 dynamic truncation to a non-negative 31-bit value
pub fn dynamic_truncate(digest: &[u8; DIGEST_LEN]) -> u32 {
    let offset = truncation_offset(digest);
    u32::from_be_bytes([
        digest[offset] & 0x7F,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ])
}

/// HOTP code for raw key bytes and a counter
pub fn hotp(key: &[u8], counter: u64, config: &TotpConfig) -> TotpToken {
    // 8-byte big-endian counter, i.e. 16 zero-padded hex digits
    let digest = config.algorithm().mac(key, &counter.to_be_bytes());
    let code = dynamic_truncate(&digest) % config.modulus();

    TotpToken::new(format!("{:0width$}", code, width = config.digits() as usize))
}

/// Derive the code for `counter`, or for the current time step when `None`
///
/// # Errors
///
/// Returns `OtpError::MissingArgument` for an empty secret and
/// `OtpError::InvalidBase32` if the secret does not decode.
pub fn derive_code(secret: &OtpSecret, counter: Option<u64>) -> Result<TotpToken, OtpError> {
    derive_code_with_clock(secret, counter, &SystemClock)
}

/// Same as [`derive_code`], reading the time step from `clock`
pub fn derive_code_with_clock<C: Clock + ?Sized>(
    secret: &OtpSecret,
    counter: Option<u64>,
    clock: &C,
) -> Result<TotpToken, OtpError> {
    if secret.is_empty() {
        return Err(OtpError::MissingArgument { field: "secret" });
    }

    let counter = counter.unwrap_or_else(|| current_counter(clock));
    let key = decode_base32(secret.expose())?;

    Ok(hotp(&key, counter, &TotpConfig::default()))
}

/// Generate the current TOTP code for a secret
///
/// Every failure is logged and reported as the generic
/// `OtpError::GenerationFailed`; the cause is not returned.
pub fn generate_totp(secret: &OtpSecret) -> Result<TotpToken, OtpError> {
    generate_totp_with_clock(secret, &SystemClock)
}

/// Same as [`generate_totp`], reading the time step from `clock`
pub fn generate_totp_with_clock<C: Clock + ?Sized>(
    secret: &OtpSecret,
    clock: &C,
) -> Result<TotpToken, OtpError> {
    derive_code_with_clock(secret, None, clock)
        .inspect(|_| debug!("Generated TOTP code"))
        .map_err(|e| {
            error!("TOTP generation failed: {}", e);
            OtpError::GenerationFailed
        })
}
