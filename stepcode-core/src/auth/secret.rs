//! Shared secret issuing
//!
//! Produces a fresh 32-byte secret, its Base32 text, and an
//! `otpauth://totp/` provisioning URI for authenticator apps.

use crate::auth::base32::encode_base32;
use crate::auth::random::{OsRandomizer, Randomizer};
use crate::error::OtpError;
use crate::types::IssuedSecret;
use tracing::{error, info, warn};

/// Bytes of entropy in every issued secret
pub const SECRET_LEN: usize = 32;

/// Issue a new secret from the OS random source
///
/// Never fails: if issuing fails the error is logged and the empty
/// sentinel is returned, so callers must check [`IssuedSecret::is_empty`].
pub fn generate_secret(name: Option<&str>, issuer: Option<&str>) -> IssuedSecret {
    generate_secret_with(&mut OsRandomizer, name, issuer)
}

/// Same as [`generate_secret`] with a caller-supplied randomizer
pub fn generate_secret_with<R: Randomizer + ?Sized>(
    rng: &mut R,
    name: Option<&str>,
    issuer: Option<&str>,
) -> IssuedSecret {
    match try_generate_secret(rng, name, issuer) {
        Ok(secret) => secret,
        Err(e) => {
            error!("Failed to generate secret: {}", e);
            IssuedSecret::empty()
        }
    }
}

/// Issue a new secret, reporting failures as errors
///
/// # Errors
///
/// Returns `OtpError::RandomnessUnavailable` if the randomizer fails.
pub fn try_generate_secret<R: Randomizer + ?Sized>(
    rng: &mut R,
    name: Option<&str>,
    issuer: Option<&str>,
) -> Result<IssuedSecret, OtpError> {
    if name.is_none() || issuer.is_none() {
        warn!("Name or issuer not provided; provisioning URI will be incomplete");
    }

    let mut raw = vec![0u8; SECRET_LEN];
    rng.fill_bytes(&mut raw)?;

    let base32 = encode_base32(&raw);
    let uri = provisioning_uri(name.unwrap_or_default(), &base32, issuer);
    info!("Issued new {}-byte secret", SECRET_LEN);

    Ok(IssuedSecret::new(raw, base32, uri))
}

/// Build `otpauth://totp/<name>?secret=<base32>[&issuer=<issuer>]`
///
/// `name` is inserted as-is and must not need URI escaping; `issuer` is
/// percent-encoded. No algorithm, digits or period parameters are emitted.
pub fn provisioning_uri(name: &str, base32_secret: &str, issuer: Option<&str>) -> String {
    let mut uri = format!("otpauth://totp/{}?secret={}", name, base32_secret);
    if let Some(issuer) = issuer {
        uri.push_str("&issuer=");
        uri.push_str(&urlencoding::encode(issuer));
    }
    uri
}
