//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret, SecretVec};
use std::fmt;
use std::str::FromStr;

/// Wrapper for Base32-encoded TOTP shared secrets
///
/// This type ensures secrets are never accidentally logged or exposed
/// in debug output, maintaining security throughout the application.
#[derive(Clone, Debug)]
pub struct OtpSecret(Secret<String>);

impl OtpSecret {
    /// Create a new OtpSecret from a Base32-encoded string
    pub fn new(secret: String) -> Self {
        Self(Secret::new(secret))
    }

    /// Expose the secret value (use with caution!)
    ///
    /// This should only be called when absolutely necessary,
    /// such as when passing to cryptographic functions.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<String> for OtpSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for OtpSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret.to_string())
    }
}

/// Wrapper for generated TOTP codes
///
/// Generated codes should also be treated as sensitive data
/// and never logged, even though they have a short lifetime.
#[derive(Clone, Debug)]
pub struct TotpToken(Secret<String>);

impl TotpToken {
    /// Create a new TotpToken from a generated code string
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    /// Expose the code value (use with caution!)
    ///
    /// This should only be called when printing the code to stdout
    /// or comparing it against user input.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for TotpToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// A freshly issued shared secret
///
/// `base32` is always the encoding of `raw_bytes`. The all-empty value is
/// returned by [`crate::auth::secret::generate_secret`] when issuing fails.
pub struct IssuedSecret {
    raw_bytes: SecretVec<u8>,
    base32: OtpSecret,
    provisioning_uri: String,
}

impl IssuedSecret {
    pub(crate) fn new(raw_bytes: Vec<u8>, base32: String, provisioning_uri: String) -> Self {
        Self {
            raw_bytes: SecretVec::new(raw_bytes),
            base32: OtpSecret::new(base32),
            provisioning_uri,
        }
    }

    /// The failure sentinel: every field empty
    pub fn empty() -> Self {
        Self::new(Vec::new(), String::new(), String::new())
    }

    /// True for the failure sentinel
    pub fn is_empty(&self) -> bool {
        self.raw_bytes.expose_secret().is_empty()
            && self.base32.is_empty()
            && self.provisioning_uri.is_empty()
    }

    /// Raw secret bytes (use with caution!)
    pub fn raw_bytes(&self) -> &[u8] {
        self.raw_bytes.expose_secret()
    }

    pub fn base32(&self) -> &OtpSecret {
        &self.base32
    }

    /// `otpauth://totp/...` URI for authenticator apps
    pub fn provisioning_uri(&self) -> &str {
        &self.provisioning_uri
    }
}

// The URI embeds the secret, so it is redacted too
impl fmt::Debug for IssuedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedSecret")
            .field("raw_bytes", &"[REDACTED]")
            .field("base32", &self.base32)
            .field("provisioning_uri", &"[REDACTED]")
            .finish()
    }
}

/// Alphabet used for recovery codes
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryCodeKind {
    #[default]
    Numbers,
    Uppercase,
    Lowercase,
    Symbols,
    /// Union of every other alphabet
    Random,
}

pub const NUMBERS: &str = "0123456789";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

impl RecoveryCodeKind {
    /// Characters a code of this kind is drawn from
    pub fn alphabet(&self) -> String {
        match self {
            Self::Numbers => NUMBERS.to_string(),
            Self::Uppercase => UPPERCASE.to_string(),
            Self::Lowercase => LOWERCASE.to_string(),
            Self::Symbols => SYMBOLS.to_string(),
            Self::Random => [NUMBERS, UPPERCASE, LOWERCASE, SYMBOLS].concat(),
        }
    }
}

impl FromStr for RecoveryCodeKind {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to `Numbers`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "uppercase" => Self::Uppercase,
            "lowercase" => Self::Lowercase,
            "symbols" => Self::Symbols,
            "random" => Self::Random,
            _ => Self::Numbers,
        })
    }
}

impl fmt::Display for RecoveryCodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numbers => "numbers",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Symbols => "symbols",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

/// Options for recovery code generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryCodesOptions {
    pub kind: RecoveryCodeKind,
    /// Characters per code
    pub code_length: usize,
    /// How many codes to generate
    pub number_of_codes: usize,
    /// Overrides the alphabet of `kind` when set
    pub charset: Option<String>,
}

impl RecoveryCodesOptions {
    pub fn new(kind: RecoveryCodeKind, code_length: usize, number_of_codes: usize) -> Self {
        Self {
            kind,
            code_length,
            number_of_codes,
            charset: None,
        }
    }
}

impl Default for RecoveryCodesOptions {
    fn default() -> Self {
        Self::new(RecoveryCodeKind::Numbers, 8, 10)
    }
}
