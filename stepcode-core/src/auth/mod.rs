//! Authentication module
//!
//! Handles secret issuing, TOTP generation and verification, and
//! recovery codes.

pub mod base32;
pub mod clock;
pub mod hmac;
pub mod random;
pub mod recovery;
pub mod secret;
pub mod totp;
pub mod verify;
