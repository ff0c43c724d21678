//! Recovery codes command implementation

use crate::cli::Outcome;
use stepcode_core::auth::recovery::generate_recovery_codes;
use stepcode_core::error::{OtpError, StepcodeError};
use stepcode_core::types::{RecoveryCodeKind, RecoveryCodesOptions};
use tracing::debug;

/// Run the recovery-codes command
pub fn run_recovery_codes(
    count: usize,
    length: usize,
    kind: &str,
) -> Result<Outcome, StepcodeError> {
    // Unknown kinds fall back to numbers
    let kind: RecoveryCodeKind = kind.parse().unwrap_or_default();
    debug!("Recovery code kind resolved to {}", kind);
    let codes = generate_recovery_codes(&RecoveryCodesOptions::new(kind, length, count));

    if codes.len() != count {
        return Err(OtpError::RandomnessUnavailable.into());
    }

    for code in codes {
        println!("{}", code);
    }

    Ok(Outcome::Success)
}
