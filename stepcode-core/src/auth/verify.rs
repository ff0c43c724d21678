//! TOTP verification
//!
//! A candidate code is accepted if it matches the current time step or one
//! of the `window - 1` steps before it. Future steps are never checked, so
//! with the default window of 2 a code stays valid for at most 60 seconds
//! of backward clock skew.

use crate::auth::clock::{current_counter, Clock, SystemClock};
use crate::auth::totp::derive_code;
use crate::error::OtpError;
use crate::types::OtpSecret;
use tracing::{debug, error, warn};

/// Number of time steps checked by default: current and previous
pub const DEFAULT_WINDOW: u32 = 2;

/// Verify a code against the system clock
///
/// Never fails: missing arguments and internal errors are logged and
/// reported as `false`. A window of `None` or `Some(0)` means
/// [`DEFAULT_WINDOW`].
pub fn verify_totp(candidate: &str, secret: &OtpSecret, window: Option<u32>) -> bool {
    verify_totp_with_clock(candidate, secret, window, &SystemClock)
}

/// Same as [`verify_totp`], reading the time step from `clock`
pub fn verify_totp_with_clock<C: Clock + ?Sized>(
    candidate: &str,
    secret: &OtpSecret,
    window: Option<u32>,
    clock: &C,
) -> bool {
    if let Err(e) = require_arguments(candidate, secret) {
        warn!("Rejecting TOTP verification: {}", e);
        return false;
    }

    let window = match window {
        Some(w) if w > 0 => w,
        _ => DEFAULT_WINDOW,
    };

    match check_window(candidate, secret, window, current_counter(clock)) {
        Ok(valid) => valid,
        Err(e) => {
            error!("TOTP verification failed: {}", e);
            false
        }
    }
}

/// Compare `candidate` against the codes for `counter`, `counter - 1`, ...
/// down to `counter - (window - 1)`
///
/// Steps that would fall below counter 0 are skipped.
///
/// # Errors
///
/// Returns an error if an argument is empty or the secret does not decode.
pub fn check_window(
    candidate: &str,
    secret: &OtpSecret,
    window: u32,
    counter: u64,
) -> Result<bool, OtpError> {
    require_arguments(candidate, secret)?;

    for offset in 0..u64::from(window) {
        let Some(step) = counter.checked_sub(offset) else {
            break;
        };

        let expected = derive_code(secret, Some(step))?;
        if constant_time_eq(candidate.as_bytes(), expected.expose().as_bytes()) {
            debug!("TOTP accepted at step offset -{}", offset);
            return Ok(true);
        }
    }

    Ok(false)
}

fn require_arguments(candidate: &str, secret: &OtpSecret) -> Result<(), OtpError> {
    if candidate.is_empty() {
        return Err(OtpError::MissingArgument { field: "code" });
    }
    if secret.is_empty() {
        return Err(OtpError::MissingArgument { field: "secret" });
    }
    Ok(())
}

/// Byte comparison whose timing does not depend on where inputs differ
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
