//! Verify command implementation

use crate::cli::Outcome;
use colored::Colorize;
use stepcode_core::auth::verify::verify_totp;
use stepcode_core::config::toml_config::load_or_default;
use stepcode_core::error::StepcodeError;
use stepcode_core::types::OtpSecret;
use tracing::{debug, info};

/// Run the verify command
///
/// Prints `valid` or `invalid`. An invalid code is not an error, it only
/// changes the exit code.
pub fn run_verify(
    code: &str,
    secret: String,
    window: Option<u32>,
) -> Result<Outcome, StepcodeError> {
    let window = match window {
        Some(window) => window,
        None => load_or_default()?.verify_window,
    };
    debug!("Verifying code against {} time steps", window);

    if verify_totp(code.trim(), &OtpSecret::new(secret), Some(window)) {
        println!("{}", "valid".green());
        Ok(Outcome::Success)
    } else {
        info!("Code rejected");
        println!("{}", "invalid".red());
        Ok(Outcome::Rejected)
    }
}
