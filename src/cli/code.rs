//! Code command implementation
//!
//! Prints the current (or counter-specific) TOTP code, machine-parsable.

use crate::cli::Outcome;
use stepcode_core::auth::totp::{derive_code, generate_totp};
use stepcode_core::config::toml_config::load_or_default;
use stepcode_core::error::{OtpError, StepcodeError};
use stepcode_core::store::ConnectionStore;
use stepcode_core::types::OtpSecret;
use tracing::debug;

/// Run the code command
///
/// Outputs only the 6-digit code to stdout. Errors go to stderr.
pub fn run_code(
    secret: Option<String>,
    connection: Option<String>,
    counter: Option<u64>,
) -> Result<Outcome, StepcodeError> {
    let token = match (secret, connection) {
        (Some(secret), _) => {
            let secret = OtpSecret::new(secret);
            match counter {
                Some(counter) => derive_code(&secret, Some(counter))?,
                None => generate_totp(&secret)?,
            }
        }
        (None, Some(name)) => {
            debug!("Generating code for connection '{}'", name);
            let config = load_or_default()?;
            let store = ConnectionStore::open(&config.store_path)?;
            store.generate_totp_for_connection(&name)?
        }
        (None, None) => return Err(OtpError::MissingArgument { field: "secret" }.into()),
    };

    println!("{}", token.expose());
    Ok(Outcome::Success)
}
