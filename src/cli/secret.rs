//! Secret command implementation
//!
//! Issues a fresh shared secret and prints it with its provisioning URI.

use crate::cli::Outcome;
use stepcode_core::auth::secret::generate_secret;
use stepcode_core::config::toml_config::load_or_default;
use stepcode_core::error::{OtpError, StepcodeError};
use tracing::info;

/// Run the secret command
///
/// Prints the Base32 secret on the first line and the provisioning URI on
/// the second. Falls back to the configured issuer when none is given.
pub fn run_secret(name: Option<&str>, issuer: Option<&str>) -> Result<Outcome, StepcodeError> {
    let config = load_or_default()?;
    let issuer = issuer.or(config.issuer.as_deref());

    let secret = generate_secret(name, issuer);
    if secret.is_empty() {
        return Err(OtpError::RandomnessUnavailable.into());
    }

    info!("Issued a new shared secret");
    println!("{}", secret.base32().expose());
    println!("{}", secret.provisioning_uri());

    Ok(Outcome::Success)
}
