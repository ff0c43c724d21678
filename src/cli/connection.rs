//! Connection command implementations
//!
//! Create, inspect, delete and list entries in the connection store
//! configured by `store_path`.

use crate::cli::Outcome;
use colored::Colorize;
use stepcode_core::config::toml_config::load_or_default;
use stepcode_core::error::{StepcodeError, StoreError};
use stepcode_core::store::ConnectionStore;
use stepcode_core::types::OtpSecret;
use tracing::{debug, info};

fn open_store() -> Result<ConnectionStore, StepcodeError> {
    let config = load_or_default()?;
    debug!("Opening connection store at {:?}", config.store_path);
    Ok(ConnectionStore::open(&config.store_path)?)
}

/// Run `connection create`
pub fn run_create(
    name: &str,
    email: &str,
    secret: Option<String>,
) -> Result<Outcome, StepcodeError> {
    let mut store = open_store()?;
    let secret = secret.map(OtpSecret::new);
    let connection = store.create(name, email, secret.as_ref())?;
    info!("Created connection '{}'", connection.name);

    println!(
        "{} {}",
        "✓".green(),
        format!("Connection '{}' created", connection.name).bold()
    );
    println!("{}", connection.totp_url);

    Ok(Outcome::Success)
}

/// Run `connection get`, printing the stored record as JSON
pub fn run_get(name: &str) -> Result<Outcome, StepcodeError> {
    let store = open_store()?;
    let connection = store.get(name).ok_or_else(|| StoreError::NotFound {
        name: name.to_string(),
    })?;

    println!("{}", serde_json::to_string_pretty(connection)?);
    Ok(Outcome::Success)
}

/// Run `connection delete`
pub fn run_delete(name: &str) -> Result<Outcome, StepcodeError> {
    let mut store = open_store()?;
    store.delete(name)?;
    info!("Removed connection '{}'", name);

    println!("{} Connection '{}' removed", "✓".green(), name);
    Ok(Outcome::Success)
}

/// Run `connection list`
pub fn run_list() -> Result<Outcome, StepcodeError> {
    let store = open_store()?;
    for name in store.names() {
        println!("{}", name);
    }
    Ok(Outcome::Success)
}
