//! Connection store
//!
//! Persists named connections (account email + Base32 secret) in a local
//! JSON file so codes can be generated by name later.
//!
//! A [`ConnectionStore`] is an explicit handle for one file. Writes take
//! `&mut self` and re-read the file before changing it; two processes
//! writing the same file at once are not coordinated.

use crate::auth::random::OsRandomizer;
use crate::auth::secret::{provisioning_uri, try_generate_secret};
use crate::auth::totp::generate_totp;
use crate::error::{StepcodeError, StoreError};
use crate::types::{OtpSecret, TotpToken};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod json_file;

use json_file::{ensure_store_file, read_connections, write_connections, Connections};

/// A stored connection record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Unique key
    pub name: String,
    pub email: String,
    /// Base32 secret text
    pub secret: String,
    /// Provisioning URI
    pub totp_url: String,
    /// UTC creation time, e.g. `Tue, 18 Oct 2026 10:00:00 GMT`
    pub created_time: String,
}

impl Connection {
    pub fn otp_secret(&self) -> OtpSecret {
        OtpSecret::new(self.secret.clone())
    }
}

/// Handle over one connection store file
#[derive(Debug)]
pub struct ConnectionStore {
    path: PathBuf,
    connections: Connections,
}

impl ConnectionStore {
    /// Open the store at `path`, creating an empty one if absent
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        ensure_store_file(&path)?;
        let connections = read_connections(&path)?;

        info!(
            "Opened connection store {:?} ({} connections)",
            path,
            connections.len()
        );

        Ok(Self { path, connections })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a connection, issuing a fresh secret when none is given
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if `name` is taken, or an OTP
    /// error if a secret cannot be issued.
    pub fn create(
        &mut self,
        name: &str,
        email: &str,
        secret: Option<&OtpSecret>,
    ) -> Result<Connection, StepcodeError> {
        let mut connections = read_connections(&self.path)?;
        if connections.contains_key(name) {
            return Err(StoreError::AlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        let (secret, totp_url) = match secret {
            Some(secret) if !secret.is_empty() => (
                secret.expose().to_string(),
                provisioning_uri(name, secret.expose(), Some(email)),
            ),
            _ => {
                let issued = try_generate_secret(&mut OsRandomizer, Some(name), Some(email))?;
                (
                    issued.base32().expose().to_string(),
                    issued.provisioning_uri().to_string(),
                )
            }
        };

        let connection = Connection {
            name: name.to_string(),
            email: email.to_string(),
            secret,
            totp_url,
            created_time: utc_timestamp(),
        };

        connections.insert(name.to_string(), connection.clone());
        write_connections(&self.path, &connections)?;
        self.connections = connections;

        info!("Connection '{}' created", name);
        Ok(connection)
    }

    /// Delete a connection; absent names are a no-op
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let mut connections = read_connections(&self.path)?;
        if connections.remove(name).is_none() {
            info!("Connection '{}' not found, nothing to delete", name);
            self.connections = connections;
            return Ok(());
        }

        write_connections(&self.path, &connections)?;
        self.connections = connections;

        info!("Connection '{}' deleted", name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Connection> {
        self.connections.get(name)
    }

    /// Stored connection names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.connections.keys().map(String::as_str)
    }

    /// Generate the current code for a stored connection
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for unknown names and
    /// `OtpError::GenerationFailed` if the stored secret is unusable.
    pub fn generate_totp_for_connection(&self, name: &str) -> Result<TotpToken, StepcodeError> {
        let connection = self.get(name).ok_or_else(|| {
            warn!("No connection named '{}'", name);
            StoreError::NotFound {
                name: name.to_string(),
            }
        })?;

        Ok(generate_totp(&connection.otp_secret())?)
    }
}

/// Current UTC time in HTTP date form
fn utc_timestamp() -> String {
    chrono::Utc::now()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
