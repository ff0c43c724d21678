//! Configuration module
//!
//! Handles loading and saving stepcode settings from TOML files.

use crate::auth::verify::DEFAULT_WINDOW;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod toml_config;

/// stepcode configuration structure
///
/// Contains only non-sensitive settings. Secrets live in the connection
/// store, never in this file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepcodeConfig {
    /// Path of the JSON connection store
    pub store_path: PathBuf,

    /// Issuer label for newly issued provisioning URIs
    pub issuer: Option<String>,

    /// Number of time steps accepted by `verify` (current + previous)
    pub verify_window: u32,
}

impl StepcodeConfig {
    /// Create a configuration with a custom store path
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            store_path,
            issuer: None,
            verify_window: DEFAULT_WINDOW,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.store_path.as_os_str().is_empty() {
            return Err("Store path cannot be empty".to_string());
        }

        if self.verify_window == 0 {
            return Err("Verify window cannot be zero".to_string());
        }

        if let Some(issuer) = &self.issuer {
            if issuer.trim().is_empty() {
                return Err("Issuer cannot be blank".to_string());
            }
        }

        Ok(())
    }
}

impl Default for StepcodeConfig {
    fn default() -> Self {
        let store_path = toml_config::get_config_dir()
            .map(|dir| dir.join(toml_config::STORE_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from("config").join(toml_config::STORE_FILE_NAME));
        Self::new(store_path)
    }
}
