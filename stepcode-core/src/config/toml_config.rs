//! TOML configuration file I/O
//!
//! Handles loading and saving stepcode configuration to/from TOML files
//! in the user's configuration directory.

use crate::config::StepcodeConfig;
use crate::error::{ConfigError, StepcodeError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default connection store file name
pub const STORE_FILE_NAME: &str = "connections.json";

/// Get the default configuration directory
///
/// Returns ~/.config/stepcode, or STEPCODE_CONFIG_DIR if set
pub fn get_config_dir() -> Result<PathBuf, StepcodeError> {
    // Allow tests to override config directory via environment variable
    if let Ok(config_dir) = std::env::var("STEPCODE_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        StepcodeError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("stepcode"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, StepcodeError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default TOML file
pub fn load_config() -> Result<StepcodeConfig, StepcodeError> {
    let config_path = get_config_path()?;
    load_config_from_path(&config_path)
}

/// Load configuration, falling back to defaults when no file exists
pub fn load_or_default() -> Result<StepcodeConfig, StepcodeError> {
    match load_config() {
        Err(StepcodeError::Config(ConfigError::LoadFailed { path })) => {
            debug!("No configuration at {}, using defaults", path);
            Ok(StepcodeConfig::default())
        }
        other => other,
    }
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<StepcodeConfig, StepcodeError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StepcodeError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => StepcodeError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config: StepcodeConfig = toml::from_str(&contents)?;

    // Validate the loaded configuration
    config
        .validate()
        .map_err(|e| StepcodeError::Config(ConfigError::ValidationError { message: e }))?;

    debug!("Loaded configuration from {:?}", path.as_ref());
    Ok(config)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(
    config: &StepcodeConfig,
    path: P,
) -> Result<(), StepcodeError> {
    // Validate configuration before saving
    config
        .validate()
        .map_err(|e| StepcodeError::Config(ConfigError::ValidationError { message: e }))?;

    // Ensure config directory exists
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            StepcodeError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let contents = toml::to_string_pretty(config)?;

    std::fs::write(&path, contents).map_err(|_e| {
        StepcodeError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    info!("Saved configuration to {:?}", path.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let saved = StepcodeConfig {
            store_path: temp_dir.path().join("connections.json"),
            issuer: Some("Example Corp".to_string()),
            verify_window: 3,
        };

        save_config_to_path(&saved, &config_path).unwrap();
        let loaded = load_config_from_path(&config_path).unwrap();

        assert_eq!(saved, loaded);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "issuer = \"Acme\"\n").unwrap();

        let loaded = load_config_from_path(&config_path).unwrap();
        assert_eq!(loaded.issuer.as_deref(), Some("Acme"));
        assert_eq!(loaded.verify_window, 2);
    }

    #[test]
    fn test_missing_file_is_load_failed() {
        let temp_dir = tempdir().unwrap();
        let result = load_config_from_path(temp_dir.path().join("absent.toml"));
        assert!(matches!(
            result,
            Err(StepcodeError::Config(ConfigError::LoadFailed { .. }))
        ));
    }

    #[test]
    fn test_invalid_config_validation() {
        let invalid_configs = vec![
            StepcodeConfig::new(PathBuf::new()),
            StepcodeConfig {
                verify_window: 0,
                ..StepcodeConfig::new(PathBuf::from("c.json"))
            },
            StepcodeConfig {
                issuer: Some("  ".to_string()),
                ..StepcodeConfig::new(PathBuf::from("c.json"))
            },
        ];

        for config in invalid_configs {
            assert!(config.validate().is_err());
        }
    }
}
