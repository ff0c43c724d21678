//! Error types for the stepcode TOTP toolkit
//!
//! This module defines all error types used throughout the library and CLI,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the stepcode application
#[derive(Error, Debug)]
pub enum StepcodeError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to the connection store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to OTP/TOTP operations
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Connection store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection '{name}' already exists; delete it first or pick another name")]
    AlreadyExists { name: String },

    #[error("Connection '{name}' does not exist")]
    NotFound { name: String },

    #[error("Failed to load connection store: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save connection store: {path}")]
    SaveFailed { path: String },

    #[error("Connection store is corrupt: {message}")]
    Corrupt { message: String },
}

/// OTP/TOTP operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Missing required argument: {field}")]
    MissingArgument { field: &'static str },

    #[error("Invalid Base32 secret")]
    InvalidBase32,

    #[error("TOTP generation failed")]
    GenerationFailed,

    #[error("Secure random source unavailable")]
    RandomnessUnavailable,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StepcodeError>;
