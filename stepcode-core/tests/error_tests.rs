//! Unit tests for error types and conversions

use stepcode_core::error::{ConfigError, OtpError, StepcodeError, StoreError};

#[test]
fn test_otp_error_display() {
    assert_eq!(OtpError::InvalidBase32.to_string(), "Invalid Base32 secret");
    assert_eq!(OtpError::GenerationFailed.to_string(), "TOTP generation failed");
    assert_eq!(
        OtpError::MissingArgument { field: "secret" }.to_string(),
        "Missing required argument: secret"
    );
}

#[test]
fn test_store_error_display() {
    let error = StoreError::NotFound {
        name: "github".to_string(),
    };
    assert_eq!(error.to_string(), "Connection 'github' does not exist");
}

#[test]
fn test_stepcode_error_from_store() {
    let error: StepcodeError = StoreError::AlreadyExists {
        name: "dup".to_string(),
    }
    .into();
    assert!(matches!(error, StepcodeError::Store(_)));
}

#[test]
fn test_stepcode_error_from_otp() {
    let error: StepcodeError = OtpError::RandomnessUnavailable.into();
    assert!(matches!(error, StepcodeError::Otp(OtpError::RandomnessUnavailable)));
    assert_eq!(error.to_string(), "OTP error: Secure random source unavailable");
}

#[test]
fn test_stepcode_error_from_config() {
    let config_error = ConfigError::ValidationError {
        message: "bad".to_string(),
    };
    let error: StepcodeError = config_error.into();
    assert!(matches!(error, StepcodeError::Config(_)));
}

#[test]
fn test_stepcode_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: StepcodeError = io_error.into();
    assert!(matches!(error, StepcodeError::Io(_)));
}

#[test]
fn test_stepcode_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: StepcodeError = json_error.into();
    assert!(matches!(error, StepcodeError::Json(_)));
}

#[test]
fn test_stepcode_error_from_toml() {
    // Create a toml error by parsing invalid TOML
    let toml_error: toml::de::Error =
        toml::from_str::<serde_json::Value>("invalid toml").unwrap_err();
    let error: StepcodeError = toml_error.into();
    assert!(matches!(error, StepcodeError::Toml(_)));
}
