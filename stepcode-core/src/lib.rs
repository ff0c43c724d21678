//! Core library for the stepcode TOTP toolkit
//!
//! This crate provides RFC 6238 code generation and verification, shared
//! secret and recovery code issuing, and an optional file-backed store of
//! named connections.

pub mod error;
pub mod types;

pub mod auth;
pub mod config;
pub mod store;

use tracing_subscriber::filter::LevelFilter;

/// Pick the log level from `STEPCODE_LOG_LEVEL` (`debug` or `info`)
fn log_level() -> LevelFilter {
    match std::env::var("STEPCODE_LOG_LEVEL").as_deref() {
        Ok("debug") => LevelFilter::DEBUG,
        _ => LevelFilter::INFO,
    }
}

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running under
/// systemd. Otherwise logs to stderr, keeping stdout free for codes.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = log_level();

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            // We're running under systemd, use journal logging
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(level)
                .try_init()?;
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr),
        )
        .with(level)
        .try_init()?;

    Ok(())
}
