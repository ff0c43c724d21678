//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod code;
pub mod connection;
pub mod recovery;
pub mod secret;
pub mod verify;

/// How a successful command run should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but its check did not pass (exit code 1)
    Rejected,
}
