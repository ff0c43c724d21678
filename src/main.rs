//! stepcode - TOTP second-factor CLI
//!
//! Issues shared secrets and recovery codes, prints and verifies
//! RFC 6238 codes, and manages a local store of named connections.

use clap::{Parser, Subcommand};
use stepcode_core::{error::StepcodeError, init_logging};
use tracing::error;

mod cli;

#[derive(Parser)]
#[command(name = "stepcode")]
#[command(about = "Issue and verify TOTP second-factor codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a new random shared secret
    Secret {
        /// Account label placed in the provisioning URI
        #[arg(long)]
        name: Option<String>,
        /// Issuer placed in the provisioning URI
        #[arg(long)]
        issuer: Option<String>,
    },
    /// Print the TOTP code for a secret or stored connection
    Code {
        /// Base32 shared secret
        #[arg(long, conflicts_with = "connection", required_unless_present = "connection")]
        secret: Option<String>,
        /// Name of a stored connection
        #[arg(long)]
        connection: Option<String>,
        /// Explicit time-step counter instead of the current time
        #[arg(long, requires = "secret")]
        counter: Option<u64>,
    },
    /// Check a code against a secret (exit 0 if valid, 1 if not)
    Verify {
        /// Code to check
        code: String,
        /// Base32 shared secret
        #[arg(long)]
        secret: String,
        /// Number of time steps to accept, counting back from now
        #[arg(long)]
        window: Option<u32>,
    },
    /// Print static recovery codes, one per line
    RecoveryCodes {
        /// How many codes to print
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Characters per code
        #[arg(long, default_value_t = 8)]
        length: usize,
        /// numbers, uppercase, lowercase, symbols or random
        #[arg(long, default_value = "numbers")]
        kind: String,
    },
    /// Manage stored connections
    Connection {
        #[command(subcommand)]
        action: ConnectionCommands,
    },
}

#[derive(Subcommand)]
enum ConnectionCommands {
    /// Store a new connection, issuing a secret unless one is given
    Create {
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        secret: Option<String>,
    },
    /// Show a stored connection as JSON
    Get { name: String },
    /// Remove a stored connection
    Delete { name: String },
    /// List stored connection names
    List,
}

fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Secret { name, issuer } => {
            cli::secret::run_secret(name.as_deref(), issuer.as_deref())
        }
        Commands::Code {
            secret,
            connection,
            counter,
        } => cli::code::run_code(secret, connection, counter),
        Commands::Verify {
            code,
            secret,
            window,
        } => cli::verify::run_verify(&code, secret, window),
        Commands::RecoveryCodes {
            count,
            length,
            kind,
        } => cli::recovery::run_recovery_codes(count, length, &kind),
        Commands::Connection { action } => match action {
            ConnectionCommands::Create {
                name,
                email,
                secret,
            } => cli::connection::run_create(&name, &email, secret),
            ConnectionCommands::Get { name } => cli::connection::run_get(&name),
            ConnectionCommands::Delete { name } => cli::connection::run_delete(&name),
            ConnectionCommands::List => cli::connection::run_list(),
        },
    };

    match result {
        Ok(cli::Outcome::Success) => std::process::exit(0),
        Ok(cli::Outcome::Rejected) => std::process::exit(1),
        Err(e) => {
            let exit_code = match e {
                // Configuration errors (exit code 2)
                StepcodeError::Config(_)
                | StepcodeError::Toml(_)
                | StepcodeError::TomlSerialize(_) => 2,
                // Store errors - missing/duplicate names are user input
                StepcodeError::Store(ref store_error) => match store_error {
                    stepcode_core::error::StoreError::AlreadyExists { .. }
                    | stepcode_core::error::StoreError::NotFound { .. } => 2,
                    stepcode_core::error::StoreError::LoadFailed { .. }
                    | stepcode_core::error::StoreError::SaveFailed { .. }
                    | stepcode_core::error::StoreError::Corrupt { .. } => 1,
                },
                // OTP errors (exit code 2 - bad secret or input)
                StepcodeError::Otp(_) => 2,
                // IO and JSON errors (exit code 1 - runtime)
                StepcodeError::Io(_) | StepcodeError::Json(_) => 1,
            };

            error!("Command failed with exit code {}", exit_code);
            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
