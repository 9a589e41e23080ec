//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Digital Menu - restaurant admin authentication
#[derive(Parser, Debug)]
#[command(name = "digital-menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Sign in and persist the session locally
    Login(LoginArgs),

    /// Discard the local session
    Logout,

    /// Show whether a valid local session exists
    Status,

    /// Run the route gate for a path against the local session
    Open(OpenArgs),

    /// Print an Argon2id hash for a credential seed file
    HashPassword(HashPasswordArgs),

    /// Load and validate a credential seed file
    CheckStore(CheckStoreArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account email (case-sensitive)
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long, env = "MENU_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the open command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Path to open, e.g. /dashboard
    pub path: String,
}

/// Arguments for the hash-password command
#[derive(Parser, Debug)]
pub struct HashPasswordArgs {
    /// Plain-text password to hash
    pub password: String,
}

/// Arguments for the check-store command
#[derive(Parser, Debug)]
pub struct CheckStoreArgs {
    /// Seed file; defaults to CREDENTIALS_FILE, then the built-in mock data
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from([
            "digital-menu",
            "login",
            "--email",
            "john@example.com",
            "--password",
            "password123",
        ])
        .unwrap();

        match cli.command {
            Commands::Login(args) => {
                assert_eq!(args.email, "john@example.com");
                assert_eq!(args.password, "password123");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_open_with_verbose() {
        let cli = Cli::try_parse_from(["digital-menu", "-v", "open", "/dashboard"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Open(ref a) if a.path == "/dashboard"));
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["digital-menu", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, DEFAULT_SERVER_HOST);
                assert_eq!(args.port, DEFAULT_SERVER_PORT);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
