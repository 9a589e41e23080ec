//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `login` / `logout` / `status` - Local admin session
//! - `open` - Route gate check for a path
//! - `hash-password` / `check-store` - Credential seed tooling

pub mod args;

pub use args::{Cli, Commands};
