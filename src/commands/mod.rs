//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod credentials;
pub mod open;
pub mod serve;
pub mod session;
