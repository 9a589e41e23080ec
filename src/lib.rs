//! Digital Menu - restaurant admin authentication
//!
//! Credential store, session-issuing auth service, client session
//! manager and the route gate that keeps `/dashboard` behind a login.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, restaurants, passwords, sessions
//! - **infra**: Credential store, session storage, rate limiter
//! - **services**: Auth service and session manager
//! - **gate**: Render/mount route gate
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Sign in locally and check a protected path
//! cargo run -- login --email john@example.com --password password123
//! cargo run -- open /dashboard
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod gate;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Restaurant, Session, User};
pub use errors::{AppError, AppResult};
pub use gate::{RouteGate, SessionCheck};
pub use services::{AuthService, SessionManager};
