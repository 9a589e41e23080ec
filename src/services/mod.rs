//! Application services layer.
//!
//! [`AuthService`] checks credentials and issues or verifies session tokens.
//! [`SessionManager`] is the client-side capability built on top of it:
//! one explicit session, persisted, answerable without I/O.

mod auth_service;
mod session_manager;

pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use session_manager::SessionManager;
