//! HTTP request handlers.

pub mod auth_handler;
pub mod dashboard_handler;
pub mod pages;

pub use auth_handler::{login_routes, session_routes};
pub use dashboard_handler::dashboard_routes;
