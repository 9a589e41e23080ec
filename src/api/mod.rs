//! API layer - HTTP handlers and middleware
//!
//! - Login page and JSON auth endpoints
//! - Session gate over `/dashboard`
//! - Login throttling
//! - OpenAPI docs

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod session_cookie;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
