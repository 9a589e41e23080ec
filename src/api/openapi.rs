//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, dashboard_handler};
use crate::api::routes;
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{Restaurant, SessionResponse, UserResponse};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Digital Menu admin API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Digital Menu Admin",
        version = "0.1.0",
        description = "Restaurant admin authentication and the protected dashboard",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        routes::health,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::current_session,
        dashboard_handler::restaurant,
        dashboard_handler::me,
    ),
    components(
        schemas(
            auth_handler::LoginRequest,
            TokenResponse,
            SessionResponse,
            Restaurant,
            UserResponse,
            routes::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Authentication", description = "Admin login, logout and session lookup"),
        (name = "Dashboard", description = "Session-gated restaurant data")
    )
)]
pub struct ApiDoc;

/// Registers the bearer and cookie session schemes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/auth/login"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_auth_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/auth/login"));
        assert!(doc.paths.paths.contains_key("/dashboard/api/restaurant"));
    }
}
