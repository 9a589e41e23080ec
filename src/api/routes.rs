//! Application route configuration.

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{dashboard_routes, login_routes, pages, session_routes};
use super::middleware::{login_rate_limiter, session_gate_middleware};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{LOGIN_PATH, LOGOUT_PATH, PROTECTED_PREFIX};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let throttle = login_rate_limiter(&state.login_throttle);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Login page; only the credential POST is throttled
        .route(
            LOGIN_PATH,
            get(pages::login_page).merge(post(pages::login_submit).route_layer(throttle.clone())),
        )
        .route(LOGOUT_PATH, post(pages::logout_submit))
        .nest(
            "/api/auth",
            login_routes()
                .route_layer(throttle)
                .merge(session_routes()),
        )
        // Everything under /dashboard passes the route gate
        .nest(
            PROTECTED_PREFIX,
            dashboard_routes().layer(middleware::from_fn_with_state(
                state.clone(),
                session_gate_middleware,
            )),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Digital Menu admin API"
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    restaurants: usize,
    users: usize,
}

/// Liveness plus credential store counts
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        restaurants: state.store.restaurants().len(),
        users: state.store.users().len(),
    })
}
