//! Authentication handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::session_cookie::{extract_token, removal_cookie, session_cookie};
use crate::api::AppState;
use crate::domain::SessionResponse;
use crate::errors::{AppError, AppResult};
use crate::services::TokenResponse;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Account email address (case-sensitive)
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "john@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Throttled credential routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Session inspection and teardown
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/session", get(current_session))
}

/// Log in and receive a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; session cookie set", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 429, description = "Too many login attempts")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<TokenResponse>)> {
    let session = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    let jar = jar.add(session_cookie(&session, &state.config));
    Ok((jar, Json(TokenResponse::from(&session))))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 204, description = "Session cookie cleared (also when none was set)")
    )
)]
pub async fn logout(jar: CookieJar) -> (StatusCode, CookieJar) {
    (StatusCode::NO_CONTENT, jar.add(removal_cookie()))
}

/// Describe the caller's session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "Authentication",
    responses(
        (status = 200, description = "Valid session", body = SessionResponse),
        (status = 401, description = "No valid session")
    ),
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<SessionResponse>> {
    let token = extract_token(&headers).ok_or(AppError::Unauthorized)?;
    let session = state.auth_service.authenticate_token(&token)?;

    Ok(Json(SessionResponse::from(&session)))
}
