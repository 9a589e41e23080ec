//! Protected dashboard handlers. Every route here sits behind
//! `session_gate_middleware`, which guarantees a [`CurrentUser`].

use axum::{
    extract::State,
    response::{Html, Json},
    routing::get,
    Extension, Router,
};

use super::pages::{html_escape, layout};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::LOGOUT_PATH;
use crate::domain::{Restaurant, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};

/// Routes mounted under `/dashboard`
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/restaurant", get(restaurant))
        .route("/api/me", get(me))
        .fallback(not_found)
}

/// Landing page for a signed-in restaurant admin
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Html<String> {
    let name = state
        .store
        .find_user(&user.id)
        .map(|u| u.name)
        .unwrap_or_else(|| user.email.clone());

    let restaurant = match state.auth_service.find_restaurant(&user.restaurant_id) {
        Some(r) => format!(
            "<h2>{}</h2><p>{}</p>",
            html_escape(&r.name),
            html_escape(&r.location)
        ),
        None => "<p>Restaurant unavailable</p>".to_string(),
    };

    Html(layout(
        "Dashboard",
        &format!(
            r#"<h1>Welcome, {}</h1>{}<form method="post" action="{}"><button type="submit">Sign out</button></form>"#,
            html_escape(&name),
            restaurant,
            LOGOUT_PATH
        ),
    ))
}

/// Restaurant the caller's session is scoped to
#[utoipa::path(
    get,
    path = "/dashboard/api/restaurant",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Caller's restaurant", body = Restaurant),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Restaurant no longer exists")
    ),
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub async fn restaurant(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Restaurant>> {
    state
        .auth_service
        .find_restaurant(&user.restaurant_id)
        .ok_or_not_found()
        .map(Json)
}

/// Profile of the signed-in admin
#[utoipa::path(
    get,
    path = "/dashboard/api/me",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Signed-in user", body = UserResponse),
        (status = 401, description = "No valid session")
    ),
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<UserResponse>> {
    state
        .store
        .find_user(&user.id)
        .as_ref()
        .map(UserResponse::from)
        .ok_or(AppError::Unauthorized)
        .map(Json)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
