//! Server-side route protection for `/dashboard/*`.
//!
//! Verifies the session token on every request and runs the result through
//! the same [`RouteGate`] the client uses. Pages get a `303` to the login
//! page with the loading placeholder as body; JSON callers get `401`.

use axum::{
    extract::{OriginalUri, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use crate::api::handlers::pages;
use crate::api::session_cookie::extract_token;
use crate::api::AppState;
use crate::config::PROTECTED_API_PREFIX;
use crate::domain::Session;
use crate::errors::AppError;
use crate::gate::{GateOutcome, LoadingPlaceholder, RedirectSlot, RouteGate};

/// Identity of the session holder, available to protected handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub restaurant_id: String,
}

impl From<&Session> for CurrentUser {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id.clone(),
            email: session.email.clone(),
            restaurant_id: session.restaurant_id.clone(),
        }
    }
}

/// Verified session for the request, if it carries a valid token.
pub fn request_session(state: &AppState, headers: &axum::http::HeaderMap) -> Option<Session> {
    let token = extract_token(headers)?;
    match state.auth_service.authenticate_token(&token) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            None
        }
    }
}

/// Full request path. Inside the nested dashboard router `uri()` has the
/// `/dashboard` prefix stripped; `OriginalUri` keeps it.
fn full_path(request: &Request) -> String {
    request
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn wants_json(request: &Request) -> bool {
    full_path(request).starts_with(PROTECTED_API_PREFIX)
        || request
            .headers()
            .get(header::ACCEPT)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|accept| accept.contains("application/json"))
}

/// Gate middleware for protected routes.
pub async fn session_gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let session = request_session(&state, request.headers());
    let current_user = session.as_ref().map(CurrentUser::from);
    let json = wants_json(&request);
    let path = full_path(&request);

    let navigator = RedirectSlot::new();
    match RouteGate::new(&session, &navigator).resolve(request) {
        GateOutcome::Render(mut request) => {
            if let Some(user) = current_user {
                request.extensions_mut().insert(user);
            }
            next.run(request).await
        }
        GateOutcome::Placeholder(placeholder) => match navigator.target() {
            Some(_) if json => AppError::Unauthorized.into_response(),
            Some(to) => {
                tracing::debug!(path = %path, to = %to, "Redirecting unauthenticated request");
                (
                    StatusCode::SEE_OTHER,
                    [(header::LOCATION, to)],
                    Html(placeholder_page(placeholder)),
                )
                    .into_response()
            }
            None => Html(placeholder_page(placeholder)).into_response(),
        },
    }
}

fn placeholder_page(placeholder: LoadingPlaceholder) -> String {
    pages::layout("Digital Menu Admin", &placeholder.to_html())
}
