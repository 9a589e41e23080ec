//! Server-rendered HTML: the login form and the shared page shell.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::api::middleware::request_session;
use crate::api::session_cookie::{removal_cookie, session_cookie};
use crate::api::AppState;
use crate::config::{DASHBOARD_PATH, LOGIN_PATH};
use crate::errors::AppError;

const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

/// Form body posted by the login page
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wrap `body` in the admin page shell. `body` must already be escaped.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{}</title></head>
<body>
<main>{}</main>
<footer><small>Digital Menu</small></footer>
</body>
</html>"#,
        html_escape(title),
        body
    )
}

fn login_form(error: Option<&str>, email: &str) -> String {
    let error_html = error
        .map(|msg| format!(r#"<p class="error" role="alert">{}</p>"#, html_escape(msg)))
        .unwrap_or_default();

    layout(
        "Admin Login",
        &format!(
            r#"<h1>Restaurant admin</h1>
{}
<form method="post" action="{}">
<label>Email <input type="email" name="email" value="{}" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Sign in</button>
</form>"#,
            error_html,
            LOGIN_PATH,
            html_escape(email)
        ),
    )
}

/// `GET /admin/login`; already signed-in callers go straight to the dashboard.
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if request_session(&state, &headers).is_some() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    Html(login_form(None, "")).into_response()
}

/// `POST /admin/login` from the HTML form.
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = form.email.clone();
    match state.auth_service.login(form.email, form.password).await {
        Ok(session) => {
            let jar = jar.add(session_cookie(&session, &state.config));
            (jar, Redirect::to(DASHBOARD_PATH)).into_response()
        }
        Err(AppError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Html(login_form(Some(LOGIN_FAILED_MESSAGE), &email)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// `POST /admin/logout` from the dashboard's sign-out button.
pub async fn logout_submit(jar: CookieJar) -> Response {
    (jar.add(removal_cookie()), Redirect::to(LOGIN_PATH)).into_response()
}
