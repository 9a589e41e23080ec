//! Session token transport: the `menu_session` cookie or a bearer header.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::{Config, BEARER_TOKEN_PREFIX, SESSION_COOKIE_NAME};
use crate::domain::Session;

/// HttpOnly cookie carrying the session token until it expires.
pub fn session_cookie(session: &Session, config: &Config) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(time::Duration::seconds(session.remaining_seconds()))
        .build()
}

/// Expired cookie matching [`session_cookie`]'s name and path. Added to the
/// jar rather than removed from it, so `Set-Cookie` is sent even when the
/// request carried no session cookie.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    cookie.make_removal();
    cookie
}

/// Session token from the cookie, falling back to `Authorization: Bearer`.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
