//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_SESSION_FILE, DEFAULT_SESSION_TTL_HOURS, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    pub session_ttl_hours: i64,
    /// Optional JSON seed replacing the built-in mock credentials
    pub credentials_file: Option<PathBuf>,
    /// Where the CLI keeps its session between invocations
    pub session_file: PathBuf,
    pub cookie_secure: bool,
    /// Key the login throttle on `X-Forwarded-For` / `X-Real-IP`
    pub trust_proxy_headers: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("credentials_file", &self.credentials_file)
            .field("session_file", &self.session_file)
            .field("cookie_secure", &self.cookie_secure)
            .field("trust_proxy_headers", &self.trust_proxy_headers)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns a validation error if JWT_SECRET is missing in a release
    /// build, shorter than the minimum length, or SESSION_TTL_HOURS is not
    /// positive.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            }
            Err(_) => {
                return Err(AppError::validation(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_HOURS);

        Self::new(jwt_secret, session_ttl_hours).map(|config| Self {
            credentials_file: env::var("CREDENTIALS_FILE").ok().map(PathBuf::from),
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            trust_proxy_headers: env::var("TRUST_PROXY_HEADERS")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            ..config
        })
    }

    /// Build a configuration with defaults for everything but the signing
    /// secret and session lifetime.
    ///
    /// # Errors
    /// Returns a validation error if the secret is too short or the TTL is
    /// not positive.
    pub fn new(jwt_secret: impl Into<String>, session_ttl_hours: i64) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::validation(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if session_ttl_hours <= 0 {
            return Err(AppError::validation("SESSION_TTL_HOURS must be positive"));
        }

        Ok(Self {
            jwt_secret,
            session_ttl_hours,
            credentials_file: None,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            cookie_secure: false,
            trust_proxy_headers: false,
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
