//! Session value and the token claims it is built from.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub email: String,
    pub restaurant_id: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: Uuid,
}

/// Proof that a user authenticated.
///
/// Carries the signed token alongside the decoded identity so that callers
/// can answer "who is this" without re-verifying.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub restaurant_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("restaurant_id", &self.restaurant_id)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl Session {
    /// Pair a signed token with its claims.
    pub fn from_claims(token: impl Into<String>, claims: &Claims) -> Self {
        Self {
            token: token.into(),
            user_id: claims.sub.clone(),
            email: claims.email.clone(),
            restaurant_id: claims.restaurant_id.clone(),
            issued_at: timestamp(claims.iat),
            expires_at: timestamp(claims.exp),
        }
    }

    /// Expired sessions are treated exactly like missing ones.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whole seconds until expiry, zero once expired.
    pub fn remaining_seconds(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Session details safe to return to a client (no token)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(example = "user-1")]
    pub user_id: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "rest-1")]
    pub restaurant_id: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.clone(),
            email: session.email.clone(),
            restaurant_id: session.restaurant_id.clone(),
            expires_at: session.expires_at,
        }
    }
}
