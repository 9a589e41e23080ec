//! Authentication service - credential checks and session tokens.
//!
//! Stateless: it owns no session. Clients keep theirs in a
//! [`SessionManager`](super::SessionManager); the HTTP layer re-validates
//! the token on every request.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, DUMMY_PASSWORD_HASH, TOKEN_TYPE_BEARER};
use crate::domain::{Claims, Password, Restaurant, Session, User};
use crate::errors::{AppError, AppResult};
use crate::infra::CredentialStore;

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Seconds until the token expires
    #[schema(example = 86400)]
    pub expires_in: i64,
    /// Restaurant the session is scoped to
    #[schema(example = "rest-1")]
    pub restaurant_id: String,
}

impl From<&Session> for TokenResponse {
    fn from(session: &Session) -> Self {
        Self {
            access_token: session.token.clone(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: session.remaining_seconds(),
            restaurant_id: session.restaurant_id.clone(),
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a session.
    ///
    /// Unknown email and wrong password both fail with
    /// `AppError::InvalidCredentials`.
    async fn login(&self, email: String, password: String) -> AppResult<Session>;

    /// Verify token signature and expiry and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Verify a token and confirm its user still exists
    fn authenticate_token(&self, token: &str) -> AppResult<Session>;

    /// Restaurant lookup for session holders
    fn find_restaurant(&self, id: &str) -> Option<Restaurant>;
}

/// Sign a session token for `user` valid for `ttl`.
fn issue_session(user: &User, config: &Config, ttl: Duration) -> AppResult<Session> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        restaurant_id: user.restaurant_id.clone(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
        jti: Uuid::new_v4(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(Session::from_claims(token, &claims))
}

fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expired means expired; the gate must not see a grace period
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService backed by a credential store.
pub struct Authenticator<S: CredentialStore + ?Sized> {
    store: Arc<S>,
    config: Config,
}

impl<S: CredentialStore + ?Sized> Authenticator<S> {
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self { store, config }
    }

    /// Issue a session for a known user without a password check.
    ///
    /// Used by tests and tooling that already trust the caller.
    pub fn issue_session(&self, user: &User) -> AppResult<Session> {
        issue_session(user, &self.config, Duration::hours(self.config.session_ttl_hours))
    }

    /// Issue a session with an explicit lifetime; negative values produce an
    /// already-expired session.
    pub fn issue_session_with_ttl(&self, user: &User, ttl: Duration) -> AppResult<Session> {
        issue_session(user, &self.config, ttl)
    }
}

#[async_trait]
impl<S: CredentialStore + ?Sized + 'static> AuthService for Authenticator<S> {
    async fn login(&self, email: String, password: String) -> AppResult<Session> {
        let user = self.store.find_user_by_email(&email);

        // Verify against a dummy hash for unknown emails so both failure
        // paths cost one Argon2 verification
        let stored = match &user {
            Some(user) => user.password.clone(),
            None => Password::from_hash(DUMMY_PASSWORD_HASH)?,
        };

        let password_valid = tokio::task::spawn_blocking(move || stored.verify(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::warn!(email = %email, "Login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        let session = self.issue_session(&user)?;
        tracing::info!(
            user_id = %user.id,
            restaurant_id = %user.restaurant_id,
            "Login succeeded"
        );
        Ok(session)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }

    fn authenticate_token(&self, token: &str) -> AppResult<Session> {
        let claims = self.verify_token(token)?;

        let Some(user) = self.store.find_user(&claims.sub) else {
            tracing::warn!(user_id = %claims.sub, "Token references unknown user");
            return Err(AppError::Unauthorized);
        };

        // Claims must still match the stored record
        if user.email != claims.email || user.restaurant_id != claims.restaurant_id {
            tracing::warn!(
                user_id = %claims.sub,
                token_restaurant_id = %claims.restaurant_id,
                restaurant_id = %user.restaurant_id,
                "Token claims no longer match the user record"
            );
            return Err(AppError::Unauthorized);
        }

        Ok(Session::from_claims(token, &claims))
    }

    fn find_restaurant(&self, id: &str) -> Option<Restaurant> {
        self.store.find_restaurant(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCredentialStore, StaticCredentialStore};

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn authenticator() -> Authenticator<StaticCredentialStore> {
        Authenticator::new(
            Arc::new(StaticCredentialStore::mock().unwrap()),
            Config::new(SECRET, 24).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_login_success_scopes_session_to_restaurant() {
        let auth = authenticator();

        let session = auth
            .login("john@example.com".to_string(), "password123".to_string())
            .await
            .unwrap();

        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.restaurant_id, "rest-1");
        assert!(!session.is_expired());

        let claims = auth.verify_token(&session.token).unwrap();
        assert_eq!(claims.restaurant_id, "rest-1");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_identical() {
        let auth = authenticator();

        let wrong = auth
            .login("john@example.com".to_string(), "wrong-password".to_string())
            .await
            .unwrap_err();
        let unknown = auth
            .login("nobody@example.com".to_string(), "anything".to_string())
            .await
            .unwrap_err();

        assert!(matches!(wrong, AppError::InvalidCredentials));
        assert!(matches!(unknown, AppError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert_eq!(wrong.code(), unknown.code());
    }

    #[tokio::test]
    async fn test_unknown_email_still_runs_verification() {
        let mut store = MockCredentialStore::new();
        store
            .expect_find_user_by_email()
            .times(1)
            .returning(|_| None);

        let auth = Authenticator::new(Arc::new(store), Config::new(SECRET, 1).unwrap());
        let result = auth
            .login("ghost@example.com".to_string(), "whatever".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let auth = authenticator();
        let user = StaticCredentialStore::mock()
            .unwrap()
            .find_user("user-1")
            .unwrap();
        let session = auth.issue_session(&user).unwrap();

        let tampered = format!("{}x", session.token);
        assert!(matches!(auth.verify_token(&tampered), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let other = Authenticator::new(
            Arc::new(StaticCredentialStore::mock().unwrap()),
            Config::new("another-secret-key-that-is-32-chars-long", 24).unwrap(),
        );
        let user = StaticCredentialStore::mock().unwrap().find_user("user-1").unwrap();
        let foreign = other.issue_session(&user).unwrap();

        assert!(authenticator().verify_token(&foreign.token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = authenticator();
        let user = StaticCredentialStore::mock().unwrap().find_user("user-1").unwrap();
        let expired = auth
            .issue_session_with_ttl(&user, Duration::seconds(-5))
            .unwrap();

        assert!(expired.is_expired());
        assert!(auth.authenticate_token(&expired.token).is_err());
    }

    #[test]
    fn test_token_for_vanished_user_rejected() {
        let auth = authenticator();
        let ghost = User::new(
            "user-404",
            "Ghost",
            "ghost@example.com",
            Password::from_hash(DUMMY_PASSWORD_HASH).unwrap(),
            "rest-1",
        );
        let session = auth.issue_session(&ghost).unwrap();

        assert!(auth.verify_token(&session.token).is_ok());
        assert!(matches!(
            auth.authenticate_token(&session.token),
            Err(AppError::Unauthorized)
        ));
    }

    fn john_moved_to(restaurant_id: &'static str, email: &'static str) -> MockCredentialStore {
        let mut store = MockCredentialStore::new();
        store.expect_find_user().returning(move |id| {
            Some(User::new(
                id,
                "John Smith",
                email,
                Password::from_hash(DUMMY_PASSWORD_HASH).unwrap(),
                restaurant_id,
            ))
        });
        store
    }

    #[test]
    fn test_token_for_reassigned_user_rejected() {
        let user = StaticCredentialStore::mock().unwrap().find_user("user-1").unwrap();
        let session = authenticator().issue_session(&user).unwrap();

        let moved = Authenticator::new(
            Arc::new(john_moved_to("rest-2", "john@example.com")),
            Config::new(SECRET, 24).unwrap(),
        );
        assert!(moved.verify_token(&session.token).is_ok());
        assert!(matches!(
            moved.authenticate_token(&session.token),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_token_for_renamed_email_rejected() {
        let user = StaticCredentialStore::mock().unwrap().find_user("user-1").unwrap();
        let session = authenticator().issue_session(&user).unwrap();

        let renamed = Authenticator::new(
            Arc::new(john_moved_to("rest-1", "john.smith@example.com")),
            Config::new(SECRET, 24).unwrap(),
        );
        assert!(matches!(
            renamed.authenticate_token(&session.token),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_token_matching_record_accepted() {
        let user = StaticCredentialStore::mock().unwrap().find_user("user-1").unwrap();
        let session = authenticator().issue_session(&user).unwrap();

        let same = Authenticator::new(
            Arc::new(john_moved_to("rest-1", "john@example.com")),
            Config::new(SECRET, 24).unwrap(),
        );
        let restored = same.authenticate_token(&session.token).unwrap();
        assert_eq!(restored.restaurant_id, "rest-1");
    }

    #[test]
    fn test_token_response_from_session() {
        let auth = authenticator();
        let user = StaticCredentialStore::mock().unwrap().find_user("user-2").unwrap();
        let session = auth.issue_session(&user).unwrap();

        let response = TokenResponse::from(&session);
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.restaurant_id, "rest-2");
        assert!(response.expires_in > 0 && response.expires_in <= 24 * 3600);
    }
}
