//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::api::middleware::{login_throttle_config, LoginThrottleConfig};
use crate::config::{Config, LOGIN_BURST_SIZE, LOGIN_REPLENISH_SECONDS};
use crate::errors::AppResult;
use crate::infra::{CredentialStore, StaticCredentialStore};
use crate::services::{AuthService, Authenticator};

/// Shared state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub store: Arc<dyn CredentialStore>,
    pub login_throttle: Arc<LoginThrottleConfig>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the production state: credential seed from
    /// `config.credentials_file` (built-in mock when unset) and an
    /// [`Authenticator`] over it.
    ///
    /// # Errors
    /// Fails if the seed file cannot be loaded or violates store integrity.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let store = Arc::new(StaticCredentialStore::from_optional_file(
            config.credentials_file.as_deref(),
        )?);
        let auth_service = Arc::new(Authenticator::new(store.clone(), config.clone()));

        Self::new(auth_service, store, config)
    }

    /// Create state from already-built services with the default login
    /// throttle.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        store: Arc<dyn CredentialStore>,
        config: Config,
    ) -> AppResult<Self> {
        let login_throttle = login_throttle_config(
            LOGIN_BURST_SIZE,
            LOGIN_REPLENISH_SECONDS,
            config.trust_proxy_headers,
        )?;

        Ok(Self {
            auth_service,
            store,
            login_throttle,
            config: Arc::new(config),
        })
    }

    /// Replace the login throttle (tests use tiny bursts).
    pub fn with_login_throttle(mut self, burst: u32, replenish_seconds: u64) -> AppResult<Self> {
        self.login_throttle =
            login_throttle_config(burst, replenish_seconds, self.config.trust_proxy_headers)?;
        Ok(self)
    }
}
