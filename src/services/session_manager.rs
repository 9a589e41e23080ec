//! Client-side session holder.
//!
//! Owns the one session a client has, mirrors it into [`SessionStorage`],
//! and answers `is_authenticated` from memory alone. Lifecycle:
//! [`hydrate`](SessionManager::hydrate) on start, [`logout`](SessionManager::logout)
//! on teardown.

use std::sync::{Arc, RwLock};

use crate::domain::Session;
use crate::errors::{AppError, AppResult};
use crate::gate::SessionCheck;
use crate::infra::SessionStorage;

use super::AuthService;

pub struct SessionManager {
    auth: Arc<dyn AuthService>,
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Create an empty manager. Call [`hydrate`](Self::hydrate) to pick up a
    /// persisted session.
    pub fn new(auth: Arc<dyn AuthService>, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            auth,
            storage,
            current: RwLock::new(None),
        }
    }

    /// Restore the persisted session if its token still verifies.
    ///
    /// Expired, forged or unreadable sessions are cleared from storage.
    /// Returns whether a session was restored.
    ///
    /// # Errors
    /// Only fails when clearing a rejected session from storage fails.
    pub fn hydrate(&self) -> AppResult<bool> {
        let restored = match self.storage.load() {
            Ok(Some(stored)) => match self.auth.authenticate_token(&stored.token) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::info!(error = %e, "Discarding persisted session");
                    self.storage.clear()?;
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable persisted session, clearing");
                self.storage.clear()?;
                None
            }
        };

        let found = restored.is_some();
        *self.write_slot()? = restored;
        Ok(found)
    }

    /// Pure read of in-memory state: a session is held and has not expired.
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .map(|slot| slot.as_ref().is_some_and(|s| !s.is_expired()))
            .unwrap_or(false)
    }

    /// The held session, if it is still valid.
    pub fn current_session(&self) -> Option<Session> {
        self.current
            .read()
            .ok()
            .and_then(|slot| slot.clone())
            .filter(|s| !s.is_expired())
    }

    /// Authenticate and install the new session.
    ///
    /// On failure nothing changes: a previously held session stays.
    pub async fn login(&self, email: impl Into<String>, password: impl Into<String>) -> AppResult<Session> {
        let session = self.auth.login(email.into(), password.into()).await?;

        self.storage.save(&session)?;
        *self.write_slot()? = Some(session.clone());

        Ok(session)
    }

    /// Forget the session in memory and storage. Idempotent.
    pub fn logout(&self) -> AppResult<()> {
        let previous = self.write_slot()?.take();
        self.storage.clear()?;

        if let Some(session) = previous {
            tracing::info!(user_id = %session.user_id, "Logged out");
        }
        Ok(())
    }

    fn write_slot(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Option<Session>>> {
        self.current
            .write()
            .map_err(|_| AppError::internal("session lock poisoned"))
    }
}

impl SessionCheck for SessionManager {
    fn is_authenticated(&self) -> bool {
        SessionManager::is_authenticated(self)
    }
}
