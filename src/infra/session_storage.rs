//! Persisted client session storage.
//!
//! The browser keeps its token in local storage; the Rust client keeps it
//! behind this trait. One session slot per storage, last writer wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::Session;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Single-slot persistence for the current session.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SessionStorage: Send + Sync {
    /// Read the persisted session, if any
    fn load(&self) -> AppResult<Option<Session>>;

    /// Replace the persisted session
    fn save(&self, session: &Session) -> AppResult<()>;

    /// Remove the persisted session; a no-op when nothing is stored
    fn clear(&self) -> AppResult<()>;
}

/// Process-local storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a session.
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> AppResult<Option<Session>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| AppError::internal("session storage lock poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AppError::internal("session storage lock poisoned"))?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AppError::internal("session storage lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// JSON file storage used by the CLI.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> AppResult<Option<Session>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash never leaves a half-written session
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(session)?)?;
        restrict_permissions(&tmp)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "Session persisted");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> AppResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> AppResult<()> {
    Ok(())
}
