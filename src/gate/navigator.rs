use std::sync::Mutex;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fire-and-forget client navigation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that records the requested destination for the caller to act
/// on, e.g. as an HTTP `Location` header.
#[derive(Debug, Default)]
pub struct RedirectSlot {
    target: Mutex<Option<String>>,
}

impl RedirectSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination requested so far, if any.
    pub fn target(&self) -> Option<String> {
        self.target.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Navigator for RedirectSlot {
    fn navigate(&self, path: &str) {
        if let Ok(mut slot) = self.target.lock() {
            tracing::debug!(to = path, "Gate navigation requested");
            *slot = Some(path.to_string());
        }
    }
}
