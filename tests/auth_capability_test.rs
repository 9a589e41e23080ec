//! Auth capability and route gate, exercised together the way a client
//! drives them: log in, navigate, restart, log out.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use digital_menu::config::{Config, LOGIN_PATH};
use digital_menu::gate::{GateOutcome, GateState, LoadingPlaceholder, Navigator, RouteGate};
use digital_menu::infra::{FileSessionStorage, MemorySessionStorage, SessionStorage, StaticCredentialStore};
use digital_menu::services::{Authenticator, SessionManager};
use digital_menu::AppError;

// =============================================================================
// Helpers
// =============================================================================

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Records every navigation request.
#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}

fn manager_with(storage: Arc<dyn SessionStorage>) -> SessionManager {
    let store = Arc::new(StaticCredentialStore::mock().unwrap());
    let auth = Arc::new(Authenticator::new(store, Config::new(SECRET, 24).unwrap()));
    SessionManager::new(auth, storage)
}

fn temp_session_file() -> PathBuf {
    std::env::temp_dir()
        .join(format!("digital-menu-test-{}", Uuid::new_v4()))
        .join("session.json")
}

// =============================================================================
// Capability
// =============================================================================

#[tokio::test]
async fn test_fresh_client_is_unauthenticated() {
    let sessions = manager_with(Arc::new(MemorySessionStorage::new()));
    assert!(!sessions.hydrate().unwrap());
    assert!(!sessions.is_authenticated());
}

#[tokio::test]
async fn test_relogin_replaces_session() {
    let sessions = manager_with(Arc::new(MemorySessionStorage::new()));

    let first = sessions.login("john@example.com", "password123").await.unwrap();
    let second = sessions.login("maria@example.com", "menu-admin-2024").await.unwrap();

    assert_ne!(first.token, second.token);
    let current = sessions.current_session().unwrap();
    assert_eq!(current.user_id, "user-2");
    assert_eq!(current.restaurant_id, "rest-2");
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let sessions = manager_with(Arc::new(MemorySessionStorage::new()));
    let held = sessions.login("john@example.com", "password123").await.unwrap();

    let err = assert_err!(sessions.login("maria@example.com", "wrong").await);

    assert!(matches!(err, AppError::InvalidCredentials));
    assert_eq!(sessions.current_session().unwrap().token, held.token);
}

#[tokio::test]
async fn test_session_survives_restart_via_file() {
    let path = temp_session_file();

    {
        let sessions = manager_with(Arc::new(FileSessionStorage::new(path.clone())));
        sessions.login("john@example.com", "password123").await.unwrap();
    }

    let restarted = manager_with(Arc::new(FileSessionStorage::new(path.clone())));
    assert!(!restarted.is_authenticated());
    assert!(restarted.hydrate().unwrap());
    assert_eq!(restarted.current_session().unwrap().email, "john@example.com");

    assert_ok!(restarted.logout());
    assert!(!path.exists());

    let after_logout = manager_with(Arc::new(FileSessionStorage::new(path.clone())));
    assert!(!after_logout.hydrate().unwrap());

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[tokio::test]
async fn test_tampered_session_file_is_discarded() {
    let path = temp_session_file();
    {
        let sessions = manager_with(Arc::new(FileSessionStorage::new(path.clone())));
        sessions.login("john@example.com", "password123").await.unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut stored: serde_json::Value = serde_json::from_str(&contents).unwrap();
    stored["token"] = serde_json::Value::String("forged.token.value".to_string());
    std::fs::write(&path, stored.to_string()).unwrap();

    let sessions = manager_with(Arc::new(FileSessionStorage::new(path.clone())));
    assert!(!sessions.hydrate().unwrap());
    assert!(!sessions.is_authenticated());
    assert!(!path.exists());

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[tokio::test]
async fn test_concurrent_logins_leave_one_valid_session() {
    let sessions = Arc::new(manager_with(Arc::new(MemorySessionStorage::new())));

    let a = {
        let sessions = sessions.clone();
        tokio::spawn(async move { sessions.login("john@example.com", "password123").await })
    };
    let b = {
        let sessions = sessions.clone();
        tokio::spawn(async move { sessions.login("maria@example.com", "menu-admin-2024").await })
    };

    let a = a.await.unwrap().unwrap();
    let b = b.await.unwrap().unwrap();

    let current = sessions.current_session().unwrap();
    assert!(current.token == a.token || current.token == b.token);
}

// =============================================================================
// Gate over the capability
// =============================================================================

#[tokio::test]
async fn test_gate_follows_login_and_logout() {
    let sessions = manager_with(Arc::new(MemorySessionStorage::new()));
    let navigator = RecordingNavigator::default();

    let outcome = RouteGate::new(&sessions, &navigator).resolve("dashboard");
    assert_eq!(outcome, GateOutcome::Placeholder(LoadingPlaceholder));
    assert_eq!(navigator.visits(), vec![LOGIN_PATH.to_string()]);

    sessions.login("john@example.com", "password123").await.unwrap();
    let outcome = RouteGate::new(&sessions, &navigator).resolve("dashboard");
    assert_eq!(outcome, GateOutcome::Render("dashboard"));
    assert_eq!(navigator.visits().len(), 1);

    sessions.logout().unwrap();
    let mut gate = RouteGate::new(&sessions, &navigator);
    assert_eq!(gate.mount(), GateState::Unauthenticated);
    assert_eq!(navigator.visits().len(), 2);
}

#[tokio::test]
async fn test_gate_redirects_once_per_navigation() {
    let sessions = manager_with(Arc::new(MemorySessionStorage::new()));
    let navigator = RecordingNavigator::default();

    let mut gate = RouteGate::new(&sessions, &navigator);
    gate.mount();
    gate.mount();

    assert_eq!(navigator.visits(), vec![LOGIN_PATH.to_string()]);
}
