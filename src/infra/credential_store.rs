//! Credential store - read-only table of users and restaurants.
//!
//! The store is validated once at construction and never mutated afterwards.
//! Lookups that miss return `None`; an unknown email is an ordinary outcome
//! of a bad login attempt.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::seed;
use crate::domain::{Restaurant, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential lookups used by authentication.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialStore: Send + Sync {
    /// Exact, case-sensitive email match
    fn find_user_by_email(&self, email: &str) -> Option<User>;

    /// Find user by id
    fn find_user(&self, id: &str) -> Option<User>;

    /// Find restaurant by id
    fn find_restaurant(&self, id: &str) -> Option<Restaurant>;

    /// All users in insertion order
    fn users(&self) -> Vec<User>;

    /// All restaurants in insertion order
    fn restaurants(&self) -> Vec<Restaurant>;
}

/// On-disk seed format.
#[derive(Debug, Deserialize)]
struct SeedFile {
    restaurants: Vec<Restaurant>,
    users: Vec<User>,
}

/// Immutable in-memory credential store.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    users: Vec<User>,
    restaurants: Vec<Restaurant>,
    user_by_email: HashMap<String, usize>,
    user_by_id: HashMap<String, usize>,
    restaurant_by_id: HashMap<String, usize>,
}

impl StaticCredentialStore {
    /// Build a store, enforcing unique ids and emails and that every user
    /// belongs to a known restaurant.
    ///
    /// # Errors
    /// Returns `AppError::Integrity` describing the first violation found.
    pub fn new(restaurants: Vec<Restaurant>, users: Vec<User>) -> AppResult<Self> {
        let mut restaurant_by_id = HashMap::with_capacity(restaurants.len());
        for (idx, restaurant) in restaurants.iter().enumerate() {
            if restaurant_by_id.insert(restaurant.id.clone(), idx).is_some() {
                return Err(AppError::integrity(format!(
                    "duplicate restaurant id '{}'",
                    restaurant.id
                )));
            }
        }

        let mut user_by_email = HashMap::with_capacity(users.len());
        let mut user_by_id = HashMap::with_capacity(users.len());
        for (idx, user) in users.iter().enumerate() {
            if !restaurant_by_id.contains_key(&user.restaurant_id) {
                return Err(AppError::integrity(format!(
                    "user '{}' references unknown restaurant '{}'",
                    user.id, user.restaurant_id
                )));
            }
            if user_by_id.insert(user.id.clone(), idx).is_some() {
                return Err(AppError::integrity(format!("duplicate user id '{}'", user.id)));
            }
            if user_by_email.insert(user.email.clone(), idx).is_some() {
                return Err(AppError::integrity(format!(
                    "duplicate email '{}'",
                    user.email
                )));
            }
        }

        Ok(Self {
            users,
            restaurants,
            user_by_email,
            user_by_id,
            restaurant_by_id,
        })
    }

    /// Store populated with the built-in mock restaurants and users.
    pub fn mock() -> AppResult<Self> {
        Self::new(seed::mock_restaurants(), seed::mock_users()?)
    }

    /// Load a JSON seed file of the form
    /// `{"restaurants": [...], "users": [...]}`.
    ///
    /// # Errors
    /// Fails on unreadable files, malformed JSON or hashes, and any
    /// integrity violation.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let seed: SeedFile = serde_json::from_str(&raw)?;
        let store = Self::new(seed.restaurants, seed.users)?;

        tracing::info!(
            path = %path.display(),
            users = store.users.len(),
            restaurants = store.restaurants.len(),
            "Loaded credential seed"
        );
        Ok(store)
    }

    /// Use the seed file when configured, the built-in mock otherwise.
    pub fn from_optional_file(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::mock(),
        }
    }
}

impl CredentialStore for StaticCredentialStore {
    fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.user_by_email
            .get(email)
            .and_then(|&idx| self.users.get(idx))
            .cloned()
    }

    fn find_user(&self, id: &str) -> Option<User> {
        self.user_by_id
            .get(id)
            .and_then(|&idx| self.users.get(idx))
            .cloned()
    }

    fn find_restaurant(&self, id: &str) -> Option<Restaurant> {
        self.restaurant_by_id
            .get(id)
            .and_then(|&idx| self.restaurants.get(idx))
            .cloned()
    }

    fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DUMMY_PASSWORD_HASH;
    use crate::domain::Password;

    fn user(id: &str, email: &str, restaurant_id: &str) -> User {
        User::new(
            id,
            "Test User",
            email,
            Password::from_hash(DUMMY_PASSWORD_HASH).unwrap(),
            restaurant_id,
        )
    }

    #[test]
    fn test_find_restaurant() {
        let store = StaticCredentialStore::mock().unwrap();

        let restaurant = store.find_restaurant("rest-1").unwrap();
        assert_eq!(restaurant.name, "The Golden Spoon");
        assert!(store.find_restaurant("rest-999").is_none());
    }

    #[test]
    fn test_find_user_by_email_is_case_sensitive() {
        let store = StaticCredentialStore::mock().unwrap();

        let john = store.find_user_by_email("john@example.com").unwrap();
        assert_eq!(john.restaurant_id, "rest-1");
        assert!(store.find_user_by_email("John@Example.com").is_none());
        assert!(store.find_user_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn test_find_user_by_id() {
        let store = StaticCredentialStore::mock().unwrap();
        assert_eq!(store.find_user("user-2").unwrap().email, "maria@example.com");
        assert!(store.find_user("user-404").is_none());
    }

    #[test]
    fn test_mock_users_reference_existing_restaurants() {
        let store = StaticCredentialStore::mock().unwrap();
        for user in store.users() {
            assert!(store.find_restaurant(&user.restaurant_id).is_some());
        }
        assert_eq!(store.restaurants().len(), 2);
    }

    #[test]
    fn test_unknown_restaurant_rejected() {
        let result = StaticCredentialStore::new(
            vec![Restaurant::new("rest-1", "A", "B")],
            vec![user("user-1", "a@example.com", "rest-404")],
        );
        assert!(matches!(result, Err(AppError::Integrity(msg)) if msg.contains("rest-404")));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let result = StaticCredentialStore::new(
            vec![Restaurant::new("rest-1", "A", "B")],
            vec![
                user("user-1", "same@example.com", "rest-1"),
                user("user-2", "same@example.com", "rest-1"),
            ],
        );
        assert!(matches!(result, Err(AppError::Integrity(_))));
    }

    #[test]
    fn test_emails_differing_in_case_are_distinct() {
        let result = StaticCredentialStore::new(
            vec![Restaurant::new("rest-1", "A", "B")],
            vec![
                user("user-1", "same@example.com", "rest-1"),
                user("user-2", "Same@example.com", "rest-1"),
            ],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_restaurant_rejected() {
        let result = StaticCredentialStore::new(
            vec![Restaurant::new("rest-1", "A", "B"), Restaurant::new("rest-1", "C", "D")],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_roundtrips_seed() {
        let path = std::env::temp_dir().join(format!("menu-seed-{}.json", uuid::Uuid::new_v4()));
        let json = serde_json::json!({
            "restaurants": [{"id": "rest-9", "name": "Corner Bistro", "location": "Elm St"}],
            "users": [{
                "id": "user-9",
                "name": "Kim",
                "email": "kim@example.com",
                "password": DUMMY_PASSWORD_HASH,
                "restaurant_id": "rest-9"
            }]
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let store = StaticCredentialStore::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.find_restaurant("rest-9").unwrap().name, "Corner Bistro");
        assert!(store.find_user_by_email("kim@example.com").is_some());
    }

    #[test]
    fn test_from_missing_file_is_storage_error() {
        let path = std::env::temp_dir().join(format!("menu-missing-{}.json", uuid::Uuid::new_v4()));
        assert!(matches!(
            StaticCredentialStore::from_file(path),
            Err(AppError::Storage(_))
        ));
    }
}
