//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Password;

/// Restaurant staff member allowed into the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique within a store, matched case-sensitively
    pub email: String,
    #[serde(deserialize_with = "deserialize_password")]
    pub password: Password,
    /// Owning restaurant; must exist in the same store
    pub restaurant_id: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: Password,
        restaurant_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password,
            restaurant_id: restaurant_id.into(),
        }
    }
}

fn deserialize_password<'de, D>(deserializer: D) -> Result<Password, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let hash = String::deserialize(deserializer)?;
    Password::from_hash(hash).map_err(serde::de::Error::custom)
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "user-1")]
    pub id: String,
    #[schema(example = "John Smith")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "rest-1")]
    pub restaurant_id: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            restaurant_id: user.restaurant_id.clone(),
        }
    }
}
