//! Built-in mock credentials.
//!
//! Password hashes are Argon2id with the `argon2` crate defaults
//! (m=19456, t=2, p=1).
//!
//! | email               | password          |
//! |---------------------|-------------------|
//! | `john@example.com`  | `password123`     |
//! | `maria@example.com` | `menu-admin-2024` |

use crate::domain::{Password, Restaurant, User};
use crate::errors::AppResult;

pub(crate) fn mock_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("rest-1", "The Golden Spoon", "123 Main Street, Downtown"),
        Restaurant::new("rest-2", "Bella Vista Trattoria", "45 Harbor Road, Waterfront"),
    ]
}

pub(crate) fn mock_users() -> AppResult<Vec<User>> {
    Ok(vec![
        User::new(
            "user-1",
            "John Smith",
            "john@example.com",
            Password::from_hash(
                "$argon2id$v=19$m=19456,t=2,p=1$uomcxUU4gcP5VzIZh/aaQw$chVkyIq3RoioeLczzYTO5fy7lVk5hdb/ROMDJbC8AOk",
            )?,
            "rest-1",
        ),
        User::new(
            "user-2",
            "Maria Rossi",
            "maria@example.com",
            Password::from_hash(
                "$argon2id$v=19$m=19456,t=2,p=1$YrioO7/1XDFe9wBRQub7cg$ZkNUglqmQdfzgQjvh4sE4TlbsADgz5BG0+EFVg/RXl8",
            )?,
            "rest-2",
        ),
    ])
}
