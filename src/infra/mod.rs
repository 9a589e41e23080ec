//! Infrastructure layer
//!
//! - Credential store (static users and restaurants, optional JSON seed)
//! - Session persistence for clients

pub mod credential_store;
mod seed;
pub mod session_storage;

pub use credential_store::{CredentialStore, StaticCredentialStore};
pub use session_storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};

#[cfg(any(test, feature = "test-utils"))]
pub use credential_store::MockCredentialStore;
#[cfg(any(test, feature = "test-utils"))]
pub use session_storage::MockSessionStorage;
