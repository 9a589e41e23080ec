//! Domain layer - Core entities of the admin authentication model
//!
//! Users, restaurants, hashed passwords and sessions. Nothing here performs
//! I/O; stores and services build on these types.

pub mod password;
pub mod restaurant;
pub mod session;
pub mod user;

pub use password::Password;
pub use restaurant::Restaurant;
pub use session::{Claims, Session, SessionResponse};
pub use user::{User, UserResponse};
