//! Local session commands: `login`, `logout`, `status`.
//!
//! The session lives in `Config::session_file` between invocations.

use std::sync::Arc;

use crate::cli::args::LoginArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{FileSessionStorage, StaticCredentialStore};
use crate::services::{Authenticator, SessionManager};

/// Session manager over the configured credential seed and session file,
/// hydrated from disk.
pub fn session_manager(config: &Config) -> AppResult<SessionManager> {
    let store = Arc::new(StaticCredentialStore::from_optional_file(
        config.credentials_file.as_deref(),
    )?);
    let auth = Arc::new(Authenticator::new(store, config.clone()));
    let storage = Arc::new(FileSessionStorage::new(config.session_file.clone()));

    let manager = SessionManager::new(auth, storage);
    manager.hydrate()?;
    Ok(manager)
}

/// Execute the login command
pub async fn login(args: LoginArgs, config: Config) -> AppResult<()> {
    let manager = session_manager(&config)?;

    match manager.login(args.email, args.password).await {
        Ok(session) => {
            println!(
                "Logged in as {} (restaurant {}), session valid until {}",
                session.email, session.restaurant_id, session.expires_at
            );
            Ok(())
        }
        Err(AppError::InvalidCredentials) => {
            println!("Invalid email or password");
            Err(AppError::InvalidCredentials)
        }
        Err(e) => Err(e),
    }
}

/// Execute the logout command
pub fn logout(config: Config) -> AppResult<()> {
    session_manager(&config)?.logout()?;
    println!("Logged out");
    Ok(())
}

/// Execute the status command
pub fn status(config: Config) -> AppResult<()> {
    let manager = session_manager(&config)?;

    match manager.current_session() {
        Some(session) => println!(
            "Authenticated as {} (restaurant {}), {}s remaining",
            session.email,
            session.restaurant_id,
            session.remaining_seconds()
        ),
        None => println!("Not authenticated"),
    }
    Ok(())
}
