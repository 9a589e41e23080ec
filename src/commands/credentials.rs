//! Credential seed tooling: `hash-password`, `check-store`.

use crate::cli::args::{CheckStoreArgs, HashPasswordArgs};
use crate::config::Config;
use crate::domain::Password;
use crate::errors::AppResult;
use crate::infra::{CredentialStore, StaticCredentialStore};

/// Execute the hash-password command
pub fn hash_password(args: HashPasswordArgs) -> AppResult<()> {
    let password = Password::new(&args.password)?;
    println!("{}", password.as_str());
    Ok(())
}

/// Execute the check-store command
pub fn check_store(args: CheckStoreArgs, config: Config) -> AppResult<()> {
    let file = args.file.or(config.credentials_file);
    let store = StaticCredentialStore::from_optional_file(file.as_deref())?;

    match &file {
        Some(path) => println!("Credential seed {} is valid", path.display()),
        None => println!("Built-in mock credentials are valid"),
    }
    for restaurant in store.restaurants() {
        println!("  restaurant {}: {} ({})", restaurant.id, restaurant.name, restaurant.location);
    }
    for user in store.users() {
        println!("  user {}: {} <{}> -> {}", user.id, user.name, user.email, user.restaurant_id);
    }
    Ok(())
}
