//! Open command - runs the route gate for one path against the local
//! session, the way a browser client would on navigation.

use crate::cli::args::OpenArgs;
use crate::config::{Config, PROTECTED_PREFIX};
use crate::errors::AppResult;
use crate::gate::{GateOutcome, Navigator, RouteGate};

use super::session::session_manager;

/// Navigator that reports where the gate sends the user.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        println!("-> redirect to {}", path);
    }
}

fn is_protected(path: &str) -> bool {
    path == PROTECTED_PREFIX
        || path
            .strip_prefix(PROTECTED_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Execute the open command
pub fn execute(args: OpenArgs, config: Config) -> AppResult<()> {
    if !is_protected(&args.path) {
        println!("{} (public)", args.path);
        return Ok(());
    }

    let manager = session_manager(&config)?;
    let content = manager
        .current_session()
        .map(|s| format!("{} for {}", args.path, s.email))
        .unwrap_or_else(|| args.path.clone());

    match RouteGate::new(&manager, &ConsoleNavigator).resolve(content) {
        GateOutcome::Render(content) => println!("{}", content),
        GateOutcome::Placeholder(placeholder) => println!("{}", placeholder),
    }
    Ok(())
}
