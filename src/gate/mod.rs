//! Route gate - decides between rendering protected content and sending
//! the caller to the login page.
//!
//! The gate knows nothing about tokens or HTTP. It asks a [`SessionCheck`]
//! and tells a [`Navigator`]; the HTTP middleware and the CLI supply both.

mod navigator;
pub mod policy;
mod route_gate;

pub use navigator::{Navigator, RedirectSlot};
pub use policy::{confirm, decide_view, GateView, MountAction};
pub use route_gate::{GateOutcome, GateState, LoadingPlaceholder, Rendered, RouteGate};

#[cfg(any(test, feature = "test-utils"))]
pub use navigator::MockNavigator;

use crate::domain::Session;

/// Synchronous, side-effect free "is the caller signed in".
pub trait SessionCheck {
    fn is_authenticated(&self) -> bool;
}

/// A request-scoped session: present and unexpired.
impl SessionCheck for Option<Session> {
    fn is_authenticated(&self) -> bool {
        self.as_ref().is_some_and(|session| !session.is_expired())
    }
}
