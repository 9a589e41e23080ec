//! The two pure decisions the gate is made of.

use crate::config::LOGIN_PATH;

/// What the gate shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// Spinner and "Checking authentication..."; never the protected content
    Loading,
    Content,
}

/// What the gate does once mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountAction {
    Stay,
    Redirect(&'static str),
}

/// Render-time decision.
pub fn decide_view(authenticated: bool) -> GateView {
    if authenticated {
        GateView::Content
    } else {
        GateView::Loading
    }
}

/// Mount-time decision. Authoritative for navigation.
pub fn confirm(authenticated: bool) -> MountAction {
    if authenticated {
        MountAction::Stay
    } else {
        MountAction::Redirect(LOGIN_PATH)
    }
}
