//! Route gate state machine.
//!
//! ```text
//!            render: authenticated
//! Checking ──────────────────────────▶ Authenticated
//!    │                                      │
//!    │ mount: unauthenticated               │ mount: unauthenticated
//!    ▼                                      ▼
//! Unauthenticated ◀─────────────────────────┘
//! ```
//!
//! `render` only chooses what is visible. `mount` re-checks and owns
//! navigation, so a session that lapses between the two still redirects.

use std::fmt;

use super::navigator::Navigator;
use super::policy::{confirm, decide_view, GateView, MountAction};
use super::SessionCheck;
use crate::config::GATE_LOADING_MESSAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Spinner plus "Checking authentication...".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingPlaceholder;

impl LoadingPlaceholder {
    pub fn message(&self) -> &'static str {
        GATE_LOADING_MESSAGE
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="gate-loading" role="status" aria-live="polite"><div class="spinner"></div><p>{}</p></div>"#,
            self.message()
        )
    }
}

impl fmt::Display for LoadingPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Output of the render phase.
#[derive(Debug, PartialEq, Eq)]
pub enum Rendered<T> {
    Loading(LoadingPlaceholder),
    Content(T),
}

/// Final result once both phases have run.
#[derive(Debug, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// Children shown, no navigation
    Render(T),
    /// Children withheld; the navigator was told where to go unless the
    /// session appeared between render and mount
    Placeholder(LoadingPlaceholder),
}

/// Wraps protected content for one navigation.
pub struct RouteGate<'a, C: SessionCheck + ?Sized, N: Navigator + ?Sized> {
    session: &'a C,
    navigator: &'a N,
    state: GateState,
    navigated: bool,
}

impl<'a, C: SessionCheck + ?Sized, N: Navigator + ?Sized> RouteGate<'a, C, N> {
    pub fn new(session: &'a C, navigator: &'a N) -> Self {
        Self {
            session,
            navigator,
            state: GateState::Checking,
            navigated: false,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Render phase: show children only for an authenticated caller.
    pub fn render<T>(&mut self, children: T) -> Rendered<T> {
        match decide_view(self.session.is_authenticated()) {
            GateView::Content => {
                self.state = GateState::Authenticated;
                Rendered::Content(children)
            }
            GateView::Loading => Rendered::Loading(LoadingPlaceholder),
        }
    }

    /// Mount phase: re-check and navigate away if unauthenticated.
    ///
    /// Navigation happens at most once per gate.
    pub fn mount(&mut self) -> GateState {
        match confirm(self.session.is_authenticated()) {
            MountAction::Stay => {
                self.state = GateState::Authenticated;
            }
            MountAction::Redirect(to) => {
                self.state = GateState::Unauthenticated;
                if !self.navigated {
                    self.navigated = true;
                    self.navigator.navigate(to);
                }
            }
        }
        self.state
    }

    /// Run render then mount.
    pub fn resolve<T>(mut self, children: T) -> GateOutcome<T> {
        let rendered = self.render(children);
        let state = self.mount();

        match (rendered, state) {
            (Rendered::Content(children), GateState::Authenticated) => GateOutcome::Render(children),
            (Rendered::Content(_), _) => GateOutcome::Placeholder(LoadingPlaceholder),
            (Rendered::Loading(placeholder), _) => GateOutcome::Placeholder(placeholder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::navigator::{MockNavigator, RedirectSlot};
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers from a script, one entry per call, repeating the last.
    struct ScriptedSession {
        answers: Vec<bool>,
        calls: AtomicUsize,
    }

    impl ScriptedSession {
        fn new(answers: &[bool]) -> Self {
            Self {
                answers: answers.to_vec(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl SessionCheck for ScriptedSession {
        fn is_authenticated(&self) -> bool {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.answers[n.min(self.answers.len() - 1)]
        }
    }

    #[test]
    fn test_unauthenticated_shows_placeholder_and_redirects_once() {
        let session = ScriptedSession::new(&[false]);
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .with(eq("/admin/login"))
            .times(1)
            .return_const(());

        let mut gate = RouteGate::new(&session, &navigator);
        assert_eq!(gate.state(), GateState::Checking);

        assert_eq!(gate.render("secret menu"), Rendered::Loading(LoadingPlaceholder));
        assert_eq!(gate.state(), GateState::Checking);

        assert_eq!(gate.mount(), GateState::Unauthenticated);
        assert_eq!(gate.mount(), GateState::Unauthenticated);
    }

    #[test]
    fn test_authenticated_renders_children_without_navigation() {
        let session = ScriptedSession::new(&[true]);
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(0);

        let mut gate = RouteGate::new(&session, &navigator);
        assert_eq!(gate.render(vec![1, 2, 3]), Rendered::Content(vec![1, 2, 3]));
        assert_eq!(gate.mount(), GateState::Authenticated);
    }

    #[test]
    fn test_session_lapsing_before_mount_still_redirects() {
        let session = ScriptedSession::new(&[true, false]);
        let slot = RedirectSlot::new();

        let outcome = RouteGate::new(&session, &slot).resolve("dashboard");

        assert_eq!(outcome, GateOutcome::Placeholder(LoadingPlaceholder));
        assert_eq!(slot.target().as_deref(), Some("/admin/login"));
    }

    #[test]
    fn test_session_appearing_before_mount_keeps_placeholder_without_redirect() {
        let session = ScriptedSession::new(&[false, true]);
        let slot = RedirectSlot::new();

        let outcome = RouteGate::new(&session, &slot).resolve("dashboard");

        assert_eq!(outcome, GateOutcome::Placeholder(LoadingPlaceholder));
        assert!(slot.target().is_none());
    }

    #[test]
    fn test_resolve_authenticated_returns_children() {
        let session = ScriptedSession::new(&[true]);
        let slot = RedirectSlot::new();

        assert_eq!(
            RouteGate::new(&session, &slot).resolve("dashboard"),
            GateOutcome::Render("dashboard")
        );
        assert!(slot.target().is_none());
    }

    #[test]
    fn test_placeholder_text() {
        assert_eq!(LoadingPlaceholder.to_string(), "Checking authentication...");
        assert!(LoadingPlaceholder.to_html().contains("spinner"));
    }
}
