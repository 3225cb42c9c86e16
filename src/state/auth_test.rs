use super::*;
use session::{AuthProvider, Identity, PendingOps};

fn signed_in(email: &str) -> SessionSnapshot {
    SessionSnapshot {
        status: SessionStatus::Authenticated,
        identity: Some(Identity { id: Some(7), email: email.to_owned(), auth_provider: AuthProvider::Password }),
        pending: PendingOps::default(),
    }
}

#[test]
fn default_state_is_loading_with_pending_nav() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.nav_bar(), NavBarState::Pending);
}

#[test]
fn mirrors_authenticated_snapshot() {
    let state = AuthState::from(&signed_in("a@b.com"));
    assert_eq!(state.status(), SessionStatus::Authenticated);
    assert!(state.is_authenticated());
    assert_eq!(state.email().as_deref(), Some("a@b.com"));
    assert_eq!(state.nav_bar(), NavBarState::SignedIn { email: "a@b.com".to_owned() });
    assert!(!state.is_busy(OperationKind::Login));
}

#[test]
fn anonymous_snapshot_shows_login_control() {
    let snapshot = SessionSnapshot { status: SessionStatus::Anonymous, ..SessionSnapshot::default() };
    let state = AuthState::from(&snapshot);
    assert!(!state.is_loading());
    assert_eq!(state.email(), None);
    assert_eq!(state.nav_bar(), NavBarState::SignedOut);
}
