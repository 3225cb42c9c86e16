use super::*;
use session::{AuthProvider, Identity, PendingOps, SessionSnapshot, SessionStatus};

fn state(status: SessionStatus) -> AuthState {
    let identity = (status == SessionStatus::Authenticated)
        .then(|| Identity { id: Some(1), email: "a@b.com".to_owned(), auth_provider: AuthProvider::Password });
    AuthState::from(&SessionSnapshot { status, identity, pending: PendingOps::default() })
}

#[test]
fn signed_in_user_on_login_is_sent_home() {
    let guard = RouteGuard::new();
    assert_eq!(redirect_for(&guard, Route::Login, &state(SessionStatus::Authenticated)), Some(Route::Home));
    assert_eq!(redirect_for(&guard, Route::Signup, &state(SessionStatus::Authenticated)), Some(Route::Home));
}

#[test]
fn no_redirect_while_loading() {
    let guard = RouteGuard::new().require_auth(Route::SemanticSimilarity);
    let loading = state(SessionStatus::Loading);
    assert_eq!(redirect_for(&guard, Route::Login, &loading), None);
    assert_eq!(redirect_for(&guard, Route::SemanticSimilarity, &loading), None);
    assert_eq!(decide(&guard, Route::SemanticSimilarity, &loading), GuardDecision::Wait);
}

#[test]
fn anonymous_user_on_protected_route_is_sent_to_login() {
    let guard = RouteGuard::new().require_auth(Route::SemanticSimilarity);
    let anonymous = state(SessionStatus::Anonymous);
    assert_eq!(redirect_for(&guard, Route::SemanticSimilarity, &anonymous), Some(Route::Login));
    assert_eq!(redirect_for(&guard, Route::Paraphrase, &anonymous), None);
}

#[test]
fn public_routes_render_for_everyone() {
    let guard = RouteGuard::new();
    for status in [SessionStatus::Loading, SessionStatus::Authenticated, SessionStatus::Anonymous] {
        assert_eq!(decide(&guard, Route::Home, &state(status)), GuardDecision::Render(Route::Home));
    }
}
