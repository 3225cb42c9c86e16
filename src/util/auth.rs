//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen goes through the same guard, so redirect behavior lives here
//! rather than in individual pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{GuardDecision, Route, RouteGuard};

use crate::state::auth::AuthState;
use crate::util::navigation::navigate_to;

/// Guard outcome for `route` under the current auth state.
pub fn decide(guard: &RouteGuard, route: Route, state: &AuthState) -> GuardDecision {
    guard.resolve(route, state.status())
}

/// Hash to write, if the guard redirected away from `route`.
pub fn redirect_for(guard: &RouteGuard, route: Route, state: &AuthState) -> Option<Route> {
    decide(guard, route, state).redirect_target().filter(|target| *target != route)
}

/// Rewrite the location hash whenever the guard redirects.
///
/// Re-runs on every hash change and every session status change. The view
/// renders the redirect target directly, so this only brings the address bar
/// in line.
pub fn install_route_guard(guard: RouteGuard, route: RwSignal<Route>, auth: RwSignal<AuthState>) {
    Effect::new(move || {
        let current = route.get();
        if let Some(target) = auth.with(|state| redirect_for(&guard, current, state)) {
            navigate_to(target);
        }
    });
}
