//! Hash routes and the auth-aware route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hash fragment is the only route source. The web client re-runs
//! [`RouteGuard::resolve`] whenever the hash or the session status changes and
//! renders whatever the decision names, so a redirected screen never paints.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::types::{SessionSnapshot, SessionStatus};

/// Screens reachable through the hash router.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Login,
    Signup,
    Paraphrase,
    SemanticSimilarity,
    WritingStyle,
    Pretrained,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Auth screens; authenticated users are sent to the default route.
    GuestOnly,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Login,
        Route::Signup,
        Route::Paraphrase,
        Route::SemanticSimilarity,
        Route::WritingStyle,
        Route::Pretrained,
    ];

    /// Analysis screens listed in the sidebar.
    pub const ANALYSIS: [Route; 4] =
        [Route::Paraphrase, Route::SemanticSimilarity, Route::WritingStyle, Route::Pretrained];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Paraphrase => "/paraphrase",
            Self::SemanticSimilarity => "/semantic-similarity",
            Self::WritingStyle => "/writing-style",
            Self::Pretrained => "/pretrained",
        }
    }

    /// Fragment form, e.g. `#/login`.
    #[must_use]
    pub fn hash(self) -> String {
        format!("#{}", self.path())
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Signup => "Sign up",
            Self::Paraphrase => "Paraphrase Detection",
            Self::SemanticSimilarity => "Semantic Similarity",
            Self::WritingStyle => "Writing Style",
            Self::Pretrained => "Pretrained Language Models",
        }
    }

    #[must_use]
    pub fn access(self) -> RouteAccess {
        match self {
            Self::Login | Self::Signup => RouteAccess::GuestOnly,
            _ => RouteAccess::Public,
        }
    }

    /// Resolve a location hash. Unknown paths fall back to [`Route::Home`].
    #[must_use]
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim().trim_start_matches('#');
        let path = path.split(['?', '&']).next().unwrap_or_default();
        let path = path.trim_matches('/');
        match path {
            "login" => Self::Login,
            "signup" => Self::Signup,
            "paraphrase" => Self::Paraphrase,
            "semantic-similarity" | "writing-style-2" => Self::SemanticSimilarity,
            "writing-style" | "writing-style-1" => Self::WritingStyle,
            "pretrained" | "writing-style-3" => Self::Pretrained,
            _ => Self::Home,
        }
    }
}

/// Outcome of running the guard for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    Redirect(Route),
    /// Hydration is still running and the route depends on its outcome.
    Wait,
}

impl GuardDecision {
    /// The screen to draw, if any. Redirects draw their target directly.
    #[must_use]
    pub fn screen(self) -> Option<Route> {
        match self {
            Self::Render(route) | Self::Redirect(route) => Some(route),
            Self::Wait => None,
        }
    }

    #[must_use]
    pub fn redirect_target(self) -> Option<Route> {
        match self {
            Self::Redirect(route) => Some(route),
            _ => None,
        }
    }
}

/// Auth gating rules for the hash router.
///
/// Guest-only routes are built in. Routes that require sign-in are opt-in via
/// [`RouteGuard::require_auth`]; none are protected by default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    protected: Vec<Route>,
}

impl RouteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `route` as requiring an authenticated session. Guest-only routes
    /// cannot be protected and are ignored.
    #[must_use]
    pub fn require_auth(mut self, route: Route) -> Self {
        if route.access() == RouteAccess::Public && !self.protected.contains(&route) {
            self.protected.push(route);
        }
        self
    }

    #[must_use]
    pub fn requires_auth(&self, route: Route) -> bool {
        self.protected.contains(&route)
    }

    #[must_use]
    pub fn resolve(&self, route: Route, status: SessionStatus) -> GuardDecision {
        let guest_only = route.access() == RouteAccess::GuestOnly;
        let protected = self.requires_auth(route);
        match status {
            SessionStatus::Loading if guest_only || protected => GuardDecision::Wait,
            SessionStatus::Authenticated if guest_only => GuardDecision::Redirect(Route::default()),
            SessionStatus::Anonymous if protected => GuardDecision::Redirect(Route::Login),
            _ => GuardDecision::Render(route),
        }
    }
}

/// What the navigation bar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavBarState {
    /// Hydration in progress; neither control is shown.
    Pending,
    SignedIn { email: String },
    SignedOut,
}

impl From<&SessionSnapshot> for NavBarState {
    fn from(snapshot: &SessionSnapshot) -> Self {
        match (snapshot.status, snapshot.email()) {
            (SessionStatus::Loading, _) => Self::Pending,
            (SessionStatus::Authenticated, Some(email)) => Self::SignedIn { email: email.to_owned() },
            _ => Self::SignedOut,
        }
    }
}

/// Sink for route changes requested outside the router, e.g. by logout.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Navigator for hosts without a router.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = route.path(), "navigation requested without router");
    }
}
