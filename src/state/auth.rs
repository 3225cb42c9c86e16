//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`SessionStore`] is the source of truth; [`AuthState`] is its reactive
//! mirror. The app subscribes once and copies every snapshot into an
//! `RwSignal<AuthState>` so route guards and user-aware components re-render
//! in the same cycle as the store changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;
use session::{NavBarState, OperationKind, SessionSnapshot, SessionStatus, SessionStore};

use crate::net::api::HttpAuthBackend;
use crate::util::storage::BrowserCredentialStore;

pub type AppSession = SessionStore<HttpAuthBackend, BrowserCredentialStore>;

/// Context handle to the store. The store is single-threaded, so it lives in
/// local arena storage.
pub type SessionHandle = StoredValue<Rc<AppSession>, LocalStorage>;

/// Reactive copy of the latest [`SessionSnapshot`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub snapshot: SessionSnapshot,
}

impl AuthState {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.snapshot.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.snapshot.status == SessionStatus::Loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.snapshot.is_authenticated()
    }

    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.snapshot.email().map(str::to_owned)
    }

    #[must_use]
    pub fn is_busy(&self, kind: OperationKind) -> bool {
        self.snapshot.pending.is_active(kind)
    }

    #[must_use]
    pub fn nav_bar(&self) -> NavBarState {
        NavBarState::from(&self.snapshot)
    }
}

impl From<&SessionSnapshot> for AuthState {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self { snapshot: snapshot.clone() }
    }
}

/// The session store provided by [`crate::app::App`].
pub fn use_session() -> Rc<AppSession> {
    expect_context::<SessionHandle>().get_value()
}
