//! The session store: single source of truth for who is signed in.
//!
//! ARCHITECTURE
//! ============
//! One store is built at start-up and shared by reference. All mutation goes
//! through `hydrate`, `login`, `register`, `federated_login`, and `logout`;
//! readers take snapshots or subscribe for change notification.
//!
//! CONCURRENCY
//! ===========
//! The store runs on a single-threaded event loop. State sits in `RefCell`s
//! and no borrow is held across an `.await`, so several operations may be in
//! flight at once. Each operation takes a sequence number when it starts and
//! its completion is applied only if no later-started operation has already
//! been applied. Logout advances the applied sequence so nothing started
//! before it can bring the session back.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::AuthBackend;
use crate::error::{AuthFailure, AuthResult};
use crate::route::{Navigator, Route};
use crate::storage::CredentialStore;
use crate::types::{Credential, Identity, OperationKind, PendingOps, SessionSnapshot, SessionStatus};

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(&SessionSnapshot)>;

/// Credential and identity move together; there is no variant holding an
/// identity without a credential, or an unvalidated credential that reads as
/// authenticated.
#[derive(Clone, Debug)]
enum SessionState {
    Loading { credential: Credential },
    Authenticated { credential: Credential, identity: Identity },
    Anonymous,
}

impl SessionState {
    fn status(&self) -> SessionStatus {
        match self {
            Self::Loading { .. } => SessionStatus::Loading,
            Self::Authenticated { .. } => SessionStatus::Authenticated,
            Self::Anonymous => SessionStatus::Anonymous,
        }
    }
}

struct Inner {
    state: SessionState,
    pending: PendingOps,
    next_seq: u64,
    applied_seq: u64,
}

impl Inner {
    fn begin(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Claim the right to write state for operation `seq`.
    fn claim(&mut self, seq: u64) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        true
    }
}

/// Shared authentication session.
pub struct SessionStore<B, S> {
    backend: B,
    storage: S,
    navigator: Box<dyn Navigator>,
    inner: RefCell<Inner>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_observer: RefCell<u64>,
}

/// Keeps an operation's pending flag raised until dropped, so every exit path
/// (success, failure, early return) lowers it.
struct PendingGuard<'a, B, S> {
    store: &'a SessionStore<B, S>,
    kind: OperationKind,
}

impl<B, S> Drop for PendingGuard<'_, B, S> {
    fn drop(&mut self) {
        self.store.inner.borrow_mut().pending.finish(self.kind);
        self.store.notify();
    }
}

impl<B, S> SessionStore<B, S> {
    /// Current status tag.
    pub fn status(&self) -> SessionStatus {
        self.inner.borrow().state.status()
    }

    /// True iff credential and identity are both held.
    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn identity(&self) -> Option<Identity> {
        match &self.inner.borrow().state {
            SessionState::Authenticated { identity, .. } => Some(identity.clone()),
            _ => None,
        }
    }

    /// Held credential, including one still awaiting validation.
    pub fn credential(&self) -> Option<Credential> {
        match &self.inner.borrow().state {
            SessionState::Loading { credential } | SessionState::Authenticated { credential, .. } => {
                Some(credential.clone())
            }
            SessionState::Anonymous => None,
        }
    }

    pub fn is_pending(&self, kind: OperationKind) -> bool {
        self.inner.borrow().pending.is_active(kind)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.borrow();
        let identity = match &inner.state {
            SessionState::Authenticated { identity, .. } => Some(identity.clone()),
            _ => None,
        };
        SessionSnapshot { status: inner.state.status(), identity, pending: inner.pending }
    }

    /// Register `observer` to receive a snapshot after every state or
    /// pending-flag change.
    pub fn subscribe(&self, observer: impl Fn(&SessionSnapshot) + 'static) -> ObserverId {
        let id = {
            let mut next = self.next_observer.borrow_mut();
            *next += 1;
            ObserverId(*next)
        };
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(observer_id, _)| *observer_id != id);
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Observers may read the store, so the list is copied out first.
        let observers: Vec<Observer> = self.observers.borrow().iter().map(|(_, observer)| observer.clone()).collect();
        for observer in observers {
            observer(&snapshot);
        }
    }

    fn begin_pending(&self, kind: OperationKind) -> PendingGuard<'_, B, S> {
        self.inner.borrow_mut().pending.begin(kind);
        self.notify();
        PendingGuard { store: self, kind }
    }

    fn begin_sequence(&self) -> u64 {
        self.inner.borrow_mut().begin()
    }
}

impl<B: AuthBackend, S: CredentialStore> SessionStore<B, S> {
    /// Build the store. Status starts `Loading` when `storage` already holds a
    /// credential and `Anonymous` otherwise; call [`hydrate`](Self::hydrate)
    /// once to settle it.
    pub fn new(backend: B, storage: S, navigator: Box<dyn Navigator>) -> Self {
        let state = match storage.load() {
            Some(token) => SessionState::Loading { credential: Credential::new(token) },
            None => SessionState::Anonymous,
        };
        Self {
            backend,
            storage,
            navigator,
            inner: RefCell::new(Inner { state, pending: PendingOps::default(), next_seq: 0, applied_seq: 0 }),
            observers: RefCell::new(Vec::new()),
            next_observer: RefCell::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate a persisted credential against the backend.
    ///
    /// Never surfaces an error: any failure clears the stored credential and
    /// leaves the session anonymous. A no-op unless status is `Loading`.
    pub async fn hydrate(&self) {
        let credential = match &self.inner.borrow().state {
            SessionState::Loading { credential } => credential.clone(),
            _ => return,
        };
        let _pending = self.begin_pending(OperationKind::Hydrate);
        let seq = self.begin_sequence();

        match self.backend.fetch_identity(&credential).await {
            Ok(identity) => {
                if self.apply(seq, SessionState::Authenticated { credential, identity }) {
                    tracing::info!(status = %SessionStatus::Authenticated, "session restored");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored credential rejected; clearing session");
                if self.inner.borrow_mut().claim(seq) {
                    self.storage.clear();
                    self.inner.borrow_mut().state = SessionState::Anonymous;
                    self.notify();
                }
            }
        }
    }

    /// Exchange email and password for a session.
    ///
    /// Inputs are assumed validated by the caller. On failure the prior
    /// session is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure`] with the backend's detail message, or a generic
    /// message when the backend could not be reached.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult {
        let kind = OperationKind::Login;
        let _pending = self.begin_pending(kind);
        let seq = self.begin_sequence();

        let credential = self.backend.login(email, password).await.map_err(|e| self.failure(kind, &e))?;
        let identity = self.backend.fetch_identity(&credential).await.map_err(|e| self.failure(kind, &e))?;
        self.establish(kind, seq, credential, identity)
    }

    /// Create an account and hold its session.
    ///
    /// The identity is synthesized from `email` instead of fetched.
    ///
    /// # Errors
    ///
    /// Same contract as [`login`](Self::login).
    pub async fn register(&self, email: &str, password: &str) -> AuthResult {
        let kind = OperationKind::Register;
        let _pending = self.begin_pending(kind);
        let seq = self.begin_sequence();

        let credential = self.backend.register(email, password).await.map_err(|e| self.failure(kind, &e))?;
        self.establish(kind, seq, credential, Identity::password(email))
    }

    /// Exchange an identity-widget credential for a session.
    ///
    /// Safe to call repeatedly: a completion that finishes after a
    /// later-started exchange has been applied is discarded, and failures
    /// never clear a session.
    ///
    /// # Errors
    ///
    /// Same contract as [`login`](Self::login).
    pub async fn federated_login(&self, provider_credential: &str) -> AuthResult {
        let kind = OperationKind::Federated;
        let _pending = self.begin_pending(kind);
        let seq = self.begin_sequence();

        let credential =
            self.backend.exchange_federated(provider_credential).await.map_err(|e| self.failure(kind, &e))?;
        let identity = self.backend.fetch_identity(&credential).await.map_err(|e| self.failure(kind, &e))?;
        self.establish(kind, seq, credential, identity)
    }

    /// Drop the session and return to the default route. No network call.
    pub fn logout(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            let seq = inner.begin();
            inner.claim(seq);
            inner.state = SessionState::Anonymous;
        }
        self.storage.clear();
        tracing::info!("signed out");
        self.notify();
        self.navigator.navigate(Route::default());
    }

    fn failure(&self, kind: OperationKind, err: &crate::error::BackendError) -> AuthFailure {
        tracing::warn!(operation = kind.as_str(), error = %err, "auth exchange failed");
        AuthFailure::from_backend(kind, err)
    }

    /// Persist and hold a freshly obtained session, unless a later-started
    /// operation already won.
    fn establish(&self, kind: OperationKind, seq: u64, credential: Credential, identity: Identity) -> AuthResult {
        if self.inner.borrow().applied_seq >= seq {
            tracing::debug!(operation = kind.as_str(), seq, "discarding superseded completion");
            return Ok(());
        }
        if let Err(e) = self.storage.save(credential.as_str()) {
            tracing::warn!(operation = kind.as_str(), error = %e, "could not persist credential");
            return Err(AuthFailure::from_storage(kind, &e));
        }
        let provider = identity.auth_provider.as_str();
        if self.apply(seq, SessionState::Authenticated { credential, identity }) {
            tracing::info!(operation = kind.as_str(), provider, "signed in");
        }
        Ok(())
    }

    fn apply(&self, seq: u64, state: SessionState) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.claim(seq) {
                tracing::debug!(seq, "discarding superseded completion");
                return false;
            }
            inner.state = state;
        }
        self.notify();
        true
    }
}
