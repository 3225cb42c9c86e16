//! Scripted backend and navigator used by the crate's unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::backend::AuthBackend;
use crate::error::{BackendError, StorageError};
use crate::route::{Navigator, Route};
use crate::storage::{CredentialStore, MemoryCredentialStore};
use crate::store::SessionStore;
use crate::types::{AuthProvider, Credential, Identity};

pub type Reply = Result<Credential, BackendError>;

/// Backend whose answers are queued per endpoint.
///
/// Identity lookups succeed for tokens registered with [`MockBackend::accept`]
/// and are rejected with 401 otherwise. Federated exchanges and identity
/// lookups can be gated on a oneshot to control completion order.
#[derive(Default)]
pub struct MockBackend {
    pub calls: RefCell<Vec<String>>,
    identities: RefCell<HashMap<String, Identity>>,
    unreachable_identity: RefCell<bool>,
    login_replies: RefCell<VecDeque<Reply>>,
    register_replies: RefCell<VecDeque<Reply>>,
    federated_replies: RefCell<VecDeque<Reply>>,
    federated_gates: RefCell<HashMap<String, oneshot::Receiver<Reply>>>,
    identity_gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockBackend {
    pub fn accept(&self, token: &str, email: &str, provider: AuthProvider) {
        let identity = Identity { id: Some(1), email: email.to_owned(), auth_provider: provider };
        self.identities.borrow_mut().insert(token.to_owned(), identity);
    }

    pub fn revoke(&self, token: &str) {
        self.identities.borrow_mut().remove(token);
    }

    pub fn set_identity_unreachable(&self, unreachable: bool) {
        *self.unreachable_identity.borrow_mut() = unreachable;
    }

    pub fn queue_login(&self, reply: Reply) {
        self.login_replies.borrow_mut().push_back(reply);
    }

    pub fn queue_register(&self, reply: Reply) {
        self.register_replies.borrow_mut().push_back(reply);
    }

    pub fn queue_federated(&self, reply: Reply) {
        self.federated_replies.borrow_mut().push_back(reply);
    }

    /// Hold the exchange for `provider_credential` until the sender fires.
    pub fn gate_federated(&self, provider_credential: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.federated_gates.borrow_mut().insert(provider_credential.to_owned(), rx);
        tx
    }

    /// Hold the identity lookup for `token` until the sender fires.
    pub fn gate_identity(&self, token: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.identity_gates.borrow_mut().insert(token.to_owned(), rx);
        tx
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn next_reply(queue: &RefCell<VecDeque<Reply>>) -> Reply {
    queue.borrow_mut().pop_front().unwrap_or_else(|| Err(BackendError::Unreachable("no scripted reply".to_owned())))
}

pub fn token(value: &str) -> Reply {
    Ok(Credential::new(value))
}

pub fn rejected(status: u16, detail: &str) -> Reply {
    Err(BackendError::rejected(status, &serde_json::json!({ "detail": detail }).to_string()))
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for MockBackend {
    async fn fetch_identity(&self, credential: &Credential) -> Result<Identity, BackendError> {
        self.record(format!("me:{}", credential.as_str()));
        let gate = self.identity_gates.borrow_mut().remove(credential.as_str());
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        if *self.unreachable_identity.borrow() {
            return Err(BackendError::Unreachable("connection refused".to_owned()));
        }
        let identity = self.identities.borrow().get(credential.as_str()).cloned();
        identity.ok_or_else(|| BackendError::rejected(401, r#"{"detail":"Invalid token"}"#))
    }

    async fn login(&self, email: &str, _password: &str) -> Result<Credential, BackendError> {
        self.record(format!("login:{email}"));
        next_reply(&self.login_replies)
    }

    async fn register(&self, email: &str, _password: &str) -> Result<Credential, BackendError> {
        self.record(format!("register:{email}"));
        next_reply(&self.register_replies)
    }

    async fn exchange_federated(&self, provider_credential: &str) -> Result<Credential, BackendError> {
        self.record(format!("google:{provider_credential}"));
        let gate = self.federated_gates.borrow_mut().remove(provider_credential);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(BackendError::Unreachable("gate dropped".to_owned()))),
            None => next_reply(&self.federated_replies),
        }
    }
}

/// Navigator that records requested routes.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub routes: Rc<RefCell<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<Route> {
        self.routes.borrow().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

pub type TestStore = SessionStore<MockBackend, MemoryCredentialStore>;

/// Store over a fresh mock backend and the given storage.
pub fn store_with(storage: &MemoryCredentialStore) -> (TestStore, RecordingNavigator) {
    let navigator = RecordingNavigator::default();
    let store = SessionStore::new(MockBackend::default(), storage.clone(), Box::new(navigator.clone()));
    (store, navigator)
}

/// Memory store whose writes can be made to fail. Reads and clears still
/// reach the shared slot.
#[derive(Clone, Default)]
pub struct FlakyCredentialStore {
    inner: MemoryCredentialStore,
    fail_writes: Rc<RefCell<bool>>,
}

impl FlakyCredentialStore {
    pub fn over(inner: &MemoryCredentialStore) -> Self {
        Self { inner: inner.clone(), fail_writes: Rc::default() }
    }

    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }
}

impl CredentialStore for FlakyCredentialStore {
    fn load(&self) -> Option<String> {
        self.inner.load()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.inner.save(token)
    }

    fn clear(&self) {
        self.inner.clear();
    }
}

pub type FlakyStore = SessionStore<MockBackend, FlakyCredentialStore>;

pub fn flaky_store_with(storage: &FlakyCredentialStore) -> FlakyStore {
    SessionStore::new(MockBackend::default(), storage.clone(), Box::new(RecordingNavigator::default()))
}
