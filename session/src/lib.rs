//! Client-side authentication session core.
//!
//! This crate owns the account state shared by the web client and the CLI:
//! the persisted bearer credential, the identity fetched for it, and the
//! route-guard rules that consume that state. It has no browser dependencies;
//! callers plug in an [`AuthBackend`] for HTTP, a [`CredentialStore`] for
//! persistence, and a [`Navigator`] for route changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web client constructs one [`SessionStore`] at start-up, hands it to
//! every view through context, and mirrors each [`SessionSnapshot`] into a
//! reactive signal. Views never mutate session state directly.

pub mod backend;
pub mod config;
pub mod error;
pub mod federated;
pub mod forms;
pub mod route;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use backend::{AuthBackend, AuthEndpoint};
pub use config::ClientConfig;
pub use error::{AuthFailure, AuthResult, BackendError, FailureKind, StorageError};
pub use federated::{ButtonOptions, CredentialResponse, FederatedConfig, handle_credential_response};
pub use forms::{ValidationError, submit_login, submit_register};
pub use route::{GuardDecision, NavBarState, Navigator, Route, RouteAccess, RouteGuard};
pub use storage::{CredentialStore, MemoryCredentialStore, TOKEN_STORAGE_KEY};
pub use store::{ObserverId, SessionStore};
pub use types::{AuthProvider, Credential, Identity, OperationKind, PendingOps, SessionSnapshot, SessionStatus};
