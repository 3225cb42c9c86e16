//! Session data model shared by the store, the guard, and the UI.
//!
//! DESIGN
//! ======
//! Session status is an explicit tag rather than something inferred from
//! which fields happen to be populated. The credential/identity pairing lives
//! inside the store's private state enum; consumers only ever see a
//! [`SessionSnapshot`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bearer token issued by the auth backend.
///
/// `Debug` is redacted so the token never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// How the account was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthProvider {
    /// Email + password signup. The backend reports this as `"email"`.
    #[default]
    #[serde(rename = "email", alias = "password")]
    Password,
    #[serde(rename = "google")]
    Google,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl AuthProvider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Google => "google",
            Self::Unknown => "unknown",
        }
    }
}

/// The authenticated user's profile as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id; absent for profiles synthesized after registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub auth_provider: AuthProvider,
}

impl Identity {
    /// Minimal profile held after a password registration.
    pub fn password(email: impl Into<String>) -> Self {
        Self { id: None, email: email.into(), auth_provider: AuthProvider::Password }
    }
}

/// Lifecycle of the shared session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// A stored credential is being validated.
    Loading,
    /// Credential and identity are both held.
    Authenticated,
    /// Neither credential nor identity is held.
    Anonymous,
}

impl SessionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Authenticated => "authenticated",
            Self::Anonymous => "anonymous",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store operations that perform a network exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Hydrate,
    Login,
    Register,
    Federated,
}

impl OperationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hydrate => "hydrate",
            Self::Login => "login",
            Self::Register => "register",
            Self::Federated => "federated",
        }
    }

    /// Message shown when the backend gives no usable detail.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Hydrate => "Session check failed",
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::Federated => "Google login failed",
        }
    }
}

/// In-flight counters per operation kind.
///
/// Counters rather than booleans: the federated callback may fire again
/// before the previous exchange settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PendingOps {
    hydrate: u32,
    login: u32,
    register: u32,
    federated: u32,
}

impl PendingOps {
    #[must_use]
    pub fn is_active(&self, kind: OperationKind) -> bool {
        self.count(kind) > 0
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.hydrate + self.login + self.register + self.federated > 0
    }

    #[must_use]
    pub fn count(&self, kind: OperationKind) -> u32 {
        match kind {
            OperationKind::Hydrate => self.hydrate,
            OperationKind::Login => self.login,
            OperationKind::Register => self.register,
            OperationKind::Federated => self.federated,
        }
    }

    pub(crate) fn begin(&mut self, kind: OperationKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(1);
    }

    pub(crate) fn finish(&mut self, kind: OperationKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_sub(1);
    }

    fn slot_mut(&mut self, kind: OperationKind) -> &mut u32 {
        match kind {
            OperationKind::Hydrate => &mut self.hydrate,
            OperationKind::Login => &mut self.login,
            OperationKind::Register => &mut self.register,
            OperationKind::Federated => &mut self.federated,
        }
    }
}

/// Read-only view of the session delivered to observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub identity: Option<Identity>,
    pub pending: PendingOps,
}

impl SessionSnapshot {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated && self.identity.is_some()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.email.as_str())
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self { status: SessionStatus::Loading, identity: None, pending: PendingOps::default() }
    }
}
