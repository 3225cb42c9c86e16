//! Error types for the session core.
//!
//! ERROR HANDLING
//! ==============
//! Backend and storage errors stop at the store boundary. Callers of the
//! store only ever receive an [`AuthFailure`], whose `Display` output is the
//! message a form shows inline.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::types::OperationKind;

/// Result of a store operation.
pub type AuthResult = Result<(), AuthFailure>;

/// Broad failure class, kept for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected by form validation before any network call.
    InvalidInput,
    /// The backend answered and refused.
    Rejected,
    /// Transport, parse, or local persistence failure.
    Unreachable,
}

/// Failure surfaced to the caller of a store operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl AuthFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidInput, message)
    }

    /// Convert a backend error for `operation`, preferring the backend's own
    /// detail message over the generic fallback.
    #[must_use]
    pub fn from_backend(operation: OperationKind, err: &BackendError) -> Self {
        match err {
            BackendError::Rejected { detail: Some(detail), .. } => Self::new(FailureKind::Rejected, detail.clone()),
            BackendError::Rejected { detail: None, .. } => {
                Self::new(FailureKind::Rejected, operation.fallback_message())
            }
            BackendError::Unreachable(_) | BackendError::InvalidResponse(_) => {
                Self::new(FailureKind::Unreachable, operation.fallback_message())
            }
        }
    }

    #[must_use]
    pub fn from_storage(operation: OperationKind, _err: &StorageError) -> Self {
        Self::new(FailureKind::Unreachable, operation.fallback_message())
    }
}

/// Error returned by an [`AuthBackend`](crate::backend::AuthBackend).
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Non-2xx response. `detail` is the backend's human-readable reason.
    #[error("backend rejected request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// A 2xx response whose body did not match the expected schema.
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Build a rejection from a status code and raw response body.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, detail: parse_error_detail(body) }
    }

    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Error returned by a [`CredentialStore`](crate::storage::CredentialStore).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("credential storage unavailable: {0}")]
    Unavailable(String),
    #[error("credential write failed: {0}")]
    Write(String),
}

/// Extract the `detail` message from an error payload.
///
/// Accepts `{"detail": "..."}` and the validation shape
/// `{"detail": [{"msg": "..."}]}`. Blank messages count as absent.
#[must_use]
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;
    let message = match detail {
        Value::String(message) => message.clone(),
        Value::Array(items) => items.iter().find_map(|item| item.get("msg")?.as_str().map(str::to_owned))?,
        _ => return None,
    };
    let message = message.trim();
    if message.is_empty() { None } else { Some(message.to_owned()) }
}
