//! Auth backend contract.
//!
//! The store talks to the backend only through [`AuthBackend`], so the web
//! client (gloo-net), the CLI (reqwest), and tests (scripted mock) can each
//! supply their own transport. Wire DTOs for the four endpoints live here so
//! every transport serializes identically.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use serde::{Deserialize, Serialize};

use crate::error::BackendError;
use crate::types::{Credential, Identity};

/// Endpoints under `{base}/api/auth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEndpoint {
    Me,
    Login,
    Register,
    Google,
}

impl AuthEndpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Me => "/api/auth/me",
            Self::Login => "/api/auth/login",
            Self::Register => "/api/auth/register",
            Self::Google => "/api/auth/google",
        }
    }

    /// Absolute URL for this endpoint under `base_url`.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Body for `POST /login` and `POST /register`.
#[derive(Debug, Serialize)]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for `POST /google`.
#[derive(Debug, Serialize)]
pub struct GoogleRequest<'a> {
    pub credential: &'a str,
}

/// Success body of every token-issuing endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenResponse {
    /// Convert into a credential, rejecting an empty token.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidResponse`] when `access_token` is blank.
    pub fn into_credential(self) -> Result<Credential, BackendError> {
        if self.access_token.trim().is_empty() {
            return Err(BackendError::InvalidResponse("empty access_token".to_owned()));
        }
        Ok(Credential::new(self.access_token))
    }
}

/// Parse a token-issuing endpoint's success body.
///
/// # Errors
///
/// Returns [`BackendError::InvalidResponse`] if the body is not a token response.
pub fn parse_token_response(body: &str) -> Result<Credential, BackendError> {
    serde_json::from_str::<TokenResponse>(body)
        .map_err(|e| BackendError::InvalidResponse(e.to_string()))?
        .into_credential()
}

/// Parse the `/me` success body.
///
/// # Errors
///
/// Returns [`BackendError::InvalidResponse`] if the body is not an identity.
pub fn parse_identity_response(body: &str) -> Result<Identity, BackendError> {
    serde_json::from_str::<Identity>(body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
}

/// Transport used by [`SessionStore`](crate::store::SessionStore).
///
/// Futures are not required to be `Send`: the store runs on a single-threaded
/// event loop and browser fetch futures are `!Send`.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend {
    /// `GET /me` with `credential` as bearer.
    async fn fetch_identity(&self, credential: &Credential) -> Result<Identity, BackendError>;

    /// `POST /login`.
    async fn login(&self, email: &str, password: &str) -> Result<Credential, BackendError>;

    /// `POST /register`.
    async fn register(&self, email: &str, password: &str) -> Result<Credential, BackendError>;

    /// `POST /google` with the identity widget's credential.
    async fn exchange_federated(&self, provider_credential: &str) -> Result<Credential, BackendError>;
}
