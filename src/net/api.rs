//! REST API helpers for communicating with the backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs reporting the backend as unreachable, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth calls return [`BackendError`] so the session store can choose the
//! message; analysis calls return display strings for the page to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::backend::AuthBackend;
#[cfg(feature = "csr")]
use session::AuthEndpoint;
use session::{BackendError, ClientConfig, Credential, Identity};

use super::types::{ParagraphCheckRequest, ParagraphReport};

pub const PARAGRAPH_CHECK_PATH: &str = "/semantic/api/paragraph_web_check";

#[cfg(any(test, feature = "csr"))]
fn server_error_message(status: u16, body: &str) -> String {
    format!("Server error {status}: {}", body.trim())
}

#[cfg(any(test, feature = "csr"))]
fn transport_error(err: impl std::fmt::Display) -> BackendError {
    BackendError::Unreachable(err.to_string())
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> BackendError {
    BackendError::Unreachable("not available outside the browser".to_owned())
}

/// Body of a response, or a rejection carrying the backend's detail.
#[cfg(feature = "csr")]
async fn read_body(resp: gloo_net::http::Response) -> Result<String, BackendError> {
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await.map_err(transport_error)?;
    if !ok {
        return Err(BackendError::rejected(status, &body));
    }
    Ok(body)
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<String, BackendError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    read_body(resp).await
}

/// [`AuthBackend`] over the browser fetch API.
#[derive(Clone, Debug)]
pub struct HttpAuthBackend {
    config: ClientConfig,
}

impl HttpAuthBackend {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    async fn request_token(&self, endpoint: AuthEndpoint, payload: &impl serde::Serialize) -> Result<Credential, BackendError> {
        let body = post_json(&self.config.auth_url(endpoint), payload).await?;
        session::backend::parse_token_response(&body)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn fetch_identity(&self, credential: &Credential) -> Result<Identity, BackendError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.auth_url(AuthEndpoint::Me))
                .header("Authorization", &credential.bearer())
                .send()
                .await
                .map_err(transport_error)?;
            let body = read_body(resp).await?;
            session::backend::parse_identity_response(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credential;
            Err(unavailable())
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<Credential, BackendError> {
        #[cfg(feature = "csr")]
        {
            let payload = session::backend::PasswordRequest { email, password };
            self.request_token(AuthEndpoint::Login, &payload).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(unavailable())
        }
    }

    async fn register(&self, email: &str, password: &str) -> Result<Credential, BackendError> {
        #[cfg(feature = "csr")]
        {
            let payload = session::backend::PasswordRequest { email, password };
            self.request_token(AuthEndpoint::Register, &payload).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(unavailable())
        }
    }

    async fn exchange_federated(&self, provider_credential: &str) -> Result<Credential, BackendError> {
        #[cfg(feature = "csr")]
        {
            let payload = session::backend::GoogleRequest { credential: provider_credential };
            self.request_token(AuthEndpoint::Google, &payload).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = provider_credential;
            Err(unavailable())
        }
    }
}

/// Run a single-paragraph similarity check via
/// `POST {base}/semantic/api/paragraph_web_check`.
///
/// # Errors
///
/// Returns a display string if the request fails, the server responds with a
/// non-OK status, or the report cannot be decoded.
pub async fn check_paragraph(config: &ClientConfig, request: &ParagraphCheckRequest) -> Result<ParagraphReport, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.api_url(PARAGRAPH_CHECK_PATH))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(server_error_message(resp.status(), &body));
        }
        resp.json::<ParagraphReport>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err("not available outside the browser".to_owned())
    }
}
