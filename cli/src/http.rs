//! `AuthBackend` over `reqwest`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use session::backend::{AuthBackend, GoogleRequest, PasswordRequest, parse_identity_response, parse_token_response};
use session::{AuthEndpoint, BackendError, ClientConfig, Credential, Identity};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

fn transport_error(err: reqwest::Error) -> BackendError {
    BackendError::Unreachable(err.to_string())
}

async fn read_body(response: reqwest::Response) -> Result<String, BackendError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(BackendError::rejected(status.as_u16(), &body));
    }
    Ok(body)
}

pub struct ReqwestAuthBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestAuthBackend {
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    async fn request_token(
        &self,
        endpoint: AuthEndpoint,
        payload: &impl serde::Serialize,
    ) -> Result<Credential, BackendError> {
        let url = self.config.auth_url(endpoint);
        tracing::debug!(%url, "requesting token");
        let response = self.client.post(url).json(payload).send().await.map_err(transport_error)?;
        parse_token_response(&read_body(response).await?)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for ReqwestAuthBackend {
    async fn fetch_identity(&self, credential: &Credential) -> Result<Identity, BackendError> {
        let response = self
            .client
            .get(self.config.auth_url(AuthEndpoint::Me))
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .send()
            .await
            .map_err(transport_error)?;
        parse_identity_response(&read_body(response).await?)
    }

    async fn login(&self, email: &str, password: &str) -> Result<Credential, BackendError> {
        self.request_token(AuthEndpoint::Login, &PasswordRequest { email, password }).await
    }

    async fn register(&self, email: &str, password: &str) -> Result<Credential, BackendError> {
        self.request_token(AuthEndpoint::Register, &PasswordRequest { email, password }).await
    }

    async fn exchange_federated(&self, provider_credential: &str) -> Result<Credential, BackendError> {
        self.request_token(AuthEndpoint::Google, &GoogleRequest { credential: provider_credential }).await
    }
}
