//! Client configuration shared by the web app and the CLI.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::backend::AuthEndpoint;
use crate::federated::FederatedConfig;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Backend location and federated sign-in settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub federated: FederatedConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build from optional raw values. A blank base URL falls back to
    /// [`DEFAULT_API_BASE_URL`]; trailing slashes are dropped.
    #[must_use]
    pub fn from_values(api_base_url: Option<&str>, google_client_id: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url, federated: FederatedConfig::new(google_client_id) }
    }

    #[must_use]
    pub fn auth_url(&self, endpoint: AuthEndpoint) -> String {
        endpoint.url(&self.api_base_url)
    }

    /// Absolute URL for a path on the analysis backend.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
