//! Google Identity sign-in adapter.
//!
//! The browser widget hands back a signed ID token through a callback; the
//! only thing that callback does is [`handle_credential_response`]. Rendering
//! the widget is the web crate's job; the option types here describe what it
//! asks the widget for.

#[cfg(test)]
#[path = "federated_test.rs"]
mod federated_test;

use serde::{Deserialize, Serialize};

use crate::backend::AuthBackend;
use crate::error::{AuthFailure, AuthResult};
use crate::storage::CredentialStore;
use crate::store::SessionStore;

pub const BUTTON_WIDTH: u32 = 320;

/// Google OAuth client identifier. Blank or absent disables the button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FederatedConfig {
    client_id: Option<String>,
}

impl FederatedConfig {
    #[must_use]
    pub fn new(client_id: Option<&str>) -> Self {
        let client_id = client_id.map(str::trim).filter(|id| !id.is_empty()).map(str::to_owned);
        Self { client_id }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.client_id.is_some()
    }

    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Label shown on the disabled placeholder button.
    #[must_use]
    pub fn unavailable_label() -> &'static str {
        "Google Sign-In not configured"
    }
}

/// Payload of the widget's credential callback.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CredentialResponse {
    #[serde(default)]
    pub credential: String,
    #[serde(default)]
    pub select_by: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ButtonText {
    #[serde(rename = "signin_with")]
    SignInWith,
    #[serde(rename = "signup_with")]
    SignUpWith,
}

/// Options passed to `google.accounts.id.renderButton`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonOptions {
    pub theme: &'static str,
    pub size: &'static str,
    pub text: ButtonText,
    pub width: u32,
}

impl ButtonOptions {
    #[must_use]
    pub fn new(text: ButtonText) -> Self {
        Self { theme: "outline", size: "large", text, width: BUTTON_WIDTH }
    }

    #[must_use]
    pub fn sign_in() -> Self {
        Self::new(ButtonText::SignInWith)
    }

    #[must_use]
    pub fn sign_up() -> Self {
        Self::new(ButtonText::SignUpWith)
    }
}

/// Forward a widget credential to [`SessionStore::federated_login`].
///
/// # Errors
///
/// An empty credential fails with `InvalidInput` before any network call;
/// otherwise the store's failure is returned unchanged.
pub async fn handle_credential_response<B, S>(store: &SessionStore<B, S>, response: &CredentialResponse) -> AuthResult
where
    B: AuthBackend,
    S: CredentialStore,
{
    let credential = response.credential.trim();
    if credential.is_empty() {
        tracing::warn!("identity widget returned no credential");
        return Err(AuthFailure::invalid_input("Google did not return a credential"));
    }
    tracing::debug!(select_by = response.select_by.as_deref().unwrap_or("unknown"), "identity widget callback");
    store.federated_login(credential).await
}
