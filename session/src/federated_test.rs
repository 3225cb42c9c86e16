use futures::executor::block_on;

use super::*;
use crate::error::FailureKind;
use crate::storage::MemoryCredentialStore;
use crate::test_support::{rejected, store_with, token};
use crate::types::{AuthProvider, SessionStatus};

#[test]
fn federated_config_blank_id_is_disabled() {
    assert!(!FederatedConfig::new(None).is_enabled());
    assert!(!FederatedConfig::new(Some("")).is_enabled());
    assert!(!FederatedConfig::new(Some("   ")).is_enabled());
    assert_eq!(FederatedConfig::unavailable_label(), "Google Sign-In not configured");
}

#[test]
fn federated_config_keeps_trimmed_id() {
    let config = FederatedConfig::new(Some(" abc.apps.googleusercontent.com "));
    assert!(config.is_enabled());
    assert_eq!(config.client_id(), Some("abc.apps.googleusercontent.com"));
}

#[test]
fn credential_response_deserializes_widget_payload() {
    let response: CredentialResponse =
        serde_json::from_str(r#"{"credential":"id-token","select_by":"btn","clientId":"x"}"#).expect("parse");
    assert_eq!(response.credential, "id-token");
    assert_eq!(response.select_by.as_deref(), Some("btn"));

    let bare: CredentialResponse = serde_json::from_str("{}").expect("parse");
    assert!(bare.credential.is_empty());
}

#[test]
fn button_options_serialize_for_render_call() {
    let value = serde_json::to_value(ButtonOptions::sign_up()).expect("serialize");
    assert_eq!(value, serde_json::json!({"theme": "outline", "size": "large", "text": "signup_with", "width": 320}));
    assert_eq!(ButtonOptions::sign_in().text, ButtonText::SignInWith);
}

#[test]
fn handle_credential_response_rejects_empty_credential_without_network() {
    let (store, _) = store_with(&MemoryCredentialStore::default());

    let failure = block_on(handle_credential_response(&store, &CredentialResponse::default())).expect_err("empty");

    assert_eq!(failure.kind, FailureKind::InvalidInput);
    assert_eq!(store.backend().call_count(), 0);
}

#[test]
fn handle_credential_response_signs_in() {
    let storage = MemoryCredentialStore::default();
    let (store, _) = store_with(&storage);
    store.backend().accept("tok-g", "g@x.com", AuthProvider::Google);
    store.backend().queue_federated(token("tok-g"));
    let response = CredentialResponse { credential: "id-token".to_owned(), select_by: Some("btn".to_owned()) };

    block_on(handle_credential_response(&store, &response)).expect("sign in");

    assert_eq!(store.backend().call_log(), vec!["google:id-token", "me:tok-g"]);
    assert_eq!(storage.raw().as_deref(), Some("tok-g"));
    assert_eq!(store.identity().map(|identity| identity.auth_provider), Some(AuthProvider::Google));
}

#[test]
fn handle_credential_response_surfaces_backend_detail() {
    let (store, _) = store_with(&MemoryCredentialStore::default());
    store.backend().queue_federated(rejected(401, "Invalid Google token"));
    let response = CredentialResponse { credential: "forged".to_owned(), select_by: None };

    let failure = block_on(handle_credential_response(&store, &response)).expect_err("rejected");

    assert_eq!(failure.message, "Invalid Google token");
    assert_eq!(store.status(), SessionStatus::Anonymous);
}
