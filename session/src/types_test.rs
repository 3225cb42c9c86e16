use super::*;

// =============================================================
// Credential
// =============================================================

#[test]
fn credential_debug_redacts_token() {
    let credential = Credential::new("tok-secret");
    assert_eq!(format!("{credential:?}"), "Credential(***)");
}

#[test]
fn credential_bearer_header_value() {
    assert_eq!(Credential::new("tok-123").bearer(), "Bearer tok-123");
}

// =============================================================
// Identity / AuthProvider wire format
// =============================================================

#[test]
fn identity_parses_me_response() {
    let identity: Identity =
        serde_json::from_value(serde_json::json!({ "id": 7, "email": "a@b.com", "auth_provider": "google" }))
            .expect("identity");
    assert_eq!(identity.id, Some(7));
    assert_eq!(identity.email, "a@b.com");
    assert_eq!(identity.auth_provider, AuthProvider::Google);
}

#[test]
fn identity_defaults_provider_when_missing() {
    let identity: Identity = serde_json::from_value(serde_json::json!({ "email": "a@b.com" })).expect("identity");
    assert_eq!(identity.id, None);
    assert_eq!(identity.auth_provider, AuthProvider::Password);
}

#[test]
fn auth_provider_accepts_email_and_password_tags() {
    let email: AuthProvider = serde_json::from_str("\"email\"").expect("email");
    let password: AuthProvider = serde_json::from_str("\"password\"").expect("password");
    assert_eq!(email, AuthProvider::Password);
    assert_eq!(password, AuthProvider::Password);
}

#[test]
fn auth_provider_unknown_tag_does_not_fail() {
    let provider: AuthProvider = serde_json::from_str("\"github\"").expect("provider");
    assert_eq!(provider, AuthProvider::Unknown);
}

#[test]
fn synthesized_identity_is_password_based() {
    let identity = Identity::password("new@x.com");
    assert_eq!(identity.email, "new@x.com");
    assert_eq!(identity.auth_provider, AuthProvider::Password);
    assert_eq!(identity.auth_provider.as_str(), "password");
}

// =============================================================
// PendingOps
// =============================================================

#[test]
fn pending_ops_track_overlapping_calls() {
    let mut pending = PendingOps::default();
    pending.begin(OperationKind::Federated);
    pending.begin(OperationKind::Federated);
    pending.finish(OperationKind::Federated);
    assert!(pending.is_active(OperationKind::Federated));
    pending.finish(OperationKind::Federated);
    assert!(!pending.is_active(OperationKind::Federated));
    assert!(!pending.any());
}

#[test]
fn pending_ops_finish_never_underflows() {
    let mut pending = PendingOps::default();
    pending.finish(OperationKind::Login);
    assert_eq!(pending.count(OperationKind::Login), 0);
}

#[test]
fn pending_ops_kinds_are_independent() {
    let mut pending = PendingOps::default();
    pending.begin(OperationKind::Login);
    assert!(pending.is_active(OperationKind::Login));
    assert!(!pending.is_active(OperationKind::Register));
    assert!(!pending.is_active(OperationKind::Federated));
}

// =============================================================
// SessionSnapshot
// =============================================================

#[test]
fn snapshot_default_is_loading_without_identity() {
    let snapshot = SessionSnapshot::default();
    assert_eq!(snapshot.status, SessionStatus::Loading);
    assert!(!snapshot.is_authenticated());
    assert_eq!(snapshot.email(), None);
}

#[test]
fn session_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&SessionStatus::Authenticated).expect("json"), "\"authenticated\"");
    assert_eq!(SessionStatus::Anonymous.to_string(), "anonymous");
}

#[test]
fn fallback_messages_per_operation() {
    assert_eq!(OperationKind::Login.fallback_message(), "Login failed");
    assert_eq!(OperationKind::Register.fallback_message(), "Registration failed");
    assert_eq!(OperationKind::Federated.fallback_message(), "Google login failed");
}
