use futures::executor::block_on;

use super::*;

#[test]
fn server_error_message_formats_status_and_body() {
    assert_eq!(server_error_message(500, " boom\n"), "Server error 500: boom");
}

#[test]
fn transport_error_is_unreachable() {
    assert!(matches!(transport_error("connection refused"), BackendError::Unreachable(msg) if msg == "connection refused"));
}

#[test]
fn paragraph_check_url_uses_configured_base() {
    let config = ClientConfig::from_values(Some("https://api.example.com/"), None);
    assert_eq!(config.api_url(PARAGRAPH_CHECK_PATH), "https://api.example.com/semantic/api/paragraph_web_check");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_backend_reports_unreachable() {
    let backend = HttpAuthBackend::new(ClientConfig::default());
    let err = block_on(backend.login("a@b.com", "secret1")).expect_err("no browser");
    assert!(matches!(err, BackendError::Unreachable(_)));
    assert_eq!(backend.config().api_base_url, "http://localhost:8000");
}
