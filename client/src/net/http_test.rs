use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::net::testing::ScriptedTransport;
use crate::session::{MemoryStore, TOKEN_KEY, TOKEN_TYPE_KEY, USER_KEY};

fn client_with(transport: Arc<ScriptedTransport>, store: Arc<MemoryStore>) -> ApiClient {
    ApiClient::new(ClientConfig::with_base_url("http://api.test"), transport, store)
}

fn signed_in_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_entries([
        (TOKEN_KEY, "tok-123"),
        (TOKEN_TYPE_KEY, "bearer"),
        (USER_KEY, r#"{"first_name":"Ada"}"#),
    ]))
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn authorization_value_capitalizes_token_type() {
    assert_eq!(authorization_value("bearer", "abc"), "Bearer abc");
    assert_eq!(authorization_value("Bearer", "abc"), "Bearer abc");
    assert_eq!(authorization_value("mac", "abc"), "Mac abc");
}

#[test]
fn authorization_absent_without_token() {
    let store = Arc::new(MemoryStore::with_entries([(TOKEN_TYPE_KEY, "bearer")]));
    let client = client_with(Arc::new(ScriptedTransport::new()), store);
    assert!(client.authorization().is_none());
}

#[test]
fn authorization_absent_with_empty_token() {
    let store = Arc::new(MemoryStore::with_entries([(TOKEN_KEY, ""), (TOKEN_TYPE_KEY, "bearer")]));
    let client = client_with(Arc::new(ScriptedTransport::new()), store);
    assert!(client.authorization().is_none());
}

#[test]
fn authorization_defaults_token_type_to_bearer() {
    let store = Arc::new(MemoryStore::with_entries([(TOKEN_KEY, "abc")]));
    let client = client_with(Arc::new(ScriptedTransport::new()), store);
    assert_eq!(client.authorization().as_deref(), Some("Bearer abc"));
}

#[test]
fn send_attaches_stored_credentials_and_form_content_type() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, "{}"));
    let client = client_with(transport.clone(), signed_in_store());

    block_on(client.send(Method::Get, "/profile", None)).unwrap();

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "http://api.test/profile");
    assert_eq!(sent[0].header("authorization"), Some("Bearer tok-123"));
    assert_eq!(sent[0].header("Content-Type"), Some(FORM_CONTENT_TYPE));
    assert!(sent[0].body.is_none());
}

#[test]
fn send_without_session_omits_authorization() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, "{}"));
    let client = client_with(transport.clone(), Arc::new(MemoryStore::new()));

    block_on(client.send(Method::Post, "/login", Some("username=a".to_owned()))).unwrap();

    let sent = transport.requests();
    assert!(sent[0].header("Authorization").is_none());
    assert_eq!(sent[0].body.as_deref(), Some("username=a"));
}

// =============================================================
// Response handling
// =============================================================

#[test]
fn non_success_status_becomes_status_error() {
    let transport = Arc::new(ScriptedTransport::new().respond(422, r#"{"detail":"bad"}"#));
    let client = client_with(transport, Arc::new(MemoryStore::new()));

    let err = block_on(client.send(Method::Post, "/signup", None)).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 422, body: r#"{"detail":"bad"}"#.to_owned() });
}

#[test]
fn transport_error_passes_through_without_touching_session() {
    let store = signed_in_store();
    let transport = Arc::new(ScriptedTransport::new().fail(ApiError::Timeout(10_000)));
    let client = client_with(transport, store.clone());

    let err = block_on(client.send(Method::Get, "/profile", None)).unwrap_err();
    assert_eq!(err, ApiError::Timeout(10_000));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-123"));
}

#[test]
fn unauthorized_clears_session_and_notifies_subscribers() {
    let store = signed_in_store();
    let transport = Arc::new(ScriptedTransport::new().respond(401, r#"{"detail":"expired"}"#));
    let client = client_with(transport, store.clone());
    let fired = Arc::new(AtomicUsize::new(0));
    for _ in 0..2 {
        let fired = fired.clone();
        client.on_unauthorized(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }

    let err = block_on(client.send(Method::Get, "/profile", None)).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(fired.load(Ordering::SeqCst), 2);
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(TOKEN_TYPE_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
}

#[test]
fn unauthorized_fires_for_any_endpoint() {
    let store = signed_in_store();
    let transport = Arc::new(ScriptedTransport::new().respond(401, "").respond(401, ""));
    let client = client_with(transport, store.clone());
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    client.on_unauthorized(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let _ = block_on(client.send(Method::Post, "/logout", None));
    let _ = block_on(client.send(Method::Post, "/login", None));

    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn forbidden_does_not_end_session() {
    let store = signed_in_store();
    let transport = Arc::new(ScriptedTransport::new().respond(403, ""));
    let client = client_with(transport, store.clone());

    let _ = block_on(client.send(Method::Get, "/profile", None));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-123"));
}

#[test]
fn response_json_reports_decode_errors() {
    let resp = HttpResponse { status: 200, body: "not json".to_owned() };
    let err = resp.json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
