use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

/// Start a stand-in account backend on an ephemeral port.
async fn spawn_backend() -> String {
    async fn login(headers: HeaderMap, body: String) -> Response {
        let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default();
        if content_type == "application/x-www-form-urlencoded" && body.contains("password=secret1") {
            Json(serde_json::json!({ "access_token": "tok", "token_type": "bearer" })).into_response()
        } else {
            (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "detail": "Invalid credentials" }))).into_response()
        }
    }

    async fn profile(headers: HeaderMap) -> Response {
        match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            Some("Bearer tok") => Json(serde_json::json!({ "first_name": "Ada" })).into_response(),
            _ => StatusCode::UNAUTHORIZED.into_response(),
        }
    }

    async fn slow() -> StatusCode {
        tokio::time::sleep(Duration::from_secs(5)).await;
        StatusCode::OK
    }

    let app = Router::new()
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/logout", post(slow));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

fn proxy(backend: &str, timeout: Duration) -> Router {
    routes(AppState::new(backend, timeout).unwrap())
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn backend_url_keeps_path_and_query() {
    let uri: Uri = "/profile?full=1".parse().unwrap();
    assert_eq!(backend_url("http://api.test/", &uri), "http://api.test/profile?full=1");
}

#[tokio::test]
async fn forwards_form_login_and_mirrors_response() {
    let backend = spawn_backend().await;
    let response = proxy(&backend, Duration::from_secs(2))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=a%40b.c&password=secret1"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(body_json(response).await["access_token"], "tok");
}

#[tokio::test]
async fn mirrors_backend_error_status() {
    let backend = spawn_backend().await;
    let response = proxy(&backend, Duration::from_secs(2))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=a%40b.c&password=wrong"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["detail"], "Invalid credentials");
}

#[tokio::test]
async fn forwards_authorization_header() {
    let backend = spawn_backend().await;
    let response = proxy(&backend, Duration::from_secs(2))
        .oneshot(
            Request::builder()
                .uri("/profile")
                .header(AUTHORIZATION, "Bearer tok")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["first_name"], "Ada");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = proxy(&format!("http://{addr}"), Duration::from_secs(2))
        .oneshot(Request::builder().method("POST").uri("/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let detail = body_json(response).await["detail"].as_str().unwrap().to_owned();
    assert!(detail.starts_with("backend unreachable"));
}

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let backend = spawn_backend().await;
    let response = proxy(&backend, Duration::from_millis(200))
        .oneshot(Request::builder().method("POST").uri("/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unreachable("x".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Body("x".into()).status(), StatusCode::BAD_GATEWAY);
}
