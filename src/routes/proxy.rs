//! Same-origin forwarding of the account endpoints.
//!
//! The browser client issues relative requests, so the host relays them to
//! the account backend unchanged: method, path, query, body, `Content-Type`
//! and `Authorization` go out, and the backend's status, `Content-Type` and
//! body come back. Transport failures become JSON `detail` errors the client
//! already knows how to display.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::state::AppState;

pub const FORWARDED_HEADERS: [axum::http::HeaderName; 2] = [CONTENT_TYPE, AUTHORIZATION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend timed out")]
    Timeout,

    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "forwarding failed");
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Forwarding routes for the account endpoints.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(forward))
        .route("/signup", post(forward))
        .route("/logout", post(forward))
        .route("/profile", get(forward))
        .with_state(state)
}

/// Relay one request to the backend and mirror its response.
///
/// # Errors
///
/// Returns [`ProxyError`] when the backend cannot be reached, times out, or
/// its body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = backend_url(&state.backend_url, &uri);
    tracing::debug!(%method, %url, "forwarding");

    let mut request = state.http.request(method, &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| ProxyError::from_reqwest(&e))?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        if e.is_timeout() { ProxyError::Timeout } else { ProxyError::Body(e.to_string()) }
    })?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

/// Join the request path and query onto the backend origin.
pub fn backend_url(origin: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", origin.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
