//! `gloo-net` transport with the client-wide timeout.
//!
//! Client-side (hydrate): real `fetch` calls raced against a timer.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`]; the
//! auth flows only run from browser event handlers.

use std::time::Duration;

use async_trait::async_trait;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Clone, Copy, Debug)]
pub struct BrowserTransport {
    timeout: Duration,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::Request;

            use super::http::Method;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let timeout_ms = self.timeout_ms();
            let timer = gloo_timers::future::TimeoutFuture::new(u32::try_from(timeout_ms).unwrap_or(u32::MAX));
            let response = match select(Box::pin(prepared.send()), Box::pin(timer)).await {
                Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
                Either::Right(_) => return Err(ApiError::Timeout(timeout_ms)),
            };

            let status = response.status();
            let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, self.timeout_ms());
            Err(ApiError::Unavailable)
        }
    }
}
