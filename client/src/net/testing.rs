//! Scripted transport for exercising the client without a network.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, HttpTransport};

/// Replays queued outcomes in order and records every request it receives.
/// An exhausted script answers with [`ApiError::Network`].
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse { status, body: body.to_owned() }))
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Result<HttpResponse, ApiError>) -> Self {
        self.outcomes.lock().unwrap_or_else(PoisonError::into_inner).push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("script exhausted".to_owned())))
    }
}
