//! Mock transport for testing
//!
//! Serves scripted responses in order and records every request so tests can
//! assert on URLs, headers and call counts without a network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;

/// Mock transport for testing.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new().with_response(200, r#"[{"id": 1}]"#);
/// let response = mock.send(request).await?;
/// assert_eq!(mock.call_count().await, 1);
/// ```
#[derive(Default, Clone)]
pub struct MockTransport {
    /// Responses served in order; each is consumed on use
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn with_response(self, status: u16, body: &str) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport failure
    pub fn with_error(self, error: ApiError) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .push_back(Err(error));
        self
    }

    /// Number of requests sent so far
    pub async fn call_count(&self) -> usize {
        self.captured_requests.lock().await.len()
    }

    /// All requests sent so far
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// The most recent request
    pub async fn last_request(&self) -> Option<HttpRequest> {
        self.captured_requests.lock().await.last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.captured_requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

/// Build a request client over `transport` with in-memory token storage and cache
pub fn mock_client(
    transport: &MockTransport,
) -> (
    super::RequestClient,
    Arc<crate::cache::TtlCache>,
    Arc<crate::auth::TokenStore>,
) {
    use crate::auth::TokenStore;
    use crate::cache::{MemoryBackend, TtlCache};
    use crate::storage::MemoryStore;

    let tokens = Arc::new(TokenStore::new(Arc::new(MemoryStore::new())));
    let cache = Arc::new(TtlCache::new(Arc::new(MemoryBackend::new())));
    let client = super::RequestClient::new(
        "http://localhost:5000",
        Arc::new(transport.clone()),
        tokens.clone(),
    )
    .with_cache(cache.clone());
    (client, cache, tokens)
}
