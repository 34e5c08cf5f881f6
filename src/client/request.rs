//! Token-aware, cache-aside request client
//!
//! Every call to the NGMS API goes through [`RequestClient::request`]:
//! GETs are answered from the cache when possible, the bearer token is
//! attached, mutations drop dependent cache entries by tag, and a rejected
//! session tears down the token and the cache.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Value, json};
use std::sync::Arc;

use super::navigator::{DEFAULT_LOGIN_PATH, Navigator, SessionNavigator};
use super::transport::{HttpRequest, Transport};
use crate::auth::TokenStore;
use crate::cache::TtlCache;
use crate::error::{ApiError, Result};

/// Message used when the body isn't JSON at all
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Message used when a failed response carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Path prefix of every API endpoint
pub const API_PREFIX: &str = "/api";

/// Method, body and extra headers of a request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Merged over the default headers; these win on conflicts
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn put(body: Value) -> Self {
        Self {
            method: Method::PUT,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// Add or replace a header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// How a request interacts with the cache
#[derive(Debug, Clone, Default)]
pub struct CacheOptions {
    /// Cache key for GETs; the endpoint when unset
    pub key: Option<String>,
    /// Tags dropped from the cache after a successful mutation
    pub invalidate: Vec<String>,
}

impl CacheOptions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            invalidate: Vec::new(),
        }
    }

    pub fn invalidate(tags: &[&str]) -> Self {
        Self {
            key: None,
            invalidate: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// NGMS API client with caching and session handling
pub struct RequestClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<TokenStore>,
    cache: Option<Arc<TtlCache>>,
    navigator: Arc<dyn Navigator>,
    base_url: String,
    login_path: String,
}

impl RequestClient {
    /// Create a client for the API at `host` (e.g. `http://localhost:5000`).
    ///
    /// Starts without a cache and with a navigator positioned at `/`.
    pub fn new(host: &str, transport: Arc<dyn Transport>, tokens: Arc<TokenStore>) -> Self {
        Self {
            transport,
            tokens,
            cache: None,
            navigator: Arc::new(SessionNavigator::new("/")),
            base_url: format!("{}{}", host.trim_end_matches('/'), API_PREFIX),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// Enable response caching
    pub fn with_cache(mut self, cache: Arc<TtlCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Use `navigator` for auth-failure redirects to `login_path`
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>, login_path: &str) -> Self {
        self.navigator = navigator;
        self.login_path = login_path.to_string();
        self
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn cache(&self) -> Option<&TtlCache> {
        self.cache.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request to `endpoint` (a path below `/api`) and return the JSON body.
    ///
    /// GETs are served from the cache under `cache_options.key` (or the endpoint)
    /// when a fresh entry exists, and stored there on success. Successful
    /// non-GETs invalidate `cache_options.invalidate`.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
        cache_options: CacheOptions,
    ) -> Result<Value> {
        let is_get = options.method == Method::GET;
        let cache_key = cache_options
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(endpoint);

        if is_get
            && let Some(cache) = &self.cache
            && let Some(cached) = cache.get(cache_key)
        {
            log::debug!("Cache hit: {}", cache_key);
            return Ok(cached);
        }

        let headers = self.build_headers(options.headers)?;
        let body = options
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let response = self
            .transport
            .send(HttpRequest {
                method: options.method,
                url: format!("{}{}", self.base_url, endpoint),
                headers,
                body,
            })
            .await?;

        let data: Value = serde_json::from_str(&response.body)
            .unwrap_or_else(|_| json!({ "error": SERVER_ERROR_MESSAGE }));

        let status = response.status;
        if !status.is_success() {
            log::warn!("API error: {} {}", status.as_u16(), data);
            let message = error_message(&data);

            if matches!(status.as_u16(), 401 | 422) {
                self.end_session();
                return Err(ApiError::SessionExpired {
                    status: status.as_u16(),
                    message,
                }
                .into());
            }

            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        if let Some(cache) = &self.cache {
            if is_get {
                cache.set(cache_key, data.clone());
            } else if !cache_options.invalidate.is_empty() {
                cache.invalidate(&cache_options.invalidate);
            }
        }

        Ok(data)
    }

    /// POST without credentials and without touching the cache.
    ///
    /// A failed response is an ordinary error here; it never ends the session.
    /// Used for login, where a 401 means "wrong password", not "session expired".
    pub async fn post_public(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .transport
            .send(HttpRequest {
                method: Method::POST,
                url: format!("{}{}", self.base_url, endpoint),
                headers,
                body: Some(serde_json::to_string(body)?),
            })
            .await?;

        let data: Value = serde_json::from_str(&response.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if !response.status.is_success() {
            return Err(ApiError::Rejected {
                status: response.status.as_u16(),
                message: error_message(&data),
            }
            .into());
        }

        Ok(data)
    }

    /// Forget the token, drop the cache and go to the login page
    pub fn logout(&self) {
        self.clear_session();
        self.navigator.redirect(&self.login_path);
    }

    fn end_session(&self) {
        log::warn!("Session rejected by server, clearing credentials and cache");
        self.clear_session();
        if self.navigator.current_path() != self.login_path {
            self.navigator.redirect(&self.login_path);
        }
    }

    fn clear_session(&self) {
        if let Err(e) = self.tokens.clear_token() {
            log::warn!("Failed to clear stored token: {}", e);
        }
        if let Some(cache) = &self.cache {
            cache.clear(None);
        }
    }

    fn build_headers(&self, overrides: HeaderMap) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.tokens.token()
            && !token.is_empty()
        {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|e| ApiError::InvalidRequest(format!("Invalid token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        // Caller headers replace defaults with the same name
        headers.extend(overrides);
        Ok(headers)
    }
}

/// Message carried by an error body: `error`, then `msg`, then the fallback
fn error_message(data: &Value) -> String {
    ["error", "msg"]
        .iter()
        .find_map(|field| {
            data.get(field)
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
        })
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{DEFAULT_TTL, MemoryBackend};
    use crate::client::mock::MockTransport;
    use crate::clock::ManualClock;
    use crate::error::Error;
    use crate::storage::MemoryStore;

    const HOST: &str = "http://localhost:5000";

    struct Harness {
        client: RequestClient,
        transport: MockTransport,
        cache: Arc<TtlCache>,
        tokens: Arc<TokenStore>,
        navigator: Arc<SessionNavigator>,
    }

    fn harness(transport: MockTransport) -> Harness {
        harness_at(transport, "/dashboard.html")
    }

    fn harness_at(transport: MockTransport, path: &str) -> Harness {
        let tokens = Arc::new(TokenStore::new(Arc::new(MemoryStore::new())));
        let clock = Arc::new(ManualClock::new(1_704_067_200_000));
        let cache = Arc::new(TtlCache::with_clock(
            Arc::new(MemoryBackend::new()),
            clock,
            DEFAULT_TTL,
        ));
        let navigator = Arc::new(SessionNavigator::new(path));
        let client = RequestClient::new(HOST, Arc::new(transport.clone()), tokens.clone())
            .with_cache(cache.clone())
            .with_navigator(navigator.clone(), DEFAULT_LOGIN_PATH);
        Harness {
            client,
            transport,
            cache,
            tokens,
            navigator,
        }
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_get_builds_url_and_default_headers() {
        let h = harness(MockTransport::new().with_response(200, r#"[{"id": 1}]"#));

        let data = h
            .client
            .request("/products", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap();

        assert_eq!(data, json!([{"id": 1}]));
        let req = h.transport.last_request().await.unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url, "http://localhost:5000/api/products");
        assert_eq!(header(&req, "content-type"), Some("application/json"));
        assert_eq!(header(&req, "authorization"), None);
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_token_attached_trimmed() {
        let h = harness(MockTransport::new().with_response(200, "{}"));
        h.tokens.set_token("  abc.def.ghi \n").unwrap();

        h.client
            .request("/auth/me", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap();

        let req = h.transport.last_request().await.unwrap();
        assert_eq!(header(&req, "authorization"), Some("Bearer abc.def.ghi"));
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let h = harness(MockTransport::new().with_response(200, "{}"));
        h.tokens.set_token("tok").unwrap();

        let options = RequestOptions::post(json!({"a": 1}))
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .header(
                HeaderName::from_static("x-request-source"),
                HeaderValue::from_static("cli"),
            );
        h.client
            .request("/ai/ask", options, CacheOptions::none())
            .await
            .unwrap();

        let req = h.transport.last_request().await.unwrap();
        assert_eq!(header(&req, "content-type"), Some("text/plain"));
        assert_eq!(header(&req, "x-request-source"), Some("cli"));
        assert_eq!(header(&req, "authorization"), Some("Bearer tok"));
        assert_eq!(req.body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_get_is_cached_under_endpoint() {
        let h = harness(MockTransport::new().with_response(200, r#"{"user": "admin"}"#));

        let first = h
            .client
            .request("/auth/me", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap();
        let second = h
            .client
            .request("/auth/me", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(h.transport.call_count().await, 1);
        assert_eq!(h.cache.get("/auth/me"), Some(json!({"user": "admin"})));
    }

    #[tokio::test]
    async fn test_empty_cache_key_falls_back_to_endpoint() {
        let h = harness(MockTransport::new().with_response(200, r#"[{"id": 1}]"#));

        h.client
            .request("/regions", RequestOptions::get(), CacheOptions::key(""))
            .await
            .unwrap();

        assert_eq!(h.cache.keys(), vec!["/regions".to_string()]);
        assert_eq!(h.cache.get(""), None);
    }

    #[tokio::test]
    async fn test_prepopulated_cache_skips_network() {
        let h = harness(MockTransport::new());
        h.cache.set("products_all", json!([{"id": 9}]));

        let data = h
            .client
            .request(
                "/products",
                RequestOptions::get(),
                CacheOptions::key("products_all"),
            )
            .await
            .unwrap();

        assert_eq!(data, json!([{"id": 9}]));
        assert_eq!(h.transport.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_mutation_is_never_served_from_cache() {
        let h = harness(MockTransport::new().with_response(201, r#"{"id": 3}"#));
        h.cache.set("/products", json!("cached"));

        let data = h
            .client
            .request(
                "/products",
                RequestOptions::post(json!({"name": "Non"})),
                CacheOptions::none(),
            )
            .await
            .unwrap();

        assert_eq!(data, json!({"id": 3}));
        assert_eq!(h.transport.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_successful_mutation_invalidates_tags() {
        let h = harness(MockTransport::new().with_response(200, r#"{"message": "ok"}"#));
        h.cache.set("sales_2024-01-01_2024-01-31", json!([]));
        h.cache.set("sales_stats_month", json!({}));
        h.cache.set("products_all", json!([]));

        h.client
            .request(
                "/sales/5",
                RequestOptions::delete(),
                CacheOptions::invalidate(&["sales"]),
            )
            .await
            .unwrap();

        assert_eq!(h.cache.keys(), vec!["products_all".to_string()]);
    }

    #[tokio::test]
    async fn test_create_product_invalidates_products_and_dash() {
        let h = harness(MockTransport::new().with_response(201, r#"{"id": 1}"#));
        h.cache.set("products_all", json!([]));
        h.cache.set("dash_stats", json!({}));
        h.cache.set("dash_top_prod", json!([]));
        h.cache.set("customers_all", json!([]));

        h.client
            .request(
                "/products",
                RequestOptions::post(json!({"name": "Olma"})),
                CacheOptions::invalidate(&["products", "dash"]),
            )
            .await
            .unwrap();

        assert_eq!(h.cache.keys(), vec!["customers_all".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let h = harness(MockTransport::new().with_response(400, r#"{"error": "bad"}"#));
        h.cache.set("products_all", json!([]));

        let result = h
            .client
            .request(
                "/products",
                RequestOptions::post(json!({})),
                CacheOptions::invalidate(&["products"]),
            )
            .await;

        assert!(result.is_err());
        assert_eq!(h.cache.keys(), vec!["products_all".to_string()]);
    }

    #[tokio::test]
    async fn test_error_carries_server_message() {
        let h = harness(
            MockTransport::new()
                .with_response(400, r#"{"error": "Barcha majburiy maydonlar to'ldirilishi shart"}"#),
        );

        let err = h
            .client
            .request("/products", RequestOptions::post(json!({})), CacheOptions::none())
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::Rejected { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Barcha majburiy maydonlar to'ldirilishi shart");
            }
            other => panic!("Expected ApiError::Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_without_message_uses_fallback() {
        let h = harness(MockTransport::new().with_response(404, r#"{"detail": "x"}"#));

        let err = h
            .client
            .request("/products/99", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_json_error_body_becomes_server_error() {
        let h = harness(MockTransport::new().with_response(502, "<html>Bad Gateway</html>"));

        let err = h
            .client
            .request("/dashboard/stats", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
        assert!(h.cache.keys().is_empty());
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_synthesized_payload() {
        let h = harness(MockTransport::new().with_response(200, "OK"));

        let data = h
            .client
            .request("/health", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap();

        assert_eq!(data, json!({"error": SERVER_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn test_unauthorized_tears_down_session_and_redirects() {
        let h = harness(MockTransport::new().with_response(401, r#"{"msg": "Token has expired"}"#));
        h.tokens.set_token("stale").unwrap();
        h.cache.set("products_all", json!([]));
        h.cache.set("dash_stats", json!({}));

        let err = h
            .client
            .request("/sales", RequestOptions::get(), CacheOptions::key("sales__"))
            .await
            .unwrap_err();

        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), "Token has expired");
        assert_eq!(h.tokens.token(), None);
        assert!(h.cache.keys().is_empty());
        assert_eq!(h.navigator.last_redirect(), Some(DEFAULT_LOGIN_PATH.to_string()));
        assert_eq!(h.navigator.current_path(), DEFAULT_LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_unprocessable_token_tears_down_session() {
        let h = harness(MockTransport::new().with_response(422, r#"{"msg": "Not enough segments"}"#));
        h.tokens.set_token("garbage").unwrap();

        let err = h
            .client
            .request("/customers", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::SessionExpired { status, .. }) => assert_eq!(status, 422),
            other => panic!("Expected ApiError::SessionExpired, got {:?}", other),
        }
        assert_eq!(h.tokens.token(), None);
    }

    #[tokio::test]
    async fn test_unauthorized_on_login_page_does_not_redirect() {
        let h = harness_at(
            MockTransport::new().with_response(401, r#"{"error": "nope"}"#),
            DEFAULT_LOGIN_PATH,
        );
        h.tokens.set_token("stale").unwrap();

        let result = h
            .client
            .request("/auth/me", RequestOptions::get(), CacheOptions::none())
            .await;

        assert!(result.is_err());
        assert_eq!(h.tokens.token(), None);
        assert_eq!(h.navigator.last_redirect(), None);
    }

    #[tokio::test]
    async fn test_forbidden_does_not_tear_down_session() {
        let h = harness(MockTransport::new().with_response(403, r#"{"error": "forbidden"}"#));
        h.tokens.set_token("tok").unwrap();
        h.cache.set("products_all", json!([]));

        let err = h
            .client
            .request("/regions", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap_err();

        assert!(!err.is_session_expired());
        assert_eq!(h.tokens.token(), Some("tok".to_string()));
        assert_eq!(h.cache.keys().len(), 1);
        assert_eq!(h.navigator.last_redirect(), None);
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let h = harness(
            MockTransport::new().with_error(ApiError::Network("Failed to connect to API".into())),
        );
        h.tokens.set_token("tok").unwrap();

        let err = h
            .client
            .request("/products", RequestOptions::get(), CacheOptions::none())
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::Network(msg)) => assert_eq!(msg, "Failed to connect to API"),
            other => panic!("Expected ApiError::Network, got {:?}", other),
        }
        // Not an auth failure: the session survives
        assert_eq!(h.tokens.token(), Some("tok".to_string()));
    }

    #[tokio::test]
    async fn test_without_cache_every_get_hits_network() {
        let transport = MockTransport::new()
            .with_response(200, "[]")
            .with_response(200, "[]");
        let tokens = Arc::new(TokenStore::new(Arc::new(MemoryStore::new())));
        let client = RequestClient::new(HOST, Arc::new(transport.clone()), tokens);

        for _ in 0..2 {
            client
                .request("/shops", RequestOptions::get(), CacheOptions::key("shops_all"))
                .await
                .unwrap();
        }

        assert_eq!(transport.call_count().await, 2);
        assert!(client.cache().is_none());
    }

    #[tokio::test]
    async fn test_post_public_sends_no_token_and_keeps_session() {
        let h = harness(MockTransport::new().with_response(
            401,
            r#"{"error": "Noto'g'ri username yoki password"}"#,
        ));
        h.tokens.set_token("existing").unwrap();
        h.cache.set("products_all", json!([]));

        let err = h
            .client
            .post_public("/auth/login", &json!({"username": "a", "password": "b"}))
            .await
            .unwrap_err();

        assert!(!err.is_session_expired());
        assert!(err.to_string().contains("password"));
        let req = h.transport.last_request().await.unwrap();
        assert_eq!(header(&req, "authorization"), None);
        assert_eq!(h.tokens.token(), Some("existing".to_string()));
        assert_eq!(h.cache.keys().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_everything_and_redirects() {
        let h = harness(MockTransport::new());
        h.tokens.set_token("tok").unwrap();
        h.cache.set("dash_stats", json!({}));

        h.client.logout();

        assert_eq!(h.tokens.token(), None);
        assert!(h.cache.keys().is_empty());
        assert_eq!(h.navigator.current_path(), DEFAULT_LOGIN_PATH);
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let tokens = Arc::new(TokenStore::new(Arc::new(MemoryStore::new())));
        let client = RequestClient::new(
            "https://ngms.example.com/",
            Arc::new(MockTransport::new()),
            tokens,
        );
        assert_eq!(client.base_url(), "https://ngms.example.com/api");
    }

    #[test]
    fn test_error_message_precedence() {
        assert_eq!(error_message(&json!({"error": "a", "msg": "b"})), "a");
        assert_eq!(error_message(&json!({"msg": "b"})), "b");
        assert_eq!(error_message(&json!({"error": ""})), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error_message(&json!({"error": 5})), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            error_message(&json!({"error": "", "msg": "Token has expired"})),
            "Token has expired"
        );
        assert_eq!(error_message(&json!({"error": 5, "msg": "b"})), "b");
        assert_eq!(error_message(&json!([1, 2])), FALLBACK_ERROR_MESSAGE);
    }
}
