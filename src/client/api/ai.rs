//! AI assistant endpoints
//!
//! Questions and reports are never cached; recommendations and risk lists are.

use serde_json::{Value, json};

use crate::client::request::{CacheOptions, RequestClient, RequestOptions};
use crate::error::Result;

pub struct AiApi<'a> {
    client: &'a RequestClient,
}

impl<'a> AiApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self { client }
    }

    pub async fn ask(&self, question: &str) -> Result<Value> {
        self.client
            .request(
                "/ai/ask",
                RequestOptions::post(json!({ "question": question })),
                CacheOptions::none(),
            )
            .await
    }

    /// Generate a report of the given type (e.g. `sales`, `inventory`)
    pub async fn report(&self, report_type: &str) -> Result<Value> {
        self.client
            .request(
                "/ai/report",
                RequestOptions::post(json!({ "type": report_type })),
                CacheOptions::none(),
            )
            .await
    }

    pub async fn recommendations(&self) -> Result<Value> {
        self.client
            .request(
                "/ai/recommendations",
                RequestOptions::get(),
                CacheOptions::key("ai_recommendations"),
            )
            .await
    }

    pub async fn risks(&self) -> Result<Value> {
        self.client
            .request("/ai/risks", RequestOptions::get(), CacheOptions::key("ai_risks"))
            .await
    }
}
