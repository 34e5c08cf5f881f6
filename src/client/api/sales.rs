//! Sale endpoints
//!
//! A sale moves stock and customer debt, so every write also drops product,
//! customer and dashboard entries.

use serde_json::{Value, json};

use super::resource::{Resource, ResourceApi};
use super::with_query;
use crate::client::request::{CacheOptions, RequestClient, RequestOptions};
use crate::error::Result;

pub const SALES: Resource = Resource {
    path: "/sales",
    list_key: "sales__",
    item_key_prefix: "sale_",
    invalidates: &["sales", "dash", "products", "customers"],
};

const ONLINE_INVALIDATES: &[&str] = &["sales", "dash"];

/// Statistics period used when none is given
pub const DEFAULT_STATS_PERIOD: &str = "month";

pub struct SalesApi<'a> {
    client: &'a RequestClient,
    crud: ResourceApi<'a>,
}

impl<'a> SalesApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self {
            client,
            crud: ResourceApi::new(client, &SALES),
        }
    }

    /// List sales, optionally bounded by `YYYY-MM-DD` dates.
    ///
    /// Each date range is cached separately as `sales_<start>_<end>`.
    pub async fn list(&self, start: Option<&str>, end: Option<&str>) -> Result<Value> {
        let mut params = Vec::new();
        if let Some(start) = start.filter(|s| !s.is_empty()) {
            params.push(("start_date", start));
        }
        if let Some(end) = end.filter(|s| !s.is_empty()) {
            params.push(("end_date", end));
        }

        let path = with_query(SALES.path, &params);
        let key = format!("sales_{}_{}", start.unwrap_or(""), end.unwrap_or(""));
        self.client
            .request(&path, RequestOptions::get(), CacheOptions::key(key))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value> {
        self.crud.get(id).await
    }

    pub async fn create(&self, data: Value) -> Result<Value> {
        self.crud.create(data).await
    }

    pub async fn update(&self, id: i64, data: Value) -> Result<Value> {
        self.crud.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> Result<Value> {
        self.crud.delete(id).await
    }

    /// Aggregated figures for `period` (`day`, `week`, `month`, `year`)
    pub async fn statistics(&self, period: Option<&str>) -> Result<Value> {
        let period = period
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_STATS_PERIOD);
        let path = with_query("/sales/statistics", &[("period", period)]);
        self.client
            .request(
                &path,
                RequestOptions::get(),
                CacheOptions::key(format!("sales_stats_{}", period)),
            )
            .await
    }

    pub async fn online(&self) -> Result<Value> {
        self.crud.cached_get("/online", "sales_online").await
    }

    pub async fn create_online(&self, data: Value) -> Result<Value> {
        self.client
            .request(
                "/sales/online",
                RequestOptions::post(data),
                CacheOptions::invalidate(ONLINE_INVALIDATES),
            )
            .await
    }

    /// Import many sales in one request
    pub async fn bulk_import(&self, sales: Vec<Value>) -> Result<Value> {
        self.client
            .request(
                "/sales/bulk-import",
                RequestOptions::post(json!({ "sales": sales })),
                CacheOptions::invalidate(SALES.invalidates),
            )
            .await
    }
}
