//! Dashboard statistics endpoints (all cached, keys prefixed `dash_`)

use serde_json::Value;

use super::with_query;
use crate::client::request::{CacheOptions, RequestClient, RequestOptions};
use crate::error::Result;

/// Range for the growth-dynamics chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPeriod {
    /// Current year (server default)
    Current,
    /// A specific year
    Year(i32),
    /// Whole history
    All,
}

impl GrowthPeriod {
    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            GrowthPeriod::Current => vec![],
            GrowthPeriod::Year(year) => vec![("year", year.to_string())],
            GrowthPeriod::All => vec![("period", "all".to_string())],
        }
    }

    fn cache_suffix(&self) -> String {
        match self {
            GrowthPeriod::Current => "cur".to_string(),
            GrowthPeriod::Year(year) => year.to_string(),
            GrowthPeriod::All => "all".to_string(),
        }
    }
}

pub struct DashboardApi<'a> {
    client: &'a RequestClient,
}

impl<'a> DashboardApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<Value> {
        self.get("/dashboard/stats", "dash_stats").await
    }

    pub async fn growth_dynamics(&self, period: GrowthPeriod) -> Result<Value> {
        let params = period.query();
        let params_ref: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let path = with_query("/dashboard/growth-dynamics", &params_ref);
        let key = format!("dash_growth_{}", period.cache_suffix());
        self.get(&path, &key).await
    }

    pub async fn top_products(&self) -> Result<Value> {
        self.get("/dashboard/top-products", "dash_top_prod").await
    }

    pub async fn top_customers(&self) -> Result<Value> {
        self.get("/dashboard/top-customers", "dash_top_cust").await
    }

    pub async fn detailed_stats(&self) -> Result<Value> {
        self.get("/dashboard/detailed-stats", "dash_detailed").await
    }

    pub async fn monthly_stats(&self, year: i32, month: u32) -> Result<Value> {
        let (year, month) = (year.to_string(), month.to_string());
        let path = with_query(
            "/dashboard/monthly-stats",
            &[("year", year.as_str()), ("month", month.as_str())],
        );
        let key = format!("dash_monthly_{}_{}", year, month);
        self.get(&path, &key).await
    }

    async fn get(&self, path: &str, key: &str) -> Result<Value> {
        self.client
            .request(path, RequestOptions::get(), CacheOptions::key(key))
            .await
    }
}
