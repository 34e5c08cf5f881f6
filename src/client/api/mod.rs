//! Endpoint-specific wrappers around [`RequestClient`]
//!
//! Each wrapper only builds paths, query strings and cache metadata; all
//! behavior lives in the request client:
//! - [`AuthApi`] - login, current user, logout
//! - [`DashboardApi`] - summary statistics
//! - [`ProductsApi`], [`CustomersApi`], [`SalesApi`] - core business records
//! - [`RegionsApi`], [`ShopsApi`] - geography
//! - [`AiApi`] - assistant questions, reports and recommendations
//! - [`ConfigApi`] - client-side settings served by the API

mod ai;
mod auth;
mod config;
mod customers;
mod dashboard;
mod products;
mod regions;
mod resource;
mod sales;
mod shops;

pub use ai::AiApi;
pub use auth::AuthApi;
pub use config::ConfigApi;
pub use customers::{CUSTOMERS, CustomersApi};
pub use dashboard::{DashboardApi, GrowthPeriod};
pub use products::{PRODUCTS, ProductsApi};
pub use regions::{REGIONS, RegionsApi};
pub use resource::{Resource, ResourceApi};
pub use sales::{SALES, SalesApi};
pub use shops::{SHOPS, ShopsApi};

use reqwest::Url;

use super::request::RequestClient;

impl RequestClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn customers(&self) -> CustomersApi<'_> {
        CustomersApi::new(self)
    }

    pub fn sales(&self) -> SalesApi<'_> {
        SalesApi::new(self)
    }

    pub fn regions(&self) -> RegionsApi<'_> {
        RegionsApi::new(self)
    }

    pub fn shops(&self) -> ShopsApi<'_> {
        ShopsApi::new(self)
    }

    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    pub fn app_config(&self) -> ConfigApi<'_> {
        ConfigApi::new(self)
    }
}

/// Append URL-encoded query parameters to `path`.
///
/// Returns `path` unchanged when `params` is empty.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    // Only the query string is kept; the base is a throwaway
    let mut url = match Url::parse("http://query.invalid/") {
        Ok(url) => url,
        Err(_) => return path.to_string(),
    };
    url.query_pairs_mut().extend_pairs(params.iter());

    match url.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    }
}
