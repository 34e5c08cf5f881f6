//! Settings the server hands to clients

use serde_json::Value;

use crate::client::request::{CacheOptions, RequestClient, RequestOptions};
use crate::error::Result;

pub struct ConfigApi<'a> {
    client: &'a RequestClient,
}

impl<'a> ConfigApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self { client }
    }

    /// Public map token used by the map views
    pub async fn mapbox_token(&self) -> Result<Value> {
        self.client
            .request(
                "/config/mapbox-token",
                RequestOptions::get(),
                CacheOptions::key("config_mapbox"),
            )
            .await
    }
}
