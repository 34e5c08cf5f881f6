//! Region endpoints

use serde_json::Value;

use super::resource::{Resource, ResourceApi};
use crate::client::request::RequestClient;
use crate::error::Result;

/// Regions and shops are displayed together, so writes drop both
pub const REGIONS: Resource = Resource {
    path: "/regions",
    list_key: "regions_all",
    item_key_prefix: "region_",
    invalidates: &["regions", "shops"],
};

pub struct RegionsApi<'a> {
    crud: ResourceApi<'a>,
}

impl<'a> RegionsApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self {
            crud: ResourceApi::new(client, &REGIONS),
        }
    }

    pub async fn list(&self) -> Result<Value> {
        self.crud.list().await
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

    pub async fn map_data(&self) -> Result<Value> {
        self.crud.cached_get("/map-data", "regions_map").await
    }

    /// Regions that already have at least one shop
    pub async fn occupied(&self) -> Result<Value> {
        self.crud
            .cached_get("/occupied-regions", "regions_occupied")
            .await
    }
}
