//! CRUD operations shared by the collection-style endpoints
//!
//! Each resource declares where it lives, how its reads are keyed in the cache
//! and which cache tags its writes invalidate.

use serde_json::Value;

use crate::client::request::{CacheOptions, RequestClient, RequestOptions};
use crate::error::Result;

/// Static description of a collection endpoint
#[derive(Debug)]
pub struct Resource {
    /// Collection path, e.g. `/products`
    pub path: &'static str,
    /// Cache key of the full listing
    pub list_key: &'static str,
    /// Cache key prefix of single items; the id is appended
    pub item_key_prefix: &'static str,
    /// Tags invalidated by create, update and delete
    pub invalidates: &'static [&'static str],
}

impl Resource {
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }

    pub fn item_key(&self, id: i64) -> String {
        format!("{}{}", self.item_key_prefix, id)
    }
}

/// CRUD calls against one [`Resource`]
pub struct ResourceApi<'a> {
    client: &'a RequestClient,
    resource: &'static Resource,
}

impl<'a> ResourceApi<'a> {
    pub fn new(client: &'a RequestClient, resource: &'static Resource) -> Self {
        Self { client, resource }
    }

    /// Fetch the whole collection
    pub async fn list(&self) -> Result<Value> {
        self.client
            .request(
                self.resource.path,
                RequestOptions::get(),
                CacheOptions::key(self.resource.list_key),
            )
            .await
    }

    /// Fetch one item
    pub async fn get(&self, id: i64) -> Result<Value> {
        self.client
            .request(
                &self.resource.item_path(id),
                RequestOptions::get(),
                CacheOptions::key(self.resource.item_key(id)),
            )
            .await
    }

    pub async fn create(&self, data: Value) -> Result<Value> {
        self.client
            .request(
                self.resource.path,
                RequestOptions::post(data),
                CacheOptions::invalidate(self.resource.invalidates),
            )
            .await
    }

    pub async fn update(&self, id: i64, data: Value) -> Result<Value> {
        self.client
            .request(
                &self.resource.item_path(id),
                RequestOptions::put(data),
                CacheOptions::invalidate(self.resource.invalidates),
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Value> {
        self.client
            .request(
                &self.resource.item_path(id),
                RequestOptions::delete(),
                CacheOptions::invalidate(self.resource.invalidates),
            )
            .await
    }

    /// Cached GET of a sub-path of the collection
    pub(crate) async fn cached_get(&self, sub_path: &str, key: &str) -> Result<Value> {
        self.client
            .request(
                &format!("{}{}", self.resource.path, sub_path),
                RequestOptions::get(),
                CacheOptions::key(key),
            )
            .await
    }
}
