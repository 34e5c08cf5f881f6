//! Shop endpoints

use serde_json::Value;

use super::resource::{Resource, ResourceApi};
use crate::client::request::RequestClient;
use crate::error::Result;

pub const SHOPS: Resource = Resource {
    path: "/shops",
    list_key: "shops_all",
    item_key_prefix: "shop_",
    invalidates: &["shops", "regions"],
};

pub struct ShopsApi<'a> {
    crud: ResourceApi<'a>,
}

impl<'a> ShopsApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self {
            crud: ResourceApi::new(client, &SHOPS),
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
        self.crud.cached_get("/map-data", "shops_map").await
    }

    pub async fn top_shops(&self) -> Result<Value> {
        self.crud
            .cached_get("/analysis/top-shops", "shops_top")
            .await
    }

    pub async fn top_regions(&self) -> Result<Value> {
        self.crud
            .cached_get("/analysis/top-regions", "shops_top_regions")
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::{MockTransport, mock_client};
    use serde_json::json;

    #[tokio::test]
    async fn test_update_invalidates_shops_and_regions() {
        let transport = MockTransport::new().with_response(200, r#"{"id": 3}"#);
        let (client, cache, _tokens) = mock_client(&transport);
        cache.set("shops_all", json!([]));
        cache.set("shops_top_regions", json!([]));
        cache.set("region_2", json!({}));
        cache.set("sales_online", json!([]));

        client
            .shops()
            .update(3, json!({"name": "Chilonzor"}))
            .await
            .unwrap();

        let mut keys = cache.keys();
        keys.sort();
        // "region_2" doesn't contain "regions"
        assert_eq!(keys, vec!["region_2", "sales_online"]);
    }

    #[tokio::test]
    async fn test_analysis_and_map_endpoints() {
        let transport = MockTransport::new()
            .with_response(200, "[]")
            .with_response(200, "[]")
            .with_response(200, "[]");
        let (client, cache, _tokens) = mock_client(&transport);

        client.shops().map_data().await.unwrap();
        client.shops().top_shops().await.unwrap();
        client.shops().top_regions().await.unwrap();

        let urls: Vec<String> = transport.requests().await.into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:5000/api/shops/map-data",
                "http://localhost:5000/api/shops/analysis/top-shops",
                "http://localhost:5000/api/shops/analysis/top-regions",
            ]
        );
        assert_eq!(cache.keys().len(), 3);
    }
}
