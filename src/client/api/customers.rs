//! Customer endpoints

use serde_json::Value;

use super::resource::{Resource, ResourceApi};
use crate::client::request::RequestClient;
use crate::error::Result;

pub const CUSTOMERS: Resource = Resource {
    path: "/customers",
    list_key: "customers_all",
    item_key_prefix: "customer_",
    invalidates: &["customers", "dash"],
};

pub struct CustomersApi<'a> {
    crud: ResourceApi<'a>,
}

impl<'a> CustomersApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self {
            crud: ResourceApi::new(client, &CUSTOMERS),
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

    /// Customers with coordinates, for the map view
    pub async fn map_data(&self) -> Result<Value> {
        self.crud.cached_get("/map-data", "customers_map").await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::{MockTransport, mock_client};
    use serde_json::json;

    #[tokio::test]
    async fn test_delete_invalidates_customer_listings_and_dashboard() {
        let transport = MockTransport::new().with_response(200, r#"{"message": "ok"}"#);
        let (client, cache, _tokens) = mock_client(&transport);
        cache.set("customers_all", json!([]));
        cache.set("customers_map", json!([]));
        cache.set("dash_top_cust", json!([]));
        cache.set("regions_all", json!([]));

        client.customers().delete(4).await.unwrap();

        assert_eq!(cache.keys(), vec!["regions_all".to_string()]);
        let req = transport.last_request().await.unwrap();
        assert_eq!(req.url, "http://localhost:5000/api/customers/4");
    }

    #[tokio::test]
    async fn test_map_data_cached() {
        let transport = MockTransport::new().with_response(200, "[]");
        let (client, cache, _tokens) = mock_client(&transport);

        client.customers().map_data().await.unwrap();

        let req = transport.last_request().await.unwrap();
        assert_eq!(req.url, "http://localhost:5000/api/customers/map-data");
        assert!(cache.get("customers_map").is_some());
    }
}
