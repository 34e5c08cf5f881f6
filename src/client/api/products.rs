//! Product endpoints

use serde_json::Value;

use super::resource::{Resource, ResourceApi};
use crate::client::request::RequestClient;
use crate::error::Result;

/// Product writes also change dashboard figures
pub const PRODUCTS: Resource = Resource {
    path: "/products",
    list_key: "products_all",
    item_key_prefix: "product_",
    invalidates: &["products", "dash"],
};

pub struct ProductsApi<'a> {
    crud: ResourceApi<'a>,
}

impl<'a> ProductsApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self {
            crud: ResourceApi::new(client, &PRODUCTS),
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

    pub async fn top_profitable(&self) -> Result<Value> {
        self.crud
            .cached_get("/analysis/top-profitable", "prod_top_profit")
            .await
    }

    pub async fn top_selling(&self) -> Result<Value> {
        self.crud
            .cached_get("/analysis/top-selling", "prod_top_sell")
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::{MockTransport, mock_client};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_crud_paths_methods_and_keys() {
        let transport = MockTransport::new()
            .with_response(200, r#"[{"id": 1}]"#)
            .with_response(200, r#"{"id": 1}"#)
            .with_response(200, r#"{"id": 1}"#)
            .with_response(200, r#"{"message": "deleted"}"#);
        let (client, cache, _tokens) = mock_client(&transport);
        let products = client.products();

        products.list().await.unwrap();
        products.get(1).await.unwrap();
        assert!(cache.get("products_all").is_some());
        assert!(cache.get("product_1").is_some());

        products.update(1, json!({"sale_price": 12000})).await.unwrap();
        // "product_1" doesn't contain "products", so only the listing goes
        assert!(cache.get("products_all").is_none());
        assert!(cache.get("product_1").is_some());

        products.delete(1).await.unwrap();

        let calls: Vec<(Method, String)> = transport
            .requests()
            .await
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            calls,
            vec![
                (Method::GET, "http://localhost:5000/api/products".to_string()),
                (Method::GET, "http://localhost:5000/api/products/1".to_string()),
                (Method::PUT, "http://localhost:5000/api/products/1".to_string()),
                (Method::DELETE, "http://localhost:5000/api/products/1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_invalidates_products_and_dash() {
        let transport = MockTransport::new().with_response(201, r#"{"id": 2}"#);
        let (client, cache, _tokens) = mock_client(&transport);
        cache.set("products_all", json!([]));
        cache.set("dash_top_prod", json!([]));
        cache.set("customers_all", json!([]));

        client
            .products()
            .create(json!({"name": "Olma", "package_type": "kg"}))
            .await
            .unwrap();

        assert_eq!(cache.keys(), vec!["customers_all".to_string()]);
    }

    #[tokio::test]
    async fn test_analysis_endpoints() {
        let transport = MockTransport::new()
            .with_response(200, "[]")
            .with_response(200, "[]");
        let (client, cache, _tokens) = mock_client(&transport);

        client.products().top_profitable().await.unwrap();
        client.products().top_selling().await.unwrap();

        let urls: Vec<String> = transport.requests().await.into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:5000/api/products/analysis/top-profitable",
                "http://localhost:5000/api/products/analysis/top-selling",
            ]
        );
        assert!(cache.get("prod_top_profit").is_some());
        assert!(cache.get("prod_top_sell").is_some());
    }
}
