//! Authentication endpoints

use serde_json::{Value, json};

use crate::client::request::{CacheOptions, RequestClient, RequestOptions};
use crate::error::Result;

pub struct AuthApi<'a> {
    client: &'a RequestClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for an access token and store it.
    ///
    /// Sent without any existing token. A rejected login is a plain error and
    /// does not clear the current session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Value> {
        let data = self
            .client
            .post_public(
                "/auth/login",
                &json!({ "username": username, "password": password }),
            )
            .await?;

        if let Some(token) = data.get("access_token").and_then(Value::as_str)
            && !token.is_empty()
        {
            self.client.tokens().set_token(token)?;
        }
        Ok(data)
    }

    /// The logged-in user
    pub async fn current_user(&self) -> Result<Value> {
        self.client
            .request("/auth/me", RequestOptions::get(), CacheOptions::none())
            .await
    }

    /// Forget the token and the cache
    pub fn logout(&self) {
        self.client.logout();
    }
}
