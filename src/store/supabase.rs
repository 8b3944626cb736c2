//! # Hosted Store Client
//!
//! Talks to a Supabase project's PostgREST interface over HTTP. One
//! `reqwest::Client` is built at startup and reused for every request;
//! connection pooling is whatever the client does internally.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::model::{ItemFields, ShoppingListItem};

use super::error::{StoreError, StoreResult};
use super::ItemStore;

/// Table holding the shopping list collection.
const TABLE: &str = "shopping_list";

/// Error body the REST interface returns on failure.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: String,
}

/// PostgREST-backed implementation of [`ItemStore`].
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
}

impl SupabaseStore {
    /// Build the long-lived client from validated configuration.
    ///
    /// The service key is attached to every request as both `apikey` and
    /// bearer token, the way the hosted store expects.
    pub fn new(config: &AppConfig) -> StoreResult<Self> {
        let mut headers = HeaderMap::new();

        let key = HeaderValue::from_str(&config.supabase_key)
            .map_err(|e| StoreError::Backend(format!("invalid store key: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.supabase_key))
            .map_err(|e| StoreError::Backend(format!("invalid store key: {}", e)))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    /// Translate a non-success response into a store error, preferring the
    /// store's own message when the body carries one.
    async fn response_error(response: reqwest::Response) -> StoreError {
        let status = response.status();
        if status == StatusCode::NOT_ACCEPTABLE {
            // Single-object request matched zero or multiple rows.
            return StoreError::NotSingleRow;
        }
        match response.json::<RestErrorBody>().await {
            Ok(body) => StoreError::Backend(body.message),
            Err(_) => StoreError::Backend(format!("store returned HTTP {}", status)),
        }
    }

    fn transport(err: reqwest::Error) -> StoreError {
        StoreError::Backend(err.to_string())
    }
}

#[async_trait]
impl ItemStore for SupabaseStore {
    async fn insert(&self, fields: ItemFields) -> StoreResult<Vec<ShoppingListItem>> {
        let response = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&[fields])
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        response.json().await.map_err(Self::transport)
    }

    async fn list(&self) -> StoreResult<Vec<ShoppingListItem>> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "expiryDate.asc")])
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        response.json().await.map_err(Self::transport)
    }

    async fn get(&self, id: i64) -> StoreResult<ShoppingListItem> {
        let filter = format!("eq.{}", id);
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("id", filter.as_str())])
            // Ask for a bare object; zero or multiple matches become an error.
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        response.json().await.map_err(Self::transport)
    }

    async fn update(&self, id: &str, fields: ItemFields) -> StoreResult<Vec<ShoppingListItem>> {
        // The id is the raw path string; a non-numeric value is the
        // store's problem to reject.
        let filter = format!("eq.{}", id);
        let response = self
            .client
            .patch(self.table_url())
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=representation")
            .json(&fields)
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        response.json().await.map_err(Self::transport)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let filter = format!("eq.{}", id);
        let response = self
            .client
            .delete(self.table_url())
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            supabase_url: "https://demo.supabase.co/".to_string(),
            supabase_key: "service_key".to_string(),
            port: AppConfig::DEFAULT_PORT,
        }
    }

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let store = SupabaseStore::new(&test_config()).unwrap();
        assert_eq!(
            store.table_url(),
            "https://demo.supabase.co/rest/v1/shopping_list"
        );
    }

    #[test]
    fn test_rejects_non_ascii_key() {
        let mut config = test_config();
        config.supabase_key = "bad\nkey".to_string();
        assert!(SupabaseStore::new(&config).is_err());
    }
}
