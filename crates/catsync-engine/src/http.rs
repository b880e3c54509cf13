//! reqwest-backed implementations of the catalog traits.
//!
//! One shared `reqwest::Client` per transport value; base URLs come
//! from configuration at construction time so multiple environments
//! can be exercised without a process restart.

use async_trait::async_trait;
use catsync_core::{
    MappedCategory, MappedProduct, Result, SourceCategory, SourceProduct, SyncError,
};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// HTTP client for the source-of-record API.
pub struct HttpSourceCatalog {
    client: Client,
    base_url: Url,
}

impl HttpSourceCatalog {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// `GET {base}/{path}`, unwrapping the source's `{ data: [...] }`
    /// envelope. A missing or non-array `data` field is an empty
    /// collection, never an error.
    async fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = endpoint(&self.base_url, path)?;
        let response = self.client.get(url).send().await.map_err(SyncError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::upstream_rejected(status.as_u16(), body));
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| SyncError::unexpected(format!("source /{path} returned non-JSON: {e}")))?;
        match envelope.get("data") {
            Some(data @ Value::Array(_)) => serde_json::from_value(data.clone()).map_err(|e| {
                SyncError::unexpected(format!("source /{path} records malformed: {e}"))
            }),
            _ => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl crate::api::SourceCatalog for HttpSourceCatalog {
    async fn fetch_categories(&self) -> Result<Vec<SourceCategory>> {
        self.fetch_collection("categorias").await
    }

    async fn fetch_products(&self) -> Result<Vec<SourceProduct>> {
        self.fetch_collection("productos").await
    }
}

/// HTTP client for the destination API.
pub struct HttpDestinationCatalog {
    client: Client,
    base_url: Url,
}

impl HttpDestinationCatalog {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// `GET {base}/{path}`; the destination returns the array directly
    /// as the body. An empty body reads as an empty collection.
    async fn fetch_collection(&self, path: &str) -> Result<Vec<Value>> {
        let url = endpoint(&self.base_url, path)?;
        let response = self.client.get(url).send().await.map_err(SyncError::from)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(SyncError::upstream_rejected(status.as_u16(), body));
        }

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&body).map_err(|e| {
            SyncError::unexpected(format!("destination /{path} is not a JSON array: {e}"))
        })
    }

    /// `POST {base}/{path}` with the whole batch as the JSON body.
    ///
    /// The acknowledgment body is carried opaquely: valid JSON is
    /// passed through, anything else is wrapped as a string, an empty
    /// body becomes null.
    async fn push<T: Serialize + ?Sized>(&self, path: &str, batch: &T) -> Result<Value> {
        let url = endpoint(&self.base_url, path)?;
        let response = self
            .client
            .post(url)
            .json(batch)
            .send()
            .await
            .map_err(SyncError::from)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(SyncError::upstream_rejected(status.as_u16(), body));
        }

        if body.trim().is_empty() {
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
        }
    }
}

#[async_trait]
impl crate::api::DestinationCatalog for HttpDestinationCatalog {
    async fn fetch_categories(&self) -> Result<Vec<Value>> {
        self.fetch_collection("categorias").await
    }

    async fn fetch_products(&self) -> Result<Vec<Value>> {
        self.fetch_collection("productos").await
    }

    async fn push_categories(&self, batch: &[MappedCategory]) -> Result<Value> {
        self.push("categorias", batch).await
    }

    async fn push_products(&self, batch: &[MappedProduct]) -> Result<Value> {
        self.push("productos", batch).await
    }
}

/// Join a path onto the base URL without `Url::join`'s last-segment
/// replacement surprises (`http://host/integrativa` + `categorias`
/// must keep `/integrativa`).
fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let raw = format!("{}/{}", base.as_str().trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|e| SyncError::request_malformed(format!("invalid endpoint {raw}: {e}")))
}
