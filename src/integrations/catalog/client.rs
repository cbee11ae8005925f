// src/integrations/catalog/client.rs
//
// Remote catalog endpoint.
//
// This is INFRASTRUCTURE, not DOMAIN: it returns raw records exactly as the
// endpoint shapes them; the catalog store maps them into entries and derives
// the cached fields.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub const DEFAULT_CATALOG_URL: &str = "https://ghibliapi.vercel.app/films";

/// A record as served by the catalog endpoint. Only a subset of fields is
/// consumed; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
    pub running_time: Option<String>,
    pub image: Option<String>,
    pub movie_banner: Option<String>,
}

/// Read-only catalog source. Trait seam so the store can be tested without
/// the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_catalog(&self) -> AppResult<Vec<RawRecord>>;
}

pub struct HttpCatalogClient {
    base_url: String,
    http_client: Client,
}

impl HttpCatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_CATALOG_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: Client::new(),
        }
    }
}

impl Default for HttpCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn fetch_catalog(&self) -> AppResult<Vec<RawRecord>> {
        let response = self
            .http_client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;

        let records = response.json::<Vec<RawRecord>>().await?;
        Ok(records)
    }
}
