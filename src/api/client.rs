//! App catalog HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::types::{AppListResponse, CatalogApp};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};

/// Source of the full app id catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every known app in a single bulk request.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogApp>>;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogApp>> {
        (**self).fetch_catalog().await
    }
}

/// Client for the public app list endpoint.
pub struct SteamCatalogClient {
    client: Client,
    url: String,
}

impl SteamCatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Catalog(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl CatalogSource for SteamCatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogApp>> {
        tracing::debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Catalog(format!("HTTP {} from {}", status, self.url)));
        }

        let text = response.text().await?;
        tracing::debug!("App list response length: {} bytes", text.len());

        let parsed: AppListResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Catalog(format!(
                "Failed to parse app list: {} - Response: {}",
                e,
                text.chars().take(200).collect::<String>()
            ))
        })?;

        Ok(parsed.applist.apps)
    }
}
