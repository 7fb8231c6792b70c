use crate::api::error::{validate_string_list, FetchError};
use crate::api::traits::CatalogApi;
use crate::api::types::OptionSource;
use crate::filters::{build_query, FilterState};
use crate::models::{PageResponse, Property, PropertyCard};
use crate::settings::ApiSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the listing backend
pub struct ImobiliariaClient {
    client: Client,
    base_url: String,
}

impl ImobiliariaClient {
    /// Create a client against the configured API base URL
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(&settings.user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}/{}", self.base_url, path_and_query)
    }

    /// GET a JSON document, mapping non-2xx statuses to [`FetchError::Status`]
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status: {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(serde_json::from_str(&body)?)
    }

    async fn get_typed<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let value = self.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl CatalogApi for ImobiliariaClient {
    async fn options(&self, source: &OptionSource) -> Result<Vec<String>, FetchError> {
        let url = self.url(&source.path_and_query());
        let list = validate_string_list(self.get_json(&url).await?)?;
        debug!("Loaded {} {} options", list.len(), source.kind());
        Ok(list)
    }

    async fn search(
        &self,
        filters: &FilterState,
    ) -> Result<PageResponse<PropertyCard>, FetchError> {
        let url = format!("{}?{}", self.url("busca"), build_query(filters));
        info!("BUSCA URL: {}", url);

        let page: PageResponse<PropertyCard> = self.get_typed(&url).await?;
        info!(
            "Search returned page {} of {} ({} results total)",
            page.number + 1,
            page.total_pages,
            page.total_elements
        );
        Ok(page)
    }

    async fn property(&self, id: &str) -> Result<Property, FetchError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(FetchError::MissingId);
        }

        let url = self.url(&format!("busca/{}", urlencoding::encode(id)));
        self.get_typed(&url).await
    }

    fn source_name(&self) -> &'static str {
        "imobiliaria-core"
    }
}
