use crate::api::error::FetchError;
use crate::api::types::OptionSource;
use crate::filters::FilterState;
use crate::models::{PageResponse, Property, PropertyCard};
use async_trait::async_trait;

/// Backend operations the site depends on.
/// The panel driver and detail loader only see this trait, so tests can swap
/// the HTTP client for an in-memory catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Load one option list (cities, neighborhoods of a city, types, features)
    async fn options(&self, source: &OptionSource) -> Result<Vec<String>, FetchError>;

    /// Run a filtered search
    async fn search(&self, filters: &FilterState)
        -> Result<PageResponse<PropertyCard>, FetchError>;

    /// Load a single property by its identifier
    async fn property(&self, id: &str) -> Result<Property, FetchError>;

    /// Name used in log lines
    fn source_name(&self) -> &'static str;
}
