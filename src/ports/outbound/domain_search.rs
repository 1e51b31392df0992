use crate::shared::Result;
use async_trait::async_trait;

/// DomainSearch port for discovering a brand's official website
///
/// Only consulted when neither the overrides nor the curated table know the
/// brand. Results are best-effort.
#[async_trait]
pub trait DomainSearch: Send + Sync {
    /// Searches for the brand's official domain
    ///
    /// # Arguments
    /// * `brand_name` - Display name of the brand
    ///
    /// # Returns
    /// The bare host name (without `www.`), or `None` when nothing usable was found
    ///
    /// # Errors
    /// Returns an error if the search request itself fails
    async fn search_domain(&self, brand_name: &str) -> Result<Option<String>>;
}
