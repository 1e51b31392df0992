use crate::logo_resolution::domain::{normalize_host, Brand};
use crate::logo_resolution::services::KnownDomains;
use crate::ports::outbound::DomainSearch;
use std::collections::BTreeMap;
use tracing::debug;

/// ResolveDomainUseCase - Finds the official domain of a brand
///
/// Sources, first hit wins:
/// 1. manual domain overrides, keyed by exact brand name
/// 2. the domain supplied with the brand list entry
/// 3. the curated [`KnownDomains`] table
/// 4. a web search through the [`DomainSearch`] port
///
/// # Type Parameters
/// * `S` - DomainSearch implementation
pub struct ResolveDomainUseCase<S: DomainSearch> {
    search: S,
    overrides: BTreeMap<String, String>,
}

impl<S: DomainSearch> ResolveDomainUseCase<S> {
    pub fn new(search: S, overrides: BTreeMap<String, String>) -> Self {
        Self { search, overrides }
    }

    /// Resolves a domain; `None` means the brand cannot be acquired
    ///
    /// Search failures are logged and swallowed.
    pub async fn resolve(&self, brand: &Brand) -> Option<String> {
        if let Some(domain) = self.overrides.get(brand.name()).and_then(|d| normalize_host(d)) {
            debug!(brand = brand.name(), %domain, "domain from override");
            return Some(domain);
        }

        if let Some(domain) = brand.domain().and_then(normalize_host) {
            debug!(brand = brand.name(), %domain, "domain from brand list");
            return Some(domain);
        }

        if let Some(domain) = KnownDomains::lookup(brand.name()) {
            debug!(brand = brand.name(), domain, "domain from curated table");
            return Some(domain.to_string());
        }

        match self.search.search_domain(brand.name()).await {
            Ok(Some(found)) => {
                let domain = normalize_host(&found);
                debug!(brand = brand.name(), ?domain, "domain from search");
                domain
            }
            Ok(None) => {
                debug!(brand = brand.name(), "search found no domain");
                None
            }
            Err(e) => {
                debug!(brand = brand.name(), error = %e, "domain search failed");
                None
            }
        }
    }
}
