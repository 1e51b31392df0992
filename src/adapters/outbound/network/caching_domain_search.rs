use crate::ports::outbound::DomainSearch;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingDomainSearch wraps a DomainSearch and remembers answers per brand name.
///
/// Both hits and misses are cached, so a brand listed twice (or looked up by
/// both the fetch and analyze paths) costs at most one search request per run.
/// Errors are not cached.
pub struct CachingDomainSearch<S: DomainSearch> {
    inner: S,
    cache: Arc<DashMap<String, Option<String>>>,
}

impl<S: DomainSearch> CachingDomainSearch<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<S: DomainSearch> DomainSearch for CachingDomainSearch<S> {
    async fn search_domain(&self, brand_name: &str) -> Result<Option<String>> {
        let key = brand_name.trim().to_lowercase();

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let domain = self.inner.search_domain(brand_name).await?;
        self.cache.insert(key, domain.clone());
        Ok(domain)
    }
}
