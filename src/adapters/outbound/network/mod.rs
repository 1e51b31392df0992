/// Network adapters for external HTTP access
mod caching_domain_search;
mod duckduckgo_search;
mod reqwest_fetcher;

pub use caching_domain_search::CachingDomainSearch;
pub use duckduckgo_search::DuckDuckGoSearch;
pub use reqwest_fetcher::{ReqwestHttpFetcher, DEFAULT_TIMEOUT_SECS};
