use crate::logo_resolution::policies::DEFAULT_MIN_BYTES;
use crate::logo_resolution::services::{DEFAULT_PLACEHOLDER, DEFAULT_PUBLIC_PREFIX};
use std::collections::BTreeMap;
use std::time::Duration;

/// Brands processed at once
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Pause after each brand pipeline, to stay polite with the logo services
pub const DEFAULT_DELAY_MS: u64 = 250;

/// Per-run configuration shared by the pipeline use cases
///
/// Built once by the CLI from flags, the config file and the override files,
/// then handed to each use case explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub concurrency: usize,
    pub delay: Duration,
    /// Brand name → logo path fragment; authoritative, skips acquisition
    pub logo_overrides: BTreeMap<String, String>,
    /// Brand name → domain; trusted without verification
    pub domain_overrides: BTreeMap<String, String>,
    pub public_prefix: String,
    pub placeholder: String,
    pub min_bytes: usize,
    /// Pixel floor for raster downloads in the fetch pipeline
    pub min_dimension: Option<u32>,
    pub brandfetch_client_id: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            logo_overrides: BTreeMap::new(),
            domain_overrides: BTreeMap::new(),
            public_prefix: DEFAULT_PUBLIC_PREFIX.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            min_bytes: DEFAULT_MIN_BYTES,
            min_dimension: None,
            brandfetch_client_id: None,
        }
    }
}

impl PipelineConfig {
    pub fn with_logo_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.logo_overrides = overrides;
        self
    }

    pub fn with_domain_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.domain_overrides = overrides;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}
