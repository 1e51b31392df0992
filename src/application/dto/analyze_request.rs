use crate::logo_resolution::domain::Brand;
use crate::logo_resolution::policies::DEFAULT_QUALITY_THRESHOLD;

/// AnalyzeRequest - Request DTO for the quality analyzer
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub brands: Vec<Brand>,
    /// Only this brand, matched case-insensitively
    pub brand_filter: Option<String>,
    /// Print the quality report only; no network access
    pub report_only: bool,
    /// Upgrade at most this many brands
    pub limit: Option<usize>,
    pub dry_run: bool,
    /// Raster logos smaller than `threshold` pixels on their longer side are low quality
    pub threshold: u32,
}

impl AnalyzeRequest {
    pub fn new(brands: Vec<Brand>) -> Self {
        Self {
            brands,
            brand_filter: None,
            report_only: false,
            limit: None,
            dry_run: false,
            threshold: DEFAULT_QUALITY_THRESHOLD,
        }
    }

    pub fn with_brand_filter(mut self, brand: Option<String>) -> Self {
        self.brand_filter = brand.filter(|b| !b.trim().is_empty());
        self
    }

    pub fn with_report_only(mut self, report_only: bool) -> Self {
        self.report_only = report_only;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }
}
