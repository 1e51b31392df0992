use crate::logo_resolution::domain::BrandLogoMap;

/// What happened to one brand in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandOutcome {
    /// A cache entry already existed; no network access
    Cached { file_name: String },
    /// A manual logo override applies; acquisition skipped
    Overridden { path: String },
    /// A new logo was accepted (and written, unless dry-run)
    Downloaded { provider: String, file_name: String },
    /// A low-quality entry was replaced by a better one
    Upgraded {
        provider: String,
        file_name: String,
        replaced: Option<String>,
    },
    /// Nothing usable was found; needs manual follow-up
    Failed { reason: String },
}

impl BrandOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, BrandOutcome::Failed { .. })
    }
}

/// Outcome of one brand, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandReport {
    pub brand: String,
    pub outcome: BrandOutcome,
}

impl BrandReport {
    pub fn new(brand: impl Into<String>, outcome: BrandOutcome) -> Self {
        Self {
            brand: brand.into(),
            outcome,
        }
    }
}

/// Tally of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub downloaded: usize,
    pub upgraded: usize,
    pub cached: usize,
    pub overridden: usize,
    pub failed: usize,
}

impl ResolveStats {
    pub fn from_reports(reports: &[BrandReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |mut stats, report| {
                match report.outcome {
                    BrandOutcome::Cached { .. } => stats.cached += 1,
                    BrandOutcome::Overridden { .. } => stats.overridden += 1,
                    BrandOutcome::Downloaded { .. } => stats.downloaded += 1,
                    BrandOutcome::Upgraded { .. } => stats.upgraded += 1,
                    BrandOutcome::Failed { .. } => stats.failed += 1,
                }
                stats
            })
    }
}

/// ResolveResponse - Result of the acquisition pipeline
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub reports: Vec<BrandReport>,
    /// Map regenerated from the cache after the run
    pub map: BrandLogoMap,
    /// Map entries that could not honor their override
    pub map_warnings: Vec<String>,
    pub dry_run: bool,
}

impl ResolveResponse {
    pub fn new(
        reports: Vec<BrandReport>,
        map: BrandLogoMap,
        map_warnings: Vec<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            reports,
            map,
            map_warnings,
            dry_run,
        }
    }

    pub fn stats(&self) -> ResolveStats {
        ResolveStats::from_reports(&self.reports)
    }

    /// Brands that need manual follow-up
    pub fn failed_brands(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_failure())
            .map(|r| r.brand.as_str())
            .collect()
    }
}
