use super::resolve_response::BrandReport;
use crate::logo_resolution::domain::BrandLogoMap;
use crate::logo_resolution::policies::LogoQuality;
use chrono::{DateTime, Local};

/// Assessment of one brand's cached logo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityEntry {
    pub brand: String,
    /// Canonical cache file, `None` when the brand has no logo
    pub file_name: Option<String>,
    /// `None` when the brand has no logo
    pub quality: Option<LogoQuality>,
}

impl QualityEntry {
    pub fn needs_upgrade(&self) -> bool {
        self.quality.map(LogoQuality::needs_upgrade).unwrap_or(true)
    }
}

/// Quality report over all analyzed brands
#[derive(Debug, Clone)]
pub struct QualityReport {
    pub entries: Vec<QualityEntry>,
    pub threshold: u32,
    pub generated_at: DateTime<Local>,
}

impl QualityReport {
    pub fn new(entries: Vec<QualityEntry>, threshold: u32) -> Self {
        Self {
            entries,
            threshold,
            generated_at: Local::now(),
        }
    }

    pub fn good_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.needs_upgrade()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.quality.is_none()).count()
    }

    pub fn low_quality_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.quality.is_some() && e.needs_upgrade())
            .count()
    }
}

/// AnalyzeResponse - Result of the quality analyzer
#[derive(Debug, Clone)]
pub struct AnalyzeResponse {
    pub report: QualityReport,
    /// Upgrade attempts, empty in report-only mode
    pub upgrades: Vec<BrandReport>,
    /// Regenerated map, present only when the cache may have changed
    pub map: Option<BrandLogoMap>,
    pub map_warnings: Vec<String>,
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = QualityReport::new(
            vec![
                QualityEntry {
                    brand: "Brembo".to_string(),
                    file_name: Some("brembo.svg".to_string()),
                    quality: Some(LogoQuality::Vector),
                },
                QualityEntry {
                    brand: "KW".to_string(),
                    file_name: Some("kw.ico".to_string()),
                    quality: Some(LogoQuality::FaviconFormat),
                },
                QualityEntry {
                    brand: "Rizoma".to_string(),
                    file_name: None,
                    quality: None,
                },
            ],
            300,
        );
        assert_eq!(report.good_count(), 1);
        assert_eq!(report.low_quality_count(), 1);
        assert_eq!(report.missing_count(), 1);
    }
}
