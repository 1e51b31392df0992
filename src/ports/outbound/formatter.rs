use crate::application::dto::QualityReport;
use crate::logo_resolution::domain::BrandLogoMap;
use crate::shared::Result;

/// MapFormatter port for rendering the brand → logo lookup artifact
///
/// Output must be a pure function of the map so regeneration is byte-identical.
pub trait MapFormatter {
    /// Renders the map
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, map: &BrandLogoMap) -> Result<String>;
}

/// ReportFormatter port for rendering the analyzer's quality report
pub trait ReportFormatter {
    fn format(&self, report: &QualityReport) -> Result<String>;
}
