use crate::adapters::outbound::formatters::{
    JsonMapFormatter, MarkdownReportFormatter, TypeScriptMapFormatter,
};
use crate::application::dto::MapFormat;
use crate::ports::outbound::{MapFormatter, ReportFormatter};

/// Factory for creating artifact and report formatters
///
/// Selects the infrastructure formatter for an application-level format
/// choice, keeping the CLI unaware of concrete adapter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a map formatter for the specified format
    ///
    /// # Examples
    /// ```
    /// use logo_resolver::application::dto::MapFormat;
    /// use logo_resolver::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(MapFormat::TypeScript);
    /// ```
    pub fn create(format: MapFormat) -> Box<dyn MapFormatter> {
        match format {
            MapFormat::TypeScript => Box::new(TypeScriptMapFormatter::new()),
            MapFormat::Json => Box::new(JsonMapFormatter::new()),
        }
    }

    /// Creates the formatter of the analyzer's quality report
    pub fn create_report_formatter() -> Box<dyn ReportFormatter> {
        Box::new(MarkdownReportFormatter::new())
    }

    /// Returns the progress message for the specified format
    ///
    /// # Examples
    /// ```
    /// use logo_resolver::application::dto::MapFormat;
    /// use logo_resolver::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(MapFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON logo map...");
    /// ```
    pub fn progress_message(format: MapFormat) -> &'static str {
        match format {
            MapFormat::TypeScript => "📝 Generating TypeScript logo map...",
            MapFormat::Json => "📝 Generating JSON logo map...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo_resolution::domain::BrandLogoMap;

    #[test]
    fn test_create_typescript_formatter() {
        let formatter = FormatterFactory::create(MapFormat::TypeScript);
        let output = formatter.format(&BrandLogoMap::new("/p.svg")).unwrap();
        assert!(output.contains("export const BRAND_LOGOS"));
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(MapFormat::Json);
        let output = formatter.format(&BrandLogoMap::new("/p.svg")).unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(MapFormat::TypeScript),
            "📝 Generating TypeScript logo map..."
        );
        assert_eq!(
            FormatterFactory::progress_message(MapFormat::Json),
            "📝 Generating JSON logo map..."
        );
    }
}
