use crate::application::dto::{QualityEntry, QualityReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the per-brand assessment
const TABLE_HEADER: &str = "| Brand | File | Quality | Action |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-------|------|---------|--------|\n";

/// MarkdownReportFormatter adapter for the analyzer's quality report
///
/// Brands needing an upgrade are listed first, then the ones already fine,
/// each group in input order.
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, report: &QualityReport) {
        output.push_str("# Logo Quality Report\n\n");
        output.push_str(&format!(
            "Generated {} with a pixel floor of {}×{}.\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S %z"),
            report.threshold,
            report.threshold
        ));
    }

    fn render_summary(&self, output: &mut String, report: &QualityReport) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Brands analyzed: {}\n", report.entries.len()));
        output.push_str(&format!("- Good: {}\n", report.good_count()));
        output.push_str(&format!("- Low quality: {}\n", report.low_quality_count()));
        output.push_str(&format!("- Missing: {}\n\n", report.missing_count()));
    }

    fn render_row(output: &mut String, entry: &QualityEntry) {
        let file = entry.file_name.as_deref().unwrap_or("—");
        let quality = entry
            .quality
            .map(|q| q.describe())
            .unwrap_or_else(|| "missing".to_string());
        let action = if entry.needs_upgrade() { "upgrade" } else { "ok" };

        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&entry.brand),
            Self::escape_markdown_table_cell(file),
            quality,
            action
        ));
    }

    fn render_table(&self, output: &mut String, report: &QualityReport) {
        output.push_str("## Brands\n\n");
        if report.entries.is_empty() {
            output.push_str("*No brands analyzed*\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        let (upgrade, fine): (Vec<_>, Vec<_>) =
            report.entries.iter().partition(|e| e.needs_upgrade());
        for entry in upgrade.into_iter().chain(fine) {
            Self::render_row(output, entry);
        }
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &QualityReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_summary(&mut output, report);
        self.render_table(&mut output, report);
        Ok(output)
    }
}
