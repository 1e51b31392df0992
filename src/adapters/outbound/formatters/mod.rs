/// Formatter adapters for the lookup map and the quality report
mod json_map_formatter;
mod markdown_report_formatter;
mod typescript_map_formatter;

pub use json_map_formatter::JsonMapFormatter;
pub use markdown_report_formatter::MarkdownReportFormatter;
pub use typescript_map_formatter::TypeScriptMapFormatter;
