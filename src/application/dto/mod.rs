/// Data Transfer Objects for application layer
///
/// DTOs carry requests, per-run configuration and results between the CLI,
/// the use cases and the formatters, keeping the domain layer isolated.
mod analyze_request;
mod analyze_response;
mod map_format;
mod pipeline_config;
mod resolve_request;
mod resolve_response;

pub use analyze_request::AnalyzeRequest;
pub use analyze_response::{AnalyzeResponse, QualityEntry, QualityReport};
pub use map_format::MapFormat;
pub use pipeline_config::{PipelineConfig, DEFAULT_CONCURRENCY, DEFAULT_DELAY_MS};
pub use resolve_request::ResolveRequest;
pub use resolve_response::{BrandOutcome, BrandReport, ResolveResponse, ResolveStats};
