/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod domain_search;
pub mod formatter;
pub mod http_fetcher;
pub mod input_reader;
pub mod logo_cache;
pub mod output_presenter;
pub mod progress_reporter;

pub use domain_search::DomainSearch;
pub use formatter::{MapFormatter, ReportFormatter};
pub use http_fetcher::{HttpFetcher, HttpResponse};
pub use input_reader::{BrandListReader, OverrideReader};
pub use logo_cache::LogoCache;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
