//! logo-resolver - brand logo acquisition and lookup map generation
//!
//! Given a list of brand names, this library determines a canonical file
//! slug for each brand, checks a local cache directory, and otherwise tries
//! an ordered list of logo sources (vector CDNs, the brand's own website,
//! logo APIs, favicons), validating every payload before it is cached. A
//! brand → public path lookup map is then regenerated from the cache.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`logo_resolution`): Brands, slugs, formats, candidates and pure policies
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use logo_resolver::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let fetcher = ReqwestHttpFetcher::new()?;
//! let search = CachingDomainSearch::new(DuckDuckGoSearch::new(fetcher.clone())?);
//! let cache = FileSystemLogoCache::new("public/logos")?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = ResolveLogosUseCase::new(
//!     fetcher,
//!     search,
//!     cache,
//!     progress_reporter,
//!     PipelineConfig::default(),
//! )?;
//!
//! let brands = vec![Brand::new("Brembo".to_string())?];
//! let response = use_case.execute(ResolveRequest::new(brands, false)).await?;
//!
//! let output = TypeScriptMapFormatter::new().format(&response.map)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod logo_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemLogoCache, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonMapFormatter, MarkdownReportFormatter, TypeScriptMapFormatter,
    };
    pub use crate::adapters::outbound::network::{
        CachingDomainSearch, DuckDuckGoSearch, ReqwestHttpFetcher,
    };
    pub use crate::application::dto::{
        AnalyzeRequest, AnalyzeResponse, BrandOutcome, BrandReport, MapFormat, PipelineConfig,
        QualityEntry, QualityReport, ResolveRequest, ResolveResponse, ResolveStats,
    };
    pub use crate::application::use_cases::{
        AcquireLogoUseCase, AnalyzeLogosUseCase, GenerateMapUseCase, ResolveDomainUseCase,
        ResolveLogosUseCase,
    };
    pub use crate::logo_resolution::domain::{
        Brand, BrandCategory, BrandLogoMap, CacheEntry, CacheExtension, LogoAsset, LogoFormat,
        Slug, SourceCandidate, SourceTier,
    };
    pub use crate::logo_resolution::policies::{LogoQuality, QualityPolicy, ValidationPolicy};
    pub use crate::logo_resolution::services::{CandidateBuilder, GeneratedMap, MapGenerator};
    pub use crate::ports::outbound::{
        BrandListReader, DomainSearch, HttpFetcher, HttpResponse, LogoCache, MapFormatter,
        OutputPresenter, OverrideReader, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
