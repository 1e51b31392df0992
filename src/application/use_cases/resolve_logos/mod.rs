use super::{AcquireLogoUseCase, ResolveDomainUseCase};
use crate::application::dto::{
    BrandOutcome, BrandReport, PipelineConfig, ResolveRequest, ResolveResponse,
};
use crate::logo_resolution::domain::{Brand, CacheEntry, Slug};
use crate::logo_resolution::policies::ValidationPolicy;
use crate::logo_resolution::services::{CandidateBuilder, GeneratedMap, MapGenerator};
use crate::ports::outbound::{DomainSearch, HttpFetcher, LogoCache, ProgressReporter};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::cell::Cell;
use tracing::{debug, warn};

/// ResolveLogosUseCase - The logo acquisition pipeline
///
/// Per brand: slug → manual logo override → cache probe → domain → candidate
/// list → first valid payload → cache file. Brands run under bounded
/// concurrency with results kept in input order; the lookup map is
/// regenerated once, after every brand has finished.
///
/// # Type Parameters
/// * `F` - HttpFetcher implementation
/// * `S` - DomainSearch implementation
/// * `C` - LogoCache implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveLogosUseCase<F: HttpFetcher, S: DomainSearch, C, PR> {
    acquirer: AcquireLogoUseCase<F>,
    domain_resolver: ResolveDomainUseCase<S>,
    cache: C,
    progress_reporter: PR,
    candidate_builder: CandidateBuilder,
    validation: ValidationPolicy,
    map_generator: MapGenerator,
    config: PipelineConfig,
}

impl<F, S, C, PR> ResolveLogosUseCase<F, S, C, PR>
where
    F: HttpFetcher,
    S: DomainSearch,
    C: LogoCache,
    PR: ProgressReporter,
{
    /// Creates a new ResolveLogosUseCase with injected dependencies
    pub fn new(
        fetcher: F,
        search: S,
        cache: C,
        progress_reporter: PR,
        config: PipelineConfig,
    ) -> Result<Self> {
        Ok(Self {
            acquirer: AcquireLogoUseCase::new(fetcher)?,
            domain_resolver: ResolveDomainUseCase::new(search, config.domain_overrides.clone()),
            cache,
            progress_reporter,
            candidate_builder: CandidateBuilder::new()
                .with_brandfetch_client_id(config.brandfetch_client_id.clone()),
            validation: ValidationPolicy::new(config.min_bytes, config.min_dimension),
            map_generator: MapGenerator::new(&config.public_prefix, &config.placeholder),
            config,
        })
    }

    /// Executes the pipeline
    ///
    /// Per-brand failures are reported in the response, never returned as
    /// errors. Errors come only from listing the cache for the map.
    pub async fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let total = request.brands.len();
        self.progress_reporter.report(&format!(
            "🔍 Resolving logos for {} brand(s) (concurrency {}){}",
            total,
            self.config.concurrency,
            if request.dry_run { " [dry run]" } else { "" }
        ));

        let finished = Cell::new(0usize);
        let reports: Vec<BrandReport> = stream::iter(request.brands.iter())
            .map(|brand| self.process_brand_with_delay(brand, request.dry_run))
            .buffered(self.config.concurrency.max(1))
            .inspect(|report| {
                finished.set(finished.get() + 1);
                self.report_outcome(report, finished.get(), total);
            })
            .collect()
            .await;

        let generated = self.regenerate_map(&request.brands)?;
        for warning in &generated.warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }

        let response = ResolveResponse::new(
            reports,
            generated.map,
            generated.warnings,
            request.dry_run,
        );
        self.report_summary(&response);
        Ok(response)
    }

    /// Rebuilds the lookup map from the current cache contents
    fn regenerate_map(&self, brands: &[Brand]) -> Result<GeneratedMap> {
        let file_names = self.cache.list_file_names()?;
        Ok(self
            .map_generator
            .generate(brands, &file_names, &self.config.logo_overrides))
    }

    async fn process_brand_with_delay(&self, brand: &Brand, dry_run: bool) -> BrandReport {
        let report = self.process_brand(brand, dry_run).await;
        let touched_network = matches!(
            report.outcome,
            BrandOutcome::Downloaded { .. } | BrandOutcome::Failed { .. }
        );
        if touched_network && !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
        report
    }

    async fn process_brand(&self, brand: &Brand, dry_run: bool) -> BrandReport {
        let outcome = self.resolve_outcome(brand, dry_run).await;
        BrandReport::new(brand.name(), outcome)
    }

    async fn resolve_outcome(&self, brand: &Brand, dry_run: bool) -> BrandOutcome {
        let Some(slug) = Slug::from_name(brand.name()) else {
            return BrandOutcome::Failed {
                reason: "name has no characters usable in a file name".to_string(),
            };
        };

        if let Some(fragment) = self.config.logo_overrides.get(brand.name()) {
            return BrandOutcome::Overridden {
                path: self.map_generator.normalize_override_path(fragment),
            };
        }

        if let Some(extension) = self.cache.find_existing(&slug) {
            return BrandOutcome::Cached {
                file_name: CacheEntry::new(slug, extension).file_name(),
            };
        }

        let Some(domain) = self.domain_resolver.resolve(brand).await else {
            return BrandOutcome::Failed {
                reason: "no domain found".to_string(),
            };
        };

        let candidates = self.candidate_builder.build(brand.name(), &slug, &domain);
        debug!(
            brand = brand.name(),
            %domain,
            candidates = candidates.len(),
            "trying logo sources"
        );

        let Some(asset) = self.acquirer.acquire(&candidates, &self.validation).await else {
            return BrandOutcome::Failed {
                reason: format!("no valid logo from {} source(s) for {}", candidates.len(), domain),
            };
        };

        let file_name = CacheEntry::new(slug.clone(), asset.format().extension()).file_name();
        if dry_run {
            return BrandOutcome::Downloaded {
                provider: asset.provider().to_string(),
                file_name,
            };
        }

        match self.cache.persist(&slug, &asset) {
            Ok(_) => BrandOutcome::Downloaded {
                provider: asset.provider().to_string(),
                file_name,
            },
            Err(e) => {
                warn!(brand = brand.name(), error = %e, "could not write logo");
                BrandOutcome::Failed {
                    reason: format!("could not write {}: {}", file_name, e),
                }
            }
        }
    }

    fn report_outcome(&self, report: &BrandReport, current: usize, total: usize) {
        let line = match &report.outcome {
            BrandOutcome::Cached { file_name } => format!("📦 {}: cached ({})", report.brand, file_name),
            BrandOutcome::Overridden { path } => format!("📌 {}: manual override ({})", report.brand, path),
            BrandOutcome::Downloaded {
                provider,
                file_name,
            } => format!("✅ {}: {} → {}", report.brand, provider, file_name),
            BrandOutcome::Upgraded {
                provider,
                file_name,
                ..
            } => format!("⬆️  {}: {} → {}", report.brand, provider, file_name),
            BrandOutcome::Failed { reason } => format!("❌ {}: {}", report.brand, reason),
        };
        self.progress_reporter
            .report_progress(current, total, Some(report.brand.as_str()));
        self.progress_reporter.report(&line);
    }

    fn report_summary(&self, response: &ResolveResponse) {
        let stats = response.stats();
        self.progress_reporter.report_completion(&format!(
            "✅ Logo resolution complete: {} downloaded, {} cached, {} overridden, {} failed{}",
            stats.downloaded,
            stats.cached,
            stats.overridden,
            stats.failed,
            if response.dry_run { " (dry run, nothing written)" } else { "" }
        ));

        let failed = response.failed_brands();
        if !failed.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} brand(s) need a manual logo: {}",
                failed.len(),
                failed.join(", ")
            ));
        }
    }
}
