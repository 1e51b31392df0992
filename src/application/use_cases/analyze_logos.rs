use super::{AcquireLogoUseCase, ResolveDomainUseCase};
use crate::application::dto::{
    AnalyzeRequest, AnalyzeResponse, BrandOutcome, BrandReport, PipelineConfig, QualityEntry,
    QualityReport,
};
use crate::logo_resolution::domain::{Brand, CacheEntry, CacheExtension, Slug, SourceTier};
use crate::logo_resolution::policies::{QualityPolicy, ValidationPolicy};
use crate::logo_resolution::services::{CandidateBuilder, MapGenerator};
use crate::ports::outbound::{DomainSearch, HttpFetcher, LogoCache, ProgressReporter};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// AnalyzeLogosUseCase - Finds low-quality cached logos and upgrades them
///
/// Assessment is local only. Upgrades reuse the acquisition sources minus
/// the favicon tier, with the quality threshold enforced as a pixel floor,
/// and replace the old entry (every other file for the slug deleted, then
/// the new one written).
/// Brands with a manual logo override are left alone.
///
/// # Type Parameters
/// * `F` - HttpFetcher implementation
/// * `S` - DomainSearch implementation
/// * `C` - LogoCache implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeLogosUseCase<F: HttpFetcher, S: DomainSearch, C, PR> {
    acquirer: AcquireLogoUseCase<F>,
    domain_resolver: ResolveDomainUseCase<S>,
    cache: C,
    progress_reporter: PR,
    candidate_builder: CandidateBuilder,
    map_generator: MapGenerator,
    config: PipelineConfig,
}

/// A brand whose logo should be replaced
struct UpgradeTarget<'a> {
    brand: &'a Brand,
    slug: Slug,
    current: Option<CacheEntry>,
}

impl<F, S, C, PR> AnalyzeLogosUseCase<F, S, C, PR>
where
    F: HttpFetcher,
    S: DomainSearch,
    C: LogoCache,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeLogosUseCase with injected dependencies
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
                .with_brandfetch_client_id(config.brandfetch_client_id.clone())
                .without_tier(SourceTier::Favicon),
            map_generator: MapGenerator::new(&config.public_prefix, &config.placeholder),
            config,
        })
    }

    /// Executes the analyzer
    ///
    /// # Errors
    /// Returns an error if the brand filter matches no brand or the cache
    /// cannot be listed for map regeneration
    pub async fn execute(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        let brands = self.select_brands(&request)?;
        let quality = QualityPolicy::new(request.threshold);

        self.progress_reporter.report(&format!(
            "🔎 Assessing {} cached logo(s) (threshold {}px)...",
            brands.len(),
            request.threshold
        ));
        let (entries, targets) = self.assess(&brands, &quality);
        let report = QualityReport::new(entries, request.threshold);
        self.progress_reporter.report(&format!(
            "   - good: {}, low quality: {}, missing: {}",
            report.good_count(),
            report.low_quality_count(),
            report.missing_count()
        ));

        if request.report_only {
            return Ok(AnalyzeResponse {
                report,
                upgrades: Vec::new(),
                map: None,
                map_warnings: Vec::new(),
                dry_run: request.dry_run,
            });
        }

        let targets: Vec<UpgradeTarget> = match request.limit {
            Some(limit) => targets.into_iter().take(limit).collect(),
            None => targets,
        };
        let upgrades = self.upgrade_all(&targets, &request).await;

        let (map, map_warnings) = if request.dry_run {
            (None, Vec::new())
        } else {
            let file_names = self.cache.list_file_names()?;
            let generated =
                self.map_generator
                    .generate(&request.brands, &file_names, &self.config.logo_overrides);
            (Some(generated.map), generated.warnings)
        };

        let upgraded = upgrades
            .iter()
            .filter(|r| matches!(r.outcome, BrandOutcome::Upgraded { .. }))
            .count();
        self.progress_reporter.report_completion(&format!(
            "✅ Upgrade complete: {} of {} logo(s) {}",
            upgraded,
            upgrades.len(),
            if request.dry_run { "would be upgraded (dry run)" } else { "upgraded" }
        ));

        Ok(AnalyzeResponse {
            report,
            upgrades,
            map,
            map_warnings,
            dry_run: request.dry_run,
        })
    }

    fn select_brands<'a>(&self, request: &'a AnalyzeRequest) -> Result<Vec<&'a Brand>> {
        let Some(filter) = &request.brand_filter else {
            return Ok(request.brands.iter().collect());
        };

        let wanted = filter.trim().to_lowercase();
        let selected: Vec<&Brand> = request
            .brands
            .iter()
            .filter(|b| b.name().to_lowercase() == wanted)
            .collect();
        if selected.is_empty() {
            anyhow::bail!("Brand '{}' is not in the brand list", filter.trim());
        }
        Ok(selected)
    }

    fn assess<'a>(
        &self,
        brands: &[&'a Brand],
        quality: &QualityPolicy,
    ) -> (Vec<QualityEntry>, Vec<UpgradeTarget<'a>>) {
        let mut entries = Vec::new();
        let mut targets = Vec::new();

        for &brand in brands {
            if self.config.logo_overrides.contains_key(brand.name()) {
                continue;
            }
            let Some(slug) = Slug::from_name(brand.name()) else {
                continue;
            };

            let current = self
                .cache
                .find_existing(&slug)
                .map(|ext| CacheEntry::new(slug.clone(), ext));
            let assessed = current.as_ref().map(|entry| match self.cache.read(entry) {
                Ok(bytes) => quality.assess(entry.extension(), &bytes),
                Err(e) => {
                    warn!(file = %entry.file_name(), error = %e, "could not read cached logo");
                    crate::logo_resolution::policies::LogoQuality::Unreadable
                }
            });

            let entry = QualityEntry {
                brand: brand.name().to_string(),
                file_name: current.as_ref().map(CacheEntry::file_name),
                quality: assessed,
            };
            if entry.needs_upgrade() {
                targets.push(UpgradeTarget {
                    brand,
                    slug,
                    current,
                });
            }
            entries.push(entry);
        }

        (entries, targets)
    }

    async fn upgrade_all(
        &self,
        targets: &[UpgradeTarget<'_>],
        request: &AnalyzeRequest,
    ) -> Vec<BrandReport> {
        if targets.is_empty() {
            return Vec::new();
        }
        self.progress_reporter.report(&format!(
            "⬆️  Looking for better logos for {} brand(s)...",
            targets.len()
        ));

        let policy = ValidationPolicy::new(self.config.min_bytes, Some(request.threshold));
        let total = targets.len();
        let mut finished = 0;

        let mut reports = Vec::with_capacity(total);
        let mut results = stream::iter(targets)
            .map(|target| self.upgrade(target, &policy, request.dry_run))
            .buffered(self.config.concurrency.max(1));
        while let Some(report) = results.next().await {
            finished += 1;
            self.progress_reporter
                .report_progress(finished, total, Some(report.brand.as_str()));
            match &report.outcome {
                BrandOutcome::Upgraded {
                    provider,
                    file_name,
                    replaced,
                } => self.progress_reporter.report(&format!(
                    "✅ {}: {} → {} (was {})",
                    report.brand,
                    provider,
                    file_name,
                    replaced.as_deref().unwrap_or("missing")
                )),
                BrandOutcome::Failed { reason } => self
                    .progress_reporter
                    .report_error(&format!("❌ {}: {}", report.brand, reason)),
                _ => {}
            }
            reports.push(report);
        }
        reports
    }

    async fn upgrade(
        &self,
        target: &UpgradeTarget<'_>,
        policy: &ValidationPolicy,
        dry_run: bool,
    ) -> BrandReport {
        let outcome = self.find_upgrade(target, policy, dry_run).await;
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
        BrandReport::new(target.brand.name(), outcome)
    }

    async fn find_upgrade(
        &self,
        target: &UpgradeTarget<'_>,
        policy: &ValidationPolicy,
        dry_run: bool,
    ) -> BrandOutcome {
        let Some(domain) = self.domain_resolver.resolve(target.brand).await else {
            return BrandOutcome::Failed {
                reason: "no domain found".to_string(),
            };
        };

        let candidates = self
            .candidate_builder
            .build(target.brand.name(), &target.slug, &domain);
        let Some(asset) = self.acquirer.acquire(&candidates, policy).await else {
            return BrandOutcome::Failed {
                reason: "no better logo found".to_string(),
            };
        };

        let file_name = CacheEntry::new(target.slug.clone(), asset.format().extension()).file_name();
        let replaced = target.current.as_ref().map(CacheEntry::file_name);
        if dry_run {
            return BrandOutcome::Upgraded {
                provider: asset.provider().to_string(),
                file_name,
                replaced,
            };
        }

        // Every other extension for the slug goes, so the new file is the
        // one the probe and the map pick.
        let new_extension = asset.format().extension();
        for extension in CacheExtension::PRIORITY {
            if extension == new_extension {
                continue;
            }
            let stale = CacheEntry::new(target.slug.clone(), extension);
            if let Err(e) = self.cache.remove(&stale) {
                return BrandOutcome::Failed {
                    reason: format!("could not remove {}: {}", stale.file_name(), e),
                };
            }
        }
        if let Some(current) = &target.current {
            debug!(file = %current.file_name(), "removed low-quality logo");
        }

        match self.cache.persist(&target.slug, &asset) {
            Ok(_) => BrandOutcome::Upgraded {
                provider: asset.provider().to_string(),
                file_name,
                replaced,
            },
            Err(e) => BrandOutcome::Failed {
                reason: format!("could not write {}: {}", file_name, e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo_resolution::domain::LogoAsset;
    use crate::logo_resolution::policies::LogoQuality;
    use crate::ports::outbound::HttpResponse;
    use async_trait::async_trait;
    use std::collections::{BTreeMap, BTreeSet, HashMap};
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MockFetcher {
        routes: HashMap<String, Vec<u8>>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HttpFetcher for MockFetcher {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(match self.routes.get(url) {
                Some(body) => HttpResponse::new(200, body.clone(), url),
                None => HttpResponse::new(404, Vec::new(), url),
            })
        }
    }

    struct NoSearch;

    #[async_trait]
    impl DomainSearch for NoSearch {
        async fn search_domain(&self, _brand_name: &str) -> Result<Option<String>> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct InMemoryCache {
        files: Mutex<BTreeMap<String, Vec<u8>>>,
    }

    impl LogoCache for InMemoryCache {
        fn find_existing(&self, slug: &Slug) -> Option<CacheExtension> {
            let files = self.files.lock().unwrap();
            CacheExtension::PRIORITY
                .into_iter()
                .find(|ext| files.contains_key(&format!("{}.{}", slug, ext)))
        }

        fn persist(&self, slug: &Slug, asset: &LogoAsset) -> Result<PathBuf> {
            let name = format!("{}.{}", slug, asset.format().extension());
            self.files
                .lock()
                .unwrap()
                .insert(name.clone(), asset.bytes().to_vec());
            Ok(PathBuf::from(name))
        }

        fn remove(&self, entry: &CacheEntry) -> Result<()> {
            self.files.lock().unwrap().remove(&entry.file_name());
            Ok(())
        }

        fn read(&self, entry: &CacheEntry) -> Result<Vec<u8>> {
            self.files
                .lock()
                .unwrap()
                .get(&entry.file_name())
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("missing"))
        }

        fn list_file_names(&self) -> Result<BTreeSet<String>> {
            Ok(self.files.lock().unwrap().keys().cloned().collect())
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn encoded_png(size: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_fn(size, size, |x, y| {
            image::Rgba([(x % 251) as u8, (y % 241) as u8, ((x * y) % 239) as u8, 255])
        });
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn encoded_jpeg(size: u32) -> Vec<u8> {
        let image = image::RgbImage::from_fn(size, size, |x, y| {
            image::Rgb([(x % 251) as u8, (y % 241) as u8, ((x * y) % 239) as u8])
        });
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::Jpeg).unwrap();
        out.into_inner()
    }

    fn encoded_webp(size: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_fn(size, size, |x, y| {
            image::Rgba([(x * 3 % 256) as u8, (y * 5 % 256) as u8, ((x ^ y) % 256) as u8, 255])
        });
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, image::ImageFormat::WebP).unwrap();
        out.into_inner()
    }

    fn ico() -> Vec<u8> {
        let mut bytes = vec![0x00, 0x00, 0x01, 0x00];
        bytes.resize(1200, 0);
        bytes
    }

    fn svg() -> Vec<u8> {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\">{}</svg>",
            "<rect width=\"1\" height=\"1\"/>".repeat(30)
        )
        .into_bytes()
    }

    type TestUseCase = AnalyzeLogosUseCase<MockFetcher, NoSearch, InMemoryCache, SilentReporter>;

    fn setup(routes: &[(&str, Vec<u8>)], files: &[(&str, Vec<u8>)]) -> TestUseCase {
        let fetcher = MockFetcher {
            routes: routes
                .iter()
                .map(|(u, b)| (u.to_string(), b.clone()))
                .collect(),
            ..Default::default()
        };
        let cache = InMemoryCache::default();
        for (name, bytes) in files {
            cache
                .files
                .lock()
                .unwrap()
                .insert(name.to_string(), bytes.clone());
        }
        AnalyzeLogosUseCase::new(
            fetcher,
            NoSearch,
            cache,
            SilentReporter,
            PipelineConfig::default().with_delay(Duration::ZERO),
        )
        .unwrap()
    }

    fn brands(names: &[&str]) -> Vec<Brand> {
        names
            .iter()
            .map(|n| Brand::new(n.to_string()).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_report_only_makes_no_request() {
        let use_case = setup(
            &[],
            &[("brembo.svg", svg()), ("kw.ico", ico()), ("rizoma.png", encoded_png(32))],
        );
        let request = AnalyzeRequest::new(brands(&["Brembo", "KW", "Rizoma", "Ohlins"]))
            .with_report_only(true);

        let response = use_case.execute(request).await.unwrap();

        let qualities: Vec<Option<LogoQuality>> =
            response.report.entries.iter().map(|e| e.quality).collect();
        assert_eq!(qualities[0], Some(LogoQuality::Vector));
        assert_eq!(qualities[1], Some(LogoQuality::FaviconFormat));
        assert!(matches!(
            qualities[2],
            Some(LogoQuality::LowResolution { width: 32, .. })
        ));
        assert_eq!(qualities[3], None);
        assert!(response.upgrades.is_empty());
        assert!(response.map.is_none());
        assert!(use_case.acquirer.fetcher().requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upgrade_replaces_favicon() {
        let use_case = setup(
            &[("https://cdn.worldvectorlogo.com/logos/kw.svg", svg())],
            &[("kw.ico", ico())],
        );

        let response = use_case
            .execute(AnalyzeRequest::new(brands(&["KW"])))
            .await
            .unwrap();

        assert_eq!(
            response.upgrades[0].outcome,
            BrandOutcome::Upgraded {
                provider: "worldvectorlogo".to_string(),
                file_name: "kw.svg".to_string(),
                replaced: Some("kw.ico".to_string()),
            }
        );
        let names = use_case.cache.list_file_names().unwrap();
        assert!(names.contains("kw.svg"));
        assert!(!names.contains("kw.ico"));
        assert_eq!(response.map.unwrap().get_brand_logo("KW"), "/logos/kw.svg");
    }

    #[tokio::test]
    async fn test_upgrade_clears_every_other_format() {
        let use_case = setup(
            &[(
                "https://logo.clearbit.com/kwsuspensions.com?size=512",
                encoded_jpeg(512),
            )],
            &[("kw.webp", encoded_webp(64)), ("kw.png", encoded_png(64))],
        );

        let response = use_case
            .execute(AnalyzeRequest::new(brands(&["KW"])))
            .await
            .unwrap();

        assert_eq!(
            response.upgrades[0].outcome,
            BrandOutcome::Upgraded {
                provider: "clearbit".to_string(),
                file_name: "kw.jpg".to_string(),
                replaced: Some("kw.webp".to_string()),
            }
        );
        let names: Vec<String> = use_case.cache.list_file_names().unwrap().into_iter().collect();
        assert_eq!(names, vec!["kw.jpg".to_string()]);
        assert_eq!(response.map.unwrap().get_brand_logo("KW"), "/logos/kw.jpg");
    }

    #[tokio::test]
    async fn test_upgrade_skips_favicon_sources_and_small_rasters() {
        let use_case = setup(
            &[
                ("https://logo.clearbit.com/kwsuspensions.com?size=512", encoded_png(64)),
                ("https://kwsuspensions.com/favicon.ico", ico()),
            ],
            &[("kw.ico", ico())],
        );

        let response = use_case
            .execute(AnalyzeRequest::new(brands(&["KW"])))
            .await
            .unwrap();

        assert!(response.upgrades[0].outcome.is_failure());
        let requested = use_case.acquirer.fetcher().requested.lock().unwrap();
        assert!(requested.iter().all(|u| !u.ends_with("favicon.ico")));
        assert!(use_case.cache.list_file_names().unwrap().contains("kw.ico"));
    }

    #[tokio::test]
    async fn test_dry_run_keeps_cache() {
        let use_case = setup(
            &[("https://cdn.worldvectorlogo.com/logos/kw.svg", svg())],
            &[("kw.ico", ico())],
        );

        let response = use_case
            .execute(AnalyzeRequest::new(brands(&["KW"])).with_dry_run(true))
            .await
            .unwrap();

        assert!(matches!(
            response.upgrades[0].outcome,
            BrandOutcome::Upgraded { .. }
        ));
        assert!(response.map.is_none());
        let names = use_case.cache.list_file_names().unwrap();
        assert!(names.contains("kw.ico"));
        assert!(!names.contains("kw.svg"));
    }

    #[tokio::test]
    async fn test_brand_filter_and_limit() {
        let use_case = setup(&[], &[]);
        let request = AnalyzeRequest::new(brands(&["KW", "Brembo"]))
            .with_brand_filter(Some("kw".to_string()))
            .with_report_only(true);
        let response = use_case.execute(request).await.unwrap();
        assert_eq!(response.report.entries.len(), 1);
        assert_eq!(response.report.entries[0].brand, "KW");

        let missing = AnalyzeRequest::new(brands(&["KW"])).with_brand_filter(Some("Nope".to_string()));
        assert!(use_case.execute(missing).await.is_err());

        let limited = AnalyzeRequest::new(brands(&["Nonexistent A", "Nonexistent B"])).with_limit(Some(1));
        let response = use_case.execute(limited).await.unwrap();
        assert_eq!(response.upgrades.len(), 1);
    }
}
