mod cli;
mod config;

use cli::{Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use logo_resolver::adapters::outbound::console::StderrProgressReporter;
use logo_resolver::adapters::outbound::filesystem::{FileSystemLogoCache, FileSystemReader};
use logo_resolver::adapters::outbound::network::{
    CachingDomainSearch, DuckDuckGoSearch, ReqwestHttpFetcher,
};
use logo_resolver::application::dto::{
    AnalyzeRequest, MapFormat, PipelineConfig, ResolveRequest,
};
use logo_resolver::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use logo_resolver::application::use_cases::{
    AnalyzeLogosUseCase, GenerateMapUseCase, ResolveLogosUseCase,
};
use logo_resolver::logo_resolution::domain::{Brand, BrandLogoMap};
use logo_resolver::logo_resolution::policies::DEFAULT_QUALITY_THRESHOLD;
use logo_resolver::ports::outbound::{BrandListReader, OverrideReader};
use logo_resolver::shared::error::{ExitCode, LogoError};
use logo_resolver::shared::Result;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_CACHE_DIR: &str = "public/logos";
const DEFAULT_BRANDS_FILE: &str = "data/brands.json";
const BRANDFETCH_ENV: &str = "BRANDFETCH_CLIENT_ID";

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "warn,logo_resolver=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Effective settings after merging CLI flags over the config file
#[derive(Debug)]
struct Settings {
    cache_dir: PathBuf,
    brands: PathBuf,
    brands_explicit: bool,
    logo_overrides: Option<PathBuf>,
    domain_overrides: Option<PathBuf>,
    output: String,
    map_format: MapFormat,
    require_api_key: bool,
    threshold: u32,
    pipeline: PipelineConfig,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let map_format = args
            .map_format
            .or_else(|| config.map_format())
            .unwrap_or_default();

        let mut pipeline = PipelineConfig::default();

        let (concurrency, delay_ms) = match &args.command {
            Command::Fetch {
                concurrency,
                delay_ms,
                ..
            } => (*concurrency, *delay_ms),
            _ => (None, None),
        };
        if let Some(concurrency) = concurrency.or(config.concurrency) {
            if concurrency == 0 {
                return Err(validation_error("--concurrency must be at least 1"));
            }
            pipeline = pipeline.with_concurrency(concurrency);
        }
        if let Some(delay_ms) = delay_ms.or(config.delay_ms) {
            pipeline = pipeline.with_delay(Duration::from_millis(delay_ms));
        }

        if let Some(prefix) = args.public_prefix.clone().or(config.public_prefix) {
            if prefix.trim().trim_matches('/').is_empty() {
                return Err(validation_error("--public-prefix must not be empty"));
            }
            pipeline.public_prefix = prefix;
        }
        if let Some(placeholder) = args.placeholder.clone().or(config.placeholder) {
            if placeholder.trim().is_empty() {
                return Err(validation_error("--placeholder must not be empty"));
            }
            pipeline.placeholder = placeholder;
        }
        if let Some(min_bytes) = config.min_bytes {
            pipeline.min_bytes = min_bytes;
        }
        pipeline.min_dimension = config.min_dimension;

        let threshold = match &args.command {
            Command::Analyze { threshold, .. } => *threshold,
            _ => None,
        }
        .or(config.threshold)
        .unwrap_or(DEFAULT_QUALITY_THRESHOLD);

        let brands_explicit = args.brands.is_some() || config.brands.is_some();
        let output = args
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| default_output(map_format).to_string());

        Ok(Self {
            cache_dir: args
                .cache_dir
                .clone()
                .or(config.cache_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            brands: args
                .brands
                .clone()
                .or(config.brands)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BRANDS_FILE)),
            brands_explicit,
            logo_overrides: args.logo_overrides.clone().or(config.logo_overrides),
            domain_overrides: args.domain_overrides.clone().or(config.domain_overrides),
            output,
            map_format,
            require_api_key: args.require_api_key || config.require_api_key.unwrap_or(false),
            threshold,
            pipeline,
        })
    }
}

fn default_output(format: MapFormat) -> &'static str {
    match format {
        MapFormat::TypeScript => "src/data/brandLogos.ts",
        MapFormat::Json => "src/data/brandLogos.json",
    }
}

fn validation_error(message: &str) -> anyhow::Error {
    LogoError::Validation {
        message: message.to_string(),
    }
    .into()
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return load_config_from_path(path);
    }

    let cwd = std::env::current_dir()?;
    match discover_config(&cwd)? {
        Some(config) => {
            eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Reads the Brandfetch client id; absence is fatal only when required
fn brandfetch_client_id(required: bool) -> Result<Option<String>> {
    let client_id = std::env::var(BRANDFETCH_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());

    if client_id.is_none() && required {
        return Err(LogoError::MissingCredential {
            variable: BRANDFETCH_ENV.to_string(),
            hint: format!(
                "Export {} or drop --require-api-key / require_api_key from the config",
                BRANDFETCH_ENV
            ),
        }
        .into());
    }
    Ok(client_id)
}

fn read_brands(settings: &Settings, required: bool) -> Result<Vec<Brand>> {
    if !required && !settings.brands_explicit && !settings.brands.exists() {
        return Ok(Vec::new());
    }
    FileSystemReader::new().read_brands(&settings.brands)
}

fn load_overrides(settings: &Settings, mut pipeline: PipelineConfig) -> Result<PipelineConfig> {
    let reader = FileSystemReader::new();
    if let Some(path) = &settings.logo_overrides {
        pipeline = pipeline.with_logo_overrides(reader.read_logo_overrides(path)?);
    }
    if let Some(path) = &settings.domain_overrides {
        pipeline = pipeline.with_domain_overrides(reader.read_domain_overrides(path)?);
    }
    Ok(pipeline)
}

fn write_map(map: &BrandLogoMap, settings: &Settings) -> Result<()> {
    eprintln!("{}", FormatterFactory::progress_message(settings.map_format));

    let formatter = FormatterFactory::create(settings.map_format);
    let formatted_output = formatter.format(map)?;

    let presenter = PresenterFactory::create(PresenterType::for_output(&settings.output));
    presenter.present(&formatted_output)
}

fn warn_all(warnings: &[String]) {
    for warning in warnings {
        eprintln!("⚠️  Warning: {}", warning);
    }
}

type WebSearch = CachingDomainSearch<DuckDuckGoSearch<ReqwestHttpFetcher>>;

fn create_search(fetcher: &ReqwestHttpFetcher) -> Result<WebSearch> {
    Ok(CachingDomainSearch::new(DuckDuckGoSearch::new(
        fetcher.clone(),
    )?))
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config)?;

    let needs_network = !matches!(args.command, Command::Map);
    let mut pipeline = load_overrides(&settings, settings.pipeline.clone())?;
    pipeline.brandfetch_client_id = brandfetch_client_id(settings.require_api_key && needs_network)?;

    let cache = FileSystemLogoCache::new(&settings.cache_dir)?;

    match &args.command {
        Command::Fetch { dry_run, .. } => {
            let brands = read_brands(&settings, true)?;
            let fetcher = ReqwestHttpFetcher::new()?;
            let search = create_search(&fetcher)?;

            let use_case = ResolveLogosUseCase::new(
                fetcher,
                search,
                cache,
                StderrProgressReporter::new(),
                pipeline,
            )?;
            let response = use_case
                .execute(ResolveRequest::new(brands, *dry_run))
                .await?;

            if response.dry_run {
                eprintln!("ℹ️  Dry run: map not written");
                return Ok(());
            }
            write_map(&response.map, &settings)?;
        }
        Command::Analyze {
            brand,
            report,
            limit,
            dry_run,
            ..
        } => {
            let brands = read_brands(&settings, true)?;
            let fetcher = ReqwestHttpFetcher::new()?;
            let search = create_search(&fetcher)?;

            let use_case = AnalyzeLogosUseCase::new(
                fetcher,
                search,
                cache,
                StderrProgressReporter::new(),
                pipeline,
            )?;
            let request = AnalyzeRequest::new(brands)
                .with_brand_filter(brand.clone())
                .with_report_only(*report)
                .with_limit(*limit)
                .with_dry_run(*dry_run)
                .with_threshold(settings.threshold);
            let response = use_case.execute(request).await?;

            if *report {
                let formatter = FormatterFactory::create_report_formatter();
                let markdown = formatter.format(&response.report)?;
                PresenterFactory::create(PresenterType::Stdout).present(&markdown)?;
                return Ok(());
            }

            warn_all(&response.map_warnings);
            if let Some(map) = &response.map {
                write_map(map, &settings)?;
            }
        }
        Command::Map => {
            let brands = read_brands(&settings, false)?;
            let use_case = GenerateMapUseCase::new(cache, &pipeline);
            let generated = use_case.execute(&brands)?;

            warn_all(&generated.warnings);
            write_map(&generated.map, &settings)?;
        }
    }

    Ok(())
}

#[cfg(test)]
fn settings_for(args: &[&str], config: ConfigFile) -> Result<Settings> {
    use clap::Parser;
    let args = Args::try_parse_from(std::iter::once("logo-resolver").chain(args.iter().copied()))?;
    Settings::resolve(&args, config)
}
