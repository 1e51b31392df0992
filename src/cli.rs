use clap::{Parser, Subcommand};
use std::path::PathBuf;

use logo_resolver::application::dto::MapFormat;

/// Acquire, validate and cache brand logos, and generate the brand → logo lookup map
#[derive(Parser, Debug)]
#[command(name = "logo-resolver")]
#[command(version)]
#[command(about = "Acquire, validate and cache brand logos", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the cached logos (`{slug}.{ext}`)
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Brand list JSON: names or {name, domain?, category?} objects
    #[arg(long, global = true, value_name = "FILE")]
    pub brands: Option<PathBuf>,

    /// Manual logo overrides JSON (brand name → logo path)
    #[arg(long, global = true, value_name = "FILE")]
    pub logo_overrides: Option<PathBuf>,

    /// Manual domain overrides JSON (brand name → domain or [domains])
    #[arg(long, global = true, value_name = "FILE")]
    pub domain_overrides: Option<PathBuf>,

    /// Where to write the generated map ("-" for stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<String>,

    /// Map format: typescript or json
    #[arg(long, global = true)]
    pub map_format: Option<MapFormat>,

    /// Public URL prefix of the cache directory
    #[arg(long, global = true, value_name = "PREFIX")]
    pub public_prefix: Option<String>,

    /// Public path used for brands without a logo
    #[arg(long, global = true, value_name = "PATH")]
    pub placeholder: Option<String>,

    /// Path to a config file (default: ./logo-resolver.config.yml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail when BRANDFETCH_CLIENT_ID is not set
    #[arg(long, global = true)]
    pub require_api_key: bool,

    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve logos for every brand missing from the cache, then regenerate the map
    Fetch {
        /// Brands processed at once
        #[arg(long)]
        concurrency: Option<usize>,

        /// Pause in milliseconds after each brand that hit the network
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,

        /// Look everything up but write nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// Assess cached logo quality and upgrade low-quality or missing logos
    Analyze {
        /// Only analyze this brand (case-insensitive)
        #[arg(long)]
        brand: Option<String>,

        /// Print a Markdown quality report and do nothing else
        #[arg(long)]
        report: bool,

        /// Upgrade at most this many brands
        #[arg(long)]
        limit: Option<usize>,

        /// Report what would be upgraded without touching the cache
        #[arg(long)]
        dry_run: bool,

        /// Pixel floor for raster logos
        #[arg(long, value_name = "N")]
        threshold: Option<u32>,
    },
    /// Regenerate the lookup map from the cache directory only
    Map,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("logo-resolver").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_fetch_defaults() {
        let args = parse(&["fetch"]);
        assert_eq!(
            args.command,
            Command::Fetch {
                concurrency: None,
                delay_ms: None,
                dry_run: false
            }
        );
        assert!(args.cache_dir.is_none());
        assert!(args.map_format.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_fetch_options() {
        let args = parse(&["fetch", "--concurrency", "8", "--delay-ms", "0", "--dry-run"]);
        assert_eq!(
            args.command,
            Command::Fetch {
                concurrency: Some(8),
                delay_ms: Some(0),
                dry_run: true
            }
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&[
            "map",
            "--cache-dir",
            "public/logos",
            "--map-format",
            "json",
            "-o",
            "-",
        ]);
        assert_eq!(args.command, Command::Map);
        assert_eq!(args.cache_dir, Some(PathBuf::from("public/logos")));
        assert_eq!(args.map_format, Some(MapFormat::Json));
        assert_eq!(args.output.as_deref(), Some("-"));
    }

    #[test]
    fn test_analyze_options() {
        let args = parse(&[
            "analyze",
            "--brand=Brembo",
            "--report",
            "--limit=5",
            "--threshold=512",
        ]);
        assert_eq!(
            args.command,
            Command::Analyze {
                brand: Some("Brembo".to_string()),
                report: true,
                limit: Some(5),
                dry_run: false,
                threshold: Some(512),
            }
        );
    }

    #[test]
    fn test_invalid_map_format_rejected() {
        let result = Args::try_parse_from(["logo-resolver", "map", "--map-format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["logo-resolver"]).is_err());
    }
}
