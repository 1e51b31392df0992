//! Configuration file support for logo-resolver.
//!
//! Provides YAML-based configuration through `logo-resolver.config.yml`
//! files, including data structures, file loading, and validation. CLI flags
//! always win over values found here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use logo_resolver::application::dto::MapFormat;
use logo_resolver::shared::security::validate_regular_file;
use logo_resolver::shared::Result;

pub const CONFIG_FILENAME: &str = "logo-resolver.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub cache_dir: Option<PathBuf>,
    pub brands: Option<PathBuf>,
    pub logo_overrides: Option<PathBuf>,
    pub domain_overrides: Option<PathBuf>,
    pub output: Option<String>,
    pub map_format: Option<String>,
    pub public_prefix: Option<String>,
    pub placeholder: Option<String>,
    pub concurrency: Option<usize>,
    pub delay_ms: Option<u64>,
    pub min_bytes: Option<usize>,
    pub min_dimension: Option<u32>,
    pub threshold: Option<u32>,
    pub require_api_key: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `map_format`; validated at load time
    pub fn map_format(&self) -> Option<MapFormat> {
        self.map_format.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file")?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.concurrency == Some(0) {
        bail!(
            "Invalid config: concurrency must be at least 1.\n\n\
             💡 Hint: Remove the key to use the default of 4."
        );
    }

    if let Some(prefix) = &config.public_prefix {
        if prefix.trim().trim_matches('/').is_empty() {
            bail!(
                "Invalid config: public_prefix must not be empty.\n\n\
                 💡 Hint: Use the URL path the cache directory is served under (e.g., \"/logos\")."
            );
        }
    }

    if let Some(placeholder) = &config.placeholder {
        if placeholder.trim().is_empty() {
            bail!("Invalid config: placeholder must not be empty.");
        }
    }

    if let Some(format) = &config.map_format {
        if let Err(e) = format.parse::<MapFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
