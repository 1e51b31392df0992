use crate::logo_resolution::domain::{Brand, BrandCategory};
use crate::ports::outbound::{BrandListReader, OverrideReader};
use crate::shared::error::LogoError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One item of the brand list: a bare name or a record
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BrandEntry {
    Name(String),
    Record {
        name: String,
        #[serde(default)]
        domain: Option<String>,
        #[serde(default)]
        category: Option<BrandCategory>,
    },
}

/// Value of the domain override table: one domain or a ranked list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DomainValue {
    Single(String),
    Ranked(Vec<String>),
}

impl DomainValue {
    fn into_primary(self) -> Option<String> {
        match self {
            DomainValue::Single(domain) => Some(domain),
            DomainValue::Ranked(domains) => domains.into_iter().find(|d| !d.trim().is_empty()),
        }
    }
}

/// FileSystemReader adapter for the JSON input files
///
/// Implements both BrandListReader and OverrideReader. Every file passes the
/// shared security checks (regular file, no symlink, size limit) before it
/// is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path, description: &str) -> Result<T> {
        validate_regular_file(path, description)?;

        let content = fs::read_to_string(path).map_err(|e| LogoError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            LogoError::InputParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BrandListReader for FileSystemReader {
    fn read_brands(&self, path: &Path) -> Result<Vec<Brand>> {
        let entries: Vec<BrandEntry> = self.read_json(path, "brand list")?;

        entries
            .into_iter()
            .map(|entry| {
                let brand = match entry {
                    BrandEntry::Name(name) => Brand::new(name)?,
                    BrandEntry::Record {
                        name,
                        domain,
                        category,
                    } => {
                        let mut brand = Brand::new(name)?;
                        if let Some(domain) = domain.filter(|d| !d.trim().is_empty()) {
                            brand = brand.with_domain(domain);
                        }
                        if let Some(category) = category {
                            brand = brand.with_category(category);
                        }
                        brand
                    }
                };
                Ok(brand)
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                LogoError::InputParseError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

impl OverrideReader for FileSystemReader {
    fn read_logo_overrides(&self, path: &Path) -> Result<BTreeMap<String, String>> {
        self.read_json(path, "logo overrides")
    }

    fn read_domain_overrides(&self, path: &Path) -> Result<BTreeMap<String, String>> {
        let table: BTreeMap<String, DomainValue> = self.read_json(path, "domain overrides")?;
        Ok(table
            .into_iter()
            .filter_map(|(name, value)| value.into_primary().map(|domain| (name, domain)))
            .collect())
    }
}
