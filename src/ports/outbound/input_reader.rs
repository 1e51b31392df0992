use crate::logo_resolution::domain::Brand;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// BrandListReader port for loading the brands to process
pub trait BrandListReader {
    /// Reads the brand list
    ///
    /// Accepts an array whose items are either plain names or
    /// `{ "name", "domain"?, "category"? }` objects.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the security checks
    /// - The content is not valid JSON of the expected shape
    /// - A brand name is invalid
    fn read_brands(&self, path: &Path) -> Result<Vec<Brand>>;
}

/// OverrideReader port for the manually curated tables
pub trait OverrideReader {
    /// Reads the brand name → logo path fragment table
    fn read_logo_overrides(&self, path: &Path) -> Result<BTreeMap<String, String>>;

    /// Reads the brand name → domain table
    ///
    /// A brand may list several domains; the first one wins.
    fn read_domain_overrides(&self, path: &Path) -> Result<BTreeMap<String, String>>;
}
