use crate::logo_resolution::domain::{CacheEntry, CacheExtension, LogoAsset, Slug};
use crate::shared::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// LogoCache port for the directory of downloaded logos
///
/// Entries are named `{slug}.{ext}`. Each brand pipeline touches only its own
/// slug, so implementations need no cross-brand locking.
pub trait LogoCache: Send + Sync {
    /// Returns the best existing extension for a slug, probing in priority order
    fn find_existing(&self, slug: &Slug) -> Option<CacheExtension>;

    /// Writes an asset as `{slug}.{ext}`, replacing a file with the same extension
    ///
    /// # Returns
    /// Path of the written file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn persist(&self, slug: &Slug, asset: &LogoAsset) -> Result<PathBuf>;

    /// Deletes one entry; a missing file is not an error
    fn remove(&self, entry: &CacheEntry) -> Result<()>;

    /// Reads the bytes of one entry
    fn read(&self, entry: &CacheEntry) -> Result<Vec<u8>>;

    /// Lists the file names present in the cache directory
    fn list_file_names(&self) -> Result<BTreeSet<String>>;
}
