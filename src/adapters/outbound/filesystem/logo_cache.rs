use crate::logo_resolution::domain::{CacheEntry, CacheExtension, LogoAsset, Slug};
use crate::ports::outbound::LogoCache;
use crate::shared::error::LogoError;
use crate::shared::security::ensure_cache_directory;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// FileSystemLogoCache adapter backed by a flat directory of `{slug}.{ext}` files
pub struct FileSystemLogoCache {
    directory: PathBuf,
}

impl FileSystemLogoCache {
    /// Opens the cache directory, creating it when missing
    ///
    /// # Errors
    /// Returns `LogoError::CacheDirectoryError` or `LogoError::SecurityError`
    /// when the path cannot serve as a cache directory.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        ensure_cache_directory(&directory)?;
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_of(&self, entry: &CacheEntry) -> PathBuf {
        self.directory.join(entry.file_name())
    }

    fn cache_error(&self, details: String) -> anyhow::Error {
        LogoError::CacheDirectoryError {
            path: self.directory.clone(),
            details,
        }
        .into()
    }
}

impl LogoCache for FileSystemLogoCache {
    fn find_existing(&self, slug: &Slug) -> Option<CacheExtension> {
        CacheExtension::PRIORITY.into_iter().find(|extension| {
            let path = self.path_of(&CacheEntry::new(slug.clone(), *extension));
            fs::symlink_metadata(&path)
                .map(|m| m.is_file())
                .unwrap_or(false)
        })
    }

    fn persist(&self, slug: &Slug, asset: &LogoAsset) -> Result<PathBuf> {
        let entry = CacheEntry::new(slug.clone(), asset.format().extension());
        let target = self.path_of(&entry);

        let mut temp = NamedTempFile::new_in(&self.directory)
            .map_err(|e| self.cache_error(format!("Failed to create temporary file: {}", e)))?;
        temp.write_all(asset.bytes()).map_err(|e| LogoError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;
        temp.persist(&target).map_err(|e| LogoError::FileWriteError {
            path: target.clone(),
            details: e.error.to_string(),
        })?;

        debug!(file = %entry.file_name(), bytes = asset.len(), "logo cached");
        Ok(target)
    }

    fn remove(&self, entry: &CacheEntry) -> Result<()> {
        let path = self.path_of(entry);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LogoError::FileWriteError {
                path,
                details: format!("Failed to remove: {}", e),
            }
            .into()),
        }
    }

    fn read(&self, entry: &CacheEntry) -> Result<Vec<u8>> {
        let path = self.path_of(entry);
        fs::read(&path).map_err(|e| {
            LogoError::FileReadError {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn list_file_names(&self) -> Result<BTreeSet<String>> {
        let entries = fs::read_dir(&self.directory)
            .map_err(|e| self.cache_error(format!("Failed to list directory: {}", e)))?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.cache_error(e.to_string()))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if let (true, Some(name)) = (is_file, entry.file_name().to_str()) {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }
}
