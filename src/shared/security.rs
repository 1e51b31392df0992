use crate::shared::error::LogoError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an input JSON/YAML file (10 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum size of a downloaded payload (5 MiB)
///
/// Logos above this size are either not logos or not worth caching.
pub const MAX_DOWNLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is missing, a symbolic link, or not a file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| LogoError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(LogoError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_INPUT_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that the cache directory is a real directory, creating it if missing
///
/// # Errors
/// Returns `LogoError::CacheDirectoryError` if the path is a symlink, a
/// regular file, or cannot be created.
pub fn ensure_cache_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| LogoError::CacheDirectoryError {
            path: path.to_path_buf(),
            details: format!("Failed to create directory: {}", e),
        })?;
        return Ok(());
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| LogoError::CacheDirectoryError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(LogoError::SecurityError {
            path: path.to_path_buf(),
            reason: "Cache directory is a symbolic link".to_string(),
            hint: "Point --cache-dir at the real directory".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(LogoError::CacheDirectoryError {
            path: path.to_path_buf(),
            details: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
