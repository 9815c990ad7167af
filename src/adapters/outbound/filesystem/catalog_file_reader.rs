use crate::shared::security::{validate_file_size, validate_regular_file, MAX_CATALOG_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves a catalog location (`file://` URL or plain path) to a path
pub fn catalog_file_path(location: &str) -> PathBuf {
    let trimmed = location.trim();
    let path = trimmed
        .strip_prefix("file://")
        .or_else(|| trimmed.strip_prefix("file:"))
        .unwrap_or(trimmed);
    PathBuf::from(path)
}

/// Reads a local YAML catalog with security checks:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
pub fn read_catalog_file(location: &str) -> Result<String> {
    let path = catalog_file_path(location);
    safe_read(&path)
}

fn safe_read(path: &Path) -> Result<String> {
    validate_regular_file(path, "catalog file")?;

    let file_size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read catalog file metadata: {}", e))?
        .len();
    validate_file_size(file_size, path, MAX_CATALOG_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read catalog file {}: {}", path.display(), e))
}
