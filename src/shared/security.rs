use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Maximum size of a catalog file read from disk (10 MB)
pub const MAX_CATALOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "catalog file") for error messages
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
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

/// Validates a single file name component (no separators, no parent references)
///
/// Used for names that end up joined onto the target directory, such as
/// the temporary archive name.
pub fn validate_file_name(name: &str, description: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("{} must not be empty", description);
    }

    if name.contains('/') || name.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if name == "." || name == ".." {
        anyhow::bail!("Security: {} must not be '.' or '..'", description);
    }

    Ok(())
}

/// Returns true when a relative path stays inside the directory it is joined onto
pub fn is_contained_relative_path(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
