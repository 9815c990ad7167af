use crate::shared::Result;
use std::io::Read;
use std::path::{Path, PathBuf};

/// ProjectMaterializer port for turning an archive stream into files
pub trait ProjectMaterializer {
    /// Replaces the build files of `target_directory` with the archive content
    ///
    /// # Arguments
    /// * `target_directory` - Directory receiving the project
    /// * `archive` - Zip archive byte stream
    /// * `project_name` - Used to name the temporary archive file
    ///
    /// # Returns
    /// The target directory
    ///
    /// # Errors
    /// Returns `SetupError::MaterializationFailed` on any I/O failure. Files
    /// unpacked before the failure are left in place.
    fn materialize(
        &self,
        target_directory: &Path,
        archive: &mut dyn Read,
        project_name: &str,
    ) -> Result<PathBuf>;
}
