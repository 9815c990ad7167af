use crate::project_generation::domain::MavenCoordinate;
use crate::project_generation::services::ServletInitializerPatch;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ProjectPatcher port for editing a materialized project
///
/// Each operation is independent; none of them rolls back on failure.
pub trait ProjectPatcher {
    /// Sets a key in `src/main/resources/application.properties`, creating
    /// the file if needed
    fn set_application_property(&self, project_dir: &Path, key: &str, value: &str)
        -> Result<PathBuf>;

    /// Creates `src/main/resources/<name>` if missing
    ///
    /// # Returns
    /// The directory path and whether it was created by this call
    fn ensure_resource_directory(&self, project_dir: &Path, name: &str) -> Result<(PathBuf, bool)>;

    /// Applies the servlet initializer patch to the application main class
    ///
    /// # Returns
    /// The patched source file and whether it changed
    fn patch_application_class(
        &self,
        project_dir: &Path,
        patch: &ServletInitializerPatch,
    ) -> Result<(PathBuf, bool)>;

    /// Adds a dependency to the build descriptor unless already declared
    ///
    /// # Returns
    /// Whether the descriptor changed
    fn ensure_dependency(&self, project_dir: &Path, coordinate: &MavenCoordinate) -> Result<bool>;
}
