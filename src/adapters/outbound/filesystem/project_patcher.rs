use crate::ports::outbound::ProjectPatcher;
use crate::project_generation::domain::MavenCoordinate;
use crate::project_generation::services::{PomEditor, PropertiesEditor, ServletInitializerPatch};
use crate::shared::error::SetupError;
use crate::shared::security::validate_file_name;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

const RESOURCES_DIR: &str = "src/main/resources";
const JAVA_SOURCES_DIR: &str = "src/main/java";
const APPLICATION_PROPERTIES: &str = "application.properties";
const POM_FILE: &str = "pom.xml";

/// FileSystemProjectPatcher adapter editing a materialized Maven project
/// in place
pub struct FileSystemProjectPatcher;

impl FileSystemProjectPatcher {
    pub fn new() -> Self {
        Self
    }

    fn failure(path: &Path, details: impl std::fmt::Display) -> anyhow::Error {
        log::error!("Post-processing failed at {}: {}", path.display(), details);
        SetupError::PatchFailed {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }

    fn read(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Self::failure(path, e))
    }

    fn write(path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| Self::failure(path, e))
    }

    /// Finds the first `.java` file under `src/main/java` holding the
    /// `@SpringBootApplication` class, walking directories in name order
    fn find_application_class(project_dir: &Path) -> Result<PathBuf> {
        let root = project_dir.join(JAVA_SOURCES_DIR);
        if !root.is_dir() {
            return Err(Self::failure(&root, "Java source directory not found"));
        }

        let mut pending = vec![root.clone()];
        while let Some(dir) = pending.pop() {
            let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
                .map_err(|e| Self::failure(&dir, e))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .collect();
            entries.sort();

            let mut subdirs = Vec::new();
            for path in entries {
                if path.is_dir() {
                    subdirs.push(path);
                } else if path.extension().is_some_and(|ext| ext == "java") {
                    let source = Self::read(&path)?;
                    if ServletInitializerPatch::is_application_class(&source) {
                        return Ok(path);
                    }
                }
            }
            // Stack order: visit subdirectories alphabetically
            pending.extend(subdirs.into_iter().rev());
        }

        Err(Self::failure(
            &root,
            "No @SpringBootApplication class found",
        ))
    }
}

impl Default for FileSystemProjectPatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectPatcher for FileSystemProjectPatcher {
    fn set_application_property(
        &self,
        project_dir: &Path,
        key: &str,
        value: &str,
    ) -> Result<PathBuf> {
        let resources = project_dir.join(RESOURCES_DIR);
        fs::create_dir_all(&resources).map_err(|e| Self::failure(&resources, e))?;

        let path = resources.join(APPLICATION_PROPERTIES);
        let current = if path.exists() {
            Self::read(&path)?
        } else {
            String::new()
        };

        let updated = PropertiesEditor::set_property(&current, key, value);
        if updated != current {
            Self::write(&path, &updated)?;
            log::debug!("Set {}={} in {}", key, value, path.display());
        }
        Ok(path)
    }

    fn ensure_resource_directory(&self, project_dir: &Path, name: &str) -> Result<(PathBuf, bool)> {
        let resources = project_dir.join(RESOURCES_DIR);
        validate_file_name(name, "Resource directory name")
            .map_err(|e| Self::failure(&resources, e))?;

        let path = resources.join(name);
        if path.is_dir() {
            return Ok((path, false));
        }
        fs::create_dir_all(&path).map_err(|e| Self::failure(&path, e))?;
        log::debug!("Created {}", path.display());
        Ok((path, true))
    }

    fn patch_application_class(
        &self,
        project_dir: &Path,
        patch: &ServletInitializerPatch,
    ) -> Result<(PathBuf, bool)> {
        let path = Self::find_application_class(project_dir)?;
        let source = Self::read(&path)?;

        match patch.apply(&source).map_err(|e| Self::failure(&path, e))? {
            Some(patched) => {
                Self::write(&path, &patched)?;
                log::debug!("Patched application class {}", path.display());
                Ok((path, true))
            }
            None => Ok((path, false)),
        }
    }

    fn ensure_dependency(&self, project_dir: &Path, coordinate: &MavenCoordinate) -> Result<bool> {
        let path = project_dir.join(POM_FILE);
        let pom = Self::read(&path)?;

        match PomEditor::ensure_dependency(&pom, coordinate).map_err(|e| Self::failure(&path, e))? {
            Some(updated) => {
                Self::write(&path, &updated)?;
                log::debug!("Added {} to {}", coordinate, path.display());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
