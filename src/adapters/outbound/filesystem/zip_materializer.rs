use crate::ports::outbound::ProjectMaterializer;
use crate::shared::error::SetupError;
use crate::shared::security::{is_contained_relative_path, validate_file_name};
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Build files the archive replaces
const BUILD_DESCRIPTOR: &str = "pom.xml";
const SOURCE_DIRECTORY: &str = "src";

/// ZipProjectMaterializer adapter unpacking zip archives into a directory
///
/// Sequence, each step a precondition of the next:
/// 1. delete `pom.xml`
/// 2. delete `src/` recursively
/// 3. write the stream to `<project_name>.zip`
/// 4. unpack the archive
/// 5. delete the temporary archive
///
/// Nothing is rolled back: a failure in step 4 leaves the entries unpacked
/// so far, and `src/` is gone once step 2 has run.
pub struct ZipProjectMaterializer;

impl ZipProjectMaterializer {
    pub fn new() -> Self {
        Self
    }

    fn failure(path: &Path, details: impl std::fmt::Display) -> anyhow::Error {
        log::error!("Materialization failed at {}: {}", path.display(), details);
        SetupError::MaterializationFailed {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }

    fn prepare_directory(&self, target_directory: &Path) -> Result<()> {
        fs::create_dir_all(target_directory).map_err(|e| Self::failure(target_directory, e))?;

        let pom = target_directory.join(BUILD_DESCRIPTOR);
        if pom.is_file() {
            fs::remove_file(&pom).map_err(|e| Self::failure(&pom, e))?;
            log::debug!("Removed pre-existing {}", pom.display());
        }

        let src = target_directory.join(SOURCE_DIRECTORY);
        if src.is_dir() {
            fs::remove_dir_all(&src).map_err(|e| Self::failure(&src, e))?;
            log::debug!("Removed pre-existing {}", src.display());
        }

        Ok(())
    }

    fn write_archive(&self, archive_path: &Path, archive: &mut dyn Read) -> Result<u64> {
        let file = File::create(archive_path).map_err(|e| Self::failure(archive_path, e))?;
        let mut writer = BufWriter::new(file);
        let written = io::copy(archive, &mut writer).map_err(|e| Self::failure(archive_path, e))?;
        writer.flush().map_err(|e| Self::failure(archive_path, e))?;
        Ok(written)
    }

    /// Unpacks every entry; returns the number of files written
    fn unpack(&self, archive_path: &Path, target_directory: &Path) -> Result<usize> {
        let file = File::open(archive_path).map_err(|e| Self::failure(archive_path, e))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| Self::failure(archive_path, e))?;

        let mut files = 0;
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| Self::failure(archive_path, e))?;

            let relative = entry
                .enclosed_name()
                .filter(|name| is_contained_relative_path(name))
                .ok_or_else(|| {
                    Self::failure(
                        archive_path,
                        format!("Security: archive entry '{}' escapes the target directory", entry.name()),
                    )
                })?;
            let out_path = target_directory.join(&relative);

            if entry.is_dir() {
                fs::create_dir_all(&out_path).map_err(|e| Self::failure(&out_path, e))?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|e| Self::failure(parent, e))?;
            }
            let mut out = File::create(&out_path).map_err(|e| Self::failure(&out_path, e))?;
            io::copy(&mut entry, &mut out).map_err(|e| Self::failure(&out_path, e))?;

            #[cfg(unix)]
            if let Some(mode) = entry.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                // keeps the Maven wrapper executable
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o777))
                    .map_err(|e| Self::failure(&out_path, e))?;
            }

            files += 1;
        }

        Ok(files)
    }
}

impl Default for ZipProjectMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectMaterializer for ZipProjectMaterializer {
    fn materialize(
        &self,
        target_directory: &Path,
        archive: &mut dyn Read,
        project_name: &str,
    ) -> Result<PathBuf> {
        validate_file_name(project_name, "Project name")
            .map_err(|e| Self::failure(target_directory, e))?;

        self.prepare_directory(target_directory)?;

        let archive_path = target_directory.join(format!("{}.zip", project_name));
        let written = self.write_archive(&archive_path, archive);
        let unpacked = written.and_then(|bytes| {
            log::debug!("Wrote {} bytes to {}", bytes, archive_path.display());
            self.unpack(&archive_path, target_directory)
        });

        let cleanup = if archive_path.exists() {
            fs::remove_file(&archive_path)
        } else {
            Ok(())
        };

        match (unpacked, cleanup) {
            (Ok(files), Ok(())) => {
                log::info!(
                    "Unzipped {} file(s) to folder: {}",
                    files,
                    target_directory.display()
                );
                Ok(target_directory.to_path_buf())
            }
            (Ok(_), Err(e)) => Err(Self::failure(&archive_path, e)),
            (Err(e), cleanup) => {
                if let Err(cleanup_error) = cleanup {
                    log::warn!(
                        "Could not remove temporary archive {}: {}",
                        archive_path.display(),
                        cleanup_error
                    );
                }
                Err(e)
            }
        }
    }
}
