use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a failed pipeline run
/// from a rejected command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed
    Success = 0,
    /// Application error (catalog, network, file I/O, patching, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for project setup.
///
/// The first five variants are the terminal failures of the generation
/// pipeline; each one ends the current run.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Dependency catalog unavailable: {source_location}\nDetails: {details}\n\n💡 Hint: Check your network connection or the SPRING_BOOT_CONFIG_FILE setting")]
    CatalogUnavailable {
        source_location: String,
        details: String,
    },

    #[error("Unknown dependency: {id}\n\n💡 Hint: Run `springboot-setup list` to see the available dependency ids")]
    UnknownDependency { id: String },

    #[error("Failed to fetch project archive: {url}\nDetails: {details}\n\n💡 Hint: Verify the starter URL and the selected Spring Boot version")]
    ArchiveFetchFailed { url: String, details: String },

    #[error("Failed to materialize project: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory is writable")]
    MaterializationFailed { path: PathBuf, details: String },

    #[error("Failed to patch generated project: {path}\nDetails: {details}")]
    PatchFailed { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid target directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },
}
