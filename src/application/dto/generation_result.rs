use std::path::PathBuf;

/// GenerationResult - Outcome of a completed project generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub success: bool,
    /// User-facing summary, e.g. `Created new Spring Boot project in directory: demo`
    pub message: String,
    pub target_directory: PathBuf,
}

impl GenerationResult {
    pub fn new(success: bool, message: String, target_directory: PathBuf) -> Self {
        Self {
            success,
            message,
            target_directory,
        }
    }

    /// A successful run for the named project
    pub fn created(project_name: &str, target_directory: PathBuf) -> Self {
        Self::new(
            true,
            format!(
                "Created new Spring Boot project in directory: {}",
                project_name
            ),
            target_directory,
        )
    }
}
