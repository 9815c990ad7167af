use crate::project_generation::domain::{Selection, StarterQuery};
use crate::shared::error::SetupError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_GROUP_ID: &str = "com.example";
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0-SNAPSHOT";
/// Port the generated project listens on without an override
pub const DEFAULT_PORT: u16 = 8080;

/// GenerationRequest - Internal request DTO for the project generation use case
///
/// Built through [`GenerationRequestBuilder`], which validates every field;
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    target_directory: PathBuf,
    spring_boot_version: String,
    selections: Vec<Selection>,
    group_id: String,
    artifact_id: String,
    version: String,
    package_name: String,
    port: Option<u16>,
    create_static_content: bool,
}

impl GenerationRequest {
    pub fn builder(
        target_directory: impl Into<PathBuf>,
        spring_boot_version: impl Into<String>,
    ) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(target_directory, spring_boot_version)
    }

    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    pub fn spring_boot_version(&self) -> &str {
        &self.spring_boot_version
    }

    /// Selections in the order given, duplicates removed
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn create_static_content(&self) -> bool {
        self.create_static_content
    }

    /// A port that differs from the service default and must be written
    /// to the project configuration
    pub fn port_override(&self) -> Option<u16> {
        self.port.filter(|port| *port != DEFAULT_PORT)
    }

    /// Name shown to the user: the target directory's last component
    pub fn project_name(&self) -> String {
        self.target_directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.artifact_id.clone())
    }

    /// Parameters for the `starter.zip` request
    pub fn to_starter_query(&self, joined_dependencies: &str) -> StarterQuery {
        StarterQuery {
            boot_version: self.spring_boot_version.clone(),
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
            package_name: self.package_name.clone(),
            dependencies: joined_dependencies.to_string(),
        }
    }
}

/// Builder for [`GenerationRequest`]
///
/// `group_id` defaults to `com.example`, `artifact_id` to the target
/// directory name, `version` to `1.0.0-SNAPSHOT` and `package_name` to the
/// group id.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    target_directory: PathBuf,
    spring_boot_version: String,
    selections: Vec<Selection>,
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    package_name: Option<String>,
    port: Option<u16>,
    create_static_content: bool,
}

impl GenerationRequestBuilder {
    pub fn new(
        target_directory: impl Into<PathBuf>,
        spring_boot_version: impl Into<String>,
    ) -> Self {
        Self {
            target_directory: target_directory.into(),
            spring_boot_version: spring_boot_version.into(),
            selections: Vec::new(),
            group_id: None,
            artifact_id: None,
            version: None,
            package_name: None,
            port: None,
            create_static_content: false,
        }
    }

    pub fn selections(mut self, selections: impl IntoIterator<Item = Selection>) -> Self {
        self.selections.extend(selections);
        self
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn create_static_content(mut self, enabled: bool) -> Self {
        self.create_static_content = enabled;
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns `SetupError::Validation` for a malformed field and
    /// `SetupError::InvalidProjectPath` when no artifact id is given and the
    /// target directory has no usable name.
    pub fn build(self) -> Result<GenerationRequest> {
        let spring_boot_version = self.spring_boot_version.trim().to_string();
        if spring_boot_version.is_empty() {
            return Err(invalid("Spring Boot version must not be empty"));
        }

        let group_id = self
            .group_id
            .map(|g| g.trim().to_string())
            .unwrap_or_else(|| DEFAULT_GROUP_ID.to_string());
        validate_java_identifier_path(&group_id, "Group id")?;

        let artifact_id = match self.artifact_id {
            Some(artifact_id) => artifact_id.trim().to_string(),
            None => directory_name(&self.target_directory)?,
        };
        validate_artifact_id(&artifact_id)?;

        let version = self
            .version
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string());
        if version.is_empty() || version.chars().any(char::is_whitespace) {
            return Err(invalid(format!(
                "Project version '{}' must be non-empty and contain no whitespace",
                version
            )));
        }

        let package_name = self
            .package_name
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| group_id.clone());
        validate_java_identifier_path(&package_name, "Package name")?;

        if self.port == Some(0) {
            return Err(invalid("Port must be between 1 and 65535"));
        }

        let mut selections: Vec<Selection> = Vec::with_capacity(self.selections.len());
        for selection in self.selections {
            if !selections.contains(&selection) {
                selections.push(selection);
            }
        }

        Ok(GenerationRequest {
            target_directory: self.target_directory,
            spring_boot_version,
            selections,
            group_id,
            artifact_id,
            version,
            package_name,
            port: self.port,
            create_static_content: self.create_static_content,
        })
    }
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    SetupError::Validation {
        message: message.into(),
    }
    .into()
}

fn directory_name(target_directory: &Path) -> Result<String> {
    target_directory
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            SetupError::InvalidProjectPath {
                path: target_directory.to_path_buf(),
                reason: "Cannot derive an artifact id from the directory name".to_string(),
            }
            .into()
        })
}

/// Dot-separated Java identifiers, e.g. `com.example.demo`
fn validate_java_identifier_path(value: &str, description: &str) -> Result<()> {
    let valid = !value.is_empty()
        && value.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        });
    if !valid {
        return Err(invalid(format!(
            "{} '{}' is not a valid Java package name",
            description, value
        )));
    }
    Ok(())
}

fn validate_artifact_id(value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && !value.starts_with('.')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if !valid {
        return Err(invalid(format!(
            "Artifact id '{}' may only contain letters, digits, '-', '_' and '.'",
            value
        )));
    }
    Ok(())
}
