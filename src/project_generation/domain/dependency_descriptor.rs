/// Removes surrounding double quotes (and the whitespace around them) from a
/// catalog string field.
///
/// Upstream catalogs occasionally deliver values such as `"\"Web\""`.
/// Stripping is idempotent: an unquoted value comes back unchanged.
pub fn strip_quotes(value: &str) -> String {
    value
        .trim_matches(|c: char| c == '"' || c.is_whitespace())
        .to_string()
}

/// Maven coordinate of a catalog entry (YAML catalogs carry these)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    group_id: String,
    artifact_id: String,
    version: Option<String>,
}

impl MavenCoordinate {
    pub fn new(group_id: String, artifact_id: String, version: Option<String>) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
        }
    }

    /// `org.springframework.boot:spring-boot-starter-web`, version managed by the parent
    pub fn spring_boot_starter_web() -> Self {
        Self::new(
            "org.springframework.boot".to_string(),
            "spring-boot-starter-web".to_string(),
            None,
        )
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl std::fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group_id, self.artifact_id, version),
            None => write!(f, "{}:{}", self.group_id, self.artifact_id),
        }
    }
}

/// A starter or library offered by the initializer service.
///
/// Identity is the `id`; two descriptors with the same id are the same
/// dependency regardless of labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDescriptor {
    group_name: String,
    id: String,
    display_name: String,
    description: String,
    maven_coordinate: Option<MavenCoordinate>,
}

impl DependencyDescriptor {
    /// Creates a descriptor, stripping stray quotes from every field
    pub fn new(group_name: &str, id: &str, display_name: &str, description: &str) -> Self {
        Self {
            group_name: strip_quotes(group_name),
            id: strip_quotes(id),
            display_name: strip_quotes(display_name),
            description: strip_quotes(description),
            maven_coordinate: None,
        }
    }

    pub fn with_maven_coordinate(mut self, coordinate: MavenCoordinate) -> Self {
        self.maven_coordinate = Some(coordinate);
        self
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn maven_coordinate(&self) -> Option<&MavenCoordinate> {
        self.maven_coordinate.as_ref()
    }

    /// Long label: `Group: Name`
    pub fn group_and_name(&self) -> String {
        format!("{}: {}", self.group_name, self.display_name)
    }

    /// Short, tab-friendly label for shells: lowercase, runs of anything
    /// that is not alphanumeric collapsed into a single `-`.
    pub fn shell_name(&self) -> String {
        let mut shell = String::with_capacity(self.display_name.len());
        for c in self.display_name.chars() {
            if c.is_alphanumeric() {
                shell.extend(c.to_lowercase());
            } else if !shell.ends_with('-') {
                shell.push('-');
            }
        }
        shell.trim_matches('-').to_string()
    }
}
