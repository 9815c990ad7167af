/// Parameters sent to the initializer's `starter.zip` endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterQuery {
    pub boot_version: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub package_name: String,
    pub dependencies: String,
}

impl StarterQuery {
    /// Query parameters in the order the service documents them
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("bootVersion", self.boot_version.as_str()),
            ("groupId", self.group_id.as_str()),
            ("artifactId", self.artifact_id.as_str()),
            ("version", self.version.as_str()),
            ("packageName", self.package_name.as_str()),
            ("dependencies", self.dependencies.as_str()),
        ]
    }
}
