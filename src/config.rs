//! Configuration support for springboot-setup.
//!
//! Settings come from, in order of precedence: command-line flags (applied
//! by the caller), environment variables, a YAML `springboot-setup.config.yml`
//! file, and built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::adapters::outbound::network::DEFAULT_STARTER_URL;
use crate::project_generation::domain::CatalogSource;
use crate::shared::error::SetupError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "springboot-setup.config.yml";

pub const ENV_DEFAULT_VERSION: &str = "SPRING_BOOT_DEFAULT_VERSION";
pub const ENV_VERSIONS: &str = "SPRING_BOOT_VERSIONS";
pub const ENV_CATALOG_FILE: &str = "SPRING_BOOT_CONFIG_FILE";
pub const ENV_STARTER_URL: &str = "SPRING_BOOT_STARTER_URL";

pub const DEFAULT_BOOT_VERSION: &str = "1.5.4.RELEASE";
pub const DEFAULT_BOOT_VERSIONS: &[&str] = &[
    "1.4.1.RELEASE",
    "1.4.7.RELEASE",
    "1.5.4.RELEASE",
    "2.3.3.RELEASE",
];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub default_version: Option<String>,
    pub versions: Option<Vec<String>>,
    /// YAML catalog override: `http(s)://` URL, `file://` URL or path
    pub catalog_file: Option<String>,
    pub starter_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let config_error = |details: &str, hint: &str| -> anyhow::Error {
        SetupError::ConfigError {
            path: path.to_path_buf(),
            details: details.to_string(),
            hint: hint.to_string(),
        }
        .into()
    };

    if let Some(ref versions) = config.versions {
        if versions.iter().all(|v| v.trim().is_empty()) {
            return Err(config_error(
                "versions must list at least one Spring Boot version",
                "Remove the 'versions' key to use the built-in list",
            ));
        }
    }
    if matches!(config.default_version.as_deref(), Some(v) if v.trim().is_empty()) {
        return Err(config_error(
            "default_version must not be empty",
            "Use a version such as \"1.5.4.RELEASE\"",
        ));
    }
    if matches!(config.starter_url.as_deref(), Some(url) if url.trim().is_empty()) {
        return Err(config_error(
            "starter_url must not be empty",
            "Remove the key to use https://start.spring.io",
        ));
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Splits a comma list, dropping empty items and repeats (first wins)
pub fn split_versions(list: &str) -> Vec<String> {
    let mut versions: Vec<String> = Vec::new();
    for version in list.split(',').map(str::trim).filter(|v| !v.is_empty()) {
        if !versions.iter().any(|known| known == version) {
            versions.push(version.to_string());
        }
    }
    versions
}

/// Effective settings after merging environment, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSettings {
    pub default_version: String,
    pub versions: Vec<String>,
    pub catalog_file: Option<String>,
    pub starter_url: String,
}

impl SetupSettings {
    /// Resolves settings from the process environment and an optional
    /// config file
    pub fn from_environment(file: Option<&ConfigFile>) -> Result<Self> {
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Resolves settings with an injectable environment lookup.
    ///
    /// Blank environment values count as unset.
    pub fn resolve(file: Option<&ConfigFile>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let versions = match env(ENV_VERSIONS) {
            Some(list) => split_versions(&list),
            None => match file.and_then(|f| f.versions.as_ref()) {
                Some(list) => split_versions(&list.join(",")),
                None => DEFAULT_BOOT_VERSIONS.iter().map(|v| v.to_string()).collect(),
            },
        };

        // Without a configured default, the built-in one if listed, else the
        // first listed version. A configured default is checked by `new`.
        let default_version = env(ENV_DEFAULT_VERSION)
            .or_else(|| file.and_then(|f| f.default_version.clone()))
            .map(|version| version.trim().to_string())
            .or_else(|| {
                versions
                    .iter()
                    .find(|v| *v == DEFAULT_BOOT_VERSION)
                    .or_else(|| versions.first())
                    .cloned()
            })
            .unwrap_or_else(|| DEFAULT_BOOT_VERSION.to_string());

        let catalog_file = env(ENV_CATALOG_FILE)
            .or_else(|| file.and_then(|f| f.catalog_file.clone()))
            .map(|location| location.trim().to_string())
            .filter(|location| !location.is_empty());

        let starter_url = env(ENV_STARTER_URL)
            .or_else(|| file.and_then(|f| f.starter_url.clone()))
            .unwrap_or_else(|| DEFAULT_STARTER_URL.to_string())
            .trim()
            .to_string();

        let settings = Self {
            default_version,
            versions,
            catalog_file,
            starter_url,
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(SetupError::Validation {
                message: format!("{} lists no Spring Boot version", ENV_VERSIONS),
            }
            .into());
        }
        Ok(())
    }

    /// Checks a requested boot version against the selectable list
    pub fn ensure_selectable(&self, boot_version: &str) -> Result<()> {
        if self.versions.iter().any(|v| v == boot_version) {
            return Ok(());
        }
        Err(SetupError::Validation {
            message: format!(
                "Spring Boot version {} is not selectable. Choose one of: {}",
                boot_version,
                self.versions.join(", ")
            ),
        }
        .into())
    }

    /// Where the dependency catalog comes from: the YAML override if set,
    /// otherwise the initializer's metadata endpoint
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::select(&self.starter_url, self.catalog_file.as_deref())
    }
}

/// Loads the config file given with `--config`, or discovers one in `dir`
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}
