use super::DependencyDescriptor;
use std::collections::HashSet;

/// Where the dependency catalog comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogSource {
    /// JSON metadata served by the initializer service at this URL
    Remote(String),
    /// YAML override (`http(s)://`, `file://` or a plain path)
    YamlOverride(String),
}

impl CatalogSource {
    /// The override wins when one is configured
    pub fn select(starter_url: &str, override_location: Option<&str>) -> Self {
        match override_location {
            Some(location) if !location.trim().is_empty() => {
                CatalogSource::YamlOverride(location.trim().to_string())
            }
            _ => CatalogSource::Remote(starter_url.to_string()),
        }
    }

    pub fn location(&self) -> &str {
        match self {
            CatalogSource::Remote(url) => url,
            CatalogSource::YamlOverride(location) => location,
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Remote(url) => write!(f, "{} (JSON)", url),
            CatalogSource::YamlOverride(location) => write!(f, "{} (YAML)", location),
        }
    }
}

/// Ordered set of dependencies offered to the user.
///
/// Order is the order of the source document. Ids are unique; when a
/// source repeats an id the first occurrence is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    dependencies: Vec<DependencyDescriptor>,
}

impl Catalog {
    pub fn new(descriptors: Vec<DependencyDescriptor>) -> Self {
        let mut seen = HashSet::new();
        let dependencies = descriptors
            .into_iter()
            .filter(|d| {
                let first = seen.insert(d.id().to_string());
                if !first {
                    log::warn!("Ignoring duplicate catalog id: {}", d.id());
                }
                first
            })
            .collect();
        Self { dependencies }
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyDescriptor> {
        self.dependencies.iter()
    }

    pub fn get(&self, id: &str) -> Option<&DependencyDescriptor> {
        self.dependencies.iter().find(|d| d.id() == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&DependencyDescriptor> {
        self.dependencies.get(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Dependencies grouped by group name, groups in order of first appearance
    pub fn groups(&self) -> Vec<(&str, Vec<&DependencyDescriptor>)> {
        let mut groups: Vec<(&str, Vec<&DependencyDescriptor>)> = Vec::new();
        for dependency in &self.dependencies {
            match groups
                .iter_mut()
                .find(|(name, _)| *name == dependency.group_name())
            {
                Some((_, members)) => members.push(dependency),
                None => groups.push((dependency.group_name(), vec![dependency])),
            }
        }
        groups
    }
}
