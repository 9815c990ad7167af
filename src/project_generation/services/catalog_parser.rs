use crate::project_generation::domain::{Catalog, DependencyDescriptor, MavenCoordinate};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

/// One dependency entry as it appears in either catalog document
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, rename = "groupId", deserialize_with = "lenient_string")]
    group_id: Option<String>,
    #[serde(default, rename = "artifactId", deserialize_with = "lenient_string")]
    artifact_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    version: Option<String>,
}

/// Any scalar a hand-written YAML catalog may hold where a string is meant,
/// e.g. an unquoted `version: 1.0`
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let scalar = Option::<Scalar>::deserialize(deserializer)?;
    Ok(scalar.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Unsigned(n) => n.to_string(),
        // Debug keeps the fraction: 1.0 stays "1.0"
        Scalar::Float(n) => format!("{:?}", n),
        Scalar::Flag(b) => b.to_string(),
    }))
}

/// The two schema variants of a group's entry list.
///
/// The YAML configuration format names the list `content`, the JSON
/// metadata served by the service names it `values`. When a group has
/// both, `content` wins.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogEntrySource {
    YamlContent { content: Vec<RawEntry> },
    JsonValues { values: Vec<RawEntry> },
}

impl CatalogEntrySource {
    fn into_entries(self) -> Vec<RawEntry> {
        match self {
            CatalogEntrySource::YamlContent { content } => content,
            CatalogEntrySource::JsonValues { values } => values,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(flatten)]
    entries: CatalogEntrySource,
}

#[derive(Debug, Deserialize)]
struct JsonCatalogDocument {
    dependencies: JsonDependencies,
}

#[derive(Debug, Deserialize)]
struct JsonDependencies {
    values: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct YamlCatalogDocument {
    initializr: YamlInitializr,
}

#[derive(Debug, Deserialize)]
struct YamlInitializr {
    dependencies: Vec<RawGroup>,
}

/// CatalogParser turns catalog documents into a `Catalog`.
///
/// Pure text-to-domain conversion; fetching the documents is the job of
/// the catalog repository adapters.
pub struct CatalogParser;

impl CatalogParser {
    /// Parses initializer metadata JSON: `dependencies.values[]`
    pub fn parse_json(content: &str) -> Result<Catalog> {
        let document: JsonCatalogDocument = serde_json::from_str(content)
            .context("Catalog JSON does not match the expected `dependencies.values` shape")?;
        Ok(Self::build(document.dependencies.values))
    }

    /// Parses an initializr YAML configuration: `initializr.dependencies[]`
    pub fn parse_yaml(content: &str) -> Result<Catalog> {
        let document: YamlCatalogDocument = serde_yaml_ng::from_str(content)
            .context("Catalog YAML does not match the expected `initializr.dependencies` shape")?;
        Ok(Self::build(document.initializr.dependencies))
    }

    fn build(groups: Vec<RawGroup>) -> Catalog {
        let mut descriptors = Vec::new();

        for group in groups {
            let group_name = group.name.unwrap_or_default();
            for entry in group.entries.into_entries() {
                let Some(id) = entry.id.as_deref().filter(|id| !id.trim().is_empty()) else {
                    log::warn!(
                        "Skipping catalog entry without id in group '{}'",
                        group_name
                    );
                    continue;
                };

                let display_name = entry.name.as_deref().unwrap_or(id);
                let mut descriptor = DependencyDescriptor::new(
                    &group_name,
                    id,
                    display_name,
                    entry.description.as_deref().unwrap_or_default(),
                );

                if let (Some(group_id), Some(artifact_id)) = (&entry.group_id, &entry.artifact_id)
                {
                    descriptor = descriptor.with_maven_coordinate(MavenCoordinate::new(
                        group_id.clone(),
                        artifact_id.clone(),
                        entry.version.clone(),
                    ));
                }

                descriptors.push(descriptor);
            }
        }

        Catalog::new(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_CATALOG: &str = r#"{
  "dependencies": {
    "type": "hierarchical-multi-select",
    "values": [
      {
        "name": "Web",
        "values": [
          {"id": "web", "name": "Web", "description": "Full-stack web dev", "_links": {}}
        ]
      },
      {
        "name": "Ops",
        "values": [
          {"id": "actuator", "name": "Actuator", "description": "Production-ready features"}
        ]
      }
    ]
  }
}"#;

    const YAML_CATALOG: &str = r#"
initializr:
  dependencies:
    - name: Web
      content:
        - id: web
          name: Web
          description: Full-stack web dev
    - name: Ops
      content:
        - id: actuator
          name: Actuator
          description: Production-ready features
"#;

    #[test]
    fn test_parse_json_values_schema() {
        let catalog = CatalogParser::parse_json(JSON_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        let web = catalog.get("web").unwrap();
        assert_eq!(web.group_name(), "Web");
        assert_eq!(web.display_name(), "Web");
        assert_eq!(web.description(), "Full-stack web dev");
        assert_eq!(catalog.get("actuator").unwrap().group_name(), "Ops");
    }

    #[test]
    fn test_yaml_content_and_json_values_are_equivalent() {
        let from_json = CatalogParser::parse_json(JSON_CATALOG).unwrap();
        let from_yaml = CatalogParser::parse_yaml(YAML_CATALOG).unwrap();
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn test_yaml_accepts_values_key() {
        let yaml = r#"
initializr:
  dependencies:
    - name: Web
      values:
        - id: web
          name: Web
          description: Full-stack web dev
"#;
        let catalog = CatalogParser::parse_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("web"));
    }

    #[test]
    fn test_yaml_maven_coordinates() {
        let yaml = r#"
initializr:
  dependencies:
    - name: Camel
      content:
        - id: camel-zipkin-starter
          name: Apache Camel Zipkin
          description: Distributed tracing with Apache Camel.
          groupId: org.apache.camel
          artifactId: camel-zipkin
          version: 2.19.1
"#;
        let catalog = CatalogParser::parse_yaml(yaml).unwrap();
        let coordinate = catalog
            .get("camel-zipkin-starter")
            .unwrap()
            .maven_coordinate()
            .unwrap();
        assert_eq!(coordinate.group_id(), "org.apache.camel");
        assert_eq!(coordinate.artifact_id(), "camel-zipkin");
        assert_eq!(coordinate.version(), Some("2.19.1"));
    }

    #[test]
    fn test_yaml_unquoted_scalars_are_read_as_text() {
        let yaml = r#"
initializr:
  dependencies:
    - name: 2024
      content:
        - id: legacy-starter
          name: Legacy
          groupId: com.example
          artifactId: legacy
          version: 1.0
        - id: 42
          name: true
"#;
        let catalog = CatalogParser::parse_yaml(yaml).unwrap();

        let legacy = catalog.get("legacy-starter").unwrap();
        assert_eq!(legacy.group_name(), "2024");
        assert_eq!(legacy.maven_coordinate().unwrap().version(), Some("1.0"));
        assert_eq!(catalog.get("42").unwrap().display_name(), "true");
    }

    #[test]
    fn test_quoted_fields_are_stripped() {
        let json = r#"{"dependencies": {"values": [
            {"name": "\"Web\"", "values": [{"id": "\"web\"", "name": "\"Web\"", "description": "\"Full-stack\""}]}
        ]}}"#;
        let catalog = CatalogParser::parse_json(json).unwrap();
        let web = catalog.get("web").unwrap();
        assert_eq!(web.group_name(), "Web");
        assert_eq!(web.description(), "Full-stack");
    }

    #[test]
    fn test_missing_description_and_name() {
        let json = r#"{"dependencies": {"values": [
            {"name": "Misc", "values": [{"id": "lombok"}]}
        ]}}"#;
        let catalog = CatalogParser::parse_json(json).unwrap();
        let lombok = catalog.get("lombok").unwrap();
        assert_eq!(lombok.display_name(), "lombok");
        assert_eq!(lombok.description(), "");
    }

    #[test]
    fn test_entries_without_id_are_skipped() {
        let json = r#"{"dependencies": {"values": [
            {"name": "Misc", "values": [{"name": "No id"}, {"id": "lombok", "name": "Lombok"}]}
        ]}}"#;
        let catalog = CatalogParser::parse_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_json_wrong_shape() {
        let result = CatalogParser::parse_json(r#"{"type": {"values": []}}"#);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("dependencies.values"));
    }

    #[test]
    fn test_parse_json_group_without_entries() {
        let result = CatalogParser::parse_json(r#"{"dependencies": {"values": [{"name": "Web"}]}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_yaml_invalid() {
        let result = CatalogParser::parse_yaml("initializr: [[[broken");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("initializr.dependencies"));
    }
}
