use crate::project_generation::domain::MavenCoordinate;
use crate::shared::Result;
use std::ops::Range;

const DEPENDENCIES_OPEN: &str = "<dependencies>";
const DEPENDENCIES_CLOSE: &str = "</dependencies>";

/// PomEditor injects dependencies into a Maven `pom.xml`.
///
/// Works on the text so the generated formatting survives. Only the
/// project-level `<dependencies>` block is considered; blocks nested in
/// `<dependencyManagement>`, `<build>` or `<profiles>` are skipped.
pub struct PomEditor;

impl PomEditor {
    /// Returns the updated pom, or `None` when the dependency is already declared
    pub fn ensure_dependency(pom: &str, coordinate: &MavenCoordinate) -> Result<Option<String>> {
        let unit = Self::indent_unit(pom);

        let updated = match Self::project_dependencies_block(pom) {
            Some(block) => {
                if Self::declares(&pom[block.clone()], coordinate) {
                    return Ok(None);
                }
                let close_at = block.end - DEPENDENCIES_CLOSE.len();
                let indent = Self::line_indent(pom, close_at);

                let mut updated = Self::head_on_new_line(&pom[..close_at]);
                updated.push_str(&Self::dependency_xml(
                    coordinate,
                    &format!("{}{}", indent, unit),
                    unit,
                ));
                updated.push_str(indent);
                updated.push_str(&pom[close_at..]);
                updated
            }
            None => {
                let project_close = pom
                    .rfind("</project>")
                    .ok_or_else(|| anyhow::anyhow!("pom.xml has no </project> element"))?;
                let indent = format!("{}{}", Self::line_indent(pom, project_close), unit);

                let mut updated = Self::head_on_new_line(&pom[..project_close]);
                updated.push_str(&indent);
                updated.push_str(DEPENDENCIES_OPEN);
                updated.push('\n');
                updated.push_str(&Self::dependency_xml(
                    coordinate,
                    &format!("{}{}", indent, unit),
                    unit,
                ));
                updated.push_str(&indent);
                updated.push_str(DEPENDENCIES_CLOSE);
                updated.push('\n');
                updated.push_str(Self::line_indent(pom, project_close));
                updated.push_str(&pom[project_close..]);
                updated
            }
        };

        Ok(Some(updated))
    }

    /// True when `pom` declares the coordinate in its project-level dependencies
    #[cfg(test)]
    fn has_dependency(pom: &str, coordinate: &MavenCoordinate) -> bool {
        Self::project_dependencies_block(pom)
            .map(|block| Self::declares(&pom[block], coordinate))
            .unwrap_or(false)
    }

    fn declares(block: &str, coordinate: &MavenCoordinate) -> bool {
        let artifact = format!("<artifactId>{}</artifactId>", coordinate.artifact_id());
        let group = format!("<groupId>{}</groupId>", coordinate.group_id());
        block
            .split("</dependency>")
            .any(|dependency| dependency.contains(&artifact) && dependency.contains(&group))
    }

    /// Byte range of the project-level `<dependencies>...</dependencies>`
    fn project_dependencies_block(pom: &str) -> Option<Range<usize>> {
        let excluded: Vec<Range<usize>> = ["dependencyManagement", "build", "profiles"]
            .iter()
            .filter_map(|tag| Self::element_range(pom, tag))
            .collect();

        let mut search_from = 0;
        while let Some(offset) = pom[search_from..].find(DEPENDENCIES_OPEN) {
            let start = search_from + offset;
            let close = pom[start..].find(DEPENDENCIES_CLOSE)? + start + DEPENDENCIES_CLOSE.len();
            if excluded.iter().all(|range| !range.contains(&start)) {
                return Some(start..close);
            }
            search_from = close;
        }
        None
    }

    fn element_range(pom: &str, tag: &str) -> Option<Range<usize>> {
        let open = format!("<{}>", tag);
        let close = format!("</{}>", tag);
        let start = pom.find(&open)?;
        let end = pom[start..].find(&close)? + start + close.len();
        Some(start..end)
    }

    /// Leading whitespace of the line `position` sits on, when only
    /// whitespace precedes it on that line
    fn line_indent(text: &str, position: usize) -> &str {
        let line_start = text[..position].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let prefix = &text[line_start..position];
        if prefix.chars().all(|c| c == ' ' || c == '\t') {
            prefix
        } else {
            ""
        }
    }

    fn indent_unit(pom: &str) -> &'static str {
        if pom.contains("\n\t<") {
            "\t"
        } else {
            "    "
        }
    }

    /// `head` without the trailing indentation of its last line, ending in a newline
    fn head_on_new_line(head: &str) -> String {
        let mut head = head.trim_end_matches([' ', '\t']).to_string();
        if !head.ends_with('\n') {
            head.push('\n');
        }
        head
    }

    fn dependency_xml(coordinate: &MavenCoordinate, indent: &str, unit: &str) -> String {
        let field_indent = format!("{}{}", indent, unit);
        let mut xml = format!("{}<dependency>\n", indent);
        xml.push_str(&format!(
            "{}<groupId>{}</groupId>\n",
            field_indent,
            coordinate.group_id()
        ));
        xml.push_str(&format!(
            "{}<artifactId>{}</artifactId>\n",
            field_indent,
            coordinate.artifact_id()
        ));
        if let Some(version) = coordinate.version() {
            xml.push_str(&format!("{}<version>{}</version>\n", field_indent, version));
        }
        xml.push_str(&format!("{}</dependency>\n", indent));
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED_POM: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<project>
\t<modelVersion>4.0.0</modelVersion>
\t<artifactId>demo</artifactId>

\t<dependencies>
\t\t<dependency>
\t\t\t<groupId>org.springframework.boot</groupId>
\t\t\t<artifactId>spring-boot-starter-actuator</artifactId>
\t\t</dependency>
\t</dependencies>

\t<build>
\t\t<plugins>
\t\t\t<plugin>
\t\t\t\t<groupId>org.springframework.boot</groupId>
\t\t\t\t<artifactId>spring-boot-maven-plugin</artifactId>
\t\t\t</plugin>
\t\t</plugins>
\t</build>
</project>
";

    #[test]
    fn test_ensure_dependency_appends_to_existing_block() {
        let web = MavenCoordinate::spring_boot_starter_web();
        let updated = PomEditor::ensure_dependency(GENERATED_POM, &web)
            .unwrap()
            .unwrap();

        assert!(updated.contains(
            "\t\t</dependency>
\t\t<dependency>
\t\t\t<groupId>org.springframework.boot</groupId>
\t\t\t<artifactId>spring-boot-starter-web</artifactId>
\t\t</dependency>
\t</dependencies>"
        ));
        assert!(PomEditor::has_dependency(&updated, &web));
        // everything after the block is untouched
        assert!(updated.ends_with(&GENERATED_POM[GENERATED_POM.find("\n\n\t<build>").unwrap()..]));
    }

    #[test]
    fn test_ensure_dependency_is_noop_when_present() {
        let web = MavenCoordinate::spring_boot_starter_web();
        let once = PomEditor::ensure_dependency(GENERATED_POM, &web)
            .unwrap()
            .unwrap();
        assert!(PomEditor::ensure_dependency(&once, &web).unwrap().is_none());
    }

    #[test]
    fn test_dependency_management_does_not_count() {
        let pom = "<project>
    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-starter-web</artifactId>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
";
        let web = MavenCoordinate::spring_boot_starter_web();
        assert!(!PomEditor::has_dependency(pom, &web));

        let updated = PomEditor::ensure_dependency(pom, &web).unwrap().unwrap();
        assert!(updated.ends_with(
            "    </dependencyManagement>
    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
    </dependencies>
</project>
"
        ));
        assert!(PomEditor::has_dependency(&updated, &web));
    }

    #[test]
    fn test_ensure_dependency_with_version() {
        let pom = "<project>\n    <dependencies>\n    </dependencies>\n</project>\n";
        let camel = MavenCoordinate::new(
            "org.apache.camel".to_string(),
            "camel-zipkin".to_string(),
            Some("2.19.1".to_string()),
        );
        let updated = PomEditor::ensure_dependency(pom, &camel).unwrap().unwrap();
        assert_eq!(
            updated,
            "<project>
    <dependencies>
        <dependency>
            <groupId>org.apache.camel</groupId>
            <artifactId>camel-zipkin</artifactId>
            <version>2.19.1</version>
        </dependency>
    </dependencies>
</project>
"
        );
    }

    #[test]
    fn test_ensure_dependency_without_project_element() {
        let result = PomEditor::ensure_dependency(
            "<notapom/>",
            &MavenCoordinate::spring_boot_starter_web(),
        );
        assert!(result.unwrap_err().to_string().contains("</project>"));
    }

    #[test]
    fn test_same_artifact_other_group_is_not_a_match() {
        let pom = "<project>
    <dependencies>
        <dependency>
            <groupId>com.acme</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
    </dependencies>
</project>
";
        assert!(!PomEditor::has_dependency(
            pom,
            &MavenCoordinate::spring_boot_starter_web()
        ));
    }
}
