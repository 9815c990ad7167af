use crate::shared::Result;

const APPLICATION_ANNOTATION: &str = "@SpringBootApplication";
const BUILDER_IMPORT: &str = "org.springframework.boot.builder.SpringApplicationBuilder";
const INITIALIZER_TYPE: &str = "SpringBootServletInitializer";
/// Boot 1.x package of the servlet initializer
const LEGACY_INITIALIZER_PACKAGE: &str = "org.springframework.boot.web.support";
/// Boot 2.x and later
const SERVLET_INITIALIZER_PACKAGE: &str = "org.springframework.boot.web.servlet.support";

/// Turns the generated `@SpringBootApplication` class into a
/// `SpringBootServletInitializer` so the project can be deployed as a war.
///
/// The edit adds two imports, an `extends` clause and a `configure`
/// override registering the application class as a Spring source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServletInitializerPatch {
    initializer_package: &'static str,
}

impl ServletInitializerPatch {
    /// Picks the initializer package matching the Spring Boot major version
    pub fn for_boot_version(boot_version: &str) -> Self {
        let major = boot_version
            .trim()
            .split('.')
            .next()
            .and_then(|major| major.parse::<u32>().ok())
            .unwrap_or(1);

        let initializer_package = if major >= 2 {
            SERVLET_INITIALIZER_PACKAGE
        } else {
            LEGACY_INITIALIZER_PACKAGE
        };
        Self {
            initializer_package,
        }
    }

    pub fn initializer_import(&self) -> String {
        format!("{}.{}", self.initializer_package, INITIALIZER_TYPE)
    }

    /// True when the source holds the `@SpringBootApplication` class
    pub fn is_application_class(source: &str) -> bool {
        source.contains(APPLICATION_ANNOTATION)
    }

    /// Applies the patch.
    ///
    /// Returns `None` when the class already extends the initializer.
    ///
    /// # Errors
    /// Returns an error if the source has no `@SpringBootApplication` class
    /// or the class already extends another type.
    pub fn apply(&self, source: &str) -> Result<Option<String>> {
        let annotation_at = source
            .find(APPLICATION_ANNOTATION)
            .ok_or_else(|| anyhow::anyhow!("No {} class found", APPLICATION_ANNOTATION))?;

        let arguments_end = Self::skip_arguments(source, annotation_at + APPLICATION_ANNOTATION.len())?;
        let name_start = Self::find_class_keyword(source, arguments_end)
            .ok_or_else(|| anyhow::anyhow!("No class declaration after {}", APPLICATION_ANNOTATION))?;
        let name_len = source[name_start..]
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(source.len() - name_start);
        let class_name = &source[name_start..name_start + name_len];
        if class_name.is_empty() {
            anyhow::bail!("Could not read the application class name");
        }
        let name_end = name_start + name_len;

        let body_open = source[name_end..]
            .find('{')
            .map(|offset| name_end + offset)
            .ok_or_else(|| anyhow::anyhow!("Class {} has no body", class_name))?;
        let header = &source[name_end..body_open];
        if let Some(extends_at) = header.find("extends") {
            let super_type = header[extends_at + "extends".len()..]
                .split_whitespace()
                .next()
                .unwrap_or_default();
            if super_type.ends_with(INITIALIZER_TYPE) {
                return Ok(None);
            }
            anyhow::bail!(
                "Class {} already extends {}; cannot make it a {}",
                class_name,
                super_type,
                INITIALIZER_TYPE
            );
        }

        let body_close = source
            .rfind('}')
            .filter(|close| *close > body_open)
            .ok_or_else(|| anyhow::anyhow!("Class {} body is not closed", class_name))?;

        // Edit back to front so earlier offsets stay valid
        let mut patched = String::with_capacity(source.len() + 512);
        patched.push_str(&source[..name_end]);
        patched.push_str(" extends ");
        patched.push_str(INITIALIZER_TYPE);
        let before_close = source[name_end..body_close].trim_end();
        patched.push_str(before_close);
        patched.push_str("\n\n");
        patched.push_str(&Self::configure_method(class_name));
        patched.push_str(&source[body_close..]);

        Ok(Some(self.add_imports(&patched)))
    }

    /// Offset just past the annotation's `(...)` argument list, if any
    fn skip_arguments(source: &str, from: usize) -> Result<usize> {
        let rest = &source[from..];
        let open = from + (rest.len() - rest.trim_start().len());
        if !source[open..].starts_with('(') {
            return Ok(from);
        }

        let mut depth = 0usize;
        let mut in_literal: Option<char> = None;
        let mut escaped = false;
        for (offset, c) in source[open..].char_indices() {
            if let Some(quote) = in_literal {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    in_literal = None;
                }
                continue;
            }
            match c {
                '"' | '\'' => in_literal = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(open + offset + 1);
                    }
                }
                _ => {}
            }
        }
        anyhow::bail!("Unbalanced arguments on {}", APPLICATION_ANNOTATION)
    }

    /// Start of the type name following the first `class` keyword token at
    /// or after `from`; `Foo.class` literals are not keywords
    fn find_class_keyword(source: &str, from: usize) -> Option<usize> {
        const KEYWORD: &str = "class";
        let mut search = from;
        while let Some(offset) = source[search..].find(KEYWORD) {
            let at = search + offset;
            let after = at + KEYWORD.len();
            let preceded_ok = source[..at]
                .chars()
                .next_back()
                .map_or(true, |c| !is_identifier_char(c) && c != '.');
            let followed_ok = source[after..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace);
            if preceded_ok && followed_ok {
                let rest = &source[after..];
                return Some(after + (rest.len() - rest.trim_start().len()));
            }
            search = after;
        }
        None
    }

    fn configure_method(class_name: &str) -> String {
        format!(
            "    @Override\n    protected SpringApplicationBuilder configure(SpringApplicationBuilder application) {{\n        return application.sources({}.class);\n    }}\n",
            class_name
        )
    }

    fn add_imports(&self, source: &str) -> String {
        let wanted: Vec<String> = [BUILDER_IMPORT.to_string(), self.initializer_import()]
            .into_iter()
            .filter(|import| !source.contains(&format!("import {};", import)))
            .collect();
        if wanted.is_empty() {
            return source.to_string();
        }

        let lines: String = wanted
            .iter()
            .map(|import| format!("import {};\n", import))
            .collect();

        // After the last existing import, else after the package line, else at the top
        let anchor = Self::line_end_after_last(source, "import ")
            .or_else(|| Self::line_end_after_last(source, "package "));

        match anchor {
            Some(at) => {
                let separator = if source[..at].contains("import ") { "" } else { "\n" };
                format!("{}{}{}{}", &source[..at], separator, lines, &source[at..])
            }
            None => format!("{}\n{}", lines, source),
        }
    }

    /// Byte offset just past the newline ending the last line starting with `prefix`
    fn line_end_after_last(source: &str, prefix: &str) -> Option<usize> {
        let mut offset = 0;
        let mut found = None;
        for line in source.split_inclusive('\n') {
            if line.trim_start().starts_with(prefix) {
                found = Some(offset + line.len());
            }
            offset += line.len();
        }
        found
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
