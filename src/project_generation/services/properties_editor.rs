/// PropertiesEditor edits Java `.properties` text in place.
///
/// Only lines whose key matches are touched; comments, blank lines and
/// every other key are preserved byte for byte.
pub struct PropertiesEditor;

impl PropertiesEditor {
    /// Sets `key=value`, replacing the first existing entry for `key` (later
    /// duplicates are dropped since they would override it) or appending.
    pub fn set_property(content: &str, key: &str, value: &str) -> String {
        let entry = format!("{}={}", key, value);
        let mut lines: Vec<String> = Vec::new();
        let mut replaced = false;

        for line in content.lines() {
            if Self::line_key(line) == Some(key) {
                if !replaced {
                    lines.push(entry.clone());
                    replaced = true;
                }
                continue;
            }
            lines.push(line.to_string());
        }

        if !replaced {
            lines.push(entry);
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    /// Looks up the value of `key`, if present
    #[cfg(test)]
    fn get_property<'a>(content: &'a str, key: &str) -> Option<&'a str> {
        content.lines().find_map(|line| {
            if Self::line_key(line) != Some(key) {
                return None;
            }
            let rest = line.trim_start()[key.len()..].trim_start();
            let rest = rest
                .strip_prefix('=')
                .or_else(|| rest.strip_prefix(':'))
                .unwrap_or(rest);
            Some(rest.trim())
        })
    }

    fn line_key(line: &str) -> Option<&str> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            return None;
        }
        let end = trimmed
            .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
            .unwrap_or(trimmed.len());
        Some(&trimmed[..end])
    }
}
