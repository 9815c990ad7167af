use std::str::FromStr;

/// A user's pick from the catalog: either a dependency id or a position
/// in the catalog as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Id(String),
    Index(usize),
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Dependency selection must not be empty".to_string());
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return trimmed
                .parse::<usize>()
                .map(Selection::Index)
                .map_err(|e| format!("Invalid dependency index '{}': {}", trimmed, e));
        }
        Ok(Selection::Id(trimmed.to_string()))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Id(id) => write!(f, "{}", id),
            Selection::Index(index) => write!(f, "#{}", index),
        }
    }
}
