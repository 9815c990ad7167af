use crate::project_generation::domain::{Catalog, DependencyDescriptor, Selection};
use crate::shared::error::SetupError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// Outcome of resolving the user's selections against a catalog
#[derive(Debug, Clone)]
pub struct ResolvedSelection {
    /// Comma-joined ids in selection order, ready for the `dependencies` query parameter
    pub joined: String,
    /// Selected descriptors in selection order
    pub selected: Vec<DependencyDescriptor>,
    /// Selected descriptors keyed by id
    pub by_id: HashMap<String, DependencyDescriptor>,
}

/// SelectionResolver maps selections onto canonical catalog ids.
///
/// Every selection must name a catalog entry; the first unknown one fails
/// the whole resolution and nothing is joined.
pub struct SelectionResolver;

impl SelectionResolver {
    pub fn resolve(catalog: &Catalog, selections: &[Selection]) -> Result<ResolvedSelection> {
        let mut selected = Vec::with_capacity(selections.len());
        let mut seen = HashSet::new();

        for selection in selections {
            let descriptor = match selection {
                Selection::Id(id) => catalog.get(id),
                Selection::Index(index) => catalog.get_index(*index),
            }
            .ok_or_else(|| SetupError::UnknownDependency {
                id: selection.to_string(),
            })?;

            if seen.insert(descriptor.id().to_string()) {
                selected.push(descriptor.clone());
            }
        }

        let joined = selected
            .iter()
            .map(|d| d.id())
            .collect::<Vec<_>>()
            .join(",");
        let by_id = selected
            .iter()
            .map(|d| (d.id().to_string(), d.clone()))
            .collect();

        Ok(ResolvedSelection {
            joined,
            selected,
            by_id,
        })
    }
}
