use crate::project_generation::domain::{Catalog, CatalogSource};
use crate::shared::Result;

/// CatalogRepository port for loading the dependency catalog
///
/// This port abstracts where the catalog lives (initializer metadata
/// endpoint, YAML override file) and how it is cached.
pub trait CatalogRepository {
    /// Loads the catalog from the given source
    ///
    /// # Errors
    /// Returns `SetupError::CatalogUnavailable` if the source cannot be
    /// reached or its content cannot be parsed
    fn load_catalog(&self, source: &CatalogSource) -> Result<Catalog>;
}

/// A shared reference is as good as the repository itself, so a cache owned
/// by the composition root can be lent to several use cases.
impl<T: CatalogRepository + ?Sized> CatalogRepository for &T {
    fn load_catalog(&self, source: &CatalogSource) -> Result<Catalog> {
        (**self).load_catalog(source)
    }
}
