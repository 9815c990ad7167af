use crate::ports::outbound::CatalogRepository;
use crate::project_generation::domain::{Catalog, CatalogSource};
use crate::shared::Result;
use dashmap::DashMap;

/// CachingCatalogRepository wraps a CatalogRepository and keeps every
/// loaded catalog in memory, keyed by source.
///
/// The cache lives as long as this object; the composition root owns it
/// and lends it out by reference. Two callers racing on the first load
/// may both fetch; the last insert wins and both values are equivalent.
pub struct CachingCatalogRepository<R: CatalogRepository> {
    inner: R,
    cache: DashMap<CatalogSource, Catalog>,
}

impl<R: CatalogRepository> CachingCatalogRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Drops the cached catalog for `source` and loads it again
    pub fn refresh(&self, source: &CatalogSource) -> Result<Catalog> {
        self.cache.remove(source);
        self.load_catalog(source)
    }

    /// Forgets every cached catalog
    pub fn invalidate_all(&self) {
        self.cache.clear();
    }

    pub fn is_cached(&self, source: &CatalogSource) -> bool {
        self.cache.contains_key(source)
    }

    /// Number of cached catalogs (for testing/monitoring)
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<R: CatalogRepository> CatalogRepository for CachingCatalogRepository<R> {
    fn load_catalog(&self, source: &CatalogSource) -> Result<Catalog> {
        if let Some(cached) = self.cache.get(source) {
            log::debug!("Catalog cache hit for {}", source);
            return Ok(cached.clone());
        }

        // Failures are not cached; the next call tries again
        let catalog = self.inner.load_catalog(source)?;
        self.cache.insert(source.clone(), catalog.clone());

        Ok(catalog)
    }
}
