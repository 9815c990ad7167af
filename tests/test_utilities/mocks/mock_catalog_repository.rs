use springboot_setup::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CatalogRepository serving a fixed catalog and counting loads
#[derive(Clone)]
pub struct MockCatalogRepository {
    catalog: Catalog,
    pub loads: Arc<Mutex<Vec<CatalogSource>>>,
}

impl MockCatalogRepository {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            loads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Web and Ops groups: `web`, `websocket`, `actuator`
    pub fn web_and_ops() -> Self {
        Self::new(Catalog::new(vec![
            DependencyDescriptor::new("Web", "web", "Web", "Full-stack web development"),
            DependencyDescriptor::new("Web", "websocket", "Websocket", "Websocket development"),
            DependencyDescriptor::new("Ops", "actuator", "Actuator", "Production ready features"),
        ]))
    }

    pub fn load_count(&self) -> usize {
        self.loads.lock().unwrap().len()
    }
}

impl CatalogRepository for MockCatalogRepository {
    fn load_catalog(&self, source: &CatalogSource) -> Result<Catalog> {
        self.loads.lock().unwrap().push(source.clone());
        Ok(self.catalog.clone())
    }
}
