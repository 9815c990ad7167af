use crate::ports::outbound::{CatalogRepository, ProgressReporter};
use crate::project_generation::domain::{Catalog, CatalogSource};
use crate::shared::Result;

/// ListDependenciesUseCase loads the catalog a `new` run would resolve
/// selections against, so the user can browse ids and indexes.
pub struct ListDependenciesUseCase<CR, PR> {
    catalog_repository: CR,
    progress_reporter: PR,
    catalog_source: CatalogSource,
}

impl<CR, PR> ListDependenciesUseCase<CR, PR>
where
    CR: CatalogRepository,
    PR: ProgressReporter,
{
    pub fn new(catalog_repository: CR, progress_reporter: PR, catalog_source: CatalogSource) -> Self {
        Self {
            catalog_repository,
            progress_reporter,
            catalog_source,
        }
    }

    pub fn execute(&self) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency catalog from: {}",
            self.catalog_source
        ));
        let catalog = self.catalog_repository.load_catalog(&self.catalog_source)?;
        if catalog.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: The catalog lists no dependencies.");
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_generation::domain::DependencyDescriptor;
    use std::cell::RefCell;

    struct StaticCatalog(Vec<DependencyDescriptor>);

    impl CatalogRepository for StaticCatalog {
        fn load_catalog(&self, _source: &CatalogSource) -> Result<Catalog> {
            Ok(Catalog::new(self.0.clone()))
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: u64, _total: u64, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    #[test]
    fn test_execute_returns_catalog() {
        let use_case = ListDependenciesUseCase::new(
            StaticCatalog(vec![
                DependencyDescriptor::new("Web", "web", "Web", ""),
                DependencyDescriptor::new("Ops", "actuator", "Actuator", ""),
            ]),
            RecordingReporter::default(),
            CatalogSource::Remote("https://start.spring.io".to_string()),
        );

        let catalog = use_case.execute().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(use_case.progress_reporter.errors.borrow().is_empty());
    }

    #[test]
    fn test_empty_catalog_warns() {
        let use_case = ListDependenciesUseCase::new(
            StaticCatalog(Vec::new()),
            RecordingReporter::default(),
            CatalogSource::YamlOverride("/tmp/catalog.yml".to_string()),
        );

        assert!(use_case.execute().unwrap().is_empty());
        assert_eq!(use_case.progress_reporter.errors.borrow().len(), 1);
    }
}
