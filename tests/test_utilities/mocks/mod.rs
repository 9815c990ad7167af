/// Mock implementations for testing
mod mock_archive_fetcher;
mod mock_catalog_repository;
mod mock_progress_reporter;

pub use mock_archive_fetcher::MockArchiveFetcher;
pub use mock_catalog_repository::MockCatalogRepository;
pub use mock_progress_reporter::MockProgressReporter;
