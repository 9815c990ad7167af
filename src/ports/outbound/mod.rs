/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the initializer service, the filesystem and the console.
pub mod archive_fetcher;
pub mod catalog_repository;
pub mod progress_reporter;
pub mod project_materializer;
pub mod project_patcher;

pub use archive_fetcher::{ArchiveFetcher, FetchedArchive};
pub use catalog_repository::CatalogRepository;
pub use progress_reporter::ProgressReporter;
pub use project_materializer::ProjectMaterializer;
pub use project_patcher::ProjectPatcher;
