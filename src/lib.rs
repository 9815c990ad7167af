//! springboot-setup - Spring Boot project generation tool
//!
//! This library fetches a project skeleton from a Spring Initializr service,
//! unpacks it into a target directory and applies optional post-processing
//! edits, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`project_generation`): Catalog, selection and patch logic
//! - **Application Layer** (`application`): Use cases and request/result DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): Environment and config-file settings
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use springboot_setup::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let settings = SetupSettings::from_environment(None)?;
//! let client = InitializrClient::new(settings.starter_url.clone())?;
//! let catalog_repository = CachingCatalogRepository::new(InitializrClient::new(
//!     settings.starter_url.clone(),
//! )?);
//!
//! let use_case = GenerateProjectUseCase::new(
//!     &catalog_repository,
//!     client,
//!     ZipProjectMaterializer::new(),
//!     FileSystemProjectPatcher::new(),
//!     StderrProgressReporter::new(),
//!     settings.catalog_source(),
//! );
//!
//! let request = GenerationRequest::builder("demo", settings.default_version.clone())
//!     .selection(Selection::Id("web".to_string()))
//!     .port(9090)
//!     .build()?;
//! let result = use_case.execute(&request)?;
//! println!("{}", result.message);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod project_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemProjectPatcher, ZipProjectMaterializer,
    };
    pub use crate::adapters::outbound::network::{
        CachingCatalogRepository, InitializrClient, DEFAULT_STARTER_URL,
    };
    pub use crate::application::dto::{GenerationRequest, GenerationResult};
    pub use crate::application::use_cases::{GenerateProjectUseCase, ListDependenciesUseCase};
    pub use crate::config::SetupSettings;
    pub use crate::ports::outbound::{
        ArchiveFetcher, CatalogRepository, FetchedArchive, ProgressReporter, ProjectMaterializer,
        ProjectPatcher,
    };
    pub use crate::project_generation::domain::{
        Catalog, CatalogSource, DependencyDescriptor, MavenCoordinate, PipelineState, Selection,
        StarterQuery,
    };
    pub use crate::project_generation::services::{SelectionResolver, ServletInitializerPatch};
    pub use crate::shared::error::{ExitCode, SetupError};
    pub use crate::shared::Result;
}
