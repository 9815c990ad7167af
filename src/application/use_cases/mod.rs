/// Use cases module containing application business logic orchestration
mod generate_project;
mod list_dependencies;

pub use generate_project::{AppliedEdits, GenerateProjectUseCase, ProjectPostProcessor};
pub use list_dependencies::ListDependenciesUseCase;
