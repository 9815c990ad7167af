pub mod catalog;
pub mod dependency_descriptor;
pub mod pipeline_state;
pub mod selection;
pub mod starter_query;

pub use catalog::{Catalog, CatalogSource};
pub use dependency_descriptor::{strip_quotes, DependencyDescriptor, MavenCoordinate};
pub use pipeline_state::PipelineState;
pub use selection::Selection;
pub use starter_query::StarterQuery;
