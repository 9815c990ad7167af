mod catalog_parser;
mod pom_editor;
mod properties_editor;
mod selection_resolver;
mod servlet_initializer_patch;

pub use catalog_parser::CatalogParser;
pub use pom_editor::PomEditor;
pub use properties_editor::PropertiesEditor;
pub use selection_resolver::{ResolvedSelection, SelectionResolver};
pub use servlet_initializer_patch::ServletInitializerPatch;
