/// Filesystem adapters: catalog override files, archive unpacking and
/// project patching
mod catalog_file_reader;
mod project_patcher;
mod zip_materializer;

pub use catalog_file_reader::{catalog_file_path, read_catalog_file};
pub use project_patcher::FileSystemProjectPatcher;
pub use zip_materializer::ZipProjectMaterializer;
