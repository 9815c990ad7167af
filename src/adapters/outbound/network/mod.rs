/// Network adapters for the initializer service
mod caching_catalog_repository;
mod initializr_client;

pub use caching_catalog_repository::CachingCatalogRepository;
pub use initializr_client::{InitializrClient, DEFAULT_STARTER_URL};
