/// Domain layer - catalog model, selections and pure text transformations
///
/// Nothing in here performs I/O; adapters feed it text and write back
/// what it returns.
pub mod domain;
pub mod services;
