/// Crate-wide Result alias.
///
/// Domain failures are `SetupError` values carried inside `anyhow::Error`,
/// so callers can still `downcast_ref::<SetupError>()` to classify them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
