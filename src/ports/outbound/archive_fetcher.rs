use crate::project_generation::domain::StarterQuery;
use crate::shared::Result;
use std::io::Read;

/// Byte stream of a generated project archive
pub struct FetchedArchive {
    pub reader: Box<dyn Read>,
    /// Size announced by the server, when known
    pub content_length: Option<u64>,
}

impl FetchedArchive {
    pub fn new(reader: Box<dyn Read>, content_length: Option<u64>) -> Self {
        Self {
            reader,
            content_length,
        }
    }
}

impl std::fmt::Debug for FetchedArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchedArchive")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// ArchiveFetcher port for downloading a generated project skeleton
pub trait ArchiveFetcher {
    /// Requests a project archive for the given query
    ///
    /// # Errors
    /// Returns `SetupError::ArchiveFetchFailed` on a connection error or a
    /// non-success HTTP status. Implementations must not retry.
    fn fetch_archive(&self, query: &StarterQuery) -> Result<FetchedArchive>;
}
