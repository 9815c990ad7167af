use springboot_setup::prelude::*;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// Mock ArchiveFetcher serving an in-memory zip and recording queries
#[derive(Clone)]
pub struct MockArchiveFetcher {
    archive: Vec<u8>,
    pub queries: Arc<Mutex<Vec<StarterQuery>>>,
}

impl MockArchiveFetcher {
    pub fn new(archive: Vec<u8>) -> Self {
        Self {
            archive,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn queries(&self) -> Vec<StarterQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl ArchiveFetcher for MockArchiveFetcher {
    fn fetch_archive(&self, query: &StarterQuery) -> Result<FetchedArchive> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(FetchedArchive::new(
            Box::new(Cursor::new(self.archive.clone())),
            Some(self.archive.len() as u64),
        ))
    }
}
