use springboot_setup::prelude::*;
use std::sync::{Arc, Mutex};

const STAGE_PREFIX: &str = "▸ Stage: ";

/// Records every report; clones share the same log so a test can keep a
/// handle after moving the reporter into a use case
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    transfers: Arc<Mutex<Vec<(u64, u64)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Stage labels in the order the pipeline entered them
    pub fn stages(&self) -> Vec<String> {
        self.get_messages()
            .iter()
            .filter_map(|m| m.trim_start().strip_prefix(STAGE_PREFIX))
            .map(str::to_string)
            .collect()
    }

    pub fn transfers(&self) -> Vec<(u64, u64)> {
        self.transfers.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: u64, total: u64, message: Option<&str>) {
        self.transfers.lock().unwrap().push((current, total));
        let line = match message {
            Some(m) => format!("Progress: {}/{} - {}", current, total, m),
            None => format!("Progress: {}/{}", current, total),
        };
        self.messages.lock().unwrap().push(line);
    }

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}
