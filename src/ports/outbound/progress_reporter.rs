/// ProgressReporter port for reporting progress during a pipeline run
///
/// This port abstracts user feedback (e.g., to stderr) so stdout stays
/// free for command output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a transfer
    ///
    /// # Arguments
    /// * `current` - Bytes (or items) done so far
    /// * `total` - Expected total, `0` when unknown
    /// * `message` - Optional message to include
    fn report_progress(&self, current: u64, total: u64, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
