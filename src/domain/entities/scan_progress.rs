//! Running counters of a scan run.

/// Progress counters for a single run.
///
/// Snapshots of this struct are handed to the caller after every batch; the
/// live copy belongs to the scanner and is dropped at the end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanProgress {
    /// Page that produced the current batch (1-indexed).
    pub page_number: u32,
    pub total_processed: u64,
    pub total_matched: u64,
    pub current_batch_size: usize,
    pub done: bool,
}

impl ScanProgress {
    /// Returns the initial state: page 1, nothing processed.
    pub fn new() -> Self {
        Self {
            page_number: 1,
            total_processed: 0,
            total_matched: 0,
            current_batch_size: 0,
            done: false,
        }
    }
}

impl Default for ScanProgress {
    fn default() -> Self {
        Self::new()
    }
}
