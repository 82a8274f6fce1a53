//! Split message use case

use crate::domain::{split_by_day, Entry};
use chrono::NaiveDate;

/// Service splitting a single message into per-day entries
#[derive(Debug, Default)]
pub struct SplitMessageService;

impl SplitMessageService {
    pub fn new() -> Self {
        SplitMessageService
    }

    /// Split `text`, written by `author` on `date`
    pub fn execute(&self, date: NaiveDate, author: &str, text: &str) -> Vec<Entry> {
        let entries = split_by_day(date, author, text);
        log::debug!(
            "Split message from {} on {} into {} entries",
            author,
            date,
            entries.len()
        );
        entries
    }
}
