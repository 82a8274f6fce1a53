//! Dated journal entry

use chrono::NaiveDate;
use serde::Serialize;

/// A journal entry: text written by an author for a given day.
///
/// As input the date is the day the message was submitted; the entries
/// produced by [`Entry::split_by_day`] carry the day each fragment refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub author: String,
    pub text: String,
}

impl Entry {
    pub fn new(date: NaiveDate, author: impl Into<String>, text: impl Into<String>) -> Self {
        Entry {
            date,
            author: author.into(),
            text: text.into(),
        }
    }

    /// Split this entry at its day tags into one entry per referenced day
    pub fn split_by_day(&self) -> Vec<Entry> {
        super::daysplit::split_by_day(self.date, &self.author, &self.text)
    }
}
