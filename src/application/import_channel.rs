//! Import channel use case
//!
//! Reads every plain message of a channel and splits each one into per-day
//! entries. Entries of different messages are never merged, even when they
//! land on the same day.

use crate::domain::{Entry, UserDirectory};
use crate::error::Result;
use crate::infrastructure::MessageSource;

/// Service importing a whole channel
pub struct ImportChannelService<S: MessageSource> {
    source: S,
}

impl<S: MessageSource> ImportChannelService<S> {
    /// Create a new import service over a message source
    pub fn new(source: S) -> Self {
        ImportChannelService { source }
    }

    /// Import `channel`, returning entries in message order
    pub fn execute(&self, channel: &str) -> Result<Vec<Entry>> {
        let users = UserDirectory::new(&self.source.users()?);
        let messages = self.source.messages(channel)?;
        log::info!(
            "Importing {} messages from #{} ({} users)",
            messages.len(),
            channel,
            users.len()
        );

        let mut skipped = 0;
        let mut entries = Vec::new();
        for message in &messages {
            match message.to_entry(&users) {
                Some(entry) => entries.extend(entry.split_by_day()),
                None => skipped += 1,
            }
        }

        log::debug!(
            "Skipped {} non-note messages, produced {} entries",
            skipped,
            entries.len()
        );
        Ok(entries)
    }
}
