//! Reading messages from an on-disk channel export
//!
//! Layout:
//!
//! ```text
//! <root>/users.json              [{"id": "U1", "real_name": "..."}, ...]
//! <root>/<channel>/2019-10-25.json   [{"type": "message", "ts": "...", ...}, ...]
//! ```

use crate::domain::{ChatMessage, ChatUser};
use crate::error::{DaynotesError, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Source of chat users and channel messages
pub trait MessageSource {
    /// All workspace members
    fn users(&self) -> Result<Vec<ChatUser>>;

    /// Every message of a channel, oldest file first
    fn messages(&self, channel: &str) -> Result<Vec<ChatMessage>>;
}

/// Export unpacked on the file system
#[derive(Debug, Clone)]
pub struct ExportDirectory {
    root: PathBuf,
}

impl ExportDirectory {
    /// Open an export root; it must contain `users.json`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.join("users.json").is_file() {
            return Err(DaynotesError::NotAnExport(root));
        }
        Ok(ExportDirectory { root })
    }

    /// Per-day message files of a channel, sorted by name (and so by date)
    fn channel_files(&self, channel: &str) -> Result<Vec<PathBuf>> {
        let channel_dir = self.root.join(channel);
        if !channel_dir.is_dir() {
            return Err(DaynotesError::ChannelNotFound(channel.to_string()));
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&channel_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        Ok(files)
    }
}

impl MessageSource for ExportDirectory {
    fn users(&self) -> Result<Vec<ChatUser>> {
        let contents = fs::read_to_string(self.root.join("users.json"))?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn messages(&self, channel: &str) -> Result<Vec<ChatMessage>> {
        let mut messages = Vec::new();

        for path in self.channel_files(channel)? {
            let contents = fs::read_to_string(&path)?;
            let mut day: Vec<ChatMessage> = serde_json::from_str(&contents).map_err(|e| {
                log::warn!("Malformed export file {}: {}", path.display(), e);
                DaynotesError::Json(e)
            })?;
            log::debug!("Read {} messages from {}", day.len(), path.display());
            messages.append(&mut day);
        }

        Ok(messages)
    }
}
