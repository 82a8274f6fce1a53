//! Error types for daynotes

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daynotes application
#[derive(Debug, Error)]
pub enum DaynotesError {
    #[error("Not a chat export directory: {0}")]
    NotAnExport(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaynotesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaynotesError::NotAnExport(_) => 2,
            DaynotesError::InvalidDate(_) => 3,
            DaynotesError::ChannelNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaynotesError::NotAnExport(path) => {
                format!(
                    "Not a chat export directory: {}\n\n\
                    Suggestions:\n\
                    • Point 'daynotes import' at the unzipped export root\n\
                    • The export root must contain users.json and one directory per channel",
                    path.display()
                )
            }
            DaynotesError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: daynotes split --date 2019-10-25 notes.txt",
                    input
                )
            }
            DaynotesError::ChannelNotFound(channel) => {
                format!(
                    "Channel not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the channel name (without the leading #)\n\
                    • Pass --channel to pick another channel\n\
                    • Configure the default: daynotes config channel <name>",
                    channel
                )
            }
            DaynotesError::Config(msg) => {
                if msg.contains("Invalid format") {
                    format!(
                        "{}\n\n\
                        Valid formats: text, json\n\
                        Example: daynotes config format json",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!("{}\n\nValid keys: channel, format, date_format", msg)
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaynotesError
pub type Result<T> = std::result::Result<T, DaynotesError>;
