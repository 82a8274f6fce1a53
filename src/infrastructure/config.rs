//! Configuration management

use crate::error::{DaynotesError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "daynotes.toml";

/// How split entries are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Heading line per entry followed by its text
    #[default]
    Text,
    /// JSON array of `{date, author, text}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Channel imported when `--channel` is not given
    pub channel: String,
    pub format: OutputFormat,
    /// strftime pattern for dates in text output
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            channel: "daynotes".to_string(),
            format: OutputFormat::Text,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Config {
    /// Pick the config file: explicit path, then DAYNOTES_CONFIG, then
    /// `daynotes.toml` in the current directory
    pub fn locate(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        std::env::var("DAYNOTES_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Load config from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(DaynotesError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            DaynotesError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;
        check_date_format(&config.date_format)?;

        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "channel" => Ok(self.channel.clone()),
            "format" => Ok(self.format.to_string()),
            "date_format" => Ok(self.date_format.clone()),
            _ => Err(DaynotesError::Config(format!(
                "Unknown config key: '{}'",
                key
            ))),
        }
    }

    /// Set a single value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "channel" => {
                let channel = value.trim().trim_start_matches('#');
                if channel.is_empty() {
                    return Err(DaynotesError::Config(
                        "Channel name cannot be empty".to_string(),
                    ));
                }
                self.channel = channel.to_string();
            }
            "format" => {
                self.format = OutputFormat::from_str(value).map_err(DaynotesError::Config)?;
            }
            "date_format" => {
                check_date_format(value)?;
                self.date_format = value.to_string();
            }
            _ => {
                return Err(DaynotesError::Config(format!(
                    "Unknown config key: '{}'",
                    key
                )));
            }
        }
        Ok(())
    }
}

/// Reject strftime patterns that cannot render a bare date (no time or zone)
fn check_date_format(pattern: &str) -> Result<()> {
    let invalid = || DaynotesError::Config(format!("Invalid date format: '{}'", pattern));

    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let sample = NaiveDate::from_ymd_opt(2019, 10, 25).ok_or_else(invalid)?;
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format_with_items(items.iter()))
        .map_err(|_| invalid())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.channel, "daynotes");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("daynotes.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("daynotes.toml");
        let mut config = Config::default();
        config.set("channel", "#standup").unwrap();
        config.set("format", "JSON").unwrap();

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.channel, "standup");
        assert_eq!(loaded.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daynotes.toml");
        fs::write(&path, "channel = \"journal\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.channel, "journal");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daynotes.toml");
        fs::write(&path, "format = \"yaml\"\n").unwrap();

        match Config::load(&path) {
            Err(DaynotesError::Config(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_time_only_date_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daynotes.toml");
        fs::write(&path, "date_format = \"%H:%M:%S\"\n").unwrap();

        match Config::load(&path) {
            Err(DaynotesError::Config(msg)) => assert!(msg.contains("Invalid date format")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        config.set("date_format", "%d-%m-%Y").unwrap();
        assert_eq!(config.get("date_format").unwrap(), "%d-%m-%Y");
        assert_eq!(config.get("format").unwrap(), "text");

        assert!(config.set("format", "yaml").is_err());
        assert!(config.set("date_format", "%Y-%").is_err());
        assert!(config.set("date_format", "%H:%M").is_err());
        assert!(config.set("date_format", "%Z").is_err());
        assert_eq!(config.get("date_format").unwrap(), "%d-%m-%Y");
        assert!(config.set("channel", "  ").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(Config::locate(Some(explicit.as_path())), explicit);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("xml").is_err());
    }
}
