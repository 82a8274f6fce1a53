//! Output formatting utilities

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::OutputFormat;

/// Format entries in the requested output format
pub fn format_entries(entries: &[Entry], format: OutputFormat, date_format: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_entry_list(entries, date_format)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)? + "\n"),
    }
}

/// Format entries for reading: a `date author` heading, then the text
pub fn format_entry_list(entries: &[Entry], date_format: &str) -> String {
    if entries.is_empty() {
        return "No entries found\n".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {}\n{}\n",
                entry.date.format(date_format),
                entry.author,
                entry.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
