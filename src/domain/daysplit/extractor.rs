//! Separating a chunk's day reference from its body

use super::chunker::{tag_regex, Chunk};

/// The day reference and body text of one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagContent {
    /// Raw reference list between the brackets, empty for untagged chunks
    pub reference: String,
    pub body: String,
}

/// Extract the tag reference and body from a chunk.
///
/// Lines are trimmed and rejoined with `\n` before matching, so the body of a
/// multi-line chunk keeps its line structure but not its indentation.
pub fn extract(chunk: &Chunk<'_>) -> TagContent {
    let message = chunk
        .lines()
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    match tag_regex().captures(&message) {
        Some(caps) => TagContent {
            reference: caps["dateref"].to_string(),
            body: caps["body"].to_string(),
        },
        None => TagContent {
            reference: String::new(),
            body: message,
        },
    }
}
