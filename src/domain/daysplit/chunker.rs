//! Splitting message text into day chunks at tag lines

use regex::Regex;
use std::sync::OnceLock;

/// Regex for a day tag: `[ref] body`, `{ref} body`, mismatched brackets tolerated.
///
/// The reference runs to the first closing bracket, which may sit on a later
/// line when matched against a whole chunk.
pub(crate) fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)^[\[{](?P<dateref>[^\]}]*?)[\]}]\s*(?P<body>.*)").unwrap()
    })
}

/// Does this line open a new day?
pub fn is_tag_line(line: &str) -> bool {
    tag_regex().is_match(line)
}

/// A contiguous, non-empty run of message lines belonging to one day tag
/// (or to no tag at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Chunk<'a> {
    fn new(lines: Vec<&'a str>) -> Self {
        debug_assert!(!lines.is_empty(), "chunks are never empty");
        Chunk { lines }
    }

    /// Lines in source order, trailing newlines included
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }
}

/// Split raw message text into chunks
pub fn split(text: &str) -> Vec<Chunk<'_>> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    split_lines(&lines)
}

/// Split lines into chunks.
///
/// Untagged lines after the last tag line form their own trailing chunk
/// (they were written on the submission day). Every earlier line belongs to
/// the closest tag line above it; untagged lines before the first tag line
/// form a leading chunk of their own.
pub fn split_lines<'a>(lines: &[&'a str]) -> Vec<Chunk<'a>> {
    let trailing_start = lines
        .iter()
        .rposition(|line| is_tag_line(line))
        .map_or(0, |last_tag| last_tag + 1);
    let (historic, trailing) = lines.split_at(trailing_start);

    let mut chunks: Vec<Vec<&'a str>> = Vec::new();
    for &line in historic {
        if is_tag_line(line) || chunks.is_empty() {
            chunks.push(vec![line]);
        } else if let Some(current) = chunks.last_mut() {
            current.push(line);
        }
    }

    if !trailing.is_empty() {
        chunks.push(trailing.to_vec());
    }

    chunks.into_iter().map(Chunk::new).collect()
}
