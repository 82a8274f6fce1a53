//! Resolving day reference lists against a moving cursor date

use crate::domain::TimeReference;
use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Separators between references in one tag: `and`, `;`, `,`, `&`, whitespace
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?:\band\b|[;,&\s])+").unwrap())
}

/// Outcome of resolving a single reference token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenResolution {
    Resolved(NaiveDate),
    /// The token carried no usable date; the cursor stays where it is
    Unresolved,
}

/// Split a raw reference list into its non-empty tokens, in written order
pub fn tokenize(reference: &str) -> Vec<&str> {
    separator_regex()
        .split(reference)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Resolve one token relative to `cursor`.
///
/// A reference landing a week or more before the cursor is re-read from the
/// day after the cursor, so naming the cursor's own weekday means the cursor
/// itself rather than a week earlier.
pub fn resolve_token(cursor: NaiveDate, token: &str) -> TokenResolution {
    let Some(reference) = TimeReference::parse(token) else {
        return TokenResolution::Unresolved;
    };

    let parsed = reference.resolve_past(cursor);
    if cursor - Duration::days(7) >= parsed {
        return TokenResolution::Resolved(reference.resolve_past(cursor + Duration::days(1)));
    }

    TokenResolution::Resolved(parsed)
}

/// Resolve a raw reference list into dates.
///
/// Tokens are read right to left, each one relative to the date resolved for
/// the token after it, so `wed, thu & fri` walks back one day at a time. The
/// result is in that same order: the last written token's date comes first.
/// Never empty; an empty or unreadable list resolves to `anchor`.
pub fn resolve(anchor: NaiveDate, reference: &str) -> Vec<NaiveDate> {
    let tokens = tokenize(reference);
    if tokens.is_empty() {
        return vec![anchor];
    }

    let (dates, _cursor) = tokens.iter().rev().fold(
        (Vec::with_capacity(tokens.len()), anchor),
        |(mut dates, cursor), token| {
            let next = match resolve_token(cursor, token) {
                TokenResolution::Resolved(date) => date,
                TokenResolution::Unresolved => cursor,
            };
            dates.push(next);
            (dates, next)
        },
    );

    dates
}
