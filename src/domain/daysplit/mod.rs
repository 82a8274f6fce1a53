//! Splitting one message into per-day entries
//!
//! Authors mark retroactive notes with a day tag at the start of a line:
//!
//! ```text
//! [thursday] shipped the release
//! {mon, tue & wed} offsite
//! back at my desk
//! ```
//!
//! Untagged lines at the end belong to the day the message was submitted.
//! Tags are resolved bottom-up, each relative to the day of the text below it.

pub mod aggregator;
pub mod chunker;
pub mod extractor;
pub mod resolver;

pub use aggregator::aggregate;
pub use chunker::{is_tag_line, split, split_lines, Chunk};
pub use extractor::{extract, TagContent};
pub use resolver::{resolve, resolve_token, tokenize, TokenResolution};

use crate::domain::Entry;
use chrono::NaiveDate;

/// Split `text`, submitted on `anchor` by `author`, into dated entries
pub fn split_by_day(anchor: NaiveDate, author: &str, text: &str) -> Vec<Entry> {
    let chunks = split(text);
    aggregate(anchor, author, &chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Friday
    fn friday() -> NaiveDate {
        date(2019, 10, 25)
    }

    fn assert_splits(expected: &[(NaiveDate, &str)], message: &str) {
        let entries = split_by_day(friday(), "josh", message);
        let actual: Vec<(NaiveDate, &str)> = entries
            .iter()
            .map(|e| (e.date, e.text.as_str()))
            .collect();
        assert_eq!(actual, expected, "splitting {:?}", message);
    }

    #[test]
    fn test_mixed_brackets() {
        assert_splits(&[(date(2019, 10, 24), "something")], "[yesterday} something");
    }

    #[test]
    fn test_yesterday() {
        assert_splits(&[(date(2019, 10, 24), "something")], "[yesterday] something");
    }

    #[test]
    fn test_explicit_today() {
        assert_splits(&[(friday(), "something")], "[Today] something");
    }

    #[test]
    fn test_tomorrow() {
        assert_splits(&[(date(2019, 10, 26), "something")], "[tomorrow] something");
    }

    #[test]
    fn test_rubbish_tags() {
        assert_splits(&[(friday(), "something")], "[wibble] something");
        assert_splits(&[(friday(), "something")], "[] something");
        assert_splits(&[(friday(), "something")], "[;} something");
        assert_splits(&[(friday(), "something")], "something");
    }

    #[test]
    fn test_todays_weekday() {
        assert_splits(&[(friday(), "something")], "[Friday] something");
    }

    #[test]
    fn test_todays_weekday_multiline() {
        assert_splits(&[(friday(), "something\nmore")], "[Friday] something\nmore\n");
    }

    #[test]
    fn test_just_today() {
        assert_splits(&[(friday(), "bar\nbaz")], "bar\nbaz\n");
    }

    #[test]
    fn test_untagged_text_round_trips_stripped() {
        let message = "  first line  \n\tsecond\n\nthird\n";
        let entries = split_by_day(friday(), "josh", message);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, friday());
        assert_eq!(entries[0].text, "first line\nsecond\n\nthird");
    }

    #[test]
    fn test_multiple_days() {
        assert_splits(
            &[(friday(), "bar"), (date(2019, 10, 24), "foo")],
            "[thursday] foo\n[friday] bar\n",
        );
    }

    #[test]
    fn test_multiple_days_and_today() {
        assert_splits(
            &[
                (friday(), "quix"),
                (date(2019, 10, 24), "baz"),
                (date(2019, 10, 23), "foo\nbar"),
            ],
            "[wednesday] foo\nbar\n[thursday] baz\nquix\n",
        );
    }

    #[test]
    fn test_multiday() {
        assert_splits(
            &[
                (friday(), "foo"),
                (date(2019, 10, 24), "foo"),
                (date(2019, 10, 23), "foo"),
            ],
            "[wed, thu & fri] foo\n",
        );
    }

    #[test]
    fn test_multiday_with_gaps() {
        assert_splits(
            &[
                (friday(), "quix"),
                (date(2019, 10, 24), "baz"),
                (date(2019, 10, 21), "foo"),
                (date(2019, 10, 18), "foo"),
                (date(2019, 10, 17), "bar"),
            ],
            "[thursday] bar\n[friday, monday] foo\n[thursday] baz\nquix\n",
        );
    }

    #[test]
    fn test_leading_untagged_text_follows_next_tag() {
        assert_splits(
            &[(date(2019, 10, 21), "intro\nfoo")],
            "intro\n[monday] foo",
        );
    }

    #[test]
    fn test_reference_closed_on_later_line() {
        // "foo" is unreadable and keeps Friday; "monday" then reads from Friday
        assert_splits(
            &[(friday(), "bar"), (date(2019, 10, 21), "bar")],
            "[monday\nfoo] bar",
        );
    }

    #[test]
    fn test_empty_message() {
        assert!(split_by_day(friday(), "josh", "").is_empty());
    }
}
