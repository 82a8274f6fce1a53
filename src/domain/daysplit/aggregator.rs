//! Grouping chunk bodies into per-day entries

use super::chunker::Chunk;
use super::extractor::extract;
use super::resolver::resolve;
use crate::domain::Entry;
use chrono::NaiveDate;

/// Body fragments collected for one day, newest chunk first
#[derive(Debug)]
struct DayFragments {
    date: NaiveDate,
    fragments: Vec<String>,
}

/// Turn chunks into dated entries for `author`.
///
/// Chunks are visited newest (last) first: each chunk's references resolve
/// relative to the day of the chunk below it, starting from `anchor`. Entries
/// come out in the order their days were first reached on that walk, and the
/// fragments within one day are joined in source order.
pub fn aggregate(anchor: NaiveDate, author: &str, chunks: &[Chunk<'_>]) -> Vec<Entry> {
    let (days, _cursor) = chunks.iter().rev().fold(
        (Vec::<DayFragments>::new(), anchor),
        |(mut days, cursor), chunk| {
            let content = extract(chunk);
            let dates = resolve(cursor, &content.reference);

            for &date in &dates {
                match days.iter_mut().find(|day| day.date == date) {
                    Some(day) => day.fragments.push(content.body.clone()),
                    None => days.push(DayFragments {
                        date,
                        fragments: vec![content.body.clone()],
                    }),
                }
            }

            // resolve() never returns an empty list
            let next = dates.first().copied().unwrap_or(cursor);
            (days, next)
        },
    );

    days.into_iter()
        .map(|day| {
            let text = day
                .fragments
                .into_iter()
                .rev()
                .collect::<Vec<_>>()
                .join("\n");
            Entry::new(day.date, author, text)
        })
        .collect()
}
