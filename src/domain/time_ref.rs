//! Relative day reference parsing and past-oriented resolution

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A single relative day reference, as written inside a day tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// Most recent occurrence of a weekday
    Weekday(Weekday),
}

impl TimeReference {
    /// Parse a single reference token.
    ///
    /// Returns `None` for anything outside the supported vocabulary; callers
    /// decide how an unknown token degrades.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Some(TimeReference::Today),
            "yesterday" => Some(TimeReference::Yesterday),
            "tomorrow" => Some(TimeReference::Tomorrow),
            day => Self::parse_weekday(day).map(TimeReference::Weekday),
        }
    }

    /// Weekday names, full or abbreviated
    fn parse_weekday(day_str: &str) -> Option<Weekday> {
        let weekday = match day_str {
            "monday" | "mon" => Weekday::Mon,
            "tuesday" | "tue" | "tues" => Weekday::Tue,
            "wednesday" | "wed" | "weds" => Weekday::Wed,
            "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
            "friday" | "fri" => Weekday::Fri,
            "saturday" | "sat" => Weekday::Sat,
            "sunday" | "sun" => Weekday::Sun,
            _ => return None,
        };
        Some(weekday)
    }

    /// Resolve this reference looking into the past from `base_date`.
    ///
    /// Weekday names resolve to their previous occurrence strictly before
    /// `base_date`, so naming the base date's own weekday lands a full week
    /// back. Callers that want "on or before" re-anchor one day later.
    pub fn resolve_past(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Tomorrow => base_date + Duration::days(1),
            TimeReference::Weekday(target_day) => Self::previous_weekday(base_date, *target_day),
        }
    }

    /// Previous occurrence of `target_day` (strictly before `base_date`)
    fn previous_weekday(base_date: NaiveDate, target_day: Weekday) -> NaiveDate {
        let days = (base_date.weekday().num_days_from_monday() + 7
            - target_day.num_days_from_monday())
            % 7;
        let days_back = if days == 0 { 7 } else { days };
        base_date - Duration::days(days_back as i64)
    }
}
