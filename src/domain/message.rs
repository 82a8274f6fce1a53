//! Chat messages and the authors behind them

use crate::domain::Entry;
use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;

/// One message as it appears in a channel export
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Submission time as fractional epoch seconds, e.g. `1571997600.000200`
    pub ts: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub thread_ts: Option<String>,
}

impl ChatMessage {
    /// Plain top-level messages only: no thread traffic, no join/bot/edit events
    pub fn is_plain(&self) -> bool {
        self.thread_ts.is_none() && self.kind == "message" && self.subtype.is_none()
    }

    /// Local calendar day the message was submitted on
    pub fn submission_date(&self) -> Option<NaiveDate> {
        let (secs, frac) = self.ts.split_once('.').unwrap_or((self.ts.as_str(), "0"));
        let secs: i64 = secs.parse().ok()?;
        let micros: u32 = format!("{:0<6}", frac).get(..6)?.parse().ok()?;

        DateTime::from_timestamp(secs, micros * 1_000)
            .map(|utc| utc.with_timezone(&Local).date_naive())
    }

    /// Convert to an entry dated on submission, or `None` if the message
    /// should not be treated as a day note
    pub fn to_entry(&self, users: &UserDirectory) -> Option<Entry> {
        if !self.is_plain() {
            return None;
        }

        let Some(date) = self.submission_date() else {
            log::warn!("Skipping message with unreadable timestamp '{}'", self.ts);
            return None;
        };

        Some(Entry::new(date, users.display_name(self.user.as_deref()), &self.text))
    }
}

/// A workspace member as listed in an export's `users.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub profile: Option<ChatUserProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatUserProfile {
    #[serde(default)]
    pub real_name: Option<String>,
}

impl ChatUser {
    /// Best available human-readable name
    pub fn display_name(&self) -> &str {
        let profile_name = self.profile.as_ref().and_then(|p| p.real_name.as_deref());

        [self.real_name.as_deref(), profile_name, self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

/// Lookup from user id to display name
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new(users: &[ChatUser]) -> Self {
        let names = users
            .iter()
            .map(|user| (user.id.clone(), user.display_name().to_string()))
            .collect();
        UserDirectory { names }
    }

    /// Display name for a user id; unknown ids are shown as-is
    pub fn display_name(&self, user_id: Option<&str>) -> String {
        match user_id {
            Some(id) => self.names.get(id).cloned().unwrap_or_else(|| id.to_string()),
            None => "unknown".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
