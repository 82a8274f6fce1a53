//! daynotes - Split day-tagged journal messages
//!
//! Turns a chat message with retroactive day tags such as `[yesterday]` or
//! `{wed, thu & fri}` into one dated entry per referenced day, and imports
//! whole channels from a chat export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{split_by_day, Entry};
pub use error::DaynotesError;
