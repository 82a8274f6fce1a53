//! Domain layer - Business logic and domain models

pub mod daysplit;
pub mod entry;
pub mod message;
pub mod time_ref;

pub use daysplit::split_by_day;
pub use entry::Entry;
pub use message::{ChatMessage, ChatUser, UserDirectory};
pub use time_ref::TimeReference;
