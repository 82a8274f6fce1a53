//! Application layer - Use cases and orchestration

pub mod import_channel;
pub mod manage_config;
pub mod split_message;

pub use import_channel::ImportChannelService;
pub use manage_config::ConfigService;
pub use split_message::SplitMessageService;
