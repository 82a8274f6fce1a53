//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export;

pub use config::{Config, OutputFormat};
pub use export::{ExportDirectory, MessageSource};
