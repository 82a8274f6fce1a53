//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daynotes")]
#[command(about = "Split day-tagged journal messages into per-day entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $DAYNOTES_CONFIG or ./daynotes.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split one message read from a file or stdin
    Split {
        /// Message file ("-" or omitted reads stdin)
        file: Option<PathBuf>,

        /// Submission date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Author name (default: $USER)
        #[arg(short, long)]
        author: Option<String>,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Split every message of a channel in a chat export
    Import {
        /// Export root directory (contains users.json)
        export: PathBuf,

        /// Channel to import (default: configured channel)
        #[arg(short, long)]
        channel: Option<String>,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
