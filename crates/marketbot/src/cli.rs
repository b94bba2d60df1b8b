use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use simplelog::LevelFilter;

use crate::core::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "ruslan-market-bot")]
#[command(author, version, about = "Telegram bot that opens the Ruslan Market mini app", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (missing file is fine, env vars still apply)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log verbosity for console and file output
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling
    Run {
        /// Process updates that queued up while the bot was offline
        #[arg(long)]
        keep_pending: bool,
    },

    /// Run the bot in staging mode (also loads .env.staging)
    RunStaging {
        /// Process updates that queued up while the bot was offline
        #[arg(long)]
        keep_pending: bool,
    },

    /// Load and validate the configuration, print a summary and exit
    CheckConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
