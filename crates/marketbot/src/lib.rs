//! Ruslan Market - Telegram bot that opens the Ruslan Market mini app
//!
//! The bot answers a single `/start` command with a greeting and an inline
//! button that opens the mini app inside the Telegram client.
//!
//! # Module Structure
//!
//! - `cli`: command-line interface
//! - `core`: configuration, errors and logging
//! - `telegram`: bot setup, the greeting reply and the dispatcher schema

pub mod cli;
pub mod core;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{AppError, AppResult, ConfigError, Settings};
pub use telegram::{GreetingReply, HandlerDeps, schema};
