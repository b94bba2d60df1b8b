//! Telegram bot handler tree configuration
//!
//! This module provides the dispatcher schema for the bot. Integration tests
//! drive the same handler tree as production through `teloxide_tests`.

mod commands;
mod schema;
mod types;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
