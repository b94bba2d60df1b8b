//! Telegram bot integration and handlers

pub mod bot;
pub mod dispatch;
pub mod greeting;
pub mod handlers;

// Re-exports for convenience
pub use bot::{Command, create_bot, setup_bot_commands, setup_menu_button};
pub use dispatch::{BotDispatcher, build_dispatcher, polling_listener, run_bot, run_dispatcher};
pub use greeting::{GreetingReply, WebAppButton, display_name};
pub use handlers::{HandlerDeps, HandlerError, schema};
