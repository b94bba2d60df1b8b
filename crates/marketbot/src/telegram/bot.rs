//! Bot initialization utilities
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command list and chat menu button registration

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::{MenuButton, WebAppInfo};
use teloxide::utils::command::BotCommands;
use url::Url;

use crate::core::config::{self, Settings};
use crate::core::AppResult;

/// Label of the chat menu button next to the message input
pub const MENU_BUTTON_LABEL: &str = "Ruslan Market";

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Buyruqlar:")]
pub enum Command {
    // Deep links deliver their payload as the argument; it is ignored.
    #[command(description = "Ruslan Market ilovasini ochish")]
    Start(String),
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - The HTTP client could not be built
pub fn create_bot(settings: &Settings) -> AppResult<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(settings.bot_token(), client);

    let bot = match &settings.bot_api_url {
        Some(url) => {
            log::info!("Using custom Bot API URL: {}", url);
            bot.set_api_url(url.clone())
        }
        None => bot,
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Makes the default chat menu button open the mini app
pub async fn setup_menu_button(bot: &Bot, webapp_url: &Url) -> Result<(), teloxide::RequestError> {
    bot.set_chat_menu_button()
        .menu_button(MenuButton::WebApp {
            text: MENU_BUTTON_LABEL.to_string(),
            web_app: WebAppInfo { url: webapp_url.clone() },
        })
        .await?;

    Ok(())
}
