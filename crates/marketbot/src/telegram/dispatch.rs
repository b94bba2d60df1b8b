//! Long polling dispatcher: construction and the run loop
//!
//! The binary only loads settings and logging; everything from `get_me` to
//! the dispatcher returning after Ctrl-C lives here so it can be driven from tests.

use teloxide::dispatching::{DefaultKey, Dispatcher};
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use super::bot::{create_bot, setup_bot_commands, setup_menu_button};
use super::handlers::{HandlerDeps, HandlerError, schema};
use crate::core::logging::log_startup_configuration;
use crate::core::{AppResult, Settings};

pub type BotDispatcher = Dispatcher<Bot, HandlerError, DefaultKey>;

/// Builds the dispatcher around the production handler tree. Ctrl-C stops it.
pub fn build_dispatcher(bot: Bot, deps: HandlerDeps) -> BotDispatcher {
    Dispatcher::builder(bot, schema(deps)).enable_ctrlc_handler().build()
}

/// `drop_pending` discards updates that arrived while the bot was offline.
pub fn polling_listener(bot: Bot, drop_pending: bool) -> Polling<Bot> {
    let mut polling = Polling::builder(bot);
    if drop_pending {
        polling = polling.drop_pending_updates();
    }
    polling.build()
}

/// Dispatches until the dispatcher is shut down (Ctrl-C or its shutdown token).
pub async fn run_dispatcher(dispatcher: &mut BotDispatcher, listener: Polling<Bot>) -> AppResult<()> {
    log::info!("================================================");
    log::info!("📡 Starting bot in long polling mode");
    log::info!("================================================");

    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Runs the bot with long polling until Ctrl-C.
pub async fn run_bot(settings: &Settings, drop_pending: bool) -> AppResult<()> {
    log_startup_configuration(settings);

    let bot = create_bot(settings)?;

    let me = bot.get_me().await?;
    log::info!("Authorized as @{}", me.username());

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }
    if let Err(e) = setup_menu_button(&bot, &settings.webapp_url).await {
        log::warn!("Failed to set chat menu button: {}", e);
    }

    let listener = polling_listener(bot.clone(), drop_pending);
    let mut dispatcher = build_dispatcher(bot, HandlerDeps::from_settings(settings));

    run_dispatcher(&mut dispatcher, listener).await
}
