//! Command handler implementations (/start)

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::greeting::{GreetingReply, display_name};

/// Handle /start command
///
/// Sends exactly one message to the originating chat. A transport error is
/// returned as is and ends up in the dispatcher's error handler.
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let name = display_name(msg.from.as_ref(), msg.chat.first_name());
    let reply = GreetingReply::new(&name, &deps.webapp_url);

    let keyboard = reply.keyboard();

    bot.send_message(msg.chat.id, reply.text).reply_markup(keyboard).await?;

    log::info!("Greeting sent to chat {}", msg.chat.id);
    Ok(())
}
