//! The `/start` reply: greeting text plus one button that opens the mini app

use indoc::formatdoc;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, User, WebAppInfo};
use url::Url;

/// Label of the inline button under the greeting
pub const OPEN_MARKET_LABEL: &str = "🛒 Ruslan Marketni ochish";

/// Used when the update carries neither a sender nor a named private chat
pub const FALLBACK_DISPLAY_NAME: &str = "do'stim";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebAppButton {
    pub label: String,
    pub url: Url,
}

/// Reply sent for every `/start`. Built per update and dropped once sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingReply {
    pub text: String,
    pub button: WebAppButton,
}

impl GreetingReply {
    pub fn new(display_name: &str, webapp_url: &Url) -> Self {
        let text = formatdoc!(
            "
            Assalomu alaykum, {name}!
            Ruslan Market botiga xush kelibsiz.

            Mini App orqali treklarni kuzatib boring.",
            name = display_name,
        );

        Self {
            text,
            button: WebAppButton {
                label: OPEN_MARKET_LABEL.to_string(),
                url: webapp_url.clone(),
            },
        }
    }

    /// One row, one web app button.
    pub fn keyboard(&self) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
            self.button.label.clone(),
            WebAppInfo {
                url: self.button.url.clone(),
            },
        )]])
    }
}

/// Name to greet: the sender's full name, else the chat's first name, else a neutral fallback.
pub fn display_name(from: Option<&User>, chat_first_name: Option<&str>) -> String {
    from.map(User::full_name)
        .filter(|name| !name.trim().is_empty())
        .or_else(|| chat_first_name.map(str::to_string))
        .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string())
}
