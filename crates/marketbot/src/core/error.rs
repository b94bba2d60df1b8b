use thiserror::Error;

/// Errors raised while loading and validating [`Settings`](super::Settings).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `BOT_TOKEN` nor `TELOXIDE_TOKEN` (nor `bot_token` in the file) is set
    #[error("bot token is not set (use BOT_TOKEN or TELOXIDE_TOKEN)")]
    MissingToken,

    /// A URL setting could not be parsed
    #[error("invalid {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// Telegram only opens mini apps served over https
    #[error("web app URL must use https with a host, got {0}")]
    InsecureWebAppUrl(url::Url),

    /// Layered configuration could not be extracted
    #[error(transparent)]
    Extract(#[from] figment::Error),
}

/// Centralized error types for the application
///
/// Startup paths return this enum; handlers use
/// [`HandlerError`](crate::telegram::HandlerError) so the dispatcher can log
/// whatever they return.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Global logger was already set
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_mentions_both_variables() {
        let msg = ConfigError::MissingToken.to_string();
        assert!(msg.contains("BOT_TOKEN"));
        assert!(msg.contains("TELOXIDE_TOKEN"));
    }

    #[test]
    fn test_config_error_wraps_into_app_error() {
        let err: AppError = ConfigError::MissingToken.into();
        assert!(matches!(err, AppError::Config(ConfigError::MissingToken)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
