//! Bot configuration
//!
//! Settings are layered with `figment`, lowest priority first:
//! 1. built-in defaults,
//! 2. an optional TOML file (`ruslan-market.toml` unless `--config` says otherwise),
//! 3. environment variables (`TELOXIDE_TOKEN`, then `BOT_TOKEN`, `WEBAPP_URL`,
//!    `ADMIN_ID`, `LOG_FILE`, `BOT_API_URL`).
//!
//! The loaded [`Settings`] are validated once at startup and then handed to
//! the bot as plain values; nothing is read from the environment afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use teloxide::types::UserId;
use url::Url;

use super::error::ConfigError;

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "ruslan-market.toml";

/// Mini app opened by the `/start` button
pub const DEFAULT_WEBAPP_URL: &str = "https://ruslan-market.onrender.com";

/// Log file path
pub const DEFAULT_LOG_FILE: &str = "ruslan-market-bot.log";

/// Environment variables read directly into settings keys
const ENV_KEYS: [&str; 5] = ["BOT_TOKEN", "WEBAPP_URL", "ADMIN_ID", "LOG_FILE", "BOT_API_URL"];

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Must stay above the long polling timeout or every idle poll fails
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Settings as they come out of the providers, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bot_token: Option<String>,
    webapp_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin_id: Option<u64>,
    log_file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bot_api_url: Option<String>,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            webapp_url: DEFAULT_WEBAPP_URL.to_string(),
            admin_id: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            bot_api_url: None,
        }
    }
}

/// Validated runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    bot_token: SecretString,
    /// Mini app opened by the greeting button and the chat menu button
    pub webapp_url: Url,
    /// Privileged user id. Reported at startup; no command depends on it.
    pub admin_id: Option<UserId>,
    pub log_file: PathBuf,
    /// Custom Bot API server, e.g. a local `telegram-bot-api` instance
    pub bot_api_url: Option<Url>,
}

impl Settings {
    /// Builds the provider stack for the given config file.
    pub fn figment(config_path: &Path) -> Figment {
        Figment::from(Serialized::defaults(RawSettings::default()))
            .merge(Toml::file(config_path))
            .merge(Env::raw().only(&["TELOXIDE_TOKEN"]).map(|_| "bot_token".into()))
            .merge(Env::raw().only(&ENV_KEYS))
    }

    /// Loads and validates settings from the config file and environment.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(config_path))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let raw: RawSettings = figment.extract()?;

        let bot_token = raw
            .bot_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let webapp_url = parse_webapp_url(&raw.webapp_url)?;

        let bot_api_url = raw
            .bot_api_url
            .as_deref()
            .map(|url| Url::parse(url).map_err(|source| ConfigError::InvalidUrl { field: "BOT_API_URL", source }))
            .transpose()?;

        Ok(Self {
            bot_token: SecretString::from(bot_token),
            webapp_url,
            admin_id: raw.admin_id.map(UserId),
            log_file: raw.log_file,
            bot_api_url,
        })
    }

    pub fn bot_token(&self) -> &str {
        self.bot_token.expose_secret()
    }
}

/// Parses the mini app address. Telegram rejects web app buttons that are not https.
pub fn parse_webapp_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        field: "WEBAPP_URL",
        source,
    })?;

    if url.scheme() != "https" || url.host_str().is_none() {
        return Err(ConfigError::InsecureWebAppUrl(url));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    fn load_in_jail() -> Result<Settings, figment::Error> {
        Settings::load(Path::new(DEFAULT_CONFIG_FILE)).map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn test_defaults_with_token_from_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("BOT_TOKEN", "123:abc");

            let settings = load_in_jail()?;
            assert_eq!(settings.bot_token(), "123:abc");
            assert_eq!(settings.webapp_url.as_str(), "https://ruslan-market.onrender.com/");
            assert_eq!(settings.admin_id, None);
            assert_eq!(settings.log_file, PathBuf::from(DEFAULT_LOG_FILE));
            assert!(settings.bot_api_url.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_missing_token_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            let err = Settings::load(Path::new(DEFAULT_CONFIG_FILE)).unwrap_err();
            assert!(matches!(err, ConfigError::MissingToken));
            Ok(())
        });
    }

    #[test]
    fn test_blank_token_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("BOT_TOKEN", "   ");

            let err = Settings::load(Path::new(DEFAULT_CONFIG_FILE)).unwrap_err();
            assert!(matches!(err, ConfigError::MissingToken));
            Ok(())
        });
    }

    #[test]
    fn test_teloxide_token_is_accepted_and_bot_token_wins() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("TELOXIDE_TOKEN", "from-teloxide");
            assert_eq!(load_in_jail()?.bot_token(), "from-teloxide");

            jail.set_env("BOT_TOKEN", "from-bot-token");
            assert_eq!(load_in_jail()?.bot_token(), "from-bot-token");
            Ok(())
        });
    }

    #[test]
    fn test_file_values_are_overridden_by_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                bot_token = "file-token"
                webapp_url = "https://file.example.com/app"
                admin_id = 8215056224
                log_file = "logs/bot.log"
                "#,
            )?;

            let settings = load_in_jail()?;
            assert_eq!(settings.bot_token(), "file-token");
            assert_eq!(settings.webapp_url.as_str(), "https://file.example.com/app");
            assert_eq!(settings.admin_id, Some(UserId(8215056224)));
            assert_eq!(settings.log_file, PathBuf::from("logs/bot.log"));

            jail.set_env("WEBAPP_URL", "https://env.example.com/");
            jail.set_env("ADMIN_ID", "42");
            let settings = load_in_jail()?;
            assert_eq!(settings.webapp_url.as_str(), "https://env.example.com/");
            assert_eq!(settings.admin_id, Some(UserId(42)));
            Ok(())
        });
    }

    #[test]
    fn test_custom_bot_api_url() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("BOT_TOKEN", "123:abc");
            jail.set_env("BOT_API_URL", "http://localhost:8081");

            let settings = load_in_jail()?;
            assert_eq!(
                settings.bot_api_url.map(|u| u.to_string()),
                Some("http://localhost:8081/".to_string())
            );
            Ok(())
        });
    }

    #[test]
    fn test_invalid_bot_api_url_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("BOT_TOKEN", "123:abc");
            jail.set_env("BOT_API_URL", "not a url");

            let err = Settings::load(Path::new(DEFAULT_CONFIG_FILE)).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { field: "BOT_API_URL", .. }));
            Ok(())
        });
    }

    #[test]
    fn test_parse_webapp_url_requires_https() {
        assert!(parse_webapp_url("https://ruslan-market.onrender.com").is_ok());
        assert!(matches!(
            parse_webapp_url("http://ruslan-market.onrender.com"),
            Err(ConfigError::InsecureWebAppUrl(_))
        ));
        assert!(matches!(
            parse_webapp_url("ruslan-market.onrender.com"),
            Err(ConfigError::InvalidUrl { field: "WEBAPP_URL", .. })
        ));
    }

    #[test]
    fn test_debug_output_hides_token() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("BOT_TOKEN", "8543158894:super-secret");

            let settings = load_in_jail()?;
            assert!(!format!("{:?}", settings).contains("super-secret"));
            Ok(())
        });
    }

    #[test]
    fn test_request_timeout_outlasts_polling() {
        assert!(network::timeout() > Duration::from_secs(10));
    }
}
