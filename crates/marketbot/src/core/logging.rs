//! Logging initialization and startup diagnostics

use std::path::Path;

use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use super::config::Settings;
use super::error::AppResult;

/// Initialize logger for both console and file output
///
/// Parent directories of `log_file_path` are created if missing.
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(AppError)` - The log file could not be created or a logger is already set
pub fn init_logger(level: LevelFilter, log_file_path: &Path) -> AppResult<()> {
    if let Some(parent) = log_file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let log_file = fs_err::File::create(log_file_path)?;

    // reqwest/hyper connection chatter drowns out the bot's own lines on every poll
    let config = ConfigBuilder::new()
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .build();

    CombinedLogger::init(vec![
        TermLogger::new(level, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, config, log_file),
    ])?;

    Ok(())
}

/// Logs the effective configuration at application startup, without the token.
pub fn log_startup_configuration(settings: &Settings) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("🛒 Ruslan Market bot configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Web app URL: {}", settings.webapp_url);
    match settings.admin_id {
        Some(admin_id) => log::info!("Admin ID: {}", admin_id),
        None => log::info!("Admin ID: not set"),
    }
    match &settings.bot_api_url {
        Some(url) => log::info!("Bot API URL: {}", url),
        None => log::info!("Bot API URL: default (api.telegram.org)"),
    }
    log::info!("Log file: {}", settings.log_file.display());
}
