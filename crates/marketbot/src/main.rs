use anyhow::Result;
use dotenvy::dotenv;

use ruslan_market_bot::cli::{Cli, Commands};
use ruslan_market_bot::core::{AppResult, Settings, init_logger};
use ruslan_market_bot::telegram::run_bot;

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (configuration, logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {}", panic_info);
    }));

    // Load environment variables from .env if present
    let _ = dotenv();

    match cli.command {
        Some(Commands::Run { keep_pending }) => {
            let settings = load_settings_with_logger(&cli)?;
            log::info!("Running bot in normal mode");
            run_bot(&settings, !keep_pending).await?;
        }
        Some(Commands::RunStaging { keep_pending }) => {
            // Staging values must be in place before settings are read
            let staging = dotenvy::from_filename(".env.staging");
            let settings = load_settings_with_logger(&cli)?;
            if let Err(e) = staging {
                log::warn!("Failed to load .env.staging: {}", e);
            }
            log::info!("Running bot in staging mode");
            run_bot(&settings, !keep_pending).await?;
        }
        Some(Commands::CheckConfig) => check_config(&cli)?,
        None => {
            let settings = load_settings_with_logger(&cli)?;
            log::info!("No command specified, running bot in default mode");
            run_bot(&settings, true).await?;
        }
    }

    Ok(())
}

/// Loads settings, then starts logging to the configured file.
fn load_settings_with_logger(cli: &Cli) -> AppResult<Settings> {
    let settings = Settings::load(&cli.config)?;
    init_logger(cli.log_level.into(), &settings.log_file)?;
    Ok(settings)
}

/// Validates configuration and prints what the bot would run with.
fn check_config(cli: &Cli) -> AppResult<()> {
    let settings = Settings::load(&cli.config)?;

    println!("✅ Configuration is valid");
    println!("Bot token:   <redacted>");
    println!("Web app URL: {}", settings.webapp_url);
    println!(
        "Admin ID:    {}",
        settings.admin_id.map(|id| id.to_string()).unwrap_or_else(|| "not set".to_string())
    );
    println!(
        "Bot API URL: {}",
        settings
            .bot_api_url
            .as_ref()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "default".to_string())
    );
    println!("Log file:    {}", settings.log_file.display());

    Ok(())
}
