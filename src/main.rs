//! Call Centre Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use anyhow::Context;
use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::{error, info, warn};

use call_centre_bot::{
    config::Settings,
    handlers::{schema, BotCommand, ComboDispatcher},
    models::roster::builtin_directory,
    utils::logging,
    CallCentreError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;

    // Initialize logging before validation so a missing token is reported
    let _log_guard = logging::init_logging(&settings.logging)?;

    if let Err(e) = settings.validate() {
        error!(error = %e, severity = %e.severity(), "Invalid configuration, refusing to start");
        return Err(e.into());
    }

    info!("🚀 Starting {}...", call_centre_bot::info());

    let directory = Arc::new(builtin_directory()?);
    if directory.is_empty() {
        error!("Agent roster is empty, refusing to start");
        return Err(CallCentreError::Config("Agent roster is empty".to_string()).into());
    }
    info!(combinations = directory.len(), "Agent directory loaded");
    let dispatcher = Arc::new(ComboDispatcher::new(directory));

    let bot = create_bot(&settings)?;

    if let Err(e) = bot.set_my_commands(BotCommand::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let mut update_dispatcher = Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![dispatcher])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .error_handler(Arc::new(|e: CallCentreError| async move {
            logging::log_handler_error(&e);
        }))
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    update_dispatcher.dispatch().await;

    info!("Call Centre bot has been shut down.");
    Ok(())
}

/// Create the bot, pointing it at a custom Bot API server when configured
fn create_bot(settings: &Settings) -> Result<Bot, CallCentreError> {
    let bot = Bot::new(&settings.bot.token);

    match settings.bot.api_url {
        Some(ref api_url) => {
            info!(api_url = %api_url, "Using custom Bot API server");
            Ok(bot.set_api_url(url::Url::parse(api_url)?))
        }
        None => Ok(bot),
    }
}
