use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;

use vidrelay::cli::{Cli, Commands};
use vidrelay::core::config::{self, Config};
use vidrelay::core::liveness::start_liveness_server;
use vidrelay::core::logging::{init_logger, level_from_str};
use vidrelay::download::{HttpFetcher, LinkResolver, ScrapeResolver};
use vidrelay::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics from handler tasks instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Load environment variables from .env if present
    let _ = dotenv();

    let log_file = env::var("LOG_FILE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    init_logger(level_from_str(env::var("LOG_LEVEL").ok().as_deref()), log_file.as_deref())?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Resolve { url }) => run_resolve(url).await,
    }
}

/// Run the bot: liveness endpoint plus the long-polling dispatcher
async fn run_bot() -> Result<()> {
    // Missing token aborts here, before anything starts listening
    let config = Config::from_env()?;

    log::info!("Resolver endpoint: {}", config.download_website);
    log::info!("Temp files directory: {}", config.temp_dir.display());

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = start_liveness_server(port).await {
            log::error!("Liveness server error: {}", e);
        }
    });

    let bot = create_bot(&config.bot_token, config.bot_api_url.as_ref())?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let deps = HandlerDeps::new(
        Arc::new(ScrapeResolver::new(config.download_website.clone(), config::BROWSER_USER_AGENT)?),
        Arc::new(HttpFetcher::new(config.temp_dir.clone())?),
    );

    log::info!("Bot is running...");

    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Run the resolver once and print the direct link
async fn run_resolve(url: String) -> Result<()> {
    let endpoint = config::download_website_from_env()?;
    let resolver = ScrapeResolver::new(endpoint, config::BROWSER_USER_AGENT)?;

    match resolver.resolve(&url).await {
        Some(link) => {
            println!("{}", link);
            Ok(())
        }
        None => Err(anyhow::anyhow!("No download link found for {}", url)),
    }
}
