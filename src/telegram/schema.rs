//! Dispatcher schema and handler chain builders

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use crate::download::{LinkResolver, VideoFetcher};
use crate::telegram::bot::{is_command, Command};
use crate::telegram::messages;
use crate::telegram::relay::relay_video;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub resolver: Arc<dyn LinkResolver>,
    pub fetcher: Arc<dyn VideoFetcher>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(resolver: Arc<dyn LinkResolver>, fetcher: Arc<dyn VideoFetcher>) -> Self {
        Self { resolver, fetcher }
    }
}

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Known commands are answered directly; any other text message that is not
/// a command goes through the video relay.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler())
        .branch(message_handler(deps))
}

/// Handler for /start and /help
fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        |bot: Bot, msg: Message, cmd: Command| async move {
            log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

            match cmd {
                Command::Start(_payload) => {
                    bot.send_message(msg.chat.id, messages::WELCOME).await?;
                }
                Command::Help => {
                    bot.send_message(msg.chat.id, Command::descriptions().to_string())
                        .await?;
                }
            }
            Ok(())
        },
    ))
}

/// Handler for plain text: every non-command text is a candidate video URL
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some_and(|text| !is_command(text)))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                let outcome = relay_video(
                    &bot,
                    deps.resolver.as_ref(),
                    deps.fetcher.as_ref(),
                    msg.chat.id,
                    text,
                )
                .await;

                log::info!("Request from chat {} finished: {:?}", msg.chat.id, outcome);
                Ok(())
            }
        })
}
