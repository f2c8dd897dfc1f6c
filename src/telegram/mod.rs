//! Telegram bot integration and handlers

pub mod bot;
pub mod messages;
pub mod relay;
pub mod schema;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use relay::{relay_video, ChatReplier, RelayOutcome, RequestStage};
pub use schema::{schema, HandlerDeps, HandlerError};
pub use teloxide::Bot;
