//! vidrelay - Telegram bot that turns a video link into an uploaded video
//!
//! A user sends a link; the bot asks a download site for the direct file
//! link, downloads the file and sends it back to the chat.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging and the liveness endpoint
//! - `download`: link resolver and video fetcher
//! - `telegram`: commands, dispatcher schema and the per-message relay
//! - `cli`: command-line interface

pub mod cli;
pub mod core;
pub mod download;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{AppError, AppResult, Config};
pub use download::{DownloadedVideo, HttpFetcher, LinkResolver, ScrapeResolver, VideoFetcher};
pub use telegram::{relay_video, schema, ChatReplier, HandlerDeps, RelayOutcome};
