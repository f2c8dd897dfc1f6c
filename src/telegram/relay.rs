//! Per-message relay: validate → resolve → download → upload
//!
//! One inbound text walks through the stages below and ends in exactly one
//! [`RelayOutcome`]. The chat gets a status reply on every transition. The
//! downloaded file lives in a [`DownloadedVideo`] guard, so it is removed on
//! every exit path, including a failed upload.
//!
//! [`DownloadedVideo`]: crate::download::DownloadedVideo

use async_trait::async_trait;
use std::path::Path;
use strum::Display;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::core::error::AppResult;
use crate::download::{LinkResolver, VideoFetcher};
use crate::telegram::messages;

/// Where a request currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RequestStage {
    Received,
    Validated,
    Resolving,
    Downloading,
    Uploading,
    Done,
}

/// How a request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Video uploaded and the temp file removed
    Done,
    /// Text did not start with http:// or https://
    InvalidUrl,
    /// Resolver found nothing
    NoLinkFound,
    /// Fetcher failed
    DownloadFailed,
    /// Unexpected error; `stage` is where it happened
    Failed { stage: RequestStage },
}

/// Outbound side of the chat: status texts and the final video.
#[async_trait]
pub trait ChatReplier: Send + Sync {
    async fn reply_text(&self, chat_id: ChatId, text: &str) -> AppResult<()>;

    /// Sends the file as a streamable video attachment.
    async fn upload_video(&self, chat_id: ChatId, video: &Path) -> AppResult<()>;
}

#[async_trait]
impl ChatReplier for Bot {
    async fn reply_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn upload_video(&self, chat_id: ChatId, video: &Path) -> AppResult<()> {
        self.send_video(chat_id, InputFile::file(video.to_path_buf()))
            .supports_streaming(true)
            .await?;
        Ok(())
    }
}

/// Only absolute http(s) links are accepted.
pub fn looks_like_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Handles one candidate video URL from `chat_id`.
///
/// Never returns an error: anything unexpected is logged with the stage it
/// happened in and reported to the user as a generic failure.
pub async fn relay_video<C, R, F>(chat: &C, resolver: &R, fetcher: &F, chat_id: ChatId, text: &str) -> RelayOutcome
where
    C: ChatReplier + ?Sized,
    R: LinkResolver + ?Sized,
    F: VideoFetcher + ?Sized,
{
    let mut stage = RequestStage::Received;

    match run_stages(chat, resolver, fetcher, chat_id, text, &mut stage).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("❌ Request from chat {} failed at stage {}: {:?}", chat_id, stage, e);
            if let Err(report_err) = chat.reply_text(chat_id, messages::UNEXPECTED_ERROR).await {
                log::error!("Failed to report error to chat {}: {}", chat_id, report_err);
            }
            RelayOutcome::Failed { stage }
        }
    }
}

async fn run_stages<C, R, F>(
    chat: &C,
    resolver: &R,
    fetcher: &F,
    chat_id: ChatId,
    text: &str,
    stage: &mut RequestStage,
) -> AppResult<RelayOutcome>
where
    C: ChatReplier + ?Sized,
    R: LinkResolver + ?Sized,
    F: VideoFetcher + ?Sized,
{
    let url = text.trim();
    if !looks_like_url(url) {
        log::info!("Rejected non-URL text from chat {}", chat_id);
        chat.reply_text(chat_id, messages::INVALID_URL).await?;
        return Ok(RelayOutcome::InvalidUrl);
    }
    *stage = RequestStage::Validated;
    log::info!("📨 Chat {} requested {}", chat_id, url);

    chat.reply_text(chat_id, messages::PROCESSING).await?;
    *stage = RequestStage::Resolving;

    let Some(link) = resolver.resolve(url).await else {
        chat.reply_text(chat_id, messages::NO_LINK_FOUND).await?;
        return Ok(RelayOutcome::NoLinkFound);
    };

    *stage = RequestStage::Downloading;
    chat.reply_text(chat_id, messages::DOWNLOADING).await?;

    let Some(video) = fetcher.fetch(&link).await else {
        chat.reply_text(chat_id, messages::DOWNLOAD_ERROR).await?;
        return Ok(RelayOutcome::DownloadFailed);
    };

    *stage = RequestStage::Uploading;
    chat.reply_text(chat_id, messages::UPLOADING).await?;
    chat.upload_video(chat_id, video.path()).await?;

    log::info!("📤 Sent {} bytes to chat {}", video.size_bytes(), chat_id);
    drop(video);
    *stage = RequestStage::Done;

    Ok(RelayOutcome::Done)
}
