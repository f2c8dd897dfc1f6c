//! Recording chat

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use teloxide::types::ChatId;
use vidrelay::core::error::{AppError, AppResult};
use vidrelay::ChatReplier;

/// One thing the bot sent to a chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    /// Uploaded file, with the bytes it held at upload time
    Video { path: PathBuf, bytes: Vec<u8> },
}

/// Chat that remembers everything sent to it.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<(ChatId, Sent)>>,
    fail_upload: bool,
    /// Zero-based index of the text reply that fails, if any
    failing_text: Option<usize>,
    text_attempts: AtomicUsize,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chat whose uploads always fail
    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Self::default()
        }
    }

    /// Chat where the text reply after the first `n` fails; later ones go through
    pub fn failing_text_after(n: usize) -> Self {
        Self {
            failing_text: Some(n),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(ChatId, Sent)> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent, in order
    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|(_, sent)| match sent {
                Sent::Text(text) => Some(text),
                Sent::Video { .. } => None,
            })
            .collect()
    }

    /// Uploaded videos, in order
    pub fn videos(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.sent()
            .into_iter()
            .filter_map(|(_, sent)| match sent {
                Sent::Video { path, bytes } => Some((path, bytes)),
                Sent::Text(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatReplier for RecordingChat {
    async fn reply_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        let attempt = self.text_attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing_text == Some(attempt) {
            return Err(AppError::Anyhow(anyhow::anyhow!("Too Many Requests: retry after 5")));
        }

        self.sent.lock().unwrap().push((chat_id, Sent::Text(text.to_string())));
        Ok(())
    }

    async fn upload_video(&self, chat_id: ChatId, video: &Path) -> AppResult<()> {
        if self.fail_upload {
            return Err(AppError::Anyhow(anyhow::anyhow!("Request Entity Too Large")));
        }

        let bytes = std::fs::read(video)?;
        self.sent.lock().unwrap().push((
            chat_id,
            Sent::Video {
                path: video.to_path_buf(),
                bytes,
            },
        ));
        Ok(())
    }
}
