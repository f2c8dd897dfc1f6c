//! Fetcher — downloads the resolved video into a per-request temp file
//!
//! The whole body is read into memory and written out in one go. No ranges,
//! no resume, no size cap.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use tempfile::TempPath;

use crate::core::error::{AppError, AppResult};

/// Prefix of every video file the bot writes
pub const TEMP_FILE_PREFIX: &str = "vidrelay-";

/// A downloaded video on local disk.
///
/// Each value owns a uniquely named file; the file is removed when the value
/// is dropped, whichever way the request ends.
#[derive(Debug)]
pub struct DownloadedVideo {
    path: TempPath,
    len: u64,
}

impl DownloadedVideo {
    /// Writes `bytes` to a fresh `vidrelay-XXXXXX.mp4` file inside `dir`.
    pub async fn write_in(dir: &Path, bytes: &[u8]) -> AppResult<Self> {
        fs_err::tokio::create_dir_all(dir).await?;

        let path = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(".mp4")
            .tempfile_in(dir)?
            .into_temp_path();

        fs_err::tokio::write(path.to_path_buf(), bytes).await?;

        Ok(Self {
            path,
            len: bytes.len() as u64,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the file in bytes
    pub fn size_bytes(&self) -> u64 {
        self.len
    }
}

/// Downloads a resolved link to local storage.
///
/// Returns `None` on any failure; the failure is logged by the implementation.
#[async_trait]
pub trait VideoFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<DownloadedVideo>;
}

/// Plain HTTP GET fetcher.
pub struct HttpFetcher {
    client: Client,
    temp_dir: PathBuf,
}

impl HttpFetcher {
    /// Creates a fetcher writing into `temp_dir`.
    pub fn new(temp_dir: PathBuf) -> AppResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, temp_dir })
    }

    async fn download(&self, url: &str) -> AppResult<DownloadedVideo> {
        let response = self.client.get(url).send().await?;

        // Only a plain 200 counts; 206 and friends are treated as failures.
        if response.status() != StatusCode::OK {
            return Err(AppError::HttpStatus(response.status()));
        }

        let bytes = response.bytes().await?;
        DownloadedVideo::write_in(&self.temp_dir, &bytes).await
    }
}

#[async_trait]
impl VideoFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<DownloadedVideo> {
        log::info!("📥 Downloading video: {}", url);

        match self.download(url).await {
            Ok(video) => {
                log::info!("✅ Saved {} bytes to {}", video.size_bytes(), video.path().display());
                Some(video)
            }
            Err(e) => {
                log::error!("❌ Video download failed for {}: {}", url, e);
                None
            }
        }
    }
}
