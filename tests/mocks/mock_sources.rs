//! Stub resolvers and fetchers

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;
use vidrelay::{DownloadedVideo, LinkResolver, VideoFetcher};

/// Resolver returning a fixed answer and recording what it was asked.
pub struct StubResolver {
    link: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StubResolver {
    pub fn returning(link: &str) -> Self {
        Self {
            link: Some(link.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn finding_nothing() -> Self {
        Self {
            link: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkResolver for StubResolver {
    async fn resolve(&self, source_url: &str) -> Option<String> {
        self.calls.lock().unwrap().push(source_url.to_string());
        self.link.clone()
    }
}

/// Resolver that never answers, to keep a request in flight.
pub struct PendingResolver;

#[async_trait]
impl LinkResolver for PendingResolver {
    async fn resolve(&self, _source_url: &str) -> Option<String> {
        std::future::pending::<()>().await;
        None
    }
}

/// Fetcher writing a fixed body into its own scratch directory.
pub struct StubFetcher {
    body: Option<Vec<u8>>,
    dir: TempDir,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn serving(body: &[u8]) -> Self {
        Self {
            body: Some(body.to_vec()),
            dir: tempfile::tempdir().unwrap(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            dir: tempfile::tempdir().unwrap(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Files currently left in the scratch directory
    pub fn leftover_files(&self) -> usize {
        std::fs::read_dir(self.dir.path()).unwrap().count()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Option<DownloadedVideo> {
        self.calls.lock().unwrap().push(url.to_string());
        let body = self.body.as_ref()?;
        DownloadedVideo::write_in(self.dir.path(), body).await.ok()
    }
}
