//! Link resolution and video download
//!
//! - `resolver`: source URL -> direct download link, scraped from a download site
//! - `fetcher`: direct link -> per-request temp file

pub mod fetcher;
pub mod resolver;

pub use fetcher::{DownloadedVideo, HttpFetcher, VideoFetcher};
pub use resolver::{extract_download_link, LinkResolver, ScrapeResolver};
