//! Link resolver — turns a source video URL into a direct download link
//!
//! The source URL is posted as form field `url` to a download site, and the
//! returned HTML page is scraped for the download anchor. Parsing runs on the
//! blocking pool so it never stalls the dispatcher.

use async_trait::async_trait;
use reqwest::Client;
use select::document::Document;
use select::predicate::Name;
use url::Url;

use crate::core::error::{AppError, AppResult};

/// Resolves a user-supplied video URL into a direct download URL.
///
/// Implementations never fail loudly: any problem is logged and reported as
/// `None`.
#[async_trait]
pub trait LinkResolver: Send + Sync {
    async fn resolve(&self, source_url: &str) -> Option<String>;
}

/// Resolver backed by a third-party download page.
pub struct ScrapeResolver {
    client: Client,
    endpoint: Url,
}

impl ScrapeResolver {
    /// Creates a resolver that posts to `endpoint`, sending `user_agent` on
    /// every request. Download sites tend to refuse non-browser agents, so
    /// callers normally pass [`BROWSER_USER_AGENT`].
    ///
    /// [`BROWSER_USER_AGENT`]: crate::core::config::BROWSER_USER_AGENT
    pub fn new(endpoint: Url, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, endpoint })
    }

    /// Submits the form and returns the page body for any 2xx answer.
    async fn fetch_page(&self, source_url: &str) -> AppResult<String> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&[("url", source_url)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl LinkResolver for ScrapeResolver {
    async fn resolve(&self, source_url: &str) -> Option<String> {
        log::info!("🔎 Resolving download link for {} via {}", source_url, self.endpoint);

        let html = match self.fetch_page(source_url).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("❌ Resolver request failed for {}: {}", source_url, e);
                return None;
            }
        };

        let base = self.endpoint.clone();
        match tokio::task::spawn_blocking(move || extract_download_link(&html, &base)).await {
            Ok(Some(link)) => {
                log::info!("✅ Resolved {} -> {}", source_url, link);
                Some(link)
            }
            Ok(None) => {
                log::warn!("No download link found on resolver page for {}", source_url);
                None
            }
            Err(e) => {
                log::error!("❌ Scraping worker failed for {}: {}", source_url, e);
                None
            }
        }
    }
}

/// Picks the download link out of the resolver page.
///
/// Returns the `href` of the first `<a>` element, in document order, that has
/// one. Anchor text is not consulted: a "download" caption can never win over
/// an earlier anchor that simply carries an `href`. Relative links are joined
/// onto `base`. An empty `href` means no link.
pub fn extract_download_link(html: &str, base: &Url) -> Option<String> {
    let document = Document::from(html);

    let href = document.find(Name("a")).find_map(|node| node.attr("href"))?.trim();
    if href.is_empty() {
        return None;
    }

    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => Some(href.to_string()),
    }
}
