// src/core/net.rs
// Page transport. The engine only ever sees a finished `Document`.

use std::{fs, path::Path, time::Duration};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Raw page text plus where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    url: String,
    text: String,
}

impl Document {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self { url: url.into(), text: text.into() }
    }
    pub fn url(&self) -> &str { &self.url }
    pub fn text(&self) -> &str { &self.text }
}

/// Anything that can turn a URL into a `Document`.
/// Must fail on non-success responses rather than hand back partial content.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Document>;
}

/// Blocking HTTP GET.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ScrapeError::transport("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Document> {
        let t = std::time::Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::transport(url, e))?;
        let text = resp.text().map_err(|e| ScrapeError::transport(url, e))?;
        tracing::info!(url, bytes = text.len(), elapsed = ?t.elapsed(), "fetched page");
        Ok(Document::new(url, text))
    }
}

/// Reads a saved page from disk; the "url" is a file path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn fetch(&self, url: &str) -> Result<Document> {
        let text = fs::read_to_string(Path::new(url))
            .map_err(|e| ScrapeError::transport(url, e))?;
        tracing::debug!(path = url, bytes = text.len(), "loaded page from disk");
        Ok(Document::new(url, text))
    }
}
