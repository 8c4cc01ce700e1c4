//! libcurl-backed fetcher against an HTTP route instance.

use std::str;
use std::time::Duration;

use url::Url;

use super::parse::{etag_id, extract_title};
use super::{FeedFetcher, FetchError, FetchedFeed};
use crate::assemble::AssembledUrl;
use crate::config::FetchConfig;

/// Bytes of body kept for title extraction; the rest is drained.
const MAX_BODY_BYTES: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct CurlFetcher {
    instance: String,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl CurlFetcher {
    pub fn new(instance_url: &str, cfg: &FetchConfig) -> Result<Self, FetchError> {
        let parsed = Url::parse(instance_url)?;
        Ok(Self {
            instance: parsed.as_str().trim_end_matches('/').to_string(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        })
    }

    /// HTTP URL serving `url`, e.g. `https://rsshub.app/github/issue/DIYgod/RSSHub`.
    pub fn source_url(&self, url: &AssembledUrl) -> Result<String, FetchError> {
        let joined = Url::parse(&format!("{}{}", self.instance, url.route_path()))?;
        Ok(joined.to_string())
    }
}

impl FeedFetcher for CurlFetcher {
    fn fetch_feed(&self, url: &AssembledUrl) -> Result<FetchedFeed, FetchError> {
        let source_url = self.source_url(url)?;
        tracing::info!(url = %url, source = %source_url, "fetching feed");

        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = ::curl::easy::Easy::new();
        easy.url(&source_url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                let room = MAX_BODY_BYTES.saturating_sub(body.len());
                body.extend_from_slice(&data[..data.len().min(room)]);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            tracing::warn!(source = %source_url, status, "feed request rejected");
            return Err(FetchError::Http { status });
        }

        let document = String::from_utf8_lossy(&body);
        Ok(FetchedFeed {
            url: url.to_string(),
            source_url,
            id: etag_id(&headers),
            title: extract_title(&document),
        })
    }
}
