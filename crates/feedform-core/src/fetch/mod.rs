//! Resolving an assembled feed URL to a feed.
//!
//! The form only needs the [`FeedFetcher`] seam; [`CurlFetcher`] is the
//! libcurl-backed implementation that requests the route from an HTTP
//! instance.

mod curl;
mod parse;

use crate::assemble::AssembledUrl;

pub use self::curl::CurlFetcher;
pub use parse::extract_title;

/// A feed the fetcher resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFeed {
    /// The assembled identifier that was submitted.
    pub url: String,
    /// The HTTP URL that served it.
    pub source_url: String,
    /// Identifier reported by the server (ETag), if any.
    pub id: Option<String>,
    /// Feed title, if the document has one.
    pub title: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid instance url: {0}")]
    InvalidInstance(#[from] url::ParseError),
    #[error("feed request failed: {0}")]
    Transport(#[from] ::curl::Error),
    #[error("feed request returned HTTP {status}")]
    Http { status: u32 },
    #[error("failed to fetch feed: {0}")]
    Other(String),
}

/// Resolves assembled identifiers to feeds. Blocking; async callers should
/// use `spawn_blocking`.
pub trait FeedFetcher {
    fn fetch_feed(&self, url: &AssembledUrl) -> Result<FetchedFeed, FetchError>;
}

impl<F: FeedFetcher + ?Sized> FeedFetcher for &F {
    fn fetch_feed(&self, url: &AssembledUrl) -> Result<FetchedFeed, FetchError> {
        (**self).fetch_feed(url)
    }
}
