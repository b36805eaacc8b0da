//! Document fetchers.
//!
//! A [`DocumentFetcher`] turns a URL into a [`RawDocument`]. The extractor
//! treats it as opaque: transport, timeouts and authentication are the
//! fetcher's business.

pub mod info_json;
pub mod ytdlp;

use async_trait::async_trait;

use crate::document::RawDocument;
use crate::error::FetchError;

pub use info_json::InfoJsonFetcher;
pub use ytdlp::YtDlpFetcher;

/// Source of raw metadata documents.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Short lowercase fetcher name (e.g., `"yt-dlp"`, `"info-json"`).
    fn name(&self) -> &'static str;

    /// Fetch the metadata document for `url`.
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError>;
}

#[async_trait]
impl<T: DocumentFetcher + ?Sized> DocumentFetcher for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        (**self).fetch(url).await
    }
}
