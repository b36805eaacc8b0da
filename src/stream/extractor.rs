//! The extraction pipeline: fetch → template → streams → extras.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use crate::document::RawDocument;
use crate::error::Result;
use crate::fetch::DocumentFetcher;
use crate::itag::{ItagCatalog, ResolutionCatalog};
use crate::stream::classify::classify_streams;
use crate::stream::extras::collect_extras;
use crate::stream::info::StreamInfo;
use crate::stream::template::build_template;

/// Turns URLs into [`StreamInfo`] using a fetcher and a resolution catalog.
///
/// Holds no mutable state, so one extractor can serve many concurrent
/// extractions.
pub struct StreamExtractor<F: DocumentFetcher> {
    fetcher: F,
    catalog: Arc<dyn ResolutionCatalog>,
}

impl<F: DocumentFetcher> StreamExtractor<F> {
    /// Extractor with the built-in [`ItagCatalog`].
    pub fn new(fetcher: F) -> Self {
        Self::with_catalog(fetcher, Arc::new(ItagCatalog))
    }

    pub fn with_catalog(fetcher: F, catalog: Arc<dyn ResolutionCatalog>) -> Self {
        Self { fetcher, catalog }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch `url` and extract its stream info.
    ///
    /// Fetch failures, missing identity fields and the absence of any
    /// usable stream are fatal; optional-field failures end up in
    /// [`StreamInfo::errors`].
    pub async fn extract_stream_info(&self, url: &str) -> Result<StreamInfo> {
        info!("Fetching {url} via {}", self.fetcher.name());
        let doc = self.fetcher.fetch(url).await?;
        let info = self.extract_from_document(&doc)?;
        info!(
            "Extracted {:?} via {}: {} video, {} video-only, {} audio streams",
            info.id,
            self.fetcher.name(),
            info.video_streams.len(),
            info.video_only_streams.len(),
            info.audio_streams.len()
        );
        if info.is_degraded() {
            let unavailable = info.errors.len();
            debug!("{unavailable} optional fields unavailable for {url}");
        }
        Ok(info)
    }

    /// Run the pipeline over an already fetched document.
    pub fn extract_from_document(&self, doc: &RawDocument) -> Result<StreamInfo> {
        let template = build_template(doc)?;
        let with_streams = classify_streams(doc, template, self.catalog.as_ref())?;
        Ok(collect_extras(doc, with_streams))
    }

    /// Extract several URLs concurrently. Results are in input order.
    pub async fn extract_many<S: AsRef<str>>(&self, urls: &[S]) -> Vec<Result<StreamInfo>> {
        let extractions = urls
            .iter()
            .map(|url| self.extract_stream_info(url.as_ref()));
        join_all(extractions).await
    }
}
