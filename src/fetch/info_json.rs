//! Fetcher for info JSON files already on disk.
//!
//! `yt-dlp --write-info-json` and `--dump-single-json > file.json` both
//! produce documents this fetcher can replay without touching the network.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::DocumentFetcher;
use crate::document::RawDocument;
use crate::error::FetchError;

/// Reads the same saved document for every URL.
#[derive(Debug, Clone)]
pub struct InfoJsonFetcher {
    path: PathBuf,
}

impl InfoJsonFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentFetcher for InfoJsonFetcher {
    fn name(&self) -> &'static str {
        "info-json"
    }

    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        info!("Reading metadata for {url} from {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        RawDocument::parse(&text)
    }
}
