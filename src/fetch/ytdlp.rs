//! yt-dlp / youtube-dl subprocess fetcher
//!
//! Runs the tool in metadata-only mode and parses the single JSON document
//! it prints on stdout:
//!
//! ```text
//! yt-dlp --dump-single-json --skip-download [--no-check-certificate] [extra args] -- <url>
//! ```

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::DocumentFetcher;
use crate::config::FetcherConfig;
use crate::document::RawDocument;
use crate::error::FetchError;

/// Tool names searched in PATH, in order of preference.
const CANDIDATES: [&str; 2] = ["yt-dlp", "youtube-dl"];

/// Fetcher backed by a yt-dlp compatible binary.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    /// Path to the extractor binary
    binary: String,
    /// Additional arguments placed before the URL
    extra_args: Vec<String>,
    check_certificate: bool,
}

impl YtDlpFetcher {
    /// Create a fetcher, searching PATH for `yt-dlp` then `youtube-dl`.
    pub fn new() -> Result<Self, FetchError> {
        let binary = CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .map(|p| p.to_string_lossy().to_string())
            .ok_or_else(|| FetchError::ToolNotFound(CANDIDATES.join(", ")))?;

        Ok(Self::with_binary(&binary))
    }

    /// Use a specific binary without searching PATH.
    pub fn with_binary(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
            extra_args: Vec::new(),
            check_certificate: false,
        }
    }

    /// Build from config; falls back to a PATH search when no binary is set.
    pub fn from_config(config: &FetcherConfig) -> Result<Self, FetchError> {
        let fetcher = match &config.binary {
            Some(binary) => Self::with_binary(binary),
            None => Self::new()?,
        };
        Ok(fetcher
            .with_extra_args(config.extra_args.clone())
            .with_check_certificate(config.check_certificate))
    }

    /// Add extra tool arguments
    #[must_use]
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    #[must_use]
    pub fn with_check_certificate(mut self, check: bool) -> Self {
        self.check_certificate = check;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn build_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-single-json".to_string(),
            "--skip-download".to_string(),
        ];

        if !self.check_certificate {
            args.push("--no-check-certificate".to_string());
        }

        args.extend(self.extra_args.iter().cloned());

        // URL last, after "--" so it is never parsed as an option
        args.push("--".to_string());
        args.push(url.to_string());

        args
    }

    /// Check if the binary runs
    pub async fn check_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|s| s.success())
    }
}

#[async_trait]
impl DocumentFetcher for YtDlpFetcher {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        let args = self.build_args(url);
        info!("Fetching metadata for {url}");
        debug!("Running {} {}", self.binary, args.join(" "));

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FetchError::ToolFailed {
                tool: self.binary.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let doc = RawDocument::from_value(serde_json::from_slice(&output.stdout)?)?;
        debug!("Fetched document with {} keys", doc.as_map().len());
        Ok(doc)
    }
}
