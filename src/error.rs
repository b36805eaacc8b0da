//! Error types for document fetching and stream extraction.

use thiserror::Error;

/// Failure of a [`DocumentFetcher`](crate::fetch::DocumentFetcher).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No extractor tool found in PATH (tried {0})")]
    ToolNotFound(String),

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document is not a JSON object (got {0})")]
    NotAnObject(&'static str),
}

/// Fatal extraction errors. Any of these aborts the remaining pipeline stages.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A mandatory identity field is absent or not coercible to its type.
    #[error("Missing or malformed required field: {field}")]
    MissingField { field: &'static str },

    /// Neither an audio stream nor a muxed video stream survived classification.
    #[error("Could not get any usable audio or video stream")]
    NoUsableStream,

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
