//! `streaminfo` - typed stream metadata from yt-dlp info documents
//!
//! # Features
//!
//! - **Tolerant parsing**: missing, null and mistyped fields never panic
//! - **Stream classification**: audio, muxed video and video-only streams
//!   from optional codec hints
//! - **Resolution labels**: `youtube.com` itags resolved through a static catalog
//! - **Per-field errors**: optional fields fail individually and are reported
//!
//! # Example
//!
//! ```rust,no_run
//! use streaminfo::{StreamExtractor, YtDlpFetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let extractor = StreamExtractor::new(YtDlpFetcher::new()?);
//!     let info = extractor
//!         .extract_stream_info("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .await?;
//!     println!("{}: {} video streams", info.name, info.video_streams.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod itag;
pub mod media_format;
pub mod stream;

pub use document::{Field, FieldErrorKind, RawDocument};
pub use error::{ExtractionError, FetchError};
pub use fetch::{DocumentFetcher, InfoJsonFetcher, YtDlpFetcher};
pub use itag::{ItagCatalog, ResolutionCatalog};
pub use media_format::MediaFormat;
pub use stream::{AudioStream, StreamExtractor, StreamInfo, StreamType, VideoStream};

/// Version of streaminfo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
