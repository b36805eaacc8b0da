//! Stream metadata extraction.
//!
//! Turns a loosely-typed [`RawDocument`](crate::document::RawDocument) into
//! a [`StreamInfo`] in three stages: identity template, stream
//! classification, optional extras.

pub mod classify;
pub mod extractor;
pub mod extras;
pub mod info;
pub mod template;

pub use classify::{classify_streams, CodecHint, FormatEntry};
pub use extractor::StreamExtractor;
pub use extras::collect_extras;
pub use info::{
    AudioStream, ExtraField, FieldError, StreamInfo, StreamType, VideoStream, GENERIC_SERVICE_ID,
    NO_AGE_LIMIT, UNKNOWN_BITRATE,
};
pub use template::build_template;
