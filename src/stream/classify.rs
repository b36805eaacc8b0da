//! Stream classification.
//!
//! Walks the document's `formats` list and sorts every entry into audio,
//! muxed video, video-only, or discarded. Entries are filtered rather than
//! rejected: a bad entry never fails the extraction, only an empty result
//! does.
//!
//! Codec hints are optional. Only an explicit `"none"` in `vcodec` makes an
//! entry audio-only, and only an explicit `"none"` in `acodec` makes it
//! video-only. A missing hint says nothing about the stream.

use serde_json::{Map, Value};
use tracing::debug;

use crate::document::{Field, RawDocument};
use crate::error::{ExtractionError, Result};
use crate::itag::ResolutionCatalog;
use crate::media_format::MediaFormat;
use crate::stream::info::{AudioStream, StreamInfo, VideoStream, UNKNOWN_BITRATE};

const FORMATS: &str = "formats";
const HTTPS: &str = "https";
const NO_CODEC: &str = "none";

/// Codec hint of a format entry, kept as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecHint {
    Absent,
    Null,
    Named(String),
}

impl CodecHint {
    fn read(field: Field<'_>) -> Self {
        match field {
            Field::Absent => CodecHint::Absent,
            Field::Null => CodecHint::Null,
            Field::Value(_) => field.string().map_or(CodecHint::Null, CodecHint::Named),
        }
    }

    /// `true` only for an explicit `"none"`.
    pub fn is_none_codec(&self) -> bool {
        matches!(self, CodecHint::Named(name) if name == NO_CODEC)
    }
}

/// Borrowed view over one element of the `formats` list.
#[derive(Debug, Clone, Copy)]
pub struct FormatEntry<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FormatEntry<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    fn field(self, key: &str) -> Field<'a> {
        Field::of(self.fields, key)
    }

    pub fn is_https(self) -> bool {
        self.field("protocol").string().is_ok_and(|p| p == HTTPS)
    }

    pub fn has_manifest(self) -> bool {
        self.field("manifest_url").is_present()
    }

    pub fn manifest_url(self) -> Option<String> {
        self.field("manifest_url").string().ok()
    }

    pub fn url(self) -> Option<String> {
        self.field("url").string().ok()
    }

    pub fn ext(self) -> Option<String> {
        self.field("ext").string().ok()
    }

    pub fn acodec(self) -> CodecHint {
        CodecHint::read(self.field("acodec"))
    }

    pub fn vcodec(self) -> CodecHint {
        CodecHint::read(self.field("vcodec"))
    }

    /// Average audio bitrate, or [`UNKNOWN_BITRATE`].
    pub fn average_bitrate(self) -> i32 {
        i32::try_from(self.field("abr").int_or(i64::from(UNKNOWN_BITRATE)))
            .unwrap_or(UNKNOWN_BITRATE)
    }

    /// `format_id` read as a number, or `-1` when it is not numeric.
    pub fn itag(self) -> i64 {
        self.field("format_id").int_or(-1)
    }

    pub fn format_id(self) -> Option<String> {
        self.field("format_id").string().ok()
    }
}

/// Where a single format entry ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Audio(AudioStream),
    Video(VideoStream),
    VideoOnly(VideoStream),
    /// Adaptive manifest on a non-https protocol.
    Manifest(Option<String>),
    Discarded(&'static str),
}

/// Label for a video entry: the catalog's resolution, else the raw `format_id`.
pub fn resolve_resolution(catalog: &dyn ResolutionCatalog, itag: i64, format_id: &str) -> String {
    if itag != -1 {
        if let Some(label) = catalog.resolution(itag) {
            return label.to_string();
        }
    }
    format_id.to_string()
}

/// Classify one entry.
pub fn classify_entry(entry: FormatEntry<'_>, catalog: &dyn ResolutionCatalog) -> Classified {
    // Only entries that carry a manifest are filtered here; plain non-https
    // entries fall through.
    if !entry.is_https() && entry.has_manifest() {
        return Classified::Manifest(entry.manifest_url());
    }

    let Some(url) = entry.url() else {
        return Classified::Discarded("no url");
    };
    let Some(ext) = entry.ext() else {
        return Classified::Discarded("no ext");
    };
    let Some(format) = MediaFormat::from_suffix(&ext) else {
        return Classified::Discarded("unknown ext");
    };

    let is_audio_only = entry.vcodec().is_none_codec();
    let is_video_only = entry.acodec().is_none_codec();

    if is_audio_only {
        return Classified::Audio(AudioStream {
            url,
            format,
            average_bitrate: entry.average_bitrate(),
        });
    }

    let itag = entry.itag();
    let Some(format_id) = entry.format_id() else {
        return Classified::Discarded("no format_id");
    };
    let resolution = resolve_resolution(catalog, itag, &format_id);

    let stream = VideoStream {
        url,
        format,
        resolution,
        is_video_only,
    };
    if is_video_only {
        Classified::VideoOnly(stream)
    } else {
        Classified::Video(stream)
    }
}

/// Fill the three stream collections of `template` from `doc`.
///
/// Fails with [`ExtractionError::NoUsableStream`] if no audio and no muxed
/// video stream survives; video-only streams alone are not enough.
pub fn classify_streams(
    doc: &RawDocument,
    mut template: StreamInfo,
    catalog: &dyn ResolutionCatalog,
) -> Result<StreamInfo> {
    let mut audio_streams = Vec::new();
    let mut video_streams = Vec::new();
    let mut video_only_streams = Vec::new();
    let mut non_https_manifests = Vec::new();

    let formats = doc.array(FORMATS).unwrap_or_default();
    for (index, value) in formats.iter().enumerate() {
        let Some(fields) = value.as_object() else {
            debug!("Skipping format #{index}: not an object");
            continue;
        };
        match classify_entry(FormatEntry::new(fields), catalog) {
            Classified::Audio(stream) => audio_streams.push(stream),
            Classified::Video(stream) => video_streams.push(stream),
            Classified::VideoOnly(stream) => video_only_streams.push(stream),
            Classified::Manifest(url) => non_https_manifests.extend(url),
            Classified::Discarded(reason) => debug!("Skipping format #{index}: {reason}"),
        }
    }

    debug!(
        "Classified {} formats: {} audio, {} video, {} video-only, {} non-https manifests",
        formats.len(),
        audio_streams.len(),
        video_streams.len(),
        video_only_streams.len(),
        non_https_manifests.len()
    );

    if video_streams.is_empty() && audio_streams.is_empty() {
        return Err(ExtractionError::NoUsableStream);
    }

    template.audio_streams = audio_streams;
    template.video_streams = video_streams;
    template.video_only_streams = video_only_streams;
    Ok(template)
}
