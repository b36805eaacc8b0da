//! The normalized result of one extraction.

use serde::Serialize;

use crate::document::FieldErrorKind;
use crate::media_format::MediaFormat;

/// Service id used for results that no specific service backs.
pub const GENERIC_SERVICE_ID: i32 = i32::MIN;

/// Age limit meaning "no restriction".
pub const NO_AGE_LIMIT: i32 = 0;

/// Average bitrate of an audio stream whose bitrate is unknown.
pub const UNKNOWN_BITRATE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamType {
    Video,
    Live,
}

/// An audio-only stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStream {
    pub url: String,
    pub format: MediaFormat,
    /// kbit/s, or [`UNKNOWN_BITRATE`].
    pub average_bitrate: i32,
}

/// A muxed (audio + video) or video-only stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStream {
    pub url: String,
    pub format: MediaFormat,
    pub resolution: String,
    pub is_video_only: bool,
}

/// Optional descriptive fields filled by the extra-field collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtraField {
    ThumbnailUrl,
    Duration,
    UploaderName,
    UploaderUrl,
    Description,
    ViewCount,
    UploadDate,
    UploaderAvatarUrl,
    StartPosition,
    LikeCount,
    DislikeCount,
}

impl ExtraField {
    /// Document key the field is read from.
    pub fn key(self) -> &'static str {
        match self {
            ExtraField::ThumbnailUrl => "thumbnail",
            ExtraField::Duration => "duration",
            ExtraField::UploaderName => "uploader",
            ExtraField::UploaderUrl => "uploader_url",
            ExtraField::Description => "description",
            ExtraField::ViewCount => "view_count",
            // Never present in real documents; see DESIGN.md.
            ExtraField::UploadDate => "upload_date_fail",
            ExtraField::UploaderAvatarUrl => "uploader_thumbnail",
            ExtraField::StartPosition => "start_time",
            ExtraField::LikeCount => "like_count",
            ExtraField::DislikeCount => "dislike_count",
        }
    }
}

/// A non-fatal failure to read one optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: ExtraField,
    #[serde(flatten)]
    pub kind: FieldErrorKind,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.key(), self.kind)
    }
}

impl std::error::Error for FieldError {}

/// Strongly-typed description of a media resource and its streams.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    pub service_id: i32,
    pub url: String,
    pub stream_type: StreamType,
    pub id: String,
    pub name: String,
    pub age_limit: i32,

    pub audio_streams: Vec<AudioStream>,
    pub video_streams: Vec<VideoStream>,
    pub video_only_streams: Vec<VideoStream>,

    /// Optional fields that could not be read, in collection order.
    pub errors: Vec<FieldError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dislike_count: Option<i64>,
}

impl StreamInfo {
    /// A skeleton with identity fields set and everything else empty.
    pub fn new(
        service_id: i32,
        url: String,
        stream_type: StreamType,
        id: String,
        name: String,
        age_limit: i32,
    ) -> Self {
        Self {
            service_id,
            url,
            stream_type,
            id,
            name,
            age_limit,
            audio_streams: Vec::new(),
            video_streams: Vec::new(),
            video_only_streams: Vec::new(),
            errors: Vec::new(),
            thumbnail_url: None,
            duration: None,
            uploader_name: None,
            uploader_url: None,
            description: None,
            view_count: None,
            upload_date: None,
            uploader_avatar_url: None,
            start_position: None,
            like_count: None,
            dislike_count: None,
        }
    }

    /// `true` if any optional field failed to read.
    pub fn is_degraded(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether `field` was recorded as failed.
    pub fn has_error_for(&self, field: ExtraField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}
