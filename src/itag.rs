//! Resolution catalog for numeric format identifiers ("itags").
//!
//! Format entries for `youtube.com` videos carry a numeric `format_id` that maps
//! to a fixed quality profile. [`ItagCatalog`] knows those profiles and turns
//! an itag into a display label such as `"720p"` or `"1080p60"`.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::media_format::MediaFormat::{self, M4a, Mpeg4, V3gpp, WebM, WebMA};

/// What kind of stream an itag describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItagType {
    Video,
    Audio,
    VideoOnly,
}

/// One known quality profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItagItem {
    pub id: u32,
    pub kind: ItagType,
    pub format: MediaFormat,
    /// Display label for video itags; `None` for audio.
    pub resolution: Option<&'static str>,
    /// Average bitrate in kbit/s for audio itags.
    pub avg_bitrate: Option<u32>,
}

const fn video(id: u32, format: MediaFormat, resolution: &'static str) -> ItagItem {
    ItagItem {
        id,
        kind: ItagType::Video,
        format,
        resolution: Some(resolution),
        avg_bitrate: None,
    }
}

const fn audio(id: u32, format: MediaFormat, avg_bitrate: u32) -> ItagItem {
    ItagItem {
        id,
        kind: ItagType::Audio,
        format,
        resolution: None,
        avg_bitrate: Some(avg_bitrate),
    }
}

const fn video_only(id: u32, format: MediaFormat, resolution: &'static str) -> ItagItem {
    ItagItem {
        id,
        kind: ItagType::VideoOnly,
        format,
        resolution: Some(resolution),
        avg_bitrate: None,
    }
}

#[rustfmt::skip]
static ITAGS: &[ItagItem] = &[
    video(17, V3gpp, "144p"),
    video(36, V3gpp, "240p"),
    video(18, Mpeg4, "360p"),
    video(34, Mpeg4, "360p"),
    video(35, Mpeg4, "480p"),
    video(59, Mpeg4, "480p"),
    video(78, Mpeg4, "480p"),
    video(22, Mpeg4, "720p"),
    video(37, Mpeg4, "1080p"),
    video(38, Mpeg4, "1080p"),
    video(43, WebM, "360p"),
    video(44, WebM, "480p"),
    video(45, WebM, "720p"),
    video(46, WebM, "1080p"),

    audio(171, WebMA, 128),
    audio(172, WebMA, 256),
    audio(139, M4a, 48),
    audio(140, M4a, 128),
    audio(141, M4a, 256),
    audio(249, WebMA, 50),
    audio(250, WebMA, 70),
    audio(251, WebMA, 160),

    video_only(160, Mpeg4, "144p"),
    video_only(133, Mpeg4, "240p"),
    video_only(134, Mpeg4, "360p"),
    video_only(135, Mpeg4, "480p"),
    video_only(212, Mpeg4, "480p"),
    video_only(136, Mpeg4, "720p"),
    video_only(298, Mpeg4, "720p60"),
    video_only(137, Mpeg4, "1080p"),
    video_only(299, Mpeg4, "1080p60"),
    video_only(266, Mpeg4, "2160p"),

    video_only(278, WebM, "144p"),
    video_only(242, WebM, "240p"),
    video_only(243, WebM, "360p"),
    video_only(244, WebM, "480p"),
    video_only(245, WebM, "480p"),
    video_only(246, WebM, "480p"),
    video_only(247, WebM, "720p"),
    video_only(248, WebM, "1080p"),
    video_only(271, WebM, "1440p"),
    video_only(272, WebM, "2160p"),
    video_only(302, WebM, "720p60"),
    video_only(303, WebM, "1080p60"),
    video_only(308, WebM, "1440p60"),
    video_only(313, WebM, "2160p"),
    video_only(315, WebM, "2160p60"),
];

static BY_ID: LazyLock<HashMap<u32, &'static ItagItem>> =
    LazyLock::new(|| ITAGS.iter().map(|item| (item.id, item)).collect());

/// Lookup from a numeric format identifier to a human-readable resolution.
///
/// Implementations must be safe for concurrent reads; the extractor shares
/// one catalog across all extractions.
pub trait ResolutionCatalog: Send + Sync {
    /// Display label for `itag`, or `None` if unknown or not a video profile.
    fn resolution(&self, itag: i64) -> Option<&str>;
}

/// The built-in itag table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItagCatalog;

impl ItagCatalog {
    /// Whether `itag` is a known profile of any kind.
    pub fn is_supported(itag: i64) -> bool {
        Self::get(itag).is_some()
    }

    pub fn get(itag: i64) -> Option<&'static ItagItem> {
        let id = u32::try_from(itag).ok()?;
        BY_ID.get(&id).copied()
    }

    /// All known profiles in table order.
    pub fn items() -> &'static [ItagItem] {
        ITAGS
    }
}

impl ResolutionCatalog for ItagCatalog {
    fn resolution(&self, itag: i64) -> Option<&str> {
        Self::get(itag).and_then(|item| item.resolution)
    }
}
