//! Container formats known to the extractor.

use serde::Serialize;

/// Canonical container/media format of a stream.
///
/// Variants are declared in lookup order: [`MediaFormat::from_suffix`]
/// returns the first variant whose suffix matches, so `"webm"` always
/// resolves to [`MediaFormat::WebM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MediaFormat {
    // video
    Mpeg4,
    V3gpp,
    WebM,
    // audio
    M4a,
    WebMA,
    Mp3,
    Opus,
    // subtitles
    Vtt,
    Ttml,
    Transcript1,
    Transcript2,
    Transcript3,
}

impl MediaFormat {
    pub const ALL: [MediaFormat; 12] = [
        MediaFormat::Mpeg4,
        MediaFormat::V3gpp,
        MediaFormat::WebM,
        MediaFormat::M4a,
        MediaFormat::WebMA,
        MediaFormat::Mp3,
        MediaFormat::Opus,
        MediaFormat::Vtt,
        MediaFormat::Ttml,
        MediaFormat::Transcript1,
        MediaFormat::Transcript2,
        MediaFormat::Transcript3,
    ];

    /// Stable numeric id.
    pub fn id(self) -> u32 {
        match self {
            MediaFormat::Mpeg4 => 0x0,
            MediaFormat::V3gpp => 0x10,
            MediaFormat::WebM => 0x20,
            MediaFormat::M4a => 0x100,
            MediaFormat::WebMA => 0x200,
            MediaFormat::Mp3 => 0x300,
            MediaFormat::Opus => 0x400,
            MediaFormat::Vtt => 0x1000,
            MediaFormat::Ttml => 0x2000,
            MediaFormat::Transcript1 => 0x3000,
            MediaFormat::Transcript2 => 0x4000,
            MediaFormat::Transcript3 => 0x5000,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MediaFormat::Mpeg4 => "MPEG-4",
            MediaFormat::V3gpp => "3GPP",
            MediaFormat::WebM | MediaFormat::WebMA => "WebM",
            MediaFormat::M4a => "m4a",
            MediaFormat::Mp3 => "MP3",
            MediaFormat::Opus => "opus",
            MediaFormat::Vtt => "WebVTT",
            MediaFormat::Ttml => "Timed Text Markup Language",
            MediaFormat::Transcript1 => "TranScript v1",
            MediaFormat::Transcript2 => "TranScript v2",
            MediaFormat::Transcript3 => "TranScript v3",
        }
    }

    /// File extension, as reported in the `ext` field of a format entry.
    pub fn suffix(self) -> &'static str {
        match self {
            MediaFormat::Mpeg4 => "mp4",
            MediaFormat::V3gpp => "3gp",
            MediaFormat::WebM | MediaFormat::WebMA => "webm",
            MediaFormat::M4a => "m4a",
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Opus => "opus",
            MediaFormat::Vtt => "vtt",
            MediaFormat::Ttml => "ttml",
            MediaFormat::Transcript1 => "srv1",
            MediaFormat::Transcript2 => "srv2",
            MediaFormat::Transcript3 => "srv3",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            MediaFormat::Mpeg4 => "video/mp4",
            MediaFormat::V3gpp => "video/3gpp",
            MediaFormat::WebM => "video/webm",
            MediaFormat::M4a => "audio/mp4",
            MediaFormat::WebMA => "audio/webm",
            MediaFormat::Mp3 => "audio/mpeg",
            MediaFormat::Opus => "audio/opus",
            MediaFormat::Vtt => "text/vtt",
            MediaFormat::Ttml => "application/ttml+xml",
            MediaFormat::Transcript1 | MediaFormat::Transcript2 | MediaFormat::Transcript3 => {
                "text/xml"
            }
        }
    }

    /// Resolve a container extension. Matching is exact and case-sensitive.
    pub fn from_suffix(suffix: &str) -> Option<MediaFormat> {
        Self::ALL.into_iter().find(|f| f.suffix() == suffix)
    }
}

impl std::fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
