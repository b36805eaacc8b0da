use std::fmt::Write;

use streaminfo::{MediaFormat, StreamInfo, StreamType};

fn write_stream(out: &mut String, label: &str, format: MediaFormat, url: &str) {
    let _ = writeln!(out, "   {label:<10} {:<6} {url}", format.suffix());
}

/// Human-readable summary of one extraction.
pub fn format_summary(info: &StreamInfo, show_errors: bool) -> String {
    let mut out = String::new();

    let live = match info.stream_type {
        StreamType::Live => " [LIVE]",
        StreamType::Video => "",
    };
    let _ = writeln!(out, "🎬 {}{live}", info.name);
    let _ = writeln!(out, "   id: {}  url: {}", info.id, info.url);
    if let Some(uploader) = &info.uploader_name {
        let _ = writeln!(out, "   by {uploader}");
    }
    if let Some(duration) = info.duration {
        let _ = writeln!(out, "   duration: {}:{:02}", duration / 60, duration % 60);
    }
    if info.age_limit > 0 {
        let _ = writeln!(out, "   age limit: {}", info.age_limit);
    }

    let _ = writeln!(out, "📺 Video ({}):", info.video_streams.len());
    for s in &info.video_streams {
        write_stream(&mut out, &s.resolution, s.format, &s.url);
    }
    let video_only = &info.video_only_streams;
    let _ = writeln!(out, "🎞️  Video-only ({}):", video_only.len());
    for s in video_only {
        write_stream(&mut out, &s.resolution, s.format, &s.url);
    }
    let _ = writeln!(out, "🔊 Audio ({}):", info.audio_streams.len());
    for s in &info.audio_streams {
        let bitrate = if s.average_bitrate < 0 {
            "?".to_string()
        } else {
            format!("{}k", s.average_bitrate)
        };
        write_stream(&mut out, &bitrate, s.format, &s.url);
    }

    if show_errors && !info.errors.is_empty() {
        let _ = writeln!(out, "⚠️  Unavailable fields ({}):", info.errors.len());
        for e in &info.errors {
            let _ = writeln!(out, "   {e}");
        }
    }

    out
}
