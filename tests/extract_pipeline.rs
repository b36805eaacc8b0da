//! End-to-end extraction tests over saved info JSON documents.

use std::path::{Path, PathBuf};

use streaminfo::stream::{ExtraField, FieldError, UNKNOWN_BITRATE};
use streaminfo::{
    ExtractionError, FieldErrorKind, InfoJsonFetcher, MediaFormat, StreamExtractor, StreamType,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn extractor(name: &str) -> StreamExtractor<InfoJsonFetcher> {
    StreamExtractor::new(InfoJsonFetcher::new(fixture(name)))
}

// ─── YouTube-style document ──────────────────────────────────────────────────

#[tokio::test]
async fn youtube_identity_fields() {
    let info = extractor("youtube_video.json")
        .extract_stream_info("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();

    assert_eq!(info.service_id, i32::MIN);
    assert_eq!(info.id, "dQw4w9WgXcQ");
    assert_eq!(info.url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(info.stream_type, StreamType::Video);
    assert_eq!(info.age_limit, 0);
}

#[tokio::test]
async fn youtube_streams_are_classified() {
    let info = extractor("youtube_video.json")
        .extract_stream_info("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();

    let video: Vec<_> = info
        .video_streams
        .iter()
        .map(|s| s.resolution.as_str())
        .collect();
    assert_eq!(video, ["360p", "720p"]);
    assert!(info.video_streams.iter().all(|s| !s.is_video_only));

    let video_only: Vec<_> = info
        .video_only_streams
        .iter()
        .map(|s| (s.resolution.as_str(), s.format))
        .collect();
    assert_eq!(
        video_only,
        [
            ("360p", MediaFormat::Mpeg4),
            ("1080p", MediaFormat::Mpeg4),
            ("1080p", MediaFormat::WebM),
        ]
    );

    let audio: Vec<_> = info
        .audio_streams
        .iter()
        .map(|s| (s.format, s.average_bitrate))
        .collect();
    assert_eq!(
        audio,
        [
            (MediaFormat::M4a, 48),
            (MediaFormat::WebM, 135),
            (MediaFormat::M4a, UNKNOWN_BITRATE),
        ]
    );

    // storyboard (unknown ext) and the HLS variant are gone
    let all_urls: Vec<&str> = info
        .video_streams
        .iter()
        .chain(&info.video_only_streams)
        .map(|s| s.url.as_str())
        .chain(info.audio_streams.iter().map(|s| s.url.as_str()))
        .collect();
    assert_eq!(all_urls.len(), 8);
    let cdn = "https://rr1.googlevideo.com/";
    assert!(all_urls.iter().all(|u| u.starts_with(cdn)));
}

#[tokio::test]
async fn youtube_extras_and_errors() {
    let info = extractor("youtube_video.json")
        .extract_stream_info("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();

    assert_eq!(info.uploader_name.as_deref(), Some("Rick Astley"));
    assert_eq!(info.duration, Some(212));
    assert_eq!(info.view_count, Some(1_400_000_000));
    assert_eq!(info.like_count, Some(16_000_000));
    assert_eq!(info.start_position, Some(0));
    assert_eq!(info.upload_date, None);

    let missing = |field| FieldError {
        field,
        kind: FieldErrorKind::Missing,
    };
    assert_eq!(
        info.errors,
        [
            missing(ExtraField::UploadDate),
            missing(ExtraField::UploaderAvatarUrl),
            missing(ExtraField::DislikeCount),
        ]
    );
}

// ─── Generic site document ───────────────────────────────────────────────────

#[tokio::test]
async fn generic_site_falls_back_to_format_ids() {
    let info = extractor("generic_site.json")
        .extract_stream_info("https://videos.example.org/w/417536")
        .await
        .unwrap();

    // `live: false` is present, so the stream counts as live
    assert_eq!(info.stream_type, StreamType::Live);
    assert_eq!(info.age_limit, 18);

    let labels: Vec<_> = info
        .video_streams
        .iter()
        .map(|s| s.resolution.as_str())
        .collect();
    assert_eq!(labels, ["http-480p", "http-720p"]);
    assert!(info.video_only_streams.is_empty());
    assert_eq!(info.audio_streams.len(), 1);
    assert_eq!(info.audio_streams[0].format, MediaFormat::Mp3);

    assert_eq!(info.duration, Some(3605));
    assert_eq!(info.view_count, None);
    assert!(info.errors.contains(&FieldError {
        field: ExtraField::ViewCount,
        kind: FieldErrorKind::Null,
    }));
    assert_eq!(info.errors.len(), 7);
}

// ─── Fatal outcomes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_title_is_fatal() {
    let err = extractor("missing_title.json")
        .extract_stream_info("https://example.com/watch/abc")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ExtractionError::MissingField { field: "title" }
    ));
}

#[tokio::test]
async fn manifests_and_video_only_are_not_usable() {
    let err = extractor("manifests_only.json")
        .extract_stream_info("https://example.com/live/live1")
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractionError::NoUsableStream));
}

#[tokio::test]
async fn unreadable_file_is_a_fetch_error() {
    let err = extractor("does_not_exist.json")
        .extract_stream_info("https://example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, ExtractionError::Fetch(_)));
}

// ─── Properties ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn same_document_yields_equal_results() {
    let extractor = extractor("youtube_video.json");
    let results = extractor.extract_many(&["a", "b", "c"]).await;
    let first = results[0].as_ref().unwrap();
    for result in &results[1..] {
        assert_eq!(result.as_ref().unwrap(), first);
    }
}

#[tokio::test]
async fn json_output_shape() {
    let info = extractor("youtube_video.json")
        .extract_stream_info("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(
        json["name"],
        "Rick Astley - Never Gonna Give You Up (Official Music Video)"
    );
    assert_eq!(json["videoOnlyStreams"][0]["isVideoOnly"], true);
    assert_eq!(json["audioStreams"][0]["averageBitrate"], 48);
    assert_eq!(json["errors"][0]["field"], "uploadDate");
    assert!(json.get("uploadDate").is_none());
}
