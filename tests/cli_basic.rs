//! Integration tests for basic CLI behavior.
//!
//! Runs the binary against saved info JSON fixtures so no extractor tool or
//! network access is needed.

#![allow(deprecated)] // cargo_bin deprecation: replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `streaminfo` binary.
fn streaminfo() -> Command {
    Command::cargo_bin("streaminfo").expect("binary 'streaminfo' should be built")
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    streaminfo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: streaminfo"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("formats"));
}

#[test]
fn version_flag_shows_semver() {
    let semver = predicate::str::is_match(r"^streaminfo \d+\.\d+\.\d+\n$").unwrap();
    streaminfo()
        .arg("--version")
        .assert()
        .success()
        .stdout(semver);
}

#[test]
fn no_args_shows_error_and_usage() {
    streaminfo()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: streaminfo"));
}

#[test]
fn info_requires_a_url() {
    streaminfo()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<URLS>"));
}

// ─── info ────────────────────────────────────────────────────────────────────

#[test]
fn info_summary_from_info_json() {
    streaminfo()
        .args(["info", "https://youtu.be/dQw4w9WgXcQ", "--info-json"])
        .arg(fixture("youtube_video.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Never Gonna Give You Up"))
        .stdout(predicate::str::contains("720p"))
        .stdout(predicate::str::contains("Video-only (3)"))
        .stdout(predicate::str::contains("Audio (3)"))
        .stdout(predicate::str::contains("upload_date_fail").not())
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn info_errors_flag_lists_unavailable_fields() {
    streaminfo()
        .args(["info", "u", "--errors", "--info-json"])
        .arg(fixture("youtube_video.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("upload_date_fail: missing"))
        .stdout(predicate::str::contains("dislike_count: missing"));
}

#[test]
fn info_json_output_is_valid_json() {
    let output = streaminfo()
        .args(["info", "u", "--json", "--info-json"])
        .arg(fixture("generic_site.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "417536");
    assert_eq!(value["streamType"], "LIVE");
    assert_eq!(value["videoStreams"][1]["resolution"], "http-720p");
}

#[test]
fn info_with_unrunnable_binary_fails_before_extraction() {
    streaminfo()
        .args(["info", "u", "--binary", "/nonexistent/streaminfo-yt-dlp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not runnable"));
}

#[test]
fn info_fails_on_missing_title() {
    streaminfo()
        .args(["info", "u", "--info-json"])
        .arg(fixture("missing_title.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"));
}

#[test]
fn info_fails_without_usable_streams() {
    streaminfo()
        .args(["info", "u", "--info-json"])
        .arg(fixture("manifests_only.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("usable"));
}

// ─── catalog / formats ───────────────────────────────────────────────────────

#[test]
fn catalog_lists_itags() {
    streaminfo()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("720p"))
        .stdout(predicate::str::contains("2160p60"));
}

#[test]
fn catalog_single_itag() {
    streaminfo()
        .args(["catalog", "--itag", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("22  video"));
}

#[test]
fn catalog_unknown_itag_fails() {
    streaminfo()
        .args(["catalog", "--itag", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown itag"));
}

#[test]
fn formats_lists_suffixes() {
    streaminfo()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("video/mp4"))
        .stdout(predicate::str::contains("srv3"));
}
