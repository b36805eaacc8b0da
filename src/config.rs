//! Configuration loaded from `~/.config/streaminfo/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings for the yt-dlp fetcher.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FetcherConfig {
    /// Path or name of the extractor binary. Searched in PATH when unset.
    pub binary: Option<String>,
    /// Extra arguments passed before the URL.
    pub extra_args: Vec<String>,
    /// Verify TLS certificates (off unless set).
    pub check_certificate: bool,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config TOML")
    }
}

/// Load configuration from the default location.
///
/// Returns defaults if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

/// Load configuration from `path`, defaulting when it does not exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("streaminfo")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.fetcher.binary.is_none());
        assert!(!config.fetcher.check_certificate);
    }

    #[test]
    fn parse_fetcher_section() {
        let toml_str = r#"
[fetcher]
binary = "/usr/local/bin/yt-dlp"
extra_args = ["--cookies-from-browser", "firefox"]
check_certificate = true
"#;
        let config = Config::from_toml(toml_str).unwrap();
        assert_eq!(
            config.fetcher.binary.as_deref(),
            Some("/usr/local/bin/yt-dlp")
        );
        assert_eq!(
            config.fetcher.extra_args,
            ["--cookies-from-browser", "firefox"]
        );
        assert!(config.fetcher.check_certificate);
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let toml_str = "[fetcher]\nbinary = \"youtube-dl\"\n";
        let config = Config::from_toml(toml_str).unwrap();
        assert_eq!(config.fetcher.binary.as_deref(), Some("youtube-dl"));
        assert!(config.fetcher.extra_args.is_empty());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[fetcher\nbinary = 1").is_err());
        let wrong_type = "[fetcher]\nextra_args = \"not a list\"";
        assert!(Config::from_toml(wrong_type).is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = Path::new("/nonexistent/streaminfo/config.toml");
        let config = load_config_from(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_path_ends_with_app_dir() {
        assert!(config_path().ends_with("streaminfo/config.toml"));
    }
}
