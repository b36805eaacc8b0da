use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use streaminfo::config::load_config;
use streaminfo::{DocumentFetcher, InfoJsonFetcher, StreamExtractor, YtDlpFetcher};

use super::output::format_summary;

pub async fn cmd_info(
    urls: &[String],
    info_json: Option<PathBuf>,
    json: bool,
    show_errors: bool,
    binary: Option<String>,
) -> Result<()> {
    let fetcher: Box<dyn DocumentFetcher> = if let Some(path) = info_json {
        Box::new(InfoJsonFetcher::new(path))
    } else {
        let mut config = load_config()?.fetcher;
        if binary.is_some() {
            config.binary = binary;
        }
        let fetcher = YtDlpFetcher::from_config(&config).context("cannot set up yt-dlp")?;
        if !fetcher.check_available().await {
            bail!("{} is not runnable", fetcher.binary());
        }
        Box::new(fetcher)
    };

    eprintln!("🔎 Fetcher: {}", fetcher.name());
    let extractor = StreamExtractor::new(fetcher);
    let results = extractor.extract_many(urls).await;

    let mut failed = 0;
    let mut extracted = Vec::new();
    for (url, result) in urls.iter().zip(results) {
        match result {
            Ok(info) => extracted.push(info),
            Err(e) => {
                eprintln!("❌ {url}: {e}");
                failed += 1;
            }
        }
    }

    if json {
        let out = if urls.len() == 1 {
            match extracted.first() {
                Some(info) => serde_json::to_string_pretty(info)?,
                None => String::new(),
            }
        } else {
            serde_json::to_string_pretty(&extracted)?
        };
        if !out.is_empty() {
            println!("{out}");
        }
    } else {
        for info in &extracted {
            print!("{}", format_summary(info, show_errors));
        }
    }

    if failed > 0 {
        bail!("{failed} of {} extractions failed", urls.len());
    }
    Ok(())
}
