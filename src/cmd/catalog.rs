use anyhow::{bail, Result};

use streaminfo::itag::{ItagItem, ItagType};
use streaminfo::{ItagCatalog, MediaFormat};

fn format_item(item: &ItagItem) -> String {
    let kind = match item.kind {
        ItagType::Video => "video",
        ItagType::Audio => "audio",
        ItagType::VideoOnly => "video-only",
    };
    let quality = match (item.resolution, item.avg_bitrate) {
        (Some(resolution), _) => resolution.to_string(),
        (None, Some(bitrate)) => format!("{bitrate}k"),
        (None, None) => "-".to_string(),
    };
    format!(
        "{:>4}  {kind:<10} {:<5} {quality}",
        item.id,
        item.format.suffix()
    )
}

pub fn cmd_catalog(itag: Option<i64>) -> Result<()> {
    match itag {
        Some(id) => {
            let Some(item) = ItagCatalog::get(id) else {
                bail!("Unknown itag: {id}");
            };
            println!("{}", format_item(item));
        }
        None => {
            for item in ItagCatalog::items() {
                println!("{}", format_item(item));
            }
        }
    }
    Ok(())
}

pub fn cmd_formats() {
    for format in MediaFormat::ALL {
        println!(
            "{:<5} {:<28} {:<22} 0x{:x}",
            format.suffix(),
            format.name(),
            format.mime_type(),
            format.id()
        );
    }
}
