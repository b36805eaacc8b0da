//! `streaminfo` CLI - inspect the streams behind a media URL

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "streaminfo")]
#[command(about = "Extract typed stream metadata from yt-dlp info documents")]
#[command(version)]
struct Cli {
    /// Verbose logging (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract stream info for one or more URLs
    Info {
        /// Media page URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Read the metadata document from a saved info JSON file instead of running yt-dlp
        #[arg(long, value_name = "PATH")]
        info_json: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// List optional fields that could not be read
        #[arg(long)]
        errors: bool,

        /// yt-dlp compatible binary (overrides config)
        #[arg(long, value_name = "PATH")]
        binary: Option<String>,
    },

    /// List the itag resolution catalog
    Catalog {
        /// Show a single itag
        #[arg(long)]
        itag: Option<i64>,
    },

    /// List known media formats
    Formats,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stderr keeps stdout clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info {
            urls,
            info_json,
            json,
            errors,
            binary,
        } => {
            cmd::info::cmd_info(&urls, info_json, json, errors, binary).await?;
        }
        Commands::Catalog { itag } => {
            cmd::catalog::cmd_catalog(itag)?;
        }
        Commands::Formats => {
            cmd::catalog::cmd_formats();
        }
    }

    Ok(())
}
