use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use webpify::config::{Config, DEFAULT_QUALITY};

#[derive(Parser)]
#[command(name = "webpify")]
#[command(about = "Converts JPG/PNG assets to WebP and updates HTML references", version)]
struct Cli {
    /// Project root containing top-level HTML files and the assets tree
    #[arg(default_value = ".")]
    root: PathBuf,

    /// WebP encode quality (0-100)
    #[arg(
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    quality: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with RUST_LOG env filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,webpify=info")),
        )
        .init();

    let mut config = Config::new(cli.root);
    config.quality = cli.quality;

    webpify::pipeline::run(&config)?;

    Ok(())
}
