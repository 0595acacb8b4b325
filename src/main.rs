use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use concert_convert_lib::config::AppConfig;

/// Converts the legacy event list into concert records.
#[derive(Parser, Debug)]
#[command(name = "concert-convert")]
#[command(version)]
struct Args {
    /// JSON config file; missing file means defaults
    #[arg(short, long, env = "CONCERT_CONVERT_CONFIG")]
    config: Option<PathBuf>,

    /// Directory the two output files are written to
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Event list to convert instead of the built-in one
    #[arg(short, long)]
    events: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "concert_convert=info,concert_convert_lib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref()).context("failed to load config")?;
    if let Some(dir) = args.out_dir {
        config.output_dir = dir;
    }
    if let Some(events) = args.events {
        config.events_path = Some(events);
    }

    let report = concert_convert_lib::run(&config)?;

    println!(
        "Successfully converted {} concerts to {}",
        report.summary.total,
        report.json_path.display()
    );
    println!(
        "Also created JavaScript version: {}",
        report.js_path.display()
    );
    println!();
    println!("{}", report.summary);

    Ok(())
}
