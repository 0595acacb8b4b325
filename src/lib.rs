pub mod catalog;
pub mod config;
pub mod convert;
pub mod dates;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod legacy;
pub mod models;
pub mod stats;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

pub use utils::slugify;

use catalog::Catalog;
use config::AppConfig;
use convert::Conversion;
use stats::Summary;

pub struct Report {
    pub conversion: Conversion,
    pub summary: Summary,
    pub json_path: PathBuf,
    pub js_path: PathBuf,
}

/// Converts the configured event list and writes both output files.
///
/// Rows that fail to convert are skipped and counted; only an unreadable
/// event list or an unwritable output aborts the run.
pub fn run(config: &AppConfig) -> Result<Report> {
    let records = match &config.events_path {
        Some(path) => {
            info!("reading event list from {}", path.display());
            legacy::load_records(path)?
        }
        None => legacy::embedded_records().context("built-in event list is invalid")?,
    };
    info!("converting {} legacy events", records.len());

    let conversion = convert::convert_all(Catalog::embedded(), &records);

    let json_path = config.json_path();
    let js_path = config.js_path();
    export::write_json(&json_path, &conversion.concerts)?;
    info!("wrote {}", json_path.display());
    export::write_js(&js_path, &conversion.concerts, &config.js_binding)?;
    info!("wrote {}", js_path.display());

    let summary = Summary::from_sorted(
        &conversion.concerts,
        conversion.skipped,
        conversion.diagnostics.generated_ids(),
    );

    Ok(Report {
        conversion,
        summary,
        json_path,
        js_path,
    })
}
