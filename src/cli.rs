//! CLI interface for the exporter.
//!
//! One job: given an MTE id, fetch its road closures and write the closure
//! CSV. Non-interactive: diagnostics go to stderr, so stdout stays clean for
//! `--data-uri` output.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use crate::config::Config;
use crate::export;
use crate::fetch::{DetailsClient, DetailsResponse};
use crate::save;

/// Export a major traffic event's road closures to CSV.
#[derive(Debug, Parser)]
#[command(name = "mte-export", version)]
pub struct Cli {
    /// The MTE id to export closures for.
    pub mte_id: String,

    /// Write the CSV to this exact path instead of `mte_closure.csv` in the
    /// output directory.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the document as a `data:text/csv` URI on stdout instead of
    /// writing a file.
    #[arg(long)]
    pub data_uri: bool,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    if cli.mte_id.trim().is_empty() {
        return Err("MTE id must not be empty".to_string());
    }

    cmd_export(config, &cli)
}

fn cmd_export(config: &Config, cli: &Cli) -> Result<(), String> {
    let client = DetailsClient::new(config.details_url.as_str())
        .map_err(|e| format!("failed to build HTTP client: {e}"))?;

    let response = client
        .fetch(&cli.mte_id)
        .map_err(|e| format!("failed to fetch MTE details: {e}"))?;

    let (mte_id, details) = match response {
        DetailsResponse::Success { mte_id, details } => (mte_id, details),
        DetailsResponse::HttpStatus(status) => {
            warn!("details lookup returned status {status}; nothing exported");
            return Ok(());
        }
    };

    let closures = details.road_closures.objects;
    if closures.is_empty() {
        warn!("no closures for MTE {mte_id}; nothing exported");
        return Ok(());
    }

    let rows = export::build_rows(&closures, &mte_id);
    let csv = export::to_csv(&rows).map_err(|e| format!("failed to render CSV: {e}"))?;

    if cli.data_uri {
        println!("{}", save::data_uri(&csv));
        return Ok(());
    }

    let path = cli.out.clone().unwrap_or_else(|| {
        config
            .output_dir
            .as_deref()
            .unwrap_or(Path::new("."))
            .join(save::CSV_FILENAME)
    });

    save::write_csv(&path, &csv)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    info!("wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}
