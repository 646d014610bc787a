use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use giftrecon_core::pipeline::{self, RunConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reconcile a Converge settlement batch with the iModules CRM exports into the unified gift ledger reports", long_about = None)]
struct Cli {
    /// Converge settlement batch report
    converge_report: PathBuf,

    /// iModules contact export
    imod_export: PathBuf,

    /// iModules designations export
    imod_designations: PathBuf,

    /// Directory the reports are written under
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = RunConfig {
        converge_report: cli.converge_report,
        imod_export: cli.imod_export,
        imod_designations: cli.imod_designations,
        output_dir: cli.output_dir,
    };

    let receipt = pipeline::run(&config).context("reconciliation run failed")?;
    info!(
        merged_gifts = receipt.merged_gifts,
        split_gifts = receipt.split_gifts,
        "reconciliation complete"
    );
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}
