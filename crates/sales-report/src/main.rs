mod bootstrap;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sales_data::analysis::{load_sales_file, run_pipeline};
use sales_data::export;

/// Clean a raw sales CSV and report KPI aggregates
#[derive(Parser, Debug)]
#[command(name = "sales-report", version)]
struct Cli {
    /// Path to the raw sales CSV file
    input: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json", "csv"])]
    format: String,

    /// Number of products in the top-revenue ranking
    #[arg(long, default_value = "5")]
    top: usize,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::setup_logging(&cli.log_level)?;

    tracing::info!("sales-report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Input: {}", cli.input.display());

    let text = load_sales_file(&cli.input)?;
    let outcome = run_pipeline(&text);

    match cli.format.as_str() {
        "json" => {
            let report = report::JsonReport::new(&outcome, cli.top);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            print!("{}", export::to_csv(&outcome.records));
        }
        _ => {
            print!("{}", report::render_text(&outcome, cli.top));
        }
    }

    Ok(())
}
