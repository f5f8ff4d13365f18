//! Tablecast CLI - export an HTML table to CSV

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tablecast::prelude::*;
use tablecast_html::HtmlTable;

#[derive(Parser)]
#[command(name = "tablecast")]
#[command(
    author,
    version,
    about = "Export the first HTML <table> of a document as CSV"
)]
struct Cli {
    /// Input HTML file
    input: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replace the final table row with a spreadsheet aggregate row
    #[arg(long)]
    summary: bool,

    /// Skip the UTF-8 byte-order-mark prefix
    #[arg(long)]
    no_bom: bool,

    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character");
    }

    let html = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read '{}'", cli.input.display()))?;
    let table = HtmlTable::parse(&html)
        .with_context(|| format!("No table found in '{}'", cli.input.display()))?;

    let options = ExportOptions {
        summary_row: cli.summary,
        csv: CsvWriteOptions {
            delimiter: cli.delimiter as u8,
            byte_order_mark: !cli.no_bom,
            ..Default::default()
        },
    };

    let csv_text = tablecast::to_csv(&table, &options).context("Failed to export table")?;

    match cli.output {
        Some(output_path) => {
            std::fs::write(&output_path, &csv_text)
                .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
            eprintln!("Wrote '{}'", output_path.display());
        }
        None => {
            io::stdout()
                .write_all(csv_text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
