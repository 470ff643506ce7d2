use clap::Parser;
use std::path::PathBuf;
use xlsx_inspect::cli::{self, commands, InspectOptions};
use xlsx_inspect::error::InspectResult;

#[derive(Parser)]
#[command(name = "xlsx-inspect")]
#[command(about = "Inspect an Excel workbook and export a JSON sample of its first rows.")]
#[command(long_about = "xlsx-inspect - quick look at an Excel workbook

Reads one worksheet (the first by default) and prints:
  - number of rows and columns
  - the column headers
  - the first rows as a text table

Then writes the first rows to a JSON file as an array of objects
(column name -> cell value) for manual review.

With no arguments it reads InventoryListApril.xlsx from the current
directory and writes excel_sample.json next to it.

EXAMPLES:
  xlsx-inspect                                   # Defaults
  xlsx-inspect stock.xlsx -o stock_sample.json   # Other files
  xlsx-inspect stock.xlsx --sheet March          # Pick a worksheet
  xlsx-inspect stock.xlsx --list-sheets          # Show worksheet names

LOGGING:
  Diagnostics go to stderr. Set RUST_LOG (e.g. RUST_LOG=xlsx_inspect=debug)
  or pass --verbose.")]
#[command(version)]
struct Cli {
    /// Path to the Excel file (.xlsx), relative to the current directory
    #[arg(default_value = commands::DEFAULT_FILE, env = "XLSX_INSPECT_FILE")]
    file: PathBuf,

    /// Where to write the JSON sample
    #[arg(short, long, default_value = commands::DEFAULT_OUTPUT, env = "XLSX_INSPECT_OUTPUT")]
    output: PathBuf,

    /// Worksheet to read (defaults to the first one)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Number of rows shown in the console preview
    #[arg(long, default_value_t = commands::DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,

    /// Number of rows exported to the JSON sample
    #[arg(long, default_value_t = commands::DEFAULT_SAMPLE_ROWS)]
    sample_rows: usize,

    /// List worksheet names and exit
    #[arg(long)]
    list_sheets: bool,

    /// Show verbose steps and debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "xlsx_inspect=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> InspectResult<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if args.list_sheets {
        cli::list_sheets(&args.file)?;
        return Ok(());
    }

    let options = InspectOptions {
        file: args.file,
        output: args.output,
        sheet: args.sheet,
        preview_rows: args.preview_rows,
        sample_rows: args.sample_rows,
        verbose: args.verbose,
    };

    cli::inspect(&options)?;
    Ok(())
}
