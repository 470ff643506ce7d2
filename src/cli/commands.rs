use crate::error::{InspectError, InspectResult};
use crate::excel::SpreadsheetLoader;
use crate::report;
use crate::sample;
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_FILE: &str = "InventoryListApril.xlsx";
pub const DEFAULT_OUTPUT: &str = "excel_sample.json";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

/// Options for the inspect command
#[derive(Debug, Clone, PartialEq)]
pub struct InspectOptions {
    /// Workbook path, relative to the working directory unless absolute
    pub file: PathBuf,
    /// JSON sample path, relative to the working directory unless absolute
    pub output: PathBuf,
    /// Worksheet to read (first sheet when `None`)
    pub sheet: Option<String>,
    pub preview_rows: usize,
    pub sample_rows: usize,
    pub verbose: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sheet: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            sample_rows: DEFAULT_SAMPLE_ROWS,
            verbose: false,
        }
    }
}

/// How an inspection ended. Failures are reported on the console, not raised.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectOutcome {
    Completed {
        rows: usize,
        columns: usize,
        sampled: usize,
    },
    /// Worksheet names, in workbook order
    Sheets(Vec<String>),
    NotFound(PathBuf),
    Failed(String),
}

/// Execute the inspect command
pub fn inspect(options: &InspectOptions) -> InspectResult<InspectOutcome> {
    let cwd = env::current_dir()?;
    let excel_path = cwd.join(&options.file);

    println!("Looking for Excel file at: {}", excel_path.display());

    if !excel_path.exists() {
        return Ok(report_not_found(excel_path));
    }

    match load_and_report(&excel_path, &cwd.join(&options.output), options) {
        Ok(outcome) => Ok(outcome),
        Err(InspectError::FileNotFound(path)) => Ok(report_not_found(path)),
        Err(e) => {
            println!("{}", format!("Error reading Excel file: {}", e).red());
            Ok(InspectOutcome::Failed(e.to_string()))
        }
    }
}

/// Execute the list-sheets command
pub fn list_sheets(file: &Path) -> InspectResult<InspectOutcome> {
    let excel_path = env::current_dir()?.join(file);

    if !excel_path.exists() {
        return Ok(report_not_found(excel_path));
    }

    match SpreadsheetLoader::new(&excel_path).sheet_names() {
        Ok(names) => {
            println!(
                "{}",
                format!("Worksheets in {}:", excel_path.display()).bold()
            );
            for name in &names {
                println!("  - {}", name);
            }
            Ok(InspectOutcome::Sheets(names))
        }
        Err(e) => {
            println!("{}", format!("Error reading Excel file: {}", e).red());
            Ok(InspectOutcome::Failed(e.to_string()))
        }
    }
}

fn report_not_found(path: PathBuf) -> InspectOutcome {
    println!(
        "{}",
        format!("Excel file not found at: {}", path.display()).yellow()
    );
    InspectOutcome::NotFound(path)
}

fn load_and_report(
    excel_path: &Path,
    output_path: &Path,
    options: &InspectOptions,
) -> InspectResult<InspectOutcome> {
    if options.verbose {
        println!("{}", "📖 Reading Excel file...".cyan());
        if let Some(ref sheet) = options.sheet {
            println!("   Sheet: {}", sheet.bright_blue());
        }
    }

    let mut loader = SpreadsheetLoader::new(excel_path);
    if let Some(ref sheet) = options.sheet {
        loader = loader.with_sheet(sheet.clone());
    }
    let dataset = loader.load()?;

    println!("{}", "Excel file successfully read".green());
    println!("Number of rows: {}", dataset.row_count());
    println!("Number of columns: {}", dataset.column_count());

    println!("\n{}", "Column headers:".bold());
    if dataset.column_count() > 0 {
        println!("{}", report::render_headers(&dataset));
    }

    println!(
        "\n{}",
        format!("First {} rows:", options.preview_rows).bold()
    );
    println!("{}", report::render_preview(&dataset, options.preview_rows));

    if options.verbose {
        println!("\n{}", "💾 Writing JSON sample...".cyan());
    }
    let sampled = sample::write_sample(&dataset, options.sample_rows, output_path)?;

    println!(
        "\n{}",
        format!("Sample data saved to {}", options.output.display()).green()
    );

    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        sampled,
        "inspection complete"
    );

    Ok(InspectOutcome::Completed {
        rows: dataset.row_count(),
        columns: dataset.column_count(),
        sampled,
    })
}
