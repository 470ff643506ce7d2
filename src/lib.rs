//! xlsx-inspect - quick look at an Excel workbook
//!
//! Loads one worksheet, reports its dimensions, headers and first rows, and
//! exports a JSON sample of the first records for manual review.
//!
//! # Example
//!
//! ```no_run
//! use xlsx_inspect::excel::SpreadsheetLoader;
//! use xlsx_inspect::sample::write_sample;
//! use std::path::Path;
//!
//! let dataset = SpreadsheetLoader::new("InventoryListApril.xlsx").load()?;
//!
//! println!("Rows: {}", dataset.row_count());
//! println!("Columns: {}", dataset.column_count());
//!
//! write_sample(&dataset, 10, Path::new("excel_sample.json"))?;
//! # Ok::<(), xlsx_inspect::error::InspectError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod report;
pub mod sample;
pub mod types;

// Re-export commonly used types
pub use error::{InspectError, InspectResult};
pub use types::{CellValue, Dataset, Record};
