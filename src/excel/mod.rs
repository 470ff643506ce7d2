//! Excel workbook reading
//!
//! Loads one worksheet of an .xlsx file into an in-memory `Dataset`.

mod loader;

pub use loader::SpreadsheetLoader;
