use std::path::PathBuf;
use thiserror::Error;

pub type InspectResult<T> = Result<T, InspectError>;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Excel file not found at: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to open workbook: {0}")]
    Workbook(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Workbook contains no worksheets")]
    NoSheets,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
