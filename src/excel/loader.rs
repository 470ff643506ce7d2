//! Spreadsheet loader - Excel (.xlsx) worksheet → Dataset

use crate::error::{InspectError, InspectResult};
use crate::types::{CellValue, Dataset};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Largest float that still converts to an integer without loss
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Loads one worksheet of an .xlsx workbook into a `Dataset`.
///
/// The first row of the sheet's used range supplies the column headers.
pub struct SpreadsheetLoader {
    path: PathBuf,
    sheet: Option<String>,
}

impl SpreadsheetLoader {
    /// Create a loader for the workbook at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: None,
        }
    }

    /// Read the named worksheet instead of the first one
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Worksheet names in workbook order
    pub fn sheet_names(&self) -> InspectResult<Vec<String>> {
        let workbook = self.open()?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Load the selected worksheet
    pub fn load(&self) -> InspectResult<Dataset> {
        let mut workbook = self.open()?;
        let sheet_names = workbook.sheet_names().to_vec();

        let sheet_name = match &self.sheet {
            Some(name) if sheet_names.iter().any(|s| s == name) => name.clone(),
            Some(name) => return Err(InspectError::SheetNotFound(name.clone())),
            None => sheet_names.first().cloned().ok_or(InspectError::NoSheets)?,
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| InspectError::Workbook(format!("{}: {}", sheet_name, e)))?;

        let dataset = build_dataset(&range);
        debug!(
            sheet = %sheet_name,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "loaded worksheet"
        );

        Ok(dataset)
    }

    fn open(&self) -> InspectResult<Xlsx<BufReader<File>>> {
        if !self.path.exists() {
            return Err(InspectError::FileNotFound(self.path.clone()));
        }

        debug!(path = %self.path.display(), "opening workbook");
        open_workbook(&self.path)
            .map_err(|e: calamine::XlsxError| InspectError::Workbook(e.to_string()))
    }
}

/// Convert a worksheet range into a dataset (header row + data rows).
///
/// Columns left of the used range are kept as blank columns, so column
/// indices always count from column A.
fn build_dataset(range: &Range<Data>) -> Dataset {
    if range.is_empty() {
        return Dataset::default();
    }

    let leading = range.start().map_or(0, |(_, col)| col as usize);
    let blank = Data::Empty;
    let padded = |row: &[Data]| -> Vec<Data> {
        std::iter::repeat(&blank)
            .take(leading)
            .chain(row.iter())
            .cloned()
            .collect()
    };

    let mut rows = range.rows().map(padded);
    let raw_headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(idx, cell)| header_name(idx, cell))
            .collect(),
        None => return Dataset::default(),
    };

    let mut dataset = Dataset::new(dedupe_headers(raw_headers));

    for row in rows {
        let values: Vec<CellValue> = row.iter().map(convert_cell).collect();
        // Blank lines in the sheet do not count as data rows
        if values.iter().all(CellValue::is_empty) {
            continue;
        }
        dataset.add_row(values);
    }

    dataset
}

/// Column name for a header cell; blanks become `Unnamed: <idx>`
fn header_name(idx: usize, cell: &Data) -> String {
    let name = match convert_cell(cell) {
        CellValue::Empty => String::new(),
        CellValue::Text(s) | CellValue::Error(s) => s,
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    if name.is_empty() {
        format!("Unnamed: {}", idx)
    } else {
        name
    }
}

/// Disambiguate repeated header names: `Qty`, `Qty.1`, `Qty.2`, ...
fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(names.len());
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(names.len());

    for name in names {
        if used.insert(name.clone()) {
            result.push(name);
            continue;
        }

        let mut k = next_suffix.get(&name).copied().unwrap_or(1);
        let candidate = loop {
            let candidate = format!("{}.{}", name, k);
            k += 1;
            if !used.contains(&candidate) {
                break candidate;
            }
        };
        next_suffix.insert(name, k);
        used.insert(candidate.clone());
        result.push(candidate);
    }

    result
}

/// Convert a calamine cell to a `CellValue`
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        // xlsx stores every number as a float; whole numbers read back as integers
        Data::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_INT => CellValue::Int(*f as i64),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Float(dt.as_f64()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Text(s.clone()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

/// Parse an ISO-8601 date or datetime as stored in strict OOXML files
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
