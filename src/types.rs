use chrono::{NaiveDateTime, Timelike};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Serialization format for datetime cells in the JSON sample
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

//==============================================================================
// Cell values
//==============================================================================

/// A single worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Excel error literal, e.g. `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// True when the value is a datetime with no time-of-day component
    pub fn is_date_only(&self) -> bool {
        matches!(self, CellValue::DateTime(dt) if dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Text(s) | CellValue::Error(s) => serializer.serialize_str(s),
            CellValue::Int(i) => serializer.serialize_i64(*i),
            // serde_json writes non-finite floats as null
            CellValue::Float(f) => serializer.serialize_f64(*f),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::DateTime(dt) => {
                serializer.collect_str(&dt.format(DATETIME_FORMAT))
            }
        }
    }
}

//==============================================================================
// Dataset
//==============================================================================

/// In-memory table loaded from one worksheet.
///
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding with `Empty` or truncating to the column count
    pub fn add_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// First `n` rows (fewer if the dataset is shorter)
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// First `n` rows as column-name → value records
    pub fn records(&self, n: usize) -> Vec<Record<'_>> {
        self.head(n)
            .iter()
            .map(|values| Record {
                columns: &self.columns,
                values,
            })
            .collect()
    }
}

/// A row viewed as a mapping from column name to cell value.
///
/// Serializes as a map whose keys keep the worksheet's column order.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [CellValue],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
