//! Console rendering of a loaded dataset
//!
//! Everything here returns plain text; colouring is left to the command layer.

use crate::types::{CellValue, Dataset};
use unicode_width::UnicodeWidthStr;

/// Gap between preview columns
const COLUMN_GAP: &str = "  ";

/// Magnitude from which numbers render in scientific notation
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Format a number for display, removing unnecessary decimal places
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let sign = if n < 0.0 { "-" } else { "" };
        return format!("{}inf", sign);
    }
    // No room for six decimals at this size; rounding would also overflow near f64::MAX
    if n.abs() >= SCIENTIFIC_THRESHOLD {
        return format!("{:e}", n);
    }
    // Round to 6 decimal places for display
    let rounded = (n * 1e6).round() / 1e6;
    let text = format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Display form of a single cell
pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => "NaN".to_string(),
        CellValue::Text(s) => s.replace('\r', "\\r").replace('\n', "\\n"),
        CellValue::Error(s) => s.clone(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => format_number(*f),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::DateTime(dt) if cell.is_date_only() => dt.format("%Y-%m-%d").to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

/// One `  - <name>` line per column
pub fn render_headers(dataset: &Dataset) -> String {
    dataset
        .columns
        .iter()
        .map(|name| format!("  - {}", name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text table of the first `n` rows.
///
/// Row indices form a left-aligned first column; every data column is
/// right-aligned to its widest entry (header included).
pub fn render_preview(dataset: &Dataset, n: usize) -> String {
    let rows = dataset.head(n);

    if rows.is_empty() || dataset.columns.is_empty() {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            dataset.columns.join(", ")
        );
    }

    let index_labels: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
    let index_width = index_labels.iter().map(|l| l.width()).max().unwrap_or(0);

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(format_cell).collect())
        .collect();

    let widths: Vec<usize> = dataset
        .columns
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let mut header_line = " ".repeat(index_width);
    for (header, width) in dataset.columns.iter().zip(&widths) {
        header_line.push_str(COLUMN_GAP);
        header_line.push_str(&pad_left(header, *width));
    }
    lines.push(header_line);

    for (label, row) in index_labels.iter().zip(&cells) {
        let mut line = pad_right(label, index_width);
        for (value, width) in row.iter().zip(&widths) {
            line.push_str(COLUMN_GAP);
            line.push_str(&pad_left(value, *width));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn inventory() -> Dataset {
        let mut ds = Dataset::new(vec![
            "Item".to_string(),
            "Unit".to_string(),
            "Rate".to_string(),
        ]);
        ds.add_row(vec![
            CellValue::Text("Mozzarella".to_string()),
            CellValue::Text("kg".to_string()),
            CellValue::Float(1250.5),
        ]);
        ds.add_row(vec![
            CellValue::Text("Olives".to_string()),
            CellValue::Empty,
            CellValue::Int(300),
        ]);
        ds
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(2.500), "2.5");
        assert_eq!(format_number(0.123456789), "0.123457");
        assert_eq!(format_number(-0.0000001), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_number_huge_values_stay_finite() {
        assert_eq!(format_number(1e303), "1e303");
        assert_eq!(format_number(-1.7e308), "-1.7e308");
        assert_eq!(format_number(2.5e16), "2.5e16");
        assert_eq!(format_number(123456789012.5), "123456789012.5");
    }

    #[test]
    fn test_render_preview_huge_float() {
        let mut ds = Dataset::new(vec!["x".to_string()]);
        ds.add_row(vec![CellValue::Float(1e303)]);
        assert_eq!(render_preview(&ds, 5), "       x\n0  1e303");
    }

    #[test]
    fn test_format_cell() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
        assert_eq!(format_cell(&CellValue::Empty), "NaN");
        assert_eq!(format_cell(&CellValue::Bool(true)), "True");
        assert_eq!(format_cell(&CellValue::Int(-4)), "-4");
        assert_eq!(format_cell(&CellValue::Text("a\nb".to_string())), "a\\nb");
        assert_eq!(
            format_cell(&CellValue::DateTime(date.and_hms_opt(0, 0, 0).unwrap())),
            "2024-04-30"
        );
        assert_eq!(
            format_cell(&CellValue::DateTime(date.and_hms_opt(18, 5, 9).unwrap())),
            "2024-04-30 18:05:09"
        );
    }

    #[test]
    fn test_render_headers() {
        assert_eq!(render_headers(&inventory()), "  - Item\n  - Unit\n  - Rate");
    }

    #[test]
    fn test_render_preview_alignment() {
        let expected = [
            "         Item  Unit    Rate",
            "0  Mozzarella    kg  1250.5",
            "1      Olives   NaN     300",
        ]
        .join("\n");
        assert_eq!(render_preview(&inventory(), 5), expected);
    }

    #[test]
    fn test_render_preview_limits_rows() {
        let preview = render_preview(&inventory(), 1);
        assert_eq!(preview.lines().count(), 2);
        assert!(!preview.contains("Olives"));
    }

    #[test]
    fn test_render_preview_wide_index() {
        let mut ds = Dataset::new(vec!["n".to_string()]);
        for i in 0..11 {
            ds.add_row(vec![CellValue::Int(i)]);
        }
        let preview = render_preview(&ds, 11);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines[0], "     n");
        assert_eq!(lines[1], "0    0");
        assert_eq!(lines[11], "10  10");
    }

    #[test]
    fn test_render_preview_wide_characters() {
        let mut ds = Dataset::new(vec!["名前".to_string()]);
        ds.add_row(vec![CellValue::Text("x".to_string())]);
        assert_eq!(render_preview(&ds, 5), "   名前\n0     x");
    }

    #[test]
    fn test_render_preview_empty() {
        let ds = Dataset::new(vec!["Item".to_string(), "Qty".to_string()]);
        assert_eq!(
            render_preview(&ds, 5),
            "Empty DataFrame\nColumns: [Item, Qty]\nIndex: []"
        );
    }
}
