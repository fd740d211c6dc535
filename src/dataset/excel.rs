//! Spreadsheet decoding
//!
//! Turns uploaded `.xlsx` bytes into a header-indexed wide table of plain
//! cell values. Only the first worksheet is read, with the first row taken
//! as the header row.

use crate::error::{ServiceError, ServiceResult};
use calamine::{DataType, Reader, Xlsx};
use std::io::Cursor;

/// One spreadsheet cell, reduced to what the reshaper needs
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Cell content as trimmed text; `None` for empty/whitespace-only cells
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            CellValue::Empty => return None,
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Cell content coerced to a number; `None` when not numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty | CellValue::Bool(_) => None,
        }
    }
}

/// Render a numeric cell the way a text column would show it (no trailing
/// `.0` for integral values)
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// A wide spreadsheet: named columns over rows of cells
#[derive(Debug, Clone)]
pub struct WideTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl WideTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a named column, exact match on the trimmed header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Cell at (row, column); `Empty` for rows shorter than the header
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Decode xlsx bytes into a [`WideTable`].
///
/// Fails with a payload error when the bytes are not a readable workbook
/// or the workbook has no worksheet.
pub fn parse_workbook(bytes: &[u8]) -> ServiceResult<WideTable> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| ServiceError::Payload(format!("could not open workbook: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ServiceError::Payload("workbook has no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ServiceError::Payload(format!("worksheet '{sheet_name}' not found")))?
        .map_err(|e| ServiceError::Payload(format!("could not read worksheet: {e}")))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(WideTable::new(headers, rows))
}

fn convert_cell(cell: &DataType) -> CellValue {
    match cell {
        DataType::String(s) => CellValue::Text(s.clone()),
        DataType::Float(f) => CellValue::Number(*f),
        DataType::Int(i) => CellValue::Number(*i as f64),
        DataType::Bool(b) => CellValue::Bool(*b),
        DataType::DateTime(f) => CellValue::Number(*f),
        _ => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage_bytes() {
        let err = parse_workbook(b"not a real workbook").unwrap_err();
        assert!(matches!(err, ServiceError::Payload(_)));
    }

    #[test]
    fn test_cell_text_coercion() {
        assert_eq!(CellValue::Text("  halo ".into()).as_text(), Some("halo".into()));
        assert_eq!(CellValue::Text("   ".into()).as_text(), None);
        assert_eq!(CellValue::Number(3.0).as_text(), Some("3".into()));
        assert_eq!(CellValue::Number(2.5).as_text(), Some("2.5".into()));
        assert_eq!(CellValue::Empty.as_text(), None);
    }

    #[test]
    fn test_cell_number_coercion() {
        assert_eq!(CellValue::Number(1.0).as_number(), Some(1.0));
        assert_eq!(CellValue::Text("0".into()).as_number(), Some(0.0));
        assert_eq!(CellValue::Text("x".into()).as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn test_column_lookup() {
        let table = WideTable::new(
            vec!["pertanyaan 1".into(), "label 1".into()],
            vec![vec![CellValue::Text("a".into()), CellValue::Number(1.0)]],
        );
        assert_eq!(table.column_index("pertanyaan 1"), Some(0));
        assert_eq!(table.column_index("pertanyaan 2"), None);
        assert_eq!(table.cell(0, 1), &CellValue::Number(1.0));
        assert_eq!(table.cell(0, 5), &CellValue::Empty);
    }
}
