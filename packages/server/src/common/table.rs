//! In-memory table model for uploaded spreadsheets.
//!
//! The first worksheet row is the header row; everything below it is the
//! table body that row indices refer to.

use std::fmt;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use thiserror::Error;

/// Text form of workbook date cells.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Dates, durations and other values kept in their workbook text form
    Other(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Textual representation of the value.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Other(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            // Error cells (#N/A, #DIV/0!) count as missing values
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(v) => Cell::Float(*v),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) if dt.is_datetime() => match dt.as_datetime() {
                Some(value) => Cell::Other(value.format(DATETIME_FORMAT).to_string()),
                None => Cell::Other(data.to_string()),
            },
            other => Cell::Other(other.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Workbook loading errors.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("workbook could not be read: {0}")]
    Unreadable(String),

    #[error("workbook has no worksheets")]
    NoWorksheet,
}

/// Rectangular table: header names plus body rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, padding ragged rows with empty cells so every row has
    /// `column_count()` cells.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(columns.len()))
            .max()
            .unwrap_or(0);

        let mut columns = columns;
        columns.resize(width, String::new());

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Read the first worksheet of an `.xlsx` / `.xls` workbook.
    pub fn from_workbook_bytes(bytes: Vec<u8>) -> Result<Self, TableError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| TableError::Unreadable(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(TableError::NoWorksheet)?
            .map_err(|e| TableError::Unreadable(e.to_string()))?;

        // Positions are absolute so a used range starting below A1 keeps its coordinates
        let Some((end_row, end_col)) = range.end() else {
            return Ok(Self::default());
        };

        let read_row = |row: u32| -> Vec<Cell> {
            (0..=end_col)
                .map(|col| range.get_value((row, col)).map(Cell::from).unwrap_or(Cell::Empty))
                .collect()
        };

        let columns = read_row(0).iter().map(Cell::to_text).collect();
        let rows = (1..=end_row).map(read_row).collect();

        Ok(Self::new(columns, rows))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cell at a 0-indexed body position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}
