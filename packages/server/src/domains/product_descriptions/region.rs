//! Locating the product-description cells in an uploaded table.

use thiserror::Error;
use tracing::{error, info};

use crate::common::{Cell, Table};

/// Fixed rectangular region: one column, from `start_row` to the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// 0-indexed body row where the region starts
    pub start_row: usize,
    /// 0-indexed column
    pub column: usize,
}

/// Product descriptions live in column F from cell F17 down in the order template.
pub const DESCRIPTION_REGION: Region = Region {
    start_row: 16,
    column: 5,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Cannot read product descriptions: table has {rows} rows, at least {required} required")]
    TooFewRows { rows: usize, required: usize },

    #[error("Cannot read product descriptions: table has {columns} columns, at least {required} required")]
    TooFewColumns { columns: usize, required: usize },
}

/// Extract the product-description cells from [`DESCRIPTION_REGION`].
pub fn extract(table: &Table) -> Result<Vec<Cell>, ExtractionError> {
    extract_region(table, DESCRIPTION_REGION)
}

/// Extract the non-empty cells of `region`, top to bottom.
pub fn extract_region(table: &Table, region: Region) -> Result<Vec<Cell>, ExtractionError> {
    if table.row_count() < region.start_row {
        error!(
            rows = table.row_count(),
            start_row = region.start_row,
            "Description region starts below the last row"
        );
        return Err(ExtractionError::TooFewRows {
            rows: table.row_count(),
            required: region.start_row,
        });
    }

    if table.column_count() <= region.column {
        error!(
            columns = table.column_count(),
            column = region.column,
            "Description column is outside the table"
        );
        return Err(ExtractionError::TooFewColumns {
            columns: table.column_count(),
            required: region.column + 1,
        });
    }

    let cells: Vec<Cell> = (region.start_row..table.row_count())
        .filter_map(|row| table.cell(row, region.column))
        .filter(|cell| !cell.is_empty())
        .cloned()
        .collect();

    info!(count = cells.len(), "Extracted product description cells");

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_column_f(rows: usize, values: &[(usize, Cell)]) -> Table {
        let mut body = vec![vec![Cell::Empty; 6]; rows];
        for (row, cell) in values {
            body[*row][5] = cell.clone();
        }
        Table::new(vec!["header".to_string(); 6], body)
    }

    #[test]
    fn extracts_from_row_sixteen_down_skipping_empties() {
        let table = table_with_column_f(
            19,
            &[
                (15, Cell::from("above the region")),
                (16, Cell::from("red | large")),
                (17, Cell::from("blue | small | new")),
                (18, Cell::Empty),
            ],
        );

        let cells = extract(&table).unwrap();

        assert_eq!(
            cells,
            vec![Cell::from("red | large"), Cell::from("blue | small | new")]
        );
    }

    #[test]
    fn keeps_non_text_cells() {
        let table = table_with_column_f(18, &[(16, Cell::Int(7)), (17, Cell::Float(1.5))]);

        assert_eq!(extract(&table).unwrap(), vec![Cell::Int(7), Cell::Float(1.5)]);
    }

    #[test]
    fn too_few_rows_is_an_error() {
        let table = table_with_column_f(15, &[]);

        assert_eq!(
            extract(&table),
            Err(ExtractionError::TooFewRows {
                rows: 15,
                required: 16
            })
        );
    }

    #[test]
    fn exactly_sixteen_rows_is_an_empty_region() {
        let table = table_with_column_f(16, &[]);

        assert_eq!(extract(&table), Ok(vec![]));
    }

    #[test]
    fn too_few_columns_is_an_error() {
        let table = Table::new(vec!["a".into(); 5], vec![vec![Cell::from("x"); 5]; 20]);

        assert_eq!(
            extract(&table),
            Err(ExtractionError::TooFewColumns {
                columns: 5,
                required: 6
            })
        );
    }

    #[test]
    fn custom_region() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![Cell::from("x"), Cell::from("skip")],
                vec![Cell::from("y"), Cell::from("keep")],
            ],
        );

        let cells = extract_region(&table, Region { start_row: 1, column: 1 }).unwrap();

        assert_eq!(cells, vec![Cell::from("keep")]);
    }
}
