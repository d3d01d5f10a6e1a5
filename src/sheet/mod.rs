pub mod encoding;
pub mod reader;
pub mod writer;

use crate::model::schema::{Field, FIRST_DATA_ROW};

/// One data row of the sign-up sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based row number as shown by a spreadsheet, the header is row 1.
    pub number: usize,
    pub cells: Vec<String>
}

impl SheetRow {
    pub fn new(number: usize, cells: Vec<String>) -> SheetRow {
        SheetRow { number, cells }
    }

    /// Builds a row from its position among the data rows (0 = first row after the header).
    pub fn from_index(index: usize, cells: Vec<String>) -> SheetRow {
        SheetRow::new(index + FIRST_DATA_ROW, cells)
    }

    /// Cell contents, or an empty string past the end of a short row.
    pub fn cell(&self, field: Field) -> &str {
        self.cells.get(field.column).map(String::as_str).unwrap_or("")
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Rows with an empty first cell are spacer or note rows, not teams.
    pub fn is_team_row(&self) -> bool {
        self.cells.first().is_some_and(|c| !c.is_empty())
    }
}
