//! Traits for spreadsheet abstraction.

use super::types::{CellValue, Result};
use std::fmt::Debug;

/// Represents a worksheet (sheet) in a workbook.
///
/// Rows and columns are 1-based. The used range always starts at `A1`: row
/// iteration begins at row 1 and every row spans columns 1 through the last
/// column holding a cell anywhere in the sheet, so sparse rows come back
/// padded with [`CellValue::Empty`].
pub trait Worksheet {
    /// Get the worksheet name.
    fn name(&self) -> &str;

    /// Get the number of rows in the used range.
    fn row_count(&self) -> usize {
        self.dimensions().map_or(0, |(_, _, max_row, _)| max_row as usize)
    }

    /// Get the number of columns in the used range.
    fn column_count(&self) -> usize {
        self.dimensions().map_or(0, |(_, _, _, max_col)| max_col as usize)
    }

    /// Get the dimensions as (min_row, min_col, max_row, max_col).
    /// Returns None if the worksheet is empty.
    fn dimensions(&self) -> Option<(u32, u32, u32, u32)>;

    /// Iterate over the rows of the used range, in order.
    fn rows(&self) -> Box<dyn Iterator<Item = Vec<CellValue>> + '_>;

    /// Get cell value by row and column (1-based indexing).
    fn cell_value(&self, row: u32, column: u32) -> Result<CellValue>;
}

/// Trait representing a workbook (spreadsheet file).
pub trait WorkbookTrait: Debug {
    /// Get all worksheet names in declaration order, hidden sheets included.
    fn worksheet_names(&self) -> &[String];

    /// Get a worksheet by name.
    fn worksheet_by_name(&self, name: &str) -> Result<Box<dyn Worksheet + '_>>;

    /// Get a worksheet by index.
    fn worksheet_by_index(&self, index: usize) -> Result<Box<dyn Worksheet + '_>>;

    /// Get the number of worksheets.
    fn worksheet_count(&self) -> usize {
        self.worksheet_names().len()
    }

    /// Get the index of the active worksheet.
    fn active_sheet_index(&self) -> usize;
}
