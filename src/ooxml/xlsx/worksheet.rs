//! Worksheet implementation for Excel files.

use std::collections::HashMap;

use crate::common::Error;
use crate::sheet::{CellValue, Result as SheetResult, Worksheet as WorksheetTrait};

use super::parsers::worksheet_parser::SheetCells;

/// Visibility of a sheet as declared in workbook.xml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetState {
    #[default]
    Visible,
    Hidden,
    VeryHidden,
}

impl SheetState {
    pub(crate) fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("hidden") => SheetState::Hidden,
            Some("veryHidden") => SheetState::VeryHidden,
            _ => SheetState::Visible,
        }
    }
}

/// Information about a worksheet
#[derive(Debug, Clone)]
pub struct WorksheetInfo {
    /// Worksheet name
    pub name: String,
    /// Relationship ID of the sheet part, relative to the workbook part
    pub relationship_id: String,
    /// Sheet ID
    pub sheet_id: u32,
    /// Visibility
    pub state: SheetState,
}

/// A worksheet with all of its cell values loaded.
#[derive(Debug)]
pub struct Worksheet {
    /// Worksheet information
    info: WorksheetInfo,
    /// Cell data (row -> column -> value)
    cells: HashMap<u32, HashMap<u32, CellValue>>,
    /// Dimensions of the worksheet (min_row, min_col, max_row, max_col)
    dimensions: Option<(u32, u32, u32, u32)>,
}

impl Worksheet {
    pub(crate) fn new(info: WorksheetInfo, data: SheetCells) -> Self {
        Self {
            info,
            cells: data.cells,
            dimensions: data.dimensions,
        }
    }

    /// Sheet metadata from workbook.xml.
    pub fn info(&self) -> &WorksheetInfo {
        &self.info
    }

    fn value_at(&self, row: u32, column: u32) -> CellValue {
        self.cells
            .get(&row)
            .and_then(|r| r.get(&column))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    fn row_values(&self, row: u32, max_col: u32) -> Vec<CellValue> {
        (1..=max_col).map(|col| self.value_at(row, col)).collect()
    }
}

impl WorksheetTrait for Worksheet {
    fn name(&self) -> &str {
        &self.info.name
    }

    fn dimensions(&self) -> Option<(u32, u32, u32, u32)> {
        self.dimensions
    }

    fn rows(&self) -> Box<dyn Iterator<Item = Vec<CellValue>> + '_> {
        match self.dimensions {
            Some((_, _, max_row, max_col)) => {
                Box::new((1..=max_row).map(move |row| self.row_values(row, max_col)))
            },
            None => Box::new(std::iter::empty()),
        }
    }

    fn cell_value(&self, row: u32, column: u32) -> SheetResult<CellValue> {
        if row == 0 || column == 0 {
            return Err(Error::InvalidFormat(format!(
                "Cell coordinates are 1-based, got ({}, {})",
                row, column
            )));
        }
        Ok(self.value_at(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cells: &[(u32, u32, CellValue)]) -> Worksheet {
        let mut data = SheetCells::default();
        for (row, col, value) in cells {
            data.cells
                .entry(*row)
                .or_default()
                .insert(*col, value.clone());
            data.dimensions = Some(match data.dimensions {
                None => (*row, *col, *row, *col),
                Some((a, b, c, d)) => (a.min(*row), b.min(*col), c.max(*row), d.max(*col)),
            });
        }
        let info = WorksheetInfo {
            name: "Sheet1".to_string(),
            relationship_id: "rId1".to_string(),
            sheet_id: 1,
            state: SheetState::Visible,
        };
        Worksheet::new(info, data)
    }

    #[test]
    fn test_rows_are_padded_from_a1() {
        let ws = sheet(&[
            (2, 1, CellValue::String("A".into())),
            (2, 3, CellValue::String("C".into())),
            (4, 2, CellValue::Int(1)),
        ]);
        let rows: Vec<Vec<CellValue>> = ws.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec![CellValue::Empty; 3]);
        assert_eq!(
            rows[1],
            vec![
                CellValue::String("A".into()),
                CellValue::Empty,
                CellValue::String("C".into())
            ]
        );
        assert_eq!(rows[3], vec![CellValue::Empty, CellValue::Int(1), CellValue::Empty]);
        assert_eq!(ws.row_count(), 4);
        assert_eq!(ws.column_count(), 3);
    }

    #[test]
    fn test_empty_sheet_has_no_rows() {
        let ws = sheet(&[]);
        assert_eq!(ws.rows().count(), 0);
        assert_eq!(ws.dimensions(), None);
        assert_eq!(ws.row_count(), 0);
    }

    #[test]
    fn test_cell_value() {
        let ws = sheet(&[(1, 2, CellValue::Bool(false))]);
        assert_eq!(ws.cell_value(1, 2).unwrap(), CellValue::Bool(false));
        assert_eq!(ws.cell_value(5, 5).unwrap(), CellValue::Empty);
        assert!(ws.cell_value(0, 1).is_err());
    }

    #[test]
    fn test_sheet_state() {
        assert_eq!(SheetState::from_attr(None), SheetState::Visible);
        assert_eq!(SheetState::from_attr(Some("hidden")), SheetState::Hidden);
        assert_eq!(SheetState::from_attr(Some("veryHidden")), SheetState::VeryHidden);
    }
}
