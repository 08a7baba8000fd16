//! Parser for Excel worksheet XML files.
//!
//! Reads the cached values of `<sheetData>` into a sparse grid. Formulas are
//! never evaluated: a formula cell yields whatever its `<v>` holds, or
//! nothing when no value was cached.

use std::collections::HashMap;

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::text::{attr_value, push_char_data};
use crate::ooxml::xlsx::cell::{Cell, check_bounds, reference_to_coords};
use crate::ooxml::xlsx::date::{DateSystem, from_excel, from_excel_duration, from_iso8601};
use crate::ooxml::xlsx::shared_strings::{SharedStrings, read_inline_string};
use crate::ooxml::xlsx::styles::Styles;
use crate::sheet::CellValue;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::warn;

/// Workbook-wide tables needed to turn raw cell text into values.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub shared_strings: &'a SharedStrings,
    pub styles: &'a Styles,
    pub date_system: DateSystem,
}

/// Sparse cell grid of one worksheet.
#[derive(Debug, Default)]
pub struct SheetCells {
    /// row -> column -> value
    pub cells: HashMap<u32, HashMap<u32, CellValue>>,
    /// (min_row, min_col, max_row, max_col) over every `<c>` element
    pub dimensions: Option<(u32, u32, u32, u32)>,
}

impl SheetCells {
    fn insert(&mut self, cell: Cell) {
        self.dimensions = Some(match self.dimensions {
            None => (cell.row, cell.column, cell.row, cell.column),
            Some((min_row, min_col, max_row, max_col)) => (
                min_row.min(cell.row),
                min_col.min(cell.column),
                max_row.max(cell.row),
                max_col.max(cell.column),
            ),
        });
        self.cells
            .entry(cell.row)
            .or_default()
            .insert(cell.column, cell.value);
    }
}

/// A `<c>` element whose children are still being read.
struct PendingCell {
    row: u32,
    column: u32,
    cell_type: String,
    style_id: usize,
    raw: Option<String>,
    inline: Option<String>,
}

impl PendingCell {
    /// Cells without an `r` attribute continue from the previous cell.
    fn start(e: &BytesStart<'_>, row: u32, last_column: &mut u32) -> Result<Self> {
        let (row, column) = match attr_value(e, b"r")? {
            Some(reference) => {
                let (column, row) = reference_to_coords(&reference)?;
                (row, column)
            },
            None => (row, *last_column + 1),
        };
        check_bounds(column, row)?;
        *last_column = column;

        let cell_type = attr_value(e, b"t")?.unwrap_or_else(|| "n".to_string());
        let style_id = attr_value(e, b"s")?
            .and_then(|s| atoi_simd::parse::<usize>(s.trim().as_bytes()).ok())
            .unwrap_or(0);

        Ok(Self {
            row,
            column,
            cell_type,
            style_id,
            raw: None,
            inline: None,
        })
    }

    fn finish(self, ctx: &CellContext<'_>) -> Cell {
        let value = convert_value(&self, ctx);
        Cell::new(self.row, self.column, value)
    }
}

/// Parse worksheet XML content into a sparse grid of values.
pub fn parse_worksheet_xml(content: &str, ctx: &CellContext<'_>) -> Result<SheetCells> {
    let mut reader = Reader::from_str(content);
    let mut sheet = SheetCells::default();

    let mut in_sheet_data = false;
    let mut row = 0u32;
    let mut column = 0u32;
    let mut pending: Option<PendingCell> = None;
    let mut value_text: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| OoxmlError::Xml(e.to_string()))?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let is_empty = matches!(event, Event::Empty(_));
                match e.local_name().as_ref() {
                    b"sheetData" => in_sheet_data = !is_empty,
                    b"row" if in_sheet_data => {
                        row = match attr_value(e, b"r")? {
                            Some(r) => atoi_simd::parse::<u32>(r.trim().as_bytes()).map_err(|_| {
                                OoxmlError::InvalidFormat(format!("Invalid row number: {}", r))
                            })?,
                            None => row + 1,
                        };
                        check_bounds(1, row)?;
                        column = 0;
                    },
                    b"c" if in_sheet_data => {
                        let cell = PendingCell::start(e, row, &mut column)?;
                        if is_empty {
                            sheet.insert(cell.finish(ctx));
                        } else {
                            pending = Some(cell);
                        }
                    },
                    b"v" if pending.is_some() && !is_empty => value_text = Some(String::new()),
                    b"is" => {
                        if let Some(cell) = pending.as_mut() {
                            cell.inline = Some(if is_empty {
                                String::new()
                            } else {
                                read_inline_string(&mut reader, e)?
                            });
                        }
                    },
                    _ => {},
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"sheetData" => in_sheet_data = false,
                b"v" => {
                    if let (Some(cell), Some(text)) = (pending.as_mut(), value_text.take()) {
                        cell.raw = Some(text);
                    }
                },
                b"c" => {
                    if let Some(cell) = pending.take() {
                        sheet.insert(cell.finish(ctx));
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {
                if let Some(text) = value_text.as_mut() {
                    push_char_data(text, &event)?;
                }
            },
        }
    }

    Ok(sheet)
}

fn convert_value(cell: &PendingCell, ctx: &CellContext<'_>) -> CellValue {
    if cell.cell_type == "inlineStr" {
        return cell
            .inline
            .clone()
            .map_or(CellValue::Empty, CellValue::String);
    }

    let raw = match cell.raw.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return CellValue::Empty,
    };

    match cell.cell_type.as_str() {
        "s" => {
            let index = atoi_simd::parse::<usize>(raw.trim().as_bytes()).ok();
            match index.and_then(|i| ctx.shared_strings.get(i)) {
                Some(text) => CellValue::String(text.to_string()),
                None => {
                    warn!(row = cell.row, column = cell.column, raw, "dangling shared string index");
                    CellValue::Empty
                },
            }
        },
        "str" => CellValue::String(raw.to_string()),
        "e" => CellValue::Error(raw.to_string()),
        "b" => match atoi_simd::parse::<i64>(raw.trim().as_bytes()) {
            Ok(flag) => CellValue::Bool(flag != 0),
            Err(_) => {
                warn!(row = cell.row, column = cell.column, raw, "unparseable boolean cell");
                CellValue::String(raw.to_string())
            },
        },
        "d" => from_iso8601(raw).unwrap_or_else(|| {
            warn!(row = cell.row, column = cell.column, raw, "unparseable ISO 8601 date cell");
            CellValue::Error("#VALUE!".to_string())
        }),
        _ => {
            let number = match parse_number(raw) {
                Some(number) => number,
                None => {
                    warn!(row = cell.row, column = cell.column, raw, "unparseable numeric cell");
                    return CellValue::String(raw.to_string());
                },
            };
            if !ctx.styles.is_date_style(cell.style_id) {
                return number;
            }
            let serial = match number {
                CellValue::Int(i) => i as f64,
                CellValue::Float(f) => f,
                _ => return number,
            };
            let converted = if ctx.styles.is_duration_style(cell.style_id) {
                from_excel_duration(serial)
            } else {
                from_excel(serial, ctx.date_system)
            };
            converted.unwrap_or_else(|| {
                warn!(
                    row = cell.row,
                    column = cell.column,
                    serial,
                    "date serial outside the representable range"
                );
                CellValue::Error("#VALUE!".to_string())
            })
        },
    }
}

/// Literals with a decimal point or exponent are floats, the rest integers.
fn parse_number(raw: &str) -> Option<CellValue> {
    let raw = raw.trim();
    if raw.contains(['.', 'e', 'E']) {
        return fast_float2::parse::<f64, _>(raw).ok().map(CellValue::Float);
    }
    match atoi_simd::parse::<i64>(raw.as_bytes()) {
        Ok(int) => Some(CellValue::Int(int)),
        Err(_) => fast_float2::parse::<f64, _>(raw).ok().map(CellValue::Float),
    }
}
