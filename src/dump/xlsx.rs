//! Sheet-name and row dump of an Excel workbook.

use super::config::XlsxDumpConfig;
use super::{DumpError, DumpSummary, ensure_exists, write_line};
use crate::common::OutputEncoding;
use crate::ooxml::xlsx::Workbook;
use crate::sheet::{CellValue, WorkbookTrait};
use std::io::Write;
use tracing::debug;

/// Print the sheet names of `config.path`, then up to `config.max_rows` rows
/// of its first sheet.
pub fn run<W: Write>(config: &XlsxDumpConfig, out: &mut W) -> Result<DumpSummary, DumpError> {
    ensure_exists(&config.path)?;

    let workbook = Workbook::open(&config.path)?;
    let units_written = write_workbook(&workbook, config.max_rows, &config.encoding, out)?;
    Ok(DumpSummary {
        path: config.path.clone(),
        units_written,
    })
}

/// Write `SHEETS: <names>` followed by at most `max_rows` rows of the first
/// sheet.
///
/// Returns the number of rows written. A workbook without sheets produces
/// only the header line.
pub fn write_workbook<B, W>(
    workbook: &B,
    max_rows: usize,
    encoding: &OutputEncoding,
    out: &mut W,
) -> Result<usize, DumpError>
where
    B: WorkbookTrait + ?Sized,
    W: Write,
{
    let names = workbook.worksheet_names();
    let header = format!("SHEETS: {}", names.join(", "));
    write_line(out, &encoding.encode(&header))?;

    let Some(first) = names.first() else {
        return Ok(0);
    };

    let sheet = workbook.worksheet_by_name(first)?;
    let mut written = 0;
    for row in sheet.rows().take(max_rows) {
        write_line(out, &encoding.encode(&render_row(&row)))?;
        written += 1;
    }
    debug!(sheet = %first, rows = written, max_rows, "wrote rows");

    Ok(written)
}

/// Join the textual form of each cell with tabs; empty cells render as "".
pub fn render_row(cells: &[CellValue]) -> String {
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            line.push('\t');
        }
        if !cell.is_empty() {
            line.push_str(&cell.to_string());
        }
    }
    line
}
