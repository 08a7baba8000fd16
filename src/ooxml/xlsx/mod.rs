//! Excel (.xlsx) spreadsheet support.
//!
//! Reads workbooks in the Office Open XML format: sheet names in declaration
//! order, shared strings, the number formats needed to recognise dates, and
//! the cached cell values of each worksheet.
//!
//! - `Workbook`: The workbook package and its sheet list
//! - `Worksheet`: One sheet's cell values
//! - `SharedStrings`, `Styles`: Workbook-wide lookup tables
//!
//! # Example
//!
//! ```rust,no_run
//! use ooxml_dump::ooxml::xlsx::Workbook;
//! use ooxml_dump::sheet::WorkbookTrait;
//!
//! let workbook = Workbook::open("workbook.xlsx")?;
//! let first = workbook.worksheet_by_index(0)?;
//! for row in first.rows().take(5) {
//!     println!("{:?}", row);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod date;
pub mod number_format;
pub mod parsers;
pub mod shared_strings;
pub mod styles;
pub mod workbook;
pub mod worksheet;

pub use cell::{Cell, column_to_letters, reference_to_coords};
pub use date::DateSystem;
pub use shared_strings::SharedStrings;
pub use styles::Styles;
pub use workbook::Workbook;
pub use worksheet::{SheetState, Worksheet, WorksheetInfo};
