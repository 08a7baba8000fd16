//! Format-neutral spreadsheet API.
//!
//! The traits here describe a workbook as an ordered list of named sheets
//! and a sheet as a grid of [`CellValue`]s. The `.xlsx` reader in
//! [`crate::ooxml::xlsx`] implements them.
//!
//! ```rust,no_run
//! use ooxml_dump::ooxml::xlsx::Workbook;
//! use ooxml_dump::sheet::WorkbookTrait;
//!
//! let workbook = Workbook::open("data.xlsx")?;
//! let first = workbook.worksheet_by_index(0)?;
//! for row in first.rows() {
//!     println!("{:?}", row);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod traits;
pub mod types;

pub use traits::{WorkbookTrait, Worksheet};
pub use types::{CellValue, Result, format_float};
