//! ooxml-dump - plain-text dumps of Word documents and Excel workbooks
//!
//! This library reads Office Open XML packages (.docx, .xlsx) and renders
//! their content as line-oriented text. It backs two small command-line
//! tools, `docx-dump` and `xlsx-dump`.
//!
//! # Features
//!
//! - **OPC reader**: content types, relationships and parts of a ZIP package
//! - **DOCX paragraphs**: body-level paragraph text with tabs, breaks and
//!   hyperlink runs resolved
//! - **XLSX rows**: shared strings, inline strings, booleans, errors, numbers
//!   and date-formatted serials rendered as text
//! - **Output encoding**: lossy re-encoding with `?` for unmappable
//!   characters
//!
//! # Example - Reading a DOCX file
//!
//! ```no_run
//! use ooxml_dump::ooxml::docx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("Original Contract.docx")?;
//! let doc = pkg.document()?;
//!
//! for para in doc.paragraphs()? {
//!     println!("{}", para.text()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading an XLSX file
//!
//! ```no_run
//! use ooxml_dump::ooxml::xlsx::Workbook;
//! use ooxml_dump::sheet::WorkbookTrait;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workbook = Workbook::open("Supplier Item Staging.xlsx")?;
//! println!("{}", workbook.worksheet_names().join(", "));
//!
//! let sheet = workbook.worksheet_by_index(0)?;
//! for row in sheet.rows().take(10) {
//!     println!("{}", ooxml_dump::dump::xlsx::render_row(&row));
//! }
//! # Ok(())
//! # }
//! ```

/// Error types and output encoding shared by every format.
pub mod common;

/// The `docx-dump` and `xlsx-dump` drivers: configuration, logging and
/// output formatting.
pub mod dump;

/// OOXML (Office Open XML) file format parser
///
/// This module provides functionality to parse .docx and .xlsx packages.
pub mod ooxml;

/// Format-independent spreadsheet traits and cell values.
pub mod sheet;

pub use common::{Error, Result};
