//! Office Open XML (OOXML) reading.
//!
//! This module reads Word (.docx) and Excel (.xlsx) packages far enough to
//! pull out paragraph text and cell values.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): Package handling (ZIP, content types, relationships)
//! 2. **Shared Utilities** (`error`, `text`): Error type and XML text helpers
//! 3. **Format-Specific Modules**:
//!    - `docx`: Word documents
//!    - `xlsx`: Excel spreadsheets
//!
//! # Example: Working with Word Documents
//!
//! ```rust,no_run
//! use ooxml_dump::ooxml::docx::Package;
//!
//! let pkg = Package::open("document.docx")?;
//! let doc = pkg.document()?;
//!
//! let text = doc.text()?;
//! println!("Document contains {} paragraphs", doc.paragraph_count()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Example: Working with Excel Workbooks
//!
//! ```rust,no_run
//! use ooxml_dump::ooxml::xlsx::Workbook;
//! use ooxml_dump::sheet::WorkbookTrait;
//!
//! let workbook = Workbook::open("workbook.xlsx")?;
//! println!("Sheets: {:?}", workbook.worksheet_names());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;
pub(crate) mod text;
pub mod xlsx;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use error::{OoxmlError, Result};
