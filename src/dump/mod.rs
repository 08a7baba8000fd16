//! Plain-text dumps of Word documents and Excel workbooks.
//!
//! - [`docx`] prints the non-blank body paragraphs of a document.
//! - [`xlsx`] prints the sheet names of a workbook and the first rows of its
//!   first sheet.
//!
//! Both check that the input exists before opening it and re-encode every
//! line through an [`OutputEncoding`](crate::common::OutputEncoding).

pub mod config;
pub mod docx;
pub mod logging;
pub mod xlsx;

use crate::common::Error;
use crate::ooxml::error::OoxmlError;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Exit status when the input file does not exist.
pub const EXIT_MISSING_INPUT: u8 = 1;
/// Exit status for any other failure.
pub const EXIT_FAILURE: u8 = 2;

/// Outcome of a successful dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    /// The file that was read
    pub path: PathBuf,
    /// Paragraphs or rows written, not counting the sheet-name header
    pub units_written: usize,
}

/// Errors that end a dump.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The input path does not exist; nothing was opened.
    #[error("FILE_NOT_FOUND: {}", .0.display())]
    MissingInputFile(PathBuf),

    /// The input could not be read as a document or workbook.
    #[error(transparent)]
    Document(#[from] Error),

    /// Writing the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<OoxmlError> for DumpError {
    fn from(err: OoxmlError) -> Self {
        DumpError::Document(err.into())
    }
}

impl DumpError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DumpError::MissingInputFile(_) => EXIT_MISSING_INPUT,
            DumpError::Document(_) | DumpError::Io(_) => EXIT_FAILURE,
        }
    }

    /// Write the single-line diagnostic for this error.
    pub fn report<W: Write>(&self, stderr: &mut W) -> io::Result<()> {
        match self {
            DumpError::MissingInputFile(_) => writeln!(stderr, "{}", self),
            _ => writeln!(stderr, "error: {}", self),
        }
    }
}

/// Fail with [`DumpError::MissingInputFile`] unless `path` exists.
pub(crate) fn ensure_exists(path: &std::path::Path) -> Result<(), DumpError> {
    if path.exists() {
        Ok(())
    } else {
        tracing::debug!(path = %path.display(), "input file missing");
        Err(DumpError::MissingInputFile(path.to_path_buf()))
    }
}

/// Write one already-encoded line followed by `\n`.
pub(crate) fn write_line<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")
}
