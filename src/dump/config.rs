//! Command-line and environment configuration for the dump binaries.
//!
//! Each binary parses a clap `*Args` struct and converts it into a plain
//! `*Config` that the library entry points take, so tests can build a
//! config without a command line.

use crate::common::OutputEncoding;
use clap::Parser;
use std::path::PathBuf;

/// Document read when no path is given.
pub const DEFAULT_DOCX_PATH: &str = "docs/INT.01.04.01 - Coupa Contract Integration ver 0.3.docx";
/// Workbook read when no path is given.
pub const DEFAULT_XLSX_PATH: &str = "docs/Supplier Item Staging.xlsx";
/// Rows printed from the first sheet unless overridden.
pub const DEFAULT_MAX_ROWS: usize = 80;

fn parse_encoding(label: &str) -> Result<OutputEncoding, String> {
    OutputEncoding::from_label(label).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(
    name = "docx-dump",
    version,
    about = "Print the non-blank paragraphs of a Word document, one per line."
)]
pub struct DocxDumpArgs {
    /// Path to the .docx file
    #[arg(default_value = DEFAULT_DOCX_PATH)]
    pub path: PathBuf,

    /// Output encoding label; defaults to the locale's charset
    #[arg(long, env = "OOXML_DUMP_ENCODING", value_parser = parse_encoding)]
    pub encoding: Option<OutputEncoding>,
}

#[derive(Parser, Debug)]
#[command(
    name = "xlsx-dump",
    version,
    about = "Print the sheet names of an Excel workbook and the first rows of its first sheet."
)]
pub struct XlsxDumpArgs {
    /// Path to the .xlsx file
    #[arg(default_value = DEFAULT_XLSX_PATH)]
    pub path: PathBuf,

    /// Maximum number of rows printed from the first sheet
    #[arg(long, env = "XLSX_DUMP_MAX_ROWS", default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Output encoding label; defaults to the locale's charset
    #[arg(long, env = "OOXML_DUMP_ENCODING", value_parser = parse_encoding)]
    pub encoding: Option<OutputEncoding>,
}

/// Settings for a document dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxDumpConfig {
    pub path: PathBuf,
    pub encoding: OutputEncoding,
}

impl DocxDumpConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: OutputEncoding::UTF8,
        }
    }

    pub fn from_args() -> Self {
        Self::from(DocxDumpArgs::parse())
    }
}

impl From<DocxDumpArgs> for DocxDumpConfig {
    fn from(args: DocxDumpArgs) -> Self {
        Self {
            path: args.path,
            encoding: args.encoding.unwrap_or_else(OutputEncoding::from_locale),
        }
    }
}

/// Settings for a workbook dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XlsxDumpConfig {
    pub path: PathBuf,
    pub max_rows: usize,
    pub encoding: OutputEncoding,
}

impl XlsxDumpConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_rows: DEFAULT_MAX_ROWS,
            encoding: OutputEncoding::UTF8,
        }
    }

    pub fn from_args() -> Self {
        Self::from(XlsxDumpArgs::parse())
    }
}

impl From<XlsxDumpArgs> for XlsxDumpConfig {
    fn from(args: XlsxDumpArgs) -> Self {
        Self {
            path: args.path,
            max_rows: args.max_rows,
            encoding: args.encoding.unwrap_or_else(OutputEncoding::from_locale),
        }
    }
}
