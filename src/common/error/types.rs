//! Unified error type for the crate.
//!
//! Errors raised by the OPC and OOXML layers are folded into this type at the
//! crate boundary so callers only deal with one error enum.
use thiserror::Error;

/// Main error type for document and workbook reading.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Part or element not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Unknown output encoding label
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;
