//! Common types and utilities shared by the document and workbook readers.

// Submodule declarations
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use encoding::{OutputEncoding, REPLACEMENT_MARKER};
pub use error::{Error, Result};
