//! XML parsers for workbook parts.

pub mod workbook_parser;
pub mod worksheet_parser;
