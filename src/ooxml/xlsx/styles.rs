//! Cell styles for Excel files.
//!
//! Only the number format of each cell format (`cellXfs/xf`) is kept; that
//! is all a value reader needs to tell dates from plain numbers.

use std::collections::HashMap;

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::text::attr_value;
use crate::ooxml::xlsx::number_format::{builtin_format_code, is_date_format, is_duration_format};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

/// Number formats of the workbook's cell formats.
#[derive(Debug, Default)]
pub struct Styles {
    /// Custom number formats by ID
    custom_formats: HashMap<u32, String>,
    /// Number format ID of each cell format, indexed by style ID
    cell_formats: Vec<u32>,
    /// Whether each cell format renders numbers as dates
    date_styles: Vec<bool>,
    /// Whether each cell format renders numbers as hour-based durations
    duration_styles: Vec<bool>,
}

impl Styles {
    /// Create an empty style table. Every style renders as `General`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse xl/styles.xml content.
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        let mut styles = Styles::new();
        let mut in_cell_xfs = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"numFmt" => {
                        let id = attr_value(&e, b"numFmtId")?;
                        let code = attr_value(&e, b"formatCode")?;
                        match (id.as_deref().map(str::trim).map(str::parse::<u32>), code) {
                            (Some(Ok(id)), Some(code)) => {
                                styles.custom_formats.insert(id, code);
                            },
                            _ => warn!("skipping malformed numFmt entry"),
                        }
                    },
                    b"cellXfs" => in_cell_xfs = true,
                    b"xf" if in_cell_xfs => {
                        let id = attr_value(&e, b"numFmtId")?
                            .and_then(|id| atoi_simd::parse::<u32>(id.trim().as_bytes()).ok())
                            .unwrap_or(0);
                        styles.cell_formats.push(id);
                    },
                    _ => {},
                },
                Ok(Event::End(e)) => {
                    if e.local_name().as_ref() == b"cellXfs" {
                        in_cell_xfs = false;
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
        }

        styles.date_styles = styles
            .cell_formats
            .iter()
            .map(|&id| styles.format_code(id).is_some_and(is_date_format))
            .collect();
        styles.duration_styles = styles
            .cell_formats
            .iter()
            .map(|&id| styles.format_code(id).is_some_and(is_duration_format))
            .collect();

        Ok(styles)
    }

    /// Format code for a number format ID, custom formats first.
    pub fn format_code(&self, num_fmt_id: u32) -> Option<&str> {
        self.custom_formats
            .get(&num_fmt_id)
            .map(String::as_str)
            .or_else(|| builtin_format_code(num_fmt_id))
    }

    /// Format code applied by a cell style (`s` attribute).
    pub fn number_format(&self, style_id: usize) -> Option<&str> {
        self.cell_formats
            .get(style_id)
            .and_then(|&id| self.format_code(id))
    }

    /// Whether numbers in cells of this style are dates or times.
    pub fn is_date_style(&self, style_id: usize) -> bool {
        self.date_styles.get(style_id).copied().unwrap_or(false)
    }

    /// Whether numbers in cells of this style are elapsed times (`[h]:mm`).
    ///
    /// Every duration style is also a date style.
    pub fn is_duration_style(&self, style_id: usize) -> bool {
        self.duration_styles.get(style_id).copied().unwrap_or(false)
    }

    /// Number of cell formats.
    pub fn len(&self) -> usize {
        self.cell_formats.len()
    }

    /// Check if no cell formats are defined.
    pub fn is_empty(&self) -> bool {
        self.cell_formats.is_empty()
    }
}

#[cfg(test)]
pub(crate) const DATE_STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <numFmts count="3">
    <numFmt numFmtId="164" formatCode="yyyy\-mm\-dd"/>
    <numFmt numFmtId="165" formatCode="&quot;Qty &quot;0"/>
    <numFmt numFmtId="166" formatCode="[mm]:ss"/>
  </numFmts>
  <cellStyleXfs count="1"><xf numFmtId="14"/></cellStyleXfs>
  <cellXfs count="7">
    <xf numFmtId="0" fontId="0"/>
    <xf numFmtId="14" fontId="0" applyNumberFormat="1"/>
    <xf numFmtId="164" fontId="0" applyNumberFormat="1"/>
    <xf numFmtId="165" fontId="0" applyNumberFormat="1"/>
    <xf numFmtId="21" fontId="0" applyNumberFormat="1"><alignment horizontal="left"/></xf>
    <xf numFmtId="46" fontId="0" applyNumberFormat="1"/>
    <xf numFmtId="166" fontId="0" applyNumberFormat="1"/>
  </cellXfs>
</styleSheet>"#;
