//! Excel Workbook implementation.
//!
//! This module provides the concrete implementation of the Workbook trait
//! for Excel (.xlsx) files using the Office Open XML format.

use std::io::{Read, Seek};
use std::path::Path;

use crate::common::Error;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::xlsx::{SharedStrings, Styles};
use crate::sheet::{Result as SheetResult, WorkbookTrait, Worksheet as WorksheetTrait};
use tracing::debug;

use super::date::DateSystem;
use super::parsers::workbook_parser;
use super::parsers::worksheet_parser::{CellContext, parse_worksheet_xml};
use super::worksheet::{Worksheet, WorksheetInfo};

/// An Excel workbook opened for reading.
///
/// Sheet names, shared strings and styles are loaded up front; sheet cells
/// are parsed when a worksheet is requested.
///
/// # Examples
///
/// ```rust,no_run
/// use ooxml_dump::ooxml::xlsx::Workbook;
/// use ooxml_dump::sheet::WorkbookTrait;
///
/// let workbook = Workbook::open("workbook.xlsx")?;
/// for name in workbook.worksheet_names() {
///     let sheet = workbook.worksheet_by_name(name)?;
///     println!("{}: {} rows", name, sheet.row_count());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Workbook {
    /// The underlying OPC package
    package: OpcPackage,
    /// Partname of the workbook part
    workbook_uri: PackURI,
    /// Cached worksheet information
    worksheets: Vec<WorksheetInfo>,
    /// Cached worksheet names for zero-copy returns
    worksheet_names: Vec<String>,
    /// Active worksheet index (0-based)
    active_sheet_index: usize,
    /// Shared strings table
    shared_strings: SharedStrings,
    /// Number formats of the cell styles
    styles: Styles,
    /// Epoch for serial dates
    date_system: DateSystem,
}

impl Workbook {
    /// Open a workbook from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening workbook package");
        Self::new(OpcPackage::open(path)?)
    }

    /// Open a workbook from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::new(OpcPackage::from_reader(reader)?)
    }

    /// Create a workbook from an OPC package.
    pub fn new(package: OpcPackage) -> Result<Self> {
        let workbook_part = package
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main document part: {}", e)))?;

        let content_type = workbook_part.content_type();
        if !ct::SML_MAIN_PARTS.contains(&content_type) {
            return Err(OoxmlError::InvalidContentType {
                expected: ct::SML_SHEET_MAIN.to_string(),
                got: content_type.to_string(),
            });
        }

        let info = workbook_parser::parse_workbook_xml(workbook_part.xml_str()?)?;
        let shared_strings = Self::load_shared_strings(&package, &workbook_part)?;
        let styles = Self::load_styles(&package, &workbook_part)?;
        let workbook_uri = workbook_part.partname().clone();

        debug!(
            sheets = info.sheets.len(),
            shared_strings = shared_strings.len(),
            cell_formats = styles.len(),
            "loaded workbook"
        );

        let worksheet_names = info.sheets.iter().map(|ws| ws.name.clone()).collect();
        Ok(Self {
            package,
            workbook_uri,
            worksheets: info.sheets,
            worksheet_names,
            active_sheet_index: info.active_sheet_index,
            shared_strings,
            styles,
            date_system: info.date_system,
        })
    }

    fn load_shared_strings(package: &OpcPackage, workbook_part: &Part<'_>) -> Result<SharedStrings> {
        match package.part_by_reltype(workbook_part, rt::SHARED_STRINGS)? {
            Some(part) => SharedStrings::parse(part.xml_str()?),
            None => Ok(SharedStrings::new()),
        }
    }

    fn load_styles(package: &OpcPackage, workbook_part: &Part<'_>) -> Result<Styles> {
        match package.part_by_reltype(workbook_part, rt::STYLES)? {
            Some(part) => Styles::parse(part.xml_str()?),
            None => Ok(Styles::new()),
        }
    }

    /// Date system declared by the workbook.
    pub fn date_system(&self) -> DateSystem {
        self.date_system
    }

    /// Sheet metadata in declaration order.
    pub fn worksheet_infos(&self) -> &[WorksheetInfo] {
        &self.worksheets
    }

    /// Load and parse the worksheet at `index`.
    pub fn worksheet(&self, index: usize) -> Result<Worksheet> {
        let info = self.worksheets.get(index).ok_or_else(|| {
            OoxmlError::Other(format!(
                "Worksheet index {} out of bounds ({} sheets)",
                index,
                self.worksheets.len()
            ))
        })?;

        let workbook_part = self.package.part(&self.workbook_uri)?;
        let sheet_part = self
            .package
            .related_part(&workbook_part, &info.relationship_id)?;

        let ctx = CellContext {
            shared_strings: &self.shared_strings,
            styles: &self.styles,
            date_system: self.date_system,
        };
        let data = parse_worksheet_xml(sheet_part.xml_str()?, &ctx)?;
        debug!(
            sheet = %info.name,
            part = %sheet_part.partname(),
            dimensions = ?data.dimensions,
            "parsed worksheet"
        );

        Ok(Worksheet::new(info.clone(), data))
    }
}

impl WorkbookTrait for Workbook {
    fn worksheet_names(&self) -> &[String] {
        &self.worksheet_names
    }

    fn worksheet_by_name(&self, name: &str) -> SheetResult<Box<dyn WorksheetTrait + '_>> {
        let index = self
            .worksheets
            .iter()
            .position(|ws| ws.name == name)
            .ok_or_else(|| Error::ComponentNotFound(format!("Worksheet '{}'", name)))?;
        Ok(Box::new(self.worksheet(index)?))
    }

    fn worksheet_by_index(&self, index: usize) -> SheetResult<Box<dyn WorksheetTrait + '_>> {
        Ok(Box::new(self.worksheet(index)?))
    }

    fn worksheet_count(&self) -> usize {
        self.worksheets.len()
    }

    fn active_sheet_index(&self) -> usize {
        self.active_sheet_index
    }
}
