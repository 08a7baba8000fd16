//! Parser for Excel workbook.xml files.
//!
//! Extracts the declared sheets, the active tab and the date system.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::text::attr_value;
use crate::ooxml::xlsx::date::DateSystem;
use crate::ooxml::xlsx::worksheet::{SheetState, WorksheetInfo};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

/// Workbook-level information from workbook.xml.
#[derive(Debug, Clone, Default)]
pub struct WorkbookInfo {
    /// Sheets in declaration order
    pub sheets: Vec<WorksheetInfo>,
    /// Index of the active sheet, clamped to the sheet list
    pub active_sheet_index: usize,
    /// Date system for serial dates
    pub date_system: DateSystem,
}

/// Parse workbook.xml content.
pub fn parse_workbook_xml(content: &str) -> Result<WorkbookInfo> {
    let mut reader = Reader::from_str(content);
    let mut info = WorkbookInfo::default();
    let mut active_tab = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"workbookPr" => {
                    if let Some(flag) = attr_value(&e, b"date1904")? {
                        if parse_xml_bool(&flag) {
                            info.date_system = DateSystem::V1904;
                        }
                    }
                },
                b"workbookView" => {
                    if let Some(tab) = attr_value(&e, b"activeTab")? {
                        active_tab = atoi_simd::parse::<usize>(tab.trim().as_bytes()).unwrap_or(0);
                    }
                },
                b"sheet" => {
                    let name = attr_value(&e, b"name")?;
                    let relationship_id = attr_value(&e, b"id")?;
                    let sheet_id = attr_value(&e, b"sheetId")?
                        .and_then(|id| atoi_simd::parse::<u32>(id.trim().as_bytes()).ok())
                        .unwrap_or(0);
                    let state = SheetState::from_attr(attr_value(&e, b"state")?.as_deref());

                    match (name, relationship_id) {
                        (Some(name), Some(relationship_id)) => info.sheets.push(WorksheetInfo {
                            name,
                            relationship_id,
                            sheet_id,
                            state,
                        }),
                        (name, _) => warn!(?name, "sheet entry without name or relationship id"),
                    }
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    info.active_sheet_index = active_tab.min(info.sheets.len().saturating_sub(1));
    Ok(info)
}

fn parse_xml_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "true")
}
