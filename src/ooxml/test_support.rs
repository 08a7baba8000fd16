//! In-memory fixture packages for tests.

use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::xlsx::column_to_letters;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Build a ZIP archive from `(membername, content)` pairs.
pub(crate) fn zip_package(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub(crate) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="{target}"/></Relationships>"#;

/// Builder for minimal `.docx` packages.
pub(crate) struct DocxBuilder {
    body: String,
    content_type: String,
}

impl DocxBuilder {
    pub(crate) fn new() -> Self {
        Self {
            body: String::new(),
            content_type: ct::WML_DOCUMENT_MAIN.to_string(),
        }
    }

    /// Append a single-run paragraph.
    pub(crate) fn paragraph(mut self, text: &str) -> Self {
        if text.is_empty() {
            self.body.push_str("<w:p/>");
        } else {
            self.body.push_str(&format!(
                r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                escape(text)
            ));
        }
        self
    }

    /// Append raw body XML (paragraphs, tables, ...).
    pub(crate) fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    /// Override the main part content type.
    pub(crate) fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub(crate) fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            self.body
        )
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let content_types = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="{}"/></Types>"#,
            self.content_type
        );
        let rels = PACKAGE_RELS.replace("{target}", "word/document.xml");
        let document = self.document_xml();

        zip_package(&[
            ("[Content_Types].xml", &content_types),
            ("_rels/.rels", &rels),
            ("word/document.xml", &document),
        ])
    }
}

/// Builder for minimal `.xlsx` packages.
///
/// Cells passed to [`XlsxBuilder::sheet`] are stored as shared strings; an
/// empty string leaves the cell out entirely.
pub(crate) struct XlsxBuilder {
    sheets: Vec<(String, String)>,
    shared_strings: Vec<String>,
    styles: Option<String>,
    date1904: bool,
}

impl XlsxBuilder {
    pub(crate) fn new() -> Self {
        Self {
            sheets: Vec::new(),
            shared_strings: Vec::new(),
            styles: None,
            date1904: false,
        }
    }

    pub(crate) fn sheet(mut self, name: &str, rows: &[&[&str]]) -> Self {
        let mut data = String::new();
        for (row_idx, row) in rows.iter().enumerate() {
            let row_num = row_idx + 1;
            data.push_str(&format!(r#"<row r="{}">"#, row_num));
            for (col_idx, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let index = self.shared_strings.len();
                self.shared_strings.push((*value).to_string());
                data.push_str(&format!(
                    r#"<c r="{}{}" t="s"><v>{}</v></c>"#,
                    column_to_letters(col_idx as u32 + 1),
                    row_num,
                    index
                ));
            }
            data.push_str("</row>");
        }
        self.sheets.push((name.to_string(), data));
        self
    }

    /// Add a sheet whose `<sheetData>` content is given verbatim.
    pub(crate) fn sheet_xml(mut self, name: &str, sheet_data: &str) -> Self {
        self.sheets.push((name.to_string(), sheet_data.to_string()));
        self
    }

    pub(crate) fn styles(mut self, styles_xml: &str) -> Self {
        self.styles = Some(styles_xml.to_string());
        self
    }

    pub(crate) fn date1904(mut self) -> Self {
        self.date1904 = true;
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut overrides = String::new();
        let mut workbook_rels = String::new();
        let mut sheet_entries = String::new();
        let mut files: Vec<(String, String)> = Vec::new();

        for (index, (name, data)) in self.sheets.iter().enumerate() {
            let n = index + 1;
            overrides.push_str(&format!(
                r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="{}"/>"#,
                n,
                ct::SML_WORKSHEET
            ));
            workbook_rels.push_str(&format!(
                r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml"/>"#
            ));
            sheet_entries.push_str(&format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(name),
                n,
                n
            ));
            files.push((
                format!("xl/worksheets/sheet{}.xml", n),
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheetData>{}</sheetData></worksheet>"#,
                    data
                ),
            ));
        }

        let strings_rid = self.sheets.len() + 1;
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/sharedStrings.xml" ContentType="{}"/>"#,
            ct::SML_SHARED_STRINGS
        ));
        workbook_rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#,
            strings_rid
        ));
        let items: String = self
            .shared_strings
            .iter()
            .map(|s| format!(r#"<si><t xml:space="preserve">{}</t></si>"#, escape(s)))
            .collect();
        files.push((
            "xl/sharedStrings.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{n}" uniqueCount="{n}">{items}</sst>"#,
                n = self.shared_strings.len()
            ),
        ));

        if let Some(styles) = &self.styles {
            overrides.push_str(&format!(
                r#"<Override PartName="/xl/styles.xml" ContentType="{}"/>"#,
                ct::SML_STYLES
            ));
            workbook_rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
                strings_rid + 1
            ));
            files.push(("xl/styles.xml".to_string(), styles.clone()));
        }

        let workbook_pr = if self.date1904 {
            r#"<workbookPr date1904="1"/>"#
        } else {
            "<workbookPr/>"
        };
        files.push((
            "xl/workbook.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">{}<bookViews><workbookView activeTab="0"/></bookViews><sheets>{}</sheets></workbook>"#,
                workbook_pr, sheet_entries
            ),
        ));
        files.push((
            "xl/_rels/workbook.xml.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
                workbook_rels
            ),
        ));
        files.push((
            "[Content_Types].xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="{}"/>{}</Types>"#,
                ct::SML_SHEET_MAIN,
                overrides
            ),
        ));
        files.push((
            "_rels/.rels".to_string(),
            PACKAGE_RELS.replace("{target}", "xl/workbook.xml"),
        ));

        let entries: Vec<(&str, &str)> = files
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
            .collect();
        zip_package(&entries)
    }
}
