/// Package implementation for Word documents.
use crate::ooxml::docx::document::Document;
use crate::ooxml::docx::parts::DocumentPart;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

/// A Word (.docx) package.
///
/// This is the main entry point for reading Word documents. It wraps an OPC
/// package whose main part is a WordprocessingML document. Regular documents,
/// templates and their macro-enabled variants are all accepted.
///
/// # Examples
///
/// ```rust,no_run
/// use ooxml_dump::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let doc = pkg.document()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Open a .docx package from a file path.
    ///
    /// The archive is read into memory and the file is closed before this
    /// returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening word package");
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Create a .docx package from a reader.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ooxml_dump::ooxml::docx::Package;
    /// use std::io::Cursor;
    ///
    /// let data = std::fs::read("document.docx")?;
    /// let pkg = Package::from_reader(Cursor::new(data))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    fn from_opc(opc: OpcPackage) -> Result<Self> {
        // Verify it's a Word document by checking the main part's content type
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main document part: {}", e)))?;

        let content_type = main_part.content_type();
        if !ct::WML_MAIN_PARTS.contains(&content_type) {
            return Err(OoxmlError::InvalidContentType {
                expected: ct::WML_DOCUMENT_MAIN.to_string(),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    /// Get the main document.
    pub fn document(&self) -> Result<Document<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main document part: {}", e)))?;

        Ok(Document::new(DocumentPart::from_part(main_part)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::error::OpcError;
    use crate::ooxml::test_support::{DocxBuilder, XlsxBuilder};
    use std::io::Cursor;

    #[test]
    fn test_open_from_reader() {
        let data = DocxBuilder::new().paragraph("Hello").build();
        let pkg = Package::from_reader(Cursor::new(data)).unwrap();
        let doc = pkg.document().unwrap();
        assert_eq!(doc.paragraph_count().unwrap(), 1);
    }

    #[test]
    fn test_macro_enabled_template_accepted() {
        let data = DocxBuilder::new()
            .content_type(ct::WML_TEMPLATE_MACRO_ENABLED_MAIN)
            .paragraph("Template")
            .build();
        assert!(Package::from_reader(Cursor::new(data)).is_ok());
    }

    #[test]
    fn test_workbook_rejected() {
        let data = XlsxBuilder::new().sheet("Data", &[&["a"]]).build();
        match Package::from_reader(Cursor::new(data)) {
            Err(OoxmlError::InvalidContentType { expected, got }) => {
                assert_eq!(expected, ct::WML_DOCUMENT_MAIN);
                assert_eq!(got, ct::SML_SHEET_MAIN);
            },
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("workbook accepted as a word document"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Package::open(dir.path().join("absent.docx"));
        assert!(matches!(result, Err(OoxmlError::Opc(OpcError::PackageNotFound(_)))));
    }

    #[test]
    fn test_open_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        std::fs::write(&path, DocxBuilder::new().paragraph("On disk").build()).unwrap();

        let pkg = Package::open(&path).unwrap();
        assert_eq!(pkg.document().unwrap().text().unwrap(), "On disk");
    }
}
