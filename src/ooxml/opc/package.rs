/// Objects that implement reading OPC packages.
///
/// This module provides the main OpcPackage type, which represents an Open Packaging
/// Convention package in memory and resolves parts through the relationship graph.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::ContentTypeMap;
use crate::ooxml::opc::rel::{Relationship, Relationships};
use std::io::{Read, Seek};
use std::path::Path;

/// Main API class for working with OPC packages.
///
/// Holds the decompressed package contents, the content type map and the
/// package-level relationships. Parts are materialized on request and borrow
/// their content from the package.
#[derive(Debug)]
pub struct OpcPackage {
    /// Decompressed package members
    phys: PhysPkgReader,

    /// Content types from [Content_Types].xml
    content_types: ContentTypeMap,

    /// Package-level relationships
    rels: Relationships,
}

impl OpcPackage {
    /// Open an OPC package from a file.
    ///
    /// # Arguments
    /// * `path` - Path to the package file (.docx, .xlsx, etc.)
    ///
    /// # Example
    /// ```no_run
    /// use ooxml_dump::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("document.docx")?;
    /// let main = pkg.main_document_part()?;
    /// println!("{}", main.content_type());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let phys = PhysPkgReader::open(path)?;
        Self::from_phys_reader(phys)
    }

    /// Load an OPC package from a reader.
    ///
    /// # Arguments
    /// * `reader` - A reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let phys = PhysPkgReader::from_reader(reader)?;
        Self::from_phys_reader(phys)
    }

    fn from_phys_reader(phys: PhysPkgReader) -> Result<Self> {
        let content_types = ContentTypeMap::from_xml(phys.content_types_xml()?)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let rels = match phys.rels_xml_for(&package_uri)? {
            Some(xml) => Relationships::parse(xml, package_uri.base_uri())?,
            None => Relationships::new(),
        };

        Ok(Self {
            phys,
            content_types,
            rels,
        })
    }

    /// Get the package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get the main document part.
    ///
    /// For Word documents, this is the document.xml part.
    /// For Excel, the workbook.xml part.
    pub fn main_document_part(&self) -> Result<Part<'_>> {
        let rel = self
            .rels
            .part_with_reltype(relationship_type::OFFICE_DOCUMENT)
            .or_else(|| {
                self.rels
                    .part_with_reltype(relationship_type::OFFICE_DOCUMENT_STRICT)
            })
            .ok_or_else(|| {
                OpcError::RelationshipNotFound(relationship_type::OFFICE_DOCUMENT.to_string())
            })?;

        self.part_for_rel(rel)
    }

    /// Get a part by its partname.
    pub fn part(&self, partname: &PackURI) -> Result<Part<'_>> {
        let blob = self.phys.blob_for(partname)?;
        let content_type = self.content_types.content_type_for(partname)?;

        let rels = match self.phys.rels_xml_for(partname)? {
            Some(xml) => Relationships::parse(xml, partname.base_uri())?,
            None => Relationships::new(),
        };

        Ok(Part::new(partname.clone(), content_type, blob, rels))
    }

    /// Get the part a source part points to through relationship `r_id`.
    pub fn related_part(&self, source: &Part<'_>, r_id: &str) -> Result<Part<'_>> {
        let rel = source.rels().get(r_id).ok_or_else(|| {
            OpcError::RelationshipNotFound(format!("{} in {}", r_id, source.partname()))
        })?;
        self.part_for_rel(rel)
    }

    /// Get the first part a source part points to with relationship type `reltype`.
    ///
    /// Returns `Ok(None)` if the source declares no such relationship.
    pub fn part_by_reltype(&self, source: &Part<'_>, reltype: &str) -> Result<Option<Part<'_>>> {
        source
            .rels()
            .part_with_reltype(reltype)
            .map(|rel| self.part_for_rel(rel))
            .transpose()
    }

    /// Check whether the package holds a part with this partname.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.phys.contains(partname)
    }

    fn part_for_rel(&self, rel: &Relationship) -> Result<Part<'_>> {
        let partname = rel.target_partname()?;
        self.part(&partname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
    use crate::ooxml::test_support::{DocxBuilder, XlsxBuilder, zip_package};
    use std::io::Cursor;

    #[test]
    fn test_main_document_part_docx() {
        let bytes = DocxBuilder::new().paragraph("Hello").build();
        let pkg = OpcPackage::from_reader(Cursor::new(bytes)).unwrap();

        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.partname().as_str(), "/word/document.xml");
        assert_eq!(main.content_type(), ct::WML_DOCUMENT_MAIN);
    }

    #[test]
    fn test_related_parts_xlsx() {
        let bytes = XlsxBuilder::new().sheet("Data", &[&["a"]]).build();
        let pkg = OpcPackage::from_reader(Cursor::new(bytes)).unwrap();

        let workbook = pkg.main_document_part().unwrap();
        assert_eq!(workbook.content_type(), ct::SML_SHEET_MAIN);

        let sheet = pkg.related_part(&workbook, "rId1").unwrap();
        assert_eq!(sheet.partname().as_str(), "/xl/worksheets/sheet1.xml");
        assert_eq!(sheet.content_type(), ct::SML_WORKSHEET);

        let strings = pkg.part_by_reltype(&workbook, rt::SHARED_STRINGS).unwrap();
        assert!(strings.is_some());
    }

    #[test]
    fn test_missing_relationship() {
        let bytes = XlsxBuilder::new().sheet("Data", &[]).build();
        let pkg = OpcPackage::from_reader(Cursor::new(bytes)).unwrap();
        let workbook = pkg.main_document_part().unwrap();

        assert!(matches!(
            pkg.related_part(&workbook, "rId404"),
            Err(OpcError::RelationshipNotFound(_))
        ));
    }

    #[test]
    fn test_package_without_office_document() {
        let bytes = zip_package(&[
            ("[Content_Types].xml", r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#),
        ]);
        let pkg = OpcPackage::from_reader(Cursor::new(bytes)).unwrap();
        assert!(matches!(
            pkg.main_document_part(),
            Err(OpcError::RelationshipNotFound(_))
        ));
    }

    #[test]
    fn test_zip_without_content_types() {
        let bytes = zip_package(&[("readme.txt", "hello")]);
        let result = OpcPackage::from_reader(Cursor::new(bytes));
        assert!(matches!(result, Err(OpcError::PartNotFound(_))));
    }
}
