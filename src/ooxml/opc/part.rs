/// Parts of an OPC package.
///
/// A part is a named member of the package with a content type, a binary
/// payload and the relationships it declares.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A part borrowed from an [`OpcPackage`](crate::ooxml::opc::OpcPackage).
#[derive(Debug, Clone)]
pub struct Part<'a> {
    partname: PackURI,
    content_type: &'a str,
    blob: &'a [u8],
    rels: Relationships,
}

impl<'a> Part<'a> {
    pub(crate) fn new(
        partname: PackURI,
        content_type: &'a str,
        blob: &'a [u8],
        rels: Relationships,
    ) -> Self {
        Self {
            partname,
            content_type,
            blob,
            rels,
        }
    }

    /// Get the partname of this part.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type of this part.
    #[inline]
    pub fn content_type(&self) -> &'a str {
        self.content_type
    }

    /// Get the binary content of this part.
    #[inline]
    pub fn blob(&self) -> &'a [u8] {
        self.blob
    }

    /// Get the relationships declared by this part.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get the content as UTF-8 text, without a leading byte order mark.
    pub fn xml_str(&self) -> Result<&'a str> {
        let blob = self.blob.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(self.blob);
        std::str::from_utf8(blob)
            .map_err(|e| OpcError::XmlError(format!("{} is not valid UTF-8: {}", self.partname, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_str_strips_bom() {
        let uri = PackURI::new("/xl/workbook.xml").unwrap();
        let part = Part::new(uri, "application/xml", b"\xEF\xBB\xBF<workbook/>", Relationships::new());
        assert_eq!(part.xml_str().unwrap(), "<workbook/>");
    }

    #[test]
    fn test_xml_str_rejects_invalid_utf8() {
        let uri = PackURI::new("/xl/workbook.xml").unwrap();
        let part = Part::new(uri, "application/xml", b"<a>\xFF</a>", Relationships::new());
        assert!(matches!(part.xml_str(), Err(OpcError::XmlError(_))));
    }
}
