/// Content type resolution for OPC packages.
///
/// Parses `[Content_Types].xml`, which maps part names to content types
/// through `Override` entries and file extensions through `Default` entries.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// Mapping from part names to content types.
///
/// Lookups are case-insensitive, as required by the OPC specification.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeMap {
    /// Lowercased partname to content type
    overrides: HashMap<String, String>,
    /// Lowercased extension to content type
    defaults: HashMap<String, String>,
}

impl ContentTypeMap {
    /// Parse `[Content_Types].xml` content.
    pub fn from_xml(content_types_xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(content_types_xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    match e.local_name().as_ref() {
                        b"Default" => {
                            let mut extension = None;
                            let mut content_type = None;

                            for attr in e.attributes() {
                                let attr = attr?;
                                match attr.key.as_ref() {
                                    b"Extension" => {
                                        extension = Some(attr.unescape_value()?.to_lowercase());
                                    },
                                    b"ContentType" => {
                                        content_type = Some(attr.unescape_value()?.into_owned());
                                    },
                                    _ => {},
                                }
                            }

                            if let (Some(ext), Some(ct)) = (extension, content_type) {
                                map.defaults.insert(ext, ct);
                            }
                        },
                        b"Override" => {
                            let mut partname = None;
                            let mut content_type = None;

                            for attr in e.attributes() {
                                let attr = attr?;
                                match attr.key.as_ref() {
                                    b"PartName" => {
                                        partname = Some(attr.unescape_value()?.to_lowercase());
                                    },
                                    b"ContentType" => {
                                        content_type = Some(attr.unescape_value()?.into_owned());
                                    },
                                    _ => {},
                                }
                            }

                            if let (Some(pn), Some(ct)) = (partname, content_type) {
                                map.overrides.insert(pn, ct);
                            }
                        },
                        _ => {},
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!("Content types parse error: {}", e)));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Get the content type of a part.
    ///
    /// An `Override` for the exact partname wins over a `Default` for its extension.
    pub fn content_type_for(&self, partname: &PackURI) -> Result<&str> {
        if let Some(ct) = self.overrides.get(&partname.as_str().to_lowercase()) {
            return Ok(ct.as_str());
        }

        self.defaults
            .get(&partname.ext().to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| OpcError::ContentTypeNotFound(partname.to_string()))
    }
}
