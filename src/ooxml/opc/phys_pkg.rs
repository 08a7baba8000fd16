//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! The archive is read completely when the package is opened: every member is
//! decompressed into an in-memory cache and the underlying file is closed
//! before any XML is parsed.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

/// Upper bound on the buffer reserved from a member's declared size.
const MAX_PREALLOCATION: usize = 1 << 20;

/// Physical package reader that provides access to parts in a ZIP-based OPC package.
#[derive(Debug)]
pub struct PhysPkgReader {
    /// Decompressed members keyed by membername
    members: HashMap<String, Vec<u8>>,
    /// ASCII-lowercased membername to membername, for case-insensitive lookups
    folded_names: HashMap<String, String>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist, isn't a valid ZIP file,
    /// or cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Create a new PhysPkgReader from a seekable reader.
    ///
    /// The reader is consumed; nothing borrowed from it outlives this call.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;
        let mut members = HashMap::with_capacity(archive.len());
        let mut folded_names = HashMap::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }

            let name = entry.name().trim_start_matches('/').to_string();
            let declared = usize::try_from(entry.size()).unwrap_or(0);
            let mut data = Vec::with_capacity(declared.min(MAX_PREALLOCATION));
            entry.read_to_end(&mut data)?;

            folded_names.insert(name.to_ascii_lowercase(), name.clone());
            members.insert(name, data);
        }

        debug!(members = members.len(), "read OPC package");
        Ok(Self {
            members,
            folded_names,
        })
    }

    /// Get the binary content for a part by its PackURI.
    ///
    /// Part names are case-insensitive in OPC; an exact match is preferred.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<&[u8]> {
        let membername = pack_uri.membername();

        self.members
            .get(membername)
            .or_else(|| {
                self.folded_names
                    .get(&membername.to_ascii_lowercase())
                    .and_then(|name| self.members.get(name))
            })
            .map(Vec::as_slice)
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.blob_for(pack_uri).is_ok()
    }

    /// Get the [Content_Types].xml content.
    ///
    /// This is a required part of every OPC package that maps parts to content types.
    pub fn content_types_xml(&self) -> Result<&[u8]> {
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        self.blob_for(&content_types_uri)
    }

    /// Get the relationships XML for a specific source URI.
    ///
    /// Returns None if the source has no relationships part.
    pub fn rels_xml_for(&self, source_uri: &PackURI) -> Result<Option<&[u8]>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;

        match self.blob_for(&rels_uri) {
            Ok(blob) => Ok(Some(blob)),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get the number of files in the package.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the package is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
