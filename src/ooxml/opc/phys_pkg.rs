//! Physical access to an OPC package (the ZIP container).
//!
//! The reader decompresses every member up front; packages produced by this
//! crate are small and every part is needed anyway.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use zip::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Physical package reader over a ZIP archive.
pub struct PhysPkgReader {
    /// Decompressed member contents keyed by membername
    members: HashMap<String, Vec<u8>>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        Self::new(file)
    }

    /// Read an OPC package from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::new(Cursor::new(data))
    }

    /// Read an OPC package from any seekable reader.
    pub fn new<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut members = HashMap::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut zip_file = archive.by_index(i)?;
            if zip_file.is_dir() {
                continue;
            }

            let mut data = Vec::with_capacity(zip_file.size() as usize);
            zip_file.read_to_end(&mut data)?;
            members.insert(zip_file.name().to_string(), data);
        }

        Ok(Self { members })
    }

    /// Binary content for a part.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<&[u8]> {
        self.members
            .get(pack_uri.membername())
            .map(Vec::as_slice)
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    /// The [Content_Types].xml content.
    pub fn content_types_xml(&self) -> Result<&[u8]> {
        let uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        self.blob_for(&uri)
    }

    /// Relationships XML for a source part, if the package has one.
    pub fn rels_xml_for(&self, source_uri: &PackURI) -> Result<Option<&[u8]>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        Ok(self.members.get(rels_uri.membername()).map(Vec::as_slice))
    }

    #[inline]
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.members.contains_key(pack_uri.membername())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All member names, sorted.
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.members.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Physical package writer that produces a ZIP archive in memory.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the complete ZIP archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        writer.write(&pack_uri, b"<p:presentation/>").unwrap();
        let zip_data = writer.finish().unwrap();

        let reader = PhysPkgReader::from_bytes(zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"<p:presentation/>");
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn test_multiple_parts() {
        let mut writer = PhysPkgWriter::new();

        let content_types = PackURI::new(CONTENT_TYPES_URI).unwrap();
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let slide_rels = slide.rels_uri().unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&slide, b"<p:sld/>").unwrap();
        writer.write(&slide_rels, b"<Relationships/>").unwrap();

        let reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();

        assert!(reader.contains(&slide));
        assert_eq!(reader.content_types_xml().unwrap(), b"<Types/>");
        assert_eq!(
            reader.rels_xml_for(&slide).unwrap(),
            Some(&b"<Relationships/>"[..])
        );
        assert_eq!(
            reader.member_names(),
            vec![
                "[Content_Types].xml",
                "ppt/slides/_rels/slide1.xml.rels",
                "ppt/slides/slide1.xml"
            ]
        );
    }

    #[test]
    fn test_missing_part() {
        let reader = PhysPkgReader::from_bytes(PhysPkgWriter::new().finish().unwrap()).unwrap();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert!(matches!(reader.blob_for(&uri), Err(OpcError::PartNotFound(_))));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let result = PhysPkgReader::open("/nonexistent/deck.pptx");
        assert!(matches!(result, Err(OpcError::PackageNotFound(_))));
    }
}
