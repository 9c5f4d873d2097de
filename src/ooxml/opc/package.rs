//! The in-memory OPC package.
//!
//! OpcPackage holds package-level relationships and an ordered list of parts.
//! It is built part by part by the presentation writer, or loaded back from a
//! ZIP archive for inspection.

use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::io::{Read, Seek};
use std::path::Path;

/// Main API class for working with OPC packages.
#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    /// Parts in the order they were added
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Open an OPC package from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let phys_reader = PhysPkgReader::open(path)?;
        Self::from_phys_reader(&phys_reader)
    }

    /// Load an OPC package from a seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let phys_reader = PhysPkgReader::new(reader)?;
        Self::from_phys_reader(&phys_reader)
    }

    /// Load an OPC package from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let phys_reader = PhysPkgReader::from_bytes(data)?;
        Self::from_phys_reader(&phys_reader)
    }

    fn from_phys_reader(phys_reader: &PhysPkgReader) -> Result<Self> {
        let (rels, parts) = PackageReader::from_phys_reader(phys_reader)?.into_parts();
        Ok(Self { rels, parts })
    }

    /// Serialize the package to ZIP bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }

    /// Add a part. Partnames are unique within a package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.iter().any(|p| p.partname() == part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Add or get a package-level relationship to `target`.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref)
    }

    /// The main document part (presentation.xml for PowerPoint).
    pub fn main_document_part(&self) -> Result<&Part> {
        let rel = self
            .rels
            .part_with_reltype(relationship_type::OFFICE_DOCUMENT)?;
        let partname = rel.target_partname()?;
        self.get_part(&partname)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Iterate over parts in insertion order.
    #[inline]
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        let pres_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        let slide_uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();

        let mut pres = Part::new(
            pres_uri.clone(),
            ct::PML_PRESENTATION_MAIN,
            b"<p:presentation/>".to_vec(),
        );
        pres.relate_to(&slide_uri, rt::SLIDE);
        pkg.add_part(pres).unwrap();
        pkg.add_part(Part::new(slide_uri, ct::PML_SLIDE, b"<p:sld/>".to_vec()))
            .unwrap();
        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = sample_package();
        let dup = Part::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
            Vec::new(),
        );
        assert!(matches!(pkg.add_part(dup), Err(OpcError::DuplicatePart(_))));
    }

    #[test]
    fn test_main_document_part() {
        let pkg = sample_package();
        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);
    }

    #[test]
    fn test_round_trip_through_zip() {
        let pkg = sample_package();
        let loaded = OpcPackage::from_bytes(pkg.to_bytes().unwrap()).unwrap();

        assert_eq!(loaded.part_count(), 2);
        let main = loaded.main_document_part().unwrap();
        assert_eq!(main.xml().unwrap(), "<p:presentation/>");
        assert_eq!(
            main.related_partname("rId1").unwrap().as_str(),
            "/ppt/slides/slide1.xml"
        );
        assert_eq!(
            loaded
                .get_part(&PackURI::new("/ppt/slides/slide1.xml").unwrap())
                .unwrap()
                .content_type(),
            ct::PML_SLIDE
        );
    }
}
