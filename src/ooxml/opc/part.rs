//! Open Packaging Convention (OPC) objects related to package parts.
//!
//! A part is the fundamental unit of content in an OPC package: a unique
//! partname, a content type, a blob, and the relationships it owns.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A part in an OPC package.
#[derive(Debug, Clone)]
pub struct Part {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The serialized content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part with no relationships.
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the serialized content.
    ///
    /// Used when the content embeds relationship ids that are only known
    /// after the relationships have been created.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Part content as UTF-8 XML text.
    pub fn xml(&self) -> Result<&str> {
        std::str::from_utf8(&self.blob)
            .map_err(|e| OpcError::XmlError(format!("Invalid UTF-8 in {}: {}", self.partname, e)))
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Add or get a relationship from this part to `target`.
    ///
    /// The stored target reference is relative to this part's directory.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref)
    }

    /// Partname of the part a relationship points at.
    pub fn related_partname(&self, r_id: &str) -> Result<PackURI> {
        self.rels
            .get(r_id)
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("rId: {}", r_id)))?
            .target_partname()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_relate_to_uses_relative_reference() {
        let mut slide = Part::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
            b"<p:sld/>".to_vec(),
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();

        let r_id = slide.relate_to(&layout, rt::SLIDE_LAYOUT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            slide.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
        assert_eq!(slide.related_partname("rId1").unwrap(), layout);
    }

    #[test]
    fn test_xml_rejects_invalid_utf8() {
        let part = Part::new(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
            vec![0xFF, 0xFE],
        );
        assert!(part.xml().is_err());
    }
}
