//! Relationship-related objects for OPC packages.
//!
//! This module provides types for managing relationships between parts in an OPC package,
//! including internal and external relationships.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
///
/// Identified by an rId, pointing either at another part (internal) or at
/// an external URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference - either a relative part URI or external URL
    target_ref: String,

    /// Base URI for resolving relative references
    base_uri: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: String,
        reltype: String,
        target_ref: String,
        base_uri: String,
        is_external: bool,
    ) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// For internal relationships this is a reference relative to the source
    /// part's directory; for external relationships an absolute URL.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Absolute target partname for internal relationships.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(
                "Cannot get target_partname for external relationship".to_string(),
            ));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Collection of relationships from a single source.
///
/// Relationships keep insertion order so that serialized `.rels` files list
/// rId1, rId2, ... in the order the writer allocated them.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection rooted at `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Add a relationship with an explicit rId.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) -> &Relationship {
        let rel = Relationship::new(r_id, reltype, target_ref, self.base_uri.clone(), is_external);
        self.rels.push(rel);
        &self.rels[self.rels.len() - 1]
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id() == r_id)
    }

    /// Get or add an internal relationship to a target part.
    ///
    /// Returns the rId of the existing relationship when one of the same type
    /// already points at `target_ref`, otherwise allocates the next free rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self.rels.iter().find(|rel| {
            rel.reltype() == reltype && rel.target_ref() == target_ref && !rel.is_external()
        }) {
            return rel.r_id().to_string();
        }

        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref.to_string(), r_id.clone(), false);
        r_id
    }

    /// Next available relationship ID, filling gaps first.
    fn next_r_id(&self) -> String {
        let mut used_numbers: Vec<u32> = self
            .rels
            .iter()
            .filter_map(|rel| rel.r_id().strip_prefix("rId")?.parse::<u32>().ok())
            .collect();
        used_numbers.sort_unstable();

        let mut next_num = 1u32;
        for &num in &used_numbers {
            match num.cmp(&next_num) {
                std::cmp::Ordering::Equal => next_num += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        format!("rId{}", next_num)
    }

    /// The single relationship of a given type.
    ///
    /// Fails when there is none, or more than one.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.iter().filter(|rel| rel.reltype() == reltype);

        match (matching.next(), matching.next()) {
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "No relationship of type '{}'",
                reltype
            ))),
            (Some(rel), None) => Ok(rel),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "Multiple relationships of type '{}'",
                reltype
            ))),
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to the XML of a .rels part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let target_mode = if rel.is_external() {
                r#" TargetMode="External""#
            } else {
                ""
            };

            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
                target_mode
            );
        }

        xml.push_str("</Relationships>");

        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_relationship_target_partname() {
        let rel = Relationship::new(
            "rId1".to_string(),
            rt::SLIDE_LAYOUT.to_string(),
            "../slideLayouts/slideLayout1.xml".to_string(),
            "/ppt/slides".to_string(),
            false,
        );

        assert_eq!(rel.r_id(), "rId1");
        assert_eq!(
            rel.target_partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
    }

    #[test]
    fn test_next_r_id_fills_gaps() {
        let mut rels = Relationships::new("/ppt".to_string());
        assert_eq!(rels.next_r_id(), "rId1");

        rels.add_relationship("t".into(), "a.xml".into(), "rId1".into(), false);
        rels.add_relationship("t".into(), "c.xml".into(), "rId3".into(), false);
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_get_or_add() {
        let mut rels = Relationships::new("/ppt".to_string());

        assert_eq!(rels.get_or_add(rt::SLIDE, "slides/slide1.xml"), "rId1");
        // Same type and target reuse the rId
        assert_eq!(rels.get_or_add(rt::SLIDE, "slides/slide1.xml"), "rId1");
        assert_eq!(rels.get_or_add(rt::SLIDE, "slides/slide2.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_part_with_reltype() {
        let mut rels = Relationships::default();
        assert!(rels.part_with_reltype(rt::OFFICE_DOCUMENT).is_err());

        rels.get_or_add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        assert_eq!(
            rels.part_with_reltype(rt::OFFICE_DOCUMENT).unwrap().target_ref(),
            "ppt/presentation.xml"
        );

        rels.get_or_add(rt::OFFICE_DOCUMENT, "ppt/other.xml");
        assert!(matches!(
            rels.part_with_reltype(rt::OFFICE_DOCUMENT),
            Err(OpcError::InvalidRelationship(_))
        ));
    }

    #[test]
    fn test_to_xml_keeps_allocation_order() {
        let mut rels = Relationships::new("/ppt".to_string());
        for i in 1..=11 {
            rels.get_or_add(rt::SLIDE, &format!("slides/slide{}.xml", i));
        }

        let xml = rels.to_xml();
        let pos2 = xml.find(r#"Id="rId2""#).unwrap();
        let pos10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos2 < pos10);
        assert!(xml.starts_with(r#"<?xml version="1.0""#));
    }
}
