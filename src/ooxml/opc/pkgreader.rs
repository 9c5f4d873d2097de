//! Low-level, read-only API to a serialized OPC package.
//!
//! Parses the content type map and relationship files and loads every part
//! reachable from the package relationships.

use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::{HashMap, HashSet, VecDeque};

/// Content type map for looking up content types by part name or extension.
///
/// Implements the OPC discovery rule: an Override for the partname wins,
/// otherwise the Default for its extension.
struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        };
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) => {
                    let (key_attr, is_default) = match e.local_name().as_ref() {
                        b"Default" => (&b"Extension"[..], true),
                        b"Override" => (&b"PartName"[..], false),
                        _ => {
                            buf.clear();
                            continue;
                        },
                    };

                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        if attr.key.as_ref() == key_attr {
                            key = Some(attr.unescape_value()?.to_string());
                        } else if attr.key.as_ref() == b"ContentType" {
                            content_type = Some(attr.unescape_value()?.to_string());
                        }
                    }

                    if let (Some(key), Some(ct)) = (key, content_type) {
                        if is_default {
                            map.defaults.insert(key.to_lowercase(), ct);
                        } else {
                            map.overrides.insert(key, ct);
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!(
                        "Content types parse error: {}",
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    fn get(&self, pack_uri: &PackURI) -> Result<&str> {
        if let Some(ct) = self.overrides.get(pack_uri.as_str()) {
            return Ok(ct);
        }

        self.defaults
            .get(&pack_uri.ext().to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

/// Parse the XML of a .rels part into a relationship collection.
pub fn parse_rels_xml(xml: &[u8], base_uri: &str) -> Result<Relationships> {
    let mut rels = Relationships::new(base_uri.to_string());
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) if e.local_name().as_ref() == b"Relationship" => {
                let mut r_id = None;
                let mut reltype = None;
                let mut target_ref = None;
                let mut mode = target_mode::INTERNAL.to_string();

                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"Id" => r_id = Some(attr.unescape_value()?.to_string()),
                        b"Type" => reltype = Some(attr.unescape_value()?.to_string()),
                        b"Target" => target_ref = Some(attr.unescape_value()?.to_string()),
                        b"TargetMode" => mode = attr.unescape_value()?.to_string(),
                        _ => {},
                    }
                }

                match (r_id, reltype, target_ref) {
                    (Some(r_id), Some(reltype), Some(target_ref)) => {
                        rels.add_relationship(
                            reltype,
                            target_ref,
                            r_id,
                            mode == target_mode::EXTERNAL,
                        );
                    },
                    _ => {
                        return Err(OpcError::InvalidRelationship(
                            "Relationship missing Id, Type or Target".to_string(),
                        ));
                    },
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OpcError::XmlError(format!("Relationships parse error: {}", e))),
            _ => {},
        }
        buf.clear();
    }

    Ok(rels)
}

/// Package reader that loads serialized parts and relationships.
pub struct PackageReader {
    pkg_rels: Relationships,
    parts: Vec<Part>,
}

impl PackageReader {
    /// Load every part reachable from the package relationships.
    ///
    /// Parts are visited breadth-first; each is loaded once even when several
    /// relationships point at it.
    pub fn from_phys_reader(phys_reader: &PhysPkgReader) -> Result<Self> {
        let content_types = ContentTypeMap::from_xml(phys_reader.content_types_xml()?)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let pkg_rels = Self::load_rels(phys_reader, &package_uri)?;

        let mut parts = Vec::new();
        let mut visited: HashSet<PackURI> = HashSet::new();
        let mut queue: VecDeque<PackURI> = VecDeque::new();

        for rel in pkg_rels.iter().filter(|rel| !rel.is_external()) {
            queue.push_back(rel.target_partname()?);
        }

        while let Some(partname) = queue.pop_front() {
            if !visited.insert(partname.clone()) {
                continue;
            }

            let content_type = content_types.get(&partname)?.to_string();
            let blob = phys_reader.blob_for(&partname)?.to_vec();
            let rels = Self::load_rels(phys_reader, &partname)?;

            for rel in rels.iter().filter(|rel| !rel.is_external()) {
                queue.push_back(rel.target_partname()?);
            }

            let mut part = Part::new(partname, content_type, blob);
            *part.rels_mut() = rels;
            parts.push(part);
        }

        Ok(Self { pkg_rels, parts })
    }

    fn load_rels(phys_reader: &PhysPkgReader, source_uri: &PackURI) -> Result<Relationships> {
        match phys_reader.rels_xml_for(source_uri)? {
            Some(xml) => parse_rels_xml(xml, source_uri.base_uri()),
            None => Ok(Relationships::new(source_uri.base_uri().to_string())),
        }
    }

    /// Split into package relationships and parts.
    pub fn into_parts(self) -> (Relationships, Vec<Part>) {
        (self.pkg_rels, self.parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_lookup() {
        let xml = br#"<?xml version="1.0"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="XML" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/main+xml"/>
</Types>"#;
        let map = ContentTypeMap::from_xml(xml).unwrap();

        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        let other = PackURI::new("/ppt/other.xml").unwrap();
        let image = PackURI::new("/ppt/media/image1.png").unwrap();

        assert_eq!(map.get(&pres).unwrap(), "application/main+xml");
        assert_eq!(map.get(&other).unwrap(), "application/xml");
        assert!(matches!(map.get(&image), Err(OpcError::ContentTypeNotFound(_))));
    }

    #[test]
    fn test_parse_rels_xml() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="urn:layout" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="urn:link" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
</Relationships>"#;
        let rels = parse_rels_xml(xml, "/ppt/slides").unwrap();

        assert_eq!(rels.len(), 2);
        let layout = rels.get("rId1").unwrap();
        assert_eq!(
            layout.target_partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
        let link = rels.get("rId2").unwrap();
        assert!(link.is_external());
        assert_eq!(link.target_ref(), "https://example.com/?a=1&b=2");
    }

    #[test]
    fn test_parse_rels_missing_target() {
        let xml = br#"<Relationships><Relationship Id="rId1" Type="urn:x"/></Relationships>"#;
        assert!(matches!(
            parse_rels_xml(xml, "/"),
            Err(OpcError::InvalidRelationship(_))
        ));
    }
}
