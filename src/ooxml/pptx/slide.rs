/// Slide implementation for PowerPoint presentations.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::shapes::{Table, resolve_reference};
use quick_xml::Reader;
use quick_xml::events::Event;

/// A slide in a presentation.
///
/// Wraps the slide part and parses its XML on demand.
pub struct Slide<'a> {
    part: &'a Part,
    package: &'a OpcPackage,
}

impl<'a> Slide<'a> {
    #[inline]
    pub(crate) fn new(part: &'a Part, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        self.part.partname()
    }

    /// Get the background for this slide.
    ///
    /// Returns `None` when the slide uses the master background.
    pub fn background(&self) -> Result<Option<SlideBackground>> {
        SlideBackground::from_xml(self.part.blob())
    }

    /// Solid background color, if the slide has one.
    pub fn background_color(&self) -> Result<Option<RGBColor>> {
        Ok(self.background()?.map(|bg| bg.color()))
    }

    /// All tables on the slide, in document order.
    pub fn tables(&self) -> Result<Vec<Table>> {
        Table::all_from_slide_xml(self.part.blob())
    }

    /// Name of the slide layout this slide is based on.
    pub fn layout_name(&self) -> Result<Option<String>> {
        let rel = self.part.rels().part_with_reltype(rt::SLIDE_LAYOUT)?;
        let layout = self.package.get_part(&rel.target_partname()?)?;

        let mut reader = Reader::from_reader(layout.blob());
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                    if e.local_name().as_ref() == b"cSld" =>
                {
                    for attr in e.attributes() {
                        let attr = attr?;
                        if attr.key.as_ref() == b"name" {
                            return Ok(Some(attr.unescape_value()?.into_owned()));
                        }
                    }
                    return Ok(None);
                },
                Ok(Event::Eof) => return Ok(None),
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }
    }

    /// Number of top-level shapes in the shape tree.
    pub fn shape_count(&self) -> Result<usize> {
        let mut reader = Reader::from_reader(self.part.blob());
        let mut buf = Vec::new();

        let mut depth = 0usize;
        let mut tree_depth: Option<usize> = None;
        let mut count = 0;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    depth += 1;
                    let name = e.local_name();
                    if name.as_ref() == b"spTree" && tree_depth.is_none() {
                        tree_depth = Some(depth);
                    } else if tree_depth.is_some_and(|d| depth == d + 1) && is_shape(name.as_ref())
                    {
                        count += 1;
                    }
                },
                Ok(Event::Empty(ref e)) => {
                    if tree_depth.is_some_and(|d| depth == d) && is_shape(e.local_name().as_ref()) {
                        count += 1;
                    }
                },
                Ok(Event::End(_)) => {
                    if tree_depth == Some(depth) {
                        break;
                    }
                    depth = depth.saturating_sub(1);
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(count)
    }

    /// Text of each `p:sp` shape that has a text body.
    ///
    /// Paragraphs and line breaks are both rendered as line feeds.
    pub fn text_boxes(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.part.blob());
        let mut buf = Vec::new();

        let mut texts = Vec::new();
        let mut paragraphs: Option<Vec<String>> = None;
        let mut in_sp = false;
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = e.local_name();
                    if name.as_ref() == b"t" {
                        in_text = paragraphs.is_some();
                    } else {
                        open_text_element(name.as_ref(), &mut in_sp, &mut paragraphs);
                    }
                },
                Ok(Event::Empty(ref e)) => {
                    open_text_element(e.local_name().as_ref(), &mut in_sp, &mut paragraphs);
                },
                Ok(Event::Text(ref e)) if in_text => {
                    let text = e.decode()?;
                    if let Some(p) = paragraphs.as_mut().and_then(|ps| ps.last_mut()) {
                        p.push_str(&text);
                    }
                },
                Ok(Event::GeneralRef(ref e)) if in_text => {
                    let text = resolve_reference(e)?;
                    if let Some(p) = paragraphs.as_mut().and_then(|ps| ps.last_mut()) {
                        p.push_str(&text);
                    }
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"sp" => {
                        in_sp = false;
                        if let Some(ps) = paragraphs.take() {
                            texts.push(ps.join("\n"));
                        }
                    },
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(texts)
    }
}

fn open_text_element(local_name: &[u8], in_sp: &mut bool, paragraphs: &mut Option<Vec<String>>) {
    match local_name {
        b"sp" => *in_sp = true,
        b"txBody" if *in_sp => *paragraphs = Some(Vec::new()),
        b"p" => {
            if let Some(ps) = paragraphs.as_mut() {
                ps.push(String::new());
            }
        },
        b"br" => {
            if let Some(p) = paragraphs.as_mut().and_then(|ps| ps.last_mut()) {
                p.push('\n');
            }
        },
        _ => {},
    }
}

fn is_shape(local_name: &[u8]) -> bool {
    matches!(
        local_name,
        b"sp" | b"graphicFrame" | b"pic" | b"grpSp" | b"cxnSp"
    )
}
