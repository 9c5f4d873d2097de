/// Main presentation object - the read-side API for inspecting presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::{OpcPackage, Part};
use crate::ooxml::pptx::slide::Slide;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A PowerPoint presentation.
///
/// Not intended to be constructed directly. Use `Package::presentation()` to
/// access a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use slidewright::ooxml::pptx::Package;
///
/// let pkg = Package::open("deck.pptx")?;
/// let pres = pkg.presentation()?;
///
/// if let Some((width, height)) = pres.slide_size()? {
///     println!("Slide size: {}x{} EMUs", width, height);
/// }
/// println!("Slide count: {}", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Presentation<'a> {
    /// The presentation.xml part
    part: &'a Part,
    /// Reference to the OPC package for accessing related parts
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: &'a Part, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// Get the number of slides in the presentation.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_ids()?.len())
    }

    /// Slide ids and relationship ids from `p:sldIdLst`, in presentation order.
    pub fn slide_ids(&self) -> Result<Vec<(u32, String)>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();
        let mut ids = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"sldId" =>
                {
                    let mut id = None;
                    let mut r_id = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"id" => {
                                let value = attr.unescape_value()?;
                                id = Some(value.parse::<u32>().map_err(|_| {
                                    OoxmlError::InvalidFormat(format!("invalid slide id: {}", value))
                                })?);
                            },
                            b"r:id" => r_id = Some(attr.unescape_value()?.into_owned()),
                            _ => {},
                        }
                    }
                    match (id, r_id) {
                        (Some(id), Some(r_id)) => ids.push((id, r_id)),
                        _ => {
                            return Err(OoxmlError::InvalidFormat(
                                "p:sldId without id or r:id".to_string(),
                            ));
                        },
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(ids)
    }

    /// Slide dimensions in EMU from `p:sldSz`.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"sldSz" =>
                {
                    let mut cx = None;
                    let mut cy = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = attr.unescape_value()?;
                        match attr.key.as_ref() {
                            b"cx" => cx = value.parse::<i64>().ok(),
                            b"cy" => cy = value.parse::<i64>().ok(),
                            _ => {},
                        }
                    }
                    return Ok(cx.zip(cy));
                },
                Ok(Event::Eof) => return Ok(None),
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }
    }

    /// Get all slides in the presentation, in `p:sldIdLst` order.
    pub fn slides(&self) -> Result<Vec<Slide<'a>>> {
        let slide_ids = self.slide_ids()?;
        let mut slides = Vec::with_capacity(slide_ids.len());

        for (_, r_id) in slide_ids {
            let partname = self.part.related_partname(&r_id)?;
            let slide_part = self.package.get_part(&partname)?;
            slides.push(Slide::new(slide_part, self.package));
        }

        Ok(slides)
    }

    /// Get a specific slide by zero-based index.
    pub fn slide(&self, index: usize) -> Result<Option<Slide<'a>>> {
        Ok(self.slides()?.into_iter().nth(index))
    }
}
