//! Slide background support for PowerPoint presentations.

use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Slide background configuration.
///
/// Represents the background fill written to `p:cSld/p:bg`.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideBackground {
    /// Solid color background
    Solid {
        color: RGBColor,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slidewright::common::RGBColor;
    /// use slidewright::ooxml::pptx::SlideBackground;
    ///
    /// let bg = SlideBackground::solid(RGBColor::new(0x0F, 0x1F, 0x33));
    /// assert_eq!(bg.color(), RGBColor::new(0x0F, 0x1F, 0x33));
    /// ```
    pub fn solid(color: RGBColor) -> Self {
        SlideBackground::Solid { color }
    }

    pub fn color(&self) -> RGBColor {
        match self {
            SlideBackground::Solid { color } => *color,
        }
    }

    /// Read the background of a slide from its XML.
    ///
    /// Returns `None` when the slide inherits its background.
    pub(crate) fn from_xml(xml: &[u8]) -> Result<Option<Self>> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        let mut in_bg = false;
        let mut in_solid_fill = false;
        let mut background: Option<SlideBackground> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"bg" => in_bg = true,
                    b"solidFill" if in_bg => in_solid_fill = true,
                    b"srgbClr" if in_solid_fill && background.is_none() => {
                        for attr in e.attributes() {
                            let attr = attr?;
                            if attr.key.as_ref() == b"val" {
                                let val = attr.unescape_value()?;
                                let color = RGBColor::from_hex(&val).ok_or_else(|| {
                                    OoxmlError::InvalidFormat(format!(
                                        "invalid background color: {}",
                                        val
                                    ))
                                })?;
                                background = Some(SlideBackground::Solid { color });
                            }
                        }
                    },
                    _ => {},
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"bg" => {
                        in_bg = false;
                        in_solid_fill = false;
                    },
                    b"solidFill" => in_solid_fill = false,
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(background)
    }

    /// Serialize as a `p:bg` element.
    pub(crate) fn to_xml(&self) -> String {
        match self {
            SlideBackground::Solid { color } => format!(
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color.to_hex()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_background_xml() {
        let bg = SlideBackground::solid(RGBColor::new(0xFF, 0x00, 0x00));
        let xml = bg.to_xml();
        assert!(xml.contains(r#"<a:srgbClr val="FF0000"/>"#));
        assert!(xml.starts_with("<p:bg><p:bgPr><a:solidFill>"));
    }

    #[test]
    fn test_reads_background_not_shape_fill() {
        let xml = br#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld>
<p:bg><p:bgPr><a:solidFill><a:srgbClr val="1B3A5C"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
<p:spTree><p:sp><p:spPr><a:solidFill><a:srgbClr val="3A8FD6"/></a:solidFill></p:spPr></p:sp></p:spTree>
</p:cSld></p:sld>"#;
        let bg = SlideBackground::from_xml(xml).unwrap().unwrap();
        assert_eq!(bg.color(), RGBColor::new(0x1B, 0x3A, 0x5C));
    }

    #[test]
    fn test_inherited_background_is_none() {
        let xml = br#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
<p:sp><p:spPr><a:solidFill><a:srgbClr val="3A8FD6"/></a:solidFill></p:spPr></p:sp>
</p:spTree></p:cSld></p:sld>"#;
        assert_eq!(SlideBackground::from_xml(xml).unwrap(), None);
    }
}
