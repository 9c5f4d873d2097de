//! Text frames and paragraphs for writable shapes.

use crate::common::unit::font_size_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{ParagraphFormat, TextFormat};
use std::fmt::Write as FmtWrite;

/// One `a:p` element.
///
/// Line feeds and vertical tabs in the text become `a:br` line breaks inside
/// the paragraph. Every run of the paragraph shares the same run format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    pub format: ParagraphFormat,
    pub font: TextFormat,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        self.write_paragraph_properties(xml)?;

        for (index, line) in self.text.split(['\n', '\u{b}']).enumerate() {
            if index > 0 {
                xml.push_str("<a:br>");
                self.write_character_properties(xml, "a:rPr")?;
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            self.write_character_properties(xml, "a:rPr")?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }

        // Empty paragraphs take their height from this element
        self.write_character_properties(xml, "a:endParaRPr")?;
        xml.push_str("</a:p>");
        Ok(())
    }

    fn write_paragraph_properties(&self, xml: &mut String) -> Result<()> {
        if self.format.is_empty() {
            return Ok(());
        }

        xml.push_str("<a:pPr");
        if let Some(alignment) = self.format.alignment {
            write!(xml, r#" algn="{}""#, alignment.as_str())?;
        }

        match self.format.space_after {
            Some(space) => {
                xml.push('>');
                write!(
                    xml,
                    r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                    font_size_to_centipoints(space)
                )?;
                xml.push_str("</a:pPr>");
            },
            None => xml.push_str("/>"),
        }

        Ok(())
    }

    /// `a:rPr` and `a:endParaRPr` share one schema; children must appear
    /// fill first, then typefaces.
    fn write_character_properties(&self, xml: &mut String, tag: &str) -> Result<()> {
        let format = &self.font;
        write!(xml, r#"<{} lang="en-US""#, tag)?;

        if let Some(size) = format.size {
            write!(xml, r#" sz="{}""#, font_size_to_centipoints(size))?;
        }
        if let Some(bold) = format.bold {
            xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
        }
        if let Some(italic) = format.italic {
            xml.push_str(if italic { r#" i="1""# } else { r#" i="0""# });
        }
        if let Some(underline) = format.underline {
            xml.push_str(if underline { r#" u="sng""# } else { r#" u="none""# });
        }
        xml.push_str(r#" dirty="0">"#);

        if let Some(color) = format.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref font) = format.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }

        write!(xml, "</{}>", tag)?;
        Ok(())
    }
}

/// The text body of a text box: ordered paragraphs plus wrapping mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

impl TextFrame {
    /// A frame with one paragraph holding `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            paragraphs: vec![Paragraph::new(text)],
            word_wrap: false,
        }
    }

    /// A frame with one paragraph per item.
    pub fn with_paragraphs<S: AsRef<str>>(items: &[S]) -> Self {
        let mut paragraphs: Vec<Paragraph> =
            items.iter().map(|item| Paragraph::new(item.as_ref())).collect();
        if paragraphs.is_empty() {
            paragraphs.push(Paragraph::default());
        }
        Self {
            paragraphs,
            word_wrap: false,
        }
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    #[inline]
    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(Paragraph::new(text));
        &mut self.paragraphs[index]
    }

    /// Text of all paragraphs joined by line feeds.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        if self.word_wrap {
            xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
        } else {
            xml.push_str(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
        }
        xml.push_str("<a:lstStyle/>");
        for p in &self.paragraphs {
            p.write_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}
