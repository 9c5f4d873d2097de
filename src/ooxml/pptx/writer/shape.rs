/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::Alignment;
use crate::ooxml::pptx::writer::table::TableData;
use crate::ooxml::pptx::writer::text::TextFrame;
use std::fmt::Write as FmtWrite;

/// A shape on a slide (text box, rectangle, table).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub enum ShapeType {
    TextBox(TextFrame),
    Rectangle {
        fill_color: Option<RGBColor>,
        /// `false` writes `<a:ln><a:noFill/></a:ln>`
        line: bool,
    },
    Table(TableData),
}

impl MutableShape {
    pub(crate) fn new_text_box(
        shape_id: u32,
        frame: TextFrame,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            shape_type: ShapeType::TextBox(frame),
        }
    }

    pub(crate) fn new_rectangle(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            shape_type: ShapeType::Rectangle {
                fill_color: None,
                line: true,
            },
        }
    }

    /// The graphic frame takes its width from the table's columns.
    pub(crate) fn new_table(shape_id: u32, table: TableData, x: i64, y: i64) -> Self {
        Self {
            shape_id,
            x,
            y,
            width: table.width(),
            height: table.height(),
            shape_type: ShapeType::Table(table),
        }
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn shape_type(&self) -> &ShapeType {
        &self.shape_type
    }

    /// Offset and extent in EMU as `(x, y, width, height)`.
    #[inline]
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Builder method: solid fill (rectangles only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::Rectangle {
            ref mut fill_color, ..
        } = self.shape_type
        {
            *fill_color = Some(color);
        }
        self
    }

    /// Builder method: remove the outline (rectangles only).
    pub fn no_line(&mut self) -> &mut Self {
        if let ShapeType::Rectangle { ref mut line, .. } = self.shape_type {
            *line = false;
        }
        self
    }

    /// Builder method: set word wrap (text boxes only).
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        if let Some(frame) = self.text_frame_mut() {
            frame.word_wrap = wrap;
        }
        self
    }

    /// Builder method: set font on every paragraph.
    pub fn font(&mut self, font: &str) -> &mut Self {
        self.for_each_paragraph(|p| p.font.font = Some(font.to_string()))
    }

    /// Builder method: set font size in points on every paragraph.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.for_each_paragraph(|p| p.font.size = Some(size))
    }

    /// Builder method: set bold on every paragraph.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.for_each_paragraph(|p| p.font.bold = Some(bold))
    }

    /// Builder method: set text color on every paragraph.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.for_each_paragraph(|p| p.font.color = Some(color))
    }

    /// Builder method: set alignment on every paragraph.
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.for_each_paragraph(|p| p.format.alignment = Some(alignment))
    }

    /// Builder method: set space after, in points, on every paragraph.
    pub fn space_after(&mut self, points: f64) -> &mut Self {
        self.for_each_paragraph(|p| p.format.space_after = Some(points))
    }

    fn for_each_paragraph(
        &mut self,
        mut f: impl FnMut(&mut super::text::Paragraph),
    ) -> &mut Self {
        if let Some(frame) = self.text_frame_mut() {
            frame.paragraphs_mut().iter_mut().for_each(&mut f);
        }
        self
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.shape_type {
            ShapeType::TextBox(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.shape_type {
            ShapeType::TextBox(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&TableData> {
        match &self.shape_type {
            ShapeType::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut TableData> {
        match &mut self.shape_type {
            ShapeType::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Shape names follow PowerPoint's "<Kind> <id - 1>" convention.
    fn name(&self) -> String {
        let kind = match self.shape_type {
            ShapeType::TextBox(_) => "TextBox",
            ShapeType::Rectangle { .. } => "Rectangle",
            ShapeType::Table(_) => "Table",
        };
        format!("{} {}", kind, self.shape_id.saturating_sub(1))
    }

    fn write_xfrm(&self, xml: &mut String, tag: &str) -> Result<()> {
        write!(
            xml,
            r#"<{tag}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{tag}>"#,
            self.x, self.y, self.width, self.height
        )?;
        Ok(())
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox(frame) => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}"/>"#,
                    self.shape_id,
                    self.name()
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml, "a:xfrm")?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
                xml.push_str("</p:spPr>");

                frame.write_xml(xml)?;
                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle { fill_color, line } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}"/>"#,
                    self.shape_id,
                    self.name()
                )?;
                xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml, "a:xfrm")?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                if let Some(color) = fill_color {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?;
                }
                if !line {
                    xml.push_str("<a:ln><a:noFill/></a:ln>");
                }
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Table(table) => {
                xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}"/>"#,
                    self.shape_id,
                    self.name()
                )?;
                xml.push_str(
                    r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#,
                );
                xml.push_str("<p:nvPr/></p:nvGraphicFramePr>");
                self.write_xfrm(xml, "p:xfrm")?;
                xml.push_str(
                    r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
                );
                table.write_xml(xml)?;
                xml.push_str("</a:graphicData></a:graphic></p:graphicFrame>");
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_fill_without_outline() {
        let mut shape = MutableShape::new_rectangle(2, 0, 0, 100, 50);
        shape.fill(RGBColor::new(0x3A, 0x8F, 0xD6)).no_line();

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 1"/>"#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="3A8FD6"/></a:solidFill><a:ln><a:noFill/></a:ln>"#
        ));
    }

    #[test]
    fn test_text_builders_ignore_rectangles() {
        let mut shape = MutableShape::new_rectangle(2, 0, 0, 100, 50);
        shape.bold(true).word_wrap(true);
        assert!(shape.text_frame().is_none());
    }

    #[test]
    fn test_text_box_builders_apply_to_all_paragraphs() {
        let mut shape =
            MutableShape::new_text_box(3, TextFrame::with_paragraphs(&["a", "b"]), 0, 0, 10, 10);
        shape.font_size(14.0).space_after(8.0).word_wrap(true);

        let frame = shape.text_frame().unwrap();
        assert!(frame.word_wrap);
        assert!(
            frame
                .paragraphs()
                .iter()
                .all(|p| p.font.size == Some(14.0) && p.format.space_after == Some(8.0))
        );
    }

    #[test]
    fn test_table_frame_xml() {
        let table = TableData::new(2, 2, 1000, 400).unwrap();
        let shape = MutableShape::new_table(4, table, 10, 20);

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.starts_with("<p:graphicFrame>"));
        assert!(xml.contains(r#"name="Table 3""#));
        assert!(xml.contains(r#"<p:xfrm><a:off x="10" y="20"/><a:ext cx="1000" cy="400"/></p:xfrm>"#));
        assert!(xml.contains("<a:tbl>"));
    }
}
