/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::writer::shape::MutableShape;
use crate::ooxml::pptx::writer::table::TableData;
use crate::ooxml::pptx::writer::text::TextFrame;

/// IDs: 1 = the slide's group shape, 2+ = user shapes
const FIRST_SHAPE_ID: u32 = 2;

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Slide background
    pub(crate) background: Option<SlideBackground>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            background: None,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set a background for the slide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slidewright::common::RGBColor;
    /// use slidewright::ooxml::pptx::{MutablePresentation, SlideBackground};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide();
    /// slide.set_background(SlideBackground::solid(RGBColor::new(0x1B, 0x3A, 0x5C)));
    /// ```
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = Some(background);
    }

    /// Returns `None` if the slide inherits the master background.
    pub fn background(&self) -> Option<&SlideBackground> {
        self.background.as_ref()
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + FIRST_SHAPE_ID
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Add a text box holding a single paragraph.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(
            self.next_shape_id(),
            TextFrame::with_text(text),
            x,
            y,
            width,
            height,
        );
        self.push(shape)
    }

    /// Add a text box with one paragraph per item.
    pub fn add_paragraphs<S: AsRef<str>>(
        &mut self,
        items: &[S],
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(
            self.next_shape_id(),
            TextFrame::with_paragraphs(items),
            x,
            y,
            width,
            height,
        );
        self.push(shape)
    }

    /// Add a rectangle autoshape. Fill and outline are set on the returned shape.
    pub fn add_rectangle(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        let shape = MutableShape::new_rectangle(self.next_shape_id(), x, y, width, height);
        self.push(shape)
    }

    /// Add a table at `(x, y)`; its extent comes from the table grid.
    pub fn add_table(&mut self, table: TableData, x: i64, y: i64) -> &mut MutableShape {
        let shape = MutableShape::new_table(self.next_shape_id(), table, x, y);
        self.push(shape)
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(ref background) = self.background {
            xml.push_str(&background.to_xml());
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_shape_ids_follow_insertion_order() {
        let mut slide = MutableSlide::new(256);
        assert_eq!(slide.add_rectangle(0, 0, 10, 10).shape_id(), 2);
        assert_eq!(slide.add_text_box("Hello", 0, 0, 10, 10).shape_id(), 3);
        assert_eq!(slide.add_paragraphs(&["a", "b"], 0, 0, 10, 10).shape_id(), 4);
        assert_eq!(slide.shape_count(), 3);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(SlideBackground::solid(RGBColor::WHITE));
        slide.add_text_box("Title", 0, 0, 10, 10);

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains("<a:t>Title</a:t>"));
    }

    #[test]
    fn test_table_shape_takes_grid_extent() {
        let mut slide = MutableSlide::new(256);
        let mut table = TableData::new(3, 2, 1000, 900).unwrap();
        table.set_column_width(1, 700).unwrap();

        let shape = slide.add_table(table, 5, 5);
        assert_eq!(shape.bounds(), (5, 5, 1200, 900));
        assert_eq!(shape.table().unwrap().row_count(), 3);
    }
}
