//! Writable DrawingML tables.
//!
//! A [`TableData`] is a rectangular grid of [`TableCell`]s with explicit
//! column widths and row heights. It is placed on a slide inside a
//! `p:graphicFrame` by [`MutableSlide::add_table`](super::MutableSlide::add_table).

use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::VerticalAnchor;
use crate::ooxml::pptx::writer::text::Paragraph;
use std::fmt::Write as FmtWrite;

/// Built-in "Medium Style 2 - Accent 1" table style.
pub const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    paragraphs: Vec<Paragraph>,
    fill: Option<RGBColor>,
    anchor: Option<VerticalAnchor>,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
            fill: None,
            anchor: None,
        }
    }
}

impl TableCell {
    /// Replace the cell text. Each line becomes its own paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = text.split('\n').map(Paragraph::new).collect();
    }

    /// Cell text with paragraphs joined by line feeds.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    #[inline]
    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    pub fn set_fill(&mut self, color: RGBColor) {
        self.fill = Some(color);
    }

    #[inline]
    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    pub fn set_vertical_anchor(&mut self, anchor: VerticalAnchor) {
        self.anchor = Some(anchor);
    }

    #[inline]
    pub fn vertical_anchor(&self) -> Option<VerticalAnchor> {
        self.anchor
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
        for p in &self.paragraphs {
            p.write_xml(xml)?;
        }
        xml.push_str("</a:txBody>");

        xml.push_str("<a:tcPr");
        if let Some(anchor) = self.anchor {
            write!(xml, r#" anchor="{}""#, anchor.as_str())?;
        }
        match self.fill {
            Some(color) => {
                write!(
                    xml,
                    r#"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:tcPr>"#,
                    color.to_hex()
                )?;
            },
            None => xml.push_str("/>"),
        }

        xml.push_str("</a:tc>");
        Ok(())
    }
}

/// Table content and grid geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    rows: Vec<Vec<TableCell>>,
    column_widths: Vec<i64>,
    row_heights: Vec<i64>,
    /// Frame height as requested at creation
    height: i64,
    pub first_row: bool,
    pub band_row: bool,
    pub style_id: String,
}

impl TableData {
    /// Create an empty `rows` x `cols` grid.
    ///
    /// Width and height are split evenly across columns and rows, truncating
    /// to whole EMU.
    pub fn new(rows: usize, cols: usize, width: i64, height: i64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(OoxmlError::InvalidFormat(format!(
                "table must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }

        Ok(Self {
            rows: vec![vec![TableCell::default(); cols]; rows],
            column_widths: vec![width / cols as i64; cols],
            row_heights: vec![height / rows as i64; rows],
            height,
            first_row: true,
            band_row: true,
            style_id: DEFAULT_TABLE_STYLE_ID.to_string(),
        })
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut TableCell> {
        let (rows, cols) = (self.row_count(), self.column_count());
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(OoxmlError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            })
    }

    pub fn set_column_width(&mut self, col: usize, width: i64) -> Result<()> {
        let (rows, cols) = (self.row_count(), self.column_count());
        let slot = self
            .column_widths
            .get_mut(col)
            .ok_or(OoxmlError::CellOutOfRange {
                row: 0,
                col,
                rows,
                cols,
            })?;
        *slot = width;
        Ok(())
    }

    #[inline]
    pub fn column_widths(&self) -> &[i64] {
        &self.column_widths
    }

    #[inline]
    pub fn row_heights(&self) -> &[i64] {
        &self.row_heights
    }

    /// Total width: the sum of the column widths.
    pub fn width(&self) -> i64 {
        self.column_widths.iter().sum()
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Serialize as an `a:tbl` element.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tbl>");
        write!(
            xml,
            r#"<a:tblPr firstRow="{}" bandRow="{}"><a:tableStyleId>{}</a:tableStyleId></a:tblPr>"#,
            u8::from(self.first_row),
            u8::from(self.band_row),
            self.style_id
        )?;

        xml.push_str("<a:tblGrid>");
        for width in &self.column_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
        }
        xml.push_str("</a:tblGrid>");

        for (row, height) in self.rows.iter().zip(&self.row_heights) {
            write!(xml, r#"<a:tr h="{}">"#, height)?;
            for cell in row {
                cell.write_xml(xml)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split_truncates() {
        let table = TableData::new(11, 3, 10, 4_023_360).unwrap();
        assert_eq!(table.row_heights()[0], 365_760);
        assert_eq!(table.column_widths(), &[3, 3, 3]);
        assert_eq!(table.height(), 4_023_360);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(TableData::new(0, 2, 100, 100).is_err());
        assert!(TableData::new(2, 0, 100, 100).is_err());
    }

    #[test]
    fn test_cell_lines_become_paragraphs() {
        let mut table = TableData::new(1, 1, 100, 100).unwrap();
        let cell = table.cell_mut(0, 0).unwrap();
        cell.set_text("Orphan Drug,\nRare Pediatric Disease");
        assert_eq!(cell.paragraphs().len(), 2);
        assert_eq!(cell.text(), "Orphan Drug,\nRare Pediatric Disease");
    }

    #[test]
    fn test_out_of_range() {
        let mut table = TableData::new(2, 2, 100, 100).unwrap();
        assert!(matches!(
            table.cell_mut(2, 0),
            Err(OoxmlError::CellOutOfRange { row: 2, col: 0, rows: 2, cols: 2 })
        ));
        assert!(table.set_column_width(5, 10).is_err());
    }

    #[test]
    fn test_table_xml() {
        let mut table = TableData::new(2, 2, 200, 100).unwrap();
        table.set_column_width(0, 150).unwrap();
        {
            let cell = table.cell_mut(0, 0).unwrap();
            cell.set_text("Parameter");
            cell.set_fill(RGBColor::new(0x1B, 0x3A, 0x5C));
            cell.set_vertical_anchor(VerticalAnchor::Middle);
        }

        let mut xml = String::new();
        table.write_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<a:tblPr firstRow="1" bandRow="1">"#));
        assert!(xml.contains(DEFAULT_TABLE_STYLE_ID));
        assert!(xml.contains(r#"<a:gridCol w="150"/><a:gridCol w="100"/>"#));
        assert_eq!(xml.matches(r#"<a:tr h="50">"#).count(), 2);
        assert!(xml.contains(
            r#"<a:tcPr anchor="ctr"><a:solidFill><a:srgbClr val="1B3A5C"/></a:solidFill></a:tcPr>"#
        ));
        assert_eq!(table.width(), 250);
    }
}
