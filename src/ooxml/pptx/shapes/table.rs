/// Table shape implementation for PowerPoint presentations.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A table in a PowerPoint presentation.
///
/// Tables in PowerPoint are DrawingML tables (a:tbl) contained within
/// graphic frames. They contain rows, which contain cells.
///
/// # Examples
///
/// ```rust,no_run
/// use slidewright::ooxml::pptx::Package;
///
/// let pkg = Package::open("deck.pptx")?;
/// let pres = pkg.presentation()?;
/// for slide in pres.slides()? {
///     for table in slide.tables()? {
///         println!("Table: {}x{}", table.row_count(), table.column_count());
///         for (row_idx, row) in table.rows().iter().enumerate() {
///             for (col_idx, cell) in row.cells().iter().enumerate() {
///                 println!("Cell[{},{}]: {}", row_idx, col_idx, cell.text());
///             }
///         }
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    column_widths: Vec<i64>,
    rows: Vec<TableRow>,
}

/// A row in a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    height: i64,
    cells: Vec<TableCell>,
}

/// A cell in a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    paragraphs: Vec<String>,
    fill: Option<RGBColor>,
    anchor: Option<String>,
}

impl Table {
    /// Get the number of rows in the table.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of grid columns in the table.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    #[inline]
    pub fn column_widths(&self) -> &[i64] {
        &self.column_widths
    }

    #[inline]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Parse every `a:tbl` in a slide, in document order.
    pub(crate) fn all_from_slide_xml(xml: &[u8]) -> Result<Vec<Table>> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();

        let mut tables = Vec::new();
        let mut current: Option<Table> = None;
        let mut in_tc_pr = false;
        let mut in_fill = false;
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    if let Some(table) = current.as_mut() {
                        match e.local_name().as_ref() {
                            b"t" => in_text = true,
                            b"tcPr" => {
                                in_tc_pr = true;
                                Self::read_cell_properties(table, e)?;
                            },
                            b"solidFill" if in_tc_pr => in_fill = true,
                            b"br" => {
                                if let Some(p) = table.last_paragraph_mut() {
                                    p.push('\n');
                                }
                            },
                            _ => Self::open_element(table, e)?,
                        }
                    } else if e.local_name().as_ref() == b"tbl" {
                        current = Some(Table::default());
                    }
                },
                Ok(Event::Empty(ref e)) => {
                    if let Some(table) = current.as_mut() {
                        match e.local_name().as_ref() {
                            b"srgbClr" if in_fill => {
                                if let Some(val) = attr_value(e, b"val")? {
                                    let color = RGBColor::from_hex(&val).ok_or_else(|| {
                                        OoxmlError::InvalidFormat(format!(
                                            "invalid cell color: {}",
                                            val
                                        ))
                                    })?;
                                    if let Some(cell) = table.last_cell_mut() {
                                        cell.fill = Some(color);
                                    }
                                }
                            },
                            b"tcPr" => Self::read_cell_properties(table, e)?,
                            b"br" => {
                                if let Some(p) = table.last_paragraph_mut() {
                                    p.push('\n');
                                }
                            },
                            b"t" => {},
                            _ => Self::open_element(table, e)?,
                        }
                    }
                },
                Ok(Event::Text(ref e)) if in_text => {
                    let text = e.decode()?;
                    if let Some(table) = current.as_mut()
                        && let Some(p) = table.last_paragraph_mut()
                    {
                        p.push_str(&text);
                    }
                },
                Ok(Event::GeneralRef(ref e)) if in_text => {
                    let text = super::resolve_reference(e)?;
                    if let Some(table) = current.as_mut()
                        && let Some(p) = table.last_paragraph_mut()
                    {
                        p.push_str(&text);
                    }
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"solidFill" => in_fill = false,
                    b"tcPr" => in_tc_pr = false,
                    b"tbl" => {
                        if let Some(table) = current.take() {
                            tables.push(table);
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

        Ok(tables)
    }

    /// Grid columns, rows, cells, and paragraphs.
    fn open_element(table: &mut Table, e: &BytesStart<'_>) -> Result<()> {
        match e.local_name().as_ref() {
            b"gridCol" => {
                let width = attr_i64(e, b"w")?.unwrap_or(0);
                table.column_widths.push(width);
            },
            b"tr" => {
                let height = attr_i64(e, b"h")?.unwrap_or(0);
                table.rows.push(TableRow {
                    height,
                    cells: Vec::new(),
                });
            },
            b"tc" => {
                if let Some(row) = table.rows.last_mut() {
                    row.cells.push(TableCell::default());
                }
            },
            b"p" => {
                if let Some(cell) = table.last_cell_mut() {
                    cell.paragraphs.push(String::new());
                }
            },
            _ => {},
        }
        Ok(())
    }

    fn read_cell_properties(table: &mut Table, e: &BytesStart<'_>) -> Result<()> {
        if let Some(anchor) = attr_value(e, b"anchor")?
            && let Some(cell) = table.last_cell_mut()
        {
            cell.anchor = Some(anchor);
        }
        Ok(())
    }

    fn last_cell_mut(&mut self) -> Option<&mut TableCell> {
        self.rows.last_mut().and_then(|r| r.cells.last_mut())
    }

    fn last_paragraph_mut(&mut self) -> Option<&mut String> {
        self.last_cell_mut().and_then(|c| c.paragraphs.last_mut())
    }
}

impl TableRow {
    /// Row height in EMU.
    #[inline]
    pub fn height(&self) -> i64 {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Get the number of cells in this row.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl TableCell {
    /// Get the text content of the cell, paragraphs joined by line feeds.
    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }

    #[inline]
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Solid fill color set directly on the cell.
    #[inline]
    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    /// Raw `anchor` attribute of `a:tcPr` ("t", "ctr", "b").
    #[inline]
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn attr_i64(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<i64>> {
    attr_value(e, key)?
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| OoxmlError::InvalidFormat(format!("invalid integer: {}", v)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDE: &[u8] = br#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
<p:graphicFrame><a:graphic><a:graphicData><a:tbl>
<a:tblPr firstRow="1" bandRow="1"/>
<a:tblGrid><a:gridCol w="2560320"/><a:gridCol w="8686800"/></a:tblGrid>
<a:tr h="365760">
  <a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:rPr sz="1300" b="1"/><a:t>Parameter</a:t></a:r></a:p></a:txBody>
    <a:tcPr anchor="ctr"><a:solidFill><a:srgbClr val="1B3A5C"/></a:solidFill></a:tcPr></a:tc>
  <a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:t>Details</a:t></a:r></a:p></a:txBody><a:tcPr anchor="ctr"/></a:tc>
</a:tr>
<a:tr h="365760">
  <a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:t>Y-mAbs &amp; SERB</a:t></a:r></a:p></a:txBody><a:tcPr/></a:tc>
  <a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:t>Orphan Drug,</a:t></a:r></a:p><a:p><a:r><a:t> Rare Pediatric</a:t></a:r><a:br><a:rPr lang="en-US"/></a:br><a:r><a:t>Disease</a:t></a:r></a:p></a:txBody><a:tcPr/></a:tc>
</a:tr>
</a:tbl></a:graphicData></a:graphic></p:graphicFrame>
</p:spTree></p:cSld></p:sld>"#;

    #[test]
    fn test_parse_grid() {
        let tables = Table::all_from_slide_xml(SLIDE).unwrap();
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_widths(), &[2_560_320, 8_686_800]);
        assert_eq!(table.rows()[0].height(), 365_760);
        assert_eq!(table.rows()[1].cell_count(), 2);
    }

    #[test]
    fn test_cell_text_and_properties() {
        let tables = Table::all_from_slide_xml(SLIDE).unwrap();
        let table = &tables[0];

        let header = table.cell(0, 0).unwrap();
        assert_eq!(header.text(), "Parameter");
        assert_eq!(header.fill(), Some(RGBColor::new(0x1B, 0x3A, 0x5C)));
        assert_eq!(header.anchor(), Some("ctr"));

        assert_eq!(table.cell(0, 1).unwrap().fill(), None);
        assert_eq!(table.cell(1, 0).unwrap().text(), "Y-mAbs & SERB");
        assert_eq!(
            table.cell(1, 1).unwrap().paragraphs(),
            &["Orphan Drug,".to_string(), " Rare Pediatric\nDisease".to_string()]
        );
        assert!(table.cell(2, 0).is_none());
    }

    #[test]
    fn test_no_tables() {
        let xml = br#"<p:sld><p:cSld><p:spTree/></p:cSld></p:sld>"#;
        assert!(Table::all_from_slide_xml(xml).unwrap().is_empty());
    }
}
