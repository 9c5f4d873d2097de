//! Drawing helpers shared by every slide of the deck.
//!
//! Each helper adds one shape and hands back the shape so callers can tweak
//! it further. Positions and sizes are EMU.

use crate::common::{RGBColor, inches};
use crate::deck::palette::{DARK_GRAY, TableColors, TitleBarColors, WHITE};
use crate::ooxml::Result;
use crate::ooxml::pptx::{
    Alignment, MutableShape, MutableSlide, SlideBackground, TableData, VerticalAnchor,
};

/// Full slide width of the 16:9 deck.
pub fn slide_width() -> i64 {
    inches(13.333)
}

pub fn slide_height() -> i64 {
    inches(7.5)
}

/// Each table row is 0.4" tall.
const TABLE_ROW_HEIGHT_IN: f64 = 0.4;

const FONT_NAME: &str = "Calibri";

/// Run and paragraph formatting for a single-paragraph text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: RGBColor,
    pub bold: bool,
    pub alignment: Alignment,
    pub font_name: &'static str,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            color: DARK_GRAY,
            bold: false,
            alignment: Alignment::Left,
            font_name: FONT_NAME,
        }
    }
}

impl TextStyle {
    pub fn new(font_size: f64, color: RGBColor) -> Self {
        Self {
            font_size,
            color,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }
}

/// Formatting applied to every paragraph of a bullet list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletStyle {
    pub font_size: f64,
    pub color: RGBColor,
    /// Space after each paragraph, in points
    pub spacing: f64,
}

impl Default for BulletStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            color: DARK_GRAY,
            spacing: 8.0,
        }
    }
}

impl BulletStyle {
    pub fn new(font_size: f64, color: RGBColor) -> Self {
        Self {
            font_size,
            color,
            ..Self::default()
        }
    }

    pub fn spacing(mut self, points: f64) -> Self {
        self.spacing = points;
        self
    }
}

pub fn add_background(slide: &mut MutableSlide, color: RGBColor) {
    slide.set_background(SlideBackground::solid(color));
}

/// Filled rectangle without an outline.
pub fn rect(
    slide: &mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    color: RGBColor,
) -> &mut MutableShape {
    slide
        .add_rectangle(left, top, width, height)
        .fill(color)
        .no_line()
}

/// Word-wrapped text box with one paragraph; `\n` breaks the line.
pub fn add_text_box<'s>(
    slide: &'s mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    text: &str,
    style: TextStyle,
) -> &'s mut MutableShape {
    slide
        .add_text_box(text, left, top, width, height)
        .word_wrap(true)
        .font_size(style.font_size)
        .color(style.color)
        .bold(style.bold)
        .font(style.font_name)
        .alignment(style.alignment)
}

/// Word-wrapped text box with one paragraph per item.
pub fn add_bullets<'s>(
    slide: &'s mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    items: &[&str],
    style: BulletStyle,
) -> &'s mut MutableShape {
    slide
        .add_paragraphs(items, left, top, width, height)
        .word_wrap(true)
        .font_size(style.font_size)
        .color(style.color)
        .font(FONT_NAME)
        .space_after(style.spacing)
}

/// Table built from literal rows; row 0 is the header.
///
/// The grid is `rows.len()` by `rows[0].len()`. Column widths start as an
/// even split of `width` and are replaced by `col_widths` where given.
/// Fails on an empty grid, on extra column widths, and on ragged rows.
pub fn add_table<'s>(
    slide: &'s mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    rows: &[&[&str]],
    col_widths: &[i64],
    colors: TableColors,
) -> Result<&'s mut MutableShape> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |row| row.len());
    let height = inches(TABLE_ROW_HEIGHT_IN * n_rows as f64);

    let mut table = TableData::new(n_rows, n_cols, width, height)?;
    for (col, &col_width) in col_widths.iter().enumerate() {
        table.set_column_width(col, col_width)?;
    }

    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            let cell = table.cell_mut(r, c)?;
            cell.set_text(text);
            cell.set_vertical_anchor(VerticalAnchor::Middle);

            for para in cell.paragraphs_mut() {
                para.font.font = Some(FONT_NAME.to_string());
                if r == 0 {
                    para.font.size = Some(13.0);
                    para.font.bold = Some(true);
                    para.font.color = Some(WHITE);
                    para.format.alignment = Some(Alignment::Center);
                } else {
                    para.font.size = Some(12.0);
                    para.font.color = Some(DARK_GRAY);
                }
            }

            if r == 0 {
                cell.set_fill(colors.header);
            } else if r % 2 == 0 {
                cell.set_fill(colors.alt);
            }
        }
    }

    Ok(slide.add_table(table, left, top))
}

/// White slide with a full-width brand bar, title, optional subtitle and
/// an accent rule under the bar.
pub fn section_title_bar(
    slide: &mut MutableSlide,
    title: &str,
    subtitle: Option<&str>,
    colors: TitleBarColors,
) {
    add_background(slide, WHITE);
    rect(slide, 0, 0, slide_width(), inches(1.2), colors.primary);
    add_text_box(
        slide,
        inches(0.6),
        inches(0.15),
        inches(12.0),
        inches(0.7),
        title,
        TextStyle::new(28.0, WHITE).bold(),
    );
    if let Some(subtitle) = subtitle {
        add_text_box(
            slide,
            inches(0.6),
            inches(0.75),
            inches(12.0),
            inches(0.4),
            subtitle,
            TextStyle::new(14.0, colors.subtitle),
        );
    }
    rect(slide, 0, inches(1.2), slide_width(), inches(0.06), colors.accent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::palette::{DANYELZA, SCIENTISTS_BAR};
    use crate::ooxml::OoxmlError;
    use crate::ooxml::pptx::MutablePresentation;
    use crate::ooxml::pptx::writer::ShapeType;
    use proptest::prelude::*;

    #[test]
    fn test_text_box_defaults() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        let shape = add_text_box(slide, 0, 0, 10, 10, "EU Market", TextStyle::default());

        let frame = shape.text_frame().unwrap();
        assert!(frame.word_wrap);
        let p = &frame.paragraphs()[0];
        assert_eq!(p.font.size, Some(18.0));
        assert_eq!(p.font.color, Some(DARK_GRAY));
        assert_eq!(p.font.bold, Some(false));
        assert_eq!(p.font.font.as_deref(), Some("Calibri"));
        assert_eq!(p.format.alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_bullets_one_paragraph_per_item() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        let shape = add_bullets(
            slide,
            0,
            0,
            10,
            10,
            &["one", "two", "three"],
            BulletStyle::new(16.0, DARK_GRAY).spacing(14.0),
        );

        let paragraphs = shape.text_frame().unwrap().paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs.iter().all(|p| p.format.space_after == Some(14.0)));
        assert_eq!(paragraphs[2].text(), "three");
    }

    #[test]
    fn test_table_styling() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        let rows: &[&[&str]] = &[&["Year", "Revenue"], &["2021", "$34.9M"], &["2022", "~$49.3M"]];
        let shape = add_table(
            slide,
            inches(0.5),
            inches(1.5),
            inches(12.3),
            rows,
            &[inches(1.5)],
            DANYELZA.table(),
        )
        .unwrap();

        let (_, _, width, height) = shape.bounds();
        assert_eq!(height, inches(1.2));

        let table = shape.table().unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_widths()[0], inches(1.5));
        assert_eq!(table.column_widths()[1], inches(12.3) / 2);
        assert_eq!(width, inches(1.5) + inches(12.3) / 2);

        let header = table.cell(0, 0).unwrap();
        assert_eq!(header.fill(), Some(DANYELZA.table_header));
        assert_eq!(header.paragraphs()[0].font.bold, Some(true));
        assert_eq!(header.paragraphs()[0].font.size, Some(13.0));
        assert_eq!(table.cell(1, 0).unwrap().fill(), None);
        assert_eq!(table.cell(2, 1).unwrap().fill(), Some(DANYELZA.table_alt));
        assert_eq!(
            table.cell(2, 1).unwrap().vertical_anchor(),
            Some(VerticalAnchor::Middle)
        );
    }

    #[test]
    fn test_table_cell_lines_become_paragraphs() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        let rows: &[&[&str]] = &[&["Role"], &["Developed 3F8;\n30+ years"]];
        let shape = add_table(slide, 0, 0, inches(6.0), rows, &[], DANYELZA.table()).unwrap();

        let cell = shape.table().unwrap().cell(1, 0).unwrap();
        assert_eq!(cell.paragraphs().len(), 2);
        assert!(cell.paragraphs().iter().all(|p| p.font.size == Some(12.0)));
    }

    #[test]
    fn test_table_rejects_bad_input() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();

        assert!(add_table(slide, 0, 0, 100, &[], &[], DANYELZA.table()).is_err());

        let ragged: &[&[&str]] = &[&["a", "b"], &["c", "d", "e"]];
        assert!(matches!(
            add_table(slide, 0, 0, 100, ragged, &[], DANYELZA.table()),
            Err(OoxmlError::CellOutOfRange { .. })
        ));
    }

    #[test]
    fn test_section_title_bar_shapes() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        section_title_bar(slide, "Key Scientists", None, SCIENTISTS_BAR);
        assert_eq!(slide.shape_count(), 3);
        assert_eq!(slide.background().map(|bg| bg.color()), Some(WHITE));

        let slide = pres.add_slide();
        section_title_bar(slide, "Overview", Some("Subtitle"), DANYELZA.title_bar());
        assert_eq!(slide.shape_count(), 4);
        let (_, y, w, h) = slide.shapes()[3].bounds();
        assert_eq!((y, w, h), (inches(1.2), slide_width(), inches(0.06)));
        assert!(matches!(
            slide.shapes()[3].shape_type(),
            ShapeType::Rectangle { fill_color: Some(c), line: false } if *c == DANYELZA.accent
        ));
    }

    fn grid() -> impl Strategy<Value = Vec<Vec<String>>> {
        (1usize..6, 1usize..5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec("[a-zA-Z0-9 $~%]{0,12}", cols), rows)
        })
    }

    proptest! {
        #[test]
        fn prop_table_cells_match_grid(grid in grid()) {
            let rows: Vec<Vec<&str>> = grid
                .iter()
                .map(|row| row.iter().map(String::as_str).collect())
                .collect();
            let rows: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();

            let mut pres = MutablePresentation::new();
            let slide = pres.add_slide();
            let shape = add_table(slide, 0, 0, inches(12.3), &rows, &[], DANYELZA.table()).unwrap();
            let table = shape.table().unwrap();

            prop_assert_eq!(table.row_count(), grid.len());
            prop_assert_eq!(table.column_count(), grid[0].len());
            for (r, row) in grid.iter().enumerate() {
                for (c, text) in row.iter().enumerate() {
                    prop_assert_eq!(&table.cell(r, c).unwrap().text(), text);
                }
            }
        }
    }
}
