//! The anti-GD2 neuroblastoma company-profile deck.
//!
//! Fifteen slides in fixed order: a title slide, six Danyelza / Y-mAbs
//! slides, six Unituxin / United Therapeutics slides, the key scientists,
//! and a closing slide. All content is literal.
//!
//! # Example
//!
//! ```rust,no_run
//! let pres = slidewright::deck::build_deck()?;
//! pres.save("Danyelza_vs_Unituxin_Analysis.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bookends;
mod danyelza;
pub mod layout;
pub mod palette;
mod unituxin;

use crate::ooxml::Result;
use crate::ooxml::pptx::MutablePresentation;
use tracing::debug;

/// Where the deck is written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str =
    "/Users/dvn/Desktop/WWWWW/mbr/comp analis/Danyelza_vs_Unituxin_Analysis.pptx";

pub const SLIDE_COUNT: usize = 15;

/// Core-properties title of the generated file.
pub const DECK_TITLE: &str = "Anti-GD2 Monoclonal Antibodies in Neuroblastoma";

/// Build the full deck in memory.
pub fn build_deck() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(layout::slide_width());
    pres.set_slide_height(layout::slide_height());
    pres.set_title(DECK_TITLE);

    bookends::title_slide(pres.add_slide());
    danyelza::add_slides(&mut pres)?;
    unituxin::add_slides(&mut pres)?;
    bookends::key_scientists(pres.add_slide())?;
    bookends::closing_slide(pres.add_slide());

    debug!(slides = pres.slide_count(), "deck built");
    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{RGBColor, inches};
    use crate::deck::palette::{DANYELZA, NIGHT_NAVY, UNITUXIN, WHITE};
    use crate::ooxml::pptx::Package;

    fn table_rows(pres: &MutablePresentation, slide: usize) -> Vec<usize> {
        pres.slides()[slide]
            .shapes()
            .iter()
            .filter_map(|shape| shape.table())
            .map(|table| table.row_count())
            .collect()
    }

    #[test]
    fn test_deck_has_fifteen_slides() {
        let pres = build_deck().unwrap();
        assert_eq!(pres.slide_count(), SLIDE_COUNT);
        assert_eq!(pres.slide_width(), inches(13.333));
        assert_eq!(pres.slide_height(), inches(7.5));
    }

    #[test]
    fn test_table_row_counts_match_literals() {
        let pres = build_deck().unwrap();

        assert_eq!(table_rows(&pres, 2), vec![danyelza::OVERVIEW.len()]);
        assert_eq!(table_rows(&pres, 3), vec![danyelza::HISTORY.len()]);
        assert_eq!(table_rows(&pres, 4), vec![danyelza::COMPANY.len()]);
        assert_eq!(table_rows(&pres, 5), vec![danyelza::REVENUE.len()]);
        assert_eq!(table_rows(&pres, 6), vec![danyelza::VALUATION.len()]);
        assert_eq!(table_rows(&pres, 8), vec![unituxin::OVERVIEW.len()]);
        assert_eq!(table_rows(&pres, 9), vec![unituxin::HISTORY.len()]);
        assert_eq!(table_rows(&pres, 10), vec![unituxin::COMPANY.len()]);
        assert_eq!(table_rows(&pres, 11), vec![unituxin::REVENUE.len()]);
        assert_eq!(
            table_rows(&pres, 13),
            vec![
                bookends::DANYELZA_SCIENTISTS.len(),
                bookends::UNITUXIN_SCIENTISTS.len()
            ]
        );

        for slide in [0, 1, 7, 12, 14] {
            assert!(table_rows(&pres, slide).is_empty());
        }
    }

    #[test]
    fn test_literal_table_shapes() {
        let dims = |rows: &[&[&str]]| (rows.len(), rows[0].len());
        assert_eq!(dims(danyelza::OVERVIEW), (11, 2));
        assert_eq!(dims(danyelza::HISTORY), (10, 2));
        assert_eq!(dims(danyelza::COMPANY), (9, 2));
        assert_eq!(dims(danyelza::REVENUE), (7, 4));
        assert_eq!(dims(danyelza::VALUATION), (7, 4));
        assert_eq!(dims(unituxin::OVERVIEW), (11, 2));
        assert_eq!(dims(unituxin::HISTORY), (8, 2));
        assert_eq!(dims(unituxin::COMPANY), (9, 2));
        assert_eq!(dims(unituxin::REVENUE), (6, 3));
        assert_eq!(dims(bookends::DANYELZA_SCIENTISTS), (2, 3));
        assert_eq!(dims(bookends::UNITUXIN_SCIENTISTS), (7, 3));
    }

    #[test]
    fn test_backgrounds() {
        let pres = build_deck().unwrap();
        let background = |i: usize| pres.slides()[i].background().map(|bg| bg.color());

        assert_eq!(background(0), Some(NIGHT_NAVY));
        assert_eq!(background(1), Some(DANYELZA.primary));
        assert_eq!(background(7), Some(UNITUXIN.primary));
        assert_eq!(background(14), Some(NIGHT_NAVY));
        for i in (2..7).chain(8..14) {
            assert_eq!(background(i), Some(WHITE));
        }
    }

    #[test]
    fn test_saved_deck_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Danyelza_vs_Unituxin_Analysis.pptx");
        build_deck().unwrap().save(&path).unwrap();

        let pkg = Package::open(&path).unwrap();
        let pres = pkg.presentation().unwrap();
        assert_eq!(pres.slide_count().unwrap(), SLIDE_COUNT);
        assert_eq!(
            pres.slide_size().unwrap(),
            Some((inches(13.333), inches(7.5)))
        );

        let slides = pres.slides().unwrap();
        for slide in &slides {
            assert_eq!(slide.layout_name().unwrap().as_deref(), Some("Blank"));
        }
        assert_eq!(
            slides[0].background_color().unwrap(),
            Some(RGBColor::new(0x0F, 0x1F, 0x33))
        );
        assert_eq!(
            slides[0].text_boxes().unwrap()[0],
            "Anti-GD2 Monoclonal Antibodies\nin Neuroblastoma"
        );

        let tables = slides[2].tables().unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].row_count(), 11);
        assert_eq!(tables[0].column_count(), 2);
        assert_eq!(
            tables[0].cell(10, 1).unwrap().text(),
            "Accelerated Approval, Breakthrough Therapy, Priority Review,\nOrphan Drug, Rare Pediatric Disease, PRV (sold)"
        );
        assert_eq!(
            tables[0].column_widths(),
            &[inches(2.8), inches(9.5)]
        );

        let scientists = slides[13].tables().unwrap();
        assert_eq!(
            scientists.iter().map(|t| t.row_count()).collect::<Vec<_>>(),
            vec![2, 7]
        );
        assert_eq!(scientists[1].cell(5, 1).unwrap().text(), "—");
    }

    /// The end-of-central-directory record must describe a ZIP that starts
    /// at byte 0 and ends exactly at the end of the file.
    fn assert_single_archive(bytes: &[u8]) {
        assert!(bytes.starts_with(b"PK\x03\x04"));
        let eocd = &bytes[bytes.len() - 22..];
        assert_eq!(&eocd[..4], b"PK\x05\x06");
        let cd_size = u32::from_le_bytes(eocd[12..16].try_into().unwrap()) as usize;
        let cd_offset = u32::from_le_bytes(eocd[16..20].try_into().unwrap()) as usize;
        assert_eq!(cd_offset + cd_size + 22, bytes.len());
    }

    #[test]
    fn test_saving_twice_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let deck_len = build_deck().unwrap().to_bytes().unwrap().len();
        let stale = vec![0u8; 2 * deck_len];
        std::fs::write(&path, &stale).unwrap();

        for _ in 0..2 {
            build_deck().unwrap().save(&path).unwrap();
            let bytes = std::fs::read(&path).unwrap();
            assert!(bytes.len() < stale.len());
            assert_single_archive(&bytes);
        }

        let pkg = Package::open(&path).unwrap();
        assert_eq!(pkg.presentation().unwrap().slide_count().unwrap(), SLIDE_COUNT);
    }
}
