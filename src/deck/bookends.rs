//! Shared slides: the opening title, key scientists, and the closing slide.

use crate::common::inches;
use crate::deck::layout::{
    TextStyle, add_background, add_table, add_text_box, rect, section_title_bar,
};
use crate::deck::palette::{DANYELZA, ICE_BLUE, NIGHT_NAVY, SCIENTISTS_BAR, UNITUXIN, WHITE};
use crate::ooxml::Result;
use crate::ooxml::pptx::MutableSlide;

pub(crate) const DANYELZA_SCIENTISTS: &[&[&str]] = &[
    &["Scientist", "Institution", "Role"],
    &[
        "Dr. Nai-Kong Cheung",
        "Memorial Sloan Kettering",
        "Developed 3F8 & hu3F8 (naxitamab);\n30+ years of anti-GD2 research",
    ],
];

pub(crate) const UNITUXIN_SCIENTISTS: &[&[&str]] = &[
    &["Scientist", "Institution", "Role"],
    &["Dr. Ralph Reisfeld", "Scripps Research Institute", "Developed original murine 14.18 antibody"],
    &[
        "Dr. Alice Yu",
        "UCSD / Rady Children's",
        "Central clinical investigator;\nled pivotal ANBL0032 Phase III trial (NEJM 2010)",
    ],
    &["Dr. Katherine Matthay", "UCSF Benioff Children's", "Senior COG neuroblastoma investigator"],
    &["Dr. John Maris", "CHOP / UPenn", "Leading neuroblastoma biologist"],
    &["Dr. Stephen Gillies", "—", "Antibody-cytokine fusion proteins"],
    &["NCI CTEP Officers", "NCI, Bethesda, MD", "Managed IND and clinical development"],
];

const SCIENTIST_COLUMNS: [f64; 3] = [2.8, 3.5, 6.0];

/// Slide 1.
pub(crate) fn title_slide(slide: &mut MutableSlide) {
    add_background(slide, NIGHT_NAVY);
    rect(
        slide,
        inches(2.0),
        inches(2.0),
        inches(9.333),
        inches(0.05),
        DANYELZA.accent,
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(2.3),
        inches(11.333),
        inches(1.5),
        "Anti-GD2 Monoclonal Antibodies\nin Neuroblastoma",
        TextStyle::new(40.0, WHITE).bold().centered(),
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(4.2),
        inches(11.333),
        inches(0.6),
        "Company Profiles: Danyelza (Y-mAbs / SERB)  &  Unituxin (United Therapeutics)",
        TextStyle::new(20.0, ICE_BLUE).centered(),
    );
    rect(
        slide,
        inches(2.0),
        inches(5.1),
        inches(9.333),
        inches(0.05),
        DANYELZA.accent,
    );
}

/// Slide 14.
pub(crate) fn key_scientists(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(
        slide,
        "Key Scientists & Institutions",
        Some("The researchers behind anti-GD2 immunotherapy in neuroblastoma"),
        SCIENTISTS_BAR,
    );
    let col_widths = SCIENTIST_COLUMNS.map(inches);

    add_text_box(
        slide,
        inches(0.5),
        inches(1.5),
        inches(6.0),
        inches(0.4),
        "DANYELZA",
        TextStyle::new(18.0, DANYELZA.primary).bold(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(2.0),
        inches(12.3),
        DANYELZA_SCIENTISTS,
        &col_widths,
        DANYELZA.table(),
    )?;

    add_text_box(
        slide,
        inches(0.5),
        inches(3.3),
        inches(6.0),
        inches(0.4),
        "UNITUXIN",
        TextStyle::new(18.0, UNITUXIN.primary).bold(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(3.8),
        inches(12.3),
        UNITUXIN_SCIENTISTS,
        &col_widths,
        UNITUXIN.table(),
    )?;
    Ok(())
}

/// Slide 15.
pub(crate) fn closing_slide(slide: &mut MutableSlide) {
    add_background(slide, NIGHT_NAVY);
    rect(
        slide,
        inches(2.0),
        inches(2.8),
        inches(9.333),
        inches(0.05),
        DANYELZA.accent,
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(3.1),
        inches(11.333),
        inches(1.0),
        "Thank You",
        TextStyle::new(44.0, WHITE).bold().centered(),
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(4.3),
        inches(11.333),
        inches(0.8),
        "Anti-GD2 Monoclonal Antibodies in Neuroblastoma\nDanyelza (Y-mAbs / SERB)  &  Unituxin (United Therapeutics)",
        TextStyle::new(18.0, ICE_BLUE).centered(),
    );
    rect(
        slide,
        inches(2.0),
        inches(5.4),
        inches(9.333),
        inches(0.05),
        DANYELZA.accent,
    );
}
