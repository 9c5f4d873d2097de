//! Part 1: Danyelza (naxitamab) and Y-mAbs Therapeutics, slides 2 to 7.

use crate::common::inches;
use crate::deck::layout::{
    BulletStyle, TextStyle, add_background, add_bullets, add_table, add_text_box, rect,
    section_title_bar,
};
use crate::deck::palette::{DANYELZA, DARK_GRAY, MED_GRAY, WHITE};
use crate::ooxml::Result;
use crate::ooxml::pptx::{MutablePresentation, MutableSlide};

pub(crate) const OVERVIEW: &[&[&str]] = &[
    &["Parameter", "Details"],
    &["Generic Name", "Naxitamab-gqgk"],
    &["Brand Name", "Danyelza"],
    &["Type", "Humanized anti-GD2 monoclonal antibody (hu3F8)"],
    &["Target", "GD2 (disialoganglioside)"],
    &["Indication", "Relapsed/refractory high-risk neuroblastoma (in combination with GM-CSF)"],
    &["FDA Approval", "November 25, 2020 (accelerated approval)"],
    &["Original Developer", "Memorial Sloan Kettering Cancer Center (Dr. Nai-Kong Cheung)"],
    &["Commercializer", "Y-mAbs Therapeutics (2015–2025) → SERB Pharmaceuticals (acquired Sept 2025)"],
    &["Developed In-House?", "NO — Academic (MSK) developed, licensed to Y-mAbs"],
    &[
        "FDA Designations",
        "Accelerated Approval, Breakthrough Therapy, Priority Review,\nOrphan Drug, Rare Pediatric Disease, PRV (sold)",
    ],
];

pub(crate) const HISTORY: &[&[&str]] = &[
    &["Period", "Milestone"],
    &["1980s", "Dr. Nai-Kong Cheung develops murine anti-GD2 antibody 3F8 at MSK"],
    &["Mid-1980s", "Clinical trials of 3F8 begin at MSK"],
    &["1990s–2000s", "Extensive clinical experience with 3F8 in hundreds of neuroblastoma patients"],
    &["2000s–2010s", "Development of humanized version hu3F8 (naxitamab) to reduce immunogenicity"],
    &["2015", "Y-mAbs Therapeutics founded to commercialize MSK anti-GD2 portfolio"],
    &["Sept 2018", "Y-mAbs IPO on Nasdaq (~$86M raised at ~$14/share)"],
    &["Nov 25, 2020", "FDA accelerated approval of Danyelza"],
    &["Aug 2025", "SERB Pharmaceuticals agrees to acquire Y-mAbs"],
    &["Sept 16, 2025", "SERB acquisition closes; Y-mAbs delisted from Nasdaq"],
];

const HISTORY_NOTES: &[&str] = &[
    "Pivotal Study 201 (hu3F8 + GM-CSF) conducted at MSK — demonstrated efficacy in relapsed/refractory patients",
    "3F8 (murine, never commercially approved) → hu3F8 (humanized, lower immunogenicity, more durable treatment)",
];

pub(crate) const COMPANY: &[&[&str]] = &[
    &["Parameter", "Details"],
    &["Founded", "2015 by Thomas Gad (Danish entrepreneur)"],
    &["Incorporated", "Delaware, USA"],
    &["Purpose", "Created specifically to commercialize Dr. Cheung's MSK anti-GD2 portfolio"],
    &["IPO", "September 28, 2018 — Nasdaq (YMAB), ~$14/share, ~$86M raised"],
    &["Stage at IPO", "Clinical-stage, pre-revenue, no approved products"],
    &["Manufacturing", "Via contract manufacturing organizations (CMOs)"],
    &["Key Assets", "Naxitamab (Danyelza), Omburtamab (8H9, anti-B7-H3), murine 3F8"],
    &["Value Proposition", "MSK-licensed assets + Dr. Cheung's 30+ year clinical track record"],
];

const COMPANY_NOTES: &[&str] = &[
    "Classic academic spinout / biotech startup — pre-revenue, cash-burning, small team",
    "Entire company built around Danyelza as the core commercial asset",
    "License from MSK: exclusive worldwide rights to naxitamab, 3F8, and omburtamab",
    "IP: patents covering humanized 3F8 (composition of matter, methods of use); Dr. Cheung as inventor",
];

pub(crate) const REVENUE: &[&[&str]] = &[
    &["Year", "Net Revenue", "YoY Growth", "Notes"],
    &["2021", "$34.9M", "—", "Launch year (product: $32.9M + licensing: $2.0M)"],
    &["2022", "~$49.3M", "+41%", "Record Q4 at $16.4M (+31% sequential)"],
    &["2023", "$84.3M", "+71%", "Record year; strong international expansion"],
    &["2024", "$87.7M", "+4%", "International revenue $19.2M (+16% YoY)"],
    &["Q1 2025", "$20.9M", "+8% YoY", "—"],
    &["Q2 2025", "$19.5M", "Above guidance", "Exceeded $17–19M guidance range"],
];

const REVENUE_NOTES: &[&str] = &[
    "Revenue grew from ~$35M to ~$88M in 3 years (2021–2024)",
    "International expansion is a key growth driver (~$19.2M in 2024, +16% YoY)",
    "H1 2025 revenue: $40.4M — on track for continued growth under SERB ownership",
];

pub(crate) const VALUATION: &[&[&str]] = &[
    &["Period", "Price Range", "Market Cap", "Event"],
    &["IPO (Sept 2018)", "~$14/share", "~$400–500M", "Clinical-stage launch on Nasdaq"],
    &["2019–2020", "Rising", "Growing", "Positive clinical data, BLA filing"],
    &["Peak (~2020)", "~$40–55+/share", "~$1.5–2.0B", "FDA approval euphoria"],
    &[
        "2021–2023",
        "$3–10/share",
        "$100–400M",
        "Commercial disappointment, omburtamab CRL,\nbiotech downturn",
    ],
    &["52-wk range (2024–25)", "$3.55–$16.11", "—", "Volatile trading"],
    &["Acquisition (Aug 2025)", "$8.60/share", "~$412M", "SERB buyout at 105% premium"],
];

const VALUATION_NOTES: &[&str] = &[
    "SERB acquisition: $8.60/share cash (~$412M total), 105% premium over pre-announcement price",
    "~16% of stockholders entered tender and support agreement",
    "Y-mAbs now operates as subsidiary of SERB S.A.S.; delisted from Nasdaq Sept 16, 2025",
    "Classic biotech boom-and-bust: peak ~$2B market cap → acquired at ~$412M",
];

/// Append the six Danyelza slides.
pub(crate) fn add_slides(pres: &mut MutablePresentation) -> Result<()> {
    section_cover(pres.add_slide());
    overview(pres.add_slide())?;
    development_history(pres.add_slide())?;
    company_profile(pres.add_slide())?;
    revenue(pres.add_slide())?;
    valuation(pres.add_slide())?;
    Ok(())
}

fn section_cover(slide: &mut MutableSlide) {
    add_background(slide, DANYELZA.primary);
    rect(
        slide,
        inches(0.8),
        inches(2.8),
        inches(11.733),
        inches(0.05),
        DANYELZA.accent_line,
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(3.1),
        inches(11.333),
        inches(1.0),
        "DANYELZA (Naxitamab-gqgk)",
        TextStyle::new(44.0, WHITE).bold().centered(),
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(4.3),
        inches(11.333),
        inches(0.5),
        "Y-mAbs Therapeutics  /  SERB Pharmaceuticals",
        TextStyle::new(22.0, DANYELZA.subtitle).centered(),
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(5.0),
        inches(11.333),
        inches(0.5),
        "Humanized anti-GD2 monoclonal antibody (hu3F8) for relapsed/refractory high-risk neuroblastoma",
        TextStyle::new(15.0, DANYELZA.cover_tagline).centered(),
    );
    rect(
        slide,
        inches(0.8),
        inches(5.6),
        inches(11.733),
        inches(0.05),
        DANYELZA.accent_line,
    );
}

fn overview(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(slide, "DANYELZA  |  Overview", None, DANYELZA.title_bar());
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        OVERVIEW,
        &[inches(2.8), inches(9.5)],
        DANYELZA.table(),
    )?;
    Ok(())
}

fn development_history(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(
        slide,
        "DANYELZA  |  Development History",
        Some("30+ years of translational research at Memorial Sloan Kettering"),
        DANYELZA.title_bar(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        HISTORY,
        &[inches(2.0), inches(10.3)],
        DANYELZA.table(),
    )?;
    add_bullets(
        slide,
        inches(0.5),
        inches(6.0),
        inches(12.0),
        inches(1.2),
        HISTORY_NOTES,
        BulletStyle::new(13.0, MED_GRAY),
    );
    Ok(())
}

fn company_profile(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(
        slide,
        "DANYELZA  |  Y-mAbs Therapeutics — Company Profile",
        Some("The commercializing company before SERB acquisition"),
        DANYELZA.title_bar(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        COMPANY,
        &[inches(2.8), inches(9.5)],
        DANYELZA.table(),
    )?;
    add_bullets(
        slide,
        inches(0.5),
        inches(5.5),
        inches(12.0),
        inches(1.5),
        COMPANY_NOTES,
        BulletStyle::new(13.0, MED_GRAY),
    );
    Ok(())
}

fn revenue(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(
        slide,
        "DANYELZA  |  Revenue & Commercial Performance",
        Some("Strong growth trajectory since 2021 launch"),
        DANYELZA.title_bar(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        REVENUE,
        &[inches(1.5), inches(2.0), inches(2.0), inches(6.8)],
        DANYELZA.table(),
    )?;
    add_bullets(
        slide,
        inches(0.5),
        inches(5.2),
        inches(12.0),
        inches(2.0),
        REVENUE_NOTES,
        BulletStyle::new(14.0, DARK_GRAY),
    );
    Ok(())
}

fn valuation(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(
        slide,
        "DANYELZA  |  Valuation & SERB Acquisition",
        Some("From IPO to acquisition — the Y-mAbs trajectory"),
        DANYELZA.title_bar(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        VALUATION,
        &[inches(2.5), inches(2.2), inches(2.2), inches(5.4)],
        DANYELZA.table(),
    )?;
    add_bullets(
        slide,
        inches(0.5),
        inches(5.3),
        inches(12.0),
        inches(2.0),
        VALUATION_NOTES,
        BulletStyle::new(14.0, DARK_GRAY),
    );
    Ok(())
}
