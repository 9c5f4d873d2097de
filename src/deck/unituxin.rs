//! Part 2: Unituxin (dinutuximab) and United Therapeutics, slides 8 to 13.

use crate::common::inches;
use crate::deck::layout::{
    BulletStyle, TextStyle, add_background, add_bullets, add_table, add_text_box, rect,
    section_title_bar,
};
use crate::deck::palette::{DARK_GRAY, MED_GRAY, UNITUXIN, WHITE};
use crate::ooxml::Result;
use crate::ooxml::pptx::{MutablePresentation, MutableSlide};

pub(crate) const OVERVIEW: &[&[&str]] = &[
    &["Parameter", "Details"],
    &["Generic Name", "Dinutuximab"],
    &["Brand Name", "Unituxin"],
    &["Type", "Chimeric anti-GD2 monoclonal antibody (ch14.18)"],
    &["Target", "GD2 (disialoganglioside)"],
    &["Indication", "High-risk neuroblastoma (pediatric, frontline post-consolidation)"],
    &["Combination", "GM-CSF + IL-2 + isotretinoin"],
    &["FDA Approval", "March 10, 2015"],
    &["Current Owner", "United Therapeutics (U.S.); Recordati/EUSA Pharma (EU — Qarziba)"],
    &["Developed In-House?", "NO — Government/academic (NCI, COG, Scripps, UCSD)"],
    &[
        "FDA Designations",
        "Priority Review, Breakthrough Therapy, Orphan Drug,\nRare Pediatric Disease, PRV ($67–350M historical value)",
    ],
];

pub(crate) const HISTORY: &[&[&str]] = &[
    &["Period", "Milestone"],
    &["1980s", "Dr. Ralph Reisfeld develops murine anti-GD2 antibody 14.18 at Scripps Research Institute"],
    &["Late 1980s–90s", "Chimeric ch14.18 engineered; Dr. Alice Yu (UCSD) advances clinical development"],
    &["2000s", "NCI funds research, manufactures antibody via Biologics Resources Branch, sponsors IND via CTEP"],
    &["2006–2010", "Pivotal ANBL0032 Phase III trial by COG across 200+ children's hospitals"],
    &["2010", "Yu et al. publish landmark results in NEJM — significant OS/EFS improvement"],
    &["March 10, 2015", "FDA approves dinutuximab as Unituxin"],
    &["2017", "United Therapeutics withdraws Unituxin from EU market (manufacturing difficulties)"],
];

const HISTORY_NOTES: &[&str] = &[
    "Pivotal ANBL0032: ch14.18 + GM-CSF + IL-2 + isotretinoin vs. isotretinoin alone — significant OS/EFS benefit",
    "Rare example of a drug developed almost entirely through government and academic effort, then licensed to a private company",
    "EU gap filled by Qarziba (dinutuximab beta) — Apeiron → EUSA Pharma → Recordati ($845M acquisition, 2021)",
];

pub(crate) const COMPANY: &[&[&str]] = &[
    &["Parameter", "Details"],
    &["Founded", "1996 by Martine Rothblatt"],
    &["Motivation", "Daughter diagnosed with pulmonary arterial hypertension (PAH)"],
    &["Core Business", "PAH treatments (Remodulin, Tyvaso, Orenitram, Adcirca)"],
    &["Annual Revenue (~2015)", "~$1.4–1.6 billion"],
    &["Market Cap (~2015)", "~$6–8 billion"],
    &["Financial Health", "Solidly profitable, strong cash reserves, no debt concerns"],
    &["Pipeline", "Xenotransplantation (genetically modified pig organs)"],
    &["Current Market Cap (2025)", "~$14+ billion (driven by Tyvaso + xenotransplantation)"],
];

const COMPANY_NOTES: &[&str] = &[
    "Unituxin was a small, complementary diversification into oncology — NOT a transformational asset",
    "Commercial rights obtained from NCI under a CRADA (Cooperative Research & Development Agreement)",
    "Government-to-private technology transfer — not a traditional M&A deal",
    "NCI license terms: upfront fees, milestone payments, royalties on net sales back to NIH/NCI",
];

pub(crate) const REVENUE: &[&[&str]] = &[
    &["Year", "Estimated Revenue", "Notes"],
    &["2015", "~$12–20M", "Partial year (approved March)"],
    &["2016", "~$30–40M", "Early commercial ramp"],
    &["2017", "~$50–60M", "+$13.5M YoY growth; approaching peak range"],
    &["2018", "~$50–60M", "Stable; peak annual level"],
    &["2024", "Still marketed", "Revenue growth from price increases"],
];

const REVENUE_NOTES: &[&str] = &[
    "Launch price: ~$175,000 per course of treatment",
    "Addressable population: ~700–800 new high-risk neuroblastoma patients/year in U.S., only a subset eligible",
    "Peak annual U.S. sales: ~$50–60M — small by pharma standards but significant for neuroblastoma community",
    "Competition from Danyelza (approved 2020) created additional commercial pressure",
    "PRV voucher (historically valued at $67–350M) potentially had more standalone financial value than Unituxin sales",
];

const VALUATION_NOTES: &[&str] = &[
    "Stock traded ~$160–180/share around FDA approval (March 2015) — no dramatic movement attributable to Unituxin",
    "Market had largely priced in the approval given strong Phase III clinical data and orphan drug status",
    "PAH franchise (Remodulin, Tyvaso, Orenitram) was always the dominant value driver",
    "PRV voucher potentially had more standalone financial value than Unituxin's sales projections",
    "Unituxin never became a material valuation driver for United Therapeutics",
    "Current state (2025): UTHR market cap ~$14+ billion — driven by Tyvaso growth and xenotransplantation pipeline",
    "Unituxin remains a minor, steady contributor to overall revenue",
];

const EU_NOTES: &[&str] = &[
    "Unituxin withdrawn from EU in 2017 due to manufacturing difficulties",
    "Gap filled by Qarziba (dinutuximab beta) — Recordati via EUSA Pharma acquisition ($845M, 2021)",
    "Recordati targets peak Qarziba sales at €300–350M",
];

/// Append the six Unituxin slides.
pub(crate) fn add_slides(pres: &mut MutablePresentation) -> Result<()> {
    section_cover(pres.add_slide());
    overview(pres.add_slide())?;
    development_history(pres.add_slide())?;
    company_profile(pres.add_slide())?;
    revenue(pres.add_slide())?;
    valuation_impact(pres.add_slide());
    Ok(())
}

fn section_cover(slide: &mut MutableSlide) {
    add_background(slide, UNITUXIN.primary);
    rect(
        slide,
        inches(0.8),
        inches(2.8),
        inches(11.733),
        inches(0.05),
        UNITUXIN.accent_line,
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(3.1),
        inches(11.333),
        inches(1.0),
        "UNITUXIN (Dinutuximab)",
        TextStyle::new(44.0, WHITE).bold().centered(),
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(4.3),
        inches(11.333),
        inches(0.5),
        "United Therapeutics Corporation",
        TextStyle::new(22.0, UNITUXIN.subtitle).centered(),
    );
    add_text_box(
        slide,
        inches(1.0),
        inches(5.0),
        inches(11.333),
        inches(0.5),
        "Chimeric anti-GD2 monoclonal antibody (ch14.18) for high-risk neuroblastoma",
        TextStyle::new(15.0, UNITUXIN.cover_tagline).centered(),
    );
    rect(
        slide,
        inches(0.8),
        inches(5.6),
        inches(11.733),
        inches(0.05),
        UNITUXIN.accent_line,
    );
}

fn overview(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(slide, "UNITUXIN  |  Overview", None, UNITUXIN.title_bar());
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        OVERVIEW,
        &[inches(2.8), inches(9.5)],
        UNITUXIN.table(),
    )?;
    Ok(())
}

fn development_history(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(
        slide,
        "UNITUXIN  |  Development History",
        Some("Government & academic-driven development through NCI and COG"),
        UNITUXIN.title_bar(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        HISTORY,
        &[inches(2.0), inches(10.3)],
        UNITUXIN.table(),
    )?;
    add_bullets(
        slide,
        inches(0.5),
        inches(5.7),
        inches(12.0),
        inches(1.5),
        HISTORY_NOTES,
        BulletStyle::new(13.0, MED_GRAY),
    );
    Ok(())
}

fn company_profile(slide: &mut MutableSlide) -> Result<()> {
    section_title_bar(
        slide,
        "UNITUXIN  |  United Therapeutics — Company Profile",
        Some("The commercializing company — an established PAH leader"),
        UNITUXIN.title_bar(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        COMPANY,
        &[inches(3.0), inches(9.3)],
        UNITUXIN.table(),
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
        "UNITUXIN  |  Revenue & Commercial Performance",
        Some("Small orphan product in a niche market"),
        UNITUXIN.title_bar(),
    );
    add_table(
        slide,
        inches(0.5),
        inches(1.5),
        inches(12.3),
        REVENUE,
        &[inches(1.8), inches(2.5), inches(8.0)],
        UNITUXIN.table(),
    )?;
    add_bullets(
        slide,
        inches(0.5),
        inches(4.5),
        inches(12.0),
        inches(2.5),
        REVENUE_NOTES,
        BulletStyle::new(14.0, DARK_GRAY),
    );
    Ok(())
}

/// Bullet lists only, no table.
fn valuation_impact(slide: &mut MutableSlide) {
    section_title_bar(
        slide,
        "UNITUXIN  |  Valuation Impact on United Therapeutics",
        Some("Modest impact on an established, profitable company"),
        UNITUXIN.title_bar(),
    );
    add_bullets(
        slide,
        inches(0.5),
        inches(1.6),
        inches(12.0),
        inches(5.5),
        VALUATION_NOTES,
        BulletStyle::new(16.0, DARK_GRAY).spacing(14.0),
    );
    add_text_box(
        slide,
        inches(0.5),
        inches(5.0),
        inches(12.0),
        inches(0.4),
        "EU Market",
        TextStyle::new(18.0, UNITUXIN.primary).bold(),
    );
    add_bullets(
        slide,
        inches(0.5),
        inches(5.4),
        inches(12.0),
        inches(1.8),
        EU_NOTES,
        BulletStyle::new(14.0, MED_GRAY),
    );
}
