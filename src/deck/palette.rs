//! Brand colors for the two company sections and the shared slides.

use crate::common::RGBColor;

pub const WHITE: RGBColor = RGBColor::WHITE;
pub const DARK_GRAY: RGBColor = RGBColor::new(0x33, 0x33, 0x33);
pub const MED_GRAY: RGBColor = RGBColor::new(0x66, 0x66, 0x66);

/// Background of the opening and closing slides.
pub const NIGHT_NAVY: RGBColor = RGBColor::new(0x0F, 0x1F, 0x33);
/// Subtitle text on the opening and closing slides.
pub const ICE_BLUE: RGBColor = RGBColor::new(0xAA, 0xCC, 0xEE);

/// Colors of one company section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: RGBColor,
    pub accent: RGBColor,
    /// Thin rules on the section cover
    pub accent_line: RGBColor,
    pub table_header: RGBColor,
    pub table_alt: RGBColor,
    pub subtitle: RGBColor,
    /// Tagline on the section cover
    pub cover_tagline: RGBColor,
}

impl Palette {
    #[inline]
    pub const fn title_bar(&self) -> TitleBarColors {
        TitleBarColors {
            primary: self.primary,
            accent: self.accent,
            subtitle: self.subtitle,
        }
    }

    #[inline]
    pub const fn table(&self) -> TableColors {
        TableColors {
            header: self.table_header,
            alt: self.table_alt,
        }
    }
}

/// Danyelza / Y-mAbs: navy and bright blue.
pub const DANYELZA: Palette = Palette {
    primary: RGBColor::new(0x1B, 0x3A, 0x5C),
    accent: RGBColor::new(0x3A, 0x8F, 0xD6),
    accent_line: RGBColor::new(0x5B, 0xB5, 0xF0),
    table_header: RGBColor::new(0x1B, 0x3A, 0x5C),
    table_alt: RGBColor::new(0xE3, 0xEE, 0xF8),
    subtitle: RGBColor::new(0xA0, 0xC4, 0xE8),
    cover_tagline: RGBColor::new(0x88, 0xAA, 0xCC),
};

/// Unituxin / United Therapeutics: teal-green and sage.
pub const UNITUXIN: Palette = Palette {
    primary: RGBColor::new(0x2B, 0x4C, 0x3F),
    accent: RGBColor::new(0x4A, 0x8C, 0x72),
    accent_line: RGBColor::new(0x6B, 0xB3, 0x95),
    table_header: RGBColor::new(0x2B, 0x4C, 0x3F),
    table_alt: RGBColor::new(0xE8, 0xF2, 0xED),
    subtitle: RGBColor::new(0xA3, 0xCC, 0xB8),
    cover_tagline: RGBColor::new(0x99, 0xBB, 0xAA),
};

/// Neutral slate bar for the key-scientists slide.
pub const SCIENTISTS_BAR: TitleBarColors = TitleBarColors {
    primary: RGBColor::new(0x2A, 0x2A, 0x3A),
    accent: RGBColor::new(0x88, 0x88, 0xAA),
    subtitle: RGBColor::new(0xAA, 0xAA, 0xCC),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBarColors {
    pub primary: RGBColor,
    pub accent: RGBColor,
    pub subtitle: RGBColor,
}

/// Header fill and the fill of even-indexed body rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableColors {
    pub header: RGBColor,
    pub alt: RGBColor,
}
