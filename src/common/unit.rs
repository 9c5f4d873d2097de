//! Unit conversion utilities.
//!
//! DrawingML positions everything in English Metric Units (EMU). Conversions
//! truncate toward zero, which is what PowerPoint-authoring tools do when
//! they turn inch or point literals into integer EMU.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert points to EMU.
#[inline]
pub fn pt(value: f64) -> i64 {
    (value * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn cm(value: f64) -> i64 {
    (value * EMUS_PER_CM as f64) as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Font sizes are stored in hundredths of a point (`sz="1800"` is 18pt).
#[inline]
pub fn font_size_to_centipoints(size: f64) -> u32 {
    (size * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_truncates() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(13.333), 12_191_695);
        assert_eq!(inches(0.06), 54_864);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt(8.0), 101_600);
        assert_eq!(emu_to_pt_f64(pt(14.0)), 14.0);
    }

    #[test]
    fn test_centimeters_and_back() {
        assert_eq!(cm(2.54), 914_400);
        assert!((emu_to_inches(inches(7.5)) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_font_size_centipoints() {
        assert_eq!(font_size_to_centipoints(13.0), 1300);
        assert_eq!(font_size_to_centipoints(10.5), 1050);
    }
}
