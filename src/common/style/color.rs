use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// DrawingML stores these as six hex digits in `<a:srgbClr val="..."/>`.
///
/// # Examples
///
/// ```rust
/// use slidewright::common::RGBColor;
///
/// // Create a navy color
/// let navy = RGBColor::new(0x1B, 0x3A, 0x5C);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("3A8FD6").unwrap();
/// assert_eq!(blue.to_hex(), "3A8FD6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts "FF0000" or "#FF0000"; anything else yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), uppercase.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = RGBColor::new(0x2B, 0x4C, 0x3F);
        assert_eq!(color.to_hex(), "2B4C3F");
        assert_eq!(RGBColor::from_hex("#2b4c3f"), Some(color));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("€0000"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::WHITE.to_string(), "#FFFFFF");
    }
}
