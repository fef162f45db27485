use crate::{Scalar, clamp};
use std::{fmt, str::FromStr};

/// RGBA color packed as u32 value (red in the lowest byte)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct RGBA(u32);

impl RGBA {
    pub const BLACK: RGBA = RGBA::new(0, 0, 0, 255);
    pub const WHITE: RGBA = RGBA::new(255, 255, 255, 255);
    pub const TRANSPARENT: RGBA = RGBA::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Convert color to `[r, g, b, a]` list
    pub fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Linear interpolation of each channel between self and other colors
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        let t = clamp(t, 0.0, 1.0);
        let [r0, g0, b0, a0] = self.to_rgba();
        let [r1, g1, b1, a1] = other.to_rgba();
        let mix = |c0: u8, c1: u8| -> u8 {
            let value = c0 as Scalar * (1.0 - t) + c1 as Scalar * t;
            (value + 0.5) as u8
        };
        RGBA::new(mix(r0, r1), mix(g0, g1), mix(b0, b1), mix(a0, a1))
    }
}

impl From<[u8; 4]> for RGBA {
    fn from(rgba: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(rgba))
    }
}

impl FromStr for RGBA {
    type Err = ColorError;

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        let hex = color
            .trim()
            .strip_prefix('#')
            .ok_or(ColorError::HexExpected)?;
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::HexExpected);
        }
        let channel = |index: usize| -> Result<u8, ColorError> {
            u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16)
                .map_err(|_| ColorError::HexExpected)
        };
        let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok(RGBA::new(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}

impl fmt::Display for RGBA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)?;
        if a != 255 {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RGBA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({})", self)
    }
}

impl From<RGBA> for String {
    fn from(color: RGBA) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for RGBA {
    type Error = ColorError;

    fn try_from(color: String) -> Result<Self, Self::Error> {
        color.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    HexExpected,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "Color expected to be #RRGGBB(AA) in hexidemical format")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_u8() {
        let c = RGBA::new(1, 2, 3, 4);
        assert_eq!([1, 2, 3, 4], c.to_rgba());
        assert_eq!(1, c.red());
        assert_eq!(2, c.green());
        assert_eq!(3, c.blue());
        assert_eq!(4, c.alpha());
        assert_eq!(RGBA::from([1, 2, 3, 4]), c);
    }

    #[test]
    fn test_display_parse() -> Result<(), ColorError> {
        let c: RGBA = "#01020304".parse()?;
        assert_eq!(c, RGBA::new(1, 2, 3, 4));
        assert_eq!(c.to_string(), "#01020304");

        let c: RGBA = "#aabbcc".parse()?;
        assert_eq!(c, RGBA::new(170, 187, 204, 255));
        assert_eq!(c.to_string(), "#aabbcc");

        assert_eq!("aabbcc".parse::<RGBA>(), Err(ColorError::HexExpected));
        assert_eq!("#aabbc".parse::<RGBA>(), Err(ColorError::HexExpected));
        assert_eq!("#gg0000".parse::<RGBA>(), Err(ColorError::HexExpected));
        Ok(())
    }

    #[test]
    fn test_lerp() {
        let c0 = RGBA::new(0, 0, 0, 255);
        let c1 = RGBA::new(200, 100, 50, 255);
        assert_eq!(c0.lerp(c1, 0.0), c0);
        assert_eq!(c0.lerp(c1, 1.0), c1);
        assert_eq!(c0.lerp(c1, 0.5), RGBA::new(100, 50, 25, 255));
        assert_eq!(c0.lerp(c1, 2.0), c1);
    }
}
