pub use csscolorparser::Color as CssColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ColorParseError;

/// The pen colors a turtle can carry. Each one is a CSS named color, and the
/// lowercase name is what ends up on the stroke.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Black,
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
    Pink,
    Brown,
}

impl Color {
    pub const ALL: [Color; 12] = [
        Color::Black,
        Color::Gray,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Purple,
        Color::Magenta,
        Color::Pink,
        Color::Brown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Gray => "gray",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Magenta => "magenta",
            Color::Pink => "pink",
            Color::Brown => "brown",
        }
    }

    /// The matching CSS named color, looked up by name.
    pub fn to_css(&self) -> Result<CssColor, ColorParseError> {
        csscolorparser::parse(self.name()).map_err(|_| ColorParseError(self.name().to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = if wanted == "grey" { "gray".to_string() } else { wanted };
        Color::ALL
            .iter()
            .find(|c| c.name() == wanted)
            .copied()
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
        assert_eq!(" Cyan ".parse::<Color>(), Ok(Color::Cyan));
        assert_eq!("grey".parse::<Color>(), Ok(Color::Gray));
    }

    #[test]
    fn test_unknown_color() {
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ColorParseError("chartreuse".to_string()))
        );
    }

    #[test]
    fn test_palette_is_css() {
        for color in Color::ALL {
            assert!(color.to_css().is_ok(), "{}", color);
        }
        let magenta = Color::Magenta.to_css().expect("magenta is a CSS color");
        assert_eq!(magenta.to_rgba8(), [255, 0, 255, 255]);
        let gray = Color::Gray.to_css().expect("gray is a CSS color");
        assert_eq!(gray.to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn test_serde_lowercase() {
        let c: Color = ron::from_str("magenta").expect("Failed to parse color");
        assert_eq!(c, Color::Magenta);
        assert_eq!(ron::to_string(&Color::Purple).unwrap(), "purple");
    }
}
