//! Style attributes carried by attributed text runs.

use crate::error::ComposeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A text colour.
///
/// Serialized as a name (`"red"`) or a hex triplet (`"#ff8000"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    Orange,
    Purple,
    Pink,
    Brown,
    /// Fully transparent.
    Clear,
    Rgb(u8, u8, u8),
}

impl Color {
    /// The colour as an RGB triplet. `Clear` maps to black.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Black | Color::Clear => (0, 0, 0),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Yellow => (255, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Magenta => (255, 0, 255),
            Color::Cyan => (0, 255, 255),
            Color::White => (255, 255, 255),
            Color::Gray => (128, 128, 128),
            Color::Orange => (255, 128, 0),
            Color::Purple => (128, 0, 128),
            Color::Pink => (255, 192, 203),
            Color::Brown => (153, 102, 51),
            Color::Rgb(r, g, b) => (*r, *g, *b),
        }
    }

    /// Whether the colour paints nothing.
    pub fn is_clear(&self) -> bool {
        matches!(self, Color::Clear)
    }

    /// CSS hex notation, e.g. `#ff8000`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Yellow => write!(f, "yellow"),
            Color::Blue => write!(f, "blue"),
            Color::Magenta => write!(f, "magenta"),
            Color::Cyan => write!(f, "cyan"),
            Color::White => write!(f, "white"),
            Color::Gray => write!(f, "gray"),
            Color::Orange => write!(f, "orange"),
            Color::Purple => write!(f, "purple"),
            Color::Pink => write!(f, "pink"),
            Color::Brown => write!(f, "brown"),
            Color::Clear => write!(f, "clear"),
            Color::Rgb(..) => write!(f, "{}", self.to_hex()),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let color = match normalized.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::Gray,
            "orange" => Color::Orange,
            "purple" => Color::Purple,
            "pink" => Color::Pink,
            "brown" => Color::Brown,
            "clear" | "transparent" => Color::Clear,
            other => other
                .strip_prefix('#')
                .and_then(Color::parse_hex)
                .ok_or_else(|| ComposeError::InvalidColor(s.to_string()))?,
        };
        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = ComposeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Line style of an underline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineStyle {
    #[default]
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
}

impl UnderlineStyle {
    /// Matching CSS `text-decoration-style` value.
    pub fn css(&self) -> &'static str {
        match self {
            UnderlineStyle::Single | UnderlineStyle::Thick => "solid",
            UnderlineStyle::Double => "double",
            UnderlineStyle::Dotted => "dotted",
            UnderlineStyle::Dashed => "dashed",
        }
    }
}

/// An underline with its own colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Underline {
    pub color: Color,
    #[serde(default)]
    pub style: UnderlineStyle,
}

/// Font selection for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family; `None` is the system font.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Point size.
    #[serde(default = "default_font_size")]
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
}

fn default_font_size() -> f32 {
    17.0
}

impl Font {
    /// The system font at the given size.
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            bold: false,
        }
    }

    /// The bold system font at the given size.
    pub fn bold_system(size: f32) -> Self {
        Self {
            bold: true,
            ..Self::system(size)
        }
    }
}

/// A drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default)]
    pub blur: f32,
}

/// The full set of attributes on a run. Unset slots carry no styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl Attributes {
    /// Whether no slot is set.
    pub fn is_plain(&self) -> bool {
        *self == Attributes::default()
    }

    /// Layer `other` on top: each slot set in `other` replaces ours.
    pub fn merge(&mut self, other: &Attributes) {
        if let Some(color) = other.foreground {
            self.foreground = Some(color);
        }
        if let Some(color) = other.background {
            self.background = Some(color);
        }
        if let Some(underline) = other.underline {
            self.underline = Some(underline);
        }
        if let Some(ref font) = other.font {
            self.font = Some(font.clone());
        }
        if let Some(shadow) = other.shadow {
            self.shadow = Some(shadow);
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_underline(mut self, color: Color, style: UnderlineStyle) -> Self {
        self.underline = Some(Underline { color, style });
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("Grey".parse::<Color>(), Ok(Color::Gray));
        assert_eq!("pink".parse::<Color>(), Ok(Color::Pink));
        assert_eq!(Color::Pink.to_string(), "pink");
        assert_eq!(Color::Pink.to_hex(), "#ffc0cb");
        assert_eq!("#FF8000".parse::<Color>(), Ok(Color::Rgb(255, 128, 0)));
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ComposeError::InvalidColor("chartreuse".to_string()))
        );
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_hex_and_display() {
        assert_eq!(Color::Orange.to_hex(), "#ff8000");
        assert_eq!(Color::Blue.to_string(), "blue");
        assert_eq!(Color::Rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::Red).unwrap();
        assert_eq!(json, "\"red\"");
        let color: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(color, Color::Rgb(0, 255, 0));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_merge_last_wins() {
        let mut base = Attributes::default()
            .with_foreground(Color::Red)
            .with_font(Font::system(10.0));
        let top = Attributes::default()
            .with_foreground(Color::Blue)
            .with_underline(Color::Blue, UnderlineStyle::Single);

        base.merge(&top);

        assert_eq!(base.foreground, Some(Color::Blue));
        assert_eq!(base.font, Some(Font::system(10.0)));
        assert_eq!(
            base.underline,
            Some(Underline {
                color: Color::Blue,
                style: UnderlineStyle::Single
            })
        );
    }

    #[test]
    fn test_is_plain() {
        assert!(Attributes::default().is_plain());
        assert!(!Attributes::default().with_background(Color::Clear).is_plain());
    }
}
