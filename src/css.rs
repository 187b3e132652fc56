//! Inline CSS serialization for token sets.
//!
//! Only a handful of character and paragraph tokens have a CSS rendering.
//! Declarations are written as `property:value;` with no whitespace, in a
//! fixed order so identical token sets always produce identical output.

use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{Font, Token};

/// Trait for converting style values to CSS strings.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// RGB color (8 bits per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl ToCss for Color {
    fn to_css(&self, buf: &mut String) {
        let _ = write!(buf, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b);
    }
}

impl ToCss for Font {
    fn to_css(&self, buf: &mut String) {
        if self.name.chars().any(char::is_whitespace) {
            buf.push('"');
            buf.push_str(&self.name);
            buf.push('"');
        } else {
            buf.push_str(&self.name);
        }
        if let Some(generic) = self.family.generic() {
            buf.push(',');
            buf.push_str(generic);
        }
    }
}

/// Format a half-point size as points with at most one decimal place.
pub fn points(half_points: u16) -> String {
    let pt = format!("{:.1}", f32::from(half_points) / 2.0);
    match pt.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => pt,
    }
}

/// Order in which declarations appear in a style attribute.
const DECLARATION_ORDER: [fn(&Token) -> bool; 6] = [
    |t| matches!(t, Token::Font(_)),
    |t| matches!(t, Token::FontSize(_)),
    |t| matches!(t, Token::BackgroundColor(_)),
    |t| matches!(t, Token::Capitalization),
    |t| matches!(t, Token::ForegroundColor(_)),
    |t| matches!(t, Token::TextAlign(_)),
];

fn write_declaration(token: &Token, buf: &mut String) {
    match token {
        Token::Font(font) => {
            buf.push_str("font-family:");
            font.to_css(buf);
        }
        Token::FontSize(size) => {
            let _ = write!(buf, "font-size:{}pt", points(*size));
        }
        Token::BackgroundColor(color) => {
            buf.push_str("background:");
            color.to_css(buf);
        }
        Token::Capitalization => buf.push_str("text-transform:uppercase"),
        Token::ForegroundColor(color) => {
            buf.push_str("color:");
            color.to_css(buf);
        }
        Token::TextAlign(align) => {
            buf.push_str("text-align:");
            buf.push_str(align.as_str());
        }
        _ => return,
    }
    buf.push(';');
}

/// Serialize the style-bearing tokens of a set into a `style` attribute value.
///
/// Tokens without a CSS rendering are skipped. When a set carries several
/// tokens of the same kind, the first one wins.
pub fn style_string<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
    I::IntoIter: Clone,
{
    let tokens = tokens.into_iter();
    let mut buf = String::new();
    for matches_slot in DECLARATION_ORDER {
        if let Some(token) = tokens.clone().find(|t| matches_slot(t)) {
            write_declaration(token, &mut buf);
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Alignment, Category, FontFamily};

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::BLACK.to_css_string(), "#000000");
        assert_eq!(Color::WHITE.to_css_string(), "#FFFFFF");
        assert_eq!(Color::rgb(0, 128, 255).to_css_string(), "#0080FF");
    }

    #[test]
    fn test_font_to_css() {
        let font = Font::new("Times New Roman", FontFamily::Roman);
        assert_eq!(font.to_css_string(), "\"Times New Roman\",serif");
        let font = Font::new("Consolas", FontFamily::Modern);
        assert_eq!(font.to_css_string(), "Consolas,monospace");
        let font = Font::new("Symbol", FontFamily::Tech);
        assert_eq!(font.to_css_string(), "Symbol");
    }

    #[test]
    fn test_points() {
        assert_eq!(points(24), "12");
        assert_eq!(points(21), "10.5");
        assert_eq!(points(0), "0");
    }

    #[test]
    fn test_style_string_empty() {
        let tokens: Vec<Token> = vec![];
        assert_eq!(style_string(&tokens), "");
        assert_eq!(style_string(&[Token::Bold, Token::ParagraphDefaults]), "");
    }

    #[test]
    fn test_style_string_fixed_order() {
        let tokens = [
            Token::TextAlign(Alignment::Center),
            Token::ForegroundColor(Color::rgb(255, 0, 0)),
            Token::Capitalization,
            Token::BackgroundColor(Color::rgb(0, 0, 255)),
            Token::FontSize(21),
            Token::Font(Font::new("Arial", FontFamily::Swiss)),
        ];
        assert_eq!(
            style_string(&tokens),
            "font-family:Arial,sans-serif;font-size:10.5pt;background:#0000FF;\
             text-transform:uppercase;color:#FF0000;text-align:center;"
        );
    }

    #[test]
    fn test_style_string_ignores_unknown_controls() {
        let tokens = [
            Token::Control {
                category: Category::CharacterFormat,
                word: "expnd".to_string(),
                param: Some(4),
            },
            Token::FontSize(24),
        ];
        assert_eq!(style_string(&tokens), "font-size:12pt;");
    }

    #[test]
    fn test_style_string_first_of_kind_wins() {
        let tokens = [Token::FontSize(20), Token::FontSize(30)];
        assert_eq!(style_string(&tokens), "font-size:10pt;");
    }
}
