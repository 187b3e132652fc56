//! Formatting and structural directives.
//!
//! A [`Token`] is an immutable directive attached to a run of content. The
//! upstream reader resolves control words into tokens; this crate only
//! consumes them. Tokens compare by kind and payload, which is what style
//! deduplication relies on.

mod context;

pub use context::FormatContext;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::css::Color;

/// The level a directive applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    CharacterFormat,
    ParagraphFormat,
    SectionFormat,
    Structural,
}

/// Break kinds delivered through [`crate::html::HtmlWriter::add_break`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BreakKind {
    Paragraph,
    Section,
    Cell,
    Row,
    Line,
}

/// Font family class from the document font table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontFamily {
    #[default]
    Nil,
    Roman,
    Swiss,
    Modern,
    Script,
    Decor,
    Tech,
    Bidi,
}

impl FontFamily {
    /// Generic CSS family used as the fallback after the font name.
    pub fn generic(self) -> Option<&'static str> {
        match self {
            FontFamily::Roman => Some("serif"),
            FontFamily::Swiss => Some("sans-serif"),
            FontFamily::Modern => Some("monospace"),
            FontFamily::Script => Some("cursive"),
            FontFamily::Decor => Some("fantasy"),
            FontFamily::Nil | FontFamily::Tech | FontFamily::Bidi => None,
        }
    }
}

/// A font table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Font {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub family: FontFamily,
}

impl Font {
    pub fn new(name: impl Into<String>, family: FontFamily) -> Self {
        Self {
            name: name.into(),
            family,
        }
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

/// List numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberingKind {
    Bullet,
    Arabic,
    LowerLetter,
    UpperLetter,
    LowerRoman,
    UpperRoman,
}

impl NumberingKind {
    /// Value of the `type` attribute on `<ol>`, if the kind needs one.
    pub fn ordered_type(self) -> Option<&'static str> {
        match self {
            NumberingKind::LowerLetter => Some("a"),
            NumberingKind::LowerRoman => Some("i"),
            NumberingKind::UpperLetter => Some("A"),
            NumberingKind::UpperRoman => Some("I"),
            NumberingKind::Bullet | NumberingKind::Arabic => None,
        }
    }
}

/// A resolved formatting or structural directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    // Character formatting
    Bold,
    Italic,
    Underline,
    Strike,
    SubscriptStart,
    SuperscriptStart,
    Font(Font),
    /// Size in half-points.
    FontSize(u16),
    ForegroundColor(Color),
    BackgroundColor(Color),
    Capitalization,
    Hidden,

    // Paragraph formatting
    ParagraphDefaults,
    TextAlign(Alignment),
    OutlineLevel(u8),
    ParagraphNumbering,
    BulletNumbering,
    ListLevelType(NumberingKind),
    NumberingType(NumberingKind),
    InTable,
    RowDefaults,

    // Section formatting
    SectionDefaults,
    Columns(u16),

    Break(BreakKind),

    /// A directive this crate has no special handling for.
    Control {
        category: Category,
        word: String,
        param: Option<i32>,
    },
}

impl Token {
    pub fn category(&self) -> Category {
        match self {
            Token::Bold
            | Token::Italic
            | Token::Underline
            | Token::Strike
            | Token::SubscriptStart
            | Token::SuperscriptStart
            | Token::Font(_)
            | Token::FontSize(_)
            | Token::ForegroundColor(_)
            | Token::BackgroundColor(_)
            | Token::Capitalization
            | Token::Hidden => Category::CharacterFormat,
            Token::ParagraphDefaults
            | Token::TextAlign(_)
            | Token::OutlineLevel(_)
            | Token::ParagraphNumbering
            | Token::BulletNumbering
            | Token::ListLevelType(_)
            | Token::NumberingType(_)
            | Token::InTable
            | Token::RowDefaults => Category::ParagraphFormat,
            Token::SectionDefaults | Token::Columns(_) => Category::SectionFormat,
            Token::Break(_) => Category::Structural,
            Token::Control { category, .. } => *category,
        }
    }

    /// Inline markers that get a dedicated element instead of a style.
    pub fn is_span_marker(&self) -> bool {
        self.span_rank().is_some()
    }

    /// Nesting rank of a span marker; lower ranks are opened further out.
    pub(crate) fn span_rank(&self) -> Option<usize> {
        match self {
            Token::Bold => Some(0),
            Token::Italic => Some(1),
            Token::Underline => Some(2),
            Token::Strike => Some(3),
            Token::SubscriptStart => Some(4),
            Token::SuperscriptStart => Some(5),
            _ => None,
        }
    }

    /// Tokens that seed block elements: everything except span markers and breaks.
    pub(crate) fn is_block_seed(&self) -> bool {
        match self.category() {
            Category::ParagraphFormat | Category::SectionFormat => true,
            Category::CharacterFormat => !self.is_span_marker(),
            Category::Structural => false,
        }
    }

    pub(crate) fn is_table_marker(&self) -> bool {
        matches!(self, Token::InTable | Token::RowDefaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        assert_eq!(Token::Bold.category(), Category::CharacterFormat);
        assert_eq!(Token::FontSize(24).category(), Category::CharacterFormat);
        assert_eq!(Token::OutlineLevel(0).category(), Category::ParagraphFormat);
        assert_eq!(Token::SectionDefaults.category(), Category::SectionFormat);
        assert_eq!(
            Token::Break(BreakKind::Paragraph).category(),
            Category::Structural
        );
        let control = Token::Control {
            category: Category::SectionFormat,
            word: "pgnstarts".to_string(),
            param: Some(1),
        };
        assert_eq!(control.category(), Category::SectionFormat);
    }

    #[test]
    fn test_equality_includes_payload() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(Token::ForegroundColor(red), Token::ForegroundColor(red));
        assert_ne!(
            Token::ForegroundColor(red),
            Token::ForegroundColor(Color::rgb(0, 0, 255))
        );
        assert_ne!(Token::ForegroundColor(red), Token::BackgroundColor(red));
    }

    #[test]
    fn test_span_markers() {
        assert!(Token::Bold.is_span_marker());
        assert!(Token::SuperscriptStart.is_span_marker());
        assert!(!Token::Capitalization.is_span_marker());
        assert!(!Token::FontSize(20).is_span_marker());
        assert!(Token::Bold.span_rank() < Token::Italic.span_rank());
    }

    #[test]
    fn test_block_seed() {
        assert!(Token::FontSize(20).is_block_seed());
        assert!(Token::TextAlign(Alignment::Center).is_block_seed());
        assert!(Token::SectionDefaults.is_block_seed());
        assert!(!Token::Bold.is_block_seed());
        assert!(!Token::Break(BreakKind::Line).is_block_seed());
    }

    #[test]
    fn test_ordered_type() {
        assert_eq!(NumberingKind::LowerRoman.ordered_type(), Some("i"));
        assert_eq!(NumberingKind::UpperLetter.ordered_type(), Some("A"));
        assert_eq!(NumberingKind::Arabic.ordered_type(), None);
        assert_eq!(NumberingKind::Bullet.ordered_type(), None);
    }

    #[test]
    fn test_generic_family() {
        assert_eq!(FontFamily::Roman.generic(), Some("serif"));
        assert_eq!(FontFamily::Swiss.generic(), Some("sans-serif"));
        assert_eq!(FontFamily::Modern.generic(), Some("monospace"));
        assert_eq!(FontFamily::Script.generic(), Some("cursive"));
        assert_eq!(FontFamily::Decor.generic(), Some("fantasy"));
        assert_eq!(FontFamily::Nil.generic(), None);
    }
}
