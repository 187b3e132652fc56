//! Ordered, duplicate-free token sets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Category, NumberingKind, Token};

/// The formatting in force for the next piece of content.
///
/// Insertion order is preserved so that output is deterministic; adding a
/// token equal to one already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Token>", into = "Vec<Token>"))]
pub struct FormatContext {
    tokens: Vec<Token>,
}

impl FormatContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token unless an equal one is already present.
    ///
    /// Returns `true` if the token was inserted.
    pub fn add(&mut self, token: Token) -> bool {
        if self.contains(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn add_range<I: IntoIterator<Item = Token>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token);
        }
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    /// First token matching the predicate, in insertion order.
    pub fn first(&self, pred: impl Fn(&Token) -> bool) -> Option<&Token> {
        self.tokens.iter().find(|t| pred(t))
    }

    pub fn has(&self, pred: impl Fn(&Token) -> bool) -> bool {
        self.first(pred).is_some()
    }

    /// All tokens of the given category, in insertion order.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.category() == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the content belongs inside a table cell.
    pub fn is_table_context(&self) -> bool {
        self.has(Token::is_table_marker)
    }

    pub fn is_hidden(&self) -> bool {
        self.contains(&Token::Hidden)
    }

    /// Outline level of the first `OutlineLevel` token.
    pub fn outline_level(&self) -> Option<u8> {
        self.tokens.iter().find_map(|t| match t {
            Token::OutlineLevel(level) => Some(*level),
            _ => None,
        })
    }

    pub fn list_level_type(&self) -> Option<NumberingKind> {
        self.tokens.iter().find_map(|t| match t {
            Token::ListLevelType(kind) => Some(*kind),
            _ => None,
        })
    }

    pub fn numbering_type(&self) -> Option<NumberingKind> {
        self.tokens.iter().find_map(|t| match t {
            Token::NumberingType(kind) => Some(*kind),
            _ => None,
        })
    }
}

impl FromIterator<Token> for FormatContext {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut ctx = FormatContext::new();
        ctx.add_range(iter);
        ctx
    }
}

impl From<Vec<Token>> for FormatContext {
    fn from(tokens: Vec<Token>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<FormatContext> for Vec<Token> {
    fn from(ctx: FormatContext) -> Self {
        ctx.tokens
    }
}

impl Extend<Token> for FormatContext {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<'a> IntoIterator for &'a FormatContext {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Color;
    use crate::token::BreakKind;

    #[test]
    fn test_add_suppresses_duplicates() {
        let mut ctx = FormatContext::new();
        assert!(ctx.add(Token::Bold));
        assert!(!ctx.add(Token::Bold));
        assert!(ctx.add(Token::ForegroundColor(Color::rgb(1, 2, 3))));
        assert!(!ctx.add(Token::ForegroundColor(Color::rgb(1, 2, 3))));
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let ctx: FormatContext = [Token::Italic, Token::FontSize(20), Token::Bold, Token::Italic]
            .into_iter()
            .collect();
        let tokens: Vec<_> = ctx.iter().cloned().collect();
        assert_eq!(tokens, vec![Token::Italic, Token::FontSize(20), Token::Bold]);
    }

    #[test]
    fn test_of_category() {
        let ctx: FormatContext = [
            Token::SectionDefaults,
            Token::ParagraphDefaults,
            Token::Bold,
            Token::OutlineLevel(1),
        ]
        .into_iter()
        .collect();
        let paragraph: Vec<_> = ctx.of_category(Category::ParagraphFormat).collect();
        assert_eq!(paragraph, vec![&Token::ParagraphDefaults, &Token::OutlineLevel(1)]);
        assert_eq!(ctx.of_category(Category::Structural).count(), 0);
    }

    #[test]
    fn test_typed_lookup() {
        let ctx: FormatContext = [
            Token::NumberingType(NumberingKind::UpperRoman),
            Token::OutlineLevel(2),
            Token::OutlineLevel(4),
        ]
        .into_iter()
        .collect();
        assert_eq!(ctx.outline_level(), Some(2));
        assert_eq!(ctx.numbering_type(), Some(NumberingKind::UpperRoman));
        assert_eq!(ctx.list_level_type(), None);
    }

    #[test]
    fn test_table_context() {
        let mut ctx = FormatContext::new();
        ctx.add(Token::Break(BreakKind::Paragraph));
        assert!(!ctx.is_table_context());
        ctx.add(Token::InTable);
        assert!(ctx.is_table_context());
    }
}
