//! Open output elements.

use crate::css::style_string;
use crate::token::{FormatContext, Token};

/// Element vocabulary of the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
    /// Section container.
    Div,
    P,
    Ul,
    Ol,
    Li,
    Table,
    Tr,
    Td,
    /// Heading level 1..=6.
    Heading(u8),
    Strong,
    Em,
    U,
    S,
    Sub,
    Sup,
    Span,
}

impl TagName {
    pub fn as_str(self) -> &'static str {
        match self {
            TagName::Div => "div",
            TagName::P => "p",
            TagName::Ul => "ul",
            TagName::Ol => "ol",
            TagName::Li => "li",
            TagName::Table => "table",
            TagName::Tr => "tr",
            TagName::Td => "td",
            TagName::Heading(1) => "h1",
            TagName::Heading(2) => "h2",
            TagName::Heading(3) => "h3",
            TagName::Heading(4) => "h4",
            TagName::Heading(5) => "h5",
            TagName::Heading(_) => "h6",
            TagName::Strong => "strong",
            TagName::Em => "em",
            TagName::U => "u",
            TagName::S => "s",
            TagName::Sub => "sub",
            TagName::Sup => "sup",
            TagName::Span => "span",
        }
    }

    /// Block-context elements that directly hold inline content.
    pub fn is_paragraph(self) -> bool {
        matches!(
            self,
            TagName::P | TagName::Li | TagName::Td | TagName::Heading(_)
        )
    }

    /// Span marker elements and the generic `span`.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            TagName::Strong
                | TagName::Em
                | TagName::U
                | TagName::S
                | TagName::Sub
                | TagName::Sup
                | TagName::Span
        )
    }

    pub fn is_list(self) -> bool {
        matches!(self, TagName::Ul | TagName::Ol)
    }

    /// Dedicated element for a span marker token.
    pub fn for_span_marker(token: &Token) -> Option<TagName> {
        match token {
            Token::Bold => Some(TagName::Strong),
            Token::Italic => Some(TagName::Em),
            Token::Underline => Some(TagName::U),
            Token::Strike => Some(TagName::S),
            Token::SubscriptStart => Some(TagName::Sub),
            Token::SuperscriptStart => Some(TagName::Sup),
            _ => None,
        }
    }
}

/// An open element and the tokens it contributes.
///
/// `tokens` holds only what no ancestor already supplies; `implied` holds
/// tokens that are in force from this element without being written to its
/// style attribute (the reader's baseline, e.g. a 12pt default size).
#[derive(Debug, Clone)]
pub struct TagNode {
    name: TagName,
    tokens: FormatContext,
    implied: FormatContext,
    attributes: Vec<(&'static str, String)>,
}

impl TagNode {
    pub fn new(name: TagName) -> Self {
        Self {
            name,
            tokens: FormatContext::new(),
            implied: FormatContext::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn name(&self) -> TagName {
        self.name
    }

    pub fn tokens(&self) -> &FormatContext {
        &self.tokens
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    /// Tokens in force from this element alone, implied ones first.
    pub fn carried(&self) -> impl Iterator<Item = &Token> {
        self.implied.iter().chain(self.tokens.iter())
    }

    pub fn carries(&self, token: &Token) -> bool {
        self.implied.contains(token) || self.tokens.contains(token)
    }

    /// Add a token unless it is already in force at `ancestors` or here.
    pub fn add(&mut self, token: Token, ancestors: &[TagNode]) -> bool {
        if ancestors.iter().any(|a| a.carries(&token)) || self.implied.contains(&token) {
            return false;
        }
        self.tokens.add(token)
    }

    pub fn add_range<I>(&mut self, tokens: I, ancestors: &[TagNode])
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.add(token, ancestors);
        }
    }

    /// Put a token in force without emitting it.
    pub fn imply(&mut self, token: Token, ancestors: &[TagNode]) -> bool {
        if ancestors.iter().any(|a| a.carries(&token)) || self.tokens.contains(&token) {
            return false;
        }
        self.implied.add(token)
    }

    /// Style attribute value for this element's own tokens.
    pub fn style(&self) -> String {
        style_string(&self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Color;

    #[test]
    fn test_paragraph_like() {
        assert!(TagName::P.is_paragraph());
        assert!(TagName::Li.is_paragraph());
        assert!(TagName::Td.is_paragraph());
        assert!(TagName::Heading(3).is_paragraph());
        assert!(!TagName::Div.is_paragraph());
        assert!(!TagName::Ul.is_paragraph());
        assert!(!TagName::Strong.is_paragraph());
    }

    #[test]
    fn test_heading_names() {
        assert_eq!(TagName::Heading(1).as_str(), "h1");
        assert_eq!(TagName::Heading(6).as_str(), "h6");
    }

    #[test]
    fn test_span_marker_tags() {
        assert_eq!(TagName::for_span_marker(&Token::Bold), Some(TagName::Strong));
        assert_eq!(
            TagName::for_span_marker(&Token::SuperscriptStart),
            Some(TagName::Sup)
        );
        assert_eq!(TagName::for_span_marker(&Token::FontSize(2)), None);
    }

    #[test]
    fn test_add_dedupes_against_ancestors() {
        let red = Token::ForegroundColor(Color::rgb(255, 0, 0));
        let mut root = TagNode::new(TagName::Div);
        root.add(red.clone(), &[]);
        root.imply(Token::FontSize(24), &[]);

        let mut child = TagNode::new(TagName::P);
        let ancestors = [root];
        assert!(!child.add(red.clone(), &ancestors));
        assert!(!child.add(Token::FontSize(24), &ancestors));
        assert!(child.add(Token::FontSize(20), &ancestors));
        assert_eq!(child.style(), "font-size:10pt;");
        assert_eq!(ancestors[0].style(), "color:#FF0000;");
    }

    #[test]
    fn test_implied_tokens_not_styled() {
        let mut node = TagNode::new(TagName::Div);
        node.imply(Token::FontSize(24), &[]);
        assert_eq!(node.style(), "");
        assert!(node.carries(&Token::FontSize(24)));
        assert!(!node.add(Token::FontSize(24), &[]));
    }
}
