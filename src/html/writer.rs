//! Element stack synchronization.
//!
//! For every content event the writer compares the formatting requested by
//! the caller with the chain of open elements, closes what no longer applies,
//! opens what is missing, and only then hands the content to the sink.
//!
//! The open elements always form a single path:
//!
//! ```text
//! div ─┬─ p | h1..h6 ─────────── inline*
//!      ├─ ul | ol ── li ──────── inline*
//!      └─ table ── tr ── td ──── inline*
//! ```
//!
//! where `inline*` is a run of `strong`/`em`/`u`/`s`/`sub`/`sup`/`span`
//! elements nested in canonical order.

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::picture::Picture;
use crate::token::{BreakKind, Category, FormatContext, NumberingKind, Token};

use super::config::HtmlConfig;
use super::sink::MarkupSink;
use super::tag::{TagName, TagNode};

/// Number of distinct span marker kinds.
const SPAN_MARKERS: usize = 6;

/// Stateful HTML emitter for one conversion.
pub struct HtmlWriter<S: MarkupSink> {
    sink: S,
    config: HtmlConfig,
    tags: Vec<TagNode>,
}

impl<S: MarkupSink> HtmlWriter<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, HtmlConfig::default())
    }

    pub fn with_config(sink: S, config: HtmlConfig) -> Self {
        Self {
            sink,
            config,
            tags: Vec::new(),
        }
    }

    pub fn config(&self) -> &HtmlConfig {
        &self.config
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.tags.len()
    }

    /// Names of the open elements, outermost first.
    pub fn open_tags(&self) -> impl Iterator<Item = TagName> + '_ {
        self.tags.iter().map(TagNode::name)
    }

    /// Tokens in force at the innermost open element, outermost first.
    pub fn all_inherited(&self) -> impl Iterator<Item = &Token> {
        self.tags.iter().flat_map(|n| n.carried())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // ------------------------------------------------------------------
    // Content events
    // ------------------------------------------------------------------

    /// Emit a text run. Hidden runs are dropped.
    pub fn add_text(&mut self, format: &FormatContext, text: &str) -> Result<()> {
        if format.is_hidden() {
            debug!("suppressing hidden text run ({} bytes)", text.len());
            return Ok(());
        }
        self.ensure_spans(format)?;
        self.sink.text(text)
    }

    /// Emit an `<img>` if the configured resolver yields a URI.
    pub fn add_picture(&mut self, format: &FormatContext, picture: &Picture) -> Result<()> {
        self.ensure_paragraph(format)?;
        let Some(uri) = self.config.image_uri.resolve(picture) else {
            debug!("no URI for {:?} picture; skipping", picture.format);
            return Ok(());
        };
        self.sink.start_element("img")?;
        if let Some(width) = picture.display_width() {
            self.sink.attribute("width", &width.to_string())?;
        }
        if let Some(height) = picture.display_height() {
            self.sink.attribute("height", &height.to_string())?;
        }
        self.sink.attribute("src", &uri)?;
        self.sink.end_element()
    }

    pub fn add_break(&mut self, format: &FormatContext, kind: BreakKind) -> Result<()> {
        match kind {
            BreakKind::Paragraph => {
                self.ensure_paragraph(format)?;
                self.close_through(|n| n.is_paragraph(), "p")
            }
            BreakKind::Section => {
                self.ensure_section(format)?;
                self.close_through(|n| n == TagName::Div, "div")
            }
            BreakKind::Cell => {
                self.ensure_paragraph(format)?;
                self.close_through(|n| n == TagName::Td, "td")
            }
            BreakKind::Row => self.close_through(|n| n == TagName::Tr, "tr"),
            BreakKind::Line => {
                if self.tags.is_empty() {
                    self.ensure_paragraph(format)?;
                }
                self.sink.start_element("br")?;
                self.sink.end_element()
            }
        }
    }

    /// Close every open element. Call once at the end of the stream.
    pub fn close(&mut self) -> Result<()> {
        while !self.tags.is_empty() {
            self.pop()?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Open the section container unless one is already open.
    pub fn ensure_section(&mut self, format: &FormatContext) -> Result<()> {
        if self.tags.iter().any(|t| t.name() == TagName::Div) {
            return Ok(());
        }
        let mut section = self.child(
            TagName::Div,
            format.of_category(Category::SectionFormat).cloned(),
        );
        let size = Token::FontSize(self.config.default_font_size);
        if self.config.default_font_size == HtmlConfig::DEFAULT_FONT_SIZE {
            section.imply(size, &self.tags);
        } else {
            section.add(size, &self.tags);
        }
        if let Some(font) = &self.config.default_font {
            section.add(Token::Font(font.clone()), &self.tags);
        }
        self.open(section)
    }

    /// Make sure a paragraph-like element is open.
    ///
    /// Context precedence is list, then table, then heading, then a plain
    /// paragraph.
    pub fn ensure_paragraph(&mut self, format: &FormatContext) -> Result<()> {
        if self.tags.iter().any(|t| t.name().is_paragraph()) {
            return Ok(());
        }
        self.ensure_section(format)?;
        let seeds = || format.iter().filter(|t| t.is_block_seed()).cloned();

        if format.has(|t| matches!(t, Token::ParagraphNumbering | Token::ListLevelType(_))) {
            self.close_to(|n| n == TagName::Div || n.is_list(), "div")?;
            if !self.top_is(TagName::is_list) {
                let list = self.list_container(format, seeds());
                self.open(list)?;
            }
            let item = self.child(TagName::Li, seeds());
            self.open(item)
        } else if format.is_table_context() {
            self.close_to(
                |n| matches!(n, TagName::Div | TagName::Table | TagName::Tr),
                "div",
            )?;
            if self.top_is(|n| n == TagName::Div) {
                debug!("opening table");
                self.open(TagNode::new(TagName::Table))?;
            }
            if self.top_is(|n| n == TagName::Table) {
                self.open(TagNode::new(TagName::Tr))?;
            }
            let cell = self.child(TagName::Td, seeds());
            self.open(cell)
        } else if let Some(level) = format.outline_level().filter(|l| *l < 6) {
            let heading = TagName::Heading(level + 1);
            self.close_to(|n| n == TagName::Div, "div")?;
            let node = self.child(heading, seeds());
            self.open(node)
        } else {
            self.close_to(|n| n == TagName::Div, "div")?;
            let paragraph = self.child(TagName::P, seeds());
            self.open(paragraph)
        }
    }

    fn list_container<I>(&self, format: &FormatContext, seeds: I) -> TagNode
    where
        I: IntoIterator<Item = Token>,
    {
        let kind = format
            .list_level_type()
            .or_else(|| format.contains(&Token::BulletNumbering).then_some(NumberingKind::Bullet))
            .or_else(|| format.numbering_type())
            .unwrap_or(NumberingKind::Bullet);
        debug!("opening {:?} list", kind);
        if kind == NumberingKind::Bullet {
            return self.child(TagName::Ul, seeds);
        }
        let list = self.child(TagName::Ol, seeds);
        match kind.ordered_type() {
            Some(ty) => list.with_attribute("type", ty),
            None => list,
        }
    }

    // ------------------------------------------------------------------
    // Inline spans
    // ------------------------------------------------------------------

    /// Bring the open inline elements in line with the character formatting
    /// of `format`.
    ///
    /// Each step closes one stale inline element or opens one new one; span
    /// markers open in canonical order (bold outermost, superscript innermost).
    pub fn ensure_spans(&mut self, format: &FormatContext) -> Result<()> {
        self.ensure_paragraph(format)?;
        let limit = self.tags.len() + SPAN_MARKERS + 1;
        for _ in 0..limit {
            if !self.span_step(format)? {
                return Ok(());
            }
        }
        warn!("span resolution did not settle after {limit} steps");
        Ok(())
    }

    /// One synchronization step. Returns `true` if another step is needed.
    fn span_step(&mut self, format: &FormatContext) -> Result<bool> {
        let requested: Vec<&Token> = format.of_category(Category::CharacterFormat).collect();

        let mut existing = 0;
        let mut shared = 0;
        let mut stale = false;
        for node in &self.tags {
            for token in node
                .carried()
                .filter(|t| t.category() == Category::CharacterFormat)
            {
                existing += 1;
                if requested.contains(&token) {
                    shared += 1;
                } else if node.name().is_inline() {
                    stale = true;
                }
            }
        }
        if shared == existing && shared == requested.len() {
            return Ok(false);
        }

        if stale && !self.top_is(TagName::is_paragraph) {
            self.pop()?;
            return Ok(true);
        }

        let inherited: Vec<&Token> = self.all_inherited().collect();
        let pending: Vec<Token> = requested
            .into_iter()
            .filter(|t| !inherited.contains(t))
            .cloned()
            .collect();
        if pending.is_empty() {
            return Ok(false);
        }

        let marker = pending
            .iter()
            .filter_map(|t| t.span_rank().map(|rank| (rank, t)))
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, t)| t.clone());
        let Some(marker) = marker else {
            let span = self.child(
                TagName::Span,
                format
                    .of_category(Category::CharacterFormat)
                    .cloned()
                    .collect::<Vec<_>>(),
            );
            self.open(span)?;
            return Ok(false);
        };

        let Some(name) = TagName::for_span_marker(&marker) else {
            return Ok(false);
        };
        let more = pending.iter().any(|t| *t != marker && t.is_span_marker());
        let node = if more {
            self.child(name, [marker])
        } else {
            self.child(name, pending)
        };
        self.open(node)?;
        Ok(more)
    }

    // ------------------------------------------------------------------
    // Stack primitives
    // ------------------------------------------------------------------

    fn child<I>(&self, name: TagName, seeds: I) -> TagNode
    where
        I: IntoIterator<Item = Token>,
    {
        let mut node = TagNode::new(name);
        node.add_range(seeds, &self.tags);
        node
    }

    fn top_is(&self, pred: impl Fn(TagName) -> bool) -> bool {
        self.tags.last().is_some_and(|t| pred(t.name()))
    }

    fn open(&mut self, node: TagNode) -> Result<()> {
        let name = node.name().as_str();
        trace!("open <{}> at depth {}", name, self.tags.len());
        self.sink.start_element(name)?;
        for (attr, value) in node.attributes() {
            self.sink.attribute(attr, value)?;
        }
        let style = node.style();
        if !style.is_empty() {
            self.sink.attribute("style", &style)?;
        }
        self.tags.push(node);
        Ok(())
    }

    fn pop(&mut self) -> Result<()> {
        let Some(node) = self.tags.pop() else {
            return Err(Error::Unbalanced { expected: "element" });
        };
        trace!("close <{}> at depth {}", node.name().as_str(), self.tags.len());
        self.sink.end_element()
    }

    /// Close elements until the innermost match of `pred` is on top.
    ///
    /// Fails without closing anything if no open element matches.
    fn close_to(&mut self, pred: impl Fn(TagName) -> bool, expected: &'static str) -> Result<()> {
        let Some(index) = self.tags.iter().rposition(|t| pred(t.name())) else {
            return Err(Error::Unbalanced { expected });
        };
        while self.tags.len() > index + 1 {
            self.pop()?;
        }
        Ok(())
    }

    /// Like [`close_to`](Self::close_to), then close the match as well.
    fn close_through(
        &mut self,
        pred: impl Fn(TagName) -> bool,
        expected: &'static str,
    ) -> Result<()> {
        self.close_to(pred, expected)?;
        self.pop()
    }
}
