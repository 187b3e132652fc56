//! Content event streams.
//!
//! An [`Event`] pairs a piece of content with the formatting in force for
//! it. [`render_html`] drives a whole stream through an [`HtmlWriter`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::html::{HtmlConfig, HtmlWriter, MarkupSink, XmlSink};
use crate::picture::Picture;
use crate::token::{BreakKind, FormatContext};

/// One content event from the reader.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum Event {
    Text {
        #[cfg_attr(feature = "serde", serde(default))]
        format: FormatContext,
        text: String,
    },
    Picture {
        #[cfg_attr(feature = "serde", serde(default))]
        format: FormatContext,
        picture: Picture,
    },
    Break {
        #[cfg_attr(feature = "serde", serde(default))]
        format: FormatContext,
        kind: BreakKind,
    },
}

impl Event {
    pub fn text(format: FormatContext, text: impl Into<String>) -> Self {
        Event::Text {
            format,
            text: text.into(),
        }
    }

    pub fn format(&self) -> &FormatContext {
        match self {
            Event::Text { format, .. }
            | Event::Picture { format, .. }
            | Event::Break { format, .. } => format,
        }
    }
}

impl<S: MarkupSink> HtmlWriter<S> {
    /// Dispatch a single event to the matching `add_*` operation.
    pub fn add_event(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Text { format, text } => self.add_text(format, text),
            Event::Picture { format, picture } => self.add_picture(format, picture),
            Event::Break { format, kind } => self.add_break(format, *kind),
        }
    }
}

fn write_body<'a, S, I>(sink: S, events: I, config: HtmlConfig) -> Result<()>
where
    S: MarkupSink,
    I: IntoIterator<Item = &'a Event>,
{
    let mut writer = HtmlWriter::with_config(sink, config);
    for event in events {
        writer.add_event(event)?;
    }
    writer.close()
}

/// Render an event stream as an HTML fragment.
pub fn render_html<'a, I>(events: I, config: HtmlConfig) -> Result<String>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sink = XmlSink::new(Vec::new());
    write_body(&mut sink, events, config)?;
    Ok(String::from_utf8(sink.into_inner()?)?)
}

/// Render an event stream as a complete HTML document.
pub fn render_document<'a, I>(events: I, config: HtmlConfig, title: &str) -> Result<String>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sink = XmlSink::new(Vec::new());
    sink.doctype()?;
    sink.start_element("html")?;
    sink.start_element("head")?;
    sink.start_element("meta")?;
    sink.attribute("charset", "utf-8")?;
    sink.end_element()?;
    sink.start_element("title")?;
    sink.text(title)?;
    sink.end_element()?;
    sink.end_element()?;
    sink.start_element("body")?;
    write_body(&mut sink, events, config)?;
    sink.end_element()?;
    sink.end_element()?;
    Ok(String::from_utf8(sink.into_inner()?)?)
}
