//! The low-level markup emitter.
//!
//! [`HtmlWriter`](super::HtmlWriter) only ever issues start/attribute/end/text
//! calls; well-formedness and escaping belong to the sink.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Streaming markup output.
pub trait MarkupSink {
    /// Open an element. Attributes may follow until the next non-attribute call.
    fn start_element(&mut self, name: &str) -> Result<()>;

    /// Attach an attribute to the element opened last.
    fn attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// Close the innermost open element.
    fn end_element(&mut self) -> Result<()>;

    /// Write escaped character data.
    fn text(&mut self, value: &str) -> Result<()>;
}

impl<S: MarkupSink + ?Sized> MarkupSink for &mut S {
    fn start_element(&mut self, name: &str) -> Result<()> {
        (**self).start_element(name)
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<()> {
        (**self).attribute(name, value)
    }

    fn end_element(&mut self) -> Result<()> {
        (**self).end_element()
    }

    fn text(&mut self, value: &str) -> Result<()> {
        (**self).text(value)
    }
}

/// HTML void elements, written as self-closing tags.
fn is_void(name: &str) -> bool {
    matches!(name, "img" | "br" | "hr" | "meta" | "link")
}

/// [`MarkupSink`] backed by a `quick_xml::Writer`.
///
/// The most recent start tag is held back until its attributes are complete,
/// so void elements can be written in self-closing form.
pub struct XmlSink<W: Write> {
    writer: Writer<W>,
    pending: Option<BytesStart<'static>>,
    open: Vec<String>,
}

impl<W: Write> XmlSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new(inner),
            pending: None,
            open: Vec::new(),
        }
    }

    /// Number of elements opened and not yet closed.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Write an HTML5 doctype declaration.
    pub fn doctype(&mut self) -> Result<()> {
        self.flush_pending()?;
        self.writer
            .write_event(Event::DocType(BytesText::from_escaped("html")))?;
        Ok(())
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.writer.write_event(Event::Start(start))?;
        }
        Ok(())
    }

    /// Flush anything held back and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush_pending()?;
        Ok(self.writer.into_inner())
    }
}

impl<W: Write> MarkupSink for XmlSink<W> {
    fn start_element(&mut self, name: &str) -> Result<()> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(name.to_string()));
        self.open.push(name.to_string());
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if let Some(start) = self.pending.as_mut() {
            start.push_attribute((name, value));
        }
        Ok(())
    }

    fn end_element(&mut self) -> Result<()> {
        let Some(name) = self.open.pop() else {
            return Err(crate::Error::Unbalanced { expected: "element" });
        };
        match self.pending.take() {
            Some(start) if is_void(&name) => {
                self.writer.write_event(Event::Empty(start))?;
                return Ok(());
            }
            Some(start) => self.writer.write_event(Event::Start(start))?,
            None => {}
        }
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, value: &str) -> Result<()> {
        self.flush_pending()?;
        self.writer.write_event(Event::Text(BytesText::new(value)))?;
        Ok(())
    }
}
