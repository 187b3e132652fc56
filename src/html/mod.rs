//! HTML emission.
//!
//! [`HtmlWriter`] keeps the chain of open elements in sync with the
//! formatting of each content event and writes through a [`MarkupSink`].
//!
//! # Example
//!
//! ```
//! use rtfhtml::html::{HtmlWriter, XmlSink};
//! use rtfhtml::{BreakKind, FormatContext, Token};
//!
//! let mut writer = HtmlWriter::new(XmlSink::new(Vec::new()));
//! let bold: FormatContext = [Token::Bold].into_iter().collect();
//! writer.add_text(&bold, "Hello")?;
//! writer.add_break(&bold, BreakKind::Paragraph)?;
//! writer.close()?;
//!
//! let html = String::from_utf8(writer.into_sink().into_inner()?)?;
//! assert_eq!(html, "<div><p><strong>Hello</strong></p></div>");
//! # Ok::<(), rtfhtml::Error>(())
//! ```

mod config;
mod sink;
mod tag;
mod writer;

pub use config::{HtmlConfig, ImageUriResolver};
pub use sink::{MarkupSink, XmlSink};
pub use tag::{TagName, TagNode};
pub use writer::HtmlWriter;
