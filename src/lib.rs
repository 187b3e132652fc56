//! # rtfhtml
//!
//! The markup-emission stage of a rich-text to HTML converter.
//!
//! An upstream reader resolves the source document into content events
//! (text runs, pictures, breaks), each paired with a [`FormatContext`]: the
//! set of formatting [`Token`]s in force. This crate turns that stream into
//! minimally nested HTML with inline CSS, opening and closing elements as the
//! formatting changes and never repeating a style an enclosing element
//! already supplies.
//!
//! ## Quick Start
//!
//! ```
//! use rtfhtml::{Event, FormatContext, HtmlConfig, Token, render_html};
//!
//! let heading: FormatContext = [Token::OutlineLevel(0)].into_iter().collect();
//! let events = vec![Event::text(heading, "Title")];
//!
//! let html = render_html(&events, HtmlConfig::default())?;
//! assert_eq!(html, "<div><h1>Title</h1></div>");
//! # Ok::<(), rtfhtml::Error>(())
//! ```
//!
//! For incremental output, drive an [`html::HtmlWriter`] directly and call
//! [`close`](html::HtmlWriter::close) once at the end of the stream.

pub mod css;
pub mod error;
pub mod event;
pub mod html;
pub mod picture;
pub mod token;
pub mod units;

pub use error::{Error, Result};
pub use event::{Event, render_document, render_html};
pub use html::{HtmlConfig, HtmlWriter, MarkupSink, XmlSink};
pub use picture::{ImageFormat, Picture};
pub use token::{
    Alignment, BreakKind, Category, Font, FontFamily, FormatContext, NumberingKind, Token,
};
pub use units::{Unit, UnitValue};
