//! Error types for rtfhtml operations.

use thiserror::Error;

/// Errors that can occur while emitting HTML.
#[derive(Error, Debug)]
pub enum Error {
    /// A close was requested for an element that is not open.
    ///
    /// Raised before anything is popped; elements opened earlier in the same
    /// operation stay open.
    #[error("unbalanced structure: no open <{expected}> to close")]
    Unbalanced { expected: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[cfg(feature = "cli")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
