//! Embedded picture descriptors.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::units::UnitValue;

/// Blip format of an embedded picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Gif,
    Bmp,
    Emf,
    Wmf,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Emf => "image/emf",
            ImageFormat::Wmf => "image/wmf",
        }
    }
}

/// A picture as delivered by the reader.
///
/// `width`/`height` are the intrinsic size; the `*_goal` fields are the
/// display size requested by the document and take precedence.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Picture {
    pub format: ImageFormat,
    pub width: Option<UnitValue>,
    pub height: Option<UnitValue>,
    pub width_goal: Option<UnitValue>,
    pub height_goal: Option<UnitValue>,
    pub bytes: Vec<u8>,
}

impl Picture {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            bytes,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: UnitValue, height: UnitValue) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_goal(mut self, width: UnitValue, height: UnitValue) -> Self {
        self.width_goal = Some(width);
        self.height_goal = Some(height);
        self
    }

    /// Display width in whole pixels.
    pub fn display_width(&self) -> Option<u32> {
        self.width_goal.or(self.width).map(UnitValue::to_px_u32)
    }

    /// Display height in whole pixels.
    pub fn display_height(&self) -> Option<u32> {
        self.height_goal.or(self.height).map(UnitValue::to_px_u32)
    }
}

/// Encode a picture as a `data:` URI. Pictures without data resolve to nothing.
pub fn data_uri(picture: &Picture) -> Option<String> {
    if picture.bytes.is_empty() {
        return None;
    }
    Some(format!(
        "data:{};base64,{}",
        picture.format.mime_type(),
        STANDARD.encode(&picture.bytes)
    ))
}
