//! Caller-supplied settings for HTML emission.

use std::fmt;
use std::sync::Arc;

use crate::picture::{Picture, data_uri};
use crate::token::Font;

/// Maps a picture to the URI written into its `src` attribute.
///
/// Returning `None` (or an empty string) suppresses the image.
#[derive(Clone)]
pub struct ImageUriResolver(Arc<dyn Fn(&Picture) -> Option<String> + Send + Sync>);

impl ImageUriResolver {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Picture) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Resolve a picture, treating an empty URI as no URI.
    pub fn resolve(&self, picture: &Picture) -> Option<String> {
        (self.0)(picture).filter(|uri| !uri.is_empty())
    }
}

impl Default for ImageUriResolver {
    /// Embed the picture bytes as a `data:` URI.
    fn default() -> Self {
        Self::new(data_uri)
    }
}

impl fmt::Debug for ImageUriResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ImageUriResolver(..)")
    }
}

/// Configuration for [`HtmlWriter`](super::HtmlWriter).
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Font applied to every section when set.
    pub default_font: Option<Font>,
    /// Document font size in half-points.
    pub default_font_size: u16,
    pub image_uri: ImageUriResolver,
}

impl HtmlConfig {
    /// 12pt, the size HTML user agents render by default.
    pub const DEFAULT_FONT_SIZE: u16 = 24;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_font(mut self, font: Font) -> Self {
        self.default_font = Some(font);
        self
    }

    pub fn with_default_font_size(mut self, half_points: u16) -> Self {
        self.default_font_size = half_points;
        self
    }

    pub fn with_image_resolver<F>(mut self, f: F) -> Self
    where
        F: Fn(&Picture) -> Option<String> + Send + Sync + 'static,
    {
        self.image_uri = ImageUriResolver::new(f);
        self
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            default_font: None,
            default_font_size: Self::DEFAULT_FONT_SIZE,
            image_uri: ImageUriResolver::default(),
        }
    }
}
