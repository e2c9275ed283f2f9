//! Drawing backend contract.
//!
//! The layout engine only depends on these two traits. [`TextMeasure`] is
//! all the layout pass needs; [`DrawBackend`] adds the primitive drawing
//! calls issued during the draw pass. Everything a backend receives is in
//! top-down absolute page coordinates; a backend whose output format uses a
//! bottom-up convention flips `y` itself.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::raster::ImageHandle;
use crate::primitives::{Color, Point, Size};

/// Font descriptor: a registered family name plus a point size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Same family at a different size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Helvetica", 10.0)
    }
}

/// Vertical font metrics at a given size. Both values are positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    /// Fixed line spacing used by the text engine.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Text measurement, the only backend capability the layout pass uses.
pub trait TextMeasure {
    /// Advance width of `text` rendered in `font`.
    fn measure_text(&self, text: &str, font: &Font) -> f32;

    /// Ascent and descent of `font` at its size.
    fn font_metrics(&self, font: &Font) -> FontMetrics;
}

/// Output surface driven by the draw pass.
///
/// Calls arrive strictly ordered: a container's decoration precedes its
/// children, and `begin_page` completes before anything is drawn on the
/// new page.
pub trait DrawBackend: TextMeasure {
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color);

    fn fill_rect(&mut self, origin: Point, size: Size, color: Color);

    /// Draw one line of text. `origin` is the start of the baseline;
    /// `word_spacing` is extra space added to every inter-word gap.
    fn draw_text_run(&mut self, origin: Point, text: &str, font: &Font, word_spacing: f32);

    fn draw_image(&mut self, origin: Point, size: Size, image: ImageHandle);

    /// Close the current physical page and open the next one.
    fn begin_page(&mut self);

    /// Finish the document.
    fn save(&mut self);
}

// =========================================================================
// Monospace metrics
// =========================================================================

/// Deterministic metrics where every display column has the same advance.
///
/// Advance is `columns * size * advance`, with the column count taken from
/// `unicode-width` so wide glyphs count double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.75,
            descent: 0.25,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure_text(&self, text: &str, font: &Font) -> f32 {
        text.width() as f32 * font.size * self.advance
    }

    fn font_metrics(&self, font: &Font) -> FontMetrics {
        FontMetrics {
            ascent: font.size * self.ascent,
            descent: font.size * self.descent,
        }
    }
}
