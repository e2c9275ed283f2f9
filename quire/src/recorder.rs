//! In-memory backend that records draw calls per physical page.
//!
//! Useful for tests and for callers that post-process the command stream
//! into their own output format.

use crate::backend::{DrawBackend, Font, FontMetrics, MonospaceMetrics, TextMeasure};
use crate::raster::ImageHandle;
use crate::primitives::{Color, Point, Size};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke_width: f32,
        color: Color,
    },
    FillRect {
        origin: Point,
        size: Size,
        color: Color,
    },
    Text {
        origin: Point,
        text: String,
        font: Font,
        word_spacing: f32,
    },
    Image {
        origin: Point,
        size: Size,
        image: ImageHandle,
    },
}

/// Backend that stores every call, grouped by page.
///
/// Starts with one open page. Measurement is delegated to `M`.
#[derive(Debug, Clone)]
pub struct RecordingBackend<M: TextMeasure = MonospaceMetrics> {
    metrics: M,
    pages: Vec<Vec<DrawCommand>>,
    saved: bool,
}

impl RecordingBackend<MonospaceMetrics> {
    pub fn new() -> Self {
        Self::with_metrics(MonospaceMetrics::default())
    }
}

impl Default for RecordingBackend<MonospaceMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasure> RecordingBackend<M> {
    pub fn with_metrics(metrics: M) -> Self {
        Self {
            metrics,
            pages: vec![Vec::new()],
            saved: false,
        }
    }

    pub fn pages(&self) -> &[Vec<DrawCommand>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// All commands across pages, in issue order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.pages.iter().flatten()
    }

    /// Text runs across all pages, in issue order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, cmd: DrawCommand) {
        if let Some(page) = self.pages.last_mut() {
            page.push(cmd);
        }
    }
}

impl<M: TextMeasure> TextMeasure for RecordingBackend<M> {
    fn measure_text(&self, text: &str, font: &Font) -> f32 {
        self.metrics.measure_text(text, font)
    }

    fn font_metrics(&self, font: &Font) -> FontMetrics {
        self.metrics.font_metrics(font)
    }
}

impl<M: TextMeasure> DrawBackend for RecordingBackend<M> {
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
        self.push(DrawCommand::Line {
            from,
            to,
            stroke_width,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Point, size: Size, color: Color) {
        self.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn draw_text_run(&mut self, origin: Point, text: &str, font: &Font, word_spacing: f32) {
        self.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            font: font.clone(),
            word_spacing,
        });
    }

    fn draw_image(&mut self, origin: Point, size: Size, image: ImageHandle) {
        self.push(DrawCommand::Image {
            origin,
            size,
            image,
        });
    }

    fn begin_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn save(&mut self) {
        self.saved = true;
    }
}
