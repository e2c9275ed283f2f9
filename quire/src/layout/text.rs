//! Text - greedy word wrap with justified lines.
//!
//! Layout splits the string on whitespace and packs words onto lines in a
//! single pass, hard-splitting any word wider than the wrap width at
//! character boundaries. Every line except the final one is justified at
//! draw time by spreading its leftover width over the inter-word gaps.

use crate::backend::{Font, TextMeasure};
use crate::primitives::{Point, Rect, Size};

use super::constraints::BoxConstraints;
use super::context::{DrawContext, LayoutContext};
use super::flex::EPS;

/// One wrapped line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Words of the line joined by single spaces.
    pub text: String,
    /// Wrap width left unused on this line.
    pub leftover: f32,
    /// Words on the line plus one.
    pub counter: u32,
}

impl TextLine {
    /// Extra space per inter-word gap for a justified line.
    ///
    /// The gap count is taken as `counter - 2` when `counter > 2`, otherwise
    /// `counter` itself.
    pub fn justify_spacing(&self) -> f32 {
        let divisor = if self.counter > 2 { self.counter - 2 } else { self.counter };
        self.leftover / divisor as f32
    }
}

/// Split a word into maximal prefixes no wider than `width`.
///
/// A single character wider than `width` still forms its own segment.
pub fn split_word(measure: &dyn TextMeasure, font: &Font, word: &str, width: f32) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if !current.is_empty() && measure.measure_text(&candidate, font) > width + EPS {
            parts.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Wrap `text` into lines no wider than `width`.
pub fn wrap(measure: &dyn TextMeasure, font: &Font, text: &str, width: f32) -> Vec<TextLine> {
    let space = measure.measure_text(" ", font);

    let mut words: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if measure.measure_text(word, font) <= width + EPS {
            words.push(word.to_string());
        } else {
            words.extend(split_word(measure, font, word, width));
        }
    }

    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut left = width;
    let mut counter = 1u32;

    for word in &words {
        let word_width = measure.measure_text(word, font);
        if word_width + space <= left + EPS {
            current.push(word);
            left -= word_width + space;
        } else if word_width <= left + EPS || current.is_empty() {
            // Fits without its trailing gap; ends the line.
            current.push(word);
            left -= word_width;
        } else {
            lines.push(TextLine {
                text: current.join(" "),
                leftover: left,
                counter,
            });
            counter = 1;
            current.clear();
            current.push(word);
            left = width - word_width;
            if space <= left + EPS {
                left -= space;
            }
        }
        counter += 1;
    }

    if !current.is_empty() {
        lines.push(TextLine {
            text: current.join(" "),
            leftover: left,
            counter,
        });
    }
    lines
}

// =========================================================================
// Text
// =========================================================================

/// A run of wrapped text in a single font.
#[derive(Debug)]
pub struct Text {
    text: String,
    font: Option<Font>,
    // Layout results
    resolved_font: Font,
    lines: Vec<TextLine>,
    ascent: f32,
    line_height: f32,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            resolved_font: Font::default(),
            lines: Vec::new(),
            ascent: 0.0,
            line_height: 0.0,
        }
    }

    /// Set the font. Without one, the document default is used.
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines from the last layout pass.
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Wrapped text, one line per `\n`.
    pub fn wrapped(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> Size {
        self.resolved_font = match (&self.font, ctx.default_font) {
            (Some(font), _) => font.clone(),
            (None, Some(font)) => font.clone(),
            (None, None) => Font::default(),
        };
        let font = &self.resolved_font;
        let metrics = ctx.measure.font_metrics(font);
        self.ascent = metrics.ascent;
        self.line_height = metrics.line_height();

        let wrap_width = constraints.max_width;
        self.lines = wrap(ctx.measure, font, &self.text, wrap_width);

        let width = match self.lines.as_slice() {
            [] => 0.0,
            [line] => ctx.measure.measure_text(&line.text, font).min(wrap_width),
            _ => wrap_width,
        };
        let height = (self.lines.len() as f32 * self.line_height).min(constraints.max_height);
        Size::new(width, height)
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        if self.line_height <= 0.0 {
            return;
        }
        // Only whole lines that fit the laid-out height are drawn.
        let visible = ((bounds.height + EPS) / self.line_height).floor() as usize;
        let last = self.lines.len().saturating_sub(1);
        for (i, line) in self.lines.iter().take(visible).enumerate() {
            let spacing = if i != last { line.justify_spacing() } else { 0.0 };
            let origin = Point::new(
                bounds.x,
                bounds.y + i as f32 * self.line_height + self.ascent,
            );
            ctx.backend
                .draw_text_run(origin, &line.text, &self.resolved_font, spacing);
        }
    }
}
