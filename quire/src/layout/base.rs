//! Border types and chrome rendering shared by boxes, cells and images.

use crate::backend::DrawBackend;
use crate::primitives::{Color, Point, Rect};

use super::length::EdgeInset;

// =========================================================================
// Borders
// =========================================================================

/// One edge of a border. A zero width side is not drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSide {
    pub width: f32,
    pub color: Color,
}

impl BorderSide {
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// An invisible side.
    pub fn zero() -> Self {
        Self {
            width: 0.0,
            color: Color::WHITE,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

impl Default for BorderSide {
    /// 1pt black.
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
        }
    }
}

/// Four independently configurable border sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub left: BorderSide,
    pub top: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
}

impl Border {
    /// No visible sides.
    pub fn zero() -> Self {
        Self {
            left: BorderSide::zero(),
            top: BorderSide::zero(),
            right: BorderSide::zero(),
            bottom: BorderSide::zero(),
        }
    }

    /// The same side on all four edges.
    pub fn all(side: BorderSide) -> Self {
        Self {
            left: side,
            top: side,
            right: side,
            bottom: side,
        }
    }

    pub fn left(mut self, side: BorderSide) -> Self {
        self.left = side;
        self
    }

    pub fn top(mut self, side: BorderSide) -> Self {
        self.top = side;
        self
    }

    pub fn right(mut self, side: BorderSide) -> Self {
        self.right = side;
        self
    }

    pub fn bottom(mut self, side: BorderSide) -> Self {
        self.bottom = side;
        self
    }

    /// Left plus right thickness.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left.width + self.right.width
    }

    /// Top plus bottom thickness.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top.width + self.bottom.width
    }

    /// Border thickness as an inset.
    #[inline]
    pub fn inset(&self) -> EdgeInset {
        EdgeInset::new(
            self.top.width,
            self.right.width,
            self.bottom.width,
            self.left.width,
        )
    }

    /// Interior of `bounds` once the border thickness is removed.
    pub fn client_rect(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x + self.left.width,
            bounds.y + self.top.width,
            (bounds.width - self.horizontal()).max(0.0),
            (bounds.height - self.vertical()).max(0.0),
        )
    }

    /// Draw each visible side as one line along its half-thickness midline,
    /// in top, right, bottom, left order.
    pub fn draw(&self, backend: &mut dyn DrawBackend, bounds: Rect) {
        let (x, y) = (bounds.x, bounds.y);
        let (x2, y2) = (bounds.right(), bounds.bottom());

        let top = self.top;
        if top.is_visible() {
            let ly = y + top.width / 2.0;
            backend.draw_line(Point::new(x, ly), Point::new(x2, ly), top.width, top.color);
        }

        let right = self.right;
        if right.is_visible() {
            let lx = x2 - right.width / 2.0;
            backend.draw_line(Point::new(lx, y), Point::new(lx, y2), right.width, right.color);
        }

        let bottom = self.bottom;
        if bottom.is_visible() {
            let ly = y2 - bottom.width / 2.0;
            backend.draw_line(Point::new(x, ly), Point::new(x2, ly), bottom.width, bottom.color);
        }

        let left = self.left;
        if left.is_visible() {
            let lx = x + left.width / 2.0;
            backend.draw_line(Point::new(lx, y), Point::new(lx, y2), left.width, left.color);
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::zero()
    }
}

// =========================================================================
// Chrome
// =========================================================================

/// Render box decoration: background fill over the bordered interior, then
/// the border lines.
pub fn render_chrome(
    backend: &mut dyn DrawBackend,
    bounds: Rect,
    background: Option<Color>,
    border: &Border,
) {
    if let Some(color) = background {
        let client = border.client_rect(bounds);
        if client.width > 0.0 && client.height > 0.0 {
            backend.fill_rect(client.origin(), client.size(), color);
        }
    }
    border.draw(backend, bounds);
}
