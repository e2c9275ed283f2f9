//! Core primitive types for Quire.
//!
//! Geometry and color value types shared by the layout engine and the
//! drawing backends. All coordinates are top-down: increasing `y` moves
//! toward the bottom of the page.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in 2D space.
///
/// Used both for absolute page positions and for a child's offset inside
/// its parent's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Compose an absolute position from this (absolute) parent position
    /// and a child offset relative to it.
    #[inline]
    pub fn resolve(self, offset: Point) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is non-zero.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.width > 0.0 || self.height > 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get the origin point of this rectangle.
    #[inline]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// Get the size of this rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the right edge X coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// RGBA color with 0-255 channels.
///
/// Channels stay in integer form inside the engine; backends call
/// [`Color::normalized`] at their boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GREY: Self = Self::rgb(128, 128, 128);
    pub const METAL_GREY: Self = Self::rgb(128, 133, 137);
    pub const SILVER: Self = Self::rgb(192, 192, 192);
    pub const ORANGE: Self = Self::rgb(255, 87, 51);
    pub const BROWN: Self = Self::rgb(165, 42, 42);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const AMBER: Self = Self::rgb(255, 191, 0);
    pub const CRIMSON: Self = Self::rgb(220, 20, 60);
    pub const DARK_RED: Self = Self::rgb(139, 0, 0);
    pub const KHAKI: Self = Self::rgb(240, 230, 140);
    pub const VIOLET: Self = Self::rgb(238, 130, 238);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    pub const INDIGO: Self = Self::rgb(75, 0, 130);
    pub const OLIVE: Self = Self::rgb(128, 128, 0);
    pub const CADET_BLUE: Self = Self::rgb(95, 158, 160);
    pub const STEEL_BLUE: Self = Self::rgb(70, 130, 180);
    pub const SKY_BLUE: Self = Self::rgb(135, 206, 235);
    pub const MAROON: Self = Self::rgb(128, 0, 0);
    pub const WHEAT: Self = Self::rgb(245, 222, 179);

    /// Create an opaque color from RGB values (0-255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA values (0-255).
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels scaled to 0.0-1.0, in `[r, g, b, a]` order.
    #[inline]
    pub fn normalized(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Return this color with a different alpha value.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Point tests
    // =========================================================================

    #[test]
    fn test_point_resolve_is_top_down() {
        let parent = Point::new(10.0, 20.0);
        let abs = parent.resolve(Point::new(5.0, 7.0));
        assert_eq!(abs, Point::new(15.0, 27.0));
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(3.0, 4.0) + Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(4.0, 5.0));
        assert_eq!(p - Point::new(4.0, 5.0), Point::ORIGIN);
    }

    // =========================================================================
    // Rect tests
    // =========================================================================

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.origin(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }

    // =========================================================================
    // Color tests
    // =========================================================================

    #[test]
    fn test_color_normalized() {
        let [r, g, b, a] = Color::rgba(255, 0, 51, 255).normalized();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_color_with_alpha() {
        let c = Color::RED.with_alpha(128);
        assert_eq!(c, Color::rgba(255, 0, 0, 128));
    }
}
