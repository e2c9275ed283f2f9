//! Box and Container - single-child sizing nodes with border and fill.
//!
//! Sizing depends on which axes were given a [`Length`]:
//!
//! - both: the resolved size, child centered in the bordered interior
//! - width only: height hugs the child, child placed at the border inset
//! - height only: the mirror of width only
//! - neither: the child's size plus the border thickness

use crate::error::LayoutResult;
use crate::primitives::{Color, Point, Rect, Size};

use super::base::{Border, render_chrome};
use super::constraints::BoxConstraints;
use super::context::{DrawContext, Frame, LayoutContext, ParentKind};
use super::length::Length;
use super::node::Node;

/// Size for an explicitly set axis of a childless box. Exact values pass
/// through unclamped.
#[inline]
fn explicit(length: Length, max: f32) -> f32 {
    match length {
        Length::Intrinsic => 0.0,
        Length::Fill => max,
        Length::Exact(v) => v,
    }
}

// =========================================================================
// BoxNode
// =========================================================================

/// An undecorated box: optional child, optional size, optional border.
#[derive(Debug, Default)]
pub struct BoxNode {
    child: Option<Box<Node>>,
    width: Length,
    height: Length,
    border: Border,
}

impl BoxNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.child = Some(Box::new(child.into()));
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn get_border(&self) -> &Border {
        &self.border
    }

    pub fn get_child(&self) -> Option<&Node> {
        self.child.as_deref()
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let bw = self.border.horizontal();
        let bh = self.border.vertical();
        let (left, top) = (self.border.left.width, self.border.top.width);
        let width = self.width.resolve(constraints.max_width);
        let height = self.height.resolve(constraints.max_height);

        let Some(child) = self.child.as_deref_mut() else {
            return Ok(match (width, height) {
                (Some(w), Some(h)) => Size::new(w, h),
                (Some(_), None) => Size::new(explicit(self.width, constraints.max_width), 0.0),
                (None, Some(_)) => Size::new(0.0, explicit(self.height, constraints.max_height)),
                (None, None) => Size::ZERO,
            });
        };

        let child_ctx = ctx.child_of(ParentKind::Other);
        let size = match (width, height) {
            (Some(w), Some(h)) => {
                let (cw, ch) = ((w - bw).max(0.0), (h - bh).max(0.0));
                let child_size = child.layout(child_ctx, BoxConstraints::loose(cw, ch))?;
                child.set_offset(Point::new(
                    (cw - child_size.width) / 2.0 + left,
                    (ch - child_size.height) / 2.0 + top,
                ));
                Size::new(w, h)
            }
            (Some(w), None) => {
                let child_size = child.layout(
                    child_ctx,
                    BoxConstraints::loose((w - bw).max(0.0), (constraints.max_height - bh).max(0.0)),
                )?;
                child.set_offset(Point::new(left, top));
                Size::new(w, child_size.height + bh)
            }
            (None, Some(h)) => {
                let child_size = child.layout(
                    child_ctx,
                    BoxConstraints::loose((constraints.max_width - bw).max(0.0), (h - bh).max(0.0)),
                )?;
                child.set_offset(Point::new(left, top));
                Size::new(child_size.width + bw, h)
            }
            (None, None) => {
                let child_size = child.layout(child_ctx, constraints.deflate(&self.border.inset()))?;
                child.set_offset(Point::new(left, top));
                Size::new(child_size.width + bw, child_size.height + bh)
            }
        };
        Ok(size)
    }

    /// Chrome first, then the child.
    fn draw_with(&self, ctx: &mut DrawContext<'_>, bounds: Rect, background: Option<Color>) {
        render_chrome(ctx.backend, bounds, background, &self.border);
        if let Some(child) = &self.child {
            let frame = Frame::new(bounds.origin(), bounds.size())
                .with_client(self.border.client_rect(bounds));
            child.draw(ctx, &frame);
        }
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        self.draw_with(ctx, bounds, None);
    }
}

/// An undecorated box with the given lengths.
pub fn sized_box(width: impl Into<Length>, height: impl Into<Length>) -> BoxNode {
    BoxNode::new().width(width).height(height)
}

// =========================================================================
// Container
// =========================================================================

/// A box that fills its bordered interior with a solid color.
#[derive(Debug)]
pub struct Container {
    inner: BoxNode,
    color: Color,
    /// Stored only; shadows are not rendered.
    shadow: bool,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            inner: BoxNode::default(),
            color: Color::WHITE,
            shadow: false,
        }
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.inner = self.inner.child(child);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.inner = self.inner.width(width);
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.inner = self.inner.height(height);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.inner = self.inner.border(border);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow
    }

    pub fn get_border(&self) -> &Border {
        self.inner.get_border()
    }

    pub fn get_child(&self) -> Option<&Node> {
        self.inner.get_child()
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        self.inner.layout(ctx, constraints)
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        self.inner.draw_with(ctx, bounds, Some(self.color));
    }
}
