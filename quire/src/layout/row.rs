//! Row - horizontal flex container.
//!
//! Children flow left to right. The row always claims the full offered
//! width; its height is the tallest child.

use crate::error::LayoutResult;
use crate::primitives::{Axis, Rect, Size};

use super::constraints::BoxConstraints;
use super::context::{DrawContext, LayoutContext};
use super::flex::FlexLayout;
use super::length::{CrossAxisAlignment, MainAxisAlignment};
use super::node::Node;

/// A horizontal layout container (children flow left to right).
#[derive(Debug, Default)]
pub struct Row {
    flex: FlexLayout,
}

impl Row {
    /// Create an empty row, centered on both axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child.
    pub fn push(mut self, child: impl Into<Node>) -> Self {
        self.flex.children.push(child.into());
        self
    }

    /// Add several children.
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Node>,
    {
        self.flex.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set main axis (horizontal) alignment.
    pub fn main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.flex.main_axis_alignment = alignment;
        self
    }

    /// Set cross axis (vertical) alignment.
    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.flex.cross_axis_alignment = alignment;
        self
    }

    pub fn get_children(&self) -> &[Node] {
        &self.flex.children
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        self.flex.layout(Axis::Horizontal, ctx, constraints)
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        self.flex.draw(ctx, bounds);
    }
}
