//! Contexts threaded through the layout and draw passes.
//!
//! [`LayoutContext`] is a small `Copy` value handed down by each parent: it
//! carries text measurement, the kind of the immediate parent, and the page
//! bookkeeping page-spanning nodes need. Nodes never hold a reference back
//! to their parent.
//!
//! [`DrawContext`] owns the mutable backend borrow for the draw pass and
//! the page-break anchor.

use tracing::debug;

use crate::backend::{DrawBackend, Font, TextMeasure};
use crate::primitives::{Point, Rect, Size};

// =========================================================================
// Layout
// =========================================================================

/// Kind of the node that is laying out the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentKind {
    Row,
    Column,
    MultiPage,
    #[default]
    Other,
}

/// Read-only ancestor state for the layout pass.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub measure: &'a dyn TextMeasure,
    /// Font for text nodes that do not set one.
    pub default_font: Option<&'a Font>,
    /// Immediate parent kind (Expanded and Divider depend on it).
    pub parent: ParentKind,
    /// Height of one physical page's content area, when known.
    pub page_height: Option<f32>,
    /// Vertical position inside the current physical page where the node
    /// being laid out starts.
    pub page_offset: f32,
}

impl<'a> LayoutContext<'a> {
    pub fn new(measure: &'a dyn TextMeasure) -> Self {
        Self {
            measure,
            default_font: None,
            parent: ParentKind::Other,
            page_height: None,
            page_offset: 0.0,
        }
    }

    pub fn with_default_font(mut self, font: &'a Font) -> Self {
        self.default_font = Some(font);
        self
    }

    pub fn with_page_height(mut self, page_height: f32) -> Self {
        self.page_height = Some(page_height);
        self
    }

    /// Context for the children of a node of kind `parent`.
    #[inline]
    pub fn child_of(mut self, parent: ParentKind) -> Self {
        self.parent = parent;
        self
    }

    #[inline]
    pub fn at_page_offset(mut self, page_offset: f32) -> Self {
        self.page_offset = page_offset;
        self
    }
}

impl std::fmt::Debug for LayoutContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutContext")
            .field("default_font", &self.default_font)
            .field("parent", &self.parent)
            .field("page_height", &self.page_height)
            .field("page_offset", &self.page_offset)
            .finish_non_exhaustive()
    }
}

// =========================================================================
// Draw
// =========================================================================

/// Geometry of a parent, handed to each child at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Absolute origin children's offsets are relative to.
    pub origin: Point,
    /// Outer size of the parent.
    pub size: Size,
    /// Absolute client rectangle (the area inside borders or padding).
    pub client: Rect,
}

impl Frame {
    /// A frame whose client area is the whole rectangle.
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            client: Rect::from_origin_size(origin, size),
        }
    }

    pub fn with_client(mut self, client: Rect) -> Self {
        self.client = client;
        self
    }
}

/// Mutable state for the draw pass.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn DrawBackend,
    /// Where drawing resumes after a page break (the content origin).
    anchor: Point,
    page_breaks: usize,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn DrawBackend, anchor: Point) -> Self {
        Self {
            backend,
            anchor,
            page_breaks: 0,
        }
    }

    /// Open the next physical page and return the point drawing resumes at.
    pub fn break_page(&mut self) -> Point {
        self.backend.begin_page();
        self.page_breaks += 1;
        debug!(page_breaks = self.page_breaks, "page break during draw");
        self.anchor
    }

    #[inline]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Number of page breaks issued so far through this context.
    #[inline]
    pub fn page_breaks(&self) -> usize {
        self.page_breaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MonospaceMetrics;
    use crate::recorder::RecordingBackend;

    #[test]
    fn test_layout_context_child_of() {
        let metrics = MonospaceMetrics::default();
        let ctx = LayoutContext::new(&metrics).with_page_height(800.0);
        let child = ctx.child_of(ParentKind::Column).at_page_offset(30.0);
        assert_eq!(child.parent, ParentKind::Column);
        assert_eq!(child.page_height, Some(800.0));
        assert_eq!(child.page_offset, 30.0);
        assert_eq!(ctx.parent, ParentKind::Other);
    }

    #[test]
    fn test_break_page_returns_anchor() {
        let mut backend = RecordingBackend::new();
        {
            let mut ctx = DrawContext::new(&mut backend, Point::new(5.0, 5.0));
            assert_eq!(ctx.break_page(), Point::new(5.0, 5.0));
            assert_eq!(ctx.page_breaks(), 1);
        }
        assert_eq!(backend.page_count(), 2);
    }
}
