//! LayoutTree - owns a root node and enforces layout-before-draw.

use tracing::warn;

use crate::error::{LayoutError, LayoutResult};
use crate::primitives::{Point, Size};

use super::constraints::BoxConstraints;
use super::context::{DrawContext, Frame, LayoutContext};
use super::node::Node;

/// A root node plus the state of its last layout pass.
///
/// A tree whose last layout failed (or never ran) refuses to draw.
#[derive(Debug)]
pub struct LayoutTree {
    root: Node,
    laid_out: bool,
}

impl LayoutTree {
    pub fn new(root: impl Into<Node>) -> Self {
        Self {
            root: root.into(),
            laid_out: false,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Run the layout pass over the whole tree.
    pub fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        self.laid_out = false;
        let size = self.root.layout(ctx, constraints)?;
        self.laid_out = true;
        Ok(size)
    }

    /// Draw the tree with its root at `origin`.
    pub fn draw(&self, ctx: &mut DrawContext<'_>, origin: Point) -> LayoutResult<()> {
        if !self.laid_out {
            warn!(root = self.root.name(), "draw requested on a tree that is not laid out");
            return Err(LayoutError::NotLaidOut);
        }
        self.root.draw(ctx, &Frame::new(origin, self.root.size()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MonospaceMetrics;
    use crate::layout::container::BoxNode;
    use crate::layout::length::MainAxisAlignment;
    use crate::layout::column::Column;
    use crate::layout::text::Text;
    use crate::recorder::RecordingBackend;

    #[test]
    fn test_draw_before_layout_is_refused() {
        let tree = LayoutTree::new(Text::new("hello"));
        let mut backend = RecordingBackend::new();
        let mut ctx = DrawContext::new(&mut backend, Point::ORIGIN);
        assert!(matches!(tree.draw(&mut ctx, Point::ORIGIN), Err(LayoutError::NotLaidOut)));
        assert_eq!(backend.commands().count(), 0);
    }

    #[test]
    fn test_failed_layout_clears_flag() {
        let metrics = MonospaceMetrics::default();
        let ctx = LayoutContext::new(&metrics);
        let mut tree = LayoutTree::new(
            Column::new()
                .main_axis_alignment(MainAxisAlignment::Start)
                .push(BoxNode::new().height(80.0))
                .push(BoxNode::new().height(80.0)),
        );
        assert!(tree.layout(ctx, BoxConstraints::loose(100.0, 200.0)).is_ok());
        assert!(tree.is_laid_out());

        let err = tree.layout(ctx, BoxConstraints::loose(100.0, 100.0)).unwrap_err();
        assert!(err.is_overflow());
        assert!(!tree.is_laid_out());
    }

    #[test]
    fn test_draw_after_layout() {
        let metrics = MonospaceMetrics::default();
        let mut tree = LayoutTree::new(Text::new("hello"));
        tree.layout(LayoutContext::new(&metrics), BoxConstraints::loose(100.0, 100.0))
            .unwrap();
        let mut backend = RecordingBackend::new();
        let mut ctx = DrawContext::new(&mut backend, Point::ORIGIN);
        tree.draw(&mut ctx, Point::new(5.0, 5.0)).unwrap();
        assert_eq!(backend.texts().collect::<Vec<_>>(), vec!["hello"]);
    }
}
