//! MultiPage - vertical reflow of children across physical pages.
//!
//! Children stack top to bottom. A page-spanning child (a
//! [`MultiPageTable`](super::table::MultiPageTable)) is told where on the
//! current page it starts and may run onto following pages; afterwards the
//! page cursor is `(start + height) % page_height`. Ordinary children only
//! consume what is left of the current page and fail with an overflow when
//! nothing is left. They never cause a page break on their own.

use tracing::debug;

use crate::error::{LayoutError, LayoutResult};
use crate::primitives::{Point, Rect, Size};

use super::constraints::BoxConstraints;
use super::context::{DrawContext, Frame, LayoutContext, ParentKind};
use super::flex::EPS;
use super::node::Node;

/// Page cursor after a page-spanning child of `height` that started at
/// `start`. Landing exactly on a boundary gives 0, the top of the next page.
pub fn next_page_cursor(start: f32, height: f32, page_height: f32) -> f32 {
    let next = (start + height) % page_height;
    if next <= EPS || page_height - next <= EPS {
        0.0
    } else {
        next
    }
}

/// A vertical sequence of children that may span several pages.
#[derive(Debug, Default)]
pub struct MultiPage {
    children: Vec<Node>,
    // Layout results
    page_start: f32,
    breaks_before: Vec<bool>,
}

impl MultiPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn get_children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let page_height = ctx.page_height.unwrap_or(constraints.max_height);
        let child_ctx = ctx.child_of(ParentKind::MultiPage);
        let count = self.children.len();

        self.page_start = ctx.page_offset;
        let mut cursor = ctx.page_offset;
        let mut remaining = page_height - cursor;
        let mut total = 0.0;
        self.breaks_before = vec![false; count];

        for i in 0..count {
            let child = &mut self.children[i];
            let size = if child.is_page_spanning() {
                let size = child.layout(child_ctx.at_page_offset(cursor), constraints)?;
                child.set_offset(Point::new(0.0, cursor));
                let next = next_page_cursor(cursor, size.height, page_height);
                let on_boundary = next == 0.0 && size.height > EPS;
                if on_boundary && i + 1 < count {
                    self.breaks_before[i + 1] = true;
                    debug!(child = i + 1, "multipage child starts a fresh page");
                }
                if cursor + size.height >= page_height - EPS {
                    debug!(from = cursor, to = next, "multipage crossed a page boundary");
                }
                cursor = next;
                remaining = page_height - next;
                size
            } else {
                if remaining <= EPS {
                    return Err(LayoutError::overflow(
                        "MultiPage",
                        format!("no room left on the page for {}", child.name()),
                    ));
                }
                let offer = BoxConstraints::loose(constraints.max_width, remaining);
                let size = child.layout(child_ctx.at_page_offset(cursor), offer)?;
                child.set_offset(Point::new(0.0, cursor));
                cursor += size.height;
                remaining -= size.height;
                size
            };
            total += size.height;
        }

        Ok(Size::new(constraints.max_width, total))
    }

    /// Child offsets are page cursors, so children are placed relative to
    /// the top of the page they land on. After any page break the origin
    /// moves to the anchor of the new page.
    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        let mut origin = Point::new(bounds.x, bounds.y - self.page_start);
        for (child, brk) in self.children.iter().zip(&self.breaks_before) {
            if *brk {
                origin = ctx.break_page();
            }
            let breaks = ctx.page_breaks();
            child.draw(ctx, &Frame::new(origin, bounds.size()));
            if ctx.page_breaks() != breaks {
                origin = ctx.anchor();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MonospaceMetrics;
    use crate::layout::container::sized_box;
    use crate::layout::node::NodeKind;
    use crate::layout::table::{Cell, MultiPageTable, TableColumn, TableRow};
    use crate::layout::text::Text;
    use crate::recorder::{DrawCommand, RecordingBackend};

    fn table(rows: usize, height: f32) -> MultiPageTable {
        MultiPageTable::new(vec![TableColumn::new()]).rows(
            (0..rows).map(|i| TableRow::new(vec![Cell::new(Text::new(format!("r{i}")))]).height(height)),
        )
    }

    #[test]
    fn test_next_page_cursor() {
        assert_eq!(next_page_cursor(20.0, 50.0, 100.0), 70.0);
        assert_eq!(next_page_cursor(20.0, 130.0, 100.0), 50.0);
        // An exact multiple lands at the top of the next page.
        assert_eq!(next_page_cursor(50.0, 150.0, 100.0), 0.0);
    }

    #[test]
    fn test_plain_children_stack() {
        let metrics = MonospaceMetrics::default();
        let mut node: Node = MultiPage::new()
            .push(sized_box(50.0, 30.0))
            .push(sized_box(50.0, 20.0))
            .into();
        let size = node
            .layout(LayoutContext::new(&metrics), BoxConstraints::loose(100.0, 100.0))
            .unwrap();
        assert_eq!(size, Size::new(100.0, 50.0));
        match node.kind() {
            NodeKind::MultiPage(m) => {
                assert_eq!(m.get_children()[1].offset(), Point::new(0.0, 30.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_plain_child_with_no_room_overflows() {
        let metrics = MonospaceMetrics::default();
        let mut node: Node = MultiPage::new()
            .push(sized_box(50.0, 100.0))
            .push(sized_box(50.0, 10.0))
            .into();
        let err = node
            .layout(LayoutContext::new(&metrics), BoxConstraints::loose(100.0, 100.0))
            .unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_spanning_child_moves_cursor() {
        let metrics = MonospaceMetrics::default();
        let ctx = LayoutContext::new(&metrics).with_page_height(100.0);
        let mut node: Node = MultiPage::new()
            .push(sized_box(50.0, 20.0))
            .push(table(5, 30.0))
            .push(sized_box(50.0, 10.0))
            .into();
        node.layout(ctx, BoxConstraints::loose(100.0, 100.0)).unwrap();
        match node.kind() {
            NodeKind::MultiPage(m) => {
                let children = m.get_children();
                assert_eq!(children[1].offset(), Point::new(0.0, 20.0));
                // Page one: rows 0-1 (20..80), 20 charged; page two: rows 2-4.
                assert_eq!(children[1].size().height, 170.0);
                assert_eq!(children[2].offset(), Point::new(0.0, 90.0));
            }
            _ => unreachable!(),
        }

        let mut backend = RecordingBackend::new();
        let mut dctx = DrawContext::new(&mut backend, Point::new(5.0, 5.0));
        node.draw(&mut dctx, &Frame::new(Point::new(5.0, 5.0), Size::new(100.0, 100.0)));
        assert_eq!(backend.page_count(), 2);
        let on_second: Vec<_> = backend.pages()[1]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { origin, text, .. } => Some((text.clone(), origin.y)),
                _ => None,
            })
            .collect();
        // Text centered in the 29pt cell interior: baseline = 5 + row top + 9.5 + 7.5.
        assert_eq!(
            on_second,
            vec![("r2".to_string(), 22.0), ("r3".to_string(), 52.0), ("r4".to_string(), 82.0)]
        );
    }

    #[test]
    fn test_child_after_exact_boundary_starts_fresh_page() {
        let metrics = MonospaceMetrics::default();
        let ctx = LayoutContext::new(&metrics).with_page_height(100.0);
        let mut node: Node = MultiPage::new()
            .push(table(4, 25.0))
            .push(sized_box(50.0, 10.0))
            .into();
        node.layout(ctx, BoxConstraints::loose(100.0, 100.0)).unwrap();
        match node.kind() {
            NodeKind::MultiPage(m) => {
                assert_eq!(m.get_children()[1].offset(), Point::ORIGIN);
            }
            _ => unreachable!(),
        }

        let mut backend = RecordingBackend::new();
        let mut dctx = DrawContext::new(&mut backend, Point::ORIGIN);
        node.draw(&mut dctx, &Frame::new(Point::ORIGIN, Size::new(100.0, 100.0)));
        assert_eq!(backend.page_count(), 2);
    }
}
