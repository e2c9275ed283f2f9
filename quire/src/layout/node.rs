//! Layout nodes - the closed set of node kinds.
//!
//! A [`Node`] is one position in the layout tree: a [`NodeKind`] plus the
//! transient size and offset written during the layout pass and read during
//! the draw pass. Containers own their children exclusively and talk to
//! them only through `Node`, so adding a kind forces every dispatch below
//! to handle it.

use tracing::trace;

use crate::error::LayoutResult;
use crate::primitives::{Point, Rect, Size};

use super::column::Column;
use super::constraints::BoxConstraints;
use super::container::{BoxNode, Container};
use super::context::{DrawContext, Frame, LayoutContext};
use super::elements::Image;
use super::modifiers::{Align, Center, Divider, Expanded, Padding};
use super::multipage::MultiPage;
use super::row::Row;
use super::table::{MultiPageTable, Table};
use super::text::Text;

// =========================================================================
// NodeKind
// =========================================================================

/// Every kind of layout node.
#[derive(Debug)]
pub enum NodeKind {
    Box(BoxNode),
    Container(Container),
    Row(Row),
    Column(Column),
    Text(Text),
    Image(Image),
    Table(Table),
    MultiPageTable(MultiPageTable),
    MultiPage(MultiPage),
    Padding(Padding),
    Align(Align),
    Expanded(Expanded),
    Center(Center),
    Divider(Divider),
}

impl NodeKind {
    /// Short name used in tracing output and overflow errors.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Box(_) => "Box",
            NodeKind::Container(_) => "Container",
            NodeKind::Row(_) => "Row",
            NodeKind::Column(_) => "Column",
            NodeKind::Text(_) => "Text",
            NodeKind::Image(_) => "Image",
            NodeKind::Table(_) => "Table",
            NodeKind::MultiPageTable(_) => "MultiPageTable",
            NodeKind::MultiPage(_) => "MultiPage",
            NodeKind::Padding(_) => "Padding",
            NodeKind::Align(_) => "Align",
            NodeKind::Expanded(_) => "Expanded",
            NodeKind::Center(_) => "Center",
            NodeKind::Divider(_) => "Divider",
        }
    }
}

// =========================================================================
// Node
// =========================================================================

/// A node in the layout tree.
#[derive(Debug)]
pub struct Node {
    pub(crate) kind: NodeKind,
    /// Size returned by the last layout call.
    pub(crate) size: Size,
    /// Offset inside the parent, set by the parent during layout.
    pub(crate) offset: Point,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            size: Size::ZERO,
            offset: Point::ORIGIN,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Size from the last layout pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Offset inside the parent from the last layout pass.
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[inline]
    pub(crate) fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Whether this node may continue onto following pages and takes part
    /// in page-break bookkeeping.
    pub fn is_page_spanning(&self) -> bool {
        matches!(self.kind, NodeKind::MultiPageTable(_))
    }

    /// Flex weight, for nodes that share leftover space in a Row or Column.
    pub fn flex(&self) -> Option<u32> {
        match &self.kind {
            NodeKind::Expanded(e) => Some(e.weight()),
            _ => None,
        }
    }

    /// Lay out this node and store the resulting size.
    pub fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let size = match &mut self.kind {
            NodeKind::Box(b) => b.layout(ctx, constraints)?,
            NodeKind::Container(c) => c.layout(ctx, constraints)?,
            NodeKind::Row(r) => r.layout(ctx, constraints)?,
            NodeKind::Column(c) => c.layout(ctx, constraints)?,
            NodeKind::Text(t) => t.layout(ctx, constraints),
            NodeKind::Image(i) => i.layout(constraints),
            NodeKind::Table(t) => t.layout(ctx, constraints)?,
            NodeKind::MultiPageTable(t) => t.layout(ctx, constraints)?,
            NodeKind::MultiPage(m) => m.layout(ctx, constraints)?,
            NodeKind::Padding(p) => p.layout(ctx, constraints)?,
            NodeKind::Align(a) => a.layout(ctx, constraints)?,
            NodeKind::Expanded(e) => e.layout(ctx, constraints)?,
            NodeKind::Center(c) => c.layout(ctx, constraints)?,
            NodeKind::Divider(d) => d.layout(ctx),
        };
        trace!(
            node = self.kind.name(),
            max_width = constraints.max_width,
            max_height = constraints.max_height,
            width = size.width,
            height = size.height,
            "layout"
        );
        self.size = size;
        Ok(size)
    }

    /// Draw this node inside its parent's frame.
    pub fn draw(&self, ctx: &mut DrawContext<'_>, parent: &Frame) {
        let origin = parent.origin.resolve(self.offset);
        let bounds = Rect::from_origin_size(origin, self.size);
        match &self.kind {
            NodeKind::Box(b) => b.draw(ctx, bounds),
            NodeKind::Container(c) => c.draw(ctx, bounds),
            NodeKind::Row(r) => r.draw(ctx, bounds),
            NodeKind::Column(c) => c.draw(ctx, bounds),
            NodeKind::Text(t) => t.draw(ctx, bounds),
            NodeKind::Image(i) => i.draw(ctx, bounds),
            NodeKind::Table(t) => t.draw(ctx, bounds),
            NodeKind::MultiPageTable(t) => t.draw(ctx, bounds),
            NodeKind::MultiPage(m) => m.draw(ctx, bounds),
            NodeKind::Padding(p) => p.draw(ctx, bounds),
            NodeKind::Align(a) => a.draw(ctx, self.size, parent),
            NodeKind::Expanded(e) => e.draw(ctx, bounds),
            NodeKind::Center(c) => c.draw(ctx, bounds),
            NodeKind::Divider(d) => d.draw(ctx, origin, parent),
        }
    }
}

// =========================================================================
// Conversions
// =========================================================================

macro_rules! impl_from_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Node::new(NodeKind::$variant(v))
                }
            }
        )*
    };
}

impl_from_kind! {
    BoxNode => Box,
    Container => Container,
    Row => Row,
    Column => Column,
    Text => Text,
    Image => Image,
    Table => Table,
    MultiPageTable => MultiPageTable,
    MultiPage => MultiPage,
    Padding => Padding,
    Align => Align,
    Expanded => Expanded,
    Center => Center,
    Divider => Divider,
}

// =========================================================================
// Widget trait - reusable composites
// =========================================================================

/// A reusable composite that expands into a tree of built-in nodes.
///
/// ```ignore
/// struct Caption(String);
///
/// impl Widget for Caption {
///     fn build(self) -> Node {
///         Padding::new(EdgeInset::all(4.0), Text::new(self.0)).into()
///     }
/// }
///
/// let column = Column::new().push(Caption("Totals".into()));
/// ```
pub trait Widget {
    /// Consume this widget and produce a layout node.
    fn build(self) -> Node;
}

/// Blanket impl: any `Widget` can be passed where a child is expected.
impl<W: Widget> From<W> for Node {
    #[inline]
    fn from(w: W) -> Node {
        w.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MonospaceMetrics;
    use crate::layout::length::{EdgeInset, Length};
    use crate::layout::table::{TableColumn, TableRow};

    struct Spacer(f32);

    impl Widget for Spacer {
        fn build(self) -> Node {
            BoxNode::new().width(Length::Exact(self.0)).into()
        }
    }

    #[test]
    fn test_widget_builds_into_node() {
        let node: Node = Spacer(12.0).into();
        assert_eq!(node.name(), "Box");
    }

    #[test]
    fn test_layout_stores_size() {
        let metrics = MonospaceMetrics::default();
        let ctx = LayoutContext::new(&metrics);
        let mut node: Node = Padding::new(EdgeInset::all(2.0), Spacer(10.0)).into();
        let size = node.layout(ctx, BoxConstraints::loose(100.0, 100.0)).unwrap();
        assert_eq!(size, Size::new(14.0, 4.0));
        assert_eq!(node.size(), size);
    }

    #[test]
    fn test_page_spanning_kinds() {
        let table: Node = MultiPageTable::new(vec![TableColumn::new()])
            .row(TableRow::new(vec![]))
            .into();
        assert!(table.is_page_spanning());
        let text: Node = Text::new("x").into();
        assert!(!text.is_page_spanning());
        assert_eq!(Node::from(Expanded::new(Text::new("x")).flex(3)).flex(), Some(3));
    }
}
