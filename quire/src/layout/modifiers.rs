//! Single-child modifiers and the divider rule.
//!
//! Thin layout transforms: [`Padding`] insets, [`Align`] positions its child
//! inside the parent's client area, [`Expanded`] claims a weighted share of
//! a flex container, [`Center`] centers within the offer, and [`Divider`]
//! draws a rule across its parent.

use crate::error::LayoutResult;
use crate::primitives::{Axis, Color, Point, Rect, Size};

use super::constraints::BoxConstraints;
use super::context::{DrawContext, Frame, LayoutContext, ParentKind};
use super::length::{Alignment, EdgeInset};
use super::node::Node;

// =========================================================================
// Padding
// =========================================================================

/// Insets its child by a fixed amount on each edge.
#[derive(Debug)]
pub struct Padding {
    child: Box<Node>,
    padding: EdgeInset,
}

impl Padding {
    pub fn new(padding: EdgeInset, child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
            padding,
        }
    }

    pub fn get_child(&self) -> &Node {
        &self.child
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let inner = constraints.deflate(&self.padding);
        let child_size = self.child.layout(ctx.child_of(ParentKind::Other), inner)?;

        // An axis the child fills keeps the whole offer.
        let mut size = constraints.biggest();
        if child_size.width < inner.max_width {
            size.width = child_size.width + self.padding.horizontal();
        }
        if child_size.height < inner.max_height {
            size.height = child_size.height + self.padding.vertical();
        }
        self.child.set_offset(Point::new(self.padding.left, self.padding.top));
        Ok(size)
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        let client = Rect::new(
            bounds.x + self.padding.left,
            bounds.y + self.padding.top,
            (bounds.width - self.padding.horizontal()).max(0.0),
            (bounds.height - self.padding.vertical()).max(0.0),
        );
        let frame = Frame::new(bounds.origin(), bounds.size()).with_client(client);
        self.child.draw(ctx, &frame);
    }
}

// =========================================================================
// Align
// =========================================================================

/// Places its child inside the parent's client rectangle.
///
/// Layout only measures the child; the position is resolved at draw time
/// from the parent frame.
#[derive(Debug)]
pub struct Align {
    child: Box<Node>,
    alignment: Alignment,
}

impl Align {
    pub fn new(alignment: Alignment, child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
            alignment,
        }
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let size = self.child.layout(ctx.child_of(ParentKind::Other), constraints)?;
        self.child.set_offset(Point::ORIGIN);
        Ok(size)
    }

    /// Absolute origin for a node of `size` inside `client`.
    pub fn position(alignment: Alignment, client: Rect, size: Size) -> Point {
        let free_x = client.width - size.width;
        let free_y = client.height - size.height;
        let (dx, dy) = match alignment {
            Alignment::Left => (0.0, 0.0),
            Alignment::TopCenter => (free_x / 2.0, 0.0),
            Alignment::Right => (free_x, 0.0),
            Alignment::LeftMiddle => (0.0, free_y / 2.0),
            Alignment::RightMiddle => (free_x, free_y / 2.0),
            Alignment::BottomCenter => (free_x / 2.0, free_y),
            Alignment::Center => (free_x / 2.0, free_y / 2.0),
        };
        Point::new(client.x + dx, client.y + dy)
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, size: Size, parent: &Frame) {
        let origin = Self::position(self.alignment, parent.client, size);
        self.child.draw(ctx, &Frame::new(origin, size));
    }
}

// =========================================================================
// Expanded
// =========================================================================

/// Takes a weighted share of the space a Row or Column has left after its
/// plain children.
#[derive(Debug)]
pub struct Expanded {
    child: Box<Node>,
    flex: u32,
}

impl Expanded {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
            flex: 1,
        }
    }

    pub fn flex(mut self, flex: u32) -> Self {
        self.flex = flex;
        self
    }

    pub fn weight(&self) -> u32 {
        self.flex
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let child_size = self.child.layout(ctx.child_of(ParentKind::Other), constraints)?;
        self.child.set_offset(Point::ORIGIN);
        Ok(match ctx.parent {
            ParentKind::Column => Size::new(child_size.width, constraints.max_height),
            _ => Size::new(constraints.max_width, child_size.height),
        })
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        self.child.draw(ctx, &Frame::new(bounds.origin(), bounds.size()));
    }
}

// =========================================================================
// Center
// =========================================================================

/// Centers its child within the offered maximum.
#[derive(Debug)]
pub struct Center {
    child: Box<Node>,
}

impl Center {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
        }
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>, constraints: BoxConstraints) -> LayoutResult<Size> {
        let size = self.child.layout(ctx.child_of(ParentKind::Other), constraints)?;
        self.child.set_offset(Point::new(
            (constraints.max_width - size.width) / 2.0,
            (constraints.max_height - size.height) / 2.0,
        ));
        Ok(size)
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        self.child.draw(ctx, &Frame::new(bounds.origin(), bounds.size()));
    }
}

// =========================================================================
// Divider
// =========================================================================

/// A rule across the full width (or height) of the parent.
///
/// Without an explicit axis it is vertical inside a Row and horizontal
/// everywhere else.
#[derive(Debug)]
pub struct Divider {
    axis: Option<Axis>,
    thickness: f32,
    color: Color,
    // Layout result
    resolved_axis: Axis,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            axis: None,
            thickness: 2.0,
            color: Color::GREY,
            resolved_axis: Axis::Horizontal,
        }
    }
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn layout(&mut self, ctx: LayoutContext<'_>) -> Size {
        self.resolved_axis = self.axis.unwrap_or(match ctx.parent {
            ParentKind::Row => Axis::Vertical,
            _ => Axis::Horizontal,
        });
        match self.resolved_axis {
            Axis::Horizontal => Size::new(0.0, self.thickness),
            Axis::Vertical => Size::new(self.thickness, 0.0),
        }
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, origin: Point, parent: &Frame) {
        let half = self.thickness / 2.0;
        match self.resolved_axis {
            Axis::Horizontal if parent.size.width > 0.0 => {
                let y = origin.y + half;
                ctx.backend.draw_line(
                    Point::new(parent.origin.x, y),
                    Point::new(parent.origin.x + parent.size.width, y),
                    self.thickness,
                    self.color,
                );
            }
            Axis::Vertical if parent.size.height > 0.0 => {
                let x = origin.x + half;
                ctx.backend.draw_line(
                    Point::new(x, parent.origin.y),
                    Point::new(x, parent.origin.y + parent.size.height),
                    self.thickness,
                    self.color,
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MonospaceMetrics;
    use crate::layout::column::Column;
    use crate::layout::container::{Container, sized_box};
    use crate::layout::length::MainAxisAlignment;
    use crate::layout::node::NodeKind;
    use crate::recorder::{DrawCommand, RecordingBackend};

    fn layout(node: &mut Node, w: f32, h: f32) -> Size {
        let metrics = MonospaceMetrics::default();
        node.layout(LayoutContext::new(&metrics), BoxConstraints::loose(w, h))
            .unwrap()
    }

    fn draw(node: &Node, frame: Frame) -> Vec<DrawCommand> {
        let mut backend = RecordingBackend::new();
        let mut ctx = DrawContext::new(&mut backend, Point::ORIGIN);
        node.draw(&mut ctx, &frame);
        backend.commands().cloned().collect()
    }

    // =========================================================================
    // Padding
    // =========================================================================

    #[test]
    fn test_padding_hugs_small_child() {
        let mut node: Node = Padding::new(EdgeInset::new(1.0, 2.0, 3.0, 4.0), sized_box(10.0, 10.0)).into();
        assert_eq!(layout(&mut node, 100.0, 100.0), Size::new(16.0, 14.0));
        match node.kind() {
            NodeKind::Padding(p) => assert_eq!(p.get_child().offset(), Point::new(4.0, 1.0)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_padding_keeps_offer_on_filled_axis() {
        let mut node: Node = Padding::new(EdgeInset::all(5.0), sized_box(crate::layout::length::Length::Fill, 10.0)).into();
        assert_eq!(layout(&mut node, 100.0, 100.0), Size::new(100.0, 20.0));
    }

    // =========================================================================
    // Align and Center
    // =========================================================================

    #[test]
    fn test_align_positions() {
        let client = Rect::new(10.0, 20.0, 100.0, 50.0);
        let size = Size::new(20.0, 10.0);
        assert_eq!(Align::position(Alignment::Left, client, size), Point::new(10.0, 20.0));
        assert_eq!(Align::position(Alignment::TopCenter, client, size), Point::new(50.0, 20.0));
        assert_eq!(Align::position(Alignment::Right, client, size), Point::new(90.0, 20.0));
        assert_eq!(Align::position(Alignment::LeftMiddle, client, size), Point::new(10.0, 40.0));
        assert_eq!(Align::position(Alignment::RightMiddle, client, size), Point::new(90.0, 40.0));
        assert_eq!(Align::position(Alignment::BottomCenter, client, size), Point::new(50.0, 60.0));
        assert_eq!(Align::position(Alignment::Center, client, size), Point::new(50.0, 40.0));
    }

    #[test]
    fn test_align_uses_parent_client_area() {
        let mut node: Node = Container::new()
            .width(100.0)
            .height(40.0)
            .border(crate::layout::base::Border::all(crate::layout::base::BorderSide::new(5.0, Color::BLACK)))
            .child(Align::new(Alignment::Right, Container::new().width(10.0).height(10.0).color(Color::RED)))
            .into();
        layout(&mut node, 200.0, 200.0);
        let cmds = draw(&node, Frame::new(Point::ORIGIN, Size::new(200.0, 200.0)));
        let red = cmds.iter().find_map(|c| match c {
            DrawCommand::FillRect { origin, color: Color::RED, .. } => Some(*origin),
            _ => None,
        });
        // Client area is x 5..95, y 5..35.
        assert_eq!(red, Some(Point::new(85.0, 5.0)));
    }

    #[test]
    fn test_center_offsets_child_in_offer() {
        let mut node: Node = Center::new(sized_box(20.0, 10.0)).into();
        assert_eq!(layout(&mut node, 100.0, 50.0), Size::new(20.0, 10.0));
        match node.kind() {
            NodeKind::Center(c) => assert_eq!(c.child.offset(), Point::new(40.0, 20.0)),
            _ => unreachable!(),
        }
    }

    // =========================================================================
    // Expanded and Divider
    // =========================================================================

    #[test]
    fn test_expanded_outside_column_fills_width() {
        let mut node: Node = Expanded::new(sized_box(10.0, 10.0)).into();
        assert_eq!(layout(&mut node, 80.0, 60.0), Size::new(80.0, 10.0));
    }

    #[test]
    fn test_divider_in_column_draws_full_width() {
        let mut node: Node = Column::new()
            .main_axis_alignment(MainAxisAlignment::Start)
            .push(sized_box(50.0, 10.0))
            .push(Divider::new().thickness(1.0).color(Color::BLACK))
            .into();
        assert_eq!(layout(&mut node, 100.0, 100.0), Size::new(50.0, 100.0));
        let cmds = draw(&node, Frame::new(Point::new(5.0, 5.0), Size::new(100.0, 100.0)));
        assert_eq!(
            cmds,
            vec![DrawCommand::Line {
                from: Point::new(5.0, 15.5),
                to: Point::new(55.0, 15.5),
                stroke_width: 1.0,
                color: Color::BLACK,
            }]
        );
    }

    #[test]
    fn test_divider_explicit_axis() {
        let mut node: Node = Divider::new().axis(Axis::Vertical).thickness(3.0).into();
        assert_eq!(layout(&mut node, 100.0, 100.0), Size::new(3.0, 0.0));
    }
}
