//! Shared flex distribution logic for Column and Row.
//!
//! Axis-agnostic: Column runs it with a vertical main axis, Row with a
//! horizontal one. Plain children are laid out first against the shrinking
//! main-axis budget, then Expanded children split what is left by weight,
//! then leftover space is distributed according to the main-axis alignment.

use crate::error::{LayoutError, LayoutResult};
use crate::primitives::{Axis, Point, Rect, Size};

use super::constraints::BoxConstraints;
use super::context::{DrawContext, Frame, LayoutContext, ParentKind};
use super::length::{CrossAxisAlignment, MainAxisAlignment};
use super::node::Node;

/// Tolerance for floating point budget comparisons.
pub(crate) const EPS: f32 = 1e-3;

#[inline]
fn main_of(size: Size, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => size.width,
        Axis::Vertical => size.height,
    }
}

#[inline]
fn cross_of(size: Size, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => size.height,
        Axis::Vertical => size.width,
    }
}

#[inline]
fn size_on(axis: Axis, main: f32, cross: f32) -> Size {
    match axis {
        Axis::Horizontal => Size::new(main, cross),
        Axis::Vertical => Size::new(cross, main),
    }
}

#[inline]
fn point_on(axis: Axis, main: f32, cross: f32) -> Point {
    match axis {
        Axis::Horizontal => Point::new(main, cross),
        Axis::Vertical => Point::new(cross, main),
    }
}

/// Leading space and inter-child gap for `leftover` space and `n` children.
pub(crate) fn distribute_leftover(alignment: MainAxisAlignment, leftover: f32, n: usize) -> (f32, f32) {
    match alignment {
        MainAxisAlignment::Start => (0.0, 0.0),
        MainAxisAlignment::End => (leftover, 0.0),
        MainAxisAlignment::Center => (leftover / 2.0, 0.0),
        MainAxisAlignment::SpaceAround => {
            let gap = leftover / (n + 1) as f32;
            (gap, gap)
        }
        // With two or fewer children the whole leftover is the single gap.
        MainAxisAlignment::SpaceBetween => {
            let gap = if n > 2 { leftover / (n - 1) as f32 } else { leftover };
            (0.0, gap)
        }
    }
}

/// Children and alignment of a flex container.
#[derive(Debug, Default)]
pub(crate) struct FlexLayout {
    pub children: Vec<Node>,
    pub main_axis_alignment: MainAxisAlignment,
    pub cross_axis_alignment: CrossAxisAlignment,
}

impl FlexLayout {
    pub fn layout(
        &mut self,
        axis: Axis,
        ctx: LayoutContext<'_>,
        constraints: BoxConstraints,
    ) -> LayoutResult<Size> {
        let (node, parent) = match axis {
            Axis::Horizontal => ("Row", ParentKind::Row),
            Axis::Vertical => ("Column", ParentKind::Column),
        };
        let max_main = main_of(constraints.biggest(), axis);
        let max_cross = cross_of(constraints.biggest(), axis);
        if self.children.is_empty() {
            return Ok(size_on(axis, max_main, 0.0));
        }

        let child_ctx = ctx.child_of(parent);
        let offer = |main: f32| BoxConstraints::from_size(size_on(axis, main.max(0.0), max_cross));
        let total_flex: u32 = self.children.iter().filter_map(Node::flex).sum();
        let has_flex = self.children.iter().any(|c| c.flex().is_some());

        let mut remaining = max_main;
        let mut cross_size = 0.0f32;

        // Plain children against the shrinking budget.
        for child in self.children.iter_mut().filter(|c| c.flex().is_none()) {
            let size = child.layout(child_ctx, offer(remaining))?;
            let (main, cross) = (main_of(size, axis), cross_of(size, axis));
            if remaining <= 0.0 && size.is_nonzero() {
                return Err(LayoutError::overflow(
                    node,
                    format!("no space left for {}", child.name()),
                ));
            }
            if main > remaining + EPS || cross > max_cross + EPS {
                return Err(LayoutError::overflow(
                    node,
                    format!(
                        "{} needs {main}x{cross} (main x cross) but {remaining}x{max_cross} is available",
                        child.name()
                    ),
                ));
            }
            cross_size = cross_size.max(cross);
            remaining -= main;
        }

        // Expanded children share what is left by weight.
        if has_flex {
            if total_flex == 0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{node} has expanded children with a total flex of zero"
                )));
            }
            let share = remaining.max(0.0) / total_flex as f32;
            for child in self.children.iter_mut() {
                let Some(weight) = child.flex() else { continue };
                let main_offer = share * weight as f32;
                let size = child.layout(child_ctx, offer(main_offer))?;
                let (main, cross) = (main_of(size, axis), cross_of(size, axis));
                if main > remaining + EPS || cross > max_cross + EPS {
                    return Err(LayoutError::overflow(
                        node,
                        format!("expanded {} needs {main}x{cross} (main x cross)", child.name()),
                    ));
                }
                cross_size = cross_size.max(cross);
                remaining -= main_offer;
            }
        }

        let leftover = remaining.max(0.0);
        let (lead, gap) = distribute_leftover(self.main_axis_alignment, leftover, self.children.len());
        let mut cursor = lead;
        for (i, child) in self.children.iter_mut().enumerate() {
            if i > 0 {
                cursor += gap;
            }
            let child_cross = cross_of(child.size(), axis);
            let cross_offset = match self.cross_axis_alignment {
                CrossAxisAlignment::Start => 0.0,
                CrossAxisAlignment::Center => (cross_size - child_cross) / 2.0,
                CrossAxisAlignment::End => cross_size - child_cross,
            };
            child.set_offset(point_on(axis, cursor, cross_offset));
            cursor += main_of(child.size(), axis);
        }

        Ok(size_on(axis, max_main, cross_size))
    }

    pub fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        let frame = Frame::new(bounds.origin(), bounds.size());
        for child in &self.children {
            child.draw(ctx, &frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute_start_end_center() {
        assert_eq!(distribute_leftover(MainAxisAlignment::Start, 30.0, 3), (0.0, 0.0));
        assert_eq!(distribute_leftover(MainAxisAlignment::End, 30.0, 3), (30.0, 0.0));
        assert_eq!(distribute_leftover(MainAxisAlignment::Center, 30.0, 3), (15.0, 0.0));
    }

    #[test]
    fn test_distribute_space_around() {
        assert_eq!(distribute_leftover(MainAxisAlignment::SpaceAround, 40.0, 3), (10.0, 10.0));
    }

    #[test]
    fn test_distribute_space_between() {
        assert_eq!(distribute_leftover(MainAxisAlignment::SpaceBetween, 70.0, 3), (0.0, 35.0));
        // Two or fewer children use the whole leftover as the gap.
        assert_eq!(distribute_leftover(MainAxisAlignment::SpaceBetween, 70.0, 2), (0.0, 70.0));
        assert_eq!(distribute_leftover(MainAxisAlignment::SpaceBetween, 70.0, 1), (0.0, 70.0));
    }

    #[test]
    fn test_axis_helpers() {
        let s = Size::new(3.0, 4.0);
        assert_eq!(main_of(s, Axis::Vertical), 4.0);
        assert_eq!(cross_of(s, Axis::Vertical), 3.0);
        assert_eq!(size_on(Axis::Horizontal, 1.0, 2.0), Size::new(1.0, 2.0));
        assert_eq!(point_on(Axis::Vertical, 1.0, 2.0), Point::new(2.0, 1.0));
    }
}
