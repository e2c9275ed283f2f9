//! Box constraints for the layout pass.
//!
//! Constraints flow down the tree, specifying the bounds a node may occupy.
//! Only the max bounds are ever enforced. The min fields are carried for
//! shape compatibility and are zero at every call site.

use crate::primitives::Size;
use super::length::EdgeInset;

/// Bounds offered by a parent to a child during layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxConstraints {
    /// Always zero; not enforced.
    pub min_width: f32,
    /// Always zero; not enforced.
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl BoxConstraints {
    /// Loose constraints with maximum bounds.
    #[inline]
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            max_width,
            max_height,
        }
    }

    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self::loose(size.width, size.height)
    }

    /// The maximum bounds as a size.
    #[inline]
    pub fn biggest(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Shrink the max bounds by an inset, never below zero.
    #[inline]
    pub fn deflate(&self, inset: &EdgeInset) -> Self {
        Self::loose(
            (self.max_width - inset.horizontal()).max(0.0),
            (self.max_height - inset.vertical()).max(0.0),
        )
    }

    /// Clamp a size into `[0, max]` on both axes.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        debug_assert!(!size.width.is_nan(), "NaN width in layout");
        debug_assert!(!size.height.is_nan(), "NaN height in layout");
        Size::new(
            size.width.clamp(0.0, self.max_width.max(0.0)),
            size.height.clamp(0.0, self.max_height.max(0.0)),
        )
    }
}
