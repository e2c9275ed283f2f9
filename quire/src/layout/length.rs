//! Layout sizing types.
//!
//! Core types for specifying node dimensions, insets and alignment.

/// Sizing mode for one axis of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Size to content.
    #[default]
    Intrinsic,
    /// Take the full offered maximum.
    Fill,
    /// A fixed size in points, clamped to the offered maximum.
    Exact(f32),
}

impl Length {
    /// Resolve against an offered maximum.
    ///
    /// `Fill`, or an exact value larger than `max`, yields `max`.
    /// `Intrinsic` yields `None`.
    #[inline]
    pub fn resolve(&self, max: f32) -> Option<f32> {
        match *self {
            Length::Intrinsic => None,
            Length::Fill => Some(max),
            Length::Exact(v) => Some(v.min(max)),
        }
    }
}

impl From<f32> for Length {
    fn from(v: f32) -> Self {
        Length::Exact(v)
    }
}

/// Alignment on the main axis (direction of flow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MainAxisAlignment {
    /// Pack children at the start.
    Start,
    /// Pack children at the end.
    End,
    /// Center children.
    #[default]
    Center,
    /// Equal gaps around every child, including both ends.
    SpaceAround,
    /// Equal gaps between children.
    SpaceBetween,
}

/// Alignment on the cross axis (perpendicular to flow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    Start,
    End,
    #[default]
    Center,
}

/// Where an [`Align`](super::modifiers::Align) places its child inside the
/// parent's client area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Top-left corner.
    Left,
    TopCenter,
    /// Top-right corner.
    Right,
    LeftMiddle,
    RightMiddle,
    BottomCenter,
    #[default]
    Center,
}

/// Insets on each edge of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeInset {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInset {
    /// Create an inset with explicit values for each side.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform inset on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric inset (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
