//! Leaf elements backed by external resources.

use crate::raster::{ImageHandle, ImageStore};
use crate::primitives::{Point, Rect, Size};

use super::base::Border;
use super::constraints::BoxConstraints;
use super::context::DrawContext;
use super::length::Length;

/// Content extent on one axis. `available` already excludes the border.
#[inline]
fn image_extent(length: Length, intrinsic: f32, available: f32) -> f32 {
    let available = available.max(0.0);
    match length {
        Length::Exact(v) if v <= available => v,
        Length::Intrinsic if intrinsic <= available => intrinsic,
        _ => available,
    }
}

/// A pre-decoded raster with an optional border.
///
/// The laid-out size is the raster extent plus the border thickness; the
/// raster is drawn inside the border inset.
#[derive(Debug)]
pub struct Image {
    handle: ImageHandle,
    pixel_size: (u32, u32),
    width: Length,
    height: Length,
    border: Border,
}

impl Image {
    pub fn new(handle: ImageHandle, pixel_size: (u32, u32)) -> Self {
        Self {
            handle,
            pixel_size,
            width: Length::Intrinsic,
            height: Length::Intrinsic,
            border: Border::zero(),
        }
    }

    /// An image for a raster held by `store`, or `None` for an unknown handle.
    pub fn from_store(store: &ImageStore, handle: ImageHandle) -> Option<Self> {
        store.pixel_size(handle).map(|size| Self::new(handle, size))
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

    pub fn handle(&self) -> ImageHandle {
        self.handle
    }

    pub(crate) fn layout(&mut self, constraints: BoxConstraints) -> Size {
        let (bw, bh) = (self.border.horizontal(), self.border.vertical());
        let (px, py) = self.pixel_size;
        let width = image_extent(self.width, px as f32, constraints.max_width - bw);
        let height = image_extent(self.height, py as f32, constraints.max_height - bh);
        Size::new(width + bw, height + bh)
    }

    pub(crate) fn draw(&self, ctx: &mut DrawContext<'_>, bounds: Rect) {
        self.border.draw(ctx.backend, bounds);
        let inner = self.border.client_rect(bounds);
        if inner.width > 0.0 && inner.height > 0.0 {
            ctx.backend
                .draw_image(Point::new(inner.x, inner.y), inner.size(), self.handle);
        }
    }
}
