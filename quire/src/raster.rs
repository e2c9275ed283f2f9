//! Pre-decoded raster storage.
//!
//! Widgets refer to rasters by [`ImageHandle`]; the pixels live in an
//! [`ImageStore`] owned by the caller, which also hands the store to its
//! backend so `draw_image` can resolve handles.

use image::{ImageResult, RgbaImage};

/// Opaque handle to a raster held by an [`ImageStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// CPU-side store of decoded RGBA rasters.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: Vec<RgbaImage>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a decoded raster. Returns its handle.
    pub fn insert(&mut self, raster: RgbaImage) -> ImageHandle {
        let handle = ImageHandle(self.images.len() as u32);
        self.images.push(raster);
        handle
    }

    /// Decode an encoded buffer (PNG, JPEG, ...) and store the result.
    pub fn decode(&mut self, bytes: &[u8]) -> ImageResult<ImageHandle> {
        let raster = image::load_from_memory(bytes)?.to_rgba8();
        Ok(self.insert(raster))
    }

    pub fn get(&self, handle: ImageHandle) -> Option<&RgbaImage> {
        self.images.get(handle.0 as usize)
    }

    /// Intrinsic pixel size as `(width, height)`.
    pub fn pixel_size(&self, handle: ImageHandle) -> Option<(u32, u32)> {
        self.get(handle).map(|img| img.dimensions())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
