//! Quire: constraint-based layout and pagination for paged documents.
//!
//! Quire lays out a declarative tree of boxes, flex rows and columns,
//! wrapped and justified text, tables and images, then draws it onto a
//! [`DrawBackend`] page by page. Tables and multi-page containers break
//! across physical pages without ever splitting a row.
//!
//! # Usage
//!
//! ```ignore
//! use quire::{Document, DocumentConfig, Page, RecordingBackend};
//! use quire::layout::{Column, Text, MainAxisAlignment};
//!
//! let mut doc = Document::new(DocumentConfig::default())?
//!     .page(Page::new(
//!         Column::new()
//!             .main_axis_alignment(MainAxisAlignment::Start)
//!             .push(Text::new("Quarterly report")),
//!     ));
//!
//! let mut backend = RecordingBackend::new();
//! doc.render(&mut backend)?;
//! ```

// Core primitives
pub mod primitives;
pub mod error;

// Backend contract and the in-memory backend
pub mod backend;
pub mod recorder;
pub mod raster;

// Layout system
pub mod layout;

// Document orchestration
pub mod config;
pub mod document;

// Re-export core types
pub use primitives::{Axis, Color, Point, Rect, Size};
pub use error::{ConfigError, LayoutError, LayoutResult};
pub use backend::{DrawBackend, Font, FontMetrics, MonospaceMetrics, TextMeasure};
pub use recorder::{DrawCommand, RecordingBackend};
pub use raster::{ImageHandle, ImageStore};
pub use config::{DocumentConfig, PageSize};
pub use document::{Document, Page};
