//! Document configuration.
//!
//! Page geometry and defaults, loadable from JSON. Every field has a
//! default, so `{}` is a valid config describing an A4 page.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::Font;
use crate::error::ConfigError;
use crate::primitives::Size;

/// Physical page size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: Self = Self {
        width: 595.2756,
        height: 841.8898,
    };
    pub const LETTER: Self = Self {
        width: 612.0,
        height: 792.0,
    };

    /// Area left for content after a uniform margin on every edge.
    pub fn content_size(&self, margin: f32) -> Size {
        Size::new(
            (self.width - 2.0 * margin).max(0.0),
            (self.height - 2.0 * margin).max(0.0),
        )
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Configuration shared by every page of a [`Document`](crate::document::Document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub page: PageSize,
    pub margin: f32,
    pub default_font: Font,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            page: PageSize::A4,
            margin: 5.0,
            default_font: Font::default(),
        }
    }
}

impl DocumentConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.page.width > 0.0 && self.page.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "page size must be positive, got {}x{}",
                self.page.width, self.page.height
            )));
        }
        if !(self.margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "margin must be non-negative, got {}",
                self.margin
            )));
        }
        let content = self.content_size();
        if content.width <= 0.0 || content.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "margin {} leaves no content area on a {}x{} page",
                self.margin, self.page.width, self.page.height
            )));
        }
        if !(self.default_font.size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "font size must be positive, got {}",
                self.default_font.size
            )));
        }
        Ok(())
    }

    /// Content area of one page.
    pub fn content_size(&self) -> Size {
        self.page.content_size(self.margin)
    }
}
