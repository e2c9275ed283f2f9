//! Layout and configuration error types.

use thiserror::Error;

/// Errors raised by the layout and draw passes.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Children cannot be placed within the offered constraints.
    ///
    /// Tables catch this to truncate or break pages; every other container
    /// propagates it unchanged.
    #[error("overflow in {node}: {detail}")]
    Overflow { node: &'static str, detail: String },

    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("draw requested before a successful layout pass")]
    NotLaidOut,
}

impl LayoutError {
    pub(crate) fn overflow(node: &'static str, detail: impl Into<String>) -> Self {
        LayoutError::Overflow {
            node,
            detail: detail.into(),
        }
    }

    /// Whether this is the recoverable overflow condition.
    pub fn is_overflow(&self) -> bool {
        matches!(self, LayoutError::Overflow { .. })
    }
}

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised while loading a [`DocumentConfig`](crate::config::DocumentConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
