//! Error type shared by every constructor in the crate.
//!
//! Stepping never fails; only building an engine or handing it external
//! state can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Externally supplied cells do not match the declared shape.
    /// Rows report a height of 1.
    #[error("expected {height}x{width} cells, got {actual} cells")]
    Dimension {
        height: usize,
        width: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }
}
