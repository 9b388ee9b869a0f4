//! Error types for surfplot-rs.

use thiserror::Error;

/// The main error type for surfplot-rs operations.
#[derive(Error, Debug)]
pub enum SurfplotError {
    /// The plot request cannot be planned as given.
    ///
    /// Raised for an empty view list, an empty hemisphere set, unknown
    /// layout or view tokens, and out-of-range size or zoom values.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A surface mesh is structurally unusable.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SurfplotError {
    /// Shorthand for building an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Returns true if this is a configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

/// A specialized Result type for surfplot-rs operations.
pub type Result<T> = std::result::Result<T, SurfplotError>;
