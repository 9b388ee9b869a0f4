//! Rendering error types.

use surfplot_core::{Hemisphere, SurfplotError};
use thiserror::Error;

/// Errors that can occur while composing a figure.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The request could not be planned.
    #[error(transparent)]
    Plan(#[from] SurfplotError),

    /// The plan has a cell for a hemisphere that has no mesh.
    #[error("no mesh supplied for the {0} hemisphere")]
    MissingHemisphere(Hemisphere),

    /// A renderer returned an image of the wrong size for its cell.
    #[error("cell ({row}, {col}) expected {expected:?} pixels, renderer returned {actual:?}")]
    CellSizeMismatch {
        row: usize,
        col: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// The renderer failed.
    #[error("renderer failed: {0}")]
    Backend(String),

    /// Image encoding error.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
