//! Rendering seam for surfplot-rs.
//!
//! This crate provides:
//! - The [`Renderer`] trait, implemented by whatever draws a hemisphere
//! - [`compose`], which renders every planned cell and stitches the canvas
//! - PNG encoding of composed figures

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Cell counts and pixel sizes fit comfortably in u32
#![allow(clippy::cast_possible_truncation)]

pub mod compose;
pub mod error;
pub mod renderer;
pub mod screenshot;

pub use compose::{compose, Figure, HemisphereMeshes};
pub use error::{RenderError, RenderResult};
pub use renderer::{CellRender, Renderer};
pub use screenshot::{clear_background, encode_png, encode_png_with_options, ExportOptions};
