//! The renderer seam.
//!
//! Drawing a hemisphere is left to an implementation of [`Renderer`]; this
//! crate only decides what each cell shows and where it goes.

use image::RgbaImage;
use surfplot_core::{CameraParameters, Cell, RenderOptions, SurfaceMesh};

use crate::error::RenderResult;

/// Everything a renderer needs to draw one cell.
#[derive(Debug, Clone, Copy)]
pub struct CellRender<'a> {
    /// The cell being drawn.
    pub cell: &'a Cell,
    /// Mesh of the cell's hemisphere.
    pub mesh: &'a SurfaceMesh,
    /// Camera fitted to the mesh for the cell's view.
    pub camera: &'a CameraParameters,
    /// Cell width in pixels.
    pub width: u32,
    /// Cell height in pixels.
    pub height: u32,
    /// Shared rendering options.
    pub options: &'a RenderOptions,
}

/// Draws one hemisphere from one view into an image.
///
/// Implementations must return an image of exactly `width` x `height`.
pub trait Renderer {
    /// Renders a single cell.
    fn render_cell(&mut self, cell: &CellRender<'_>) -> RenderResult<RgbaImage>;
}
