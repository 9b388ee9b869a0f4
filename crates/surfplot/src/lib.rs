//! surfplot-rs: plot brain cortical surfaces in configurable layouts and views.
//!
//! A plot combines up to two hemisphere meshes with a layout (`grid`, `row`
//! or `column`), an ordered list of anatomical views, a canvas size and a
//! zoom factor. Planning decides which hemisphere and view go in each cell
//! and where each cell's camera sits; drawing a cell is delegated to a
//! [`Renderer`].
//!
//! # Quick Start
//!
//! ```
//! use surfplot::*;
//!
//! struct Flat;
//!
//! impl Renderer for Flat {
//!     fn render_cell(&mut self, cell: &CellRender<'_>) -> RenderResult<RgbaImage> {
//!         let gray = Rgba(cell.options.surface_rgba8());
//!         Ok(RgbaImage::from_pixel(cell.width, cell.height, gray))
//!     }
//! }
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let lh = SurfaceMesh::new(vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0)], vec![])?;
//!     let rh = SurfaceMesh::new(vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)], vec![])?;
//!
//!     // 2x2 grid of lateral and medial views, left hemisphere on the left.
//!     let figure = Plot::new().left(lh).right(rh).render(&mut Flat)?;
//!     assert_eq!(figure.plan().shape(), (2, 2));
//!     assert_eq!(figure.dimensions(), (500, 400));
//!     Ok(())
//! }
//! ```
//!
//! # Layouts
//!
//! - [`LayoutMode::Grid`] - views by hemispheres; a single hemisphere is a row
//! - [`LayoutMode::Row`] - one horizontal row, views outer, hemispheres inner
//! - [`LayoutMode::Column`] - the same sequence stacked vertically

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod plot;

pub use plot::Plot;

// Re-export core types
pub use surfplot_core::{
    camera::{view_camera, AxisDirection, CameraParameters},
    error::{Result, SurfplotError},
    hemisphere::{Hemisphere, Hemispheres},
    mesh::SurfaceMesh,
    options::RenderOptions,
    plan::{Cell, GridPlan, LayoutPlanner},
    request::{PlotConfig, PlotRequest, PlotRequestBuilder, ViewSpec},
    view::{LayoutMode, View},
    Mat4, UVec3, Vec3,
};

// Re-export render types
pub use surfplot_render::{
    compose, CellRender, ExportOptions, Figure, HemisphereMeshes, RenderError, RenderResult,
    Renderer,
};

pub use image::{Rgba, RgbaImage};
