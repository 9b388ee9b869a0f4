//! Figure composition: one renderer call per cell, stitched into one canvas.

use image::{imageops, Rgba, RgbaImage};
use surfplot_core::{
    CameraParameters, GridPlan, Hemisphere, Hemispheres, RenderOptions, SurfaceMesh,
};

use crate::error::{RenderError, RenderResult};
use crate::renderer::{CellRender, Renderer};
use crate::screenshot::{encode_png, encode_png_with_options, ExportOptions};

/// Borrowed left/right meshes for a plot.
#[derive(Debug, Clone, Copy, Default)]
pub struct HemisphereMeshes<'a> {
    /// Left hemisphere mesh.
    pub left: Option<&'a SurfaceMesh>,
    /// Right hemisphere mesh.
    pub right: Option<&'a SurfaceMesh>,
}

impl<'a> HemisphereMeshes<'a> {
    /// Creates a mesh pair.
    pub fn new(left: Option<&'a SurfaceMesh>, right: Option<&'a SurfaceMesh>) -> Self {
        Self { left, right }
    }

    /// Returns the mesh for `hemisphere`, if supplied.
    pub fn get(&self, hemisphere: Hemisphere) -> Option<&'a SurfaceMesh> {
        match hemisphere {
            Hemisphere::Left => self.left,
            Hemisphere::Right => self.right,
        }
    }

    /// Which hemispheres have a mesh.
    pub fn hemispheres(&self) -> Hemispheres {
        Hemispheres::new(self.left.is_some(), self.right.is_some())
    }
}

/// A composed figure: the canvas image plus the plan and cameras behind it.
#[derive(Debug, Clone)]
pub struct Figure {
    image: RgbaImage,
    plan: GridPlan,
    cameras: Vec<CameraParameters>,
    cell_size: (u32, u32),
    background: [u8; 4],
}

impl Figure {
    /// The composed canvas.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The plan this figure was composed from.
    pub fn plan(&self) -> &GridPlan {
        &self.plan
    }

    /// The camera used for each cell, in cell order.
    pub fn cameras(&self) -> &[CameraParameters] {
        &self.cameras
    }

    /// Canvas dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel size of one cell.
    pub fn cell_size(&self) -> (u32, u32) {
        self.cell_size
    }

    /// Copies out the pixels of the cell at a grid slot.
    pub fn cell_image(&self, row: usize, col: usize) -> Option<RgbaImage> {
        self.plan.cell_at(row, col)?;
        let (x, y) = cell_origin(row, col, self.cell_size);
        let (w, h) = self.cell_size;
        Some(imageops::crop_imm(&self.image, x, y, w, h).to_image())
    }

    /// Encodes the canvas as PNG.
    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        encode_png(&self.image)
    }

    /// Encodes the canvas as PNG, applying export options.
    pub fn to_png_with(&self, options: &ExportOptions) -> RenderResult<Vec<u8>> {
        encode_png_with_options(&self.image, self.background, options)
    }
}

/// Renders every cell of `plan` and stitches the results into one figure.
///
/// The canvas is `cols * cell_w` by `rows * cell_h`, filled with the
/// background color. Fails without producing a figure if a planned
/// hemisphere has no mesh, the renderer fails, or it returns an image of the
/// wrong size.
pub fn compose<R>(
    plan: &GridPlan,
    meshes: &HemisphereMeshes<'_>,
    options: &RenderOptions,
    renderer: &mut R,
) -> RenderResult<Figure>
where
    R: Renderer + ?Sized,
{
    let (cell_w, cell_h) = plan.cell_size();
    let canvas_w = cell_w * plan.cols() as u32;
    let canvas_h = cell_h * plan.rows() as u32;

    // Resolve every mesh up front so a missing one fails before any rendering.
    let mut cell_meshes = Vec::with_capacity(plan.len());
    for cell in plan.cells() {
        let mesh = meshes
            .get(cell.hemisphere)
            .ok_or(RenderError::MissingHemisphere(cell.hemisphere))?;
        cell_meshes.push(mesh);
    }

    let cameras: Vec<CameraParameters> = plan
        .cameras(|h| meshes.get(h).map(SurfaceMesh::bounding_box))
        .into_iter()
        .zip(plan.cells())
        .map(|(camera, cell)| camera.ok_or(RenderError::MissingHemisphere(cell.hemisphere)))
        .collect::<RenderResult<_>>()?;

    log::debug!(
        "rendering {} cells at {cell_w}x{cell_h} (off_screen={})",
        plan.len(),
        options.off_screen
    );

    let background = options.background_rgba8();
    let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, Rgba(background));

    for ((cell, mesh), camera) in plan.cells().iter().zip(cell_meshes).zip(&cameras) {
        let request = CellRender {
            cell,
            mesh,
            camera,
            width: cell_w,
            height: cell_h,
            options,
        };
        let tile = renderer.render_cell(&request)?;
        if tile.dimensions() != (cell_w, cell_h) {
            return Err(RenderError::CellSizeMismatch {
                row: cell.row,
                col: cell.col,
                expected: (cell_w, cell_h),
                actual: tile.dimensions(),
            });
        }
        let (x, y) = cell_origin(cell.row, cell.col, (cell_w, cell_h));
        imageops::replace(&mut canvas, &tile, i64::from(x), i64::from(y));
    }

    log::info!(
        "composed {} layout: {}x{} cells into {canvas_w}x{canvas_h} canvas",
        plan.layout(),
        plan.rows(),
        plan.cols()
    );

    Ok(Figure {
        image: canvas,
        plan: plan.clone(),
        cameras,
        cell_size: (cell_w, cell_h),
        background,
    })
}

fn cell_origin(row: usize, col: usize, cell_size: (u32, u32)) -> (u32, u32) {
    (col as u32 * cell_size.0, row as u32 * cell_size.1)
}
