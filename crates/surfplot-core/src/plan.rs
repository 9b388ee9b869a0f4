//! Layout planning: from a plot request to an ordered grid of cells.
//!
//! # Example
//!
//! ```
//! use surfplot_core::{Hemisphere, Hemispheres, LayoutMode, LayoutPlanner, View};
//!
//! let plan = LayoutPlanner::plan(
//!     Hemispheres::BOTH,
//!     &[View::Lateral, View::Posterior],
//!     LayoutMode::Grid,
//!     false,
//! )
//! .unwrap();
//!
//! assert_eq!((plan.rows(), plan.cols()), (2, 2));
//! assert_eq!(plan.cell_at(1, 0).unwrap().hemisphere, Hemisphere::Left);
//! assert_eq!(plan.cell_at(1, 0).unwrap().view, View::Posterior);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{view_camera, CameraParameters};
use crate::error::{Result, SurfplotError};
use crate::hemisphere::{Hemisphere, Hemispheres};
use crate::request::{
    validate_selection, validate_size, validate_zoom, PlotRequest, DEFAULT_SIZE, DEFAULT_ZOOM,
};
use crate::view::{LayoutMode, View};

/// One (hemisphere, view) sub-plot at a grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
    /// Hemisphere drawn in this cell.
    pub hemisphere: Hemisphere,
    /// View the hemisphere is drawn from.
    pub view: View,
}

/// Immutable result of layout planning.
///
/// Cells are stored in row-major order. `size` and `zoom` are carried
/// through from the request unchanged.
///
/// Deserializing re-runs the planner on the cells' hemispheres and views and
/// rejects anything it would not have produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridPlan")]
pub struct GridPlan {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    layout: LayoutMode,
    size: (u32, u32),
    zoom: f32,
}

impl GridPlan {
    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Canvas shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a plan produced by [`LayoutPlanner`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Layout mode that was requested.
    ///
    /// A single-hemisphere grid still reports [`LayoutMode::Grid`] even
    /// though its cells form one row.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Canvas size from the request, as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Zoom factor from the request.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Returns the cell at a grid slot, if any.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Cells grouped by row.
    pub fn grid(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols.max(1)).map(<[Cell]>::to_vec).collect()
    }

    /// Pixel size of one cell: the canvas split evenly, at least 1x1.
    pub fn cell_size(&self) -> (u32, u32) {
        let cols = u32::try_from(self.cols).unwrap_or(u32::MAX).max(1);
        let rows = u32::try_from(self.rows).unwrap_or(u32::MAX).max(1);
        ((self.size.0 / cols).max(1), (self.size.1 / rows).max(1))
    }

    /// Effective camera for every cell, in cell order.
    ///
    /// `bounds` returns the bounding box of a hemisphere's mesh; cells whose
    /// hemisphere has no bounds get `None`.
    pub fn cameras<F>(&self, mut bounds: F) -> Vec<Option<CameraParameters>>
    where
        F: FnMut(Hemisphere) -> Option<(Vec3, Vec3)>,
    {
        let (w, h) = self.cell_size();
        let aspect = w as f32 / h as f32;
        self.cells
            .iter()
            .map(|cell| {
                bounds(cell.hemisphere)
                    .map(|bb| view_camera(cell.view, cell.hemisphere, bb, self.zoom, aspect))
            })
            .collect()
    }
}

/// Serialized form of a [`GridPlan`], checked before it becomes one.
#[derive(Deserialize)]
struct RawGridPlan {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    layout: LayoutMode,
    size: (u32, u32),
    zoom: f32,
}

impl TryFrom<RawGridPlan> for GridPlan {
    type Error = SurfplotError;

    fn try_from(raw: RawGridPlan) -> Result<Self> {
        validate_size(raw.size)?;
        validate_zoom(raw.zoom)?;

        // Recover the planner inputs: hemisphere order from the first cells,
        // then one view per group of hemispheres.
        let hemispheres: Hemispheres = raw.cells.iter().map(|c| c.hemisphere).collect();
        let per_view = hemispheres.count().max(1);
        let flip = hemispheres.is_both()
            && raw.cells.first().map(|c| c.hemisphere) == Some(Hemisphere::Right);
        let views: Vec<View> = raw.cells.iter().step_by(per_view).map(|c| c.view).collect();

        let expected = LayoutPlanner::plan(hemispheres, &views, raw.layout, flip)?;
        if expected.cells != raw.cells || expected.shape() != (raw.rows, raw.cols) {
            return Err(SurfplotError::invalid(format!(
                "{} cells in a {}x{} {} plan do not match the planned arrangement",
                raw.cells.len(),
                raw.rows,
                raw.cols,
                raw.layout
            )));
        }

        Ok(GridPlan {
            size: raw.size,
            zoom: raw.zoom,
            ..expected
        })
    }
}

/// Computes grid arrangements for plot requests.
pub struct LayoutPlanner;

impl LayoutPlanner {
    /// Plans a validated request, carrying its size and zoom into the plan.
    pub fn plan_request(request: &PlotRequest) -> Result<GridPlan> {
        let mut plan = Self::plan(
            request.hemispheres(),
            request.views(),
            request.layout(),
            request.flip(),
        )?;
        plan.size = request.size();
        plan.zoom = request.zoom();
        Ok(plan)
    }

    /// Arranges (hemisphere, view) cells for the given selection.
    ///
    /// - `Grid` with both hemispheres: one row per view, one column per
    ///   hemisphere. With one hemisphere: a single row of views.
    /// - `Row`: a single row, views outer, hemispheres inner.
    /// - `Column`: the same sequence as `Row`, stacked vertically.
    ///
    /// `flip` reverses the hemisphere order when both are present and is
    /// ignored otherwise. Duplicate views produce duplicate cells. The plan
    /// gets the default size and zoom; use [`plan_request`](Self::plan_request)
    /// to carry a request's values.
    pub fn plan(
        hemispheres: Hemispheres,
        views: &[View],
        layout: LayoutMode,
        flip: bool,
    ) -> Result<GridPlan> {
        validate_selection(hemispheres, views)?;
        let order = hemispheres.ordered(flip);

        let (cells, rows, cols) = match layout {
            LayoutMode::Grid if order.len() > 1 => {
                let cells: Vec<Cell> = views
                    .iter()
                    .enumerate()
                    .flat_map(|(row, &view)| {
                        order.iter().enumerate().map(move |(col, &hemisphere)| Cell {
                            row,
                            col,
                            hemisphere,
                            view,
                        })
                    })
                    .collect();
                (cells, views.len(), order.len())
            }
            LayoutMode::Grid | LayoutMode::Row => {
                let cells: Vec<Cell> = flatten(&order, views)
                    .enumerate()
                    .map(|(col, (hemisphere, view))| Cell {
                        row: 0,
                        col,
                        hemisphere,
                        view,
                    })
                    .collect();
                let n = cells.len();
                (cells, 1, n)
            }
            LayoutMode::Column => {
                let cells: Vec<Cell> = flatten(&order, views)
                    .enumerate()
                    .map(|(row, (hemisphere, view))| Cell {
                        row,
                        col: 0,
                        hemisphere,
                        view,
                    })
                    .collect();
                let n = cells.len();
                (cells, n, 1)
            }
        };

        log::debug!(
            "planned {layout} layout: {rows}x{cols} cells for {} hemisphere(s), {} view(s), flip={flip}",
            order.len(),
            views.len()
        );

        Ok(GridPlan {
            cells,
            rows,
            cols,
            layout,
            size: DEFAULT_SIZE,
            zoom: DEFAULT_ZOOM,
        })
    }
}

/// Views outer, hemispheres inner.
fn flatten<'a>(
    order: &'a [Hemisphere],
    views: &'a [View],
) -> impl Iterator<Item = (Hemisphere, View)> + 'a {
    views
        .iter()
        .flat_map(move |&view| order.iter().map(move |&hemisphere| (hemisphere, view)))
}
