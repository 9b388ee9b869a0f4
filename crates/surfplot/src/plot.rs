//! The [`Plot`] builder: meshes plus layout and view options.
//!
//! # Example
//!
//! ```
//! use surfplot::*;
//!
//! fn main() -> Result<()> {
//!     let lh = SurfaceMesh::new(vec![Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-1.0, 1.0, 1.0)], vec![])?;
//!     let rh = SurfaceMesh::new(vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0)], vec![])?;
//!
//!     let plot = Plot::new()
//!         .left(lh)
//!         .right(rh)
//!         .size(800, 200)
//!         .zoom(1.2)
//!         .layout(LayoutMode::Row);
//!
//!     let plan = plot.plan()?;
//!     assert_eq!(plan.shape(), (1, 4));
//!     Ok(())
//! }
//! ```

use glam::Vec3;
use surfplot_core::{
    CameraParameters, GridPlan, LayoutMode, LayoutPlanner, PlotConfig, PlotRequest,
    PlotRequestBuilder, RenderOptions, Result, SurfaceMesh, View,
};
use surfplot_render::{compose, Figure, HemisphereMeshes, RenderResult, Renderer};

/// A surface plot of one or two hemispheres.
///
/// Defaults: grid layout, lateral and medial views, no flip, 500x400
/// canvas, zoom 1.5, mid-gray surface on white.
#[derive(Debug, Clone, Default)]
pub struct Plot {
    left: Option<SurfaceMesh>,
    right: Option<SurfaceMesh>,
    request: PlotRequestBuilder,
    options: RenderOptions,
}

impl Plot {
    /// Creates an empty plot with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plot from optional left and right meshes.
    pub fn with_surfaces(left: Option<SurfaceMesh>, right: Option<SurfaceMesh>) -> Self {
        Self {
            left,
            right,
            ..Self::default()
        }
    }

    /// Sets the left hemisphere mesh.
    #[must_use]
    pub fn left(mut self, mesh: SurfaceMesh) -> Self {
        self.left = Some(mesh);
        self
    }

    /// Sets the right hemisphere mesh.
    #[must_use]
    pub fn right(mut self, mesh: SurfaceMesh) -> Self {
        self.right = Some(mesh);
        self
    }

    /// Sets the layout mode.
    #[must_use]
    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.request = self.request.layout(layout);
        self
    }

    /// Sets the views, in display order.
    #[must_use]
    pub fn views(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.request = self.request.views(views);
        self
    }

    /// Shows a single view.
    #[must_use]
    pub fn view(mut self, view: View) -> Self {
        self.request = self.request.view(view);
        self
    }

    /// Reverses the left/right column order when both hemispheres are plotted.
    #[must_use]
    pub fn flip(mut self, flip: bool) -> Self {
        self.request = self.request.flip(flip);
        self
    }

    /// Sets the canvas size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.request = self.request.size(width, height);
        self
    }

    /// Sets the zoom factor.
    #[must_use]
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.request = self.request.zoom(zoom);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, color: Vec3) -> Self {
        self.options.background = color;
        self
    }

    /// Sets the surface gray level.
    #[must_use]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.options.brightness = brightness;
        self
    }

    /// Sets whether the renderer should draw without a window.
    #[must_use]
    pub fn off_screen(mut self, off_screen: bool) -> Self {
        self.options.off_screen = off_screen;
        self
    }

    /// Applies a loosely typed configuration on top of the current options.
    ///
    /// Unknown layout or view tokens fail with `InvalidConfiguration`.
    pub fn configure(mut self, config: &PlotConfig) -> Result<Self> {
        self.request = config.apply(self.request)?;
        self.options = config.render_options(&self.options);
        Ok(self)
    }

    /// Applies a JSON configuration, see [`PlotConfig`].
    pub fn configure_json(self, json: &str) -> Result<Self> {
        let config = PlotConfig::from_json(json)?;
        self.configure(&config)
    }

    /// Rendering options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Borrowed meshes, for handing to the compositor.
    pub fn meshes(&self) -> HemisphereMeshes<'_> {
        HemisphereMeshes::new(self.left.as_ref(), self.right.as_ref())
    }

    /// Builds the validated request for the meshes present.
    pub fn request(&self) -> Result<PlotRequest> {
        self.request
            .clone()
            .hemispheres(self.meshes().hemispheres())
            .build()
    }

    /// Plans the cell layout.
    pub fn plan(&self) -> Result<GridPlan> {
        LayoutPlanner::plan_request(&self.request()?)
    }

    /// Effective camera for every cell, in cell order.
    pub fn cameras(&self) -> Result<Vec<CameraParameters>> {
        let plan = self.plan()?;
        let meshes = self.meshes();
        // Every planned hemisphere has a mesh, so no camera is missing.
        Ok(plan
            .cameras(|h| meshes.get(h).map(SurfaceMesh::bounding_box))
            .into_iter()
            .flatten()
            .collect())
    }

    /// Plans the layout and composes a figure with `renderer`.
    pub fn render<R>(&self, renderer: &mut R) -> RenderResult<Figure>
    where
        R: Renderer + ?Sized,
    {
        let _ = env_logger::try_init();
        let plan = self.plan()?;
        log::debug!(
            "rendering {} plot with views {:?}",
            plan.layout(),
            plan.cells().iter().map(|c| c.view).collect::<Vec<_>>()
        );
        compose(&plan, &self.meshes(), &self.options, renderer)
    }
}
