//! Plot requests: the validated input to layout planning.
//!
//! A [`PlotRequest`] is built either through the typed
//! [`PlotRequestBuilder`] or from a loosely typed [`PlotConfig`], which
//! accepts the string tokens users write (`"row"`, `["lateral", "medial"]`).
//!
//! # Example
//!
//! ```
//! use surfplot_core::{Hemispheres, LayoutMode, PlotRequest, View};
//!
//! let request = PlotRequest::builder()
//!     .hemispheres(Hemispheres::BOTH)
//!     .layout(LayoutMode::Row)
//!     .views([View::Lateral, View::Posterior])
//!     .size(800, 200)
//!     .zoom(1.2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.views().len(), 2);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SurfplotError};
use crate::hemisphere::Hemispheres;
use crate::options::RenderOptions;
use crate::view::{parse_views, LayoutMode, View};

/// Canvas size used when none is requested.
pub const DEFAULT_SIZE: (u32, u32) = (500, 400);
/// Zoom factor used when none is requested.
pub const DEFAULT_ZOOM: f32 = 1.5;

/// Immutable, validated plot request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    hemispheres: Hemispheres,
    views: Vec<View>,
    layout: LayoutMode,
    flip: bool,
    size: (u32, u32),
    zoom: f32,
}

impl PlotRequest {
    /// Starts building a request with default layout, views, size and zoom.
    pub fn builder() -> PlotRequestBuilder {
        PlotRequestBuilder::default()
    }

    /// Hemispheres present.
    pub fn hemispheres(&self) -> Hemispheres {
        self.hemispheres
    }

    /// Requested views, in order.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Layout mode.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Whether left/right column order is reversed.
    pub fn flip(&self) -> bool {
        self.flip
    }

    /// Canvas size as (width, height) in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Zoom factor.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

/// Builder for [`PlotRequest`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PlotRequestBuilder {
    hemispheres: Hemispheres,
    views: Vec<View>,
    layout: LayoutMode,
    flip: bool,
    size: (u32, u32),
    zoom: f32,
}

impl Default for PlotRequestBuilder {
    fn default() -> Self {
        Self {
            hemispheres: Hemispheres::NONE,
            views: View::DEFAULT.to_vec(),
            layout: LayoutMode::default(),
            flip: false,
            size: DEFAULT_SIZE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl PlotRequestBuilder {
    /// Sets which hemispheres are present.
    pub fn hemispheres(mut self, hemispheres: Hemispheres) -> Self {
        self.hemispheres = hemispheres;
        self
    }

    /// Sets the views, in display order.
    pub fn views(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.views = views.into_iter().collect();
        self
    }

    /// Sets a single view.
    pub fn view(self, view: View) -> Self {
        self.views([view])
    }

    /// Sets the layout mode.
    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Sets whether left/right column order is reversed.
    pub fn flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Sets the canvas size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Sets the zoom factor.
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Validates and freezes the request.
    pub fn build(self) -> Result<PlotRequest> {
        validate_selection(self.hemispheres, &self.views)?;
        validate_size(self.size)?;
        validate_zoom(self.zoom)?;
        Ok(PlotRequest {
            hemispheres: self.hemispheres,
            views: self.views,
            layout: self.layout,
            flip: self.flip,
            size: self.size,
            zoom: self.zoom,
        })
    }
}

/// Checks the two planning invariants: at least one hemisphere and one view.
pub(crate) fn validate_selection(hemispheres: Hemispheres, views: &[View]) -> Result<()> {
    if hemispheres.is_empty() {
        return Err(SurfplotError::invalid(
            "at least one hemisphere must be present",
        ));
    }
    if views.is_empty() {
        return Err(SurfplotError::invalid("at least one view is required"));
    }
    Ok(())
}

/// Checks that a canvas is non-empty and its RGBA buffer is addressable.
pub(crate) fn validate_size((width, height): (u32, u32)) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SurfplotError::invalid(format!(
            "size must be non-zero, got {width}x{height}"
        )));
    }
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|bytes| isize::try_from(bytes).ok());
    if bytes.is_none() {
        return Err(SurfplotError::invalid(format!(
            "size {width}x{height} is too large for an RGBA canvas"
        )));
    }
    Ok(())
}

/// Checks that a zoom factor is finite and positive.
pub(crate) fn validate_zoom(zoom: f32) -> Result<()> {
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(SurfplotError::invalid(format!(
            "zoom must be a positive number, got {zoom}"
        )));
    }
    Ok(())
}

/// One view token or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewSpec {
    /// A single view, e.g. `"lateral"`.
    One(String),
    /// An ordered list of views.
    Many(Vec<String>),
}

impl ViewSpec {
    /// Parses the tokens into views.
    pub fn parse(&self) -> Result<Vec<View>> {
        match self {
            ViewSpec::One(token) => Ok(vec![token.parse()?]),
            ViewSpec::Many(tokens) => parse_views(tokens),
        }
    }
}

/// Loosely typed plot configuration, as written in JSON.
///
/// Every field is optional; missing fields take the usual defaults.
/// Tokens are validated when the config is turned into a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// `"grid"`, `"row"` or `"column"`.
    pub layout: Option<String>,
    /// A view token or a list of them.
    pub views: Option<ViewSpec>,
    /// Reverse left/right column order.
    pub flip: Option<bool>,
    /// Canvas size as `[width, height]`.
    pub size: Option<(u32, u32)>,
    /// Zoom factor.
    pub zoom: Option<f32>,
    /// Background color as `[r, g, b]` in 0..=1.
    pub background: Option<Vec3>,
    /// Surface gray level in 0..=1.
    pub brightness: Option<f32>,
    /// Render without a window.
    pub off_screen: Option<bool>,
}

impl PlotConfig {
    /// Parses a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies the layout-related fields on top of `builder`.
    pub fn apply(&self, mut builder: PlotRequestBuilder) -> Result<PlotRequestBuilder> {
        if let Some(layout) = &self.layout {
            builder = builder.layout(layout.parse()?);
        }
        if let Some(views) = &self.views {
            builder = builder.views(views.parse()?);
        }
        if let Some(flip) = self.flip {
            builder = builder.flip(flip);
        }
        if let Some((width, height)) = self.size {
            builder = builder.size(width, height);
        }
        if let Some(zoom) = self.zoom {
            builder = builder.zoom(zoom);
        }
        Ok(builder)
    }

    /// Builds a validated request for the given hemispheres.
    pub fn into_request(&self, hemispheres: Hemispheres) -> Result<PlotRequest> {
        self.apply(PlotRequest::builder().hemispheres(hemispheres))?
            .build()
    }

    /// Applies the rendering fields on top of `base`.
    pub fn render_options(&self, base: &RenderOptions) -> RenderOptions {
        let mut options = base.clone();
        if let Some(background) = self.background {
            options.background = background;
        }
        if let Some(brightness) = self.brightness {
            options.brightness = brightness;
        }
        if let Some(off_screen) = self.off_screen {
            options.off_screen = off_screen;
        }
        options
    }
}
