//! Core abstractions for surfplot-rs.
//!
//! This crate provides the types and planning logic behind a surface plot:
//! - [`Hemisphere`], [`View`] and [`LayoutMode`] enumerations
//! - [`PlotRequest`] validation and the loosely typed [`PlotConfig`]
//! - [`LayoutPlanner`], which arranges (hemisphere, view) cells into a [`GridPlan`]
//! - Per-cell camera placement ([`CameraParameters`])
//! - [`SurfaceMesh`] geometry and [`RenderOptions`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Pixel and cell counts are small
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod camera;
pub mod error;
pub mod hemisphere;
pub mod mesh;
pub mod options;
pub mod plan;
pub mod request;
pub mod view;

pub use camera::{view_camera, AxisDirection, CameraParameters};
pub use error::{Result, SurfplotError};
pub use hemisphere::{Hemisphere, Hemispheres};
pub use mesh::SurfaceMesh;
pub use options::RenderOptions;
pub use plan::{Cell, GridPlan, LayoutPlanner};
pub use request::{
    PlotConfig, PlotRequest, PlotRequestBuilder, ViewSpec, DEFAULT_SIZE, DEFAULT_ZOOM,
};
pub use view::{parse_views, LayoutMode, View};

// Re-export glam types for convenience
pub use glam::{Mat4, UVec3, Vec3};
