//! Camera placement for anatomical views.
//!
//! Each plotted cell gets its own orthographic camera looking at the
//! hemisphere's bounding-box center along the view's axis.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::hemisphere::Hemisphere;
use crate::view::View;

/// Distance from target to camera, as a multiple of the bounding-box diagonal.
const EYE_DISTANCE_FACTOR: f32 = 1.5;
/// Extra room around the surface so it does not touch the cell edges.
const FRAME_MARGIN: f32 = 1.1;
/// Smallest allowed parallel scale.
const MIN_PARALLEL_SCALE: f32 = 1e-3;

/// Axis direction for eye/up vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisDirection {
    /// Positive X axis (right).
    PosX,
    /// Negative X axis (left).
    NegX,
    /// Positive Y axis (anterior).
    PosY,
    /// Negative Y axis (posterior).
    NegY,
    /// Positive Z axis (superior, default up).
    #[default]
    PosZ,
    /// Negative Z axis (inferior).
    NegZ,
}

impl AxisDirection {
    /// Returns the unit vector for this direction.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        match self {
            AxisDirection::PosX => Vec3::X,
            AxisDirection::NegX => Vec3::NEG_X,
            AxisDirection::PosY => Vec3::Y,
            AxisDirection::NegY => Vec3::NEG_Y,
            AxisDirection::PosZ => Vec3::Z,
            AxisDirection::NegZ => Vec3::NEG_Z,
        }
    }

    /// Returns the direction pointing the other way along the same axis.
    #[must_use]
    pub fn opposite(self) -> AxisDirection {
        match self {
            AxisDirection::PosX => AxisDirection::NegX,
            AxisDirection::NegX => AxisDirection::PosX,
            AxisDirection::PosY => AxisDirection::NegY,
            AxisDirection::NegY => AxisDirection::PosY,
            AxisDirection::PosZ => AxisDirection::NegZ,
            AxisDirection::NegZ => AxisDirection::PosZ,
        }
    }
}

/// Effective camera for one plotted cell.
///
/// The projection is orthographic: `parallel_scale` is half the height of
/// the view volume in world units, already divided by the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParameters {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Half-height of the orthographic view volume.
    pub parallel_scale: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Zoom factor this camera was fitted with.
    pub zoom: f32,
}

impl CameraParameters {
    /// Returns the view matrix (world to camera space).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the orthographic projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let half_height = self.parallel_scale;
        let half_width = half_height * self.aspect_ratio;
        Mat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            self.near,
            self.far,
        )
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn look_dir(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right_dir(&self) -> Vec3 {
        self.look_dir().cross(self.up).normalize()
    }
}

/// Computes the camera that shows `bounds` from `view` for `hemisphere`.
///
/// `bounds` is the (min, max) corner pair of the hemisphere's bounding box.
/// `zoom` must be positive; larger values magnify the surface.
pub fn view_camera(
    view: View,
    hemisphere: Hemisphere,
    bounds: (Vec3, Vec3),
    zoom: f32,
    aspect_ratio: f32,
) -> CameraParameters {
    let (min, max) = bounds;
    let center = (min + max) * 0.5;
    let extents = max - min;
    let diagonal = extents.length();
    let size = if diagonal > 0.0 { diagonal } else { 1.0 };

    let eye = view.eye_direction(hemisphere).to_vec3();
    let up = view.up_direction().to_vec3();
    let right = (-eye).cross(up);

    // Axis-aligned directions, so projecting the extents is a dot with |axis|.
    let visible_width = extents.dot(right.abs());
    let visible_height = extents.dot(up.abs());
    let aspect_ratio = if aspect_ratio > 0.0 { aspect_ratio } else { 1.0 };
    let half_height = (visible_height * 0.5).max(visible_width * 0.5 / aspect_ratio) * FRAME_MARGIN;
    let parallel_scale = (half_height / zoom).max(MIN_PARALLEL_SCALE);

    CameraParameters {
        position: center + eye * size * EYE_DISTANCE_FACTOR,
        target: center,
        up,
        parallel_scale,
        aspect_ratio,
        near: size * 0.001,
        far: size * 100.0,
        zoom,
    }
}
