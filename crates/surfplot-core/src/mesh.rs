//! In-memory triangle meshes for cortical surfaces.

use glam::{UVec3, Vec3};

use crate::error::{Result, SurfplotError};

/// A triangulated hemisphere surface.
///
/// Vertices are in RAS world coordinates. Loading meshes from disk is left
/// to the caller; this type only holds and validates the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    vertices: Vec<Vec3>,
    faces: Vec<UVec3>,
}

impl SurfaceMesh {
    /// Creates a mesh, checking that it has vertices and that every face
    /// index refers to one of them.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<UVec3>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(SurfplotError::InvalidMesh("mesh has no vertices".into()));
        }
        if let Some(v) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(SurfplotError::InvalidMesh(format!(
                "vertex {v} is not finite"
            )));
        }
        let n = vertices.len();
        for (i, face) in faces.iter().enumerate() {
            let out_of_range = face.to_array().into_iter().find(|&idx| idx as usize >= n);
            if let Some(idx) = out_of_range {
                return Err(SurfplotError::InvalidMesh(format!(
                    "face {i} references vertex {idx}, but the mesh has {n} vertices"
                )));
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Returns the vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the triangle faces.
    pub fn faces(&self) -> &[UVec3] {
        &self.faces
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the axis-aligned bounding box as (min, max).
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for &v in &self.vertices {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Computes the center of the bounding box.
    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounding_box();
        (min + max) * 0.5
    }

    /// Representative length scale: the bounding-box diagonal.
    pub fn length_scale(&self) -> f32 {
        let (min, max) = self.bounding_box();
        (max - min).length()
    }
}
