//! # Mesh Buffers
//!
//! Parallel vertex, UV and index buffers produced by the cylinder builder.

use crate::error::{MeshError, MeshResult};
use glam::{DVec2, DVec3};

/// Parallel mesh buffers with a flat triangle index list.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the host boundary.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::MeshBuffers;
/// use glam::{DVec2, DVec3};
///
/// let mut buffers = MeshBuffers::new();
/// buffers.push_vertex(DVec3::ZERO, DVec2::ZERO);
/// buffers.push_vertex(DVec3::X, DVec2::X);
/// buffers.push_vertex(DVec3::Y, DVec2::Y);
/// buffers.push_triangle(0, 1, 2);
/// assert!(buffers.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Triangle indices, three per triangle
    triangles: Vec<u32>,
    /// Per-vertex normals, set after host recomputation
    normals: Option<Vec<DVec3>>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count * 3),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Returns true if no vertex has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its texture coordinate and returns its index.
    pub fn push_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices, keeping the given winding.
    pub fn push_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.extend_from_slice(&[v0, v1, v2]);
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Per-vertex normals, if set.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Sets per-vertex normals.
    ///
    /// # Errors
    ///
    /// [`MeshError::NormalCountMismatch`] if `normals` does not have one
    /// entry per vertex.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) -> MeshResult<()> {
        if normals.len() != self.vertices.len() {
            return Err(MeshError::NormalCountMismatch {
                expected: self.vertices.len(),
                actual: normals.len(),
            });
        }
        self.normals = Some(normals);
        Ok(())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the buffer invariants.
    ///
    /// Checks:
    /// - One UV (and normal, when set) per vertex
    /// - Index count is a multiple of three
    /// - All triangle indices are in range
    pub fn validate(&self) -> MeshResult<()> {
        if self.uvs.len() != self.vertices.len() {
            return Err(MeshError::validation(format!(
                "{} uvs for {} vertices",
                self.uvs.len(),
                self.vertices.len()
            )));
        }

        if let Some(normals) = &self.normals {
            if normals.len() != self.vertices.len() {
                return Err(MeshError::NormalCountMismatch {
                    expected: self.vertices.len(),
                    actual: normals.len(),
                });
            }
        }

        if self.triangles.len() % 3 != 0 {
            return Err(MeshError::validation(format!(
                "index count {} is not a multiple of 3",
                self.triangles.len()
            )));
        }

        let vertex_count = self.vertices.len();
        if let Some(bad) = self
            .triangles
            .iter()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(MeshError::validation(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports texture coordinates as flattened [u, v, u, v, ...].
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }

    /// Consumes the buffers, returning (vertices, uvs, triangles, normals).
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<DVec2>, Vec<u32>, Option<Vec<DVec3>>) {
        (self.vertices, self.uvs, self.triangles, self.normals)
    }
}
