//! # Mesh Handle
//!
//! WASM-friendly wrapper for cylinder mesh data that can be transferred to
//! JavaScript.

use cylinder_mesh::MeshBuffers;
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_cylinder(32, 128, 0.5, true, true, false);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Texture coordinates as [u, v, u, v, ...]
    uvs: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the texture coordinates as a Float32Array.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Empty when the mesh was built without normals.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from generated buffers.
    pub fn from_buffers(buffers: &MeshBuffers) -> Self {
        Self {
            vertices: buffers.vertices_f32(),
            uvs: buffers.uvs_f32(),
            normals: buffers.normals_f32().unwrap_or_default(),
            indices: buffers.indices().to_vec(),
            vertex_count: buffers.vertex_count() as u32,
            triangle_count: buffers.triangle_count() as u32,
        }
    }
}
