//! # Mesh Sink
//!
//! Boundary between the builder and the host that owns the rendered mesh.
//!
//! ```text
//! CylinderAsset::build
//!     ├─ generate(spec)             → MeshBuffers
//!     ├─ sink.recalculate_normals() → Vec<DVec3>   (exactly once)
//!     ├─ smooth_seam_normals()       (if smooth_normal)
//!     └─ sink.commit(buffers, material)
//! ```

use crate::buffers::MeshBuffers;
use crate::builder::generate;
use crate::error::{MeshError, MeshResult};
use crate::normals::{compute_vertex_normals, smooth_seam_normals};
use crate::spec::CylinderSpec;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Host-side receiver of generated cylinder meshes.
pub trait MeshSink {
    /// Opaque material reference passed through unmodified.
    type Material;

    /// Recomputes per-vertex normals the way the host renderer expects.
    fn recalculate_normals(&mut self, buffers: &MeshBuffers) -> Vec<DVec3>;

    /// Takes ownership of the finished buffers and binds `material`.
    fn commit(&mut self, buffers: MeshBuffers, material: &Self::Material) -> MeshResult<()>;
}

/// In-process sink that keeps the last committed mesh.
///
/// Recomputes normals with [`compute_vertex_normals`].
#[derive(Debug, Clone)]
pub struct MemoryMeshSink<M> {
    mesh: Option<MeshBuffers>,
    material: Option<M>,
    normal_requests: usize,
}

impl<M> Default for MemoryMeshSink<M> {
    fn default() -> Self {
        Self {
            mesh: None,
            material: None,
            normal_requests: 0,
        }
    }
}

impl<M> MemoryMeshSink<M> {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed mesh.
    pub fn mesh(&self) -> Option<&MeshBuffers> {
        self.mesh.as_ref()
    }

    /// Material bound by the last commit.
    pub fn material(&self) -> Option<&M> {
        self.material.as_ref()
    }

    /// How many times normals were recomputed.
    pub fn normal_requests(&self) -> usize {
        self.normal_requests
    }

    /// Takes the last committed mesh out of the sink.
    pub fn take_mesh(&mut self) -> Option<MeshBuffers> {
        self.mesh.take()
    }
}

impl<M: Clone> MeshSink for MemoryMeshSink<M> {
    type Material = M;

    fn recalculate_normals(&mut self, buffers: &MeshBuffers) -> Vec<DVec3> {
        self.normal_requests += 1;
        compute_vertex_normals(buffers)
    }

    fn commit(&mut self, buffers: MeshBuffers, material: &M) -> MeshResult<()> {
        buffers.validate()?;
        self.mesh = Some(buffers);
        self.material = Some(material.clone());
        Ok(())
    }
}

/// A named cylinder definition with its bound material.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::{CylinderAsset, CylinderSpec, MemoryMeshSink};
///
/// let asset = CylinderAsset::new("Cylinder", CylinderSpec::default())
///     .with_material("panorama");
/// let mut sink = MemoryMeshSink::new();
/// asset.build(&mut sink).unwrap();
/// assert!(sink.mesh().unwrap().normals().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderAsset<M> {
    /// Name used for the host scene object
    pub name: String,
    /// Geometry parameters
    pub spec: CylinderSpec,
    /// Material handle, required before building
    pub material: Option<M>,
}

impl<M> CylinderAsset<M> {
    /// Creates an asset with no material bound.
    pub fn new(name: impl Into<String>, spec: CylinderSpec) -> Self {
        Self {
            name: name.into(),
            spec,
            material: None,
        }
    }

    /// Binds a material.
    pub fn with_material(mut self, material: M) -> Self {
        self.material = Some(material);
        self
    }

    /// Generates the mesh and hands it to `sink`.
    ///
    /// # Errors
    ///
    /// - [`MeshError::Precondition`] if no material is bound
    /// - Any validation error from [`generate`]
    /// - [`MeshError::NormalCountMismatch`] if the sink returns the wrong
    ///   number of normals
    pub fn build<S>(&self, sink: &mut S) -> MeshResult<()>
    where
        S: MeshSink<Material = M>,
    {
        let material = self.material.as_ref().ok_or_else(|| {
            MeshError::precondition(format!("cylinder '{}' has no material bound", self.name))
        })?;

        let mut buffers = generate(&self.spec)?;
        let mut normals = sink.recalculate_normals(&buffers);

        if self.spec.smooth_normal {
            smooth_seam_normals(&self.spec.layout(), &mut normals)?;
        }

        buffers.set_normals(normals)?;

        log::debug!(
            "committing cylinder '{}' ({} vertices)",
            self.name,
            buffers.vertex_count()
        );
        sink.commit(buffers, material)
    }
}
