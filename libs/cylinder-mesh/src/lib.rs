//! # Cylinder Mesh
//!
//! Procedural mesh generation for a cylindrical panoramic capture shell.
//!
//! ## Architecture
//!
//! ```text
//! CylinderSpec → CylinderLayout → generate() → MeshBuffers
//!                                      ↓
//!                      MeshSink (host normals) → seam smoothing
//! ```
//!
//! ## Geometry
//!
//! - `height_resolution + 1` rings, top to bottom, centered on the origin
//! - `circle_resolution` columns per ring, plus one seam duplicate when
//!   `smooth_texture` is set
//! - Optional zenith apex at index 0, mandatory nadir apex last
//!
//! ## Usage
//!
//! ```rust
//! use cylinder_mesh::{generate_with_normals, CylinderSpec};
//!
//! let spec = CylinderSpec::from_spatial_resolution(32, 16, 0.5);
//! let mesh = generate_with_normals(&spec)?;
//! assert_eq!(mesh.vertex_count(), 33 * 17 + 1);
//! # Ok::<(), cylinder_mesh::MeshError>(())
//! ```

pub mod buffers;
pub mod builder;
pub mod error;
pub mod layout;
pub mod normals;
pub mod sink;
pub mod spec;

pub use buffers::MeshBuffers;
pub use builder::generate;
pub use error::{MeshError, MeshResult};
pub use layout::CylinderLayout;
pub use normals::{compute_vertex_normals, generate_with_normals, smooth_seam_normals};
pub use sink::{CylinderAsset, MemoryMeshSink, MeshSink};
pub use spec::CylinderSpec;
