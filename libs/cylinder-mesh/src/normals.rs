//! # Normals
//!
//! Per-vertex normal recomputation and seam smoothing.
//!
//! A duplicated seam column shares positions with column 0 but not
//! triangles, so recomputed normals differ on either side of the seam and
//! the shading shows a crease. Seam smoothing averages each pair and writes
//! the same value to both vertices.

use crate::buffers::MeshBuffers;
use crate::error::{MeshError, MeshResult};
use crate::layout::CylinderLayout;
use crate::spec::CylinderSpec;
use glam::DVec3;

/// Computes per-vertex normals by averaging adjacent face normals.
///
/// Face normals are weighted by triangle area. Vertices touched by no
/// triangle keep a zero normal.
pub fn compute_vertex_normals(buffers: &MeshBuffers) -> Vec<DVec3> {
    let vertices = buffers.vertices();
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for [i0, i1, i2] in buffers.triangles() {
        let v0 = vertices[i0 as usize];
        let v1 = vertices[i1 as usize];
        let v2 = vertices[i2 as usize];

        let normal = (v1 - v0).cross(v2 - v0);

        normals[i0 as usize] += normal;
        normals[i1 as usize] += normal;
        normals[i2 as usize] += normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}

/// Averages the seam start and seam duplicate normals on every ring.
///
/// No-op when the layout has no duplicated seam column.
///
/// # Errors
///
/// [`MeshError::NormalCountMismatch`] if `normals` does not cover every
/// vertex of the layout.
pub fn smooth_seam_normals(layout: &CylinderLayout, normals: &mut [DVec3]) -> MeshResult<()> {
    if normals.len() != layout.vertex_count() {
        return Err(MeshError::NormalCountMismatch {
            expected: layout.vertex_count(),
            actual: normals.len(),
        });
    }

    for ring in 0..layout.rings() {
        let Some((start, end)) = layout.seam_pair(ring) else {
            return Ok(());
        };

        let average = (normals[start as usize] + normals[end as usize]) / 2.0;
        normals[start as usize] = average;
        normals[end as usize] = average;
    }

    Ok(())
}

/// Generates a cylinder and attaches normals without a host.
///
/// Uses [`compute_vertex_normals`] as the recompute step and applies seam
/// smoothing when `spec.smooth_normal` is set.
pub fn generate_with_normals(spec: &CylinderSpec) -> MeshResult<MeshBuffers> {
    let mut buffers = crate::builder::generate(spec)?;
    let mut normals = compute_vertex_normals(&buffers);

    if spec.smooth_normal {
        smooth_seam_normals(&spec.layout(), &mut normals)?;
    }

    buffers.set_normals(normals)?;
    Ok(buffers)
}
