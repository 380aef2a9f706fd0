//! # Cylinder Builder
//!
//! Triangulates the cylindrical shell described by a [`CylinderSpec`].
//!
//! Rings run top to bottom (`v` from 1 to 0), columns run around +Y
//! (`u` from 1 to 0). Each cell between ring `i` and ring `i + 1` is split
//! into a top-facing triangle owned by ring `i + 1` and a bottom-facing
//! triangle owned by ring `i`. The first ring fans to the zenith when one
//! exists; the last ring always fans to the nadir.

use crate::buffers::MeshBuffers;
use crate::error::MeshResult;
use crate::layout::CylinderLayout;
use crate::spec::CylinderSpec;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

/// Generates vertex, UV and index buffers for `spec`.
///
/// Normals are not computed here; see [`crate::normals`].
///
/// # Errors
///
/// Returns the error from [`CylinderSpec::validate`] without allocating
/// any buffer.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::{generate, CylinderSpec};
///
/// let spec = CylinderSpec::from_spatial_resolution(8, 4, 0.5);
/// let buffers = generate(&spec).unwrap();
/// assert_eq!(buffers.vertex_count(), 9 * 5 + 1);
/// ```
pub fn generate(spec: &CylinderSpec) -> MeshResult<MeshBuffers> {
    spec.validate()?;

    let layout = spec.layout();
    let mut buffers = MeshBuffers::with_capacity(layout.vertex_count(), layout.triangle_count());

    let circle_resolution = spec.circle_resolution as f64;
    let height_resolution = spec.height_resolution as f64;

    if let Some(zenith) = layout.zenith_index() {
        let index = buffers.push_vertex(
            DVec3::new(0.0, spec.height / 2.0, 0.0),
            DVec2::new(0.0, 1.0),
        );
        debug_assert_eq!(index, zenith);
    }

    for ring in 0..layout.rings() {
        let v = 1.0 - ring as f64 / height_resolution;
        let y = spec.height * (v - 0.5);

        for column in 0..layout.columns() {
            let angle = TAU * column as f64 / circle_resolution;
            let u = 1.0 - column as f64 / circle_resolution;
            let (sin, cos) = angle.sin_cos();

            buffers.push_vertex(
                DVec3::new(spec.radius * cos, y, spec.radius * sin),
                DVec2::new(u, v),
            );

            if layout.is_seam_column(column) {
                continue;
            }

            let index = layout.index(ring, column);
            let right = layout.right_column(column);
            let right_index = layout.index(ring, right);

            if let Some(top_index) = top_index(&layout, ring, column) {
                buffers.push_triangle(top_index, index, right_index);
            }

            let bottom_right_index = if ring + 1 >= layout.rings() {
                layout.nadir_index()
            } else {
                layout.index(ring + 1, right)
            };
            buffers.push_triangle(right_index, index, bottom_right_index);
        }
    }

    let nadir = buffers.push_vertex(DVec3::new(0.0, -spec.height / 2.0, 0.0), DVec2::ZERO);
    debug_assert_eq!(nadir, layout.nadir_index());

    log::debug!(
        "generated cylinder {}x{}: {} vertices, {} triangles",
        spec.circle_resolution,
        spec.height_resolution,
        buffers.vertex_count(),
        buffers.triangle_count()
    );

    Ok(buffers)
}

/// Apex of the top-facing triangle for a cell, or `None` for the open top.
fn top_index(layout: &CylinderLayout, ring: u32, column: u32) -> Option<u32> {
    match ring {
        0 => layout.zenith_index(),
        _ => Some(layout.index(ring - 1, column)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(circle: u32, height: u32) -> CylinderSpec {
        CylinderSpec::from_spatial_resolution(circle, height, 1.0)
    }

    #[test]
    fn test_open_cylinder_counts() {
        let spec = spec(4, 2).with_smooth_texture(false);
        let buffers = generate(&spec).unwrap();
        assert_eq!(buffers.vertex_count(), 4 * 3 + 1);
        assert_eq!(buffers.triangle_count(), spec.layout().triangle_count());
        assert!(buffers.validate().is_ok());
    }

    #[test]
    fn test_first_triangles_without_seam() {
        // ring 0, column 0 on an open top: only the bottom-facing triangle
        let spec = spec(4, 2).with_smooth_texture(false);
        let buffers = generate(&spec).unwrap();
        let first: Vec<[u32; 3]> = buffers.triangles().take(4).collect();
        assert_eq!(first, vec![[1, 0, 5], [2, 1, 6], [3, 2, 7], [0, 3, 4]]);
    }

    #[test]
    fn test_first_triangles_with_zenith() {
        let spec = spec(4, 1).with_smooth_texture(false).with_zenith(true);
        let buffers = generate(&spec).unwrap();
        let first: Vec<[u32; 3]> = buffers.triangles().take(2).collect();
        assert_eq!(first, vec![[0, 1, 2], [2, 1, 6]]);
    }

    #[test]
    fn test_last_ring_fans_to_nadir() {
        let spec = spec(3, 1).with_smooth_texture(false);
        let buffers = generate(&spec).unwrap();
        let nadir = spec.layout().nadir_index();
        let last: Vec<[u32; 3]> = buffers.triangles().skip(3).collect();
        // ring 1: top triangle then nadir fan per column
        assert_eq!(
            last,
            vec![[0, 3, 4], [4, 3, nadir], [1, 4, 5], [5, 4, nadir], [2, 5, 3], [3, 5, nadir]]
        );
    }

    #[test]
    fn test_ring_heights_centered() {
        let spec = spec(4, 4);
        let buffers = generate(&spec).unwrap();
        let (min, max) = buffers.bounding_box();
        assert_relative_eq!(max.y, spec.height / 2.0);
        assert_relative_eq!(min.y, -spec.height / 2.0);
    }

    #[test]
    fn test_uv_ranges() {
        let spec = spec(6, 3);
        let buffers = generate(&spec).unwrap();
        for uv in buffers.uvs() {
            assert!((0.0..=1.0).contains(&uv.x));
            assert!((0.0..=1.0).contains(&uv.y));
        }
        // first ring vertex sits at u = 1, v = 1
        assert_eq!(buffers.uvs()[0], DVec2::new(1.0, 1.0));
        // nadir sits at (0, 0)
        assert_eq!(*buffers.uvs().last().unwrap(), DVec2::ZERO);
    }

    #[test]
    fn test_zenith_vertex() {
        let spec = spec(5, 2).with_zenith(true);
        let buffers = generate(&spec).unwrap();
        assert_eq!(buffers.vertices()[0], DVec3::new(0.0, spec.height / 2.0, 0.0));
        assert_eq!(buffers.uvs()[0], DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_invalid_spec_rejected() {
        assert!(generate(&spec(0, 4)).is_err());
        assert!(generate(&spec(4, 0)).is_err());
    }

    #[test]
    fn test_single_segment_cylinder() {
        let spec = spec(1, 1).with_smooth_texture(false);
        let buffers = generate(&spec).unwrap();
        assert_eq!(buffers.vertex_count(), 3);
        assert!(buffers.validate().is_ok());
    }
}
