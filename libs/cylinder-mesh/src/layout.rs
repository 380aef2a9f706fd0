//! # Vertex Layout
//!
//! Index addressing for the ring/column grid of a cylinder shell.
//!
//! ```text
//! [zenith?] ring 0: c0 c1 .. cN-1 [seam] ring 1: ... ring H: ... nadir
//! ```
//!
//! Triangulation and seam smoothing both derive their indices from here,
//! so the two passes never disagree about where a vertex lives.

use crate::spec::CylinderSpec;

/// Derived addressing scheme of a [`CylinderSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CylinderLayout {
    circle_resolution: u32,
    columns: u32,
    rings: u32,
    vertex_offset: u32,
    smooth_texture: bool,
    zenith: bool,
}

impl CylinderLayout {
    /// Builds the layout for `spec`. Does not validate the spec.
    pub fn new(spec: &CylinderSpec) -> Self {
        let seam = u32::from(spec.smooth_texture);
        let zenith = spec.generate_zenith;

        Self {
            circle_resolution: spec.circle_resolution,
            columns: spec.circle_resolution.saturating_add(seam),
            rings: spec.height_resolution.saturating_add(1),
            vertex_offset: u32::from(zenith),
            smooth_texture: spec.smooth_texture,
            zenith,
        }
    }

    /// Vertices per ring, including the seam duplicate when present.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rings (`height_resolution + 1`).
    #[inline]
    pub fn rings(&self) -> u32 {
        self.rings
    }

    /// One when the zenith occupies index 0, otherwise zero.
    #[inline]
    pub fn vertex_offset(&self) -> u32 {
        self.vertex_offset
    }

    /// Index of the zenith apex, if generated.
    #[inline]
    pub fn zenith_index(&self) -> Option<u32> {
        self.zenith.then_some(0)
    }

    /// Index of the nadir apex. Always the last vertex.
    #[inline]
    pub fn nadir_index(&self) -> u32 {
        self.columns * self.rings + self.vertex_offset
    }

    /// Total vertex count: grid plus nadir plus optional zenith.
    pub fn vertex_count(&self) -> usize {
        self.columns as usize * self.rings as usize + 1 + self.vertex_offset as usize
    }

    /// Total triangle count.
    ///
    /// Every real column emits one bottom-facing triangle per ring and one
    /// top-facing triangle per ring except the first ring of an open top.
    pub fn triangle_count(&self) -> usize {
        let per_column = 2 * self.rings as usize - 1 + self.vertex_offset as usize;
        self.circle_resolution as usize * per_column
    }

    /// Index of the grid vertex at `ring`, `column`.
    #[inline]
    pub fn index(&self, ring: u32, column: u32) -> u32 {
        ring * self.columns + column + self.vertex_offset
    }

    /// Column to the right of `column` along the ring.
    ///
    /// With a seam duplicate the last real column connects to the duplicate;
    /// otherwise it wraps back to column 0.
    #[inline]
    pub fn right_column(&self, column: u32) -> u32 {
        if self.smooth_texture {
            column + 1
        } else {
            (column + 1) % self.circle_resolution
        }
    }

    /// Returns `true` for the duplicated seam column, which emits no cells.
    #[inline]
    pub fn is_seam_column(&self, column: u32) -> bool {
        column == self.circle_resolution
    }

    /// Indices of the seam start and seam duplicate on `ring`.
    ///
    /// `None` when the layout has no duplicated seam column.
    pub fn seam_pair(&self, ring: u32) -> Option<(u32, u32)> {
        if !self.smooth_texture || ring >= self.rings {
            return None;
        }

        let start = self.index(ring, 0);
        Some((start, start + self.circle_resolution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(circle: u32, height: u32, smooth: bool, zenith: bool) -> CylinderSpec {
        CylinderSpec::from_spatial_resolution(circle, height, 1.0)
            .with_smooth_texture(smooth)
            .with_zenith(zenith)
    }

    #[test]
    fn test_layout_without_seam_or_zenith() {
        let layout = spec(4, 2, false, false).layout();
        assert_eq!(layout.columns(), 4);
        assert_eq!(layout.rings(), 3);
        assert_eq!(layout.vertex_offset(), 0);
        assert_eq!(layout.zenith_index(), None);
        assert_eq!(layout.nadir_index(), 12);
        assert_eq!(layout.vertex_count(), 13);
        assert_eq!(layout.triangle_count(), 4 * 5);
    }

    #[test]
    fn test_layout_with_seam_and_zenith() {
        let layout = spec(4, 2, true, true).layout();
        assert_eq!(layout.columns(), 5);
        assert_eq!(layout.vertex_offset(), 1);
        assert_eq!(layout.zenith_index(), Some(0));
        assert_eq!(layout.index(0, 0), 1);
        assert_eq!(layout.index(1, 2), 8);
        assert_eq!(layout.nadir_index(), 16);
        assert_eq!(layout.vertex_count(), 17);
        assert_eq!(layout.triangle_count(), 4 * 6);
    }

    #[test]
    fn test_right_column_wraps_without_seam() {
        let layout = spec(4, 1, false, false).layout();
        assert_eq!(layout.right_column(2), 3);
        assert_eq!(layout.right_column(3), 0);
    }

    #[test]
    fn test_right_column_reaches_duplicate_with_seam() {
        let layout = spec(4, 1, true, false).layout();
        assert_eq!(layout.right_column(3), 4);
        assert!(layout.is_seam_column(4));
    }

    #[test]
    fn test_seam_pair() {
        let layout = spec(4, 2, true, true).layout();
        assert_eq!(layout.seam_pair(0), Some((1, 5)));
        assert_eq!(layout.seam_pair(2), Some((11, 15)));
        assert_eq!(layout.seam_pair(3), None);

        let layout = spec(4, 2, false, true).layout();
        assert_eq!(layout.seam_pair(0), None);
    }
}
