//! # Cylinder Parameters
//!
//! Immutable parameter set for one mesh generation call.

use crate::error::{MeshError, MeshResult};
use crate::layout::CylinderLayout;
use config::constants::{
    DEFAULT_CIRCLE_RESOLUTION, DEFAULT_GENERATE_ZENITH, DEFAULT_HEIGHT_RESOLUTION,
    DEFAULT_SMOOTH_NORMAL, DEFAULT_SMOOTH_TEXTURE, DEFAULT_SPATIAL_RESOLUTION, MAX_VERTICES,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a cylindrical capture shell.
///
/// The cylinder is centered on the origin with its axis along +Y.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::CylinderSpec;
///
/// let spec = CylinderSpec::from_spatial_resolution(32, 128, 0.5);
/// assert_eq!(spec.height, 64.0);
/// assert!((spec.circumference() - 16.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderSpec {
    /// Shell radius in meters
    pub radius: f64,
    /// Shell height in meters
    pub height: f64,
    /// Angular subdivisions
    pub circle_resolution: u32,
    /// Vertical subdivisions (segments, not rings)
    pub height_resolution: u32,
    /// Duplicate the seam column so UVs wrap cleanly
    pub smooth_texture: bool,
    /// Average normals across the duplicated seam column
    pub smooth_normal: bool,
    /// Close the top with an apex vertex
    pub generate_zenith: bool,
}

impl Default for CylinderSpec {
    fn default() -> Self {
        Self::from_spatial_resolution(
            DEFAULT_CIRCLE_RESOLUTION,
            DEFAULT_HEIGHT_RESOLUTION,
            DEFAULT_SPATIAL_RESOLUTION,
        )
    }
}

impl CylinderSpec {
    /// Derives radius and height from a uniform cell size.
    ///
    /// `circumference = circle_resolution * spatial_resolution`, the radius
    /// follows from the circumference and
    /// `height = height_resolution * spatial_resolution`.
    pub fn from_spatial_resolution(
        circle_resolution: u32,
        height_resolution: u32,
        spatial_resolution: f64,
    ) -> Self {
        let circumference = circle_resolution as f64 * spatial_resolution;

        Self {
            radius: circumference / TAU,
            height: height_resolution as f64 * spatial_resolution,
            circle_resolution,
            height_resolution,
            smooth_texture: DEFAULT_SMOOTH_TEXTURE,
            smooth_normal: DEFAULT_SMOOTH_NORMAL,
            generate_zenith: DEFAULT_GENERATE_ZENITH,
        }
    }

    /// Sets seam texture duplication.
    pub fn with_smooth_texture(mut self, enabled: bool) -> Self {
        self.smooth_texture = enabled;
        self
    }

    /// Sets seam normal smoothing.
    pub fn with_smooth_normal(mut self, enabled: bool) -> Self {
        self.smooth_normal = enabled;
        self
    }

    /// Sets zenith cap generation.
    pub fn with_zenith(mut self, enabled: bool) -> Self {
        self.generate_zenith = enabled;
        self
    }

    /// Circumference of the shell.
    #[inline]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Vertex addressing scheme for this spec.
    #[inline]
    pub fn layout(&self) -> CylinderLayout {
        CylinderLayout::new(self)
    }

    /// Checks the spec before any buffer is allocated.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidResolution`] if either resolution is zero
    /// - [`MeshError::DegenerateGeometry`] if radius or height is not a
    ///   positive finite number
    /// - [`MeshError::TooManyVertices`] if the mesh would exceed
    ///   [`MAX_VERTICES`]
    pub fn validate(&self) -> MeshResult<()> {
        if self.circle_resolution < 1 {
            return Err(MeshError::invalid_resolution(
                "circle_resolution",
                self.circle_resolution,
            ));
        }

        if self.height_resolution < 1 {
            return Err(MeshError::invalid_resolution(
                "height_resolution",
                self.height_resolution,
            ));
        }

        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(MeshError::degenerate(format!(
                "Cylinder radius must be positive: {}",
                self.radius
            )));
        }

        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(MeshError::degenerate(format!(
                "Cylinder height must be positive: {}",
                self.height
            )));
        }

        let count = self.layout().vertex_count();
        if count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }

        Ok(())
    }
}
