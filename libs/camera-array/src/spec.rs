//! # Camera Array Parameters
//!
//! Cylinder binding and camera kinematics, plus the derived quantities the
//! planner needs.
//!
//! ```text
//! fixed_height = height + 2 * position_offset
//! fixed_time   = fixed_height / velocity
//! target_count = floor(fixed_time * sampling_resolution), clamped at 0
//! ```

use crate::error::{CameraArrayError, CameraResult};
use config::constants::{
    DEFAULT_POSITION_OFFSET, DEFAULT_ROTATION_VELOCITY, DEFAULT_SAMPLING_RESOLUTION,
    DEFAULT_VELOCITY, MAX_CAMERA_SLOTS,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position and Euler rotation (degrees) of a scene object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World position
    pub position: DVec3,
    /// Euler angles in degrees
    pub rotation: DVec3,
}

impl Transform {
    /// Creates a transform.
    pub fn new(position: DVec3, rotation: DVec3) -> Self {
        Self { position, rotation }
    }
}

/// Camera motion along the cylinder axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraKinematics {
    /// Extra range at each end; negative shrinks the range
    pub position_offset: f64,
    /// Linear speed along the axis
    pub velocity: f64,
    /// Captures per second
    pub sampling_resolution: f64,
    /// Angular speed in degrees per second. Not applied to placement.
    pub rotation_velocity: f64,
}

impl Default for CameraKinematics {
    fn default() -> Self {
        Self {
            position_offset: DEFAULT_POSITION_OFFSET,
            velocity: DEFAULT_VELOCITY,
            sampling_resolution: DEFAULT_SAMPLING_RESOLUTION,
            rotation_velocity: DEFAULT_ROTATION_VELOCITY,
        }
    }
}

/// The cylinder a camera array is sized to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderBinding {
    /// World transform of the cylinder object
    pub transform: Transform,
    /// Cylinder height in meters
    pub height: f64,
}

/// Everything the planner reads.
///
/// # Example
///
/// ```rust
/// use camera_array::{CameraArraySpec, CameraKinematics};
///
/// let kinematics = CameraKinematics {
///     position_offset: -1.0,
///     velocity: 2.0,
///     sampling_resolution: 1.0,
///     ..CameraKinematics::default()
/// };
/// let spec = CameraArraySpec::new(10.0, kinematics);
/// assert_eq!(spec.target_count().unwrap(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraArraySpec {
    /// Height of the bound cylinder
    pub cylinder_height: f64,
    /// Camera motion
    #[serde(default)]
    pub kinematics: CameraKinematics,
    /// Cylinder world position
    #[serde(default)]
    pub cylinder_position: DVec3,
    /// Cylinder world rotation (Euler degrees)
    #[serde(default)]
    pub cylinder_rotation: DVec3,
}

impl CameraArraySpec {
    /// Creates a spec for a cylinder at the origin.
    pub fn new(cylinder_height: f64, kinematics: CameraKinematics) -> Self {
        Self {
            cylinder_height,
            kinematics,
            cylinder_position: DVec3::ZERO,
            cylinder_rotation: DVec3::ZERO,
        }
    }

    /// Creates a spec from a bound cylinder.
    ///
    /// # Errors
    ///
    /// [`CameraArrayError::Precondition`] if no cylinder is bound.
    pub fn for_cylinder(
        kinematics: CameraKinematics,
        cylinder: Option<&CylinderBinding>,
    ) -> CameraResult<Self> {
        let cylinder = cylinder.ok_or_else(|| {
            CameraArrayError::Precondition("camera array has no cylinder bound".to_string())
        })?;

        Ok(Self {
            cylinder_height: cylinder.height,
            kinematics,
            cylinder_position: cylinder.transform.position,
            cylinder_rotation: cylinder.transform.rotation,
        })
    }

    /// Sets the cylinder world transform.
    pub fn with_cylinder_transform(mut self, transform: Transform) -> Self {
        self.cylinder_position = transform.position;
        self.cylinder_rotation = transform.rotation;
        self
    }

    /// Rejects non-finite inputs and zero velocity.
    ///
    /// Only fields that feed slot placement are checked;
    /// `rotation_velocity` is carried through untouched.
    pub fn validate(&self) -> CameraResult<()> {
        let scalars = [
            ("cylinder_height", self.cylinder_height),
            ("position_offset", self.kinematics.position_offset),
            ("velocity", self.kinematics.velocity),
            ("sampling_resolution", self.kinematics.sampling_resolution),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(CameraArrayError::InvalidParameter { name, value });
            }
        }

        let vectors = [
            ("cylinder_position", self.cylinder_position),
            ("cylinder_rotation", self.cylinder_rotation),
        ];
        for (name, value) in vectors {
            if !value.is_finite() {
                return Err(CameraArrayError::InvalidParameter {
                    name,
                    value: value.x + value.y + value.z,
                });
            }
        }

        if self.kinematics.velocity == 0.0 {
            return Err(CameraArrayError::DivisionByZero {
                divisor: "velocity",
            });
        }

        Ok(())
    }

    /// Length of the capture range.
    #[inline]
    pub fn fixed_height(&self) -> f64 {
        self.cylinder_height + 2.0 * self.kinematics.position_offset
    }

    /// Travel time over the capture range.
    pub fn fixed_time(&self) -> CameraResult<f64> {
        self.validate()?;
        Ok(self.fixed_height() / self.kinematics.velocity)
    }

    /// Number of camera slots. Negative results clamp to zero.
    ///
    /// # Errors
    ///
    /// - [`CameraArrayError::DivisionByZero`] if velocity is zero
    /// - [`CameraArrayError::InvalidParameter`] for non-finite inputs
    /// - [`CameraArrayError::TooManySlots`] above [`MAX_CAMERA_SLOTS`]
    pub fn target_count(&self) -> CameraResult<usize> {
        let samples = (self.fixed_time()? * self.kinematics.sampling_resolution).floor();

        if samples <= 0.0 {
            return Ok(0);
        }

        if samples > MAX_CAMERA_SLOTS as f64 {
            return Err(CameraArrayError::TooManySlots {
                count: samples as usize,
                max: MAX_CAMERA_SLOTS,
            });
        }

        Ok(samples as usize)
    }

    /// Height of the first (topmost) slot relative to the cylinder center.
    #[inline]
    pub fn initial_height(&self) -> f64 {
        self.cylinder_height / 2.0 + self.kinematics.position_offset
    }

    /// Vertical distance between consecutive slots.
    #[inline]
    pub fn camera_height_resolution(&self) -> f64 {
        self.kinematics.velocity / self.kinematics.sampling_resolution
    }

    /// Rotation travelled between consecutive samples, in degrees.
    ///
    /// Exposed for hosts that animate cameras; slot placement ignores it.
    #[inline]
    pub fn rotation_resolution(&self) -> f64 {
        self.kinematics.rotation_velocity / self.kinematics.sampling_resolution
    }
}
