//! # Planner
//!
//! Pure placement of the camera ladder.
//!
//! Slot `i` sits at `initial_height - i * camera_height_resolution` above
//! the cylinder position. Every slot shares the cylinder rotation plus a
//! fixed yaw of [`CAMERA_YAW_OFFSET_DEGREES`]; `rotation_velocity` does not
//! take part.

use crate::error::CameraResult;
use crate::slot::{digit_width, slot_name, SlotPlacement};
use crate::spec::{CameraArraySpec, Transform};
use config::constants::CAMERA_YAW_OFFSET_DEGREES;
use glam::DVec3;

/// Computes name and transform for every slot of `spec`.
///
/// # Errors
///
/// Any error from [`CameraArraySpec::target_count`].
///
/// # Example
///
/// ```rust
/// use camera_array::{plan_layout, CameraArraySpec, CameraKinematics};
///
/// let kinematics = CameraKinematics {
///     position_offset: 0.0,
///     velocity: 1.0,
///     sampling_resolution: 1.0,
///     ..CameraKinematics::default()
/// };
/// let slots = plan_layout(&CameraArraySpec::new(5.0, kinematics)).unwrap();
/// assert_eq!(slots.len(), 5);
/// assert_eq!(slots[4].name, "CylinderCamera4");
/// ```
pub fn plan_layout(spec: &CameraArraySpec) -> CameraResult<Vec<SlotPlacement>> {
    let count = spec.target_count()?;
    let width = digit_width(count);

    let initial_height = spec.initial_height();
    let step = spec.camera_height_resolution();
    let rotation = spec.cylinder_rotation + DVec3::new(0.0, CAMERA_YAW_OFFSET_DEGREES, 0.0);

    Ok((0..count)
        .map(|index| SlotPlacement {
            index,
            name: slot_name(index, width),
            transform: Transform::new(
                spec.cylinder_position
                    + DVec3::new(0.0, initial_height - index as f64 * step, 0.0),
                rotation,
            ),
        })
        .collect())
}
