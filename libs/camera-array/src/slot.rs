//! # Camera Slots
//!
//! Slot naming and the slot records kept by a camera array.
//!
//! Names are a pure function of `(index, slot count)`: the index is
//! zero-padded to the digit count of the highest index. Nothing stores the
//! current width; it is recomputed whenever names are checked.

use crate::spec::Transform;
use config::constants::{digit_count, CAMERA_NAME_PREFIX};
use serde::{Deserialize, Serialize};

/// Zero-pad width for an array of `count` slots.
///
/// # Example
///
/// ```rust
/// use camera_array::digit_width;
///
/// assert_eq!(digit_width(0), 1);
/// assert_eq!(digit_width(10), 1);
/// assert_eq!(digit_width(11), 2);
/// ```
#[inline]
pub fn digit_width(count: usize) -> usize {
    digit_count(count.saturating_sub(1))
}

/// Name of the slot at `index` padded to `width` digits.
///
/// # Example
///
/// ```rust
/// use camera_array::slot_name;
///
/// assert_eq!(slot_name(3, 2), "CylinderCamera03");
/// ```
pub fn slot_name(index: usize, width: usize) -> String {
    format!("{CAMERA_NAME_PREFIX}{index:0width$}")
}

/// Planned position and orientation of one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPlacement {
    /// Zero-based position in the ladder, top first
    pub index: usize,
    /// Zero-padded slot name
    pub name: String,
    /// World transform
    pub transform: Transform,
}

/// A slot bound to a host scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSlot<H> {
    /// Host scene handle
    pub handle: H,
    /// Name last written to the host
    pub name: String,
    /// Transform last written to the host
    pub transform: Transform,
}

impl<H> CameraSlot<H> {
    /// Creates a slot record for an existing host object.
    pub fn new(handle: H, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            transform: Transform::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_width_boundaries() {
        assert_eq!(digit_width(1), 1);
        assert_eq!(digit_width(5), 1);
        assert_eq!(digit_width(10), 1);
        assert_eq!(digit_width(11), 2);
        assert_eq!(digit_width(100), 2);
        assert_eq!(digit_width(101), 3);
    }

    #[test]
    fn test_slot_name_padding() {
        assert_eq!(slot_name(0, 1), "CylinderCamera0");
        assert_eq!(slot_name(7, 3), "CylinderCamera007");
        assert_eq!(slot_name(123, 2), "CylinderCamera123");
    }
}
