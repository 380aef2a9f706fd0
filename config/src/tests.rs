//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// MESH DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_resolutions_are_positive() {
    assert!(DEFAULT_CIRCLE_RESOLUTION >= 1);
    assert!(DEFAULT_HEIGHT_RESOLUTION >= 1);
    assert!(DEFAULT_SPATIAL_RESOLUTION > 0.0);
}

#[test]
fn test_default_mesh_fits_vertex_limit() {
    let columns = DEFAULT_CIRCLE_RESOLUTION as usize + 1;
    let rings = DEFAULT_HEIGHT_RESOLUTION as usize + 1;
    assert!(columns * rings + 2 < MAX_VERTICES);
}

#[test]
fn test_default_cylinder_is_open_topped() {
    assert!(!DEFAULT_GENERATE_ZENITH);
}

// =============================================================================
// CAMERA DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_velocity_is_nonzero() {
    // Zero velocity is a division error in the planner
    assert!(DEFAULT_VELOCITY != 0.0);
}

#[test]
fn test_default_sampling_is_positive() {
    assert!(DEFAULT_SAMPLING_RESOLUTION > 0.0);
}

#[test]
fn test_yaw_offset_is_45_degrees() {
    assert_eq!(CAMERA_YAW_OFFSET_DEGREES, 45.0);
}

#[test]
fn test_camera_prefix_not_empty() {
    assert!(!CAMERA_NAME_PREFIX.is_empty());
}

#[test]
fn test_default_ladder_fits_slot_limit() {
    let height = DEFAULT_HEIGHT_RESOLUTION as f64 * DEFAULT_SPATIAL_RESOLUTION;
    let time = (height + 2.0 * DEFAULT_POSITION_OFFSET) / DEFAULT_VELOCITY;
    let count = (time * DEFAULT_SAMPLING_RESOLUTION).floor() as usize;
    assert_eq!(count, 116);
    assert!(count < MAX_CAMERA_SLOTS);
}

#[test]
fn test_render_size_is_nonzero() {
    assert!(DEFAULT_RENDER_WIDTH > 0);
    assert!(DEFAULT_RENDER_HEIGHT > 0);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_digit_count_boundaries() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(1), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(99), 2);
    assert_eq!(digit_count(100), 3);
}

#[test]
fn test_digit_count_large_value() {
    assert_eq!(digit_count(usize::MAX), usize::MAX.to_string().len());
}
