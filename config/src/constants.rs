//! # Configuration Constants
//!
//! Centralized constants for the capture rig. Mesh resolution defaults,
//! camera kinematics defaults, naming conventions and safety limits are
//! defined here.
//!
//! ## Categories
//!
//! - **Mesh**: Default cylinder tessellation parameters
//! - **Camera**: Default capture kinematics and slot naming
//! - **Render**: Default off-screen render target settings
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// MESH CONSTANTS
// =============================================================================

/// Default number of angular samples around the cylinder.
pub const DEFAULT_CIRCLE_RESOLUTION: u32 = 32;

/// Default number of vertical segments along the cylinder axis.
///
/// Counts segments, not rings: a cylinder with `n` segments has `n + 1`
/// rings of vertices.
pub const DEFAULT_HEIGHT_RESOLUTION: u32 = 128;

/// Default edge length of one mesh cell in meters.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_HEIGHT_RESOLUTION, DEFAULT_SPATIAL_RESOLUTION};
///
/// let height = DEFAULT_HEIGHT_RESOLUTION as f64 * DEFAULT_SPATIAL_RESOLUTION;
/// assert_eq!(height, 64.0);
/// ```
pub const DEFAULT_SPATIAL_RESOLUTION: f64 = 0.5;

/// Duplicate the seam column so the texture wraps without a UV discontinuity.
pub const DEFAULT_SMOOTH_TEXTURE: bool = true;

/// Average normals across the duplicated seam column.
pub const DEFAULT_SMOOTH_NORMAL: bool = true;

/// Close the top of the cylinder with a zenith apex.
pub const DEFAULT_GENERATE_ZENITH: bool = false;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Default vertical offset applied at both ends of the capture range.
///
/// Negative values shrink the range inside the cylinder, positive values
/// extend it beyond the caps.
pub const DEFAULT_POSITION_OFFSET: f64 = -3.0;

/// Default number of captures per second of travel.
pub const DEFAULT_SAMPLING_RESOLUTION: f64 = 1.0;

/// Default linear camera speed along the cylinder axis.
pub const DEFAULT_VELOCITY: f64 = 0.5;

/// Default angular camera speed in degrees per second.
///
/// Carried for callers but never applied to slot rotation.
pub const DEFAULT_ROTATION_VELOCITY: f64 = 30.0;

/// Fixed yaw added to the cylinder rotation for every camera slot, in degrees.
pub const CAMERA_YAW_OFFSET_DEGREES: f64 = 45.0;

/// Prefix of every camera slot name. The zero-padded index follows it.
///
/// # Example
///
/// ```rust
/// use config::constants::CAMERA_NAME_PREFIX;
///
/// assert_eq!(format!("{CAMERA_NAME_PREFIX}{:0>2}", 7), "CylinderCamera07");
/// ```
pub const CAMERA_NAME_PREFIX: &str = "CylinderCamera";

/// Name given to a camera array root object when the host supplies none.
pub const DEFAULT_CAMERA_ARRAY_NAME: &str = "CylinderCameraArray";

// =============================================================================
// RENDER CONSTANTS
// =============================================================================

/// Default off-screen render width in pixels.
pub const DEFAULT_RENDER_WIDTH: u32 = 1024;

/// Default off-screen render height in pixels.
pub const DEFAULT_RENDER_HEIGHT: u32 = 1024;

/// Default directory (relative to the host project) for rendered images.
pub const DEFAULT_RENDER_DIR: &str = "output";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single cylinder mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 33 * 129 + 1;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of camera slots in one camera array.
///
/// Guards against runaway slot counts from tiny velocities or huge
/// sampling rates.
pub const MAX_CAMERA_SLOTS: usize = 100_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of decimal digits needed to print `value`. Zero has one digit.
///
/// # Example
///
/// ```rust
/// use config::constants::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(9), 1);
/// assert_eq!(digit_count(10), 2);
/// assert_eq!(digit_count(1234), 4);
/// ```
pub fn digit_count(value: usize) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}
