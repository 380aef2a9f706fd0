//! # Config Crate
//!
//! Centralized configuration constants for the cylinder capture rig.
//! All default parameters, naming conventions and safety limits are defined
//! here so the mesh builder, the camera planner and the WASM facade agree
//! on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CIRCLE_RESOLUTION, DEFAULT_SPATIAL_RESOLUTION};
//!
//! let circumference = DEFAULT_CIRCLE_RESOLUTION as f64 * DEFAULT_SPATIAL_RESOLUTION;
//! assert_eq!(circumference, 16.0);
//! ```
//!
//! ## Contents
//!
//! - Mesh and kinematics defaults shared by the editor-facing structs
//! - Camera naming (`CylinderCamera` prefix plus zero-padded index)
//! - Vertex and slot limits, checked before anything is allocated

pub mod constants;

#[cfg(test)]
mod tests;
