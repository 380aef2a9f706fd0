//! WASM-facing entry points for the cylinder capture rig.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let mesh = capture_rig_wasm::generate_cylinder_internal(8, 4, 0.5, true, true, false).unwrap();
//! assert_eq!(mesh.vertex_count(), 9 * 5 + 1);
//! ```

use camera_array::{plan_layout, CameraArraySpec, SlotPlacement};
use cylinder_mesh::{generate_with_normals, CylinderSpec, MeshError};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "capture-rig-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console.
///
/// # Errors
/// Returns a JavaScript error if a logger is already installed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_logging() -> Result<(), JsValue> {
    console_log::init_with_level(log::Level::Info).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Generates a cylinder mesh with normals.
///
/// # Errors
/// Returns a JavaScript error with a human-readable message when the
/// parameters are invalid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_cylinder(32, 128, 0.5, true, true, false);
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn generate_cylinder(
    circle_resolution: u32,
    height_resolution: u32,
    spatial_resolution: f64,
    smooth_texture: bool,
    smooth_normal: bool,
    generate_zenith: bool,
) -> Result<MeshHandle, JsValue> {
    generate_cylinder_internal(
        circle_resolution,
        height_resolution,
        spatial_resolution,
        smooth_texture,
        smooth_normal,
        generate_zenith,
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only variant of [`generate_cylinder`] returning typed errors.
pub fn generate_cylinder_internal(
    circle_resolution: u32,
    height_resolution: u32,
    spatial_resolution: f64,
    smooth_texture: bool,
    smooth_normal: bool,
    generate_zenith: bool,
) -> Result<MeshHandle, MeshError> {
    let spec =
        CylinderSpec::from_spatial_resolution(circle_resolution, height_resolution, spatial_resolution)
            .with_smooth_texture(smooth_texture)
            .with_smooth_normal(smooth_normal)
            .with_zenith(generate_zenith);

    let buffers = generate_with_normals(&spec)?;
    Ok(MeshHandle::from_buffers(&buffers))
}

/// Plans a camera ladder from a JSON `CameraArraySpec`.
///
/// Returns a JSON array of slot placements (`index`, `name`, `transform`).
///
/// # Errors
/// Returns a JavaScript error if the JSON is malformed or planning fails
/// (for example zero velocity).
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const slots = JSON.parse(plan_camera_ladder(JSON.stringify({
/// //   cylinder_height: 64,
/// //   kinematics: { velocity: 0.5 },
/// // })));
/// ```
#[wasm_bindgen]
pub fn plan_camera_ladder(spec_json: &str) -> Result<String, JsValue> {
    let spec: CameraArraySpec =
        serde_json::from_str(spec_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let placements =
        plan_camera_ladder_internal(&spec).map_err(|err| JsValue::from_str(&err.to_string()))?;
    serde_json::to_string(&placements).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only variant of [`plan_camera_ladder`] returning typed errors.
pub fn plan_camera_ladder_internal(
    spec: &CameraArraySpec,
) -> Result<Vec<SlotPlacement>, camera_array::CameraArrayError> {
    let placements = plan_layout(spec)?;
    log::debug!("planned {} camera slots", placements.len());
    Ok(placements)
}
