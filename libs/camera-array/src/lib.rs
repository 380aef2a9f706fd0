//! # Camera Array
//!
//! Plans and maintains a vertical ladder of capture cameras along the axis
//! of a panoramic cylinder.
//!
//! ## Architecture
//!
//! ```text
//! CameraArraySpec → plan_layout() → Vec<SlotPlacement>
//!                                         ↓
//!         CameraArray::reconcile(SceneBinding) → ReconcileReport
//!                                         ↓
//!              render_all(RenderSink) → one image per slot
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use camera_array::{CameraArray, CameraArraySpec, CameraKinematics, MemoryScene};
//!
//! let mut scene = MemoryScene::new();
//! let mut array = CameraArray::new("Rig");
//! let spec = CameraArraySpec::new(64.0, CameraKinematics::default());
//! array.reconcile(&spec, &mut scene)?;
//! assert_eq!(array.len(), 116);
//! assert_eq!(array.slots()[0].name, "CylinderCamera000");
//! # Ok::<(), camera_array::CameraArrayError>(())
//! ```

pub mod array;
pub mod error;
pub mod planner;
pub mod render;
pub mod scene;
pub mod slot;
pub mod spec;

pub use array::{CameraArray, ReconcileReport};
pub use error::{CameraArrayError, CameraResult};
pub use planner::plan_layout;
pub use render::{render_all, CaptureSettings, ImageEncoding, RenderSink};
pub use scene::{MemoryScene, NodeId, ObjectKind, SceneBinding};
pub use slot::{digit_width, slot_name, CameraSlot, SlotPlacement};
pub use spec::{CameraArraySpec, CameraKinematics, CylinderBinding, Transform};
