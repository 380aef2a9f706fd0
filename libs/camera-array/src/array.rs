//! # Camera Array
//!
//! The slot collection owned by one capture rig and its reconciliation
//! against a freshly planned layout.
//!
//! ## Reconciliation
//!
//! ```text
//! plan_layout(spec)                  (fails before any mutation)
//!   → ensure root object
//!   → drop slots destroyed by the host
//!   → grow: rename survivors, then create missing slots
//!     shrink: destroy from the end, then rename survivors
//!   → write transforms
//! ```

use crate::error::{CameraArrayError, CameraResult};
use crate::planner::plan_layout;
use crate::scene::{ObjectKind, SceneBinding};
use crate::slot::{digit_width, slot_name, CameraSlot, SlotPlacement};
use crate::spec::CameraArraySpec;
use config::constants::DEFAULT_CAMERA_ARRAY_NAME;
use serde::{Deserialize, Serialize};

/// What a reconciliation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// The root object had to be created
    pub root_created: bool,
    /// Stale slots dropped before planning
    pub compacted: usize,
    /// New slots created
    pub created: usize,
    /// Slots destroyed past the target count
    pub destroyed: usize,
    /// Surviving slots renamed
    pub renamed: usize,
}

/// Camera slots under one root object.
///
/// # Example
///
/// ```rust
/// use camera_array::{CameraArray, CameraArraySpec, CameraKinematics, MemoryScene};
///
/// let mut scene = MemoryScene::new();
/// let mut array = CameraArray::new("Rig");
/// let kinematics = CameraKinematics {
///     position_offset: 0.0,
///     velocity: 1.0,
///     sampling_resolution: 1.0,
///     ..CameraKinematics::default()
/// };
/// let report = array
///     .reconcile(&CameraArraySpec::new(5.0, kinematics), &mut scene)
///     .unwrap();
/// assert_eq!(report.created, 5);
/// assert_eq!(array.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraArray<H> {
    name: String,
    root: Option<H>,
    slots: Vec<CameraSlot<H>>,
}

impl<H> Default for CameraArray<H> {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_ARRAY_NAME)
    }
}

impl<H> CameraArray<H> {
    /// Creates an empty array with no root object yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: None,
            slots: Vec::new(),
        }
    }

    /// Name of the root object.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root object handle, if created.
    pub fn root(&self) -> Option<&H> {
        self.root.as_ref()
    }

    /// Slots in ladder order, top first.
    pub fn slots(&self) -> &[CameraSlot<H>] {
        &self.slots
    }

    /// Number of tracked slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot is tracked.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Zero-pad width for the current slot count.
    pub fn digit_width(&self) -> usize {
        digit_width(self.slots.len())
    }
}

impl<H: Clone + PartialEq + std::fmt::Debug> CameraArray<H> {
    /// Rebuilds the slot list from the children of an existing root object.
    ///
    /// Used after a host reloads its scene: the children of `root`, in
    /// order, become slots `0..n`.
    ///
    /// # Errors
    ///
    /// [`CameraArrayError::StaleHandle`] if `root` is not alive.
    pub fn attach<S>(scene: &S, name: impl Into<String>, root: H) -> CameraResult<Self>
    where
        S: SceneBinding<Handle = H>,
    {
        if !scene.is_alive(&root) {
            return Err(CameraArrayError::StaleHandle(format!(
                "camera array root {root:?} is not alive"
            )));
        }

        let slots = scene
            .children(&root)?
            .into_iter()
            .map(|handle| {
                let name = scene.name(&handle)?;
                let transform = scene.transform(&handle)?;
                Ok(CameraSlot {
                    handle,
                    name,
                    transform,
                })
            })
            .collect::<CameraResult<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            root: Some(root),
            slots,
        })
    }

    /// Brings the scene in line with `spec`.
    ///
    /// Planning errors (zero velocity, non-finite input, slot limit) are
    /// returned before the scene or the slot list is touched. Errors from
    /// the scene binding itself may leave a partially updated array.
    pub fn reconcile<S>(
        &mut self,
        spec: &CameraArraySpec,
        scene: &mut S,
    ) -> CameraResult<ReconcileReport>
    where
        S: SceneBinding<Handle = H>,
    {
        let placements = plan_layout(spec)?;
        let target = placements.len();
        let width = digit_width(target);

        let mut report = ReconcileReport::default();
        let root = self.ensure_root(scene, &mut report)?;

        report.compacted = self.compact(scene);

        if self.slots.len() < target {
            report.renamed = self.rename_survivors(scene, width)?;
            report.created = self.create_slots(scene, &root, &placements)?;
        } else {
            report.destroyed = self.destroy_excess(scene, target);
            report.renamed = self.rename_survivors(scene, width)?;
        }

        for (slot, placement) in self.slots.iter_mut().zip(&placements) {
            scene.set_transform(&slot.handle, placement.transform)?;
            slot.transform = placement.transform;
        }

        log::info!(
            "camera array '{}': {} slots ({} created, {} destroyed, {} renamed, {} compacted)",
            self.name,
            self.slots.len(),
            report.created,
            report.destroyed,
            report.renamed,
            report.compacted
        );

        Ok(report)
    }

    fn ensure_root<S>(&mut self, scene: &mut S, report: &mut ReconcileReport) -> CameraResult<H>
    where
        S: SceneBinding<Handle = H>,
    {
        if let Some(root) = self.root.as_ref().filter(|root| scene.is_alive(root)) {
            return Ok(root.clone());
        }

        let root = scene.create(&self.name, ObjectKind::Group)?;
        self.root = Some(root.clone());
        report.root_created = true;
        Ok(root)
    }

    /// Drops slots whose objects were destroyed outside the array.
    fn compact<S>(&mut self, scene: &S) -> usize
    where
        S: SceneBinding<Handle = H>,
    {
        let before = self.slots.len();
        self.slots.retain(|slot| scene.is_alive(&slot.handle));
        let dropped = before - self.slots.len();

        if dropped > 0 {
            log::warn!(
                "camera array '{}': dropped {} slot(s) destroyed outside the array",
                self.name,
                dropped
            );
        }
        dropped
    }

    /// Renames every slot whose host name does not match its index at
    /// `width`. The host name wins over the cached one, so objects renamed
    /// by hand are corrected too.
    fn rename_survivors<S>(&mut self, scene: &mut S, width: usize) -> CameraResult<usize>
    where
        S: SceneBinding<Handle = H>,
    {
        let mut renamed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let expected = slot_name(index, width);
            if scene.name(&slot.handle)? != expected {
                scene.set_name(&slot.handle, &expected)?;
                renamed += 1;
            }
            slot.name = expected;
        }
        Ok(renamed)
    }

    fn create_slots<S>(
        &mut self,
        scene: &mut S,
        root: &H,
        placements: &[SlotPlacement],
    ) -> CameraResult<usize>
    where
        S: SceneBinding<Handle = H>,
    {
        let start = self.slots.len();
        self.slots.reserve(placements.len() - start);

        for placement in &placements[start..] {
            let handle = scene.create(&placement.name, ObjectKind::Camera)?;
            if let Err(err) = scene.set_parent(&handle, root) {
                // untracked objects must not outlive a failed pass
                scene.destroy(&handle);
                return Err(err);
            }
            self.slots.push(CameraSlot::new(handle, placement.name.clone()));
        }

        Ok(placements.len() - start)
    }

    /// Destroys slots from the end down to `target`.
    fn destroy_excess<S>(&mut self, scene: &mut S, target: usize) -> usize
    where
        S: SceneBinding<Handle = H>,
    {
        let mut destroyed = 0;
        while self.slots.len() > target {
            if let Some(slot) = self.slots.pop() {
                scene.destroy(&slot.handle);
                destroyed += 1;
            }
        }
        self.slots.shrink_to(target);
        destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MemoryScene, NodeId};
    use crate::spec::{CameraKinematics, Transform};

    /// Spec producing exactly `count` slots one meter apart.
    fn spec_for(count: usize) -> CameraArraySpec {
        CameraArraySpec::new(
            count as f64,
            CameraKinematics {
                position_offset: 0.0,
                velocity: 1.0,
                sampling_resolution: 1.0,
                rotation_velocity: 30.0,
            },
        )
    }

    fn names(array: &CameraArray<NodeId>) -> Vec<String> {
        array.slots().iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_first_reconcile_creates_root_and_slots() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        let report = array.reconcile(&spec_for(3), &mut scene).unwrap();

        assert!(report.root_created);
        assert_eq!(report.created, 3);
        let root = *array.root().unwrap();
        assert_eq!(scene.name(&root).unwrap(), "Rig");
        assert_eq!(scene.children(&root).unwrap().len(), 3);
        assert_eq!(scene.len(), 4);
    }

    #[test]
    fn test_reconcile_same_count_is_stable() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(4), &mut scene).unwrap();
        let handles: Vec<NodeId> = array.slots().iter().map(|s| s.handle).collect();

        let report = array.reconcile(&spec_for(4), &mut scene).unwrap();
        assert_eq!(report, ReconcileReport::default());
        let after: Vec<NodeId> = array.slots().iter().map(|s| s.handle).collect();
        assert_eq!(handles, after);
    }

    #[test]
    fn test_zero_velocity_leaves_array_untouched() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(4), &mut scene).unwrap();
        let before = array.clone();

        let mut spec = spec_for(4);
        spec.kinematics.velocity = 0.0;
        assert!(matches!(
            array.reconcile(&spec, &mut scene),
            Err(CameraArrayError::DivisionByZero { .. })
        ));
        assert_eq!(array, before);
        assert_eq!(scene.len(), 5);
    }

    #[test]
    fn test_recreates_destroyed_root() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(2), &mut scene).unwrap();
        let old_root = *array.root().unwrap();

        scene.destroy(&old_root);
        let report = array.reconcile(&spec_for(2), &mut scene).unwrap();

        assert!(report.root_created);
        assert_eq!(report.compacted, 2);
        assert_eq!(report.created, 2);
        assert_ne!(*array.root().unwrap(), old_root);
    }

    #[test]
    fn test_compaction_renames_shifted_slots() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(4), &mut scene).unwrap();

        let removed = array.slots()[1].handle;
        scene.destroy(&removed);

        let report = array.reconcile(&spec_for(4), &mut scene).unwrap();
        assert_eq!(report.compacted, 1);
        assert_eq!(report.created, 1);
        assert_eq!(report.renamed, 2);
        assert_eq!(
            names(&array),
            vec![
                "CylinderCamera0",
                "CylinderCamera1",
                "CylinderCamera2",
                "CylinderCamera3"
            ]
        );
    }

    #[test]
    fn test_host_rename_is_corrected() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(3), &mut scene).unwrap();

        let moved = array.slots()[1].handle;
        scene.set_name(&moved, "Renamed").unwrap();

        let report = array.reconcile(&spec_for(3), &mut scene).unwrap();
        assert_eq!(report.renamed, 1);
        assert_eq!(scene.name(&moved).unwrap(), "CylinderCamera1");
        assert_eq!(array.slots()[1].name, "CylinderCamera1");
    }

    /// Scene that refuses every reparenting request.
    struct NoParentScene(MemoryScene);

    impl SceneBinding for NoParentScene {
        type Handle = NodeId;

        fn create(&mut self, name: &str, kind: ObjectKind) -> CameraResult<NodeId> {
            self.0.create(name, kind)
        }

        fn destroy(&mut self, handle: &NodeId) {
            self.0.destroy(handle)
        }

        fn is_alive(&self, handle: &NodeId) -> bool {
            self.0.is_alive(handle)
        }

        fn name(&self, handle: &NodeId) -> CameraResult<String> {
            self.0.name(handle)
        }

        fn set_name(&mut self, handle: &NodeId, name: &str) -> CameraResult<()> {
            self.0.set_name(handle, name)
        }

        fn transform(&self, handle: &NodeId) -> CameraResult<Transform> {
            self.0.transform(handle)
        }

        fn set_transform(&mut self, handle: &NodeId, transform: Transform) -> CameraResult<()> {
            self.0.set_transform(handle, transform)
        }

        fn set_parent(&mut self, _child: &NodeId, _parent: &NodeId) -> CameraResult<()> {
            Err(CameraArrayError::Scene("refused".to_string()))
        }

        fn children(&self, parent: &NodeId) -> CameraResult<Vec<NodeId>> {
            self.0.children(parent)
        }
    }

    #[test]
    fn test_failed_parenting_leaves_no_orphan() {
        let mut scene = NoParentScene(MemoryScene::new());
        let mut array = CameraArray::new("Rig");

        let result = array.reconcile(&spec_for(3), &mut scene);
        assert!(matches!(result, Err(CameraArrayError::Scene(_))));
        assert!(array.is_empty());
        // only the root remains
        assert_eq!(scene.0.len(), 1);
    }

    #[test]
    fn test_shrink_to_zero() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(3), &mut scene).unwrap();

        let report = array.reconcile(&spec_for(0), &mut scene).unwrap();
        assert_eq!(report.destroyed, 3);
        assert!(array.is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_attach_rebuilds_from_children() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(3), &mut scene).unwrap();
        let root = *array.root().unwrap();

        let attached = CameraArray::attach(&scene, "Rig", root).unwrap();
        assert_eq!(attached, array);
        assert_eq!(attached.digit_width(), 1);
    }

    #[test]
    fn test_attach_rejects_dead_root() {
        let mut scene = MemoryScene::new();
        let root = scene.create("Rig", ObjectKind::Group).unwrap();
        scene.destroy(&root);
        assert!(matches!(
            CameraArray::attach(&scene, "Rig", root),
            Err(CameraArrayError::StaleHandle(_))
        ));
    }

    #[test]
    fn test_array_serializes_handles() {
        let mut scene = MemoryScene::new();
        let mut array = CameraArray::new("Rig");
        array.reconcile(&spec_for(2), &mut scene).unwrap();

        let json = serde_json::to_string(&array).unwrap();
        let restored: CameraArray<NodeId> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, array);
    }
}
