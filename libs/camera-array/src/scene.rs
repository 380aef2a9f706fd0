//! # Scene Binding
//!
//! Interface to the host scene graph that owns camera objects.
//!
//! The planner never inspects a handle; it only passes handles back to the
//! binding. Hosts that persist scenes keep the handle-to-object mapping
//! themselves (a serialized [`crate::CameraArray`] is that mapping).

use crate::error::{CameraArrayError, CameraResult};
use crate::spec::Transform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of object to create in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Empty transform used as a parent
    Group,
    /// Object carrying a camera
    Camera,
}

/// Operations the camera array needs from a host scene.
pub trait SceneBinding {
    /// Opaque reference to a scene object.
    type Handle: Clone + PartialEq + fmt::Debug;

    /// Creates a named object at the scene root.
    fn create(&mut self, name: &str, kind: ObjectKind) -> CameraResult<Self::Handle>;

    /// Destroys an object and its children. Dead handles are ignored.
    fn destroy(&mut self, handle: &Self::Handle);

    /// Whether `handle` still refers to a live object.
    fn is_alive(&self, handle: &Self::Handle) -> bool;

    /// Current object name.
    fn name(&self, handle: &Self::Handle) -> CameraResult<String>;

    /// Renames an object.
    fn set_name(&mut self, handle: &Self::Handle, name: &str) -> CameraResult<()>;

    /// Current world transform.
    fn transform(&self, handle: &Self::Handle) -> CameraResult<Transform>;

    /// Sets the world transform.
    fn set_transform(&mut self, handle: &Self::Handle, transform: Transform) -> CameraResult<()>;

    /// Attaches `child` under `parent`.
    fn set_parent(&mut self, child: &Self::Handle, parent: &Self::Handle) -> CameraResult<()>;

    /// Direct children of `parent` in attachment order.
    fn children(&self, parent: &Self::Handle) -> CameraResult<Vec<Self::Handle>>;
}

/// Handle into a [`MemoryScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

#[derive(Debug, Clone)]
struct Node {
    name: String,
    kind: ObjectKind,
    transform: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-process scene graph for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    nodes: BTreeMap<NodeId, Node>,
    next_id: u64,
}

impl MemoryScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Kind of a live object.
    pub fn kind(&self, handle: &NodeId) -> Option<ObjectKind> {
        self.nodes.get(handle).map(|node| node.kind)
    }

    /// Parent of a live object.
    pub fn parent(&self, handle: &NodeId) -> Option<NodeId> {
        self.nodes.get(handle).and_then(|node| node.parent)
    }

    fn node(&self, handle: &NodeId) -> CameraResult<&Node> {
        self.nodes
            .get(handle)
            .ok_or_else(|| CameraArrayError::StaleHandle(format!("{handle:?}")))
    }

    fn node_mut(&mut self, handle: &NodeId) -> CameraResult<&mut Node> {
        self.nodes
            .get_mut(handle)
            .ok_or_else(|| CameraArrayError::StaleHandle(format!("{handle:?}")))
    }

    fn detach(&mut self, handle: &NodeId) {
        let parent = self.nodes.get(handle).and_then(|node| node.parent);
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| child != handle);
        }
    }
}

impl SceneBinding for MemoryScene {
    type Handle = NodeId;

    fn create(&mut self, name: &str, kind: ObjectKind) -> CameraResult<NodeId> {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                name: name.to_string(),
                kind,
                transform: Transform::default(),
                parent: None,
                children: Vec::new(),
            },
        );
        Ok(id)
    }

    fn destroy(&mut self, handle: &NodeId) {
        self.detach(handle);

        let mut pending = vec![*handle];
        while let Some(id) = pending.pop() {
            if let Some(node) = self.nodes.remove(&id) {
                pending.extend(node.children);
            }
        }
    }

    fn is_alive(&self, handle: &NodeId) -> bool {
        self.nodes.contains_key(handle)
    }

    fn name(&self, handle: &NodeId) -> CameraResult<String> {
        Ok(self.node(handle)?.name.clone())
    }

    fn set_name(&mut self, handle: &NodeId, name: &str) -> CameraResult<()> {
        self.node_mut(handle)?.name = name.to_string();
        Ok(())
    }

    fn transform(&self, handle: &NodeId) -> CameraResult<Transform> {
        Ok(self.node(handle)?.transform)
    }

    fn set_transform(&mut self, handle: &NodeId, transform: Transform) -> CameraResult<()> {
        self.node_mut(handle)?.transform = transform;
        Ok(())
    }

    fn set_parent(&mut self, child: &NodeId, parent: &NodeId) -> CameraResult<()> {
        if child == parent {
            return Err(CameraArrayError::Scene(format!(
                "cannot parent {child:?} to itself"
            )));
        }
        self.node(child)?;
        self.node(parent)?;

        self.detach(child);
        self.node_mut(child)?.parent = Some(*parent);
        self.node_mut(parent)?.children.push(*child);
        Ok(())
    }

    fn children(&self, parent: &NodeId) -> CameraResult<Vec<NodeId>> {
        Ok(self.node(parent)?.children.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_create_and_rename() {
        let mut scene = MemoryScene::new();
        let id = scene.create("a", ObjectKind::Camera).unwrap();
        assert!(scene.is_alive(&id));
        assert_eq!(scene.kind(&id), Some(ObjectKind::Camera));
        scene.set_name(&id, "b").unwrap();
        assert_eq!(scene.name(&id).unwrap(), "b");
    }

    #[test]
    fn test_transform_roundtrip() {
        let mut scene = MemoryScene::new();
        let id = scene.create("a", ObjectKind::Group).unwrap();
        let transform = Transform::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 45.0, 0.0));
        scene.set_transform(&id, transform).unwrap();
        assert_eq!(scene.transform(&id).unwrap(), transform);
    }

    #[test]
    fn test_destroy_removes_children() {
        let mut scene = MemoryScene::new();
        let root = scene.create("root", ObjectKind::Group).unwrap();
        let child = scene.create("child", ObjectKind::Camera).unwrap();
        scene.set_parent(&child, &root).unwrap();
        assert_eq!(scene.children(&root).unwrap(), vec![child]);
        assert_eq!(scene.parent(&child), Some(root));

        scene.destroy(&root);
        assert!(!scene.is_alive(&child));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_destroy_child_detaches_from_parent() {
        let mut scene = MemoryScene::new();
        let root = scene.create("root", ObjectKind::Group).unwrap();
        let child = scene.create("child", ObjectKind::Camera).unwrap();
        scene.set_parent(&child, &root).unwrap();

        scene.destroy(&child);
        assert!(scene.children(&root).unwrap().is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_stale_handle_errors() {
        let mut scene = MemoryScene::new();
        let id = scene.create("a", ObjectKind::Camera).unwrap();
        scene.destroy(&id);
        assert!(matches!(
            scene.name(&id),
            Err(CameraArrayError::StaleHandle(_))
        ));
        // destroying twice is harmless
        scene.destroy(&id);
    }

    #[test]
    fn test_reparent_moves_child() {
        let mut scene = MemoryScene::new();
        let a = scene.create("a", ObjectKind::Group).unwrap();
        let b = scene.create("b", ObjectKind::Group).unwrap();
        let c = scene.create("c", ObjectKind::Camera).unwrap();
        scene.set_parent(&c, &a).unwrap();
        scene.set_parent(&c, &b).unwrap();
        assert!(scene.children(&a).unwrap().is_empty());
        assert_eq!(scene.children(&b).unwrap(), vec![c]);
        assert!(scene.set_parent(&a, &a).is_err());
    }
}
