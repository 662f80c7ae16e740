//! Scene graph trait and implementations
//!
//! The scene graph owns all objects and defines the traversal order used by
//! per-frame dispatch. Implementations are pluggable through [`SceneGraph`].

use slotmap::SlotMap;

use super::{ObjectId, SceneObject};
use crate::foundation::math::Mat4;

/// Trait for the hierarchy that owns scene objects
///
/// Kept object safe so a rendering backend can supply its own graph behind a
/// `Box<dyn SceneGraph>`.
pub trait SceneGraph {
    /// Add a root-level object
    fn add(&mut self, object: SceneObject) -> ObjectId;

    /// Add an object under `parent`; `None` if the parent is unknown
    fn add_child(&mut self, parent: ObjectId, object: SceneObject) -> Option<ObjectId>;

    /// Borrow an object
    fn get(&self, id: ObjectId) -> Option<&SceneObject>;

    /// Mutably borrow an object
    fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject>;

    /// Parent of an object, `None` for roots and unknown ids
    fn parent(&self, id: ObjectId) -> Option<ObjectId>;

    /// All live members, depth-first, children in insertion order
    fn traversal_order(&self) -> Vec<ObjectId>;

    /// Number of live members
    fn len(&self) -> usize;

    /// Whether an id refers to a live member
    fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Whether the graph has no members
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object-to-world matrix, composed through all ancestors
    fn world_matrix(&self, id: ObjectId) -> Option<Mat4> {
        let mut matrix = self.get(id)?.transform.to_matrix();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            let object = self.get(ancestor)?;
            matrix = object.transform.to_matrix() * matrix;
            current = self.parent(ancestor);
        }
        Some(matrix)
    }
}

#[derive(Debug)]
struct Node {
    object: SceneObject,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

/// Arena-backed scene hierarchy
///
/// Sufficient for the small, fixed scenes the showcase builds; lookups are
/// O(1) through slotmap keys and traversal is an explicit-stack DFS.
#[derive(Debug, Default)]
pub struct SceneTree {
    nodes: SlotMap<ObjectId, Node>,
    roots: Vec<ObjectId>,
}

impl SceneTree {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Children of a node in insertion order
    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.nodes
            .get(id)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    /// Root-level members in insertion order
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    fn insert(&mut self, object: SceneObject, parent: Option<ObjectId>) -> ObjectId {
        log::trace!("Scene add '{}' ({:?})", object.name, object.kind);
        self.nodes.insert(Node {
            object,
            parent,
            children: Vec::new(),
        })
    }
}

impl SceneGraph for SceneTree {
    fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = self.insert(object, None);
        self.roots.push(id);
        id
    }

    fn add_child(&mut self, parent: ObjectId, object: SceneObject) -> Option<ObjectId> {
        if !self.nodes.contains_key(parent) {
            log::warn!("Scene add_child: unknown parent {:?}", parent);
            return None;
        }
        let id = self.insert(object, Some(parent));
        self.nodes.get_mut(parent)?.children.push(id);
        Some(id)
    }

    fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.nodes.get(id).map(|node| &node.object)
    }

    fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.nodes.get_mut(id).map(|node| &mut node.object)
    }

    fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    fn traversal_order(&self) -> Vec<ObjectId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<ObjectId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }

        order
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
