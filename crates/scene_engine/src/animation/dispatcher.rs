//! Per-frame behavior dispatch

use slotmap::SecondaryMap;

use super::Behavior;
use crate::scene::{ObjectId, SceneGraph};

/// Capability table of behaviors plus the per-frame walk that runs them
#[derive(Debug, Default)]
pub struct AnimationDispatcher {
    behaviors: SecondaryMap<ObjectId, Behavior>,
}

impl AnimationDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a behavior, replacing and returning any previous one
    pub fn attach(&mut self, id: ObjectId, behavior: Behavior) -> Option<Behavior> {
        log::trace!("Attach {:?} to {:?}", behavior, id);
        self.behaviors.insert(id, behavior)
    }

    /// Remove an object's behavior
    pub fn detach(&mut self, id: ObjectId) -> Option<Behavior> {
        self.behaviors.remove(id)
    }

    /// Whether an object has a behavior
    pub fn has_behavior(&self, id: ObjectId) -> bool {
        self.behaviors.contains_key(id)
    }

    /// Number of objects with a behavior
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Whether no object has a behavior
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Run every live member's behavior exactly once
    ///
    /// Members are visited depth-first in the scene's traversal order, so
    /// objects added since the last tick take part in this one. Behaviors of
    /// objects that are not in the scene are skipped. Returns the number of
    /// behaviors invoked.
    pub fn tick(&mut self, scene: &mut dyn SceneGraph, delta: Option<f32>) -> usize {
        if self.behaviors.is_empty() {
            return 0;
        }

        let mut invoked = 0;
        for id in scene.traversal_order() {
            let Some(behavior) = self.behaviors.get_mut(id) else {
                continue;
            };
            if let Some(object) = scene.get_mut(id) {
                behavior.apply(object, delta);
                invoked += 1;
            }
        }
        invoked
    }
}
