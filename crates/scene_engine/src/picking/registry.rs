//! Registry of objects eligible for pointer picking

use bitflags::bitflags;

use crate::scene::ObjectId;

bitflags! {
    /// Layer bits for filtering pick candidates
    ///
    /// A pick considers an entry when the entry's layers intersect the pick
    /// mask. Entries registered without explicit layers carry every layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PickLayers: u32 {
        /// World objects
        const WORLD = 0b0001;
        /// UI elements
        const UI = 0b0010;
        /// Debug gizmos
        const GIZMO = 0b0100;
        /// Effects
        const EFFECTS = 0b1000;
    }
}

/// Flat, ordered collection of pickable objects
///
/// Insertion order is preserved and used as the tie-break between hits at
/// equal distance. There is no removal.
#[derive(Debug, Default, Clone)]
pub struct PickableRegistry {
    ids: Vec<ObjectId>,
    layers: Vec<PickLayers>,
}

impl PickableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object on every layer
    ///
    /// Returns `false` (and leaves the registry unchanged) if the object is
    /// already registered.
    pub fn register(&mut self, id: ObjectId) -> bool {
        self.register_with_layers(id, PickLayers::all())
    }

    /// Append an object on specific layers
    pub fn register_with_layers(&mut self, id: ObjectId, layers: PickLayers) -> bool {
        if self.contains(id) {
            log::debug!("Pickable {:?} already registered", id);
            return false;
        }
        self.ids.push(id);
        self.layers.push(layers);
        true
    }

    /// Every registered object in insertion order
    pub fn all(&self) -> &[ObjectId] {
        &self.ids
    }

    /// Registered objects whose layers intersect `mask`, in insertion order
    pub fn candidates(&self, mask: PickLayers) -> Vec<ObjectId> {
        if mask.is_all() {
            return self.ids.clone();
        }
        self.ids
            .iter()
            .zip(&self.layers)
            .filter(|(_, layers)| layers.intersects(mask))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Whether an object is registered
    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
