//! Scene management
//!
//! The scene graph owns every renderable object. Other subsystems (picking,
//! animation, rendering) address objects through [`ObjectId`] handles and
//! never hold references into the graph across frames.
//!
//! ```text
//! SceneTree (ownership, hierarchy)
//!      ↓ ObjectId
//! PickableRegistry / AnimationDispatcher / SelectionState
//! ```

mod object;
mod scene_graph;
mod shape;

pub use object::{Appearance, ObjectId, ObjectKind, SceneObject};
pub use scene_graph::{SceneGraph, SceneTree};
pub use shape::PickShape;
