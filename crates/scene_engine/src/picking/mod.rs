//! Pointer picking
//!
//! Orchestrates the picking pipeline: pointer → camera ray → registry
//! candidates → nearest hit → selection state.

mod ray;
mod registry;
mod selection;

pub use ray::{Ray, RayHit, Raycaster, ShapeRaycaster};
pub use registry::{PickLayers, PickableRegistry};
pub use selection::{PickingSystem, SelectionState};
