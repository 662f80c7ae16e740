//! Per-frame object behaviors
//!
//! Behaviors live in a capability table keyed by [`ObjectId`](crate::scene::ObjectId)
//! rather than on the objects themselves; most objects have none. Each frame
//! the [`AnimationDispatcher`] walks the scene once and runs the behaviors it
//! finds.

mod behavior;
mod dispatcher;

pub use behavior::{AnimationHook, Behavior};
pub use dispatcher::AnimationDispatcher;
