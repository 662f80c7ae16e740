//! Scene runtime
//!
//! [`SceneContext`] owns the live scene and everything that reads or mutates
//! it; [`RenderLoop`] drives it once per host frame.

mod context;
mod render_loop;

pub use context::SceneContext;
pub use render_loop::{LoopState, RenderLoop};
