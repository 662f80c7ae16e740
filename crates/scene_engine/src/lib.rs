//! # Scene Engine
//!
//! Interactive 3D scene core: a scene graph of objects, per-frame behavior
//! dispatch, pointer picking with a single highlighted selection, and the
//! render loop and resize plumbing that tie it to an external renderer.
//!
//! ## Features
//!
//! - **Scene Graph**: slotmap-backed tree with depth-first traversal
//! - **Picking**: ray casting against pick shapes, layer masks, highlight
//! - **Animation**: behavior table keyed by object id
//! - **Render Loop**: idle/running driver over renderer traits
//! - **Configuration**: TOML and RON settings with defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! struct NoFrames;
//!
//! impl FrameScheduler for NoFrames {
//!     fn request_frame(&mut self) {}
//! }
//!
//! let mut ctx = SceneContext::from_settings(&SceneSettings::default());
//! let cube = ctx.spawn_pickable(SceneObject::mesh("cube", PickShape::unit_cube(), Color::WHITE));
//! ctx.attach_behavior(cube, Behavior::spin(Vec3::new(0.01, 0.01, 0.0)));
//!
//! let mut renderer = HeadlessRenderer::new(1280, 720);
//! let mut render_loop = RenderLoop::new();
//! render_loop.start(&mut NoFrames);
//! render_loop.frame(&mut ctx, &mut FixedTargetControls::default(), &mut renderer, &mut NoFrames);
//!
//! assert_eq!(ctx.click(640.0, 360.0), Some(cube));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod picking;
pub mod animation;
pub mod render;
pub mod input;
pub mod runtime;

mod error;

pub use error::EngineError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{AnimationDispatcher, AnimationHook, Behavior},
        config::{Config, ConfigError, SceneSettings},
        foundation::{
            color::Color,
            math::{Mat4, Transform, Vec3},
            time::FrameTimer,
        },
        input::{AppEvent, EventQueue, EventSender, Spawn, Viewport},
        picking::{PickLayers, PickableRegistry, PickingSystem, Raycaster, SelectionState},
        render::{
            Camera, CameraControls, FixedTargetControls, FrameScheduler, HeadlessRenderer, RenderError,
            RenderPass,
        },
        runtime::{LoopState, RenderLoop, SceneContext},
        scene::{ObjectId, ObjectKind, PickShape, SceneGraph, SceneObject, SceneTree},
        EngineError,
    };
}

#[cfg(test)]
mod tests;
