//! Rendering seams
//!
//! The scene core does not draw anything itself. It drives an external
//! renderer through [`RenderPass`], asks the host for frames through
//! [`FrameScheduler`], and lets [`CameraControls`] adjust the camera once per
//! frame. [`HeadlessRenderer`] stands in when no GPU backend is attached.

pub mod camera;
mod backend;
mod headless;
pub mod resize;

pub use backend::{CameraControls, FixedTargetControls, FrameScheduler, RenderError, RenderPass};
pub use camera::Camera;
pub use headless::HeadlessRenderer;
