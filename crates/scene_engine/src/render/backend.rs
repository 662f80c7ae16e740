//! Traits implemented by the rendering backend and the host

use crate::foundation::math::Vec3;
use crate::scene::SceneGraph;

use super::Camera;

/// Errors reported by an external render pass
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Backend failure while drawing the frame
    #[error("Render pass failed: {0}")]
    PassFailed(String),
}

/// One render pass over the whole scene
pub trait RenderPass {
    /// Draw the scene from the camera's point of view
    fn render(&mut self, scene: &dyn SceneGraph, camera: &Camera) -> Result<(), RenderError>;

    /// Resize the output surface
    fn set_size(&mut self, width: u32, height: u32);

    /// Current output size
    fn size(&self) -> (u32, u32);
}

/// Host primitive that runs the next loop iteration on the next display refresh
pub trait FrameScheduler {
    /// Ask for one more frame
    fn request_frame(&mut self);
}

/// Per-frame camera controller (orbit, fly, ...)
pub trait CameraControls {
    /// Update the camera before rendering
    fn update(&mut self, camera: &mut Camera);
}

/// Controls that keep the camera aimed at a fixed point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTargetControls {
    /// Look-at point in world space
    pub target: Vec3,
}

impl FixedTargetControls {
    /// Aim at `target`
    pub fn new(target: Vec3) -> Self {
        Self { target }
    }
}

impl Default for FixedTargetControls {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

impl CameraControls for FixedTargetControls {
    fn update(&mut self, camera: &mut Camera) {
        if camera.target != self.target {
            camera.set_target(self.target);
        }
    }
}
