//! Render pass that draws nothing

use crate::scene::{ObjectKind, SceneGraph};

use super::{Camera, RenderError, RenderPass};

/// Render pass for hosts without a GPU backend
///
/// Walks the scene like a real pass would and records what it saw, which
/// keeps the render loop observable in tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    width: u32,
    height: u32,
    frames_rendered: u64,
    last_drawn: usize,
    last_highlighted: usize,
}

impl HeadlessRenderer {
    /// Create a renderer with the given output size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Number of completed passes
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Drawable objects (everything but groups and lights) in the last pass
    pub fn last_drawn(&self) -> usize {
        self.last_drawn
    }

    /// Objects with the emissive overlay on in the last pass
    pub fn last_highlighted(&self) -> usize {
        self.last_highlighted
    }
}

impl RenderPass for HeadlessRenderer {
    fn render(&mut self, scene: &dyn SceneGraph, camera: &Camera) -> Result<(), RenderError> {
        let mut drawn = 0;
        let mut highlighted = 0;
        for object in scene.traversal_order().into_iter().filter_map(|id| scene.get(id)) {
            if matches!(object.kind, ObjectKind::Mesh | ObjectKind::Sprite) {
                drawn += 1;
            }
            if object.appearance.is_emissive() {
                highlighted += 1;
            }
        }

        self.frames_rendered += 1;
        self.last_drawn = drawn;
        self.last_highlighted = highlighted;
        log::trace!(
            "Headless pass #{}: {} drawn, {} highlighted, camera at {:?}",
            self.frames_rendered,
            drawn,
            highlighted,
            camera.position
        );
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
