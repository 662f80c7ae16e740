//! Viewport resize handling

use crate::input::Viewport;

use super::{Camera, RenderPass};

/// Apply a host resize to the viewport, renderer and camera
///
/// The renderer output becomes `(width, height)` and the camera aspect
/// `width / height` immediately; nothing is deferred to the next frame.
/// Zero dimensions (a minimized window) are stored as reported but count as
/// one pixel for the aspect ratio so the projection stays finite.
pub fn apply_resize(
    viewport: &mut Viewport,
    camera: &mut Camera,
    renderer: &mut dyn RenderPass,
    width: u32,
    height: u32,
) {
    *viewport = Viewport::new(width, height);
    renderer.set_size(width, height);
    camera.set_aspect_ratio(viewport.aspect());
    camera.update_projection_matrix();
    log::debug!("Viewport resized to {}x{}", width, height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4;
    use crate::render::HeadlessRenderer;
    use approx::assert_relative_eq;

    #[test]
    fn test_resize_updates_renderer_and_camera() {
        let mut viewport = Viewport::new(800, 600);
        let mut camera = Camera::default();
        let mut renderer = HeadlessRenderer::new(800, 600);

        apply_resize(&mut viewport, &mut camera, &mut renderer, 1024, 512);

        assert_eq!(viewport, Viewport::new(1024, 512));
        assert_eq!(renderer.size(), (1024, 512));
        assert_relative_eq!(camera.aspect, 2.0);
        assert_eq!(
            camera.projection_matrix(),
            Mat4::new_perspective(2.0, camera.fov, camera.near, camera.far)
        );
    }

    #[test]
    fn test_minimized_window_keeps_projection_finite() {
        let mut viewport = Viewport::new(800, 600);
        let mut camera = Camera::default();
        let mut renderer = HeadlessRenderer::new(800, 600);

        apply_resize(&mut viewport, &mut camera, &mut renderer, 640, 0);

        assert_eq!(renderer.size(), (640, 0));
        assert_relative_eq!(camera.aspect, 640.0);
        assert!(camera.projection_matrix().iter().all(|v| v.is_finite()));
    }
}
