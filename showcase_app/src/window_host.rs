//! GLFW window host
//!
//! Feeds window input into the event queue and runs one loop iteration per
//! requested frame until the window closes. Drawing goes through the
//! headless renderer; the window supplies input, size and frame pacing.

use glfw::{Action, MouseButton, WindowEvent};
use scene_engine::config::WindowSettings;
use scene_engine::foundation::time::NOMINAL_FRAME_SECONDS;
use scene_engine::input::{AppEvent, EventQueue, Viewport};
use scene_engine::render::{CameraControls, FrameScheduler, HeadlessRenderer};
use scene_engine::runtime::{RenderLoop, SceneContext};
use scene_engine::EngineError;

/// Frame requests recorded between window polls
#[derive(Debug, Default)]
struct PollScheduler {
    requested: bool,
}

impl FrameScheduler for PollScheduler {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}

/// Window plus the event plumbing around it
pub struct WindowHost {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    scheduler: PollScheduler,
    renderer: HeadlessRenderer,
}

impl WindowHost {
    /// Open a resizable window
    pub fn new(settings: &WindowSettings) -> Result<Self, EngineError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| EngineError::Host(format!("GLFW initialization failed: {e:?}")))?;
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(settings.width, settings.height, &settings.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| EngineError::Host("Window creation failed".to_string()))?;

        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_mouse_button_polling(true);
        window.set_key_polling(true);

        let (width, height) = window.get_framebuffer_size();
        log::info!("Window '{}' created ({}x{})", settings.title, width, height);
        Ok(Self {
            glfw,
            window,
            events,
            scheduler: PollScheduler::default(),
            renderer: HeadlessRenderer::new(width.max(0) as u32, height.max(0) as u32),
        })
    }

    /// Run until the window closes; returns the number of frames run
    pub fn run(
        &mut self,
        ctx: &mut SceneContext,
        render_loop: &mut RenderLoop,
        controls: &mut dyn CameraControls,
        queue: &EventQueue,
    ) -> u64 {
        let framebuffer = framebuffer_viewport(&self.window);
        ctx.on_resize(&mut self.renderer, framebuffer.width, framebuffer.height);
        render_loop.start(&mut self.scheduler);

        while !self.window.should_close() {
            // Sleep until input arrives or the next frame is due
            self.glfw.wait_events_timeout(f64::from(NOMINAL_FRAME_SECONDS));
            for (_, event) in glfw::flush_messages(&self.events) {
                if let Some(event) = self.translate(event) {
                    queue.push(event);
                }
            }

            for event in queue.drain() {
                if !ctx.handle_event(event, &mut self.renderer) {
                    self.window.set_should_close(true);
                }
            }

            if std::mem::take(&mut self.scheduler.requested) {
                render_loop.frame(ctx, controls, &mut self.renderer, &mut self.scheduler);
            }
        }

        log::info!("Window closed after {} frames", render_loop.frame_count());
        render_loop.frame_count()
    }

    fn translate(&self, event: WindowEvent) -> Option<AppEvent> {
        match event {
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                let (x, y) = self.window.get_cursor_pos();
                let (x, y) = framebuffer_viewport(&self.window).scale_pointer(window_viewport(&self.window), x, y);
                Some(AppEvent::Click { x, y })
            }
            WindowEvent::FramebufferSize(width, height) => Some(AppEvent::Resized {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            }),
            WindowEvent::Close | WindowEvent::Key(glfw::Key::Escape, _, Action::Press, _) => {
                Some(AppEvent::CloseRequested)
            }
            _ => None,
        }
    }
}

/// Client area in screen units, which cursor positions are reported in
fn window_viewport(window: &glfw::PWindow) -> Viewport {
    let (width, height) = window.get_size();
    Viewport::new(width.max(0) as u32, height.max(0) as u32)
}

/// Drawable size in pixels, which the scene viewport tracks
fn framebuffer_viewport(window: &glfw::PWindow) -> Viewport {
    let (width, height) = window.get_framebuffer_size();
    Viewport::new(width.max(0) as u32, height.max(0) as u32)
}
