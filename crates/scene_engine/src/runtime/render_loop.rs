//! Render loop driver

use crate::foundation::time::FrameTimer;
use crate::render::{CameraControls, FrameScheduler, RenderPass};

use super::SceneContext;

/// Whether the loop has been started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Not started; frames are ignored
    #[default]
    Idle,
    /// Every frame callback runs one iteration
    Running,
}

/// Drives one iteration per host frame callback
///
/// Each iteration runs, in order: behavior tick, camera controls update,
/// render pass, request for the next frame. There is no stop transition;
/// the host ends the process when it wants to.
#[derive(Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
    frame_count: u64,
    timer: FrameTimer,
    use_frame_delta: bool,
}

impl RenderLoop {
    /// Create an idle loop that ticks behaviors without a frame delta
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: pass the measured frame delta to behaviors
    pub fn with_frame_delta(mut self, enabled: bool) -> Self {
        self.use_frame_delta = enabled;
        self
    }

    /// Current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether the loop is running
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Iterations completed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frame timing
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Start the loop and request the first frame
    ///
    /// Starting a running loop does nothing, so no second frame chain is
    /// ever scheduled.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.is_running() {
            log::warn!("Render loop already running, ignoring start");
            return;
        }
        self.state = LoopState::Running;
        log::info!("Render loop started");
        scheduler.request_frame();
    }

    /// Run one iteration; returns `false` if the loop is idle
    ///
    /// A failing render pass is logged and the next frame is still
    /// requested.
    pub fn frame(
        &mut self,
        ctx: &mut SceneContext,
        controls: &mut dyn CameraControls,
        renderer: &mut dyn RenderPass,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if !self.is_running() {
            log::debug!("Frame callback while idle, ignoring");
            return false;
        }

        let measured = self.timer.tick();
        let delta = if self.use_frame_delta { measured } else { None };

        let animated = ctx.tick(delta);
        controls.update(ctx.camera_mut());
        if let Err(e) = ctx.render(renderer) {
            log::error!("Render pass failed on frame {}: {}", self.frame_count, e);
        }
        scheduler.request_frame();

        self.frame_count += 1;
        log::trace!("Frame {} done, {} behaviors ran", self.frame_count, animated);
        true
    }
}
