//! Scripted host without a window
//!
//! Stands in for a display's frame callbacks: every requested frame is
//! delivered in turn until the frame budget runs out or a close event
//! arrives. Scripted input is posted to the event queue before its frame.
//! Paced runs hold every frame to the nominal frame time so work arriving
//! from other threads lands mid-run.

use std::time::{Duration, Instant};

use scene_engine::foundation::time::NOMINAL_FRAME_SECONDS;
use scene_engine::input::{AppEvent, EventQueue};
use scene_engine::render::{CameraControls, FrameScheduler, HeadlessRenderer, RenderPass};
use scene_engine::runtime::{RenderLoop, SceneContext};

use crate::config::{HostSettings, ScriptedEvent};

/// Frame source counting outstanding frame requests
#[derive(Debug, Default)]
pub struct HeadlessScheduler {
    pending: u64,
}

impl HeadlessScheduler {
    /// Take one pending frame request
    fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

impl FrameScheduler for HeadlessScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
    }
}

/// Summary of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames the loop completed
    pub frames: u64,
    /// Whether the run ended on a close event
    pub closed: bool,
}

/// Drives a render loop for a bounded number of frames
pub struct HeadlessHost {
    settings: HostSettings,
    scheduler: HeadlessScheduler,
    renderer: HeadlessRenderer,
}

impl HeadlessHost {
    /// Create a host with a headless renderer of the given size
    pub fn new(settings: HostSettings, width: u32, height: u32) -> Self {
        Self {
            settings,
            scheduler: HeadlessScheduler::default(),
            renderer: HeadlessRenderer::new(width, height),
        }
    }

    /// Renderer the host draws into
    pub fn renderer(&self) -> &HeadlessRenderer {
        &self.renderer
    }

    /// Start the loop and run it until the budget is spent or the app closes
    pub fn run(
        &mut self,
        ctx: &mut SceneContext,
        render_loop: &mut RenderLoop,
        controls: &mut dyn CameraControls,
        queue: &EventQueue,
    ) -> RunSummary {
        log::info!(
            "Headless host running for up to {} frames{}",
            self.settings.max_frames,
            if self.settings.paced { " at display pace" } else { "" }
        );
        render_loop.start(&mut self.scheduler);

        let interval = Duration::from_secs_f32(NOMINAL_FRAME_SECONDS);
        let mut frame = 0;
        let mut closed = false;
        while frame < self.settings.max_frames && self.scheduler.take() {
            let frame_start = Instant::now();
            for scripted in self.settings.script.iter().filter(|e| e.frame == frame) {
                queue.push(scripted.action.into());
            }

            for event in queue.drain() {
                if !ctx.handle_event(event, &mut self.renderer) {
                    closed = true;
                }
            }
            if closed {
                break;
            }

            render_loop.frame(ctx, controls, &mut self.renderer, &mut self.scheduler);
            frame += 1;

            if self.settings.paced {
                std::thread::sleep(interval.saturating_sub(frame_start.elapsed()));
            }
        }

        let (width, height) = self.renderer.size();
        log::info!(
            "Headless host finished after {} frames ({}x{}, {} drawn, {} highlighted, {:.1} fps)",
            frame,
            width,
            height,
            self.renderer.last_drawn(),
            self.renderer.last_highlighted(),
            render_loop.timer().average_fps()
        );
        RunSummary { frames: frame, closed }
    }
}

impl std::fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("max_frames", &self.settings.max_frames)
            .field("scripted", &self.settings.script.len())
            .field("pending", &self.scheduler.pending)
            .finish_non_exhaustive()
    }
}

/// Script events that fall after the frame budget
pub fn unreachable_events(settings: &HostSettings) -> Vec<&ScriptedEvent> {
    settings
        .script
        .iter()
        .filter(|e| e.frame >= settings.max_frames)
        .collect()
}
